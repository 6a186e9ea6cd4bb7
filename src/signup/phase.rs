//! Signup state machine phases.

use serde::{Deserialize, Serialize};

/// The phases of a signup flow.
///
/// `Editing` accepts field updates; a valid submit moves to `Submitting`;
/// from there the flow either reaches the terminal `Succeeded` or falls
/// back to `Editing` with an error message so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupPhase {
    Editing,
    Submitting,
    Succeeded,
}

impl SignupPhase {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: SignupPhase) -> bool {
        use SignupPhase::*;
        matches!(
            (self, target),
            (Editing, Submitting) | (Submitting, Succeeded) | (Submitting, Editing)
        )
    }

    /// Whether this phase is terminal (the account exists and is stored).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl Default for SignupPhase {
    fn default() -> Self {
        Self::Editing
    }
}

impl std::fmt::Display for SignupPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Editing => "editing",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
        };
        write!(f, "{s}")
    }
}
