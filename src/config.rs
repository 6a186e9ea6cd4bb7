//! Configuration types.

use std::time::Duration;

/// Onboarding flow configuration.
#[derive(Debug, Clone)]
pub struct OnboardConfig {
    /// How long a successful signup keeps its success message on screen
    /// before the flow reports completion to the caller.
    pub success_display_delay: Duration,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            success_display_delay: Duration::from_millis(1500),
        }
    }
}

impl OnboardConfig {
    /// Config with no display delay, for deterministic tests.
    pub fn immediate() -> Self {
        Self {
            success_display_delay: Duration::ZERO,
        }
    }
}
