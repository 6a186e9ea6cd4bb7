//! Role-specific signup flows.
//!
//! Each flow owns its form state, applies validation on every edit, and on
//! submission chains credential creation, profile assembly, and persistence.
//! The two flows are fully independent instances; nothing is shared.

pub mod patient;
pub mod phase;
pub mod professional;

pub use patient::{PatientForm, PatientSignup};
pub use phase::SignupPhase;
pub use professional::{ProfessionalForm, ProfessionalSignup};

/// Generic message shown when submission is blocked by field errors.
pub const CHECK_FIELDS: &str = "Check the highlighted fields";

/// Fixed message for the profile-construction failure path.
pub const PROFILE_BUILD_FAILED: &str = "Could not build the user profile";

/// Message shown while a successful signup redirects.
pub const SIGNUP_SUCCESS: &str = "Account created successfully! Redirecting...";

/// Returned when submit is called again after the flow already succeeded.
pub const ALREADY_COMPLETED: &str = "Signup already completed";
