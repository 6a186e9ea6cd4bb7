//! Error types for the onboarding core.

/// Credential-provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for {email}")]
    DuplicateAccount { email: String },

    #[error("Credential rejected: {reason}")]
    WeakCredential { reason: String },

    #[error("Provider returned no uid after a successful call")]
    MissingUid,

    #[error("Auth transport error: {0}")]
    Transport(String),
}

/// Profile-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Profile not found for uid {uid} in {collection}")]
    NotFound { uid: String, collection: String },

    #[error("Profile serialization failed: {0}")]
    Serialization(String),

    #[error("Store transport error: {0}")]
    Transport(String),
}

/// Profile-construction errors. These are the loud-failure paths of the
/// factory: roles that must never yield a persistable profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("Admin profiles are not supported by this flow")]
    AdminUnsupported,

    #[error("No profile can be built for an undefined role")]
    UndefinedRole,
}
