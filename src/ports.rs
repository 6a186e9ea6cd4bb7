//! The two ports the onboarding core depends on.
//!
//! Concrete transports (network auth, document databases) live behind these
//! traits; the core only sees `Outcome` values and a push stream of
//! authentication presence.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::model::{Role, UserProfile};
use crate::outcome::Outcome;

/// Credential provider: issues and verifies user credentials.
///
/// On success, the returned uid is a non-empty stable identifier. Failures
/// of any kind (network, duplicate account, weak credential) come back as
/// `Outcome::Err` with a human-readable message, never as a panic.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Push stream of "is a user currently authenticated". Emits the current
    /// value on subscription and again on every change.
    fn auth_state(&self) -> BoxStream<'static, bool>;

    async fn sign_in(&self, email: &str, password: &str) -> Outcome<String>;

    async fn sign_up(&self, email: &str, password: &str) -> Outcome<String>;

    async fn sign_out(&self) -> Outcome<()>;
}

/// Profile store: role-partitioned profile documents keyed by uid.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persist a profile into the partition for its role. Returns the uid
    /// the document was keyed by.
    async fn create_profile(&self, profile: &UserProfile) -> Outcome<String>;

    /// Fetch a profile by uid and role. A missing document is an `Err` with
    /// a "not found" message, distinct from transport failures.
    async fn get_profile(&self, uid: &str, role: Role) -> Outcome<UserProfile>;
}
