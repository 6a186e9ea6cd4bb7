//! In-memory port implementations for tests and local development.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;
use serde_json::Value;
use tokio::sync::{RwLock, watch};
use tokio_stream::wrappers::WatchStream;
use uuid::Uuid;

use crate::error::{AuthError, ProfileError, StoreError};
use crate::factory::collection_for;
use crate::model::{Patient, Professional, Role, UserProfile};
use crate::outcome::Outcome;
use crate::ports::{AuthProvider, ProfileStore};

struct Account {
    uid: String,
    password: String,
}

/// Credential provider backed by a process-local account table.
///
/// Mirrors the remote provider's observable behavior: signing up or in
/// flips the auth-state signal to true, signing out flips it to false.
pub struct MemoryAuth {
    accounts: RwLock<HashMap<String, Account>>,
    signed_in: watch::Sender<bool>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        let (signed_in, _) = watch::channel(false);
        Self {
            accounts: RwLock::new(HashMap::new()),
            signed_in,
        }
    }
}

impl Default for MemoryAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    fn auth_state(&self) -> BoxStream<'static, bool> {
        WatchStream::new(self.signed_in.subscribe()).boxed()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Outcome<String> {
        let email = email.trim();
        let accounts = self.accounts.read().await;
        match accounts.get(email) {
            Some(account) if account.password == password => {
                self.signed_in.send_replace(true);
                Outcome::ok(account.uid.clone())
            }
            _ => {
                let err = AuthError::InvalidCredentials;
                Outcome::err_with(err.to_string(), err)
            }
        }
    }

    async fn sign_up(&self, email: &str, password: &str) -> Outcome<String> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            let err = AuthError::WeakCredential {
                reason: "email and password must not be empty".to_string(),
            };
            return Outcome::err_with(err.to_string(), err);
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            let err = AuthError::DuplicateAccount {
                email: email.to_string(),
            };
            return Outcome::err_with(err.to_string(), err);
        }

        let uid = Uuid::new_v4().to_string();
        accounts.insert(
            email.to_string(),
            Account {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );
        // The provider signs the new user in, like the remote one does.
        self.signed_in.send_replace(true);
        Outcome::ok(uid)
    }

    async fn sign_out(&self) -> Outcome<()> {
        self.signed_in.send_replace(false);
        Outcome::ok(())
    }
}

/// Profile store backed by nested maps: partition name → uid → document.
pub struct MemoryStore {
    collections: RwLock<HashMap<&'static str, HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn create_profile(&self, profile: &UserProfile) -> Outcome<String> {
        let collection = match collection_for(profile.role()) {
            Ok(name) => name,
            Err(err) => return Outcome::err_with(err.to_string(), err),
        };
        let uid = profile.uid().to_string();
        if uid.is_empty() {
            return Outcome::err("Cannot persist a profile without a uid");
        }

        let document = match serde_json::to_value(profile) {
            Ok(value) => value,
            Err(err) => {
                let err = StoreError::Serialization(err.to_string());
                return Outcome::err_with(err.to_string(), err);
            }
        };

        let mut collections = self.collections.write().await;
        collections
            .entry(collection)
            .or_default()
            .insert(uid.clone(), document);
        tracing::debug!(%uid, collection, "profile stored");
        Outcome::ok(uid)
    }

    async fn get_profile(&self, uid: &str, role: Role) -> Outcome<UserProfile> {
        let collection = match collection_for(role) {
            Ok(name) => name,
            Err(err) => return Outcome::err_with(err.to_string(), err),
        };

        let collections = self.collections.read().await;
        let document = match collections.get(collection).and_then(|docs| docs.get(uid)) {
            Some(value) => value.clone(),
            None => {
                let err = StoreError::NotFound {
                    uid: uid.to_string(),
                    collection: collection.to_string(),
                };
                return Outcome::err_with(err.to_string(), err);
            }
        };

        let decoded = match role {
            Role::Patient => {
                serde_json::from_value::<Patient>(document).map(UserProfile::Patient)
            }
            Role::Professional => {
                serde_json::from_value::<Professional>(document).map(UserProfile::Professional)
            }
            Role::Admin => {
                let err = ProfileError::AdminUnsupported;
                return Outcome::err_with(err.to_string(), err);
            }
            Role::Undefined => {
                // collection_for already rejected this, but keep the arm total.
                let err = ProfileError::UndefinedRole;
                return Outcome::err_with(err.to_string(), err);
            }
        };

        match decoded {
            Ok(profile) => Outcome::ok(profile),
            Err(err) => {
                let err = StoreError::Serialization(err.to_string());
                Outcome::err_with(err.to_string(), err)
            }
        }
    }
}
