//! Login flow and session-state watcher.
//!
//! The watcher is the only long-lived, push-based integration point in the
//! core: it subscribes once to the credential provider's auth-state stream
//! for the lifetime of the flow and mirrors every emission into local state.

use std::sync::Arc;

use futures::StreamExt;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::outcome::Outcome;
use crate::ports::AuthProvider;

/// Observable login state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    pub loading: bool,
    pub logged_in: bool,
    pub error: Option<String>,
}

/// Login flow. Construction subscribes the session watcher; dropping the
/// flow releases the subscription.
pub struct LoginFlow {
    auth: Arc<dyn AuthProvider>,
    form: Arc<RwLock<LoginForm>>,
    watcher: JoinHandle<()>,
}

impl LoginFlow {
    pub fn new(auth: Arc<dyn AuthProvider>) -> Self {
        let form = Arc::new(RwLock::new(LoginForm::default()));

        let mut stream = auth.auth_state();
        let watched = Arc::clone(&form);
        let watcher = tokio::spawn(async move {
            while let Some(logged_in) = stream.next().await {
                tracing::debug!(logged_in, "auth state emission");
                let mut form = watched.write().await;
                form.logged_in = logged_in;
                form.error = None;
                form.loading = false;
            }
        });

        Self {
            auth,
            form,
            watcher,
        }
    }

    /// A copy of the current login state, for the UI to render.
    pub async fn snapshot(&self) -> LoginForm {
        self.form.read().await.clone()
    }

    pub async fn set_email(&self, value: &str) {
        let mut form = self.form.write().await;
        form.email = value.to_string();
        form.error = None;
    }

    pub async fn set_password(&self, value: &str) {
        let mut form = self.form.write().await;
        form.password = value.to_string();
        form.error = None;
    }

    pub async fn toggle_password_visibility(&self) {
        let mut form = self.form.write().await;
        form.password_visible = !form.password_visible;
    }

    /// Sign in with the current form credentials. Does not navigate on
    /// success; the session watcher picks up the resulting state change.
    pub async fn sign_in(&self) -> Outcome<String> {
        let (email, password) = {
            let mut form = self.form.write().await;
            form.loading = true;
            form.error = None;
            (form.email.clone(), form.password.clone())
        };
        let outcome = self.auth.sign_in(&email, &password).await;
        self.settle(outcome).await
    }

    pub async fn sign_out(&self) -> Outcome<()> {
        {
            let mut form = self.form.write().await;
            form.loading = true;
            form.error = None;
        }
        let outcome = self.auth.sign_out().await;
        self.settle(outcome).await
    }

    async fn settle<T>(&self, outcome: Outcome<T>) -> Outcome<T> {
        let mut form = self.form.write().await;
        match &outcome {
            Outcome::Ok(_) => {
                form.loading = false;
                form.error = None;
            }
            Outcome::Err { message, .. } => {
                form.loading = false;
                form.error = Some(message.clone());
            }
            // A provider that reports Pending keeps the spinner on.
            Outcome::Pending => form.loading = true,
        }
        outcome
    }
}

impl Drop for LoginFlow {
    fn drop(&mut self) {
        // Release the auth-state subscription; the task holds its own Arc
        // of the form, so a late wakeup cannot touch freed state.
        self.watcher.abort();
    }
}
