//! Professional signup: form state and the submission pipeline.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::config::OnboardConfig;
use crate::factory::create_profile;
use crate::model::{Discipline, Gender, Role};
use crate::outcome::Outcome;
use crate::ports::{AuthProvider, ProfileStore};
use crate::validate::{
    validate_confirm, validate_dob, validate_email, validate_gender, validate_license,
    validate_name, validate_password, validate_terms,
};

use super::phase::SignupPhase;
use super::{ALREADY_COMPLETED, CHECK_FIELDS, PROFILE_BUILD_FAILED, SIGNUP_SUCCESS};

const SELECT_SPECIALTY: &str = "Select a specialty";

/// Raw professional form state plus per-field errors (empty = valid).
///
/// Carries date of birth and gender like the patient form even though the
/// persisted professional document does not include them; the factory
/// ignores the extra attributes.
#[derive(Debug, Clone, Default)]
pub struct ProfessionalForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub license_number: String,
    /// None until the user picks one; submission requires a choice.
    pub discipline: Option<Discipline>,
    pub dob: String,
    pub gender: Gender,
    pub accepted_terms: bool,

    pub password_visible: bool,
    pub confirm_visible: bool,
    pub loading: bool,
    pub phase: SignupPhase,

    pub success_message: String,
    pub error_message: String,

    pub full_name_error: String,
    pub email_error: String,
    pub password_error: String,
    pub confirm_password_error: String,
    pub license_error: String,
    pub discipline_error: String,
    pub dob_error: String,
    pub gender_error: String,
    pub terms_error: String,
}

impl ProfessionalForm {
    /// Re-run every field rule against the current values.
    pub fn revalidate(&mut self) {
        let today = Utc::now().date_naive();
        self.full_name_error = validate_name(&self.full_name);
        self.email_error = validate_email(&self.email);
        self.password_error = validate_password(&self.password);
        self.confirm_password_error = validate_confirm(&self.password, &self.confirm_password);
        self.license_error = validate_license(&self.license_number);
        self.discipline_error = if self.discipline.is_none() {
            SELECT_SPECIALTY.to_string()
        } else {
            String::new()
        };
        self.dob_error = validate_dob(&self.dob, today);
        self.gender_error = validate_gender(self.gender);
        self.terms_error = validate_terms(self.accepted_terms);
    }

    /// Every error empty and every required field satisfied.
    pub fn is_form_valid(&self) -> bool {
        self.full_name_error.is_empty()
            && self.email_error.is_empty()
            && self.password_error.is_empty()
            && self.confirm_password_error.is_empty()
            && self.license_error.is_empty()
            && self.discipline_error.is_empty()
            && self.dob_error.is_empty()
            && self.gender_error.is_empty()
            && self.terms_error.is_empty()
            && !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && !self.license_number.trim().is_empty()
            && self.discipline.is_some()
            && !self.dob.trim().is_empty()
            && self.gender != Gender::Unspecified
            && self.accepted_terms
    }

    /// The attribute bag handed to the profile factory.
    pub fn details(&self) -> Map<String, Value> {
        let mut details = Map::new();
        details.insert("fullName".into(), Value::from(self.full_name.trim()));
        details.insert("dob".into(), Value::from(self.dob.as_str()));
        details.insert("gender".into(), Value::from(self.gender.name()));
        details.insert(
            "licenseNumber".into(),
            Value::from(self.license_number.trim()),
        );
        details.insert(
            "mainDiscipline".into(),
            Value::from(self.discipline.map(|d| d.name()).unwrap_or_default()),
        );
        details
    }

    pub(super) fn transition(&mut self, target: SignupPhase) {
        if self.phase.can_transition_to(target) {
            tracing::debug!(from = %self.phase, to = %target, "professional signup phase change");
            self.phase = target;
        } else {
            tracing::warn!(from = %self.phase, to = %target, "invalid phase change ignored");
        }
    }
}

/// Professional signup flow.
pub struct ProfessionalSignup {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn ProfileStore>,
    config: OnboardConfig,
    form: Arc<RwLock<ProfessionalForm>>,
}

impl ProfessionalSignup {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn ProfileStore>,
        config: OnboardConfig,
    ) -> Self {
        Self {
            auth,
            store,
            config,
            form: Arc::new(RwLock::new(ProfessionalForm::default())),
        }
    }

    /// A copy of the current form state, for the UI to render.
    pub async fn snapshot(&self) -> ProfessionalForm {
        self.form.read().await.clone()
    }

    pub async fn set_full_name(&self, value: &str) {
        let mut form = self.form.write().await;
        form.full_name = value.to_string();
        form.full_name_error = validate_name(value);
    }

    pub async fn set_email(&self, value: &str) {
        let trimmed = value.trim();
        let mut form = self.form.write().await;
        form.email = trimmed.to_string();
        form.email_error = validate_email(trimmed);
    }

    pub async fn set_password(&self, value: &str) {
        let mut form = self.form.write().await;
        form.password = value.to_string();
        form.password_error = validate_password(value);
        form.confirm_password_error = validate_confirm(value, &form.confirm_password);
    }

    pub async fn set_confirm_password(&self, value: &str) {
        let mut form = self.form.write().await;
        form.confirm_password = value.to_string();
        form.confirm_password_error = validate_confirm(&form.password, value);
    }

    pub async fn set_license(&self, value: &str) {
        let trimmed = value.trim();
        let mut form = self.form.write().await;
        form.license_number = trimmed.to_string();
        form.license_error = validate_license(trimmed);
    }

    pub async fn set_discipline(&self, value: Discipline) {
        let mut form = self.form.write().await;
        form.discipline = Some(value);
        form.discipline_error.clear();
    }

    pub async fn set_dob(&self, value: &str) {
        let mut form = self.form.write().await;
        form.dob = value.to_string();
        form.dob_error = validate_dob(value, Utc::now().date_naive());
    }

    pub async fn set_gender(&self, value: Gender) {
        let mut form = self.form.write().await;
        form.gender = value;
        form.gender_error = validate_gender(value);
    }

    pub async fn toggle_password_visibility(&self) {
        let mut form = self.form.write().await;
        form.password_visible = !form.password_visible;
    }

    pub async fn toggle_confirm_visibility(&self) {
        let mut form = self.form.write().await;
        form.confirm_visible = !form.confirm_visible;
    }

    pub async fn set_accepted_terms(&self, value: bool) {
        let mut form = self.form.write().await;
        form.accepted_terms = value;
        form.terms_error = validate_terms(value);
    }

    pub async fn clear_messages(&self) {
        let mut form = self.form.write().await;
        form.success_message.clear();
        form.error_message.clear();
    }

    /// Run the authenticate → construct-profile → persist pipeline.
    /// Same contract as the patient flow: `Pending` while one submission is
    /// in flight, an error once the flow has succeeded, one credential call
    /// and at most one store write, all from values snapshotted at the
    /// moment validation passes.
    pub async fn submit(&self) -> Outcome<String> {
        let (email, password, details) = {
            let mut form = self.form.write().await;
            if form.phase.is_terminal() {
                tracing::debug!("professional submit ignored: signup already succeeded");
                return Outcome::err(ALREADY_COMPLETED);
            }
            if form.loading {
                tracing::debug!("professional submit ignored: one already in flight");
                return Outcome::Pending;
            }
            form.success_message.clear();
            form.error_message.clear();
            form.revalidate();
            if !form.is_form_valid() {
                form.error_message = CHECK_FIELDS.to_string();
                return Outcome::err(CHECK_FIELDS);
            }
            form.loading = true;
            form.transition(SignupPhase::Submitting);
            (form.email.clone(), form.password.clone(), form.details())
        };

        let uid = match self.auth.sign_up(&email, &password).await {
            Outcome::Ok(uid) => uid,
            Outcome::Err { message, .. } => return self.fail(message).await,
            Outcome::Pending => {
                return self
                    .fail("Credential provider returned no result".to_string())
                    .await;
            }
        };
        tracing::debug!(%uid, "professional credential created");

        let profile = match create_profile(&uid, &email, Role::Professional, &details) {
            Ok(profile) => profile,
            Err(err) => {
                tracing::warn!(error = %err, %uid, "professional profile construction failed");
                return self.fail(PROFILE_BUILD_FAILED.to_string()).await;
            }
        };

        match self.store.create_profile(&profile).await {
            Outcome::Ok(stored_uid) => {
                {
                    let mut form = self.form.write().await;
                    form.success_message = SIGNUP_SUCCESS.to_string();
                    form.transition(SignupPhase::Succeeded);
                }
                tokio::time::sleep(self.config.success_display_delay).await;
                self.form.write().await.loading = false;
                Outcome::ok(stored_uid)
            }
            Outcome::Err { message, .. } => self.fail(message).await,
            Outcome::Pending => {
                self.fail("Profile store returned no result".to_string())
                    .await
            }
        }
    }

    async fn fail(&self, message: String) -> Outcome<String> {
        tracing::warn!(%message, "professional signup failed");
        let mut form = self.form.write().await;
        form.error_message = message.clone();
        form.transition(SignupPhase::Editing);
        form.loading = false;
        Outcome::err(message)
    }
}
