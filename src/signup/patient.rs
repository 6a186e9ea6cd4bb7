//! Patient signup: form state and the submission pipeline.

use std::sync::Arc;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::config::OnboardConfig;
use crate::factory::create_profile;
use crate::model::{Gender, Role};
use crate::outcome::Outcome;
use crate::ports::{AuthProvider, ProfileStore};
use crate::validate::{
    validate_confirm, validate_dob, validate_email, validate_gender, validate_name,
    validate_password, validate_phone, validate_terms,
};

use super::phase::SignupPhase;
use super::{ALREADY_COMPLETED, CHECK_FIELDS, PROFILE_BUILD_FAILED, SIGNUP_SUCCESS};

/// Raw patient form state plus per-field errors (empty string = valid).
#[derive(Debug, Clone, Default)]
pub struct PatientForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// ISO-8601, `YYYY-MM-DD`.
    pub dob: String,
    pub gender: Gender,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,

    pub password_visible: bool,
    pub confirm_visible: bool,
    pub loading: bool,
    pub phase: SignupPhase,

    pub success_message: String,
    pub error_message: String,

    pub full_name_error: String,
    pub email_error: String,
    pub phone_error: String,
    pub dob_error: String,
    pub gender_error: String,
    pub password_error: String,
    pub confirm_password_error: String,
    pub terms_error: String,
}

impl PatientForm {
    /// Re-run every field rule against the current values. Submission calls
    /// this before gating on `is_form_valid` so stale per-field state cannot
    /// slip through.
    pub fn revalidate(&mut self) {
        let today = Utc::now().date_naive();
        self.full_name_error = validate_name(&self.full_name);
        self.email_error = validate_email(&self.email);
        self.phone_error = validate_phone(&self.phone);
        self.dob_error = validate_dob(&self.dob, today);
        self.gender_error = validate_gender(self.gender);
        self.password_error = validate_password(&self.password);
        self.confirm_password_error = validate_confirm(&self.password, &self.confirm_password);
        self.terms_error = validate_terms(self.accepted_terms);
    }

    /// Every error empty and every required field satisfied.
    pub fn is_form_valid(&self) -> bool {
        self.full_name_error.is_empty()
            && self.email_error.is_empty()
            && self.phone_error.is_empty()
            && self.dob_error.is_empty()
            && self.gender_error.is_empty()
            && self.password_error.is_empty()
            && self.confirm_password_error.is_empty()
            && self.terms_error.is_empty()
            && !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.phone.chars().count() == 10
            && !self.dob.trim().is_empty()
            && self.gender != Gender::Unspecified
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
            && self.accepted_terms
    }

    /// The attribute bag handed to the profile factory.
    pub fn details(&self) -> Map<String, Value> {
        let mut details = Map::new();
        details.insert("fullName".into(), Value::from(self.full_name.trim()));
        details.insert("phone".into(), Value::from(self.phone.as_str()));
        details.insert("dob".into(), Value::from(self.dob.as_str()));
        details.insert("gender".into(), Value::from(self.gender.name()));
        details
    }

    pub(super) fn transition(&mut self, target: SignupPhase) {
        if self.phase.can_transition_to(target) {
            tracing::debug!(from = %self.phase, to = %target, "patient signup phase change");
            self.phase = target;
        } else {
            tracing::warn!(from = %self.phase, to = %target, "invalid phase change ignored");
        }
    }
}

/// Patient signup flow. Owns the form state exclusively; all mutation goes
/// through the field setters and `submit`, serialized by the form's lock.
pub struct PatientSignup {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn ProfileStore>,
    config: OnboardConfig,
    form: Arc<RwLock<PatientForm>>,
}

impl PatientSignup {
    pub fn new(
        auth: Arc<dyn AuthProvider>,
        store: Arc<dyn ProfileStore>,
        config: OnboardConfig,
    ) -> Self {
        Self {
            auth,
            store,
            config,
            form: Arc::new(RwLock::new(PatientForm::default())),
        }
    }

    /// A copy of the current form state, for the UI to render.
    pub async fn snapshot(&self) -> PatientForm {
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

    /// Non-digits are dropped and input is capped at 10 digits, mirroring
    /// the masked phone field.
    pub async fn set_phone(&self, value: &str) {
        let digits: String = value
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(10)
            .collect();
        let mut form = self.form.write().await;
        form.phone_error = validate_phone(&digits);
        form.phone = digits;
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

    /// Changing the password also revalidates the confirmation against it.
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
    ///
    /// Returns `Pending` without side effects if a submission is already in
    /// flight, and an error if the flow already succeeded. Issues exactly
    /// one credential-creation call and at most one store write. The
    /// submitted values are snapshotted when validation passes; edits made
    /// while the submission is in flight do not reach this write. On success
    /// the success message is shown for the configured display delay before
    /// the call returns `Ok(uid)`.
    pub async fn submit(&self) -> Outcome<String> {
        let (email, password, details) = {
            let mut form = self.form.write().await;
            if form.phase.is_terminal() {
                tracing::debug!("patient submit ignored: signup already succeeded");
                return Outcome::err(ALREADY_COMPLETED);
            }
            if form.loading {
                tracing::debug!("patient submit ignored: one already in flight");
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
        tracing::debug!(%uid, "patient credential created");

        let profile = match create_profile(&uid, &email, Role::Patient, &details) {
            Ok(profile) => profile,
            Err(err) => {
                // The credential already exists and is not rolled back here;
                // the account is left without a profile document.
                tracing::warn!(error = %err, %uid, "patient profile construction failed");
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
        tracing::warn!(%message, "patient signup failed");
        let mut form = self.form.write().await;
        form.error_message = message.clone();
        form.transition(SignupPhase::Editing);
        form.loading = false;
        Outcome::err(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PatientForm {
        let mut form = PatientForm {
            full_name: "Ana Lopez".into(),
            email: "ana@mail.com".into(),
            phone: "5512345678".into(),
            dob: "1990-04-02".into(),
            gender: Gender::Female,
            password: "abc12345".into(),
            confirm_password: "abc12345".into(),
            accepted_terms: true,
            ..PatientForm::default()
        };
        form.revalidate();
        form
    }

    #[test]
    fn default_form_is_invalid() {
        let form = PatientForm::default();
        assert!(!form.is_form_valid());
    }

    #[test]
    fn filled_form_is_valid() {
        assert!(valid_form().is_form_valid());
    }

    #[test]
    fn revalidate_catches_stale_fields() {
        let mut form = valid_form();
        // Mutate a field without going through a setter.
        form.phone = "123".into();
        assert!(form.is_form_valid(), "stale error state still reads valid");
        form.revalidate();
        assert!(!form.is_form_valid());
        assert_eq!(form.phone_error, "Must be exactly 10 digits");
    }

    #[test]
    fn unaccepted_terms_invalidate() {
        let mut form = valid_form();
        form.accepted_terms = false;
        form.revalidate();
        assert!(!form.is_form_valid());
        assert!(!form.terms_error.is_empty());
    }

    #[test]
    fn details_bag_trims_name() {
        let mut form = valid_form();
        form.full_name = "  Ana Lopez  ".into();
        let details = form.details();
        assert_eq!(details["fullName"], "Ana Lopez");
        assert_eq!(details["phone"], "5512345678");
        assert_eq!(details["dob"], "1990-04-02");
        assert_eq!(details["gender"], "female");
    }

    #[test]
    fn invalid_phase_change_is_ignored() {
        let mut form = PatientForm::default();
        form.transition(SignupPhase::Succeeded);
        assert_eq!(form.phase, SignupPhase::Editing);
        form.transition(SignupPhase::Submitting);
        assert_eq!(form.phase, SignupPhase::Submitting);
    }
}
