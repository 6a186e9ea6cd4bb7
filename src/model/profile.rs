//! Profile documents persisted per role.

use serde::{Deserialize, Serialize};

use super::role::{Discipline, Gender, Role};

/// A patient's profile document.
///
/// `uid` is empty until the credential provider assigns one and is the
/// storage key thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub uid: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: String,
    /// Exactly 10 digits once validated.
    #[serde(default)]
    pub phone: String,
    /// ISO-8601 calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub dob: String,
    #[serde(default)]
    pub gender: Gender,
}

/// A professional's profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    #[serde(default)]
    pub uid: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub license_number: String,
    /// Set by a back-office review process, never by this flow.
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub main_discipline: Discipline,
}

/// A role-specific profile. Exactly two shapes exist in this core; both
/// expose the shared `uid`/`email`/`role` capability set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UserProfile {
    Patient(Patient),
    Professional(Professional),
}

impl UserProfile {
    pub fn uid(&self) -> &str {
        match self {
            Self::Patient(p) => &p.uid,
            Self::Professional(p) => &p.uid,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Patient(p) => &p.email,
            Self::Professional(p) => &p.email,
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Patient(p) => p.role,
            Self::Professional(p) => p.role,
        }
    }
}

impl From<Patient> for UserProfile {
    fn from(patient: Patient) -> Self {
        Self::Patient(patient)
    }
}

impl From<Professional> for UserProfile {
    fn from(professional: Professional) -> Self {
        Self::Professional(professional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_delegate_to_variant() {
        let profile = UserProfile::Patient(Patient {
            uid: "uid-1".into(),
            email: "a@b.com".into(),
            role: Role::Patient,
            full_name: "Ana Lopez".into(),
            phone: "5512345678".into(),
            dob: "1990-04-02".into(),
            gender: Gender::Female,
        });
        assert_eq!(profile.uid(), "uid-1");
        assert_eq!(profile.email(), "a@b.com");
        assert_eq!(profile.role(), Role::Patient);
    }

    #[test]
    fn patient_serializes_camel_case() {
        let patient = Patient {
            uid: "u1".into(),
            email: "a@b.com".into(),
            role: Role::Patient,
            full_name: "Ana".into(),
            phone: "5512345678".into(),
            dob: "1990-04-02".into(),
            gender: Gender::Female,
        };
        let value = serde_json::to_value(&patient).unwrap();
        assert_eq!(value["fullName"], "Ana");
        assert_eq!(value["gender"], "female");
        assert_eq!(value["role"], "patient");
    }

    #[test]
    fn professional_defaults_unverified() {
        let value = serde_json::json!({
            "email": "pro@clinic.com",
            "role": "professional",
            "fullName": "Dr. Ruiz",
            "licenseNumber": "ABC123",
            "mainDiscipline": "psychiatry"
        });
        let professional: Professional = serde_json::from_value(value).unwrap();
        assert!(!professional.verified);
        assert_eq!(professional.uid, "");
        assert_eq!(professional.main_discipline, Discipline::Psychiatry);
    }
}
