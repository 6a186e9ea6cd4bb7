//! Role-dispatched profile construction and storage-partition mapping.

use serde_json::{Map, Value};

use crate::error::ProfileError;
use crate::model::{Discipline, Gender, Patient, Professional, Role, UserProfile};

/// Build the role-appropriate profile from a loosely-typed attribute bag.
///
/// Patient and professional attributes are read with type-checked fallbacks:
/// a missing key or a value of the wrong type defaults to an empty string
/// (or the enum default) rather than failing the call. The two roles that
/// can never yield a persistable profile fail loudly instead:
/// `Admin` is unsupported by this flow and `Undefined` has no shape at all.
pub fn create_profile(
    uid: &str,
    email: &str,
    role: Role,
    details: &Map<String, Value>,
) -> Result<UserProfile, ProfileError> {
    match role {
        Role::Patient => Ok(Patient {
            uid: uid.to_string(),
            email: email.to_string(),
            role: Role::Patient,
            full_name: str_attr(details, "fullName"),
            phone: str_attr(details, "phone"),
            dob: str_attr(details, "dob"),
            gender: details
                .get("gender")
                .and_then(Value::as_str)
                .and_then(Gender::from_name)
                .unwrap_or_default(),
        }
        .into()),
        Role::Professional => Ok(Professional {
            uid: uid.to_string(),
            email: email.to_string(),
            role: Role::Professional,
            full_name: str_attr(details, "fullName"),
            license_number: str_attr(details, "licenseNumber"),
            verified: details
                .get("verified")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            // Unknown or missing specialties fall back to the placeholder
            // default. Open product question, see DESIGN.md.
            main_discipline: details
                .get("mainDiscipline")
                .and_then(Value::as_str)
                .and_then(Discipline::from_name)
                .unwrap_or_default(),
        }
        .into()),
        Role::Admin => Err(ProfileError::AdminUnsupported),
        Role::Undefined => Err(ProfileError::UndefinedRole),
    }
}

/// The storage partition that holds profiles for a role.
///
/// `Undefined` has no partition; asking for one is an error rather than a
/// valid-looking collection name.
pub fn collection_for(role: Role) -> Result<&'static str, ProfileError> {
    match role {
        Role::Patient => Ok("patients"),
        Role::Professional => Ok("professionals"),
        Role::Admin => Ok("admins"),
        Role::Undefined => Err(ProfileError::UndefinedRole),
    }
}

fn str_attr(details: &Map<String, Value>, key: &str) -> String {
    details
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn patient_from_full_bag() {
        let details = bag(json!({
            "fullName": "Ana Lopez",
            "phone": "5512345678",
            "dob": "1990-04-02",
            "gender": "female"
        }));
        let profile = create_profile("uid-1", "ana@mail.com", Role::Patient, &details).unwrap();
        assert_eq!(profile.uid(), "uid-1");
        assert_eq!(profile.email(), "ana@mail.com");
        assert_eq!(profile.role(), Role::Patient);
        match profile {
            UserProfile::Patient(p) => {
                assert_eq!(p.full_name, "Ana Lopez");
                assert_eq!(p.phone, "5512345678");
                assert_eq!(p.dob, "1990-04-02");
                assert_eq!(p.gender, Gender::Female);
            }
            other => panic!("expected patient, got {other:?}"),
        }
    }

    #[test]
    fn patient_missing_and_mistyped_attrs_default() {
        let details = bag(json!({
            "fullName": 42,
            "gender": "martian"
        }));
        let profile = create_profile("uid-2", "x@y.com", Role::Patient, &details).unwrap();
        match profile {
            UserProfile::Patient(p) => {
                assert_eq!(p.full_name, "");
                assert_eq!(p.phone, "");
                assert_eq!(p.dob, "");
                assert_eq!(p.gender, Gender::Unspecified);
            }
            other => panic!("expected patient, got {other:?}"),
        }
    }

    #[test]
    fn professional_from_bag() {
        let details = bag(json!({
            "fullName": "Dr. Ruiz",
            "licenseNumber": "LIC-99887",
            "mainDiscipline": "psychiatry"
        }));
        let profile =
            create_profile("uid-3", "ruiz@clinic.com", Role::Professional, &details).unwrap();
        match profile {
            UserProfile::Professional(p) => {
                assert_eq!(p.license_number, "LIC-99887");
                assert_eq!(p.main_discipline, Discipline::Psychiatry);
                assert!(!p.verified, "verified is never set by this flow");
            }
            other => panic!("expected professional, got {other:?}"),
        }
    }

    #[test]
    fn professional_unknown_discipline_falls_back() {
        let details = bag(json!({ "mainDiscipline": "astrology" }));
        let profile = create_profile("u", "e@f.com", Role::Professional, &details).unwrap();
        match profile {
            UserProfile::Professional(p) => {
                assert_eq!(p.main_discipline, Discipline::Psychology)
            }
            other => panic!("expected professional, got {other:?}"),
        }
    }

    #[test]
    fn admin_fails_loudly() {
        let err = create_profile("u", "e@f.com", Role::Admin, &Map::new()).unwrap_err();
        assert_eq!(err, ProfileError::AdminUnsupported);
    }

    #[test]
    fn undefined_role_yields_no_profile() {
        let err = create_profile("u", "e@f.com", Role::Undefined, &Map::new()).unwrap_err();
        assert_eq!(err, ProfileError::UndefinedRole);
    }

    #[test]
    fn collections() {
        assert_eq!(collection_for(Role::Patient), Ok("patients"));
        assert_eq!(collection_for(Role::Professional), Ok("professionals"));
        assert_eq!(collection_for(Role::Admin), Ok("admins"));
        assert_eq!(collection_for(Role::Undefined), Err(ProfileError::UndefinedRole));
    }
}
