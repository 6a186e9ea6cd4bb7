//! Closed enumerations: account role, gender, professional specialty.

use serde::{Deserialize, Serialize};

/// The kind of account a user holds. Determines which profile shape is
/// built and which storage partition it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Professional,
    Admin,
    Undefined,
}

impl Default for Role {
    fn default() -> Self {
        Self::Undefined
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Patient => "patient",
            Self::Professional => "professional",
            Self::Admin => "admin",
            Self::Undefined => "undefined",
        };
        write!(f, "{s}")
    }
}

/// Gender as captured on the signup form. `Unspecified` is the sentinel
/// the validation layer rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    Unspecified,
}

impl Default for Gender {
    fn default() -> Self {
        Self::Unspecified
    }
}

impl Gender {
    /// Parse a stored name back into a variant. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            "unspecified" => Some(Self::Unspecified),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::Unspecified => "unspecified",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Professional specialties offered by the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Psychology,
    Psychiatry,
    Nutrition,
    SpeechTherapy,
    OccupationalTherapy,
}

impl Default for Discipline {
    fn default() -> Self {
        // Placeholder default carried over from the product side; the signup
        // flow always supplies an explicit choice.
        Self::Psychology
    }
}

impl Discipline {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "psychology" => Some(Self::Psychology),
            "psychiatry" => Some(Self::Psychiatry),
            "nutrition" => Some(Self::Nutrition),
            "speech_therapy" => Some(Self::SpeechTherapy),
            "occupational_therapy" => Some(Self::OccupationalTherapy),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Psychology => "psychology",
            Self::Psychiatry => "psychiatry",
            Self::Nutrition => "nutrition",
            Self::SpeechTherapy => "speech_therapy",
            Self::OccupationalTherapy => "occupational_therapy",
        }
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display_matches_serde() {
        for role in [Role::Patient, Role::Professional, Role::Admin, Role::Undefined] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
    }

    #[test]
    fn gender_name_roundtrip() {
        for gender in [Gender::Male, Gender::Female, Gender::Other, Gender::Unspecified] {
            assert_eq!(Gender::from_name(gender.name()), Some(gender));
        }
        assert_eq!(Gender::from_name("robot"), None);
    }

    #[test]
    fn discipline_name_roundtrip() {
        for discipline in [
            Discipline::Psychology,
            Discipline::Psychiatry,
            Discipline::Nutrition,
            Discipline::SpeechTherapy,
            Discipline::OccupationalTherapy,
        ] {
            assert_eq!(Discipline::from_name(discipline.name()), Some(discipline));
        }
        assert_eq!(Discipline::from_name(""), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(Role::default(), Role::Undefined);
        assert_eq!(Gender::default(), Gender::Unspecified);
        assert_eq!(Discipline::default(), Discipline::Psychology);
    }
}
