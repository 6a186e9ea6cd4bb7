//! Field validation rules.
//!
//! Every rule is a pure function from raw input to an error message, where
//! an empty string means the field is valid. The signup forms store these
//! strings per field and derive overall validity from them.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::model::Gender;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Full name: required, at least 3 characters.
pub fn validate_name(name: &str) -> String {
    if name.trim().is_empty() {
        "Enter your full name".to_string()
    } else if name.chars().count() < 3 {
        "Name is too short".to_string()
    } else {
        String::new()
    }
}

/// Email: required, conventional `local@domain.tld` shape.
pub fn validate_email(email: &str) -> String {
    if email.trim().is_empty() {
        "Enter your email".to_string()
    } else if !EMAIL_RE.is_match(email) {
        "Invalid email address".to_string()
    } else {
        String::new()
    }
}

/// Phone: required, digits only, exactly 10 of them.
pub fn validate_phone(phone: &str) -> String {
    if phone.is_empty() {
        "Enter your phone number".to_string()
    } else if phone.chars().any(|c| !c.is_ascii_digit()) {
        "Digits only".to_string()
    } else if phone.chars().count() != 10 {
        "Must be exactly 10 digits".to_string()
    } else {
        String::new()
    }
}

/// Date of birth: required, ISO-8601 `YYYY-MM-DD`, not in the future.
///
/// `today` is passed in so callers own the clock; the forms pass
/// `Utc::now().date_naive()`.
pub fn validate_dob(dob: &str, today: NaiveDate) -> String {
    if dob.trim().is_empty() {
        return "Enter your date of birth".to_string();
    }
    match NaiveDate::parse_from_str(dob, "%Y-%m-%d") {
        Ok(date) if date > today => "Date of birth cannot be in the future".to_string(),
        Ok(_) => String::new(),
        Err(_) => "Use the YYYY-MM-DD format".to_string(),
    }
}

/// Gender: the `Unspecified` sentinel is not a valid choice.
pub fn validate_gender(gender: Gender) -> String {
    if gender == Gender::Unspecified {
        "Select a gender".to_string()
    } else {
        String::new()
    }
}

/// License number: required, at least 5 characters.
pub fn validate_license(license: &str) -> String {
    if license.trim().is_empty() {
        "Enter your license number".to_string()
    } else if license.chars().count() < 5 {
        "License number is too short".to_string()
    } else {
        String::new()
    }
}

/// Password: required, 8+ characters, at least one letter and one digit.
pub fn validate_password(password: &str) -> String {
    if password.is_empty() {
        "Enter a password".to_string()
    } else if password.chars().count() < 8 {
        "At least 8 characters".to_string()
    } else if !password.chars().any(|c| c.is_ascii_digit())
        || !password.chars().any(|c| c.is_alphabetic())
    {
        "Must include letters and numbers".to_string()
    } else {
        String::new()
    }
}

/// Confirmation: required, byte-equal to the password. No normalization.
pub fn validate_confirm(password: &str, confirm: &str) -> String {
    if confirm.is_empty() {
        "Confirm your password".to_string()
    } else if password != confirm {
        "Passwords do not match".to_string()
    } else {
        String::new()
    }
}

/// Terms checkbox: must be accepted.
pub fn validate_terms(accepted: bool) -> String {
    if accepted {
        String::new()
    } else {
        "You must accept the terms".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn name_rules() {
        assert!(!validate_name("").is_empty());
        assert!(!validate_name("  ").is_empty());
        assert_eq!(validate_name("Al"), "Name is too short");
        assert_eq!(validate_name("Ana"), "");
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(""), "Enter your email");
        assert_eq!(validate_email("not-an-email"), "Invalid email address");
        assert_eq!(validate_email("a@b"), "Invalid email address");
        assert_eq!(validate_email("a@b.c"), "Invalid email address");
        assert_eq!(validate_email("user+tag@mail.example.com"), "");
        assert_eq!(validate_email("a.b-c_d@sub.domain.co"), "");
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate_phone("5512345678"), "");
        assert_eq!(validate_phone("551234567"), "Must be exactly 10 digits");
        assert_eq!(validate_phone("55123456789"), "Must be exactly 10 digits");
        assert_eq!(validate_phone("55123abcde"), "Digits only");
        assert_eq!(validate_phone(""), "Enter your phone number");
    }

    #[test]
    fn dob_rules() {
        assert_eq!(validate_dob("", today()), "Enter your date of birth");
        assert_eq!(validate_dob("not-a-date", today()), "Use the YYYY-MM-DD format");
        assert_eq!(validate_dob("1990-04-02", today()), "");
        assert_eq!(validate_dob("2026-08-30", today()), "");

        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        assert_eq!(
            validate_dob(&tomorrow.format("%Y-%m-%d").to_string(), today()),
            "Date of birth cannot be in the future"
        );
    }

    #[test]
    fn gender_rules() {
        assert_eq!(validate_gender(Gender::Unspecified), "Select a gender");
        assert_eq!(validate_gender(Gender::Other), "");
    }

    #[test]
    fn license_rules() {
        assert_eq!(validate_license(""), "Enter your license number");
        assert_eq!(validate_license("AB12"), "License number is too short");
        assert_eq!(validate_license("AB123"), "");
    }

    #[test]
    fn password_rules() {
        assert_eq!(validate_password(""), "Enter a password");
        assert_eq!(validate_password("abc"), "At least 8 characters");
        assert_eq!(validate_password("12345678"), "Must include letters and numbers");
        assert_eq!(validate_password("abcdefgh"), "Must include letters and numbers");
        assert_eq!(validate_password("abc12345"), "");
    }

    #[test]
    fn confirm_rules() {
        assert_eq!(validate_confirm("abc12345", ""), "Confirm your password");
        assert_eq!(validate_confirm("abc12345", "abc1234"), "Passwords do not match");
        // Case-sensitive, exact comparison.
        assert_eq!(validate_confirm("abc12345", "ABC12345"), "Passwords do not match");
        assert_eq!(validate_confirm("abc12345", "abc12345"), "");
    }

    #[test]
    fn terms_rules() {
        assert!(!validate_terms(false).is_empty());
        assert_eq!(validate_terms(true), "");
    }
}
