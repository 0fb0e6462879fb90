use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::AppError;

// ASCII digits only, `\d` would also accept other Unicode digit classes.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("constant phone pattern"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("constant email pattern"));

pub struct ValidationReq;

impl ValidationReq {
    pub fn phone_req() -> String {
        "Phone number must be 10 digits.".to_string()
    }

    pub fn email_req() -> String {
        "Email must look like name@domain.tld with a single '@' and no surrounding spaces."
            .to_string()
    }

    pub fn name_req() -> String {
        "Name must not be empty or start/end with spaces.".to_string()
    }
}

pub fn validate_number(phone: &str) -> bool {
    // Exactly 10 digits, nothing else
    PHONE_RE.is_match(phone)
}

pub fn validate_email(email: &str) -> bool {
    // local@domain.tld
    // No '@' in any of the three parts
    // Import trims lines, so padding would not survive a round trip
    is_unpadded(email) && EMAIL_RE.is_match(email)
}

pub fn validate_name(name: &str) -> bool {
    !name.is_empty() && is_unpadded(name)
}

fn is_unpadded(field: &str) -> bool {
    field.trim() == field
}

/// Checks every field of a new record, reporting the first rule broken.
pub fn check_contact_fields(phone: &str, name: &str, email: &str) -> Result<(), AppError> {
    if !validate_number(phone) {
        return Err(AppError::InvalidFormat(ValidationReq::phone_req()));
    }

    if !validate_name(name) {
        return Err(AppError::InvalidFormat(ValidationReq::name_req()));
    }

    if !validate_email(email) {
        return Err(AppError::InvalidFormat(ValidationReq::email_req()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_validation() {
        assert!(validate_number("5551234567"));
        assert!(validate_number("0000000000"));

        assert!(!validate_number("555123456")); // 9 digits
        assert!(!validate_number("55512345678")); // 11 digits
        assert!(!validate_number("555-123-4567"));
        assert!(!validate_number("+155512345"));
        assert!(!validate_number(" 5551234567"));
        assert!(!validate_number("555123456\n"));
        assert!(!validate_number("٥٥٥١٢٣٤٥٦٧")); // non-ASCII digits
        assert!(!validate_number(""));
    }

    #[test]
    fn email_validation() {
        assert!(validate_email("ada@example.com"));
        assert!(validate_email("bob@x.com"));
        assert!(validate_email("first.last@mail.example.org"));

        assert!(!validate_email("foo@bar"));
        assert!(!validate_email("foobar.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("ada@.com"));
        assert!(!validate_email("ada@@example.com"));
        assert!(!validate_email("ada@example@com.org"));
        assert!(!validate_email("ada@example."));
        assert!(!validate_email(""));
        assert!(!validate_email("ada@example.com "));
        assert!(!validate_email(" ada@example.com"));
        assert!(!validate_email("ada@example.com\r"));
    }

    #[test]
    fn name_validation() {
        assert!(validate_name("Ada"));
        assert!(validate_name("Ada Lovelace"));
        assert!(!validate_name(""));
        assert!(!validate_name("   "));
        assert!(!validate_name("Ada "));
        assert!(!validate_name("\tAda"));
    }

    #[test]
    fn first_broken_rule_is_reported() {
        let err = check_contact_fields("123", "", "nope").unwrap_err();
        assert!(
            matches!(err, AppError::InvalidFormat(ref msg) if msg == &ValidationReq::phone_req())
        );

        let err = check_contact_fields("5551234567", "Ada", "nope").unwrap_err();
        assert!(
            matches!(err, AppError::InvalidFormat(ref msg) if msg == &ValidationReq::email_req())
        );

        assert!(check_contact_fields("5551234567", "Ada", "ada@example.com").is_ok());
    }
}
