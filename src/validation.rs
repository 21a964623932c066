// Validation utilities module
// Provides custom validation functions for domain-specific rules

use regex::Regex;
use std::sync::OnceLock;
use validator::ValidationError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    // Basic local@domain.tld shape, no attempt at full RFC 5322 compliance
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
    })
}

/// Validates that an email has a basic `local@domain.tld` shape
pub fn validate_email_shape(email: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}

/// Validates that a contact phone is plausible: digits with optional
/// leading '+', separators allowed, at most 20 characters
pub fn validate_contact_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() || phone.len() > 20 {
        return Err(ValidationError::new("invalid_phone"));
    }
    let mut chars = phone.chars();
    let first = chars.next().unwrap_or(' ');
    if !(first.is_ascii_digit() || first == '+') {
        return Err(ValidationError::new("invalid_phone"));
    }
    if chars.all(|c| c.is_ascii_digit() || c == ' ' || c == '-' || c == '(' || c == ')') {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone"))
    }
}

/// Validates that a complaint priority is one of the accepted values
/// Valid values: "Low", "Medium", "High", "Urgent"
pub fn validate_priority(priority: &str) -> Result<(), ValidationError> {
    let valid = ["Low", "Medium", "High", "Urgent"];
    if valid.contains(&priority) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_priority"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_simple_addresses() {
        assert!(validate_email_shape("jane@x.com").is_ok());
        assert!(validate_email_shape("a.b+c@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(validate_email_shape("").is_err());
        assert!(validate_email_shape("janex.com").is_err());
        assert!(validate_email_shape("jane@xcom").is_err());
        assert!(validate_email_shape("jane doe@x.com").is_err());
        assert!(validate_email_shape("@x.com").is_err());
    }

    #[test]
    fn phone_validation() {
        assert!(validate_contact_phone("+254 712 345678").is_ok());
        assert!(validate_contact_phone("0712345678").is_ok());
        assert!(validate_contact_phone("call me").is_err());
        assert!(validate_contact_phone("").is_err());
        assert!(validate_contact_phone("+2547123456789012345678901").is_err());
    }

    #[test]
    fn priority_validation() {
        assert!(validate_priority("Medium").is_ok());
        assert!(validate_priority("Urgent").is_ok());
        assert!(validate_priority("medium").is_err());
        assert!(validate_priority("ASAP").is_err());
    }
}
