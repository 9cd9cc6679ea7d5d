//! Tests for email rules and user-creation validation

use super::*;
use serde_json::json;

fn user_data(value: serde_json::Value) -> UserData {
    value.as_object().cloned().unwrap()
}

// ===== Standard rule =====

#[test]
fn test_standard_accepts_plain_addresses() {
    assert!(is_valid_email("alice@company.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(is_valid_email("under_score%x@sub-domain.io"));
}

#[test]
fn test_standard_rejects_malformed() {
    assert!(!is_valid_email("invalid-email"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@localhost"));
    assert!(!is_valid_email("a@b.c"));
    assert!(!is_valid_email("alice@company.c0m"));
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email(" alice@company.com"));
}

#[test]
fn test_single_trailing_newline_is_tolerated() {
    assert!(is_valid_email("alice@company.com\n"));
    assert!(EmailRule::Relaxed.matches("a@b.c\n"));

    // Only one newline, and only at the very end
    assert!(!is_valid_email("alice@company.com\n\n"));
    assert!(!is_valid_email("alice@company.com\r\n"));
    assert!(!is_valid_email("alice@company.com\nbob@company.com"));
    assert!(!EmailRule::Relaxed.matches("\n"));
}

// ===== Relaxed rule =====

#[test]
fn test_relaxed_diverges_from_standard() {
    // Single-character and digit TLDs pass only the relaxed rule
    assert!(EmailRule::Relaxed.matches("a@b.c"));
    assert!(EmailRule::Relaxed.matches("alice@company.c0m"));
    assert!(!EmailRule::Standard.matches("a@b.c"));

    // `+` and `%` are outside the relaxed local-part class
    assert!(EmailRule::Standard.matches("user+tag@example.com"));
    assert!(!EmailRule::Relaxed.matches("user+tag@example.com"));

    // Unicode word characters are accepted by the relaxed rule only
    assert!(EmailRule::Relaxed.matches("jörg@exämple.de"));
    assert!(!EmailRule::Standard.matches("jörg@exämple.de"));
}

#[test]
fn test_relaxed_rejects_empty_and_missing_parts() {
    assert!(!EmailRule::Relaxed.matches(""));
    assert!(!EmailRule::Relaxed.matches("invalid-email"));
    assert!(!EmailRule::Relaxed.matches("user@localhost"));
}

#[test]
fn test_email_rule_default_and_display() {
    assert_eq!(EmailRule::default(), EmailRule::Standard);
    assert_eq!(EmailRule::Standard.to_string(), "standard");
    assert_eq!(EmailRule::Relaxed.to_string(), "relaxed");
    assert_ne!(EmailRule::Standard.pattern(), EmailRule::Relaxed.pattern());
}

#[test]
fn test_email_rule_serialization() {
    assert_eq!(serde_json::to_string(&EmailRule::Relaxed).unwrap(), r#""relaxed""#);
    let rule: EmailRule = serde_json::from_str(r#""standard""#).unwrap();
    assert_eq!(rule, EmailRule::Standard);
}

// ===== validate_new_user =====

#[test]
fn test_validate_new_user_ok() {
    let data = user_data(json!({
        "name": "Alice Johnson",
        "email": "alice@company.com",
        "password": "hunter2"
    }));
    assert_eq!(validate_new_user(&data), Ok(()));
}

#[test]
fn test_validate_new_user_missing_password() {
    let data = user_data(json!({
        "name": "Alice Johnson",
        "email": "alice@company.com"
    }));
    let err = validate_new_user(&data).unwrap_err();
    assert_eq!(err, ValidationError::missing_field("password"));
    assert_eq!(err.field(), Some("password"));
    assert_eq!(err.to_string(), "Missing required field: password");
}

#[test]
fn test_validate_new_user_reports_first_missing_field() {
    let err = validate_new_user(&UserData::new()).unwrap_err();
    assert_eq!(err, ValidationError::missing_field("name"));

    let data = user_data(json!({ "name": "Bob", "password": "pw" }));
    assert_eq!(
        validate_new_user(&data).unwrap_err(),
        ValidationError::missing_field("email")
    );
}

#[test]
fn test_missing_field_checked_before_email_format() {
    let data = user_data(json!({ "name": "Bob", "email": "not-an-email" }));
    assert_eq!(
        validate_new_user(&data).unwrap_err(),
        ValidationError::missing_field("password")
    );
}

#[test]
fn test_validate_new_user_invalid_email() {
    let data = user_data(json!({
        "name": "Charlie Brown",
        "email": "invalid-email",
        "password": "pw"
    }));
    let err = validate_new_user(&data).unwrap_err();
    assert_eq!(err, ValidationError::InvalidEmail);
    assert_eq!(err.field(), None);
    assert_eq!(err.to_string(), "Invalid email format");
}

#[test]
fn test_validate_new_user_non_string_email() {
    let data = user_data(json!({ "name": "X", "email": 42, "password": "pw" }));
    assert_eq!(validate_new_user(&data).unwrap_err(), ValidationError::InvalidEmail);

    let data = user_data(json!({ "name": "X", "email": null, "password": "pw" }));
    assert_eq!(validate_new_user(&data).unwrap_err(), ValidationError::InvalidEmail);
}

#[test]
fn test_validate_new_user_accepts_trailing_newline() {
    let data = user_data(json!({ "name": "X", "email": "a@b.c\n", "password": "pw" }));
    assert!(validate_new_user(&data).is_ok());
}

#[test]
fn test_validate_new_user_uses_relaxed_rule() {
    // Rejected by the standard rule, accepted for creation
    let data = user_data(json!({ "name": "X", "email": "x@host.c", "password": "pw" }));
    assert!(validate_new_user(&data).is_ok());
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Neither rule panics on arbitrary input
        #[test]
        fn prop_rules_are_total(text in ".{0,200}") {
            let _ = EmailRule::Standard.matches(&text);
            let _ = EmailRule::Relaxed.matches(&text);
        }

        /// Addresses without `@` are never valid
        #[test]
        fn prop_no_at_sign_is_invalid(text in "[a-zA-Z0-9._%+-]{0,64}") {
            prop_assert!(!is_valid_email(&text));
            prop_assert!(!EmailRule::Relaxed.matches(&text));
        }

        /// Generated well-formed addresses pass the standard rule
        #[test]
        fn prop_well_formed_passes(
            local in "[a-z0-9._%+-]{1,20}",
            domain in "[a-z0-9-]{1,20}",
            tld in "[a-z]{2,6}"
        ) {
            let email = format!("{local}@{domain}.{tld}");
            prop_assert!(is_valid_email(&email), "{} should be valid", email);
        }
    }
}
