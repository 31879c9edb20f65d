//! # Request Validation
//!
//! Explicit validation functions, invoked at the top of each mutating
//! handler. Each returns `AppError::Validation` carrying a field → message
//! map so the client learns exactly which field failed.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{AppError, AppResult, ValidationErrors};
use crate::store::models::{CreateUserRequest, UpdateUserRequest};

/// Email syntax: local-part@domain with at least one dot in the domain and
/// no embedded whitespace.
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
        })
        .is_match(email)
}

/// Validate a create payload.
///
/// Name must be present and non-blank; email must be present, non-blank,
/// and syntactically valid. On success yields the owned `(name, email)`
/// pair for the store.
pub fn validate_create(req: CreateUserRequest) -> AppResult<(String, String)> {
    let mut errors = ValidationErrors::new();

    let name = req.name.unwrap_or_default();
    if name.trim().is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    }

    let email = req.email.unwrap_or_default();
    if email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !is_valid_email(&email) {
        errors.insert("email".to_string(), "Valid email is required".to_string());
    }

    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }
    Ok((name, email))
}

/// Validate an update payload.
///
/// Updates are partial, so nothing is required. The email is syntax-checked
/// only when it is provided and non-empty; an empty string means "no
/// change" and is left for the store to skip.
pub fn validate_update(req: &UpdateUserRequest) -> AppResult<()> {
    if let Some(email) = req.email.as_deref() {
        if !email.is_empty() && !is_valid_email(email) {
            let mut errors = ValidationErrors::new();
            errors.insert("email".to_string(), "Valid email is required".to_string());
            return Err(AppError::Validation(errors));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("first.last@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("missing-domain@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("no-dot@example"));
        assert!(!is_valid_email("spaced name@example.com"));
    }

    #[test]
    fn create_requires_both_fields() {
        let err = validate_create(CreateUserRequest {
            name: None,
            email: None,
        })
        .unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("name").unwrap(), "Name is required");
        assert_eq!(errors.get("email").unwrap(), "Email is required");
    }

    #[test]
    fn create_flags_bad_email_syntax() {
        let err = validate_create(CreateUserRequest {
            name: Some("Test User".to_string()),
            email: Some("invalid-email".to_string()),
        })
        .unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("email").unwrap(), "Valid email is required");
        assert!(!errors.contains_key("name"));
    }

    #[test]
    fn create_treats_blank_name_as_missing() {
        let err = validate_create(CreateUserRequest {
            name: Some("   ".to_string()),
            email: Some("test@example.com".to_string()),
        })
        .unwrap_err();

        let AppError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        assert_eq!(errors.get("name").unwrap(), "Name is required");
    }

    #[test]
    fn create_passes_through_valid_input() {
        let (name, email) = validate_create(CreateUserRequest {
            name: Some("Test User".to_string()),
            email: Some("test@example.com".to_string()),
        })
        .unwrap();

        assert_eq!(name, "Test User");
        assert_eq!(email, "test@example.com");
    }

    #[test]
    fn update_allows_absent_and_empty_email() {
        assert!(validate_update(&UpdateUserRequest {
            name: Some("Updated Name".to_string()),
            email: None,
        })
        .is_ok());
        assert!(validate_update(&UpdateUserRequest {
            name: None,
            email: Some(String::new()),
        })
        .is_ok());
    }

    #[test]
    fn update_flags_bad_email_syntax() {
        let result = validate_update(&UpdateUserRequest {
            name: None,
            email: Some("not-an-email".to_string()),
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
