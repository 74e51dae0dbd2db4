//! Short code generation and validation.
//!
//! Provides random code generation with negligible collision probability and
//! validation for user-provided custom codes. The store remains the single
//! authority on uniqueness: a generated code that collides surfaces through
//! the duplicate-key error path and is retried by the service.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding (yields 8 characters).
const CODE_LENGTH_BYTES: usize = 6;

/// Codes that would shadow service routes and cannot be used as short links.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a random short code over the alphabet `[A-Za-z0-9_]`.
///
/// Uses `getrandom` for entropy and URL-safe base64 without padding, with
/// `-` mapped to `_` so the result stays inside the shortcode alphabet.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD
        .encode(buffer)
        .replace('-', "_")
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Non-empty
/// - Allowed characters: ASCII letters, digits, underscore
/// - Cannot be a reserved system code
///
/// # Errors
///
/// Returns [`AppError::InvalidShortcode`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() {
        return Err(AppError::invalid_shortcode(
            "Shortcode must not be empty",
            json!({}),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(AppError::invalid_shortcode(
            "Shortcode can only contain alphanumeric characters and underscores",
            json!({ "shortcode": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::invalid_shortcode(
            "This shortcode is reserved",
            json!({ "shortcode": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_generate_code_stays_in_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(
                code.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
                "code '{}' left the shortcode alphabet",
                code
            );
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code());
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generated_codes_pass_validation() {
        for _ in 0..100 {
            assert!(validate_custom_code(&generate_code()).is_ok());
        }
    }

    #[test]
    fn test_validate_alphanumeric() {
        assert!(validate_custom_code("abc123").is_ok());
    }

    #[test]
    fn test_validate_uppercase_allowed() {
        assert!(validate_custom_code("MyCode123").is_ok());
    }

    #[test]
    fn test_validate_underscore_allowed() {
        assert!(validate_custom_code("my_code_123").is_ok());
    }

    #[test]
    fn test_validate_single_character() {
        assert!(validate_custom_code("a").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        let result = validate_custom_code("");
        assert!(matches!(
            result.unwrap_err(),
            AppError::InvalidShortcode { .. }
        ));
    }

    #[test]
    fn test_validate_hyphen_rejected() {
        let result = validate_custom_code("my-code");
        assert!(matches!(
            result.unwrap_err(),
            AppError::InvalidShortcode { .. }
        ));
    }

    #[test]
    fn test_validate_special_characters_rejected() {
        for code in ["my code", "code!", "c@de", "code/x", "cöde"] {
            assert!(
                validate_custom_code(code).is_err(),
                "'{}' should be rejected",
                code
            );
        }
    }

    #[test]
    fn test_validate_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
