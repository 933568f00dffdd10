use rayon::prelude::*;
use validator::ValidationError;

use crate::{
    types::validations::{ValidationResult, ValidationRule},
    utils::{locale_utils::Messages, validation_utils::add_error},
};

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_PASSWORD_LENGTH: usize = 128;

fn is_not_blank(password: &str, messages: &Messages) -> ValidationResult {
    if password.trim().is_empty() {
        return Err(messages.get_validation_message("password.empty", "Password is required"));
    }
    Ok(())
}

fn has_min_length(password: &str, messages: &Messages) -> ValidationResult {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(messages.get_validation_message(
            "password.too_short",
            &format!(
                "Password must be at least {} characters long",
                MIN_PASSWORD_LENGTH
            ),
        ));
    }
    Ok(())
}

fn has_max_length(password: &str, messages: &Messages) -> ValidationResult {
    if password.chars().count() > MAX_PASSWORD_LENGTH {
        return Err(messages.get_validation_message(
            "password.too_long",
            &format!(
                "Password must be no more than {} characters long",
                MAX_PASSWORD_LENGTH
            ),
        ));
    }
    Ok(())
}

pub fn validate_password(password: &str, messages: &Messages) -> Result<(), ValidationError> {
    let validations: [ValidationRule; 3] = [is_not_blank, has_min_length, has_max_length];

    let errors: Vec<String> = validations
        .par_iter()
        .filter_map(|validate_fn| validate_fn(password, messages).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        // Never echo the secret back in error params.
        Err(add_error("password.invalid", concatenated_errors, ""))
    }
}

/// Presence-only check for credential re-verification, where the stored
/// secret decides the rest.
pub fn validate_password_present(
    password: &str,
    messages: &Messages,
) -> Result<(), ValidationError> {
    is_not_blank(password, messages).map_err(|msg| add_error("password.invalid", msg, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_plain_characters() {
        assert!(validate_password("pw123456", &Messages::default()).is_ok());
        assert!(validate_password("password123", &Messages::default()).is_ok());
    }

    #[test]
    fn rejects_short_and_blank_passwords() {
        let messages = Messages::default();
        assert!(validate_password("pw12345", &messages).is_err());
        assert!(validate_password("        ", &messages).is_err());
        assert!(validate_password(&"x".repeat(129), &messages).is_err());
    }

    #[test]
    fn does_not_leak_the_password() {
        let err = validate_password("short", &Messages::default()).unwrap_err();
        assert_eq!(err.params["value"], "");
    }
}
