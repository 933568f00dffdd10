use rayon::prelude::*;
use validator::ValidationError;

use crate::{
    types::validations::{ValidationResult, ValidationRule},
    utils::{locale_utils::Messages, validation_utils::add_error},
};

pub const MAX_ORGANIZATION_NAME_LENGTH: usize = 100;

const ALLOWED_PUNCTUATION: [char; 8] = ['-', '_', '&', '.', ',', '\'', '(', ')'];

fn is_not_empty(name: &str, messages: &Messages) -> ValidationResult {
    if name.trim().is_empty() {
        Err(messages.get_validation_message(
            "organization_name.empty",
            "Organization name must not be empty",
        ))
    } else {
        Ok(())
    }
}

fn has_max_length(name: &str, messages: &Messages) -> ValidationResult {
    if name.chars().count() > MAX_ORGANIZATION_NAME_LENGTH {
        Err(messages.get_validation_message(
            "organization_name.too_long",
            &format!(
                "Organization name must be at most {} characters",
                MAX_ORGANIZATION_NAME_LENGTH
            ),
        ))
    } else {
        Ok(())
    }
}

fn has_no_surrounding_whitespace(name: &str, messages: &Messages) -> ValidationResult {
    if name.trim() != name {
        Err(messages.get_validation_message(
            "organization_name.surrounding_whitespace",
            "Organization name must not start or end with whitespace",
        ))
    } else {
        Ok(())
    }
}

fn has_valid_chars(name: &str, messages: &Messages) -> ValidationResult {
    let valid = name
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || ALLOWED_PUNCTUATION.contains(&c));

    if valid {
        Ok(())
    } else {
        Err(messages.get_validation_message(
            "organization_name.invalid_chars",
            "Organization name can only contain letters, digits, spaces and - _ & . , ' ( )",
        ))
    }
}

pub fn validate_organization_name(name: &str, messages: &Messages) -> Result<(), ValidationError> {
    let validations: [ValidationRule; 4] = [
        is_not_empty,
        has_max_length,
        has_no_surrounding_whitespace,
        has_valid_chars,
    ];

    let errors: Vec<String> = validations
        .par_iter()
        .filter_map(|validate| validate(name, messages).err())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        let concatenated_errors = errors.join(", ");
        Err(add_error("organization_name.invalid", concatenated_errors, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> Messages {
        Messages::default()
    }

    #[test]
    fn accepts_typical_names() {
        for name in ["Acme Corp", "Globex Corporation", "A", "Ben & Jerry's (EU)", "3M"] {
            assert!(validate_organization_name(name, &messages()).is_ok(), "{name}");
        }
    }

    #[test]
    fn rejects_blank_name() {
        let err = validate_organization_name("   ", &messages()).unwrap_err();
        assert_eq!(err.code, "organization_name.invalid");
        assert!(err.message.unwrap().contains("must not be empty"));
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = "é".repeat(MAX_ORGANIZATION_NAME_LENGTH);
        assert!(validate_organization_name(&at_limit, &messages()).is_ok());

        let over_limit = "a".repeat(MAX_ORGANIZATION_NAME_LENGTH + 1);
        assert!(validate_organization_name(&over_limit, &messages()).is_err());
    }

    #[test]
    fn rejects_surrounding_whitespace_and_symbols() {
        assert!(validate_organization_name(" Acme", &messages()).is_err());
        assert!(validate_organization_name("Acme$Corp", &messages()).is_err());
        assert!(validate_organization_name("Acme\tCorp", &messages()).is_err());
    }
}
