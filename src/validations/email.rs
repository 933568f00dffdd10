use email_address::EmailAddress;
use rayon::prelude::*;
use validator::ValidationError;

use crate::{
    types::validations::{ValidationResult, ValidationRule},
    utils::{locale_utils::Messages, validation_utils::add_error},
};

const MIN_EMAIL_LENGTH: usize = 5;
const MAX_EMAIL_LENGTH: usize = 254;
const MIN_TLD_LENGTH: usize = 2;

fn has_min_length(email: &str, messages: &Messages) -> ValidationResult {
    if email.len() < MIN_EMAIL_LENGTH {
        return Err(messages.get_validation_message(
            "email.too_short",
            &format!("Email must be at least {} characters", MIN_EMAIL_LENGTH),
        ));
    }
    Ok(())
}

fn has_max_length(email: &str, messages: &Messages) -> ValidationResult {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(messages.get_validation_message(
            "email.too_long",
            &format!("Email must be at most {} characters", MAX_EMAIL_LENGTH),
        ));
    }
    Ok(())
}

fn has_at_and_dot(email: &str, messages: &Messages) -> ValidationResult {
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err(messages.get_validation_message(
            "email.missing_at_or_dot",
            "Email must contain '@' and '.'",
        ))
    }
}

fn is_at_before_dot(email: &str, messages: &Messages) -> ValidationResult {
    if let (Some(at_index), Some(dot_index)) = (email.find('@'), email.rfind('.')) {
        if at_index >= dot_index {
            return Err(messages.get_validation_message(
                "email.at_before_dot",
                "The '@' must come before the last '.'",
            ));
        }
    }
    Ok(())
}

fn has_no_invalid_chars(email: &str, messages: &Messages) -> ValidationResult {
    if email.chars().any(|c| c.is_whitespace() || !c.is_ascii()) {
        Err(messages.get_validation_message(
            "email.invalid_chars",
            "Email must not contain spaces or non-ASCII characters",
        ))
    } else {
        Ok(())
    }
}

fn has_no_consecutive_dots(email: &str, messages: &Messages) -> ValidationResult {
    if email.contains("..") {
        Err(messages.get_validation_message(
            "email.consecutive_dots",
            "Email must not contain consecutive dots",
        ))
    } else {
        Ok(())
    }
}

fn has_no_leading_or_trailing_dot(email: &str, messages: &Messages) -> ValidationResult {
    if email.starts_with('.') || email.ends_with('.') {
        Err(messages.get_validation_message(
            "email.starts_or_ends_with_dot",
            "Email must not start or end with a dot",
        ))
    } else {
        Ok(())
    }
}

fn domain_exists(email: &str, messages: &Messages) -> ValidationResult {
    match get_domain(email) {
        Some(domain) if !domain.is_empty() => Ok(()),
        _ => Err(messages.get_validation_message(
            "email.missing_domain",
            "Email must have a domain part after '@'",
        )),
    }
}

fn is_structure_valid_domain(email: &str, messages: &Messages) -> ValidationResult {
    if let Some(domain) = get_domain(email) {
        if domain.starts_with('.') || !domain.contains('.') || domain.contains('@') {
            return Err(messages.get_validation_message(
                "email.invalid_domain",
                "The domain part of the email is invalid",
            ));
        }
    }
    Ok(())
}

fn has_valid_tld_format(email: &str, messages: &Messages) -> ValidationResult {
    if let Some(domain) = get_domain(email) {
        if let Some(last_dot_index) = domain.rfind('.') {
            let tld = &domain[last_dot_index + 1..];
            if tld.len() < MIN_TLD_LENGTH || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(messages.get_validation_message(
                    "email.invalid_tld",
                    &format!(
                        "The TLD (after the last '.') must be at least {} characters long and alphabetic",
                        MIN_TLD_LENGTH
                    ),
                ));
            }
        }
    }
    Ok(())
}

fn is_overall_format_valid(email: &str, messages: &Messages) -> ValidationResult {
    if EmailAddress::is_valid(email) {
        Ok(())
    } else {
        Err(messages.get_validation_message("email.invalid_format", "Invalid email format"))
    }
}

fn get_domain(email: &str) -> Option<&str> {
    email.split_once('@').map(|(_, domain)| domain)
}

pub fn validate_email(email: &str, messages: &Messages) -> Result<(), ValidationError> {
    let validations: [ValidationRule; 10] = [
        has_min_length,
        has_max_length,
        has_at_and_dot,
        is_at_before_dot,
        has_no_invalid_chars,
        has_no_consecutive_dots,
        has_no_leading_or_trailing_dot,
        domain_exists,
        is_structure_valid_domain,
        has_valid_tld_format,
    ];

    let mut errors: Vec<String> = validations
        .par_iter()
        .filter_map(|validate| validate(email, messages).err())
        .collect();

    if errors.is_empty() {
        if let Err(msg) = is_overall_format_valid(email, messages) {
            errors.push(msg);
        }
    }

    if !errors.is_empty() {
        let concatenated_errors = errors.join(", ");
        return Err(add_error("email.invalid", concatenated_errors, email));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_short_single_letter_domains() {
        let messages = Messages::default();
        assert!(validate_email("a@x.com", &messages).is_ok());
        assert!(validate_email("admin@demo.com", &messages).is_ok());
    }

    #[test]
    fn rejects_malformed_addresses() {
        let messages = Messages::default();
        for email in [
            "",
            "plainaddress",
            "a@b",
            "a@.com",
            "a..b@x.com",
            "a b@x.com",
            "a@x.c",
            "a@x.c0m",
            "a@b@x.com",
            "user@domain.",
        ] {
            assert!(validate_email(email, &messages).is_err(), "{email}");
        }
    }

    #[test]
    fn error_keeps_offending_value() {
        let err = validate_email("nope", &Messages::default()).unwrap_err();
        assert_eq!(err.code, "email.invalid");
        assert_eq!(err.params["value"], "nope");
    }
}
