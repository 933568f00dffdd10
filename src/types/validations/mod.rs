use crate::utils::locale_utils::Messages;

pub type ValidationResult = Result<(), String>;

/// One validation rule: a field value plus the request's message catalog.
pub type ValidationRule = fn(&str, &Messages) -> ValidationResult;
