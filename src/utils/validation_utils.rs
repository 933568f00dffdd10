use actix_web::{HttpResponse, http::header::WWW_AUTHENTICATE};
use serde_json::json;
use std::{borrow::Cow, collections::HashMap};
use validator::{ValidationError, ValidationErrors};

use crate::{
    errors::ConsoleError,
    types::{
        requests::{
            auth::login_request::LoginRequest,
            organization::{
                create_organization_request::CreateOrganizationRequest,
                delete_organization_request::DeleteOrganizationRequest,
                update_organization_request::UpdateOrganizationRequest,
            },
        },
        responses::api_response::{ApiResponse, ErrorDetails},
    },
    utils::locale_utils::Messages,
    validations::{
        email::validate_email,
        organization_name::validate_organization_name,
        password::{validate_password, validate_password_present},
    },
};

pub fn handle_validation_error(errors: &ValidationErrors, msg: &str) -> HttpResponse {
    let error_details = ErrorDetails {
        details: Some(json!(errors)),
    };
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg, error_details))
}

pub fn handle_internal_error(err: impl ToString) -> HttpResponse {
    let error_details = ErrorDetails { details: None };
    HttpResponse::InternalServerError()
        .json(ApiResponse::<()>::error(err.to_string(), error_details))
}

/// Maps a service failure onto its HTTP status with the shared envelope.
pub fn handle_console_error(err: &ConsoleError) -> HttpResponse {
    let error_details = || ErrorDetails { details: None };

    match err {
        ConsoleError::Validation { message, errors } => handle_validation_error(errors, message),
        ConsoleError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(msg, error_details()))
        }
        ConsoleError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(msg, error_details()))
        }
        ConsoleError::Unauthorized(msg) => HttpResponse::Unauthorized()
            .insert_header((WWW_AUTHENTICATE, "Bearer"))
            .json(ApiResponse::<()>::error(msg, error_details())),
        ConsoleError::Storage(msg) => HttpResponse::ServiceUnavailable()
            .json(ApiResponse::<()>::error(msg, error_details())),
        ConsoleError::Internal(msg) => handle_internal_error(msg),
    }
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_create_data(
    data: &CreateOrganizationRequest,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_organization_name(&data.organization_name, messages) {
        errors.add("organization_name", e);
    }
    if let Err(e) = validate_email(&data.email, messages) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password(&data.password, messages) {
        errors.add("password", e);
    }

    into_result(errors)
}

pub fn validate_update_data(
    data: &UpdateOrganizationRequest,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if data.old_organization_name.trim().is_empty() {
        errors.add(
            "old_organization_name",
            add_error(
                "organization_name.invalid",
                messages.get_validation_message(
                    "organization_name.empty",
                    "Organization name must not be empty",
                ),
                &data.old_organization_name,
            ),
        );
    }
    if let Err(e) = validate_organization_name(&data.new_organization_name, messages) {
        errors.add("new_organization_name", e);
    }
    if let Err(e) = validate_email(&data.email, messages) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password_present(&data.password, messages) {
        errors.add("password", e);
    }

    into_result(errors)
}

pub fn validate_delete_data(
    data: &DeleteOrganizationRequest,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if data.organization_name.trim().is_empty() {
        errors.add(
            "organization_name",
            add_error(
                "organization_name.invalid",
                messages.get_validation_message(
                    "organization_name.empty",
                    "Organization name must not be empty",
                ),
                &data.organization_name,
            ),
        );
    }
    if let Err(e) = validate_email(&data.email, messages) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password_present(&data.password, messages) {
        errors.add("password", e);
    }

    into_result(errors)
}

pub fn validate_login_data(
    data: &LoginRequest,
    messages: &Messages,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = validate_email(&data.email, messages) {
        errors.add("email", e);
    }
    if let Err(e) = validate_password_present(&data.password, messages) {
        errors.add("password", e);
    }

    into_result(errors)
}

pub fn add_error(code: &'static str, message: String, field_value: &str) -> ValidationError {
    ValidationError {
        code: code.into(),
        message: Some(Cow::Owned(message)),
        params: {
            let mut params = HashMap::new();
            params.insert("value".into(), json!(field_value));
            params
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn create_data_collects_every_failing_field() {
        let data = CreateOrganizationRequest {
            organization_name: "".into(),
            email: "broken".into(),
            password: "short".into(),
        };

        let errors = validate_create_data(&data, &Messages::default()).unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("organization_name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn update_data_only_requires_password_presence() {
        let data = UpdateOrganizationRequest {
            old_organization_name: "Acme Corp".into(),
            new_organization_name: "Acme Holdings".into(),
            email: "a@x.com".into(),
            password: "short".into(),
        };

        assert!(validate_update_data(&data, &Messages::default()).is_ok());
    }

    #[test]
    fn console_errors_map_to_status_codes() {
        let cases = [
            (ConsoleError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ConsoleError::Conflict("x".into()), StatusCode::CONFLICT),
            (ConsoleError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (
                ConsoleError::validation("x", ValidationErrors::new()),
                StatusCode::BAD_REQUEST,
            ),
            (ConsoleError::Storage("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ConsoleError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(handle_console_error(&err).status(), status);
        }
    }
}
