use actix_web::{HttpRequest, HttpResponse};

use crate::{
    models::session_model::Session,
    services::auth_service::AuthService,
    utils::{
        auth_utils::extract_token, locale_utils::Messages, validation_utils::handle_console_error,
    },
};

/// Resolves the caller's session, or the ready-made 401 response.
pub async fn require_session(
    req: &HttpRequest,
    auth_service: &AuthService,
    messages: &Messages,
) -> Result<Session, HttpResponse> {
    let token = extract_token(req, auth_service.cookie_name());

    auth_service
        .authenticate(token.as_deref(), messages)
        .await
        .map_err(|err| handle_console_error(&err))
}
