use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    services::auth_service::AuthService,
    types::{requests::auth::login_request::LoginRequest, responses::api_response::ApiResponse},
    utils::{
        auth_utils::{expired_cookie, extract_token, generate_cookie},
        locale_utils::{Messages, get_lang},
        validation_utils::handle_console_error,
    },
};

pub async fn login_handler(
    req: HttpRequest,
    auth_service: web::Data<Arc<AuthService>>,
    credentials: web::Json<LoginRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match auth_service.login(credentials.into_inner(), &messages).await {
        Ok(auth) => {
            let cookie = generate_cookie(
                auth_service.cookie_name(),
                auth.access_token.clone(),
                auth_service.token_ttl_secs(),
            );
            HttpResponse::Ok().cookie(cookie).json(ApiResponse::success(
                messages.get_auth_message("login.success", "Login successful"),
                auth,
            ))
        }
        Err(err) => handle_console_error(&err),
    }
}

pub async fn logout_handler(
    req: HttpRequest,
    auth_service: web::Data<Arc<AuthService>>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);
    let token = extract_token(&req, auth_service.cookie_name());

    match auth_service.logout(token.as_deref(), &messages).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(expired_cookie(auth_service.cookie_name()))
            .json(ApiResponse::success(
                messages.get_auth_message("logout.success", "Logged out successfully."),
                None::<()>,
            )),
        Err(err) => handle_console_error(&err),
    }
}

pub async fn session_status_handler(
    req: HttpRequest,
    auth_service: web::Data<Arc<AuthService>>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);
    let token = extract_token(&req, auth_service.cookie_name());

    let status = auth_service.session_status(token.as_deref()).await;
    HttpResponse::Ok().json(ApiResponse::success(
        messages.get_auth_message("session.status", "Session status retrieved"),
        status,
    ))
}
