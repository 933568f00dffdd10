use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::auth_handler::{login_handler, logout_handler, session_status_handler},
    services::auth_service::AuthService,
};

pub fn configure_auth_routes(
    cfg: &mut web::ServiceConfig,
    auth_service_data: web::Data<Arc<AuthService>>,
) {
    cfg.service(
        web::scope("/admin")
            .app_data(auth_service_data)
            .route("/login", web::post().to(login_handler))
            .route("/logout", web::post().to(logout_handler))
            .route("/session", web::get().to(session_status_handler)),
    );
}
