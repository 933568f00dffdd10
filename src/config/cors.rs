use actix_cors::Cors;
use actix_web::http::{Method, header};

/// The console runs on a separate origin and sends the session cookie, so
/// credentials must be allowed for exactly that origin.
pub fn configure_cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
        ])
        .supports_credentials()
        .max_age(3600)
}
