pub mod auth_routes;
pub mod organization_routes;

use actix_web::{HttpResponse, error::InternalError, web};
use std::sync::Arc;

use crate::{
    config::app_state::AppState,
    constants::API_PREFIX,
    routes::{auth_routes::configure_auth_routes, organization_routes::configure_organization_routes},
    types::responses::api_response::{ApiResponse, ErrorDetails},
};

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(
        message,
        ErrorDetails { details: None },
    ))
}

/// Malformed bodies and query strings get the same envelope as every other
/// failure.
fn extractor_configs() -> (web::JsonConfig, web::QueryConfig) {
    let json = web::JsonConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    });
    let query = web::QueryConfig::default().error_handler(|err, _req| {
        let response = bad_request(err.to_string());
        InternalError::from_response(err, response).into()
    });
    (json, query)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    let (json_config, query_config) = extractor_configs();
    let auth_service_data = web::Data::new(Arc::clone(&state.auth_service));
    let organization_service_data = web::Data::new(Arc::clone(&state.organization_service));

    cfg.service(
        web::scope(API_PREFIX)
            .app_data(json_config)
            .app_data(query_config)
            .configure(|cfg| configure_auth_routes(cfg, auth_service_data.clone()))
            .configure(|cfg| {
                configure_organization_routes(cfg, organization_service_data, auth_service_data)
            }),
    );
}
