use actix_web::web;
use std::sync::Arc;

use crate::{
    handlers::organization_handler::{
        create_organization_handler, delete_organization_handler, get_dashboard_stats_handler,
        get_organization_handler, list_organizations_handler, update_organization_handler,
    },
    services::{auth_service::AuthService, organization_service::OrganizationService},
};

pub fn configure_organization_routes(
    cfg: &mut web::ServiceConfig,
    organization_service_data: web::Data<Arc<OrganizationService>>,
    auth_service_data: web::Data<Arc<AuthService>>,
) {
    cfg.service(
        web::scope("/org")
            .app_data(organization_service_data)
            .app_data(auth_service_data)
            .route("/list", web::get().to(list_organizations_handler))
            .route("/stats", web::get().to(get_dashboard_stats_handler))
            .route("/get", web::get().to(get_organization_handler))
            .route("/create", web::post().to(create_organization_handler))
            .route("/update", web::put().to(update_organization_handler))
            .route("/delete", web::delete().to(delete_organization_handler)),
    );
}
