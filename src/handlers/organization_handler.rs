use actix_web::{HttpRequest, HttpResponse, web};
use log::debug;
use std::sync::Arc;

use crate::{
    services::{auth_service::AuthService, organization_service::OrganizationService},
    types::{
        requests::organization::{
            create_organization_request::CreateOrganizationRequest,
            delete_organization_request::DeleteOrganizationRequest,
            organization_query::{GetOrganizationQuery, ListOrganizationsQuery},
            update_organization_request::UpdateOrganizationRequest,
        },
        responses::api_response::ApiResponse,
    },
    utils::{
        locale_utils::{Messages, get_lang},
        session_utils::require_session,
        validation_utils::handle_console_error,
    },
};

pub async fn list_organizations_handler(
    req: HttpRequest,
    organization_service: web::Data<Arc<OrganizationService>>,
    auth_service: web::Data<Arc<AuthService>>,
    query: web::Query<ListOrganizationsQuery>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    if let Err(response) = require_session(&req, &auth_service, &messages).await {
        return response;
    }

    match organization_service
        .list_organizations(query.search.as_deref(), &messages)
        .await
    {
        Ok(organizations) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_organization_message(
                "fetch.all_success",
                "Organizations retrieved successfully",
            ),
            organizations,
        )),
        Err(err) => handle_console_error(&err),
    }
}

pub async fn get_dashboard_stats_handler(
    req: HttpRequest,
    organization_service: web::Data<Arc<OrganizationService>>,
    auth_service: web::Data<Arc<AuthService>>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    if let Err(response) = require_session(&req, &auth_service, &messages).await {
        return response;
    }

    match organization_service.dashboard_stats(&messages).await {
        Ok(stats) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_organization_message("stats.success", "Dashboard statistics retrieved"),
            stats,
        )),
        Err(err) => handle_console_error(&err),
    }
}

pub async fn get_organization_handler(
    req: HttpRequest,
    organization_service: web::Data<Arc<OrganizationService>>,
    auth_service: web::Data<Arc<AuthService>>,
    query: web::Query<GetOrganizationQuery>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    if let Err(response) = require_session(&req, &auth_service, &messages).await {
        return response;
    }

    match organization_service
        .get_organization(&query.organization_name, &messages)
        .await
    {
        Ok(organization) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_organization_message("fetch.success", "Organization retrieved"),
            organization,
        )),
        Err(err) => handle_console_error(&err),
    }
}

pub async fn create_organization_handler(
    req: HttpRequest,
    organization_service: web::Data<Arc<OrganizationService>>,
    auth_service: web::Data<Arc<AuthService>>,
    organization: web::Json<CreateOrganizationRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let session = match require_session(&req, &auth_service, &messages).await {
        Ok(session) => session,
        Err(response) => return response,
    };
    debug!("Create organization requested by {}", session.email);

    match organization_service
        .create_organization(organization.into_inner(), &messages)
        .await
    {
        Ok(new_org) => HttpResponse::Created().json(ApiResponse::success(
            messages.get_organization_message("create.success", "Organization created"),
            new_org,
        )),
        Err(err) => handle_console_error(&err),
    }
}

pub async fn update_organization_handler(
    req: HttpRequest,
    organization_service: web::Data<Arc<OrganizationService>>,
    auth_service: web::Data<Arc<AuthService>>,
    organization: web::Json<UpdateOrganizationRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    if let Err(response) = require_session(&req, &auth_service, &messages).await {
        return response;
    }

    match organization_service
        .update_organization(organization.into_inner(), &messages)
        .await
    {
        Ok(updated_org) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_organization_message("update.success", "Organization updated"),
            updated_org,
        )),
        Err(err) => handle_console_error(&err),
    }
}

pub async fn delete_organization_handler(
    req: HttpRequest,
    organization_service: web::Data<Arc<OrganizationService>>,
    auth_service: web::Data<Arc<AuthService>>,
    organization: web::Json<DeleteOrganizationRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    if let Err(response) = require_session(&req, &auth_service, &messages).await {
        return response;
    }

    match organization_service
        .delete_organization(organization.into_inner(), &messages)
        .await
    {
        Ok(deleted_org) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_organization_message("delete.success", "Organization deleted"),
            deleted_org,
        )),
        Err(err) => handle_console_error(&err),
    }
}
