pub mod create_organization_request;
pub mod delete_organization_request;
pub mod organization_query;
pub mod update_organization_request;
