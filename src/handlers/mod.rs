pub mod auth_handler;
pub mod organization_handler;
