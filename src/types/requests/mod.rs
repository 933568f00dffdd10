pub mod auth;
pub mod organization;
