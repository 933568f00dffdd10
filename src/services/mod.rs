pub mod auth_service;
pub mod credential_service;
pub mod organization_service;
pub mod seed_service;
pub mod stats_service;
