pub mod admin_credential_model;
pub mod organization_model;
pub mod session_model;
pub mod stats_model;
