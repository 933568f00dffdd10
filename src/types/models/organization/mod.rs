pub mod organization_status;
