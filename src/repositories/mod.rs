pub mod admin_credential_repository;
pub mod memory_repository;
pub mod organization_repository;
pub mod session_repository;
pub mod storage;
