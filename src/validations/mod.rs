pub mod email;
pub mod organization_name;
pub mod password;
