use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DeleteOrganizationRequest {
    pub organization_name: String,

    pub email: String,

    pub password: String,
}
