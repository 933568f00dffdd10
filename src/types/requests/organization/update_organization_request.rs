use serde::Deserialize;

/// Rename request; `email`/`password` re-authorize against the old name.
#[derive(Debug, Deserialize, Clone)]
pub struct UpdateOrganizationRequest {
    pub old_organization_name: String,

    pub new_organization_name: String,

    pub email: String,

    pub password: String,
}
