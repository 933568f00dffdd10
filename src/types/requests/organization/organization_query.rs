use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetOrganizationQuery {
    pub organization_name: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct ListOrganizationsQuery {
    #[serde(default)]
    pub search: Option<String>,
}
