use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin email/password pair registered together with an organization.
///
/// Ownership is the `organization_id`; `organization_name` only follows the
/// record for display.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminCredential {
    pub email: String,

    pub password_hash: String,

    pub organization_id: String,

    pub organization_name: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}
