use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TOKEN_TYPE;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Session {
    pub token: String,

    pub token_type: String,

    pub email: String,

    pub organization_name: String,

    pub created_at: DateTime<Utc>,

    /// Advisory only unless expiry enforcement is configured.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn new(
        token: String,
        email: &str,
        organization_name: &str,
        now: DateTime<Utc>,
        ttl_secs: u64,
    ) -> Self {
        Self {
            token,
            token_type: TOKEN_TYPE.to_string(),
            email: email.to_string(),
            organization_name: organization_name.to_string(),
            created_at: now,
            expires_at: now + Duration::seconds(ttl_secs as i64),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
