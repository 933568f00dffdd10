use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    types::models::organization::organization_status::OrganizationStatus,
    utils::collection_utils::derive_collection_name,
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Organization {
    pub id: String,

    #[serde(rename = "organization_name")]
    pub name: String,

    pub collection_name: String,

    #[serde(default)]
    pub status: OrganizationStatus,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Organization {
    pub fn new(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        let name = name.into();

        Self {
            id: Uuid::new_v4().to_string(),
            collection_name: derive_collection_name(&name),
            name,
            status: OrganizationStatus::Active,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// A live organization is any record that has not been soft-deleted.
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    pub fn rename(&mut self, new_name: &str, at: DateTime<Utc>) {
        self.name = new_name.to_string();
        self.collection_name = derive_collection_name(new_name);
        self.touch(at);
    }

    /// Returns `false` when the record was already deleted; nothing changes then.
    pub fn soft_delete(&mut self, at: DateTime<Utc>) -> bool {
        if !self.is_live() {
            return false;
        }

        self.status = OrganizationStatus::Deleted;
        self.touch(at);
        self.deleted_at = Some(self.updated_at);
        true
    }

    // updated_at must move forward even when the clock does not.
    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = if at > self.updated_at {
            at
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_organization_is_active_with_matching_timestamps() {
        let now = Utc::now();
        let org = Organization::new("Acme Corp", now);

        assert_eq!(org.collection_name, "org_acme_corp");
        assert_eq!(org.status, OrganizationStatus::Active);
        assert_eq!(org.created_at, org.updated_at);
        assert!(org.deleted_at.is_none());
    }

    #[test]
    fn rename_moves_updated_at_forward_even_with_a_stale_clock() {
        let now = Utc::now();
        let mut org = Organization::new("Acme Corp", now);

        org.rename("Acme  Holdings", now - Duration::seconds(5));

        assert_eq!(org.collection_name, "org_acme_holdings");
        assert!(org.updated_at > org.created_at);
    }

    #[test]
    fn soft_delete_only_applies_once() {
        let now = Utc::now();
        let mut org = Organization::new("Globex", now);

        assert!(org.soft_delete(now + Duration::seconds(1)));
        let deleted_at = org.deleted_at;
        let updated_at = org.updated_at;

        assert!(!org.soft_delete(now + Duration::seconds(2)));
        assert_eq!(org.deleted_at, deleted_at);
        assert_eq!(org.updated_at, updated_at);
        assert_eq!(org.deleted_at, Some(org.updated_at));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let org = Organization::new("Acme Corp", Utc::now());
        let json = serde_json::to_value(&org).unwrap();

        assert_eq!(json["organization_name"], "Acme Corp");
        assert_eq!(json["status"], "active");
        assert!(json.get("deleted_at").is_none());
    }
}
