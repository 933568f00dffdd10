use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OrganizationStatus {
    #[default]
    Active,
    Suspended,
    Deleted,
}

impl OrganizationStatus {
    /// Statuses that still hold their organization name.
    pub const LIVE: [OrganizationStatus; 2] =
        [OrganizationStatus::Active, OrganizationStatus::Suspended];

    pub fn is_live(self) -> bool {
        self != OrganizationStatus::Deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn string_forms_are_lowercase() {
        assert_eq!(OrganizationStatus::Suspended.to_string(), "suspended");
        assert_eq!(
            OrganizationStatus::from_str("DELETED").unwrap(),
            OrganizationStatus::Deleted
        );
        assert_eq!(
            serde_json::to_string(&OrganizationStatus::Active).unwrap(),
            "\"active\""
        );
    }
}
