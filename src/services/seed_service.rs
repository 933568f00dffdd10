use chrono::{DateTime, Duration, Utc};
use log::info;

use crate::{
    models::organization_model::Organization,
    repositories::storage::{OrganizationStorage, StorageResult},
    types::models::organization::organization_status::OrganizationStatus,
};

const DEMO_ORGANIZATIONS: [(&str, OrganizationStatus, i64); 6] = [
    ("Acme Corp", OrganizationStatus::Active, 60),
    ("Globex Corporation", OrganizationStatus::Active, 45),
    ("Soylent Corp", OrganizationStatus::Suspended, 30),
    ("Umbrella Corp", OrganizationStatus::Deleted, 90),
    ("Stark Industries", OrganizationStatus::Active, 15),
    ("Cyberdyne Systems", OrganizationStatus::Active, 5),
];

const DEMO_DELETED_DAYS_AGO: i64 = 10;

fn demo_organization(
    name: &str,
    status: OrganizationStatus,
    age_days: i64,
    now: DateTime<Utc>,
) -> Organization {
    let mut organization = Organization::new(name, now - Duration::days(age_days));

    match status {
        OrganizationStatus::Deleted => {
            organization.soft_delete(now - Duration::days(DEMO_DELETED_DAYS_AGO));
        }
        other => {
            organization.status = other;
            organization.updated_at = now;
        }
    }

    organization
}

/// Fills an empty store with sample tenants. Returns how many were inserted;
/// a store that already holds records is left alone.
pub async fn seed_demo_organizations(
    storage: &dyn OrganizationStorage,
    now: DateTime<Utc>,
) -> StorageResult<usize> {
    if !storage.find_all().await?.is_empty() {
        info!("Organization store is not empty, skipping demo data");
        return Ok(0);
    }

    for (name, status, age_days) in DEMO_ORGANIZATIONS {
        storage
            .insert(demo_organization(name, status, age_days, now))
            .await?;
    }

    info!("Seeded {} demo organizations", DEMO_ORGANIZATIONS.len());
    Ok(DEMO_ORGANIZATIONS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::memory_repository::InMemoryOrganizationRepository,
        services::stats_service::compute_stats,
    };

    #[tokio::test]
    async fn seeds_only_an_empty_store() {
        let storage = InMemoryOrganizationRepository::default();
        let now = Utc::now();

        assert_eq!(seed_demo_organizations(&storage, now).await.unwrap(), 6);
        assert_eq!(seed_demo_organizations(&storage, now).await.unwrap(), 0);

        let organizations = storage.find_all().await.unwrap();
        let stats = compute_stats(&organizations);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.active, 4);
        assert_eq!(stats.suspended, 1);
        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.growth[0].date, now - Duration::days(90));
    }

    #[test]
    fn deleted_demo_record_carries_deletion_time() {
        let now = Utc::now();
        let umbrella = demo_organization("Umbrella Corp", OrganizationStatus::Deleted, 90, now);

        assert_eq!(
            umbrella.deleted_at,
            Some(now - Duration::days(DEMO_DELETED_DAYS_AGO))
        );
        assert_eq!(umbrella.updated_at, now - Duration::days(DEMO_DELETED_DAYS_AGO));
    }
}
