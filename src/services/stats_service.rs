use crate::{
    models::{
        organization_model::Organization,
        stats_model::{GrowthPoint, OrgStats},
    },
    types::models::organization::organization_status::OrganizationStatus,
};

/// Dashboard metrics over the full record set, deleted records included.
///
/// `growth` is the cumulative creation count: records sorted by `created_at`
/// (ties keep their storage order), each paired with its 1-based rank.
pub fn compute_stats(organizations: &[Organization]) -> OrgStats {
    let count_with = |status: OrganizationStatus| {
        organizations
            .iter()
            .filter(|org| org.status == status)
            .count()
    };

    let mut created: Vec<_> = organizations.iter().map(|org| org.created_at).collect();
    created.sort();

    let growth = created
        .into_iter()
        .enumerate()
        .map(|(index, date)| GrowthPoint {
            date,
            count: index + 1,
        })
        .collect();

    OrgStats {
        total: organizations.len(),
        active: count_with(OrganizationStatus::Active),
        suspended: count_with(OrganizationStatus::Suspended),
        deleted: count_with(OrganizationStatus::Deleted),
        growth,
    }
}
