use chrono::Utc;
use log::{error, info, warn};
use std::sync::Arc;

use crate::{
    errors::{ConsoleError, ConsoleResult},
    models::{organization_model::Organization, stats_model::OrgStats},
    repositories::storage::{OrganizationStorage, StorageError},
    services::{credential_service::CredentialService, stats_service::compute_stats},
    types::requests::organization::{
        create_organization_request::CreateOrganizationRequest,
        delete_organization_request::DeleteOrganizationRequest,
        update_organization_request::UpdateOrganizationRequest,
    },
    utils::{
        locale_utils::Messages,
        validation_utils::{validate_create_data, validate_delete_data, validate_update_data},
    },
};

pub struct OrganizationService {
    organization_repository: Arc<dyn OrganizationStorage>,
    credential_service: Arc<CredentialService>,
}

fn not_found(name: &str, messages: &Messages) -> ConsoleError {
    ConsoleError::NotFound(format!(
        "{}: {}",
        messages.get_organization_message("fetch.not_found", "Organization not found"),
        name
    ))
}

fn duplicate_name(path: &str, name: &str, messages: &Messages) -> ConsoleError {
    ConsoleError::Conflict(format!(
        "{}: {}",
        messages.get_organization_message(path, "Organization name already exists"),
        name
    ))
}

/// The live record wins; otherwise the most recently deleted one.
fn pick_current(records: Vec<Organization>) -> Option<Organization> {
    let (live, deleted): (Vec<_>, Vec<_>) = records.into_iter().partition(Organization::is_live);

    live.into_iter().next().or_else(|| {
        deleted
            .into_iter()
            .max_by_key(|org| org.deleted_at.unwrap_or(org.updated_at))
    })
}

impl OrganizationService {
    pub fn new(
        organization_repository: Arc<dyn OrganizationStorage>,
        credential_service: Arc<CredentialService>,
    ) -> Self {
        Self {
            organization_repository,
            credential_service,
        }
    }

    /// Live organizations in storage order, optionally narrowed by a
    /// case-insensitive name search.
    pub async fn list_organizations(
        &self,
        search: Option<&str>,
        messages: &Messages,
    ) -> ConsoleResult<Vec<Organization>> {
        let needle = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let organizations = self.list_all_organizations(messages).await?;

        Ok(organizations
            .into_iter()
            .filter(Organization::is_live)
            .filter(|org| {
                needle
                    .as_deref()
                    .is_none_or(|needle| org.name.to_lowercase().contains(needle))
            })
            .collect())
    }

    pub async fn list_all_organizations(
        &self,
        messages: &Messages,
    ) -> ConsoleResult<Vec<Organization>> {
        self.organization_repository
            .find_all()
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))
    }

    pub async fn get_organization(
        &self,
        name: &str,
        messages: &Messages,
    ) -> ConsoleResult<Organization> {
        let records = self
            .organization_repository
            .find_by_name(name)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))?;

        pick_current(records).ok_or_else(|| not_found(name, messages))
    }

    pub async fn dashboard_stats(&self, messages: &Messages) -> ConsoleResult<OrgStats> {
        let organizations = self.list_all_organizations(messages).await?;
        Ok(compute_stats(&organizations))
    }

    /// Inserts the organization, then its admin credential. The organization
    /// is removed again when the credential cannot be stored.
    pub async fn create_organization(
        &self,
        data: CreateOrganizationRequest,
        messages: &Messages,
    ) -> ConsoleResult<Organization> {
        validate_create_data(&data, messages).map_err(|errors| {
            ConsoleError::validation(
                messages.get_validation_message(
                    "create.invalid_data",
                    "Invalid organization data",
                ),
                errors,
            )
        })?;

        if self
            .credential_service
            .is_registered(&data.email, messages)
            .await?
        {
            return Err(ConsoleError::Conflict(format!(
                "{}: {}",
                messages.get_auth_message(
                    "admin.duplicate_email",
                    "An admin with this email is already registered"
                ),
                data.email
            )));
        }

        let organization = self
            .organization_repository
            .insert(Organization::new(data.organization_name.as_str(), Utc::now()))
            .await
            .map_err(|err| match err {
                StorageError::Duplicate(_) => {
                    duplicate_name("create.duplicate", &data.organization_name, messages)
                }
                other => ConsoleError::from_storage(other, messages),
            })?;

        if let Err(err) = self
            .credential_service
            .register(&data.email, &data.password, &organization, messages)
            .await
        {
            warn!(
                "Rolling back organization '{}': admin credential was not stored ({})",
                organization.name, err
            );
            if let Err(rollback_err) = self.organization_repository.remove(&organization.id).await
            {
                error!(
                    "Failed to roll back organization '{}': {}",
                    organization.name, rollback_err
                );
            }
            return Err(err);
        }

        info!(
            "Organization '{}' created with collection '{}'",
            organization.name, organization.collection_name
        );
        Ok(organization)
    }

    pub async fn update_organization(
        &self,
        data: UpdateOrganizationRequest,
        messages: &Messages,
    ) -> ConsoleResult<Organization> {
        validate_update_data(&data, messages).map_err(|errors| {
            ConsoleError::validation(
                messages.get_validation_message(
                    "update.invalid_data",
                    "Invalid organization update data",
                ),
                errors,
            )
        })?;

        let Some(current) = self
            .organization_repository
            .find_by_name(&data.old_organization_name)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))?
            .into_iter()
            .find(Organization::is_live)
        else {
            return Err(not_found(&data.old_organization_name, messages));
        };

        self.credential_service
            .authorize_for(&current, &data.email, &data.password, messages)
            .await?;

        let mut renamed = current.clone();
        renamed.rename(&data.new_organization_name, Utc::now());

        let renamed = self
            .organization_repository
            .replace(renamed)
            .await
            .map_err(|err| match err {
                StorageError::Duplicate(_) => {
                    duplicate_name("update.duplicate", &data.new_organization_name, messages)
                }
                StorageError::Missing(_) => not_found(&data.old_organization_name, messages),
                other => ConsoleError::from_storage(other, messages),
            })?;

        // The rename is already stored; a stale display name on the
        // credential does not affect authorization.
        if current.name != renamed.name {
            if let Err(err) = self.credential_service.reassign(&renamed, messages).await {
                warn!(
                    "Credentials of '{}' still show the old name '{}': {}",
                    renamed.name, current.name, err
                );
            }
        }

        info!(
            "Organization '{}' renamed to '{}' (collection '{}')",
            current.name, renamed.name, renamed.collection_name
        );
        Ok(renamed)
    }

    /// Soft delete. Repeating it on a deleted organization returns the record
    /// unchanged.
    pub async fn delete_organization(
        &self,
        data: DeleteOrganizationRequest,
        messages: &Messages,
    ) -> ConsoleResult<Organization> {
        validate_delete_data(&data, messages).map_err(|errors| {
            ConsoleError::validation(
                messages.get_validation_message(
                    "delete.invalid_data",
                    "Invalid organization delete data",
                ),
                errors,
            )
        })?;

        let records = self
            .organization_repository
            .find_by_name(&data.organization_name)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))?;

        let Some(mut organization) = pick_current(records) else {
            return Err(not_found(&data.organization_name, messages));
        };

        self.credential_service
            .authorize_for(&organization, &data.email, &data.password, messages)
            .await?;

        if !organization.soft_delete(Utc::now()) {
            info!("Organization '{}' was already deleted", organization.name);
            return Ok(organization);
        }

        let deleted = self
            .organization_repository
            .replace(organization)
            .await
            .map_err(|err| match err {
                StorageError::Missing(_) => not_found(&data.organization_name, messages),
                other => ConsoleError::from_storage(other, messages),
            })?;

        info!("Organization '{}' soft-deleted", deleted.name);
        Ok(deleted)
    }
}
