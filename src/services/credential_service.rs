use chrono::Utc;
use log::{info, warn};
use std::sync::Arc;

use crate::{
    config::app_config::BootstrapAdmin,
    errors::{ConsoleError, ConsoleResult},
    models::{admin_credential_model::AdminCredential, organization_model::Organization},
    repositories::storage::{CredentialStorage, StorageError},
    utils::{
        auth_utils::{hash_password, verify_password},
        locale_utils::Messages,
    },
};

pub struct CredentialService {
    credential_repository: Arc<dyn CredentialStorage>,
    bootstrap_admin: Option<BootstrapAdmin>,
}

fn invalid_credentials(messages: &Messages) -> ConsoleError {
    ConsoleError::Unauthorized(
        messages.get_auth_message("login.invalid_credentials", "Invalid email or password"),
    )
}

fn duplicate_email(email: &str, messages: &Messages) -> ConsoleError {
    ConsoleError::Conflict(format!(
        "{}: {}",
        messages.get_auth_message(
            "admin.duplicate_email",
            "An admin with this email is already registered"
        ),
        email
    ))
}

impl CredentialService {
    pub fn new(
        credential_repository: Arc<dyn CredentialStorage>,
        bootstrap_admin: Option<BootstrapAdmin>,
    ) -> Self {
        Self {
            credential_repository,
            bootstrap_admin,
        }
    }

    fn bootstrap_match(&self, email: &str, password: &str) -> Option<&BootstrapAdmin> {
        self.bootstrap_admin
            .as_ref()
            .filter(|admin| admin.matches(email, password))
    }

    async fn verify_stored(
        &self,
        email: &str,
        password: &str,
        messages: &Messages,
    ) -> ConsoleResult<AdminCredential> {
        let Some(credential) = self
            .credential_repository
            .find_by_email(email)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))?
        else {
            warn!("Rejected credentials for unknown admin '{}'", email);
            return Err(invalid_credentials(messages));
        };

        let valid = verify_password(password, &credential.password_hash).map_err(|err| {
            ConsoleError::Internal(format!(
                "Stored password hash for '{}' is unreadable: {}",
                email, err
            ))
        })?;

        if !valid {
            warn!("Rejected password for admin '{}'", email);
            return Err(invalid_credentials(messages));
        }

        Ok(credential)
    }

    /// Returns the name of the organization the credential administers.
    pub async fn verify(
        &self,
        email: &str,
        password: &str,
        messages: &Messages,
    ) -> ConsoleResult<String> {
        if let Some(admin) = self.bootstrap_match(email, password) {
            return Ok(admin.organization_name.clone());
        }

        let credential = self.verify_stored(email, password, messages).await?;
        Ok(credential.organization_name)
    }

    /// Succeeds when the pair was registered with this exact record. The
    /// bootstrap admin administers every organization.
    pub async fn authorize_for(
        &self,
        organization: &Organization,
        email: &str,
        password: &str,
        messages: &Messages,
    ) -> ConsoleResult<()> {
        if self.bootstrap_match(email, password).is_some() {
            return Ok(());
        }

        let credential = self.verify_stored(email, password, messages).await?;
        if credential.organization_id != organization.id {
            warn!(
                "Admin '{}' of organization {} is not allowed to modify '{}' ({})",
                email, credential.organization_id, organization.name, organization.id
            );
            return Err(ConsoleError::Unauthorized(messages.get_auth_message(
                "admin.not_authorized",
                "These admin credentials do not manage this organization",
            )));
        }

        Ok(())
    }

    pub async fn is_registered(&self, email: &str, messages: &Messages) -> ConsoleResult<bool> {
        if self
            .bootstrap_admin
            .as_ref()
            .is_some_and(|admin| admin.email == email)
        {
            return Ok(true);
        }

        let credential = self
            .credential_repository
            .find_by_email(email)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))?;
        Ok(credential.is_some())
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        organization: &Organization,
        messages: &Messages,
    ) -> ConsoleResult<AdminCredential> {
        if self
            .bootstrap_admin
            .as_ref()
            .is_some_and(|admin| admin.email == email)
        {
            return Err(duplicate_email(email, messages));
        }

        let password_hash = hash_password(password).map_err(|err| {
            ConsoleError::Internal(format!("Failed to hash password for '{}': {}", email, err))
        })?;

        let credential = AdminCredential {
            email: email.to_string(),
            password_hash,
            organization_id: organization.id.clone(),
            organization_name: organization.name.clone(),
            created_at: Utc::now(),
        };

        self.credential_repository
            .insert(credential.clone())
            .await
            .map_err(|err| match err {
                StorageError::Duplicate(_) => duplicate_email(email, messages),
                other => ConsoleError::from_storage(other, messages),
            })?;

        info!(
            "Registered admin '{}' for organization '{}'",
            email, organization.name
        );
        Ok(credential)
    }

    /// Keeps the display name on the organization's credentials in step
    /// with a rename.
    pub async fn reassign(
        &self,
        organization: &Organization,
        messages: &Messages,
    ) -> ConsoleResult<u64> {
        self.credential_repository
            .reassign(&organization.id, &organization.name)
            .await
            .map_err(|err| ConsoleError::from_storage(err, messages))
    }
}
