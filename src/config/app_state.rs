use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use std::sync::Arc;

use crate::{
    config::{
        app_config::{AppConfig, MongoSettings, StorageBackend},
        database::{connect_to_database, create_unique_indexes},
    },
    repositories::{
        admin_credential_repository::AdminCredentialRepository,
        memory_repository::{
            InMemoryCredentialRepository, InMemoryOrganizationRepository,
            InMemorySessionRepository,
        },
        organization_repository::OrganizationRepository,
        session_repository::SessionRepository,
        storage::{CredentialStorage, OrganizationStorage, SessionStorage},
    },
    services::{
        auth_service::AuthService, credential_service::CredentialService,
        organization_service::OrganizationService, seed_service::seed_demo_organizations,
    },
};

/// One handle per persisted table, all from the same backend.
pub struct StorageHandles {
    pub organizations: Arc<dyn OrganizationStorage>,
    pub credentials: Arc<dyn CredentialStorage>,
    pub sessions: Arc<dyn SessionStorage>,
}

impl StorageHandles {
    pub fn in_memory() -> Self {
        Self {
            organizations: Arc::new(InMemoryOrganizationRepository::default()),
            credentials: Arc::new(InMemoryCredentialRepository::default()),
            sessions: Arc::new(InMemorySessionRepository::default()),
        }
    }

    pub async fn mongodb(settings: &MongoSettings) -> Result<Self> {
        let client = connect_to_database(settings)
            .await
            .with_context(|| format!("Failed to connect to MongoDB at {}", settings.uri))?;

        create_unique_indexes(&client, settings)
            .await
            .context("Failed to create MongoDB indexes")?;

        let organizations = OrganizationRepository::new(
            &client,
            &settings.db_name,
            &settings.organizations_collection,
        )
        .await
        .context("Failed to open the organizations collection")?;
        let credentials =
            AdminCredentialRepository::new(&client, &settings.db_name, &settings.admins_collection)
                .await
                .context("Failed to open the admins collection")?;
        let sessions =
            SessionRepository::new(&client, &settings.db_name, &settings.sessions_collection)
                .await
                .context("Failed to open the sessions collection")?;

        Ok(Self {
            organizations: Arc::new(organizations),
            credentials: Arc::new(credentials),
            sessions: Arc::new(sessions),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub organization_service: Arc<OrganizationService>,
    pub credential_service: Arc<CredentialService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub async fn build(config: &AppConfig) -> Result<Self> {
        let storage = match config.storage_backend {
            StorageBackend::Memory => {
                info!("Using in-memory storage; data is lost on restart");
                StorageHandles::in_memory()
            }
            StorageBackend::MongoDb => {
                info!(
                    "Using MongoDB storage, database '{}'",
                    config.mongodb.db_name
                );
                StorageHandles::mongodb(&config.mongodb).await?
            }
        };

        if config.seed_demo_data {
            seed_demo_organizations(storage.organizations.as_ref(), Utc::now())
                .await
                .context("Failed to seed demo organizations")?;
        }

        Ok(Self::from_storage(storage, config))
    }

    pub fn from_storage(storage: StorageHandles, config: &AppConfig) -> Self {
        let credential_service = Arc::new(CredentialService::new(
            storage.credentials,
            config.bootstrap_admin.clone(),
        ));

        let organization_service = Arc::new(OrganizationService::new(
            storage.organizations,
            Arc::clone(&credential_service),
        ));

        let auth_service = Arc::new(AuthService::new(
            storage.sessions,
            Arc::clone(&credential_service),
            config.auth.clone(),
        ));

        Self {
            organization_service,
            credential_service,
            auth_service,
        }
    }
}
