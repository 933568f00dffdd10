#![allow(dead_code)]

use futures::future::BoxFuture;
use std::sync::Arc;

use org_console_backend::{
    config::{
        app_config::{AppConfig, BootstrapAdmin},
        app_state::{AppState, StorageHandles},
    },
    models::admin_credential_model::AdminCredential,
    repositories::{
        memory_repository::InMemoryCredentialRepository,
        storage::{CredentialStorage, StorageError, StorageResult},
    },
    types::requests::organization::{
        create_organization_request::CreateOrganizationRequest,
        delete_organization_request::DeleteOrganizationRequest,
        update_organization_request::UpdateOrganizationRequest,
    },
};

pub const PASSWORD: &str = "pw123456";
pub const WRONG_PASSWORD: &str = "not-the-password";

pub fn state() -> AppState {
    AppState::from_storage(StorageHandles::in_memory(), &AppConfig::default())
}

pub fn state_with_config(config: AppConfig) -> AppState {
    AppState::from_storage(StorageHandles::in_memory(), &config)
}

pub fn state_with_bootstrap_admin() -> AppState {
    state_with_config(AppConfig {
        bootstrap_admin: Some(BootstrapAdmin::demo()),
        ..AppConfig::default()
    })
}

/// In-memory credentials whose writes can be made to fail.
#[derive(Default)]
pub struct FlakyCredentials {
    inner: InMemoryCredentialRepository,
    fail_insert: bool,
    fail_reassign: bool,
}

impl FlakyCredentials {
    pub fn failing_insert() -> Self {
        Self {
            fail_insert: true,
            ..Self::default()
        }
    }

    pub fn failing_reassign() -> Self {
        Self {
            fail_reassign: true,
            ..Self::default()
        }
    }
}

impl CredentialStorage for FlakyCredentials {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, StorageResult<Option<AdminCredential>>> {
        self.inner.find_by_email(email)
    }

    fn insert(&self, credential: AdminCredential) -> BoxFuture<'_, StorageResult<()>> {
        if self.fail_insert {
            let email = credential.email;
            return Box::pin(async move { Err::<(), _>(StorageError::Duplicate(email)) });
        }
        self.inner.insert(credential)
    }

    fn reassign<'a>(
        &'a self,
        organization_id: &'a str,
        new_name: &'a str,
    ) -> BoxFuture<'a, StorageResult<u64>> {
        if self.fail_reassign {
            let key = organization_id.to_string();
            return Box::pin(async move { Err::<u64, _>(StorageError::Missing(key)) });
        }
        self.inner.reassign(organization_id, new_name)
    }
}

pub fn state_with_credentials(credentials: FlakyCredentials) -> AppState {
    let storage = StorageHandles {
        credentials: Arc::new(credentials),
        ..StorageHandles::in_memory()
    };
    AppState::from_storage(storage, &AppConfig::default())
}

pub fn create_request(name: &str, email: &str) -> CreateOrganizationRequest {
    CreateOrganizationRequest {
        organization_name: name.into(),
        email: email.into(),
        password: PASSWORD.into(),
    }
}

pub fn rename_request(old: &str, new: &str, email: &str, password: &str) -> UpdateOrganizationRequest {
    UpdateOrganizationRequest {
        old_organization_name: old.into(),
        new_organization_name: new.into(),
        email: email.into(),
        password: password.into(),
    }
}

pub fn delete_request(name: &str, email: &str, password: &str) -> DeleteOrganizationRequest {
    DeleteOrganizationRequest {
        organization_name: name.into(),
        email: email.into(),
        password: password.into(),
    }
}
