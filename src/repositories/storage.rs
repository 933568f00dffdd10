//! Storage seams for the three persisted tables.
//!
//! Services only ever see these traits; the concrete backend (in-memory or
//! MongoDB) is picked once at startup.

use futures::future::BoxFuture;
use thiserror::Error;

use crate::models::{
    admin_credential_model::AdminCredential, organization_model::Organization,
    session_model::Session,
};

#[derive(Debug, Error)]
pub enum StorageError {
    /// A uniqueness constraint rejected the write.
    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("record not found: {0}")]
    Missing(String),

    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

pub trait OrganizationStorage: Send + Sync {
    /// Every record, deleted ones included, in insertion order.
    fn find_all(&self) -> BoxFuture<'_, StorageResult<Vec<Organization>>>;

    /// Every record holding `name`, regardless of status.
    fn find_by_name<'a>(&'a self, name: &'a str)
    -> BoxFuture<'a, StorageResult<Vec<Organization>>>;

    /// Fails with `Duplicate` when a live record already holds the name.
    /// The check and the write are one atomic step.
    fn insert(&self, organization: Organization) -> BoxFuture<'_, StorageResult<Organization>>;

    /// Replaces the record with the same `id`; same uniqueness rule as `insert`.
    fn replace(&self, organization: Organization) -> BoxFuture<'_, StorageResult<Organization>>;

    /// Physical removal, only used to undo a half-finished create.
    fn remove<'a>(&'a self, id: &'a str) -> BoxFuture<'a, StorageResult<()>>;
}

pub trait CredentialStorage: Send + Sync {
    fn find_by_email<'a>(
        &'a self,
        email: &'a str,
    ) -> BoxFuture<'a, StorageResult<Option<AdminCredential>>>;

    /// Fails with `Duplicate` when the email is already registered.
    fn insert(&self, credential: AdminCredential) -> BoxFuture<'_, StorageResult<()>>;

    /// Updates the display name on every credential of `organization_id`;
    /// returns how many changed.
    fn reassign<'a>(
        &'a self,
        organization_id: &'a str,
        new_name: &'a str,
    ) -> BoxFuture<'a, StorageResult<u64>>;
}

pub trait SessionStorage: Send + Sync {
    fn insert(&self, session: Session) -> BoxFuture<'_, StorageResult<()>>;

    fn find<'a>(&'a self, token: &'a str) -> BoxFuture<'a, StorageResult<Option<Session>>>;

    /// Removing an unknown token is not an error.
    fn remove<'a>(&'a self, token: &'a str) -> BoxFuture<'a, StorageResult<()>>;
}

const DUPLICATE_KEY_CODE: i32 = 11000;

impl StorageError {
    /// Classifies a MongoDB write failure, surfacing unique-index violations
    /// as `Duplicate`.
    pub fn from_write_error(err: mongodb::error::Error, key: &str) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        let duplicate = matches!(
            err.kind.as_ref(),
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE
        );

        if duplicate {
            StorageError::Duplicate(key.to_string())
        } else {
            StorageError::Mongo(err)
        }
    }
}
