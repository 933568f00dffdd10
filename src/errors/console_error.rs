//! Error taxonomy surfaced by every service operation.

use thiserror::Error;
use validator::ValidationErrors;

use crate::{repositories::storage::StorageError, utils::locale_utils::Messages};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{message}")]
    Validation {
        message: String,
        errors: ValidationErrors,
    },

    /// The storage backend could not be reached or failed mid-operation.
    #[error("{0}")]
    Storage(String),

    #[error("{0}")]
    Internal(String),
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl ConsoleError {
    pub fn validation(message: impl Into<String>, errors: ValidationErrors) -> Self {
        ConsoleError::Validation {
            message: message.into(),
            errors,
        }
    }

    /// Like `From<StorageError>`, but with a localized message for backend
    /// outages.
    pub fn from_storage(err: StorageError, messages: &Messages) -> Self {
        match err {
            StorageError::Duplicate(_) | StorageError::Missing(_) => err.into(),
            other => {
                log::error!("Storage backend failure: {}", other);
                ConsoleError::Storage(messages.get_organization_message(
                    "storage.unavailable",
                    "Storage is temporarily unavailable, please try again",
                ))
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ConsoleError::Unauthorized(_))
    }
}

impl From<StorageError> for ConsoleError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate(key) => ConsoleError::Conflict(format!("Already exists: {key}")),
            StorageError::Missing(key) => ConsoleError::NotFound(format!("Not found: {key}")),
            other => {
                log::error!("Storage backend failure: {}", other);
                ConsoleError::Storage(other.to_string())
            }
        }
    }
}
