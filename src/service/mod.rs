//! Caller-facing services
//!
//! `TextService` is what an HTTP layer (or the CLI) invokes: owner-scoped
//! document CRUD plus the six analysis operations, memoized through the
//! result cache. `UserService` covers account lifecycle. Collaborators are
//! passed in explicitly; nothing is resolved from ambient state.

mod text;
mod user;

pub use text::TextService;
pub use user::UserService;

use crate::model::DocumentId;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors surfaced by the service layer
///
/// Cache failures never appear here: the result cache absorbs them and
/// degrades to direct computation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Text content not found: {0}")]
    NotFound(DocumentId),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Conflict(what) => Self::Conflict(what),
            StorageError::UserNotFound(id) => Self::UserNotFound(id),
            other => Self::Storage(other),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
