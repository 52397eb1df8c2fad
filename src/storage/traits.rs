//! Storage trait definitions

use crate::model::{Document, DocumentId, NewUser, User, UserId};
use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid id: {0}")]
    InvalidId(#[from] uuid::Error),

    #[error("Date parsing error: {0}")]
    DateParse(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for user/document storage backends
///
/// Implementations must be thread-safe (Send + Sync) to support concurrent
/// access from multiple request tasks. Every document operation is
/// owner-scoped: a document is only visible to, and mutable by, its owner.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    // === User Operations ===

    /// Register a user. Fails with [`StorageError::Conflict`] when the
    /// username or email is already taken.
    async fn create_user(&self, input: NewUser) -> StorageResult<User>;

    /// Load a user by ID
    async fn get_user(&self, id: &UserId) -> StorageResult<Option<User>>;

    /// Delete a user and, by cascade, every document they own.
    /// Returns false if the user did not exist.
    async fn delete_user(&self, id: &UserId) -> StorageResult<bool>;

    // === Document Operations ===

    /// Store a new document for an existing owner
    async fn create_document(&self, owner: &UserId, content: &str) -> StorageResult<Document>;

    /// Load a document, visible only to its owner
    async fn get_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
    ) -> StorageResult<Option<Document>>;

    /// Replace a document's content and touch `updated_at`.
    /// Returns false if no such document exists for this owner.
    async fn update_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
        content: &str,
    ) -> StorageResult<bool>;

    /// Delete a document. Returns false if no such document exists for
    /// this owner.
    async fn delete_document(&self, id: &DocumentId, owner: &UserId) -> StorageResult<bool>;

    /// List all documents owned by a user, in creation order
    async fn list_documents(&self, owner: &UserId) -> StorageResult<Vec<Document>>;
}

/// Extension trait for opening stores from paths
pub trait OpenStore: DocumentStore + Sized {
    /// Open or create a store at the given path
    fn open(path: impl AsRef<Path>) -> StorageResult<Self>;

    /// Create an in-memory store (useful for testing)
    fn open_in_memory() -> StorageResult<Self>;
}
