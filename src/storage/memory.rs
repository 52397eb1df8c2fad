//! In-memory storage backend for tests and fixtures

use super::traits::{DocumentStore, OpenStore, StorageError, StorageResult};
use crate::model::{Document, DocumentId, NewUser, User, UserId};
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// A stored document plus its insertion sequence number, so listings can
/// report creation order even when timestamps collide.
#[derive(Debug, Clone)]
struct StoredDocument {
    doc: Document,
    seq: u64,
}

/// In-memory document store backed by concurrent maps.
///
/// Enforces the same contract as [`super::SqliteStore`]: unique
/// username/email, owner-scoped document access, cascade delete.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<UserId, User>,
    documents: DashMap<DocumentId, StoredDocument>,
    next_seq: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn username_or_email_taken(&self, input: &NewUser) -> bool {
        self.users
            .iter()
            .any(|u| u.username == input.username || u.email == input.email)
    }
}

impl OpenStore for MemoryStore {
    fn open(_path: impl AsRef<Path>) -> StorageResult<Self> {
        // Nothing on disk to open; the path is accepted for trait parity
        Ok(Self::new())
    }

    fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create_user(&self, input: NewUser) -> StorageResult<User> {
        if self.username_or_email_taken(&input) {
            return Err(StorageError::Conflict(
                "username or email already taken".into(),
            ));
        }
        let user = User::from_new(input);
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> StorageResult<Option<User>> {
        Ok(self.users.get(id).map(|u| u.clone()))
    }

    async fn delete_user(&self, id: &UserId) -> StorageResult<bool> {
        let existed = self.users.remove(id).is_some();
        if existed {
            self.documents.retain(|_, stored| stored.doc.owner != *id);
        }
        Ok(existed)
    }

    async fn create_document(&self, owner: &UserId, content: &str) -> StorageResult<Document> {
        if !self.users.contains_key(owner) {
            return Err(StorageError::UserNotFound(owner.to_string()));
        }
        let doc = Document::new(*owner, content);
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.documents.insert(doc.id, StoredDocument { doc: doc.clone(), seq });
        Ok(doc)
    }

    async fn get_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
    ) -> StorageResult<Option<Document>> {
        Ok(self
            .documents
            .get(id)
            .filter(|stored| stored.doc.owner == *owner)
            .map(|stored| stored.doc.clone()))
    }

    async fn update_document(
        &self,
        id: &DocumentId,
        owner: &UserId,
        content: &str,
    ) -> StorageResult<bool> {
        match self.documents.get_mut(id) {
            Some(mut stored) if stored.doc.owner == *owner => {
                stored.doc.content = content.to_string();
                stored.doc.updated_at = Utc::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_document(&self, id: &DocumentId, owner: &UserId) -> StorageResult<bool> {
        let owned = self
            .documents
            .get(id)
            .map(|stored| stored.doc.owner == *owner)
            .unwrap_or(false);
        if owned {
            self.documents.remove(id);
        }
        Ok(owned)
    }

    async fn list_documents(&self, owner: &UserId) -> StorageResult<Vec<Document>> {
        let mut owned: Vec<StoredDocument> = self
            .documents
            .iter()
            .filter(|stored| stored.doc.owner == *owner)
            .map(|stored| stored.value().clone())
            .collect();
        owned.sort_by_key(|stored| stored.seq);
        Ok(owned.into_iter().map(|stored| stored.doc).collect())
    }
}
