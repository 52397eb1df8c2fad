//! Document representation: a user-owned unit of text content

use super::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Create a new random DocumentId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a DocumentId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a DocumentId from its string form
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored text document owned by a single user
///
/// Content is never absent after creation; updates replace it wholesale
/// and touch `updated_at`. Analysis never mutates a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: DocumentId,
    /// Owning user; all reads and writes are scoped to this owner
    pub owner: UserId,
    /// Raw textual content
    pub content: String,
    /// When the document was created
    pub created_at: DateTime<Utc>,
    /// When the content was last replaced
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Create a new document with freshly stamped timestamps
    pub fn new(owner: UserId, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: DocumentId::new(),
            owner,
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }
}
