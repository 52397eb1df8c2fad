//! Textvault: Multi-User Text Storage and Analysis
//!
//! Users own text documents; the service analyzes stored content on demand
//! (word/character/sentence/paragraph counts, longest words per paragraph)
//! and memoizes results in a TTL cache with a fail-open contract.
//!
//! # Core Concepts
//!
//! - **Documents**: user-owned text content, visible only to their owner
//! - **Analysis engine**: pure, deterministic functions over content
//! - **Result cache**: per-operation memoization; backend failures degrade
//!   to direct computation, never to request failures
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use textvault::{MemoryCache, MemoryStore, NewUser, ResultCache, TextService, UserService};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), textvault::ServiceError> {
//! let store = Arc::new(MemoryStore::new());
//! let users = UserService::new(store.clone());
//! let texts = TextService::new(store, ResultCache::new(Arc::new(MemoryCache::new())));
//!
//! let user = users.register(NewUser {
//!     name: "Ada".into(),
//!     username: "ada".into(),
//!     email: "ada@example.com".into(),
//! }).await?;
//! let doc = texts.create(&user.id, "Hello. How are you? Fine!").await?;
//!
//! assert_eq!(texts.word_count(&doc.id, &user.id).await?, 5);
//! assert_eq!(texts.sentence_count(&doc.id, &user.id).await?, 3);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cache;
mod model;
pub mod service;
pub mod storage;

pub use analysis::{ParagraphLongestWords, TextReport};
pub use cache::{CacheBackend, CacheError, CacheKey, MemoryCache, ResultCache};
pub use model::{Document, DocumentId, NewUser, User, UserId};
pub use service::{ServiceError, ServiceResult, TextService, UserService};
pub use storage::{DocumentStore, MemoryStore, OpenStore, SqliteStore, StorageError, StorageResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
