//! Storage backends for users and documents
//!
//! The service layer only sees the [`DocumentStore`] trait; `SqliteStore` is
//! the durable backend, `MemoryStore` backs tests and fixtures.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{DocumentStore, OpenStore, StorageError, StorageResult};
