//! Core data structures: users and their stored documents

mod document;
mod user;

pub use document::{Document, DocumentId};
pub use user::{NewUser, User, UserId};
