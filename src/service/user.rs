//! User service: account lifecycle

use super::{ServiceError, ServiceResult};
use crate::model::{NewUser, User, UserId};
use crate::storage::DocumentStore;
use std::sync::Arc;
use tracing::info;

/// Account registration and removal.
///
/// Credential handling (password hashing, token issuance) sits at the
/// system boundary; this service only manages the account records that
/// scope document ownership.
pub struct UserService {
    store: Arc<dyn DocumentStore>,
}

impl UserService {
    /// Create a service over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Register a new user. Duplicate username or email is a `Conflict`.
    pub async fn register(&self, input: NewUser) -> ServiceResult<User> {
        info!(username = %input.username, "register user");
        Ok(self.store.create_user(input).await?)
    }

    /// Load a user by id
    pub async fn get(&self, id: &UserId) -> ServiceResult<User> {
        info!(user = %id, "get user");
        self.store
            .get_user(id)
            .await?
            .ok_or_else(|| ServiceError::UserNotFound(id.to_string()))
    }

    /// Delete a user and, by cascade, all their documents
    pub async fn delete(&self, id: &UserId) -> ServiceResult<()> {
        info!(user = %id, "delete user");
        if self.store.delete_user(id).await? {
            Ok(())
        } else {
            Err(ServiceError::UserNotFound(id.to_string()))
        }
    }
}
