//! Port abstraction for user document storage and its errors.

use async_trait::async_trait;

use crate::domain::{Email, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another document already holds this email.
        DuplicateEmail { email: String } => "user with email {email} already exists",
    }
}

/// Driven port over the user document collection.
///
/// Adapters own the email uniqueness constraint: `create` and `update` must
/// fail with [`UserPersistenceError::DuplicateEmail`] rather than store a
/// second document with the same email.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user document.
    async fn create(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Replace the document stored under `user.id()`.
    ///
    /// Returns `false` when no document matched.
    async fn update(&self, user: &User) -> Result<bool, UserPersistenceError>;

    /// Remove the document stored under `id`.
    ///
    /// Returns `false` when no document matched.
    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
