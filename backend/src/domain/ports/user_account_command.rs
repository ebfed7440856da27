//! Driving port for account mutations: register, update, unregister.
//!
//! Request fields are the raw arguments as a client sent them. Absent fields
//! deserialise to `null` and are reported by validation like any other value
//! of the wrong kind.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::Error;

/// Arguments of `register`, in validation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterUserRequest {
    pub email: Value,
    pub password: Value,
    pub personal_data: Value,
    pub physical_data: Value,
    pub professional_data: Value,
    pub videobook_link: Value,
    pub pics: Value,
}

/// Arguments of `update`, in validation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub email: Value,
    pub password: Value,
    pub new_email: Value,
    pub new_password: Value,
    pub personal_data: Value,
    pub physical_data: Value,
    pub professional_data: Value,
    pub videobook_link: Value,
    pub pics: Value,
}

/// Arguments of `unregister`, in validation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnregisterUserRequest {
    pub id: Value,
    pub email: Value,
    pub password: Value,
}

/// Domain use-case port for changing accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccountCommand: Send + Sync {
    /// Create an account; fails with a conflict when the email is taken.
    async fn register(&self, request: RegisterUserRequest) -> Result<(), Error>;

    /// Replace credentials and profile of the account the old credentials
    /// identify.
    async fn update(&self, request: UpdateUserRequest) -> Result<(), Error>;

    /// Delete an account after re-checking its credentials.
    async fn unregister(&self, request: UnregisterUserRequest) -> Result<(), Error>;
}
