//! Driving port for authenticating an account.
//!
//! Inbound adapters hand over the raw email and password arguments; the
//! implementation validates them and resolves the account id.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, UserId};

/// Raw arguments of an authentication attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticateRequest {
    pub email: Value,
    pub password: Value,
}

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the matching user id.
    async fn authenticate(&self, request: AuthenticateRequest) -> Result<UserId, Error>;
}
