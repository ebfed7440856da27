//! Driving port for reading accounts and their casting applications.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, ResolvedApplication, UserProfile};

/// Arguments of `retrieve`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrieveUserRequest {
    pub id: Value,
}

/// Arguments of `castings`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserCastingsRequest {
    pub user_id: Value,
}

/// Domain use-case port for account reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccountQuery: Send + Sync {
    /// Public profile of one account.
    async fn retrieve(&self, request: RetrieveUserRequest) -> Result<UserProfile, Error>;

    /// The account's casting applications with projects and castings loaded,
    /// in application order.
    async fn castings(
        &self,
        request: UserCastingsRequest,
    ) -> Result<Vec<ResolvedApplication>, Error>;
}
