//! Port for reading the project and casting documents users refer to.

use async_trait::async_trait;

use crate::domain::{Casting, CastingId, Project, ProjectId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by casting repository adapters.
    pub enum CastingRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "casting repository connection failed: {message}",
        /// Query failed during execution.
        Query { message: String } => "casting repository query failed: {message}",
    }
}

/// Read-only access to projects and castings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CastingRepository: Send + Sync {
    /// Fetch a project by identifier.
    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, CastingRepositoryError>;

    /// Fetch castings by identifier.
    ///
    /// Found castings are returned in the order of `ids`; missing ones are
    /// skipped, so callers detect dangling references by comparing lengths.
    async fn find_castings(&self, ids: &[CastingId])
    -> Result<Vec<Casting>, CastingRepositoryError>;
}
