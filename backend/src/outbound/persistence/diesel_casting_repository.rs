//! PostgreSQL-backed `CastingRepository` implementation using Diesel ORM.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{CastingRepository, CastingRepositoryError};
use crate::domain::{Casting, CastingId, Project, ProjectId};

use super::diesel_error_mapping::{DieselFailure, classify, failure_message};
use super::models::{CastingRow, ProjectRow};
use super::pool::{DbPool, PoolError};
use super::schema::{castings, projects};

/// Diesel-backed implementation of the `CastingRepository` port.
#[derive(Clone)]
pub struct DieselCastingRepository {
    pool: DbPool,
}

impl DieselCastingRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> CastingRepositoryError {
    CastingRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> CastingRepositoryError {
    match classify(&error, operation) {
        DieselFailure::Connection => {
            CastingRepositoryError::connection(failure_message(DieselFailure::Connection))
        }
        failure => CastingRepositoryError::query(failure_message(failure)),
    }
}

fn row_to_project(row: ProjectRow) -> Project {
    Project {
        id: ProjectId::from_uuid(row.id),
        name: row.name,
        details: row.details,
    }
}

fn row_to_casting(row: CastingRow) -> Casting {
    Casting {
        id: CastingId::from_uuid(row.id),
        project_id: ProjectId::from_uuid(row.project_id),
        title: row.title,
        details: row.details,
    }
}

/// Arrange fetched rows in the order of `ids`, dropping ids with no row.
/// An id listed more than once yields its row once per mention.
fn in_requested_order(ids: &[CastingId], rows: Vec<CastingRow>) -> Vec<Casting> {
    let by_id: HashMap<Uuid, CastingRow> = rows.into_iter().map(|row| (row.id, row)).collect();
    ids.iter()
        .filter_map(|id| by_id.get(id.as_uuid()).cloned())
        .map(row_to_casting)
        .collect()
}

#[async_trait]
impl CastingRepository for DieselCastingRepository {
    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, CastingRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ProjectRow> = projects::table
            .find(*id.as_uuid())
            .select(ProjectRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find project"))?;

        Ok(row.map(row_to_project))
    }

    async fn find_castings(
        &self,
        ids: &[CastingId],
    ) -> Result<Vec<Casting>, CastingRepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CastingRow> = castings::table
            .filter(castings::id.eq_any(uuids))
            .select(CastingRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "find castings"))?;

        Ok(in_requested_order(ids, rows))
    }
}
