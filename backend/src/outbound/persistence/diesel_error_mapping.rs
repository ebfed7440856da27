//! Shared Diesel error classification for the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

/// Coarse category of a Diesel failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum DieselFailure {
    /// The connection dropped or could not be used.
    Connection,
    /// A unique index rejected the write.
    UniqueViolation,
    /// Anything else.
    Query,
}

/// Log a Diesel error and classify it.
pub(super) fn classify(error: &DieselError, operation: &str) -> DieselFailure {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(error),
            %operation,
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DieselFailure::Connection
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DieselFailure::UniqueViolation
        }
        _ => DieselFailure::Query,
    }
}

/// Short client-safe message for a failure category.
pub(super) fn failure_message(failure: DieselFailure) -> &'static str {
    match failure {
        DieselFailure::Connection => "database connection error",
        DieselFailure::UniqueViolation => "unique constraint violated",
        DieselFailure::Query => "database error",
    }
}
