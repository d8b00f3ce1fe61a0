//! Database error types for registrar-db.

use thiserror::Error;

/// Errors from database operations.
///
/// Empty query results are not errors: list queries return empty vectors and
/// scalar aggregates return `None`. These variants cover genuine failures
/// (connectivity, bad SQL, unparseable rows), propagated without retry.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A row could not be shaped into its entity or report type.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
