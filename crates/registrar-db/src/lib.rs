//! # registrar-db
//!
//! libSQL store and report queries for Registrar academic records.
//!
//! Holds the five relational tables (groups, teachers, subjects, students,
//! grades), the write path used by the fixture seeder, and the ten read-only
//! report queries. Each query is a single join-and-group SQL pipeline; the
//! store's engine does the planning.
//!
//! Uses the `libsql` crate (C `SQLite` fork) — embedded, file-backed or
//! `:memory:`, with per-connection foreign-key enforcement.

pub mod error;
pub mod helpers;
mod migrations;
pub mod reports;
pub mod repos;
pub mod seed;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Handle for one logical unit of work against the registrar store.
///
/// Wraps a libSQL database and connection. Callers own the handle and drop
/// it when the unit of work ends; there is no module-level session state.
pub struct RegistrarDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl RegistrarDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Enables foreign keys and runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let registrar_db = Self { db, conn };
        registrar_db.run_migrations().await?;
        Ok(registrar_db)
    }

    /// Access the underlying libSQL connection for direct statements.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Clear all five tables, in reverse dependency order.
    ///
    /// This is the "reset the store to empty" step of the seeding boundary.
    /// Never called by the report queries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any delete fails.
    pub async fn reset(&self) -> Result<(), DatabaseError> {
        for table in ["grades", "students", "subjects", "teachers", "groups"] {
            self.conn
                .execute(&format!("DELETE FROM {table}"), ())
                .await?;
        }
        tracing::debug!("store reset to empty");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_db;

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = ["groups", "teachers", "subjects", "students", "grades"];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn file_backed_store_persists_between_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registrar.db");
        let path = path.to_str().unwrap();

        {
            let db = RegistrarDb::open_local(path).await.unwrap();
            db.create_group("Group 1").await.unwrap();
        }

        let reopened = RegistrarDb::open_local(path).await.unwrap();
        let groups = reopened.list_groups().await.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Group 1");
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;

        // A grade referencing a nonexistent student must fail at write time.
        let result = db
            .conn()
            .execute(
                "INSERT INTO grades (student_id, subject_id, score, received_at)
                 VALUES (999, 999, 4.0, '2026-01-01T00:00:00+00:00')",
                (),
            )
            .await;
        assert!(result.is_err(), "dangling grade should be rejected");
    }

    #[tokio::test]
    async fn group_names_are_unique() {
        let db = test_db().await;
        db.create_group("Group 1").await.unwrap();
        let dup = db.create_group("Group 1").await;
        assert!(dup.is_err(), "duplicate group name should be rejected");
    }

    #[tokio::test]
    async fn reset_clears_every_table() {
        let db = test_db().await;
        let group = db.create_group("Group 1").await.unwrap();
        let teacher = db.create_teacher("Ada Lovelace").await.unwrap();
        let subject = db.create_subject("Mathematics", teacher.id).await.unwrap();
        let student = db.create_student("Alice Martin", Some(group.id)).await.unwrap();
        db.create_grade(student.id, subject.id, 4.5, chrono::Utc::now())
            .await
            .unwrap();

        db.reset().await.unwrap();

        for table in ["grades", "students", "subjects", "teachers", "groups"] {
            let mut rows = db
                .conn()
                .query(&format!("SELECT COUNT(*) FROM {table}"), ())
                .await
                .unwrap();
            let row = rows.next().await.unwrap().unwrap();
            assert_eq!(row.get::<i64>(0).unwrap(), 0, "table '{table}' not empty");
        }
    }
}
