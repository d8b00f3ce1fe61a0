//! Grade repository — inserts and per-student listing.

use chrono::{DateTime, Utc};
use registrar_core::entities::Grade;

use crate::RegistrarDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

fn row_to_grade(row: &libsql::Row) -> Result<Grade, DatabaseError> {
    Ok(Grade {
        id: row.get::<i64>(0)?,
        student_id: row.get::<i64>(1)?,
        subject_id: row.get::<i64>(2)?,
        score: row.get::<f64>(3)?,
        received_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl RegistrarDb {
    /// Record one assessment event. Timestamps are stored as RFC 3339 TEXT.
    ///
    /// # Errors
    ///
    /// Fails if the student or subject does not exist (foreign keys).
    pub async fn create_grade(
        &self,
        student_id: i64,
        subject_id: i64,
        score: f64,
        received_at: DateTime<Utc>,
    ) -> Result<Grade, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO grades (student_id, subject_id, score, received_at)
                 VALUES (?1, ?2, ?3, ?4)",
                libsql::params![student_id, subject_id, score, received_at.to_rfc3339()],
            )
            .await?;
        Ok(Grade {
            id: self.conn().last_insert_rowid(),
            student_id,
            subject_id,
            score,
            received_at,
        })
    }

    pub async fn grades_for_student(&self, student_id: i64) -> Result<Vec<Grade>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, student_id, subject_id, score, received_at
                 FROM grades WHERE student_id = ?1 ORDER BY id",
                [student_id],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_grade(&row)?);
        }
        Ok(results)
    }

    /// Total number of grades in the store.
    pub async fn count_grades(&self) -> Result<i64, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT COUNT(*) FROM grades", ())
            .await?;
        match rows.next().await? {
            Some(row) => Ok(row.get::<i64>(0)?),
            None => Ok(0),
        }
    }
}
