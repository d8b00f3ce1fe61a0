//! The ten read-only report queries.
//!
//! Each operation is one declarative SQL pipeline (join → filter → group →
//! aggregate) shaped into typed rows from `registrar-core`. No client-side
//! joining, no mutation, no retries.
//!
//! Edge policy: a filter that matches nothing yields an empty `Vec`; scalar
//! and single-record operations yield `None`. An unknown lookup key is
//! indistinguishable from an empty match. An average over zero rows is
//! `None`, never 0.

use registrar_core::reports::{GradeDetail, GroupAverage, StudentAverage};

use crate::RegistrarDb;
use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

/// How many students the top-performers ranking returns.
const RANKING_LIMIT: i64 = 5;

fn row_to_student_average(row: &libsql::Row) -> Result<StudentAverage, DatabaseError> {
    Ok(StudentAverage {
        student: row.get::<String>(0)?,
        average: row.get::<f64>(1)?,
    })
}

fn row_to_group_average(row: &libsql::Row) -> Result<GroupAverage, DatabaseError> {
    Ok(GroupAverage {
        group: row.get::<String>(0)?,
        average: row.get::<f64>(1)?,
    })
}

fn row_to_grade_detail(row: &libsql::Row) -> Result<GradeDetail, DatabaseError> {
    Ok(GradeDetail {
        student: row.get::<String>(0)?,
        score: row.get::<f64>(1)?,
        received_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

/// Collect the single-column TEXT results of a name query.
async fn collect_names(mut rows: libsql::Rows) -> Result<Vec<String>, DatabaseError> {
    let mut names = Vec::new();
    while let Some(row) = rows.next().await? {
        names.push(row.get::<String>(0)?);
    }
    Ok(names)
}

/// Read a nullable scalar aggregate: `None` when the aggregate has no
/// contributing rows (SQL `AVG` returns NULL).
async fn scalar_average(mut rows: libsql::Rows) -> Result<Option<f64>, DatabaseError> {
    match rows.next().await? {
        Some(row) => Ok(row.get::<Option<f64>>(0)?),
        None => Ok(None),
    }
}

impl RegistrarDb {
    /// Top five students by average score across all subjects, descending.
    ///
    /// Students with zero grades are excluded (their average is undefined).
    /// Ties break by ascending student id.
    pub async fn top_students(&self) -> Result<Vec<StudentAverage>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT s.name, AVG(g.score) AS average_score
                 FROM students s
                 JOIN grades g ON g.student_id = s.id
                 GROUP BY s.id
                 ORDER BY average_score DESC, s.id ASC
                 LIMIT ?1",
                [RANKING_LIMIT],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_student_average(&row)?);
        }
        Ok(results)
    }

    /// The student with the highest average in the named subject, or `None`
    /// when the subject has no grades (or does not exist).
    pub async fn best_student_in_subject(
        &self,
        subject: &str,
    ) -> Result<Option<StudentAverage>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT s.name, AVG(g.score) AS average_score
                 FROM students s
                 JOIN grades g ON g.student_id = s.id
                 JOIN subjects sub ON sub.id = g.subject_id
                 WHERE sub.name = ?1
                 GROUP BY s.id
                 ORDER BY average_score DESC, s.id ASC
                 LIMIT 1",
                [subject],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_student_average(&row)?)),
            None => Ok(None),
        }
    }

    /// Per-group average in the named subject; one row per group with at
    /// least one qualifying grade.
    pub async fn group_averages_in_subject(
        &self,
        subject: &str,
    ) -> Result<Vec<GroupAverage>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT gr.name, AVG(g.score) AS average_score
                 FROM groups gr
                 JOIN students s ON s.group_id = gr.id
                 JOIN grades g ON g.student_id = s.id
                 JOIN subjects sub ON sub.id = g.subject_id
                 WHERE sub.name = ?1
                 GROUP BY gr.id
                 ORDER BY gr.id",
                [subject],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_group_average(&row)?);
        }
        Ok(results)
    }

    /// Mean of every grade in the store; `None` when no grades exist.
    pub async fn overall_average(&self) -> Result<Option<f64>, DatabaseError> {
        let rows = self.conn().query("SELECT AVG(score) FROM grades", ()).await?;
        scalar_average(rows).await
    }

    /// Names of the subjects the teacher teaches; empty when the teacher has
    /// none or does not exist.
    pub async fn subjects_taught_by(&self, teacher_id: i64) -> Result<Vec<String>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT name FROM subjects WHERE teacher_id = ?1 ORDER BY id",
                [teacher_id],
            )
            .await?;
        collect_names(rows).await
    }

    /// Roster of the named group; empty when the group is empty or unknown.
    pub async fn students_in_group(&self, group: &str) -> Result<Vec<String>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT s.name
                 FROM students s
                 JOIN groups gr ON gr.id = s.group_id
                 WHERE gr.name = ?1
                 ORDER BY s.id",
                [group],
            )
            .await?;
        collect_names(rows).await
    }

    /// Every individual grade of the group's students in the subject — one
    /// row per assessment event, not aggregated.
    pub async fn group_grades_in_subject(
        &self,
        group: &str,
        subject: &str,
    ) -> Result<Vec<GradeDetail>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT s.name, g.score, g.received_at
                 FROM grades g
                 JOIN students s ON s.id = g.student_id
                 JOIN groups gr ON gr.id = s.group_id
                 JOIN subjects sub ON sub.id = g.subject_id
                 WHERE gr.name = ?1 AND sub.name = ?2
                 ORDER BY g.id",
                libsql::params![group, subject],
            )
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_grade_detail(&row)?);
        }
        Ok(results)
    }

    /// Mean of all grades issued in the teacher's subjects; `None` when the
    /// teacher has no subjects or those subjects have no grades.
    pub async fn average_given_by_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Option<f64>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT AVG(g.score)
                 FROM grades g
                 JOIN subjects sub ON sub.id = g.subject_id
                 WHERE sub.teacher_id = ?1",
                [teacher_id],
            )
            .await?;
        scalar_average(rows).await
    }

    /// Distinct subjects in which the student has at least one grade.
    pub async fn subjects_attended_by(
        &self,
        student_id: i64,
    ) -> Result<Vec<String>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT DISTINCT sub.name
                 FROM subjects sub
                 JOIN grades g ON g.subject_id = sub.id
                 WHERE g.student_id = ?1
                 ORDER BY sub.name",
                [student_id],
            )
            .await?;
        collect_names(rows).await
    }

    /// Distinct subjects taught by the teacher in which the student has at
    /// least one grade.
    pub async fn subjects_taught_to(
        &self,
        teacher_id: i64,
        student_id: i64,
    ) -> Result<Vec<String>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT DISTINCT sub.name
                 FROM subjects sub
                 JOIN grades g ON g.subject_id = sub.id
                 WHERE sub.teacher_id = ?1 AND g.student_id = ?2
                 ORDER BY sub.name",
                libsql::params![teacher_id, student_id],
            )
            .await?;
        collect_names(rows).await
    }
}
