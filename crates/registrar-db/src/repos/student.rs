//! Student repository — inserts and listing.

use registrar_core::entities::Student;

use crate::RegistrarDb;
use crate::error::DatabaseError;

fn row_to_student(row: &libsql::Row) -> Result<Student, DatabaseError> {
    Ok(Student {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        group_id: row.get::<Option<i64>>(2)?,
    })
}

impl RegistrarDb {
    /// Insert a student, optionally assigned to a group.
    ///
    /// # Errors
    ///
    /// Fails if `group_id` references a nonexistent group.
    pub async fn create_student(
        &self,
        name: &str,
        group_id: Option<i64>,
    ) -> Result<Student, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO students (name, group_id) VALUES (?1, ?2)",
                libsql::params![name, group_id],
            )
            .await?;
        Ok(Student {
            id: self.conn().last_insert_rowid(),
            name: name.to_string(),
            group_id,
        })
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, name, group_id FROM students ORDER BY id", ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_student(&row)?);
        }
        Ok(results)
    }
}
