//! Subject repository — inserts and name lookup.

use registrar_core::entities::Subject;

use crate::RegistrarDb;
use crate::error::DatabaseError;

fn row_to_subject(row: &libsql::Row) -> Result<Subject, DatabaseError> {
    Ok(Subject {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        teacher_id: row.get::<i64>(2)?,
    })
}

impl RegistrarDb {
    /// Insert a subject owned by the given teacher.
    ///
    /// # Errors
    ///
    /// Fails if the teacher does not exist (foreign key) or the subject name
    /// is already taken (`UNIQUE`).
    pub async fn create_subject(
        &self,
        name: &str,
        teacher_id: i64,
    ) -> Result<Subject, DatabaseError> {
        self.conn()
            .execute(
                "INSERT INTO subjects (name, teacher_id) VALUES (?1, ?2)",
                libsql::params![name, teacher_id],
            )
            .await?;
        Ok(Subject {
            id: self.conn().last_insert_rowid(),
            name: name.to_string(),
            teacher_id,
        })
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, name, teacher_id FROM subjects ORDER BY id", ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_subject(&row)?);
        }
        Ok(results)
    }

    pub async fn subject_by_name(&self, name: &str) -> Result<Option<Subject>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, name, teacher_id FROM subjects WHERE name = ?1",
                [name],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_subject(&row)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_db;

    #[tokio::test]
    async fn create_subject_requires_existing_teacher() {
        let db = test_db().await;
        let result = db.create_subject("Mathematics", 999).await;
        assert!(result.is_err(), "subject with dangling teacher should fail");
    }

    #[tokio::test]
    async fn create_and_lookup_subject() {
        let db = test_db().await;
        let teacher = db.create_teacher("Marie Curie").await.unwrap();
        let created = db.create_subject("Chemistry", teacher.id).await.unwrap();

        let found = db.subject_by_name("Chemistry").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert!(db.subject_by_name("Alchemy").await.unwrap().is_none());
    }
}
