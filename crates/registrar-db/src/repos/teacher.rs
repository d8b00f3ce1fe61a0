//! Teacher repository — inserts and listing.

use registrar_core::entities::Teacher;

use crate::RegistrarDb;
use crate::error::DatabaseError;

fn row_to_teacher(row: &libsql::Row) -> Result<Teacher, DatabaseError> {
    Ok(Teacher {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
    })
}

impl RegistrarDb {
    /// Insert a teacher and return it with its store-assigned id.
    pub async fn create_teacher(&self, name: &str) -> Result<Teacher, DatabaseError> {
        self.conn()
            .execute("INSERT INTO teachers (name) VALUES (?1)", [name])
            .await?;
        Ok(Teacher {
            id: self.conn().last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, name FROM teachers ORDER BY id", ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_teacher(&row)?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::helpers::test_db;

    #[tokio::test]
    async fn create_and_list_teachers() {
        let db = test_db().await;
        let ada = db.create_teacher("Ada Lovelace").await.unwrap();
        let alan = db.create_teacher("Alan Turing").await.unwrap();
        assert!(ada.id < alan.id);

        let teachers = db.list_teachers().await.unwrap();
        assert_eq!(teachers.len(), 2);
        assert_eq!(teachers[1].name, "Alan Turing");
    }

    #[tokio::test]
    async fn teacher_names_need_not_be_unique() {
        // Teacher names are not lookup keys; two teachers may share one.
        let db = test_db().await;
        db.create_teacher("Kim Lee").await.unwrap();
        db.create_teacher("Kim Lee").await.unwrap();
        assert_eq!(db.list_teachers().await.unwrap().len(), 2);
    }
}
