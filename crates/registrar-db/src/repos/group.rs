//! Group repository — inserts and name lookup.

use registrar_core::entities::Group;

use crate::RegistrarDb;
use crate::error::DatabaseError;

fn row_to_group(row: &libsql::Row) -> Result<Group, DatabaseError> {
    Ok(Group {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
    })
}

impl RegistrarDb {
    /// Insert a group and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Fails on duplicate names (`UNIQUE` constraint) or connection errors.
    pub async fn create_group(&self, name: &str) -> Result<Group, DatabaseError> {
        self.conn()
            .execute("INSERT INTO groups (name) VALUES (?1)", [name])
            .await?;
        Ok(Group {
            id: self.conn().last_insert_rowid(),
            name: name.to_string(),
        })
    }

    pub async fn list_groups(&self) -> Result<Vec<Group>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, name FROM groups ORDER BY id", ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_group(&row)?);
        }
        Ok(results)
    }

    pub async fn group_by_name(&self, name: &str) -> Result<Option<Group>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT id, name FROM groups WHERE name = ?1", [name])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_group(&row)?)),
            None => Ok(None),
        }
    }
}
