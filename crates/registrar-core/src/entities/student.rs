use serde::{Deserialize, Serialize};

/// A student, optionally assigned to one group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    /// `None` for groupless students.
    pub group_id: Option<i64>,
}
