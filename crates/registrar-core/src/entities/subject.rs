use serde::{Deserialize, Serialize};

/// A course taught by exactly one teacher, in which grades are recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub teacher_id: i64,
}
