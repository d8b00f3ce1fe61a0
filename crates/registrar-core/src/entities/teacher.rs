use serde::{Deserialize, Serialize};

/// Owner of zero or more subjects. Related to students only through the
/// subjects they teach and the grades recorded in them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
}
