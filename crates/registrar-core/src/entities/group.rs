use serde::{Deserialize, Serialize};

/// A cohort of students sharing a label.
///
/// Group names double as human-facing lookup keys in the roster and
/// per-group report queries, so they are unique in the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: i64,
    pub name: String,
}
