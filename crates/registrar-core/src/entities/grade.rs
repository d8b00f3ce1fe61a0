use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single scored assessment event linking one student to one subject.
///
/// Scores are floating values; the domain range (1.0–5.0) is a seeding
/// convention, not a constraint the read path re-checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grade {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub score: f64,
    pub received_at: DateTime<Utc>,
}
