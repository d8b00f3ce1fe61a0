//! Typed rows returned by the report queries.
//!
//! Each analytic operation in `registrar-db` shapes its result rows into one
//! of these structs so the CLI and tests never touch raw columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One (student, average) row from a ranking or best-in-subject query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentAverage {
    pub student: String,
    pub average: f64,
}

/// One (group, average) row from the per-group subject average query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GroupAverage {
    pub group: String,
    pub average: f64,
}

/// One individual grade row from the group-by-subject detail query.
/// Not aggregated: one row per assessment event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GradeDetail {
    pub student: String,
    pub score: f64,
    pub received_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn student_average_json_roundtrip() {
        let row = StudentAverage {
            student: "Alice Martin".to_string(),
            average: 4.25,
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: StudentAverage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }

    #[test]
    fn grade_detail_keeps_timestamp() {
        let ts = "2026-03-14T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let row = GradeDetail {
            student: "Bob Ruiz".to_string(),
            score: 3.5,
            received_at: ts,
        };
        let json = serde_json::to_value(&row).unwrap();
        let back: GradeDetail = serde_json::from_value(json).unwrap();
        assert_eq!(back.received_at, ts);
    }
}
