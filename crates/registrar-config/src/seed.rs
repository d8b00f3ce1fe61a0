//! Fixture seeder configuration.

use serde::{Deserialize, Serialize};

const fn default_groups() -> u32 {
    3
}

const fn default_students_min() -> u32 {
    30
}

const fn default_students_max() -> u32 {
    50
}

const fn default_grades_min() -> u32 {
    15
}

const fn default_grades_max() -> u32 {
    20
}

/// Knobs for the synthetic-data seeder. The defaults reproduce the standard
/// fixture volume: 3 groups, 30–50 students, 15–20 grades per student.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// RNG seed. `None` means seed from entropy (non-reproducible runs).
    #[serde(default)]
    pub rng_seed: Option<u64>,

    #[serde(default = "default_groups")]
    pub groups: u32,

    #[serde(default = "default_students_min")]
    pub students_min: u32,

    #[serde(default = "default_students_max")]
    pub students_max: u32,

    #[serde(default = "default_grades_min")]
    pub grades_per_student_min: u32,

    #[serde(default = "default_grades_max")]
    pub grades_per_student_max: u32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            groups: default_groups(),
            students_min: default_students_min(),
            students_max: default_students_max(),
            grades_per_student_min: default_grades_min(),
            grades_per_student_max: default_grades_max(),
        }
    }
}

impl SeedConfig {
    /// Whether runs are reproducible (an explicit RNG seed is set).
    #[must_use]
    pub const fn is_deterministic(&self) -> bool {
        self.rng_seed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_standard_fixture_volume() {
        let config = SeedConfig::default();
        assert_eq!(config.groups, 3);
        assert_eq!(config.students_min, 30);
        assert_eq!(config.students_max, 50);
        assert_eq!(config.grades_per_student_min, 15);
        assert_eq!(config.grades_per_student_max, 20);
        assert!(!config.is_deterministic());
    }
}
