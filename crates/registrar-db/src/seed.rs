//! Deterministic fixture seeder.
//!
//! Populates a store in the strict dependency order the foreign keys demand:
//! groups → teachers → subjects → students → grades. The store is reset
//! first, so seeding is repeatable.
//!
//! Randomness comes from a `ChaCha8` stream: the same seed, profile, and
//! time origin produce identical store contents. Callers who want hand-built
//! fixtures instead can skip the seeder entirely and insert rows through the
//! repos.

use chrono::{DateTime, Duration, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use registrar_config::SeedConfig;
use tracing::{debug, info};

use crate::RegistrarDb;
use crate::error::DatabaseError;

/// The fixed course catalog every seeded store carries.
pub const SUBJECT_NAMES: [&str; 10] = [
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Geography",
    "English",
    "Computer Science",
    "Physical Education",
    "Art",
];

const FIRST_NAMES: [&str; 16] = [
    "Alice", "Bohdan", "Carmen", "Daria", "Elias", "Farah", "Greta", "Hugo", "Iryna", "Jonas",
    "Kateryna", "Liam", "Mira", "Noah", "Olha", "Pavlo",
];

const LAST_NAMES: [&str; 16] = [
    "Andersen", "Bondar", "Castillo", "Duarte", "Eriksen", "Fedorov", "Garcia", "Hansen",
    "Ivanenko", "Jansen", "Kovalenko", "Lindgren", "Moreno", "Nilsen", "Okafor", "Petrov",
];

/// Seconds in the year-long window timestamps are drawn from.
const TIMESTAMP_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Row volumes for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedProfile {
    pub groups: u32,
    pub teachers_min: u32,
    pub teachers_max: u32,
    pub students_min: u32,
    pub students_max: u32,
    pub grades_per_student_min: u32,
    pub grades_per_student_max: u32,
}

impl Default for SeedProfile {
    /// The standard fixture volume: 3 groups, 3–5 teachers, the full course
    /// catalog, 30–50 students, 15–20 grades each.
    fn default() -> Self {
        Self {
            groups: 3,
            teachers_min: 3,
            teachers_max: 5,
            students_min: 30,
            students_max: 50,
            grades_per_student_min: 15,
            grades_per_student_max: 20,
        }
    }
}

impl SeedProfile {
    /// Build a profile from the loaded seeding configuration.
    #[must_use]
    pub fn from_config(config: &SeedConfig) -> Self {
        Self {
            groups: config.groups,
            students_min: config.students_min,
            students_max: config.students_max,
            grades_per_student_min: config.grades_per_student_min,
            grades_per_student_max: config.grades_per_student_max,
            ..Self::default()
        }
    }
}

/// Row counts actually inserted by one seeding run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub groups: u32,
    pub teachers: u32,
    pub subjects: u32,
    pub students: u32,
    pub grades: u32,
}

/// Synthetic-data generator for one store.
pub struct Seeder {
    rng: ChaCha8Rng,
    profile: SeedProfile,
    origin: DateTime<Utc>,
}

impl Seeder {
    /// Seeder with a fresh entropy seed (non-reproducible runs).
    #[must_use]
    pub fn new(profile: SeedProfile) -> Self {
        Self::with_seed(profile, rand::rng().random())
    }

    /// Seeder with an explicit seed: identical runs for identical inputs.
    #[must_use]
    pub fn with_seed(profile: SeedProfile, seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            profile,
            origin: Utc::now(),
        }
    }

    /// Pin the timestamp origin. Grade timestamps are drawn from the year
    /// before the origin, so pinning it makes runs byte-identical.
    #[must_use]
    pub fn time_origin(mut self, origin: DateTime<Utc>) -> Self {
        self.origin = origin;
        self
    }

    /// Reset the store and populate it in dependency order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails; the store is left
    /// partially populated in that case (seeding is not transactional).
    pub async fn populate(&mut self, db: &RegistrarDb) -> Result<SeedSummary, DatabaseError> {
        db.reset().await?;

        let mut groups = Vec::new();
        for i in 0..self.profile.groups {
            groups.push(db.create_group(&format!("Group {}", i + 1)).await?);
        }

        let teacher_count = self
            .rng
            .random_range(self.profile.teachers_min..=self.profile.teachers_max);
        let mut teachers = Vec::new();
        for _ in 0..teacher_count {
            let name = self.full_name();
            teachers.push(db.create_teacher(&name).await?);
        }

        // Subjects need owners; a teacherless profile gets an empty catalog.
        let mut subjects = Vec::new();
        if !teachers.is_empty() {
            for name in SUBJECT_NAMES {
                let teacher_id = teachers[self.rng.random_range(0..teachers.len())].id;
                subjects.push(db.create_subject(name, teacher_id).await?);
            }
        }

        let student_count = self
            .rng
            .random_range(self.profile.students_min..=self.profile.students_max);
        let mut students = Vec::new();
        for _ in 0..student_count {
            let name = self.full_name();
            let group_id = if groups.is_empty() {
                None
            } else {
                Some(groups[self.rng.random_range(0..groups.len())].id)
            };
            students.push(db.create_student(&name, group_id).await?);
        }

        let mut grade_count: u32 = 0;
        if !subjects.is_empty() {
            for student in &students {
                let per_student = self.rng.random_range(
                    self.profile.grades_per_student_min..=self.profile.grades_per_student_max,
                );
                for _ in 0..per_student {
                    let subject_id = subjects[self.rng.random_range(0..subjects.len())].id;
                    let score = self.score();
                    let received_at = self.received_at();
                    db.create_grade(student.id, subject_id, score, received_at)
                        .await?;
                    grade_count += 1;
                }
                debug!(student = %student.name, grades = per_student, "graded student");
            }
        }

        let summary = SeedSummary {
            groups: u32::try_from(groups.len()).unwrap_or(u32::MAX),
            teachers: u32::try_from(teachers.len()).unwrap_or(u32::MAX),
            subjects: u32::try_from(subjects.len()).unwrap_or(u32::MAX),
            students: u32::try_from(students.len()).unwrap_or(u32::MAX),
            grades: grade_count,
        };
        info!(
            groups = summary.groups,
            teachers = summary.teachers,
            subjects = summary.subjects,
            students = summary.students,
            grades = summary.grades,
            "store seeded"
        );
        Ok(summary)
    }

    fn full_name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.random_range(0..LAST_NAMES.len())];
        format!("{first} {last}")
    }

    /// Uniform score in 1.0–5.0, rounded to two decimals.
    fn score(&mut self) -> f64 {
        let raw: f64 = self.rng.random_range(1.0..=5.0);
        (raw * 100.0).round() / 100.0
    }

    /// Timestamp within the year before the origin.
    fn received_at(&mut self) -> DateTime<Utc> {
        let offset = self.rng.random_range(0..TIMESTAMP_WINDOW_SECS);
        self.origin - Duration::seconds(offset)
    }
}
