//! Command-line surface of the `rgr` binary.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for the `rgr` binary.
#[derive(Debug, Parser)]
#[command(name = "rgr", version, about = "Registrar - academic-records analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Database path (defaults to the configured store)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reset the store and repopulate it with synthetic records
    Seed {
        /// RNG seed for reproducible fixtures (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Five best students by average score across all subjects
    Top,
    /// Best student in one subject
    Best { subject: String },
    /// Per-group average scores in one subject
    GroupAverages { subject: String },
    /// Mean of every grade in the store
    Overall,
    /// Subjects a teacher teaches
    TaughtBy { teacher_id: i64 },
    /// Students in a group
    Roster { group: String },
    /// Individual grades of a group's students in one subject
    GroupGrades { group: String, subject: String },
    /// Average score a teacher has given across their subjects
    TeacherAverage { teacher_id: i64 },
    /// Courses a student attends
    Courses { student_id: i64 },
    /// Courses a teacher teaches to a student
    SharedCourses { teacher_id: i64, student_id: i64 },
}
