//! Repository modules implementing the write path and simple lookups for
//! the five entities.
//!
//! Each module adds methods to `RegistrarDb` via `impl RegistrarDb` blocks.
//! The seeder and tests insert through these; the report queries in
//! [`crate::reports`] only read.

pub mod grade;
pub mod group;
pub mod student;
pub mod subject;
pub mod teacher;
