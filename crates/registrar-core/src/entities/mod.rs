//! Entity structs mirroring the five store tables.
//!
//! Ownership edges: a subject belongs to exactly one teacher, a grade to
//! exactly one student and one subject; a student belongs to at most one
//! group. All identities are store-assigned `i64` row ids.

mod grade;
mod group;
mod student;
mod subject;
mod teacher;

pub use grade::Grade;
pub use group::Group;
pub use student::Student;
pub use subject::Subject;
pub use teacher::Teacher;
