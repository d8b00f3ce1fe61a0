//! # registrar-core
//!
//! Shared types for the Registrar academic-records store.
//!
//! This crate provides the foundational types used by the database and CLI
//! crates:
//! - Entity structs for the five tables (groups, teachers, subjects,
//!   students, grades)
//! - Report row types returned by the analytic queries

pub mod entities;
pub mod reports;
