//! SQLite adapters for the motorpool ports.
pub mod database;
pub mod repositories;
