//! Stride Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Stride: goals, daily
//! completions, the streak/milestone engine, badges, and user progress.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod badges;
pub mod errors;
pub mod events;
pub mod goals;
pub mod settings;
pub mod streaks;
pub mod users;

// Re-export common types from the streaks module
pub use streaks::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
