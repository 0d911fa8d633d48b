//! SQLite storage implementation for Stride.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `stride-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations (including the seeded badge catalog)
//! - Repository implementations for users, badges, goals, and settings
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. `stride-core` is database-agnostic and works with traits.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod badges;
pub mod goals;
pub mod settings;
pub mod users;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from stride-core for convenience
pub use stride_core::errors::{DatabaseError, Error, Result};
