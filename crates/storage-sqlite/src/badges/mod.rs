//! SQLite storage implementation for the badge catalog.

mod model;
mod repository;

pub use model::BadgeDB;
pub use repository::BadgeRepository;

// Re-export trait from core for convenience
pub use stride_core::badges::BadgeCatalogTrait;
