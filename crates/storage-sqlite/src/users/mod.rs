//! SQLite storage implementation for user progress.

mod model;
mod repository;

pub use model::{UserBadgeDB, UserDB};
pub use repository::UserProgressRepository;

// Re-export trait from core for convenience
pub use stride_core::users::UserProgressRepositoryTrait;
