//! SQLite storage implementation for goals and completions.

mod model;
mod repository;

pub use model::{GoalCompletionDB, GoalDB, NewGoalDB};
pub use repository::GoalRepository;

// Re-export trait from core for convenience
pub use stride_core::goals::GoalRepositoryTrait;
