//! Users module - progress models and traits.

mod users_model;
mod users_traits;

pub use users_model::UserProgress;
pub use users_traits::UserProgressRepositoryTrait;
