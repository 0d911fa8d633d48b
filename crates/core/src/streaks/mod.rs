//! Streaks module - the streak/milestone engine, services, and traits.

mod engine;
mod milestones;
mod streaks_model;
mod streaks_service;
mod streaks_traits;

pub use engine::apply_completion;
pub use milestones::{milestone_for, Milestone, MILESTONES};
pub use streaks_model::CompletionOutcome;
pub use streaks_service::StreakService;
pub use streaks_traits::StreakServiceTrait;
