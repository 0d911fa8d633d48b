use crate::errors::Result;
use crate::goals::goals_model::{CompletionReceipt, Goal, GoalCompletion, NewGoal};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for goal repository operations.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn list_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_update: Goal) -> Result<Goal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;

    /// True when a completion row exists for the goal on the given day.
    fn completion_exists(&self, goal_id: &str, day: NaiveDate) -> Result<bool>;
    async fn record_completion(&self, goal_id: &str, day: NaiveDate) -> Result<GoalCompletion>;
    fn list_completions(&self, goal_id: &str) -> Result<Vec<GoalCompletion>>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goal(&self, goal_id: &str) -> Result<Goal>;
    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal>;
    async fn archive_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal>;
    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize>;

    /// Completes a goal for the given day and advances the owner's streak.
    async fn complete_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        today: NaiveDate,
    ) -> Result<CompletionReceipt>;
}
