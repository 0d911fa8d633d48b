use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result, ValidationError};
use crate::events::{DomainEvent, EventSink};
use crate::goals::goals_model::{CompletionReceipt, Goal, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::streaks::StreakServiceTrait;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Service for managing goals and the completion flow.
pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
    streaks: Arc<dyn StreakServiceTrait>,
    events: Arc<dyn EventSink>,
}

impl GoalService {
    pub fn new(
        goal_repo: Arc<dyn GoalRepositoryTrait>,
        streaks: Arc<dyn StreakServiceTrait>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        GoalService {
            goal_repo,
            streaks,
            events,
        }
    }

    /// Loads the goal and verifies it belongs to the user.
    fn get_owned_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let goal = self.goal_repo.get_goal(goal_id)?;
        if goal.user_id != user_id {
            return Err(Error::Forbidden(format!(
                "Goal '{}' does not belong to user '{}'",
                goal_id, user_id
            )));
        }
        Ok(goal)
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo.get_goal(goal_id)
    }

    fn get_goals(&self, user_id: &str) -> Result<Vec<Goal>> {
        self.goal_repo.list_goals_for_user(user_id)
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;
        let goal = self.goal_repo.insert_new_goal(new_goal).await?;
        self.events.emit(DomainEvent::goals_changed(
            goal.user_id.clone(),
            vec![goal.id.clone()],
        ));
        Ok(goal)
    }

    async fn update_goal(&self, updated_goal_data: Goal) -> Result<Goal> {
        let goal = self.goal_repo.update_goal(updated_goal_data).await?;
        self.events.emit(DomainEvent::goals_changed(
            goal.user_id.clone(),
            vec![goal.id.clone()],
        ));
        Ok(goal)
    }

    async fn archive_goal(&self, user_id: &str, goal_id: &str) -> Result<Goal> {
        let mut goal = self.get_owned_goal(user_id, goal_id)?;
        goal.is_archived = true;
        self.update_goal(goal).await
    }

    async fn delete_goal(&self, user_id: &str, goal_id: &str) -> Result<usize> {
        self.get_owned_goal(user_id, goal_id)?;
        let deleted = self.goal_repo.delete_goal(goal_id.to_string()).await?;
        self.events.emit(DomainEvent::goals_changed(
            user_id.to_string(),
            vec![goal_id.to_string()],
        ));
        Ok(deleted)
    }

    /// Completes a goal for the given day.
    ///
    /// Ownership and the duplicate-day gate are checked here, before the
    /// streak engine runs. The gate is what gives the engine its
    /// at-most-once-per-completion guarantee; the engine itself always
    /// increments.
    async fn complete_goal(
        &self,
        user_id: &str,
        goal_id: &str,
        today: NaiveDate,
    ) -> Result<CompletionReceipt> {
        let goal = self.get_owned_goal(user_id, goal_id)?;

        if goal.is_archived {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Goal '{}' is archived",
                goal_id
            ))));
        }

        if self.goal_repo.completion_exists(goal_id, today)? {
            return Err(Error::Validation(ValidationError::AlreadyCompleted(
                goal_id.to_string(),
                today,
            )));
        }

        self.goal_repo.record_completion(goal_id, today).await?;
        debug!("Recorded completion of goal {} on {}", goal_id, today);

        let outcome = self.streaks.advance_streak(user_id).await?;

        self.events.emit(DomainEvent::goal_completed(
            user_id.to_string(),
            goal_id.to_string(),
            outcome.new_streak,
        ));

        Ok(CompletionReceipt {
            goal,
            new_streak: outcome.new_streak,
            badge_awarded: outcome.badge_awarded,
            bonus_xp: outcome.bonus_xp,
        })
    }
}
