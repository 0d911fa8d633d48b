use crate::errors::Result;
use crate::streaks::CompletionOutcome;
use async_trait::async_trait;

/// Trait for streak service operations.
#[async_trait]
pub trait StreakServiceTrait: Send + Sync {
    /// Advances the user's streak by one completion and persists the
    /// updated counters and any newly awarded badge.
    async fn advance_streak(&self, user_id: &str) -> Result<CompletionOutcome>;
}
