use crate::errors::Result;
use crate::users::UserProgress;
use async_trait::async_trait;

/// Trait for user progress repository operations.
///
/// Reads are synchronous off the connection pool; writes go through the
/// storage layer's single-writer path. The read-modify-write between
/// `get_progress` and `save_counters` is not locked; concurrent completions
/// for the same user are last-write-wins (accepted, see DESIGN.md).
#[async_trait]
pub trait UserProgressRepositoryTrait: Send + Sync {
    /// Loads a user's streak/points counters and awarded badge ids.
    fn get_progress(&self, user_id: &str) -> Result<UserProgress>;

    /// Persists the streak and points counters.
    async fn save_counters(&self, user_id: &str, streak_count: i32, points: i64) -> Result<()>;

    /// Records a badge award. The caller guarantees the badge is not yet
    /// present; the storage layer additionally enforces uniqueness.
    async fn award_badge(&self, user_id: &str, badge_id: &str) -> Result<()>;
}
