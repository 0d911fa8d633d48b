//! Streak engine output model.

use serde::{Deserialize, Serialize};

use crate::badges::Badge;

/// Result of applying one goal completion to a user's progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionOutcome {
    /// Streak count after the increment.
    pub new_streak: i32,
    /// The badge added by this completion, if a milestone was newly crossed
    /// and the catalog resolved it.
    pub badge_awarded: Option<Badge>,
    /// Bonus XP applied by this completion (0 when no milestone matched).
    pub bonus_xp: i64,
}
