//! User progress domain model.

use serde::{Deserialize, Serialize};

/// The gamification counters attached to a user.
///
/// `streak_count` is the number of consecutive qualifying days the user has
/// completed at least one goal, `points` is the lifetime XP balance, and
/// `badge_ids` is the set of awarded badges (a badge is never duplicated;
/// the storage layer enforces uniqueness per `(user, badge)`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub user_id: String,
    pub streak_count: i32,
    pub points: i64,
    pub badge_ids: Vec<String>,
}

impl UserProgress {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            streak_count: 0,
            points: 0,
            badge_ids: Vec::new(),
        }
    }

    /// True when the badge has already been awarded to this user.
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badge_ids.iter().any(|b| b == badge_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_starts_at_zero() {
        let progress = UserProgress::new("user-1");
        assert_eq!(progress.streak_count, 0);
        assert_eq!(progress.points, 0);
        assert!(progress.badge_ids.is_empty());
    }

    #[test]
    fn test_has_badge() {
        let mut progress = UserProgress::new("user-1");
        assert!(!progress.has_badge("badge-7day"));
        progress.badge_ids.push("badge-7day".to_string());
        assert!(progress.has_badge("badge-7day"));
        assert!(!progress.has_badge("badge-30day"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let progress = UserProgress::new("user-1");
        let json = serde_json::to_string(&progress).unwrap();
        assert!(json.contains("streakCount"));
        assert!(json.contains("badgeIds"));
    }
}
