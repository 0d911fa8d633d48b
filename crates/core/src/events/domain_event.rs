//! Domain event types.

use serde::{Deserialize, Serialize};

/// Domain events emitted by core services after successful mutations.
///
/// These events represent facts about domain data changes. Runtime adapters
/// translate them into platform-specific actions (realtime fan-out to group
/// members, push notifications, feed updates, etc.).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// A goal was completed for a given day.
    GoalCompleted {
        user_id: String,
        goal_id: String,
        new_streak: i32,
    },

    /// A user's consecutive-day streak advanced.
    StreakAdvanced {
        user_id: String,
        new_streak: i32,
        bonus_xp: i64,
    },

    /// A milestone badge was awarded for the first time.
    BadgeAwarded { user_id: String, badge_id: String },

    /// Goals were created, updated, archived, or deleted.
    GoalsChanged { user_id: String, goal_ids: Vec<String> },
}

impl DomainEvent {
    /// Creates a GoalCompleted event.
    pub fn goal_completed(user_id: String, goal_id: String, new_streak: i32) -> Self {
        Self::GoalCompleted {
            user_id,
            goal_id,
            new_streak,
        }
    }

    /// Creates a StreakAdvanced event.
    pub fn streak_advanced(user_id: String, new_streak: i32, bonus_xp: i64) -> Self {
        Self::StreakAdvanced {
            user_id,
            new_streak,
            bonus_xp,
        }
    }

    /// Creates a BadgeAwarded event.
    pub fn badge_awarded(user_id: String, badge_id: String) -> Self {
        Self::BadgeAwarded { user_id, badge_id }
    }

    /// Creates a GoalsChanged event.
    pub fn goals_changed(user_id: String, goal_ids: Vec<String>) -> Self {
        Self::GoalsChanged { user_id, goal_ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_event_serialization() {
        let event = DomainEvent::streak_advanced("user-1".to_string(), 7, 50);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("streak_advanced"));

        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            DomainEvent::StreakAdvanced {
                user_id,
                new_streak,
                bonus_xp,
            } => {
                assert_eq!(user_id, "user-1");
                assert_eq!(new_streak, 7);
                assert_eq!(bonus_xp, 50);
            }
            _ => panic!("Expected StreakAdvanced"),
        }
    }

    #[test]
    fn test_badge_awarded_serialization() {
        let event = DomainEvent::badge_awarded("user-1".to_string(), "badge-7day".to_string());

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: DomainEvent = serde_json::from_str(&json).unwrap();

        match deserialized {
            DomainEvent::BadgeAwarded { user_id, badge_id } => {
                assert_eq!(user_id, "user-1");
                assert_eq!(badge_id, "badge-7day");
            }
            _ => panic!("Expected BadgeAwarded"),
        }
    }
}
