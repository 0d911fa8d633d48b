//! Goal domain models.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::badges::Badge;
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a user's goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
}

impl NewGoal {
    /// Validates the new goal data.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Goal title cannot be empty".to_string(),
            )));
        }
        if self.user_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "userId".to_string(),
            )));
        }
        Ok(())
    }
}

/// A recorded completion of a goal on a specific day.
///
/// Unique per `(goal_id, completed_on)`; the storage layer enforces this
/// and it is what makes the streak engine at-most-once per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCompletion {
    pub id: String,
    pub goal_id: String,
    pub completed_on: NaiveDate,
}

/// Outward result of completing a goal, shaped for the JSON response the
/// HTTP caller constructs (`{ goal, newStreak, badgeAwarded, bonusXP }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionReceipt {
    pub goal: Goal,
    pub new_streak: i32,
    pub badge_awarded: Option<Badge>,
    pub bonus_xp: i64,
}
