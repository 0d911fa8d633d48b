//! Database models for goals and completions.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::users::UserDB;

/// Database model for goals.
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(UserDB, foreign_key = user_id))]
#[diesel(table_name = crate::schema::goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new goal.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::goals)]
#[serde(rename_all = "camelCase")]
pub struct NewGoalDB {
    pub id: Option<String>,
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for a recorded goal completion.
#[derive(
    Queryable,
    Insertable,
    Identifiable,
    Associations,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(belongs_to(GoalDB, foreign_key = goal_id))]
#[diesel(table_name = crate::schema::goal_completions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct GoalCompletionDB {
    pub id: String,
    pub goal_id: String,
    pub completed_on: NaiveDate,
}

// Conversion to domain models
impl From<GoalDB> for stride_core::goals::Goal {
    fn from(db: GoalDB) -> Self {
        Self {
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            description: db.description,
            is_archived: db.is_archived,
            created_at: db.created_at,
            updated_at: db.updated_at,
        }
    }
}

impl From<stride_core::goals::Goal> for GoalDB {
    fn from(domain: stride_core::goals::Goal) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            title: domain.title,
            description: domain.description,
            is_archived: domain.is_archived,
            created_at: domain.created_at,
            updated_at: domain.updated_at,
        }
    }
}

impl From<GoalCompletionDB> for stride_core::goals::GoalCompletion {
    fn from(db: GoalCompletionDB) -> Self {
        Self {
            id: db.id,
            goal_id: db.goal_id,
            completed_on: db.completed_on,
        }
    }
}
