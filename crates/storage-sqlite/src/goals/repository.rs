use stride_core::goals::{Goal, GoalCompletion, GoalRepositoryTrait, NewGoal};
use stride_core::Result;

use super::model::{GoalCompletionDB, GoalDB, NewGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{goal_completions, goals};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn get_goal(&self, goal_id: &str) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = goals::table
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Goal::from(goal_db))
    }

    fn list_goals_for_user(&self, user_id: &str) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = goals::table
            .filter(goals::user_id.eq(user_id))
            .order(goals::created_at.asc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(Goal::from).collect())
    }

    async fn insert_new_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                let now = Utc::now().naive_utc();
                let new_goal_db = NewGoalDB {
                    id: Some(
                        new_goal
                            .id
                            .unwrap_or_else(|| Uuid::new_v4().to_string()),
                    ),
                    user_id: new_goal.user_id,
                    title: new_goal.title,
                    description: new_goal.description,
                    is_archived: false,
                    created_at: now,
                    updated_at: now,
                };

                let result_db = diesel::insert_into(goals::table)
                    .values(&new_goal_db)
                    .returning(GoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, goal_update: Goal) -> Result<Goal> {
        let goal_id_owned = goal_update.id.clone();
        let mut goal_db = GoalDB::from(goal_update);
        goal_db.updated_at = Utc::now().naive_utc();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Goal> {
                diesel::update(goals::table.find(goal_id_owned.clone()))
                    .set(&goal_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = goals::table
                    .find(goal_id_owned)
                    .first::<GoalDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(Goal::from(result_db))
            })
            .await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(goals::table.find(goal_id_to_delete))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    fn completion_exists(&self, goal_id: &str, day: NaiveDate) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = goal_completions::table
            .filter(goal_completions::goal_id.eq(goal_id))
            .filter(goal_completions::completed_on.eq(day))
            .count()
            .get_result(&mut conn)
            .map_err(StorageError::from)?;
        Ok(count > 0)
    }

    async fn record_completion(&self, goal_id: &str, day: NaiveDate) -> Result<GoalCompletion> {
        let row = GoalCompletionDB {
            id: Uuid::new_v4().to_string(),
            goal_id: goal_id.to_string(),
            completed_on: day,
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<GoalCompletion> {
                let result_db = diesel::insert_into(goal_completions::table)
                    .values(&row)
                    .returning(GoalCompletionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(GoalCompletion::from(result_db))
            })
            .await
    }

    fn list_completions(&self, goal_id: &str) -> Result<Vec<GoalCompletion>> {
        let mut conn = get_connection(&self.pool)?;
        let completions_db = goal_completions::table
            .filter(goal_completions::goal_id.eq(goal_id))
            .order(goal_completions::completed_on.asc())
            .load::<GoalCompletionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(completions_db
            .into_iter()
            .map(GoalCompletion::from)
            .collect())
    }
}
