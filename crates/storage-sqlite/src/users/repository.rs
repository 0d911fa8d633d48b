use stride_core::users::{UserProgress, UserProgressRepositoryTrait};
use stride_core::Result;

use super::model::{UserBadgeDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{user_badges, users};
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct UserProgressRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserProgressRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserProgressRepository { pool, writer }
    }

    /// Inserts a fresh user row with zeroed counters.
    pub async fn create_user(&self, user_id: &str, name: &str) -> Result<UserProgress> {
        let now = Utc::now().naive_utc();
        let row = UserDB {
            id: user_id.to_string(),
            display_name: name.to_string(),
            streak_count: 0,
            points: 0,
            created_at: now,
            updated_at: now,
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<UserProgress> {
                let inserted: UserDB = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProgress {
                    user_id: inserted.id,
                    streak_count: inserted.streak_count,
                    points: inserted.points,
                    badge_ids: Vec::new(),
                })
            })
            .await
    }
}

#[async_trait]
impl UserProgressRepositoryTrait for UserProgressRepository {
    fn get_progress(&self, user_id: &str) -> Result<UserProgress> {
        let mut conn = get_connection(&self.pool)?;

        let user_db = users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;

        let badge_ids = user_badges::table
            .filter(user_badges::user_id.eq(user_id))
            .select(user_badges::badge_id)
            .order(user_badges::awarded_at.asc())
            .load::<String>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(UserProgress {
            user_id: user_db.id,
            streak_count: user_db.streak_count,
            points: user_db.points,
            badge_ids,
        })
    }

    async fn save_counters(&self, user_id: &str, streak_count: i32, points: i64) -> Result<()> {
        let user_id = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::update(users::table.find(user_id))
                    .set((
                        users::streak_count.eq(streak_count),
                        users::points.eq(points),
                        users::updated_at.eq(Utc::now().naive_utc()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }

    async fn award_badge(&self, user_id: &str, badge_id: &str) -> Result<()> {
        let row = UserBadgeDB {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            badge_id: badge_id.to_string(),
            awarded_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                diesel::insert_into(user_badges::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(())
            })
            .await
    }
}
