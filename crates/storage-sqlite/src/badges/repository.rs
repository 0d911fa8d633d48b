use stride_core::badges::{Badge, BadgeCatalogTrait};
use stride_core::Result;

use super::model::BadgeDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::badges;
use diesel::prelude::*;

use std::sync::Arc;

/// Read-only catalog over the seeded `badges` table.
pub struct BadgeRepository {
    pool: Arc<DbPool>,
}

impl BadgeRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        BadgeRepository { pool }
    }
}

impl BadgeCatalogTrait for BadgeRepository {
    fn resolve_badge(&self, milestone_id: &str) -> Result<Option<Badge>> {
        let mut conn = get_connection(&self.pool)?;
        let badge_db = badges::table
            .filter(badges::milestone_id.eq(milestone_id))
            .first::<BadgeDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(badge_db.map(Badge::from))
    }

    fn list_badges(&self) -> Result<Vec<Badge>> {
        let mut conn = get_connection(&self.pool)?;
        let badges_db = badges::table
            .order(badges::id.asc())
            .load::<BadgeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(badges_db.into_iter().map(Badge::from).collect())
    }
}
