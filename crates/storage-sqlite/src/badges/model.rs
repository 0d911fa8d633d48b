//! Database models for the badge catalog.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for a badge catalog entry.
#[derive(
    Queryable,
    Insertable,
    Identifiable,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::badges)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct BadgeDB {
    pub id: String,
    pub milestone_id: String,
    pub name: String,
    pub description: Option<String>,
}

// Conversion to domain model
impl From<BadgeDB> for stride_core::badges::Badge {
    fn from(db: BadgeDB) -> Self {
        Self {
            id: db.id,
            milestone_id: db.milestone_id,
            name: db.name,
            description: db.description,
        }
    }
}
