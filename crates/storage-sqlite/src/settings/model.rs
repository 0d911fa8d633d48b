//! Database model for app settings rows.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Key/value settings row.
#[derive(Queryable, Insertable, AsChangeset, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::app_settings)]
#[serde(rename_all = "camelCase")]
pub struct AppSettingDB {
    pub setting_key: String,
    pub setting_value: String,
}
