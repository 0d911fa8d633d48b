//! Application settings domain models.

use serde::{Deserialize, Serialize};

/// Application-level settings, stored as key/value rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// IANA timezone used to derive "today" for completion gating.
    pub timezone: String,
    pub reminders_enabled: bool,
    pub onboarding_completed: bool,
    pub instance_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            timezone: "UTC".to_string(),
            reminders_enabled: true,
            onboarding_completed: false,
            instance_id: String::new(),
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub timezone: Option<String>,
    pub reminders_enabled: Option<bool>,
    pub onboarding_completed: Option<bool>,
}
