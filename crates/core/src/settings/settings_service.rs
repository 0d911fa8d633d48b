use log::debug;
use std::sync::Arc;

use crate::errors::{Error, Result};
use crate::settings::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::settings::{Settings, SettingsUpdate};
use async_trait::async_trait;

pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService { repository }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        self.repository.get_settings()
    }

    async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings> {
        if let Some(tz) = &update.timezone {
            if tz.trim().is_empty() {
                return Err(Error::InvalidConfigValue(
                    "timezone cannot be empty".to_string(),
                ));
            }
        }

        debug!("Updating settings: {:?}", update);
        self.repository.update_settings(&update).await?;
        self.repository.get_settings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct MemorySettings {
        settings: Mutex<Settings>,
    }

    impl MemorySettings {
        fn new() -> Self {
            MemorySettings {
                settings: Mutex::new(Settings::default()),
            }
        }
    }

    #[async_trait]
    impl SettingsRepositoryTrait for MemorySettings {
        fn get_settings(&self) -> Result<Settings> {
            Ok(self.settings.lock().unwrap().clone())
        }

        async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()> {
            let mut settings = self.settings.lock().unwrap();
            if let Some(tz) = &new_settings.timezone {
                settings.timezone = tz.clone();
            }
            if let Some(enabled) = new_settings.reminders_enabled {
                settings.reminders_enabled = enabled;
            }
            if let Some(done) = new_settings.onboarding_completed {
                settings.onboarding_completed = done;
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_update_settings_applies_fields() {
        let service = SettingsService::new(Arc::new(MemorySettings::new()));

        let updated = service
            .update_settings(SettingsUpdate {
                timezone: Some("America/New_York".to_string()),
                reminders_enabled: Some(false),
                onboarding_completed: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.timezone, "America/New_York");
        assert!(!updated.reminders_enabled);
        assert!(!updated.onboarding_completed);
    }

    #[tokio::test]
    async fn test_update_settings_rejects_empty_timezone() {
        let service = SettingsService::new(Arc::new(MemorySettings::new()));

        let err = service
            .update_settings(SettingsUpdate {
                timezone: Some("  ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidConfigValue(_)));
        // A rejected update must leave stored settings untouched.
        assert_eq!(service.get_settings().unwrap().timezone, "UTC");
    }
}
