use crate::errors::Result;
use crate::settings::{Settings, SettingsUpdate};
use async_trait::async_trait;

/// Trait for settings repository operations.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;
    async fn update_settings(&self, new_settings: &SettingsUpdate) -> Result<()>;
}

/// Trait for settings service operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;
    async fn update_settings(&self, update: SettingsUpdate) -> Result<Settings>;
}
