//! Per-park settings business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{park::ParkRepository, setting::SettingRepository},
    error::AppError,
    model::setting::Setting,
};

pub struct SettingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_settings(&self, park_id: i32) -> Result<Vec<Setting>, AppError> {
        self.check_park(park_id).await?;

        let setting_repo = SettingRepository::new(self.db);
        let settings = setting_repo.get_for_park(park_id).await?;
        Ok(settings)
    }

    pub async fn get_setting(&self, park_id: i32, key: &str) -> Result<Setting, AppError> {
        self.check_park(park_id).await?;

        let setting_repo = SettingRepository::new(self.db);
        setting_repo
            .get(park_id, key)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Setting {} not found", key)))
    }

    /// Creates the setting or replaces its value when the key already exists.
    pub async fn upsert_setting(
        &self,
        park_id: i32,
        key: &str,
        value: String,
    ) -> Result<Setting, AppError> {
        self.check_park(park_id).await?;

        let setting_repo = SettingRepository::new(self.db);
        let setting = setting_repo.upsert(park_id, key, value).await?;
        Ok(setting)
    }

    pub async fn delete_setting(&self, park_id: i32, key: &str) -> Result<(), AppError> {
        self.check_park(park_id).await?;

        let setting_repo = SettingRepository::new(self.db);
        let deleted = setting_repo.delete(park_id, key).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Setting {} not found", key)));
        }

        Ok(())
    }

    async fn check_park(&self, park_id: i32) -> Result<(), AppError> {
        let park_repo = ParkRepository::new(self.db);

        if !park_repo.exists(park_id).await? {
            return Err(AppError::NotFound(format!("Park {} not found", park_id)));
        }

        Ok(())
    }
}
