use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::setting::Setting;

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all settings of a park ordered by key.
    pub async fn get_for_park(&self, park_id: i32) -> Result<Vec<Setting>, DbErr> {
        let settings = entity::prelude::Setting::find()
            .filter(entity::setting::Column::ParkId.eq(park_id))
            .order_by_asc(entity::setting::Column::Key)
            .all(self.db)
            .await?;

        Ok(settings.into_iter().map(Setting::from_entity).collect())
    }

    pub async fn get(&self, park_id: i32, key: &str) -> Result<Option<Setting>, DbErr> {
        let setting = entity::prelude::Setting::find()
            .filter(entity::setting::Column::ParkId.eq(park_id))
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(setting.map(Setting::from_entity))
    }

    /// Creates the setting or replaces its value when the key already exists
    /// for the park.
    pub async fn upsert(&self, park_id: i32, key: &str, value: String) -> Result<Setting, DbErr> {
        let existing = entity::prelude::Setting::find()
            .filter(entity::setting::Column::ParkId.eq(park_id))
            .filter(entity::setting::Column::Key.eq(key))
            .one(self.db)
            .await?;

        let setting = match existing {
            Some(setting) => {
                let mut active_model: entity::setting::ActiveModel = setting.into();
                active_model.value = ActiveValue::Set(value);
                active_model.updated_at = ActiveValue::Set(chrono::Utc::now());
                active_model.update(self.db).await?
            }
            None => {
                entity::setting::ActiveModel {
                    park_id: ActiveValue::Set(park_id),
                    key: ActiveValue::Set(key.to_string()),
                    value: ActiveValue::Set(value),
                    updated_at: ActiveValue::Set(chrono::Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Setting::from_entity(setting))
    }

    /// Deletes a setting by key. Returns the number of rows removed.
    pub async fn delete(&self, park_id: i32, key: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Setting::delete_many()
            .filter(entity::setting::Column::ParkId.eq(park_id))
            .filter(entity::setting::Column::Key.eq(key))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
