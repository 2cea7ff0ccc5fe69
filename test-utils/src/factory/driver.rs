//! Driver factory for creating test drivers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::driver::DriverStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test drivers with customizable fields.
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    park_id: i32,
    first_name: String,
    last_name: String,
    license_number: String,
    phone: String,
    email: Option<String>,
    status: DriverStatus,
}

impl<'a> DriverFactory<'a> {
    /// Creates a new DriverFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Driver"`, last_name: `"{id}"`
    /// - license_number: `"DL-{id:05}"`
    /// - phone: `"+1555{id:07}"`
    /// - status: `Available`
    pub fn new(db: &'a DatabaseConnection, park_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            park_id,
            first_name: "Driver".to_string(),
            last_name: format!("{}", id),
            license_number: format!("DL-{:05}", id),
            phone: format!("+1555{:07}", id),
            email: None,
            status: DriverStatus::Available,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn license_number(mut self, license_number: impl Into<String>) -> Self {
        self.license_number = license_number.into();
        self
    }

    pub fn status(mut self, status: DriverStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the driver entity into the database.
    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        let now = Utc::now();
        entity::driver::ActiveModel {
            park_id: ActiveValue::Set(self.park_id),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            license_number: ActiveValue::Set(self.license_number),
            phone: ActiveValue::Set(self.phone),
            email: ActiveValue::Set(self.email),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available driver in the given park with default values.
pub async fn create_driver(
    db: &DatabaseConnection,
    park_id: i32,
) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db, park_id).build().await
}
