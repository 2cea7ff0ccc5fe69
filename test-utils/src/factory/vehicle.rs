//! Vehicle factory for creating test vehicles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::vehicle::VehicleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test vehicles with customizable fields.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    park_id: i32,
    driver_id: Option<i32>,
    plate_number: String,
    make: String,
    model: String,
    year: i32,
    capacity: i32,
    status: VehicleStatus,
}

impl<'a> VehicleFactory<'a> {
    /// Creates a new VehicleFactory with default values.
    ///
    /// Defaults:
    /// - plate_number: `"PLT-{id:04}"`
    /// - make/model: `"Toyota"` / `"Camry"`, year 2022, capacity 4
    /// - driver_id: `None`
    /// - status: `Active`
    pub fn new(db: &'a DatabaseConnection, park_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            park_id,
            driver_id: None,
            plate_number: format!("PLT-{:04}", id),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            capacity: 4,
            status: VehicleStatus::Active,
        }
    }

    pub fn driver_id(mut self, driver_id: Option<i32>) -> Self {
        self.driver_id = driver_id;
        self
    }

    pub fn plate_number(mut self, plate_number: impl Into<String>) -> Self {
        self.plate_number = plate_number.into();
        self
    }

    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the vehicle entity into the database.
    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        let now = Utc::now();
        entity::vehicle::ActiveModel {
            park_id: ActiveValue::Set(self.park_id),
            driver_id: ActiveValue::Set(self.driver_id),
            plate_number: ActiveValue::Set(self.plate_number),
            make: ActiveValue::Set(self.make),
            model: ActiveValue::Set(self.model),
            year: ActiveValue::Set(self.year),
            color: ActiveValue::Set(None),
            capacity: ActiveValue::Set(self.capacity),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active unassigned vehicle in the given park with default values.
pub async fn create_vehicle(
    db: &DatabaseConnection,
    park_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, park_id).build().await
}
