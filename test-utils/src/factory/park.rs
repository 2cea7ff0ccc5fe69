//! Park factory for creating test park entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test parks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::park::ParkFactory;
///
/// let park = ParkFactory::new(&db)
///     .name("North Depot")
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct ParkFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: String,
    city: String,
    phone: Option<String>,
    active: bool,
}

impl<'a> ParkFactory<'a> {
    /// Creates a new ParkFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Park {id}"` where id is auto-incremented
    /// - address: `"{id} Depot Road"`
    /// - city: `"Riverton"`
    /// - phone: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Park {}", id),
            address: format!("{} Depot Road", id),
            city: "Riverton".to_string(),
            phone: None,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the park entity into the database.
    pub async fn build(self) -> Result<entity::park::Model, DbErr> {
        entity::park::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            city: ActiveValue::Set(self.city),
            phone: ActiveValue::Set(self.phone),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a park with default values.
///
/// Shorthand for `ParkFactory::new(db).build().await`.
pub async fn create_park(db: &DatabaseConnection) -> Result<entity::park::Model, DbErr> {
    ParkFactory::new(db).build().await
}
