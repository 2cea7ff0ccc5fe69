//! Booking factory for creating test bookings.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Bookings default to the pending state with no driver or vehicle and a
/// pickup one hour in the future. The booking number is a unique test value
/// and does not follow the production date-prefixed format unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
/// use entity::booking::BookingStatus;
///
/// let booking = BookingFactory::new(&db, park.id, customer.id, user.id)
///     .driver_id(Some(driver.id))
///     .status(BookingStatus::Assigned)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    park_id: i32,
    customer_id: i32,
    created_by: i32,
    driver_id: Option<i32>,
    vehicle_id: Option<i32>,
    booking_number: String,
    pickup_address: String,
    dropoff_address: String,
    pickup_time: chrono::DateTime<Utc>,
    status: BookingStatus,
    fare: Option<f64>,
    notes: Option<String>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - booking_number: `"TEST-{id:06}"` where id is auto-incremented
    /// - pickup/dropoff: generated street addresses
    /// - pickup_time: one hour from now
    /// - status: `Pending`, no driver, vehicle, fare or notes
    pub fn new(db: &'a DatabaseConnection, park_id: i32, customer_id: i32, created_by: i32) -> Self {
        let id = next_id();
        Self {
            db,
            park_id,
            customer_id,
            created_by,
            driver_id: None,
            vehicle_id: None,
            booking_number: format!("TEST-{:06}", id),
            pickup_address: format!("{} Main Street", id),
            dropoff_address: format!("{} Harbor Avenue", id),
            pickup_time: Utc::now() + Duration::hours(1),
            status: BookingStatus::Pending,
            fare: None,
            notes: None,
        }
    }

    pub fn booking_number(mut self, booking_number: impl Into<String>) -> Self {
        self.booking_number = booking_number.into();
        self
    }

    pub fn driver_id(mut self, driver_id: Option<i32>) -> Self {
        self.driver_id = driver_id;
        self
    }

    pub fn vehicle_id(mut self, vehicle_id: Option<i32>) -> Self {
        self.vehicle_id = vehicle_id;
        self
    }

    pub fn pickup_time(mut self, pickup_time: chrono::DateTime<Utc>) -> Self {
        self.pickup_time = pickup_time;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn fare(mut self, fare: Option<f64>) -> Self {
        self.fare = fare;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            booking_number: ActiveValue::Set(self.booking_number),
            park_id: ActiveValue::Set(self.park_id),
            customer_id: ActiveValue::Set(self.customer_id),
            driver_id: ActiveValue::Set(self.driver_id),
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            created_by: ActiveValue::Set(self.created_by),
            pickup_address: ActiveValue::Set(self.pickup_address),
            dropoff_address: ActiveValue::Set(self.dropoff_address),
            pickup_time: ActiveValue::Set(self.pickup_time),
            status: ActiveValue::Set(self.status),
            fare: ActiveValue::Set(self.fare),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default values.
pub async fn create_booking(
    db: &DatabaseConnection,
    park_id: i32,
    customer_id: i32,
    created_by: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, park_id, customer_id, created_by)
        .build()
        .await
}
