//! Booking data repository.
//!
//! Bookings carry a human-readable booking number on top of the surrogate
//! primary key. Number generation is a scan of the highest number issued for
//! the current date prefix; the unique column constraint backstops races.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::booking::{
    Booking, BookingDetail, BookingFilter, CreateBookingParams, UpdateBookingParams,
};
use crate::server::model::{customer::Customer, driver::Driver, vehicle::Vehicle};
use entity::booking::BookingStatus;

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking with the given number and initial status.
    pub async fn create(
        &self,
        params: CreateBookingParams,
        booking_number: String,
        status: BookingStatus,
    ) -> Result<Booking, DbErr> {
        let now = chrono::Utc::now();

        let booking = entity::booking::ActiveModel {
            booking_number: ActiveValue::Set(booking_number),
            park_id: ActiveValue::Set(params.park_id),
            customer_id: ActiveValue::Set(params.customer_id),
            driver_id: ActiveValue::Set(params.driver_id),
            vehicle_id: ActiveValue::Set(params.vehicle_id),
            created_by: ActiveValue::Set(params.created_by),
            pickup_address: ActiveValue::Set(params.pickup_address),
            dropoff_address: ActiveValue::Set(params.dropoff_address),
            pickup_time: ActiveValue::Set(params.pickup_time),
            status: ActiveValue::Set(status),
            fare: ActiveValue::Set(params.fare),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(id).one(self.db).await?;
        Ok(booking.map(Booking::from_entity))
    }

    /// Gets a booking together with its customer, driver and vehicle.
    pub async fn get_detail_by_id(&self, id: i32) -> Result<Option<BookingDetail>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let customer = entity::prelude::Customer::find_by_id(booking.customer_id)
            .one(self.db)
            .await?;

        let driver = match booking.driver_id {
            Some(driver_id) => {
                entity::prelude::Driver::find_by_id(driver_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        let vehicle = match booking.vehicle_id {
            Some(vehicle_id) => {
                entity::prelude::Vehicle::find_by_id(vehicle_id)
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Some(BookingDetail {
            booking: Booking::from_entity(booking),
            customer: customer.map(Customer::from_entity),
            driver: driver.map(Driver::from_entity),
            vehicle: vehicle.map(Vehicle::from_entity),
        }))
    }

    /// Finds the highest booking number issued under a date prefix, e.g.
    /// `BK-20260315-`. Returns `None` when no booking carries the prefix yet.
    ///
    /// The winner is picked by the numeric suffix, not lexicographically, so
    /// the sequence keeps advancing after it grows past four digits.
    pub async fn last_number_with_prefix(&self, prefix: &str) -> Result<Option<String>, DbErr> {
        let numbers: Vec<String> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::BookingNumber)
            .filter(entity::booking::Column::BookingNumber.starts_with(prefix))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(numbers.into_iter().max_by_key(|number| {
            number
                .rsplit('-')
                .next()
                .and_then(|suffix| suffix.parse::<u64>().ok())
                .unwrap_or(0)
        }))
    }

    /// Gets bookings with pagination, newest pickup first.
    pub async fn get_all_paginated(
        &self,
        filter: BookingFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let mut query = entity::prelude::Booking::find();

        if let Some(park_id) = filter.park_id {
            query = query.filter(entity::booking::Column::ParkId.eq(park_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }
        if let Some(driver_id) = filter.driver_id {
            query = query.filter(entity::booking::Column::DriverId.eq(driver_id));
        }
        if let Some(customer_id) = filter.customer_id {
            query = query.filter(entity::booking::Column::CustomerId.eq(customer_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::booking::Column::PickupTime.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::booking::Column::PickupTime.lt(to));
        }

        let paginator = query
            .order_by_desc(entity::booking::Column::PickupTime)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let bookings = entities.into_iter().map(Booking::from_entity).collect();

        Ok((bookings, total))
    }

    /// Applies a partial update to the trip details. Returns `None` when no
    /// booking with the given id exists.
    pub async fn update(&self, params: UpdateBookingParams) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();

        if let Some(pickup_address) = params.pickup_address {
            active_model.pickup_address = ActiveValue::Set(pickup_address);
        }
        if let Some(dropoff_address) = params.dropoff_address {
            active_model.dropoff_address = ActiveValue::Set(dropoff_address);
        }
        if let Some(pickup_time) = params.pickup_time {
            active_model.pickup_time = ActiveValue::Set(pickup_time);
        }
        if let Some(fare) = params.fare {
            active_model.fare = ActiveValue::Set(fare);
        }
        if let Some(notes) = params.notes {
            active_model.notes = ActiveValue::Set(notes);
        }
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        let updated = active_model.update(self.db).await?;
        Ok(Some(Booking::from_entity(updated)))
    }

    /// Sets the driver and vehicle of a booking and moves it to the assigned
    /// status. Returns `None` when no booking with the given id exists.
    pub async fn assign(
        &self,
        id: i32,
        driver_id: i32,
        vehicle_id: Option<i32>,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.driver_id = ActiveValue::Set(Some(driver_id));
        active_model.vehicle_id = ActiveValue::Set(vehicle_id);
        active_model.status = ActiveValue::Set(BookingStatus::Assigned);
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        let updated = active_model.update(self.db).await?;
        Ok(Some(Booking::from_entity(updated)))
    }

    /// Moves a booking to a new status, setting the final fare when given.
    /// Returns `None` when no booking with the given id exists.
    pub async fn set_status(
        &self,
        id: i32,
        status: BookingStatus,
        fare: Option<f64>,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status);
        if let Some(fare) = fare {
            active_model.fare = ActiveValue::Set(Some(fare));
        }
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        let updated = active_model.update(self.db).await?;
        Ok(Some(Booking::from_entity(updated)))
    }

    /// Counts bookings a driver is still committed to (assigned or in
    /// progress), optionally excluding one booking. Used to decide whether a
    /// driver can be released back to available.
    pub async fn count_open_for_driver(
        &self,
        driver_id: i32,
        exclude_booking: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::DriverId.eq(driver_id))
            .filter(
                entity::booking::Column::Status
                    .is_in([BookingStatus::Assigned, BookingStatus::InProgress]),
            );

        if let Some(id) = exclude_booking {
            query = query.filter(entity::booking::Column::Id.ne(id));
        }

        query.count(self.db).await
    }

    /// Counts bookings of a park in the given status.
    pub async fn count_by_status(
        &self,
        park_id: i32,
        status: BookingStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ParkId.eq(park_id))
            .filter(entity::booking::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Counts bookings of a park created within `[from, to)`.
    pub async fn count_created_between(
        &self,
        park_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ParkId.eq(park_id))
            .filter(entity::booking::Column::CreatedAt.gte(from))
            .filter(entity::booking::Column::CreatedAt.lt(to))
            .count(self.db)
            .await
    }

    /// Sums the fares of completed bookings of a park with a pickup time
    /// within `[from, to)`.
    pub async fn sum_completed_fares(
        &self,
        park_id: i32,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<f64, DbErr> {
        let total: Option<Option<f64>> = entity::prelude::Booking::find()
            .select_only()
            .column_as(entity::booking::Column::Fare.sum(), "total")
            .filter(entity::booking::Column::ParkId.eq(park_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Completed))
            .filter(entity::booking::Column::PickupTime.gte(from))
            .filter(entity::booking::Column::PickupTime.lt(to))
            .into_tuple()
            .one(self.db)
            .await?;

        Ok(total.flatten().unwrap_or(0.0))
    }

    /// Deletes a booking. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
