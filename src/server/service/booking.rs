//! Booking business logic.
//!
//! The service owns the booking lifecycle: number generation, driver and
//! vehicle assignment rules, and the status machine. Forward transitions run
//! pending → assigned → in_progress → completed; cancellation is allowed from
//! any non-terminal state. Every mutation is broadcast to the park and
//! booking rooms and fanned out as notifications to the park's staff.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::{
        booking::BookingRepository, customer::CustomerRepository, driver::DriverRepository,
        park::ParkRepository, vehicle::VehicleRepository,
    },
    error::AppError,
    model::booking::{
        AssignBookingParams, Booking, BookingDetail, BookingFilter, CreateBookingParams,
        PaginatedBookings, UpdateBookingParams, UpdateBookingStatusParams,
    },
    realtime::{
        hub::{RealtimeHub, Room},
        message::ServerEvent,
    },
    service::notification::NotificationService,
};
use entity::booking::BookingStatus;
use entity::driver::DriverStatus;
use entity::vehicle::VehicleStatus;

pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
    pub hub: &'a RealtimeHub,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, hub: &'a RealtimeHub) -> Self {
        Self { db, hub }
    }

    /// Creates a booking, assigning a number under today's date prefix.
    ///
    /// A driver may be attached immediately, in which case the booking starts
    /// in the assigned status and the driver is committed to the trip. A
    /// vehicle can only be attached together with a driver.
    pub async fn create_booking(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let park_repo = ParkRepository::new(self.db);
        let customer_repo = CustomerRepository::new(self.db);
        let driver_repo = DriverRepository::new(self.db);

        if !park_repo.exists(params.park_id).await? {
            return Err(AppError::NotFound(format!(
                "park {} does not exist",
                params.park_id
            )));
        }

        if customer_repo.get_by_id(params.customer_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "customer {} does not exist",
                params.customer_id
            )));
        }

        if params.vehicle_id.is_some() && params.driver_id.is_none() {
            return Err(AppError::BadRequest(
                "a vehicle can only be assigned together with a driver".to_string(),
            ));
        }

        if let Some(driver_id) = params.driver_id {
            self.check_driver_assignable(driver_id, params.park_id).await?;
        }
        if let Some(vehicle_id) = params.vehicle_id {
            self.check_vehicle_assignable(vehicle_id, params.park_id).await?;
        }

        let prefix = format!("BK-{}-", chrono::Utc::now().format("%Y%m%d"));
        let last = booking_repo.last_number_with_prefix(&prefix).await?;
        let booking_number = next_booking_number(last.as_deref(), &prefix);

        let status = if params.driver_id.is_some() {
            BookingStatus::Assigned
        } else {
            BookingStatus::Pending
        };

        let driver_id = params.driver_id;
        let created_by = params.created_by;

        let booking = booking_repo
            .create(params, booking_number, status)
            .await
            .map_err(|err| map_unique_violation(err, "booking number was already taken"))?;

        if let Some(driver_id) = driver_id {
            driver_repo.set_status(driver_id, DriverStatus::OnTrip).await?;
        }

        self.announce(
            &booking,
            Some(created_by),
            "booking.created",
            &format!("Booking {} created", booking.booking_number),
            &format!(
                "Pickup at {} on {}",
                booking.pickup_address,
                booking.pickup_time.format("%Y-%m-%d %H:%M")
            ),
        )
        .await?;

        Ok(booking)
    }

    /// Gets a booking with its customer, driver and vehicle resolved.
    pub async fn get_booking(&self, id: i32) -> Result<BookingDetail, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        booking_repo
            .get_detail_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    pub async fn get_all_bookings(
        &self,
        filter: BookingFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedBookings, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let (bookings, total) = booking_repo
            .get_all_paginated(filter, page.saturating_sub(1), per_page)
            .await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedBookings {
            bookings,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates trip details of a booking that has not reached a terminal
    /// state.
    pub async fn update_booking(&self, params: UpdateBookingParams) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let booking = booking_repo
            .get_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", params.id)))?;

        if is_terminal(booking.status) {
            return Err(AppError::BadRequest(format!(
                "booking {} is {} and can no longer be edited",
                booking.booking_number,
                status_label(booking.status)
            )));
        }

        let id = params.id;
        let updated = booking_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        self.broadcast_update(&updated).await;

        Ok(updated)
    }

    /// Assigns (or reassigns) a driver and optional vehicle to a booking.
    ///
    /// Allowed while the booking is pending or assigned. A previously
    /// assigned driver is released back to available unless they hold other
    /// open bookings.
    pub async fn assign_booking(&self, params: AssignBookingParams) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let driver_repo = DriverRepository::new(self.db);

        let booking = booking_repo
            .get_by_id(params.booking_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking {} not found", params.booking_id))
            })?;

        if !matches!(booking.status, BookingStatus::Pending | BookingStatus::Assigned) {
            return Err(AppError::BadRequest(format!(
                "booking {} is {} and cannot be assigned",
                booking.booking_number,
                status_label(booking.status)
            )));
        }

        let previous_driver = booking.driver_id;

        if previous_driver != Some(params.driver_id) {
            self.check_driver_assignable(params.driver_id, booking.park_id)
                .await?;
        }
        if let Some(vehicle_id) = params.vehicle_id {
            self.check_vehicle_assignable(vehicle_id, booking.park_id)
                .await?;
        }

        let updated = booking_repo
            .assign(params.booking_id, params.driver_id, params.vehicle_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking {} not found", params.booking_id))
            })?;

        driver_repo
            .set_status(params.driver_id, DriverStatus::OnTrip)
            .await?;

        if let Some(old_driver) = previous_driver {
            if old_driver != params.driver_id {
                self.release_driver_if_idle(old_driver, Some(updated.id)).await?;
            }
        }

        self.announce(
            &updated,
            None,
            "booking.assigned",
            &format!("Booking {} assigned", updated.booking_number),
            &format!("Driver {} is taking the trip", params.driver_id),
        )
        .await?;

        Ok(updated)
    }

    /// Moves a booking through its status machine.
    ///
    /// Legal transitions are assigned → in_progress, in_progress → completed
    /// and any non-terminal state → cancelled. Completion accepts a final
    /// fare; the driver is released once the booking reaches a terminal
    /// state.
    pub async fn update_booking_status(
        &self,
        params: UpdateBookingStatusParams,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let booking = booking_repo
            .get_by_id(params.booking_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking {} not found", params.booking_id))
            })?;

        let legal = match params.status {
            BookingStatus::InProgress => booking.status == BookingStatus::Assigned,
            BookingStatus::Completed => booking.status == BookingStatus::InProgress,
            BookingStatus::Cancelled => !is_terminal(booking.status),
            // Pending is the birth state and assigned is owned by the
            // assignment endpoint.
            BookingStatus::Pending | BookingStatus::Assigned => false,
        };

        if !legal {
            return Err(AppError::BadRequest(format!(
                "cannot move booking {} from {} to {}",
                booking.booking_number,
                status_label(booking.status),
                status_label(params.status)
            )));
        }

        let fare = if params.status == BookingStatus::Completed {
            params.fare
        } else {
            None
        };

        let updated = booking_repo
            .set_status(params.booking_id, params.status, fare)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking {} not found", params.booking_id))
            })?;

        if is_terminal(updated.status) {
            if let Some(driver_id) = updated.driver_id {
                self.release_driver_if_idle(driver_id, Some(updated.id)).await?;
            }
        }

        self.announce(
            &updated,
            None,
            "booking.status_changed",
            &format!(
                "Booking {} {}",
                updated.booking_number,
                status_label(updated.status)
            ),
            &format!(
                "Status changed from {} to {}",
                status_label(booking.status),
                status_label(updated.status)
            ),
        )
        .await?;

        Ok(updated)
    }

    /// Deletes a booking. An assigned driver on a still-open booking is
    /// released back to available unless they hold other open bookings.
    pub async fn delete_booking(&self, id: i32) -> Result<(), AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let booking = booking_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

        booking_repo.delete(id).await?;

        if !is_terminal(booking.status) {
            if let Some(driver_id) = booking.driver_id {
                self.release_driver_if_idle(driver_id, None).await?;
            }
        }

        Ok(())
    }

    /// Checks a driver can take a booking of the given park.
    async fn check_driver_assignable(&self, driver_id: i32, park_id: i32) -> Result<(), AppError> {
        let driver_repo = DriverRepository::new(self.db);

        let driver = driver_repo
            .get_by_id(driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("driver {} does not exist", driver_id)))?;

        if driver.park_id != park_id {
            return Err(AppError::BadRequest(format!(
                "driver {} belongs to a different park",
                driver_id
            )));
        }

        if driver.status != DriverStatus::Available {
            return Err(AppError::Conflict(format!(
                "driver {} is {}",
                driver_id,
                driver_status_label(driver.status)
            )));
        }

        Ok(())
    }

    /// Checks a vehicle can serve a booking of the given park.
    async fn check_vehicle_assignable(
        &self,
        vehicle_id: i32,
        park_id: i32,
    ) -> Result<(), AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let vehicle = vehicle_repo.get_by_id(vehicle_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("vehicle {} does not exist", vehicle_id))
        })?;

        if vehicle.park_id != park_id {
            return Err(AppError::BadRequest(format!(
                "vehicle {} belongs to a different park",
                vehicle_id
            )));
        }

        if vehicle.status != VehicleStatus::Active {
            return Err(AppError::Conflict(format!(
                "vehicle {} is not in active service",
                vehicle_id
            )));
        }

        Ok(())
    }

    /// Returns a driver to available unless they still hold other open
    /// bookings.
    async fn release_driver_if_idle(
        &self,
        driver_id: i32,
        exclude_booking: Option<i32>,
    ) -> Result<(), AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let driver_repo = DriverRepository::new(self.db);

        let open = booking_repo
            .count_open_for_driver(driver_id, exclude_booking)
            .await?;
        if open == 0 {
            driver_repo
                .set_status(driver_id, DriverStatus::Available)
                .await?;
        }

        Ok(())
    }

    /// Pushes the updated booking to its rooms and fans a notification out to
    /// the park's staff and the booking's creator.
    async fn announce(
        &self,
        booking: &Booking,
        exclude_user: Option<i32>,
        kind: &str,
        title: &str,
        body: &str,
    ) -> Result<(), AppError> {
        self.broadcast_update(booking).await;

        let notification_service = NotificationService::new(self.db, self.hub);
        notification_service
            .notify_park_staff(
                booking.park_id,
                Some(booking.created_by),
                exclude_user,
                Some(booking.id),
                kind,
                title,
                body,
            )
            .await?;

        Ok(())
    }

    async fn broadcast_update(&self, booking: &Booking) {
        let event = ServerEvent::BookingUpdated {
            booking: booking.clone().into_dto(),
        };

        self.hub
            .broadcast_room(Room::Park(booking.park_id), event.clone())
            .await;
        self.hub
            .broadcast_room(Room::Booking(booking.id), event)
            .await;
    }
}

fn is_terminal(status: BookingStatus) -> bool {
    matches!(status, BookingStatus::Completed | BookingStatus::Cancelled)
}

fn status_label(status: BookingStatus) -> &'static str {
    match status {
        BookingStatus::Pending => "pending",
        BookingStatus::Assigned => "assigned",
        BookingStatus::InProgress => "in progress",
        BookingStatus::Completed => "completed",
        BookingStatus::Cancelled => "cancelled",
    }
}

fn driver_status_label(status: DriverStatus) -> &'static str {
    match status {
        DriverStatus::Available => "available",
        DriverStatus::OnTrip => "on a trip",
        DriverStatus::OffDuty => "off duty",
        DriverStatus::Suspended => "suspended",
    }
}

/// Computes the next booking number under a date prefix by incrementing the
/// numeric suffix of the highest number issued so far.
fn next_booking_number(last: Option<&str>, prefix: &str) -> String {
    let next = last
        .and_then(|number| number.rsplit('-').next())
        .and_then(|suffix| suffix.parse::<u32>().ok())
        .map(|sequence| sequence + 1)
        .unwrap_or(1);

    format!("{}{:04}", prefix, next)
}

fn map_unique_violation(err: DbErr, message: &str) -> AppError {
    if err.to_string().contains("UNIQUE constraint failed") {
        AppError::Conflict(message.to_string())
    } else {
        err.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_number_of_the_day_starts_at_one() {
        assert_eq!(
            next_booking_number(None, "BK-20260315-"),
            "BK-20260315-0001"
        );
    }

    #[test]
    fn increments_the_highest_issued_number() {
        assert_eq!(
            next_booking_number(Some("BK-20260315-0042"), "BK-20260315-"),
            "BK-20260315-0043"
        );
    }

    #[test]
    fn sequence_grows_past_four_digits() {
        assert_eq!(
            next_booking_number(Some("BK-20260315-9999"), "BK-20260315-"),
            "BK-20260315-10000"
        );
    }

    #[test]
    fn unparseable_suffix_restarts_the_sequence() {
        assert_eq!(
            next_booking_number(Some("BK-20260315-junk"), "BK-20260315-"),
            "BK-20260315-0001"
        );
    }

    #[test]
    fn terminal_states_are_completed_and_cancelled() {
        assert!(is_terminal(BookingStatus::Completed));
        assert!(is_terminal(BookingStatus::Cancelled));
        assert!(!is_terminal(BookingStatus::Pending));
        assert!(!is_terminal(BookingStatus::Assigned));
        assert!(!is_terminal(BookingStatus::InProgress));
    }
}
