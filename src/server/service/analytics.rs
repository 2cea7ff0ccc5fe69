//! Dashboard aggregate business logic.
//!
//! Aggregates are computed with per-status count queries rather than a
//! grouped query; the dashboard is read by a handful of staff and the tables
//! are small enough that simplicity wins.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, driver::DriverRepository, park::ParkRepository,
        vehicle::VehicleRepository,
    },
    error::AppError,
    model::analytics::{
        BookingStatusBreakdown, DailyBookings, DriverStatusBreakdown, ParkDashboard,
        VehicleStatusBreakdown,
    },
};
use entity::booking::BookingStatus;
use entity::driver::DriverStatus;
use entity::vehicle::VehicleStatus;

/// Days of history in the bookings-per-day series, including today.
const DAILY_SERIES_DAYS: i64 = 7;

pub struct AnalyticsService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the dashboard aggregates for one park.
    pub async fn park_dashboard(&self, park_id: i32) -> Result<ParkDashboard, AppError> {
        let park_repo = ParkRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);
        let driver_repo = DriverRepository::new(self.db);
        let vehicle_repo = VehicleRepository::new(self.db);

        if !park_repo.exists(park_id).await? {
            return Err(AppError::NotFound(format!("Park {} not found", park_id)));
        }

        let bookings_by_status = BookingStatusBreakdown {
            pending: booking_repo
                .count_by_status(park_id, BookingStatus::Pending)
                .await?,
            assigned: booking_repo
                .count_by_status(park_id, BookingStatus::Assigned)
                .await?,
            in_progress: booking_repo
                .count_by_status(park_id, BookingStatus::InProgress)
                .await?,
            completed: booking_repo
                .count_by_status(park_id, BookingStatus::Completed)
                .await?,
            cancelled: booking_repo
                .count_by_status(park_id, BookingStatus::Cancelled)
                .await?,
        };

        let drivers_by_status = DriverStatusBreakdown {
            available: driver_repo
                .count_by_status(park_id, DriverStatus::Available)
                .await?,
            on_trip: driver_repo
                .count_by_status(park_id, DriverStatus::OnTrip)
                .await?,
            off_duty: driver_repo
                .count_by_status(park_id, DriverStatus::OffDuty)
                .await?,
            suspended: driver_repo
                .count_by_status(park_id, DriverStatus::Suspended)
                .await?,
        };

        let vehicles_by_status = VehicleStatusBreakdown {
            active: vehicle_repo
                .count_by_status(park_id, VehicleStatus::Active)
                .await?,
            maintenance: vehicle_repo
                .count_by_status(park_id, VehicleStatus::Maintenance)
                .await?,
            retired: vehicle_repo
                .count_by_status(park_id, VehicleStatus::Retired)
                .await?,
        };

        let today = Utc::now().date_naive();
        let today_start = today.and_hms_opt(0, 0, 0).unwrap().and_utc();
        let tomorrow_start = today_start + Duration::days(1);

        let bookings_today = booking_repo
            .count_created_between(park_id, today_start, tomorrow_start)
            .await?;
        let revenue_today = booking_repo
            .sum_completed_fares(park_id, today_start, tomorrow_start)
            .await?;

        let mut bookings_last_week = Vec::with_capacity(DAILY_SERIES_DAYS as usize);
        for offset in (0..DAILY_SERIES_DAYS).rev() {
            let date = today - Duration::days(offset);
            let day_start = date.and_hms_opt(0, 0, 0).unwrap().and_utc();
            let day_end = day_start + Duration::days(1);

            let bookings = booking_repo
                .count_created_between(park_id, day_start, day_end)
                .await?;
            bookings_last_week.push(DailyBookings { date, bookings });
        }

        Ok(ParkDashboard {
            park_id,
            bookings_by_status,
            bookings_today,
            revenue_today,
            drivers_by_status,
            vehicles_by_status,
            bookings_last_week,
        })
    }
}
