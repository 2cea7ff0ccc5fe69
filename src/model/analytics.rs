use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booking counts broken down by lifecycle status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BookingStatusBreakdownDto {
    pub pending: u64,
    pub assigned: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

/// Driver counts broken down by duty status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DriverStatusBreakdownDto {
    pub available: u64,
    pub on_trip: u64,
    pub off_duty: u64,
    pub suspended: u64,
}

/// Vehicle counts broken down by operational status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VehicleStatusBreakdownDto {
    pub active: u64,
    pub maintenance: u64,
    pub retired: u64,
}

/// One day of the bookings-per-day series.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DailyBookingsDto {
    pub date: NaiveDate,
    pub bookings: u64,
}

/// Dashboard aggregates for a single park.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParkDashboardDto {
    pub park_id: i32,
    pub bookings_by_status: BookingStatusBreakdownDto,
    pub bookings_today: u64,
    pub revenue_today: f64,
    pub drivers_by_status: DriverStatusBreakdownDto,
    pub vehicles_by_status: VehicleStatusBreakdownDto,
    pub bookings_last_week: Vec<DailyBookingsDto>,
}
