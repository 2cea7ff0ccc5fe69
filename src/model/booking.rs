use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{customer::CustomerDto, driver::DriverDto, vehicle::VehicleDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatusDto {
    Pending,
    Assigned,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub booking_number: String,
    pub park_id: i32,
    pub customer_id: i32,
    pub driver_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub created_by: i32,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub pickup_time: DateTime<Utc>,
    pub status: BookingStatusDto,
    pub fare: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Booking with its related customer, driver and vehicle resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingDetailDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub customer: Option<CustomerDto>,
    pub driver: Option<DriverDto>,
    pub vehicle: Option<VehicleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub park_id: i32,
    pub customer_id: i32,
    pub driver_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub pickup_time: DateTime<Utc>,
    pub fare: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingDto {
    pub pickup_address: Option<String>,
    pub dropoff_address: Option<String>,
    pub pickup_time: Option<DateTime<Utc>>,
    pub fare: Option<Option<f64>>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignBookingDto {
    pub driver_id: i32,
    pub vehicle_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatusDto,
    /// Final fare, accepted only when completing a booking.
    pub fare: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBookingsDto {
    pub bookings: Vec<BookingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
