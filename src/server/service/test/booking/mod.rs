use crate::server::{
    data::driver::DriverRepository,
    error::AppError,
    model::booking::{CreateBookingParams, UpdateBookingStatusParams},
    realtime::hub::RealtimeHub,
    service::booking::BookingService,
};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use entity::driver::DriverStatus;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod update_status;

fn create_params(park_id: i32, customer_id: i32, created_by: i32) -> CreateBookingParams {
    CreateBookingParams {
        park_id,
        customer_id,
        driver_id: None,
        vehicle_id: None,
        created_by,
        pickup_address: "1 Station Square".to_string(),
        dropoff_address: "2 Airport Road".to_string(),
        pickup_time: Utc::now() + Duration::hours(1),
        fare: None,
        notes: None,
    }
}
