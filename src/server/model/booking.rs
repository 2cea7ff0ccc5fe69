use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;

use crate::model::booking::{
    AssignBookingDto, BookingDetailDto, BookingDto, BookingStatusDto, CreateBookingDto,
    PaginatedBookingsDto, UpdateBookingDto, UpdateBookingStatusDto,
};
use crate::server::model::{customer::Customer, driver::Driver, vehicle::Vehicle};

impl From<BookingStatus> for BookingStatusDto {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => Self::Pending,
            BookingStatus::Assigned => Self::Assigned,
            BookingStatus::InProgress => Self::InProgress,
            BookingStatus::Completed => Self::Completed,
            BookingStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<BookingStatusDto> for BookingStatus {
    fn from(status: BookingStatusDto) -> Self {
        match status {
            BookingStatusDto::Pending => Self::Pending,
            BookingStatusDto::Assigned => Self::Assigned,
            BookingStatusDto::InProgress => Self::InProgress,
            BookingStatusDto::Completed => Self::Completed,
            BookingStatusDto::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
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
    pub status: BookingStatus,
    pub fare: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            booking_number: entity.booking_number,
            park_id: entity.park_id,
            customer_id: entity.customer_id,
            driver_id: entity.driver_id,
            vehicle_id: entity.vehicle_id,
            created_by: entity.created_by,
            pickup_address: entity.pickup_address,
            dropoff_address: entity.dropoff_address,
            pickup_time: entity.pickup_time,
            status: entity.status,
            fare: entity.fare,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            booking_number: self.booking_number,
            park_id: self.park_id,
            customer_id: self.customer_id,
            driver_id: self.driver_id,
            vehicle_id: self.vehicle_id,
            created_by: self.created_by,
            pickup_address: self.pickup_address,
            dropoff_address: self.dropoff_address,
            pickup_time: self.pickup_time,
            status: self.status.into(),
            fare: self.fare,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

/// Booking joined with the related records a dispatcher needs on one screen.
#[derive(Debug, Clone)]
pub struct BookingDetail {
    pub booking: Booking,
    pub customer: Option<Customer>,
    pub driver: Option<Driver>,
    pub vehicle: Option<Vehicle>,
}

impl BookingDetail {
    pub fn into_dto(self) -> BookingDetailDto {
        BookingDetailDto {
            booking: self.booking.into_dto(),
            customer: self.customer.map(Customer::into_dto),
            driver: self.driver.map(Driver::into_dto),
            vehicle: self.vehicle.map(Vehicle::into_dto),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub park_id: i32,
    pub customer_id: i32,
    pub driver_id: Option<i32>,
    pub vehicle_id: Option<i32>,
    pub created_by: i32,
    pub pickup_address: String,
    pub dropoff_address: String,
    pub pickup_time: DateTime<Utc>,
    pub fare: Option<f64>,
    pub notes: Option<String>,
}

impl CreateBookingParams {
    pub fn from_dto(created_by: i32, dto: CreateBookingDto) -> Self {
        Self {
            park_id: dto.park_id,
            customer_id: dto.customer_id,
            driver_id: dto.driver_id,
            vehicle_id: dto.vehicle_id,
            created_by,
            pickup_address: dto.pickup_address,
            dropoff_address: dto.dropoff_address,
            pickup_time: dto.pickup_time,
            fare: dto.fare,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBookingParams {
    pub id: i32,
    pub pickup_address: Option<String>,
    pub dropoff_address: Option<String>,
    pub pickup_time: Option<DateTime<Utc>>,
    pub fare: Option<Option<f64>>,
    pub notes: Option<Option<String>>,
}

impl UpdateBookingParams {
    pub fn from_dto(id: i32, dto: UpdateBookingDto) -> Self {
        Self {
            id,
            pickup_address: dto.pickup_address,
            dropoff_address: dto.dropoff_address,
            pickup_time: dto.pickup_time,
            fare: dto.fare,
            notes: dto.notes,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AssignBookingParams {
    pub booking_id: i32,
    pub driver_id: i32,
    pub vehicle_id: Option<i32>,
}

impl AssignBookingParams {
    pub fn from_dto(booking_id: i32, dto: AssignBookingDto) -> Self {
        Self {
            booking_id,
            driver_id: dto.driver_id,
            vehicle_id: dto.vehicle_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateBookingStatusParams {
    pub booking_id: i32,
    pub status: BookingStatus,
    pub fare: Option<f64>,
}

impl UpdateBookingStatusParams {
    pub fn from_dto(booking_id: i32, dto: UpdateBookingStatusDto) -> Self {
        Self {
            booking_id,
            status: dto.status.into(),
            fare: dto.fare,
        }
    }
}

/// Listing filters for bookings.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub park_id: Option<i32>,
    pub status: Option<BookingStatus>,
    pub driver_id: Option<i32>,
    pub customer_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PaginatedBookings {
    pub bookings: Vec<Booking>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedBookings {
    pub fn into_dto(self) -> PaginatedBookingsDto {
        PaginatedBookingsDto {
            bookings: self.bookings.into_iter().map(Booking::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
