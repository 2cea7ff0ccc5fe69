use chrono::NaiveDate;

use crate::model::analytics::{
    BookingStatusBreakdownDto, DailyBookingsDto, DriverStatusBreakdownDto, ParkDashboardDto,
    VehicleStatusBreakdownDto,
};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStatusBreakdown {
    pub pending: u64,
    pub assigned: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl BookingStatusBreakdown {
    pub fn into_dto(self) -> BookingStatusBreakdownDto {
        BookingStatusBreakdownDto {
            pending: self.pending,
            assigned: self.assigned,
            in_progress: self.in_progress,
            completed: self.completed,
            cancelled: self.cancelled,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverStatusBreakdown {
    pub available: u64,
    pub on_trip: u64,
    pub off_duty: u64,
    pub suspended: u64,
}

impl DriverStatusBreakdown {
    pub fn into_dto(self) -> DriverStatusBreakdownDto {
        DriverStatusBreakdownDto {
            available: self.available,
            on_trip: self.on_trip,
            off_duty: self.off_duty,
            suspended: self.suspended,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleStatusBreakdown {
    pub active: u64,
    pub maintenance: u64,
    pub retired: u64,
}

impl VehicleStatusBreakdown {
    pub fn into_dto(self) -> VehicleStatusBreakdownDto {
        VehicleStatusBreakdownDto {
            active: self.active,
            maintenance: self.maintenance,
            retired: self.retired,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyBookings {
    pub date: NaiveDate,
    pub bookings: u64,
}

impl DailyBookings {
    pub fn into_dto(self) -> DailyBookingsDto {
        DailyBookingsDto {
            date: self.date,
            bookings: self.bookings,
        }
    }
}

/// Aggregates backing the park dashboard.
#[derive(Debug, Clone)]
pub struct ParkDashboard {
    pub park_id: i32,
    pub bookings_by_status: BookingStatusBreakdown,
    pub bookings_today: u64,
    pub revenue_today: f64,
    pub drivers_by_status: DriverStatusBreakdown,
    pub vehicles_by_status: VehicleStatusBreakdown,
    pub bookings_last_week: Vec<DailyBookings>,
}

impl ParkDashboard {
    pub fn into_dto(self) -> ParkDashboardDto {
        ParkDashboardDto {
            park_id: self.park_id,
            bookings_by_status: self.bookings_by_status.into_dto(),
            bookings_today: self.bookings_today,
            revenue_today: self.revenue_today,
            drivers_by_status: self.drivers_by_status.into_dto(),
            vehicles_by_status: self.vehicles_by_status.into_dto(),
            bookings_last_week: self
                .bookings_last_week
                .into_iter()
                .map(DailyBookings::into_dto)
                .collect(),
        }
    }
}
