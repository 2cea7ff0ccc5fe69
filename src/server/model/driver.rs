use entity::driver::DriverStatus;

use crate::model::driver::{
    CreateDriverDto, DriverDto, DriverStatusDto, PaginatedDriversDto, UpdateDriverDto,
};

impl From<DriverStatus> for DriverStatusDto {
    fn from(status: DriverStatus) -> Self {
        match status {
            DriverStatus::Available => Self::Available,
            DriverStatus::OnTrip => Self::OnTrip,
            DriverStatus::OffDuty => Self::OffDuty,
            DriverStatus::Suspended => Self::Suspended,
        }
    }
}

impl From<DriverStatusDto> for DriverStatus {
    fn from(status: DriverStatusDto) -> Self {
        match status {
            DriverStatusDto::Available => Self::Available,
            DriverStatusDto::OnTrip => Self::OnTrip,
            DriverStatusDto::OffDuty => Self::OffDuty,
            DriverStatusDto::Suspended => Self::Suspended,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub park_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: DriverStatus,
}

impl Driver {
    pub fn from_entity(entity: entity::driver::Model) -> Self {
        Self {
            id: entity.id,
            park_id: entity.park_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            license_number: entity.license_number,
            phone: entity.phone,
            email: entity.email,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            park_id: self.park_id,
            first_name: self.first_name,
            last_name: self.last_name,
            license_number: self.license_number,
            phone: self.phone,
            email: self.email,
            status: self.status.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateDriverParams {
    pub park_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub phone: String,
    pub email: Option<String>,
}

impl CreateDriverParams {
    pub fn from_dto(dto: CreateDriverDto) -> Self {
        Self {
            park_id: dto.park_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            license_number: dto.license_number,
            phone: dto.phone,
            email: dto.email,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDriverParams {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<Option<String>>,
    pub status: Option<DriverStatus>,
}

impl UpdateDriverParams {
    pub fn from_dto(id: i32, dto: UpdateDriverDto) -> Self {
        Self {
            id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            license_number: dto.license_number,
            phone: dto.phone,
            email: dto.email,
            status: dto.status.map(Into::into),
        }
    }
}

/// Listing filters for drivers of a park.
#[derive(Debug, Clone, Default)]
pub struct DriverFilter {
    pub park_id: Option<i32>,
    pub status: Option<DriverStatus>,
}

#[derive(Debug, Clone)]
pub struct PaginatedDrivers {
    pub drivers: Vec<Driver>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedDrivers {
    pub fn into_dto(self) -> PaginatedDriversDto {
        PaginatedDriversDto {
            drivers: self.drivers.into_iter().map(Driver::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
