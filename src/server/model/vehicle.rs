use entity::vehicle::VehicleStatus;

use crate::model::vehicle::{
    CreateVehicleDto, PaginatedVehiclesDto, UpdateVehicleDto, VehicleDto, VehicleStatusDto,
};

impl From<VehicleStatus> for VehicleStatusDto {
    fn from(status: VehicleStatus) -> Self {
        match status {
            VehicleStatus::Active => Self::Active,
            VehicleStatus::Maintenance => Self::Maintenance,
            VehicleStatus::Retired => Self::Retired,
        }
    }
}

impl From<VehicleStatusDto> for VehicleStatus {
    fn from(status: VehicleStatusDto) -> Self {
        match status {
            VehicleStatusDto::Active => Self::Active,
            VehicleStatusDto::Maintenance => Self::Maintenance,
            VehicleStatusDto::Retired => Self::Retired,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub park_id: i32,
    pub driver_id: Option<i32>,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub capacity: i32,
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Self {
        Self {
            id: entity.id,
            park_id: entity.park_id,
            driver_id: entity.driver_id,
            plate_number: entity.plate_number,
            make: entity.make,
            model: entity.model,
            year: entity.year,
            color: entity.color,
            capacity: entity.capacity,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            park_id: self.park_id,
            driver_id: self.driver_id,
            plate_number: self.plate_number,
            make: self.make,
            model: self.model,
            year: self.year,
            color: self.color,
            capacity: self.capacity,
            status: self.status.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVehicleParams {
    pub park_id: i32,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub capacity: i32,
}

impl CreateVehicleParams {
    pub fn from_dto(dto: CreateVehicleDto) -> Self {
        Self {
            park_id: dto.park_id,
            plate_number: dto.plate_number,
            make: dto.make,
            model: dto.model,
            year: dto.year,
            color: dto.color,
            capacity: dto.capacity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateVehicleParams {
    pub id: i32,
    pub plate_number: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<Option<String>>,
    pub capacity: Option<i32>,
    pub status: Option<VehicleStatus>,
}

impl UpdateVehicleParams {
    pub fn from_dto(id: i32, dto: UpdateVehicleDto) -> Self {
        Self {
            id,
            plate_number: dto.plate_number,
            make: dto.make,
            model: dto.model,
            year: dto.year,
            color: dto.color,
            capacity: dto.capacity,
            status: dto.status.map(Into::into),
        }
    }
}

/// Listing filters for vehicles.
#[derive(Debug, Clone, Default)]
pub struct VehicleFilter {
    pub park_id: Option<i32>,
    pub status: Option<VehicleStatus>,
    pub driver_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct PaginatedVehicles {
    pub vehicles: Vec<Vehicle>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedVehicles {
    pub fn into_dto(self) -> PaginatedVehiclesDto {
        PaginatedVehiclesDto {
            vehicles: self.vehicles.into_iter().map(Vehicle::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
