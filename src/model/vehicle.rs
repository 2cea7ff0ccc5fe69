use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatusDto {
    Active,
    Maintenance,
    Retired,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub park_id: i32,
    pub driver_id: Option<i32>,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub capacity: i32,
    pub status: VehicleStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub park_id: i32,
    pub plate_number: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: Option<String>,
    pub capacity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateVehicleDto {
    pub plate_number: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<Option<String>>,
    pub capacity: Option<i32>,
    pub status: Option<VehicleStatusDto>,
}

/// Body for assigning (or clearing) the driver of a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignVehicleDriverDto {
    pub driver_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedVehiclesDto {
    pub vehicles: Vec<VehicleDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
