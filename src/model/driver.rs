use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatusDto {
    Available,
    OnTrip,
    OffDuty,
    Suspended,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DriverDto {
    pub id: i32,
    pub park_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub phone: String,
    pub email: Option<String>,
    pub status: DriverStatusDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDriverDto {
    pub park_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub phone: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateDriverDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub license_number: Option<String>,
    pub phone: Option<String>,
    pub email: Option<Option<String>>,
    pub status: Option<DriverStatusDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedDriversDto {
    pub drivers: Vec<DriverDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
