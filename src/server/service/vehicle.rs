//! Vehicle business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{driver::DriverRepository, park::ParkRepository, vehicle::VehicleRepository},
    error::AppError,
    model::vehicle::{
        CreateVehicleParams, PaginatedVehicles, UpdateVehicleParams, Vehicle, VehicleFilter,
    },
};

pub struct VehicleService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a vehicle with a park. Plate numbers are unique across the
    /// whole fleet.
    pub async fn create_vehicle(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);
        let park_repo = ParkRepository::new(self.db);

        if !park_repo.exists(params.park_id).await? {
            return Err(AppError::NotFound(format!(
                "park {} does not exist",
                params.park_id
            )));
        }

        if vehicle_repo.plate_exists(&params.plate_number, None).await? {
            return Err(AppError::Conflict(format!(
                "plate number {} is already registered",
                params.plate_number
            )));
        }

        let vehicle = vehicle_repo.create(params).await?;
        Ok(vehicle)
    }

    pub async fn get_vehicle(&self, id: i32) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        vehicle_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    pub async fn get_all_vehicles(
        &self,
        filter: VehicleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedVehicles, AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let (vehicles, total) = vehicle_repo
            .get_all_paginated(filter, page.saturating_sub(1), per_page)
            .await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedVehicles {
            vehicles,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn update_vehicle(&self, params: UpdateVehicleParams) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        if let Some(plate_number) = params.plate_number.as_deref() {
            if vehicle_repo
                .plate_exists(plate_number, Some(params.id))
                .await?
            {
                return Err(AppError::Conflict(format!(
                    "plate number {} is already registered",
                    plate_number
                )));
            }
        }

        let id = params.id;
        vehicle_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", id)))
    }

    /// Assigns a driver to a vehicle, or clears the assignment.
    ///
    /// The driver must belong to the same park as the vehicle and cannot be
    /// behind the wheel of a second vehicle.
    pub async fn assign_driver(
        &self,
        vehicle_id: i32,
        driver_id: Option<i32>,
    ) -> Result<Vehicle, AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);
        let driver_repo = DriverRepository::new(self.db);

        let vehicle = vehicle_repo
            .get_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

        if let Some(driver_id) = driver_id {
            let driver = driver_repo.get_by_id(driver_id).await?.ok_or_else(|| {
                AppError::NotFound(format!("driver {} does not exist", driver_id))
            })?;

            if driver.park_id != vehicle.park_id {
                return Err(AppError::BadRequest(format!(
                    "driver {} belongs to a different park than vehicle {}",
                    driver_id, vehicle_id
                )));
            }

            if let Some(other) = vehicle_repo.find_by_driver(driver_id).await? {
                if other.id != vehicle_id {
                    return Err(AppError::Conflict(format!(
                        "driver {} is already assigned to vehicle {}",
                        driver_id, other.id
                    )));
                }
            }
        }

        let updated = vehicle_repo
            .set_driver(vehicle_id, driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Vehicle {} not found", vehicle_id)))?;

        Ok(updated)
    }

    pub async fn delete_vehicle(&self, id: i32) -> Result<(), AppError> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let deleted = vehicle_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Vehicle {} not found", id)));
        }

        Ok(())
    }
}
