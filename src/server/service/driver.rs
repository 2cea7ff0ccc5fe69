//! Driver business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, driver::DriverRepository, park::ParkRepository},
    error::AppError,
    model::driver::{
        CreateDriverParams, Driver, DriverFilter, PaginatedDrivers, UpdateDriverParams,
    },
};

pub struct DriverService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> DriverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a driver with a park. License numbers are unique across the
    /// whole fleet.
    pub async fn create_driver(&self, params: CreateDriverParams) -> Result<Driver, AppError> {
        let driver_repo = DriverRepository::new(self.db);
        let park_repo = ParkRepository::new(self.db);

        if !park_repo.exists(params.park_id).await? {
            return Err(AppError::NotFound(format!(
                "park {} does not exist",
                params.park_id
            )));
        }

        if driver_repo
            .license_exists(&params.license_number, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "license number {} is already registered",
                params.license_number
            )));
        }

        let driver = driver_repo.create(params).await?;
        Ok(driver)
    }

    pub async fn get_driver(&self, id: i32) -> Result<Driver, AppError> {
        let driver_repo = DriverRepository::new(self.db);

        driver_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    pub async fn get_all_drivers(
        &self,
        filter: DriverFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedDrivers, AppError> {
        let driver_repo = DriverRepository::new(self.db);

        let (drivers, total) = driver_repo
            .get_all_paginated(filter, page.saturating_sub(1), per_page)
            .await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedDrivers {
            drivers,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn update_driver(&self, params: UpdateDriverParams) -> Result<Driver, AppError> {
        let driver_repo = DriverRepository::new(self.db);

        if let Some(license_number) = params.license_number.as_deref() {
            if driver_repo
                .license_exists(license_number, Some(params.id))
                .await?
            {
                return Err(AppError::Conflict(format!(
                    "license number {} is already registered",
                    license_number
                )));
            }
        }

        let id = params.id;
        driver_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", id)))
    }

    /// Removes a driver. Refused while the driver still has assigned or
    /// running bookings.
    pub async fn delete_driver(&self, id: i32) -> Result<(), AppError> {
        let driver_repo = DriverRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        if driver_repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Driver {} not found", id)));
        }

        let open = booking_repo.count_open_for_driver(id, None).await?;
        if open > 0 {
            return Err(AppError::Conflict(format!(
                "driver {} still has {} open booking(s)",
                id, open
            )));
        }

        driver_repo.delete(id).await?;
        Ok(())
    }
}
