//! Park business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::park::ParkRepository,
    error::AppError,
    model::park::{CreateParkParams, Park, UpdateParkParams},
};

pub struct ParkService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ParkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_park(&self, params: CreateParkParams) -> Result<Park, AppError> {
        let park_repo = ParkRepository::new(self.db);
        let park = park_repo.create(params).await?;
        Ok(park)
    }

    pub async fn get_park(&self, id: i32) -> Result<Park, AppError> {
        let park_repo = ParkRepository::new(self.db);

        park_repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Park {} not found", id)))
    }

    pub async fn get_all_parks(&self) -> Result<Vec<Park>, AppError> {
        let park_repo = ParkRepository::new(self.db);
        let parks = park_repo.get_all().await?;
        Ok(parks)
    }

    pub async fn update_park(&self, params: UpdateParkParams) -> Result<Park, AppError> {
        let park_repo = ParkRepository::new(self.db);

        let id = params.id;
        park_repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Park {} not found", id)))
    }

    /// Deletes a park. Drivers, vehicles and settings of the park are removed
    /// by the cascading foreign keys.
    pub async fn delete_park(&self, id: i32) -> Result<(), AppError> {
        let park_repo = ParkRepository::new(self.db);

        let deleted = park_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Park {} not found", id)));
        }

        Ok(())
    }
}
