use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vehicle::{
    CreateVehicleParams, UpdateVehicleParams, Vehicle, VehicleFilter,
};
use entity::vehicle::VehicleStatus;

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new vehicle. New vehicles start active and unassigned.
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, DbErr> {
        let now = chrono::Utc::now();

        let vehicle = entity::vehicle::ActiveModel {
            park_id: ActiveValue::Set(params.park_id),
            driver_id: ActiveValue::Set(None),
            plate_number: ActiveValue::Set(params.plate_number),
            make: ActiveValue::Set(params.make),
            model: ActiveValue::Set(params.model),
            year: ActiveValue::Set(params.year),
            color: ActiveValue::Set(params.color),
            capacity: ActiveValue::Set(params.capacity),
            status: ActiveValue::Set(VehicleStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Vehicle::from_entity(vehicle))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Vehicle>, DbErr> {
        let vehicle = entity::prelude::Vehicle::find_by_id(id).one(self.db).await?;
        Ok(vehicle.map(Vehicle::from_entity))
    }

    /// Checks whether a plate number is already registered, optionally
    /// ignoring one vehicle (for updates that keep the existing plate).
    pub async fn plate_exists(
        &self,
        plate_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::PlateNumber.eq(plate_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::vehicle::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets vehicles with pagination, filtered by park, status and assigned
    /// driver when given, ordered by plate number.
    pub async fn get_all_paginated(
        &self,
        filter: VehicleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Vehicle>, u64), DbErr> {
        let mut query = entity::prelude::Vehicle::find();

        if let Some(park_id) = filter.park_id {
            query = query.filter(entity::vehicle::Column::ParkId.eq(park_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::vehicle::Column::Status.eq(status));
        }
        if let Some(driver_id) = filter.driver_id {
            query = query.filter(entity::vehicle::Column::DriverId.eq(driver_id));
        }

        let paginator = query
            .order_by_asc(entity::vehicle::Column::PlateNumber)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let vehicles = entities.into_iter().map(Vehicle::from_entity).collect();

        Ok((vehicles, total))
    }

    /// Applies a partial update. Returns `None` when no vehicle with the
    /// given id exists.
    pub async fn update(&self, params: UpdateVehicleParams) -> Result<Option<Vehicle>, DbErr> {
        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();

        if let Some(plate_number) = params.plate_number {
            active_model.plate_number = ActiveValue::Set(plate_number);
        }
        if let Some(make) = params.make {
            active_model.make = ActiveValue::Set(make);
        }
        if let Some(model) = params.model {
            active_model.model = ActiveValue::Set(model);
        }
        if let Some(year) = params.year {
            active_model.year = ActiveValue::Set(year);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }
        if let Some(capacity) = params.capacity {
            active_model.capacity = ActiveValue::Set(capacity);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        let updated = active_model.update(self.db).await?;
        Ok(Some(Vehicle::from_entity(updated)))
    }

    /// Sets or clears the driver assignment of a vehicle. Returns `None`
    /// when no vehicle with the given id exists.
    pub async fn set_driver(
        &self,
        id: i32,
        driver_id: Option<i32>,
    ) -> Result<Option<Vehicle>, DbErr> {
        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::vehicle::ActiveModel = vehicle.into();
        active_model.driver_id = ActiveValue::Set(driver_id);
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        let updated = active_model.update(self.db).await?;
        Ok(Some(Vehicle::from_entity(updated)))
    }

    /// Finds the vehicle currently assigned to a driver, if any.
    pub async fn find_by_driver(&self, driver_id: i32) -> Result<Option<Vehicle>, DbErr> {
        let vehicle = entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::DriverId.eq(driver_id))
            .one(self.db)
            .await?;
        Ok(vehicle.map(Vehicle::from_entity))
    }

    /// Deletes a vehicle. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Vehicle::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Counts vehicles of a park in the given status. Used for the dashboard
    /// breakdown.
    pub async fn count_by_status(
        &self,
        park_id: i32,
        status: VehicleStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Vehicle::find()
            .filter(entity::vehicle::Column::ParkId.eq(park_id))
            .filter(entity::vehicle::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
