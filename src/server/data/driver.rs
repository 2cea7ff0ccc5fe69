use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::driver::{
    CreateDriverParams, Driver, DriverFilter, UpdateDriverParams,
};
use entity::driver::DriverStatus;

pub struct DriverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new driver. New drivers start in the available status.
    pub async fn create(&self, params: CreateDriverParams) -> Result<Driver, DbErr> {
        let now = chrono::Utc::now();

        let driver = entity::driver::ActiveModel {
            park_id: ActiveValue::Set(params.park_id),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            license_number: ActiveValue::Set(params.license_number),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            status: ActiveValue::Set(DriverStatus::Available),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Driver::from_entity(driver))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Driver>, DbErr> {
        let driver = entity::prelude::Driver::find_by_id(id).one(self.db).await?;
        Ok(driver.map(Driver::from_entity))
    }

    /// Checks whether a license number is already registered, optionally
    /// ignoring one driver (for updates that keep the existing number).
    pub async fn license_exists(
        &self,
        license_number: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Driver::find()
            .filter(entity::driver::Column::LicenseNumber.eq(license_number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::driver::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets drivers with pagination, filtered by park and status when given,
    /// ordered by last name.
    pub async fn get_all_paginated(
        &self,
        filter: DriverFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Driver>, u64), DbErr> {
        let mut query = entity::prelude::Driver::find();

        if let Some(park_id) = filter.park_id {
            query = query.filter(entity::driver::Column::ParkId.eq(park_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::driver::Column::Status.eq(status));
        }

        let paginator = query
            .order_by_asc(entity::driver::Column::LastName)
            .order_by_asc(entity::driver::Column::FirstName)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let drivers = entities.into_iter().map(Driver::from_entity).collect();

        Ok((drivers, total))
    }

    /// Applies a partial update. Returns `None` when no driver with the given
    /// id exists.
    pub async fn update(&self, params: UpdateDriverParams) -> Result<Option<Driver>, DbErr> {
        let Some(driver) = entity::prelude::Driver::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::driver::ActiveModel = driver.into();

        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(license_number) = params.license_number {
            active_model.license_number = ActiveValue::Set(license_number);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status);
        }
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        let updated = active_model.update(self.db).await?;
        Ok(Some(Driver::from_entity(updated)))
    }

    /// Sets only the duty status of a driver.
    pub async fn set_status(&self, id: i32, status: DriverStatus) -> Result<(), DbErr> {
        entity::prelude::Driver::update_many()
            .filter(entity::driver::Column::Id.eq(id))
            .col_expr(
                entity::driver::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .col_expr(
                entity::driver::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes a driver. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Driver::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Counts drivers of a park in the given status. Used for the dashboard
    /// breakdown.
    pub async fn count_by_status(
        &self,
        park_id: i32,
        status: DriverStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Driver::find()
            .filter(entity::driver::Column::ParkId.eq(park_id))
            .filter(entity::driver::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
