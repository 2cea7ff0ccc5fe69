//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing dashboard user accounts.
//! Unlike the other repositories it returns entity models rather than domain models:
//! the auth middleware and login flow need the stored password hash, which the
//! domain model deliberately omits.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with the given pre-hashed password.
    pub async fn create(
        &self,
        params: CreateUserParams,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = chrono::Utc::now();

        entity::user::ActiveModel {
            park_id: ActiveValue::Set(params.park_id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(params.role),
            phone: ActiveValue::Set(params.phone),
            active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks whether an email is already taken, optionally ignoring one user
    /// (for updates that keep the existing address).
    pub async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets users with pagination, ordered alphabetically by name. Optionally
    /// restricted to a single park.
    pub async fn get_all_paginated(
        &self,
        park_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::user::Model>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(park_id) = park_id {
            query = query.filter(entity::user::Column::ParkId.eq(park_id));
        }

        let paginator = query
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator.fetch_page(page).await?;

        Ok((users, total))
    }

    /// Applies a partial update. `password_hash` replaces the stored hash when
    /// provided. Returns `None` when no user with the given id exists.
    pub async fn update(
        &self,
        params: UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(params.id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = user.into();

        if let Some(park_id) = params.park_id {
            active_model.park_id = ActiveValue::Set(park_id);
        }
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(hash) = password_hash {
            active_model.password_hash = ActiveValue::Set(hash);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }
        active_model.updated_at = ActiveValue::Set(chrono::Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a user. Returns the number of rows removed.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }

    /// Gets all active users attached to a park. Used for notification
    /// fan-out to a park's staff.
    pub async fn get_active_by_park(
        &self,
        park_id: i32,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ParkId.eq(park_id))
            .filter(entity::user::Column::Active.eq(true))
            .all(self.db)
            .await
    }
}
