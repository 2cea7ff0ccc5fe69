//! User account business logic.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{park::ParkRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User},
    service::password,
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user account.
    ///
    /// Managers and dispatchers must be attached to an existing park; the
    /// email address must be unused. The password is hashed before storage.
    pub async fn create_user(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let park_repo = ParkRepository::new(self.db);

        if params.role != UserRole::Admin && params.park_id.is_none() {
            return Err(AppError::BadRequest(
                "managers and dispatchers must be assigned to a park".to_string(),
            ));
        }

        if let Some(park_id) = params.park_id {
            if !park_repo.exists(park_id).await? {
                return Err(AppError::NotFound(format!(
                    "park {} does not exist",
                    park_id
                )));
            }
        }

        if user_repo.email_exists(&params.email, None).await? {
            return Err(AppError::Conflict(format!(
                "email {} is already in use",
                params.email
            )));
        }

        let password_hash = password::hash_password(&params.password)?;
        let user = user_repo.create(params, password_hash).await?;

        Ok(User::from_entity(user))
    }

    pub async fn get_user(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        Ok(User::from_entity(user))
    }

    pub async fn get_all_users(
        &self,
        park_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (entities, total) = user_repo
            .get_all_paginated(park_id, page.saturating_sub(1), per_page)
            .await?;
        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users: entities.into_iter().map(User::from_entity).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Applies a partial update to a user account.
    ///
    /// Email changes are checked for uniqueness; a new password is hashed
    /// before storage; a new park assignment must reference an existing park.
    pub async fn update_user(&self, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);
        let park_repo = ParkRepository::new(self.db);

        if let Some(email) = params.email.as_deref() {
            if user_repo.email_exists(email, Some(params.id)).await? {
                return Err(AppError::Conflict(format!(
                    "email {} is already in use",
                    email
                )));
            }
        }

        if let Some(Some(park_id)) = params.park_id {
            if !park_repo.exists(park_id).await? {
                return Err(AppError::NotFound(format!(
                    "park {} does not exist",
                    park_id
                )));
            }
        }

        let password_hash = match params.password.as_deref() {
            Some(raw) => Some(password::hash_password(raw)?),
            None => None,
        };

        let id = params.id;
        let user = user_repo
            .update(params, password_hash)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        Ok(User::from_entity(user))
    }

    /// Deletes a user account. The caller cannot delete their own account;
    /// sessions of the deleted user stop resolving on their next request.
    pub async fn delete_user(&self, id: i32, acting_user_id: i32) -> Result<(), AppError> {
        if id == acting_user_id {
            return Err(AppError::BadRequest(
                "cannot delete your own account".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        let deleted = user_repo.delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }
}
