use entity::user::UserRole;
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Permission required by a protected endpoint.
pub enum Permission {
    /// Global admin access.
    Admin,
    /// Read access to resources of the given park. Admins always pass;
    /// managers and dispatchers must be scoped to the park.
    ParkAccess(i32),
    /// Management access to resources of the given park. Admins always
    /// pass; managers must be scoped to the park; dispatchers are denied.
    ParkManage(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session user and checks the required permissions.
    ///
    /// Deactivated accounts are rejected even with a live session.
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.active {
            return Err(AuthError::AccountDisabled(user_id).into());
        }

        Self::check(&user, permissions)?;

        Ok(user)
    }

    /// Checks permissions against an already-resolved user.
    ///
    /// Handlers that only learn the relevant park after loading a resource
    /// call `require(&[])` first and this afterwards, so an unauthenticated
    /// caller is turned away before any lookup reveals whether the resource
    /// exists.
    pub fn check(
        user: &entity::user::Model,
        permissions: &[Permission],
    ) -> Result<(), AppError> {
        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "admin permission required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::ParkAccess(park_id) => {
                    if user.role != UserRole::Admin && user.park_id != Some(*park_id) {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("user is not scoped to park {}", park_id),
                        )
                        .into());
                    }
                }
                Permission::ParkManage(park_id) => {
                    let allowed = user.role == UserRole::Admin
                        || (user.role == UserRole::Manager && user.park_id == Some(*park_id));
                    if !allowed {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("user cannot manage park {}", park_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole, park_id: Option<i32>) -> entity::user::Model {
        let now = chrono::Utc::now();
        entity::user::Model {
            id: 1,
            park_id,
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hash".to_string(),
            role,
            phone: None,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn admin_passes_every_check() {
        let admin = user(UserRole::Admin, None);
        assert!(AuthGuard::check(&admin, &[Permission::Admin]).is_ok());
        assert!(AuthGuard::check(&admin, &[Permission::ParkAccess(5)]).is_ok());
        assert!(AuthGuard::check(&admin, &[Permission::ParkManage(5)]).is_ok());
    }

    #[test]
    fn park_access_requires_matching_scope() {
        let dispatcher = user(UserRole::Dispatcher, Some(1));
        assert!(AuthGuard::check(&dispatcher, &[Permission::ParkAccess(1)]).is_ok());
        assert!(AuthGuard::check(&dispatcher, &[Permission::ParkAccess(2)]).is_err());
    }

    #[test]
    fn park_manage_denies_dispatchers() {
        let dispatcher = user(UserRole::Dispatcher, Some(1));
        assert!(AuthGuard::check(&dispatcher, &[Permission::ParkManage(1)]).is_err());

        let manager = user(UserRole::Manager, Some(1));
        assert!(AuthGuard::check(&manager, &[Permission::ParkManage(1)]).is_ok());
        assert!(AuthGuard::check(&manager, &[Permission::ParkManage(2)]).is_err());
    }

    #[test]
    fn empty_permission_list_always_passes() {
        let dispatcher = user(UserRole::Dispatcher, None);
        assert!(AuthGuard::check(&dispatcher, &[]).is_ok());
    }
}
