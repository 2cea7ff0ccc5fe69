//! User factory for creating test staff accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// The password hash defaults to a placeholder string; tests that exercise
/// login should set a real argon2 hash via `password_hash()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
/// use entity::user::UserRole;
///
/// let admin = UserFactory::new(&db, None)
///     .role(UserRole::Admin)
///     .email("admin@example.com")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    park_id: Option<i32>,
    name: String,
    email: String,
    password_hash: String,
    role: UserRole,
    phone: Option<String>,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - password_hash: placeholder that verifies against nothing
    /// - role: `Dispatcher`
    /// - phone: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection, park_id: Option<i32>) -> Self {
        let id = next_id();
        Self {
            db,
            park_id,
            name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            password_hash: "unverifiable-test-hash".to_string(),
            role: UserRole::Dispatcher,
            phone: None,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            park_id: ActiveValue::Set(self.park_id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            phone: ActiveValue::Set(self.phone),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dispatcher in the given park with default values.
///
/// Shorthand for `UserFactory::new(db, park_id).build().await`.
pub async fn create_user(
    db: &DatabaseConnection,
    park_id: Option<i32>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, park_id).build().await
}

/// Creates an admin user with no park scope.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db, None).role(UserRole::Admin).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Park)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db, None).await?;

        assert!(!user.email.is_empty());
        assert_eq!(user.role, UserRole::Dispatcher);
        assert!(user.active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Park)
            .with_table(User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db, None).await?;
        let user2 = create_user(db, None).await?;

        assert_ne!(user1.email, user2.email);

        Ok(())
    }
}
