use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory
/// SQLite databases. Use the builder pattern to add entity tables, then call
/// `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Park, Driver};
///
/// let test = TestBuilder::new()
///     .with_table(Park)
///     .with_table(Driver)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in the
    /// order they were added.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using
    /// SQLite backend syntax. Tables should be added in dependency order (tables
    /// with foreign keys after their referenced tables).
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for booking operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Park
    /// - User
    /// - Driver
    /// - Vehicle
    /// - Customer
    /// - Booking
    ///
    /// Use this when testing the booking lifecycle or anything that needs the
    /// full dispatch schema. For notification fan-out tests use
    /// `with_notification_tables()`.
    pub fn with_booking_tables(self) -> Self {
        self.with_table(Park)
            .with_table(User)
            .with_table(Driver)
            .with_table(Vehicle)
            .with_table(Customer)
            .with_table(Booking)
    }

    /// Adds all tables required for notification operations.
    ///
    /// Equivalent to `with_booking_tables()` followed by
    /// `with_table(Notification)`.
    pub fn with_notification_tables(self) -> Self {
        self.with_booking_tables().with_table(Notification)
    }

    /// Adds the tables required for authentication and password recovery:
    /// Park, User and PasswordResetOtp.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(Park)
            .with_table(User)
            .with_table(PasswordResetOtp)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE
    /// TABLE statements that were added via `with_table()`.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
