//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories generate unique values from a shared atomic counter so
//! unique columns never collide across calls.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let park = factory::park::create_park(&db).await?;
//!     let driver = factory::driver::create_driver(&db, park.id).await?;
//!
//!     // Create a booking with all dependencies in one call
//!     let (park, user, customer, booking) =
//!         factory::helpers::create_booking_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let driver = factory::driver::DriverFactory::new(&db, park.id)
//!     .license_number("DL-99999")
//!     .status(entity::driver::DriverStatus::OffDuty)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod customer;
pub mod driver;
pub mod helpers;
pub mod park;
pub mod user;
pub mod vehicle;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use customer::create_customer;
pub use driver::create_driver;
pub use park::create_park;
pub use user::create_user;
pub use vehicle::create_vehicle;
