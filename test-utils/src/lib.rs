//! Fleetdesk Test Utils
//!
//! Shared testing utilities for the fleetdesk application. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases
//! and customizable table schemas, plus entity factories that cut boilerplate
//! out of data-layer tests.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Park;
//!
//! #[tokio::test]
//! async fn test_park_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Park)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
