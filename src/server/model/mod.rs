//! Domain models and operation parameter types.
//!
//! These sit between the DTO layer and the repositories: repositories return
//! domain models converted from entities, and services accept parameter
//! structs converted from request DTOs.

pub mod analytics;
pub mod booking;
pub mod customer;
pub mod driver;
pub mod notification;
pub mod park;
pub mod setting;
pub mod user;
pub mod vehicle;
