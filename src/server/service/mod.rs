//! Business logic layer.
//!
//! Services orchestrate repositories, enforce domain rules (status
//! transitions, park scoping, uniqueness), and translate repository results
//! into application errors. Controllers call services and never touch
//! repositories directly.

pub mod analytics;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod driver;
pub mod notification;
pub mod park;
pub mod password;
pub mod setting;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod test;
