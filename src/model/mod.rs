//! Request/response DTOs shared by the HTTP controllers.

pub mod analytics;
pub mod api;
pub mod auth;
pub mod booking;
pub mod customer;
pub mod driver;
pub mod notification;
pub mod park;
pub mod setting;
pub mod user;
pub mod vehicle;
