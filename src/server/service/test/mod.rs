mod auth;
mod booking;
mod notification;
