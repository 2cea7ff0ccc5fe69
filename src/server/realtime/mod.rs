//! Real-time WebSocket gateway.
//!
//! Connected dashboard clients authenticate with their session cookie and
//! receive pushed events: targeted notification delivery per user, and
//! room-scoped broadcasts for parks and bookings (booking updates, driver
//! location pings).

pub mod handler;
pub mod hub;
pub mod message;
