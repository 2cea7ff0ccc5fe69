use serde::{Deserialize, Serialize};

use crate::model::{booking::BookingDto, notification::NotificationDto};

/// Message sent by a connected client over the WebSocket.
///
/// Tagged with a kebab-case `type` field, e.g.
/// `{"type":"join-park","park_id":3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    JoinPark {
        park_id: i32,
    },
    LeavePark {
        park_id: i32,
    },
    JoinBooking {
        booking_id: i32,
    },
    LeaveBooking {
        booking_id: i32,
    },
    /// Position report from a driver app, relayed to the park room.
    DriverLocationUpdate {
        park_id: i32,
        driver_id: i32,
        lat: f64,
        lon: f64,
    },
}

/// Event pushed by the server to connected clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Targeted per-user push of a persisted notification.
    Notification { notification: NotificationDto },
    /// Broadcast to the booking's park room after a lifecycle change.
    BookingUpdated { booking: BookingDto },
    /// Broadcast of a driver position to the park room.
    DriverLocation {
        park_id: i32,
        driver_id: i32,
        lat: f64,
        lon: f64,
    },
}
