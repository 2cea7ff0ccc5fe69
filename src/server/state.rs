//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::realtime::hub::RealtimeHub;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `RealtimeHub` uses an `Arc` for its connection registry
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// WebSocket hub tracking connected user sessions and room membership.
    ///
    /// Used by the notification fan-out to push events to connected clients
    /// and by the realtime controller for room joins and location broadcasts.
    pub hub: RealtimeHub,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router for
    /// use in request handlers.
    pub fn new(db: DatabaseConnection, hub: RealtimeHub) -> Self {
        Self { db, hub }
    }
}
