//! In-memory registry of connected WebSocket clients.
//!
//! The hub tracks every open socket by connection id, groups connections by
//! user for targeted pushes, and by room (park or booking) for broadcasts.
//! Events are handed to each connection's unbounded channel; the socket task
//! drains the channel and writes frames, so hub calls never block on slow
//! clients.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

use crate::server::realtime::message::ServerEvent;

pub type ConnectionId = u64;

/// Broadcast scope a connection can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Room {
    Park(i32),
    Booking(i32),
}

struct Connection {
    user_id: i32,
    tx: mpsc::UnboundedSender<ServerEvent>,
    rooms: HashSet<Room>,
}

#[derive(Default)]
struct HubInner {
    next_id: ConnectionId,
    connections: HashMap<ConnectionId, Connection>,
    by_user: HashMap<i32, HashSet<ConnectionId>>,
    rooms: HashMap<Room, HashSet<ConnectionId>>,
}

/// Shared handle to the hub. Cloning is cheap; all clones observe the same
/// registry.
#[derive(Clone, Default)]
pub struct RealtimeHub {
    inner: Arc<RwLock<HubInner>>,
}

impl RealtimeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new connection for a user.
    ///
    /// Returns the connection id and the receiving end of the event channel.
    /// The caller owns the receiver and must call `unregister` when the
    /// socket closes.
    pub async fn register(
        &self,
        user_id: i32,
    ) -> (ConnectionId, mpsc::UnboundedReceiver<ServerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        inner.connections.insert(
            id,
            Connection {
                user_id,
                tx,
                rooms: HashSet::new(),
            },
        );
        inner.by_user.entry(user_id).or_default().insert(id);

        (id, rx)
    }

    /// Removes a connection and prunes it from all rooms.
    pub async fn unregister(&self, id: ConnectionId) {
        let mut inner = self.inner.write().await;

        let Some(conn) = inner.connections.remove(&id) else {
            return;
        };

        if let Some(ids) = inner.by_user.get_mut(&conn.user_id) {
            ids.remove(&id);
            if ids.is_empty() {
                inner.by_user.remove(&conn.user_id);
            }
        }

        for room in conn.rooms {
            if let Some(members) = inner.rooms.get_mut(&room) {
                members.remove(&id);
                if members.is_empty() {
                    inner.rooms.remove(&room);
                }
            }
        }
    }

    /// Adds a connection to a room. Joining a room twice is a no-op.
    pub async fn join(&self, id: ConnectionId, room: Room) {
        let mut inner = self.inner.write().await;

        if let Some(conn) = inner.connections.get_mut(&id) {
            conn.rooms.insert(room);
            inner.rooms.entry(room).or_default().insert(id);
        }
    }

    /// Removes a connection from a room.
    pub async fn leave(&self, id: ConnectionId, room: Room) {
        let mut inner = self.inner.write().await;

        if let Some(conn) = inner.connections.get_mut(&id) {
            conn.rooms.remove(&room);
        }
        if let Some(members) = inner.rooms.get_mut(&room) {
            members.remove(&id);
            if members.is_empty() {
                inner.rooms.remove(&room);
            }
        }
    }

    /// Sends an event to every open connection of a user.
    ///
    /// Returns the number of connections the event was handed to. Users
    /// without a live connection simply receive nothing; the persisted
    /// notification row remains their source of truth.
    pub async fn send_to_user(&self, user_id: i32, event: ServerEvent) -> usize {
        let inner = self.inner.read().await;

        let Some(ids) = inner.by_user.get(&user_id) else {
            return 0;
        };

        let mut delivered = 0;
        for id in ids {
            if let Some(conn) = inner.connections.get(id) {
                if conn.tx.send(event.clone()).is_ok() {
                    delivered += 1;
                }
            }
        }
        delivered
    }

    /// Broadcasts an event to every member of a room.
    ///
    /// Returns the number of connections the event was handed to.
    pub async fn broadcast_room(&self, room: Room, event: ServerEvent) -> usize {
        let inner = self.inner.read().await;

        let Some(members) = inner.rooms.get(&room) else {
            return 0;
        };

        let mut delivered = 0;
        for id in members {
            if let Some(conn) = inner.connections.get(id) {
                if conn.tx.send(event.clone()).is_ok() {
                    delivered += 1;
                }
            }
        }
        delivered
    }

    /// Number of open connections, for diagnostics.
    pub async fn connection_count(&self) -> usize {
        self.inner.read().await.connections.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn location_event(driver_id: i32) -> ServerEvent {
        ServerEvent::DriverLocation {
            park_id: 1,
            driver_id,
            lat: 40.4168,
            lon: -3.7038,
        }
    }

    #[tokio::test]
    async fn delivers_to_all_connections_of_a_user() {
        let hub = RealtimeHub::new();

        let (_id1, mut rx1) = hub.register(7).await;
        let (_id2, mut rx2) = hub.register(7).await;
        let (_id3, mut rx3) = hub.register(8).await;

        let delivered = hub.send_to_user(7, location_event(1)).await;

        assert_eq!(delivered, 2);
        assert_eq!(rx1.recv().await, Some(location_event(1)));
        assert_eq!(rx2.recv().await, Some(location_event(1)));
        assert!(rx3.try_recv().is_err());
    }

    #[tokio::test]
    async fn send_to_unknown_user_delivers_nothing() {
        let hub = RealtimeHub::new();

        let delivered = hub.send_to_user(42, location_event(1)).await;

        assert_eq!(delivered, 0);
    }

    #[tokio::test]
    async fn room_broadcast_reaches_only_members() {
        let hub = RealtimeHub::new();

        let (id1, mut rx1) = hub.register(1).await;
        let (id2, mut rx2) = hub.register(2).await;
        let (_id3, mut rx3) = hub.register(3).await;

        hub.join(id1, Room::Park(5)).await;
        hub.join(id2, Room::Park(5)).await;

        let delivered = hub.broadcast_room(Room::Park(5), location_event(9)).await;

        assert_eq!(delivered, 2);
        assert_eq!(rx1.recv().await, Some(location_event(9)));
        assert_eq!(rx2.recv().await, Some(location_event(9)));
        assert!(rx3.try_recv().is_err());
    }

    #[tokio::test]
    async fn leaving_a_room_stops_broadcasts() {
        let hub = RealtimeHub::new();

        let (id, mut rx) = hub.register(1).await;
        hub.join(id, Room::Booking(3)).await;
        hub.leave(id, Room::Booking(3)).await;

        let delivered = hub
            .broadcast_room(Room::Booking(3), location_event(1))
            .await;

        assert_eq!(delivered, 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn unregister_prunes_rooms_and_user_index() {
        let hub = RealtimeHub::new();

        let (id, _rx) = hub.register(1).await;
        hub.join(id, Room::Park(2)).await;
        hub.join(id, Room::Booking(4)).await;

        hub.unregister(id).await;

        assert_eq!(hub.connection_count().await, 0);
        assert_eq!(hub.send_to_user(1, location_event(1)).await, 0);
        assert_eq!(
            hub.broadcast_room(Room::Park(2), location_event(1)).await,
            0
        );
    }

    #[tokio::test]
    async fn joining_same_room_twice_delivers_once() {
        let hub = RealtimeHub::new();

        let (id, mut rx) = hub.register(1).await;
        hub.join(id, Room::Park(2)).await;
        hub.join(id, Room::Park(2)).await;

        let delivered = hub.broadcast_room(Room::Park(2), location_event(1)).await;

        assert_eq!(delivered, 1);
        assert_eq!(rx.recv().await, Some(location_event(1)));
        assert!(rx.try_recv().is_err());
    }
}
