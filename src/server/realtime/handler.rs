use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    realtime::{
        hub::{ConnectionId, RealtimeHub, Room},
        message::{ClientMessage, ServerEvent},
    },
    state::AppState,
};

/// Upgrades an authenticated request to a WebSocket connection.
///
/// The session cookie must belong to a logged-in, active user; anonymous
/// upgrade attempts are rejected before the handshake completes.
#[utoipa::path(
    get,
    path = "/api/realtime/ws",
    tag = "realtime",
    responses(
        (status = 101, description = "Switching to WebSocket protocol"),
        (status = 401, description = "User not authenticated")
    ),
)]
pub async fn ws_upgrade(
    State(state): State<AppState>,
    session: Session,
    ws: WebSocketUpgrade,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state.hub, user.id)))
}

/// Drives a single WebSocket connection until it closes.
///
/// Outbound events from the hub are forwarded as JSON text frames by a
/// dedicated task; the main loop parses inbound frames into `ClientMessage`
/// and applies them to the hub. On exit the connection is unregistered,
/// which prunes its room memberships.
async fn handle_socket(socket: WebSocket, hub: RealtimeHub, user_id: i32) {
    let (id, mut rx) = hub.register(user_id).await;
    tracing::debug!("User {} opened realtime connection {}", user_id, id);

    let (mut sink, mut stream) = socket.split();

    let send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            let payload = match serde_json::to_string(&event) {
                Ok(payload) => payload,
                Err(e) => {
                    tracing::error!("Failed to serialize realtime event: {}", e);
                    continue;
                }
            };
            if sink.send(Message::Text(payload.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(frame)) = stream.next().await {
        let Message::Text(text) = frame else {
            continue;
        };

        match serde_json::from_str::<ClientMessage>(&text) {
            Ok(msg) => handle_client_message(&hub, id, msg).await,
            Err(e) => {
                tracing::debug!("Connection {} sent malformed message: {}", id, e);
            }
        }
    }

    send_task.abort();
    hub.unregister(id).await;
    tracing::debug!("User {} closed realtime connection {}", user_id, id);
}

async fn handle_client_message(hub: &RealtimeHub, id: ConnectionId, msg: ClientMessage) {
    match msg {
        ClientMessage::JoinPark { park_id } => hub.join(id, Room::Park(park_id)).await,
        ClientMessage::LeavePark { park_id } => hub.leave(id, Room::Park(park_id)).await,
        ClientMessage::JoinBooking { booking_id } => hub.join(id, Room::Booking(booking_id)).await,
        ClientMessage::LeaveBooking { booking_id } => {
            hub.leave(id, Room::Booking(booking_id)).await
        }
        ClientMessage::DriverLocationUpdate {
            park_id,
            driver_id,
            lat,
            lon,
        } => {
            hub.broadcast_room(
                Room::Park(park_id),
                ServerEvent::DriverLocation {
                    park_id,
                    driver_id,
                    lat,
                    lon,
                },
            )
            .await;
        }
    }
}
