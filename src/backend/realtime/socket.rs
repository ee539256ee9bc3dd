/**
 * Websocket Connection Handler
 *
 * This module implements the websocket endpoint at `/api/ws`. The
 * handshake authenticates the connection with a `token` query parameter
 * (the browser websocket API cannot set an Authorization header), then
 * upgrades and runs two tasks per connection:
 *
 * - a receive task that reads `joinEvent` / `leaveEvent` commands and
 *   maintains the connection's room set
 * - a send task that forwards broadcast events, filtered by scope: `All`
 *   events always go out, `Room` events only if the connection joined
 *   that room
 *
 * # Connection Management
 *
 * - Unknown or malformed frames are logged and ignored
 * - A lagged broadcast receiver skips missed events and keeps going
 * - Disconnecting leaves every joined room, pushing updated viewer counts
 */

use axum::{
    extract::{
        ws::{Message, WebSocket},
        Query, State, WebSocketUpgrade,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast::error::RecvError;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::auth::{authenticate_token, AuthenticatedUser};
use crate::backend::realtime::broadcast::{broadcast_event, Scope};
use crate::backend::server::state::AppState;
use crate::shared::{ClientCommand, ServerEvent};

/// Handshake query parameters
#[derive(Debug, Deserialize)]
pub struct WsQuery {
    token: String,
}

/// GET /api/ws?token=<jwt> - upgrade to a websocket connection
///
/// Authentication happens before the upgrade: a bad token gets the usual
/// JSON 401 response and no websocket.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
    State(state): State<AppState>,
) -> Result<Response, BackendError> {
    let user = authenticate_token(&query.token, state.db_pool.as_ref()).await?;
    tracing::info!("[WS] Connection authenticated for user {}", user.user_id);

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, user)))
}

/// Run one websocket connection until either side closes it.
async fn handle_socket(socket: WebSocket, state: AppState, user: AuthenticatedUser) {
    let (mut sender, mut receiver) = socket.split();

    // Rooms this connection has joined, shared between the two tasks
    let joined: Arc<Mutex<HashSet<Uuid>>> = Arc::new(Mutex::new(HashSet::new()));

    let mut events_rx = state.realtime.subscribe();

    // Forward broadcast events the connection is scoped into
    let send_joined = joined.clone();
    let mut send_task = tokio::spawn(async move {
        loop {
            match events_rx.recv().await {
                Ok((scope, event)) => {
                    let wanted = match scope {
                        Scope::All => true,
                        Scope::Room(event_id) => send_joined.lock().unwrap().contains(&event_id),
                    };
                    if !wanted {
                        continue;
                    }

                    let json = match serde_json::to_string(&event) {
                        Ok(json) => json,
                        Err(e) => {
                            tracing::error!("[WS] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!("[WS] Connection lagged, skipped {} events", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Read room commands from the client
    let recv_state = state.clone();
    let recv_joined = joined.clone();
    let user_id = user.user_id;
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = receiver.next().await {
            let text = match message {
                Message::Text(text) => text,
                Message::Close(_) => break,
                // Pings are answered by axum; ignore everything else
                _ => continue,
            };

            let command: ClientCommand = match serde_json::from_str(&text) {
                Ok(command) => command,
                Err(e) => {
                    tracing::warn!("[WS] Ignoring malformed frame from {}: {:?}", user_id, e);
                    continue;
                }
            };

            match command {
                ClientCommand::JoinEvent { event_id } => {
                    let newly_joined = recv_joined.lock().unwrap().insert(event_id);
                    if !newly_joined {
                        continue;
                    }
                    let count = recv_state.rooms.join(event_id);
                    tracing::debug!("[WS] {} joined room {} ({} viewers)", user_id, event_id, count);
                    broadcast_event(
                        &recv_state.realtime,
                        Scope::Room(event_id),
                        ServerEvent::ViewerCount { event_id, count },
                    )
                    .await;
                }
                ClientCommand::LeaveEvent { event_id } => {
                    if !recv_joined.lock().unwrap().remove(&event_id) {
                        continue;
                    }
                    let count = recv_state.rooms.leave(event_id);
                    tracing::debug!("[WS] {} left room {} ({} viewers)", user_id, event_id, count);
                    broadcast_event(
                        &recv_state.realtime,
                        Scope::Room(event_id),
                        ServerEvent::ViewerCount { event_id, count },
                    )
                    .await;
                }
            }
        }
    });

    // Whichever task finishes first tears down the other
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    // Leave every room the connection was still in
    let remaining: Vec<Uuid> = joined.lock().unwrap().drain().collect();
    for event_id in remaining {
        let count = state.rooms.leave(event_id);
        broadcast_event(
            &state.realtime,
            Scope::Room(event_id),
            ServerEvent::ViewerCount { event_id, count },
        )
        .await;
    }

    tracing::info!("[WS] Connection closed for user {}", user.user_id);
}
