/**
 * Websocket Connection
 *
 * Connects to `/api/ws` with the session token, then runs a background
 * task that relays frames both ways:
 *
 * - commands queued with [`SocketHandle::join_event`] /
 *   [`SocketHandle::leave_event`] are serialized and written to the socket
 * - server frames are decoded into [`ServerEvent`] and delivered through
 *   [`SocketHandle::next_event`]
 *
 * Malformed server frames are logged and skipped so one bad frame never
 * kills the connection.
 */

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use uuid::Uuid;

use crate::client::config::ClientConfig;
use crate::client::http::ClientError;
use crate::shared::{ClientCommand, ServerEvent};

/// Handle to a live websocket connection
pub struct SocketHandle {
    commands: mpsc::UnboundedSender<ClientCommand>,
    events: mpsc::UnboundedReceiver<ServerEvent>,
    task: tokio::task::JoinHandle<()>,
}

impl SocketHandle {
    /// Connect and authenticate against the configured server.
    ///
    /// Fails if no token is set; the server rejects anonymous handshakes
    /// with a 401 anyway.
    pub async fn connect(config: &ClientConfig) -> Result<Self, ClientError> {
        if config.get_token().is_none() {
            return Err(ClientError::Unauthorized);
        }

        let (socket, _) = connect_async(config.ws_url()).await?;
        tracing::info!("[WS] Connected to {}", config.server_url());

        let (mut sink, mut stream) = socket.split();
        let (commands_tx, mut commands_rx) = mpsc::unbounded_channel::<ClientCommand>();
        let (events_tx, events_rx) = mpsc::unbounded_channel::<ServerEvent>();

        let task = tokio::spawn(async move {
            loop {
                tokio::select! {
                    command = commands_rx.recv() => {
                        let Some(command) = command else { break };
                        let json = match serde_json::to_string(&command) {
                            Ok(json) => json,
                            Err(e) => {
                                tracing::error!("[WS] Failed to serialize command: {:?}", e);
                                continue;
                            }
                        };
                        if sink.send(Message::Text(json.into())).await.is_err() {
                            break;
                        }
                    }
                    frame = stream.next() => {
                        let Some(Ok(frame)) = frame else { break };
                        let text = match frame {
                            Message::Text(text) => text,
                            Message::Close(_) => break,
                            _ => continue,
                        };
                        match serde_json::from_str::<ServerEvent>(&text) {
                            Ok(event) => {
                                if events_tx.send(event).is_err() {
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::warn!("[WS] Ignoring malformed frame: {:?}", e);
                            }
                        }
                    }
                }
            }
            tracing::info!("[WS] Connection task finished");
        });

        Ok(Self {
            commands: commands_tx,
            events: events_rx,
            task,
        })
    }

    /// Join an event's room to receive its scoped updates.
    pub fn join_event(&self, event_id: Uuid) {
        let _ = self.commands.send(ClientCommand::JoinEvent { event_id });
    }

    /// Leave an event's room.
    pub fn leave_event(&self, event_id: Uuid) {
        let _ = self.commands.send(ClientCommand::LeaveEvent { event_id });
    }

    /// Wait for the next server event; `None` when the connection closed.
    pub async fn next_event(&mut self) -> Option<ServerEvent> {
        self.events.recv().await
    }
}

impl Drop for SocketHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
