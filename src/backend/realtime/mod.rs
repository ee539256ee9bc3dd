//! Real-time Update Module
//!
//! This module provides the websocket side of the application: room-scoped
//! fan-out of server events to connected clients.
//!
//! # Architecture
//!
//! The realtime module is organized into focused submodules:
//!
//! - **`broadcast`** - Event broadcasting utilities and type definitions
//! - **`rooms`** - Per-event room membership counts
//! - **`socket`** - Websocket upgrade and connection handler
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs       - Module exports and documentation
//! ├── broadcast.rs - Event broadcasting utilities
//! ├── rooms.rs     - Room membership registry
//! └── socket.rs    - Websocket connection handler
//! ```
//!
//! # Fan-out
//!
//! All events travel over a single `tokio::sync::broadcast` channel as
//! `(Scope, ServerEvent)` pairs. Every connection subscribes to the channel
//! and filters locally: `Scope::All` events go to everyone, `Scope::Room`
//! events only to connections that joined that event's room.
//!
//! # Rooms
//!
//! Clients join and leave rooms with `joinEvent` / `leaveEvent` commands.
//! Room membership drives two things: delivery of room-scoped events, and
//! the `viewerCount` broadcast sent whenever membership changes.

/// Event broadcasting utilities
pub mod broadcast;

/// Room membership registry
pub mod rooms;

/// Websocket connection handler
pub mod socket;

// Re-export commonly used types and functions
pub use broadcast::{broadcast_event, EventBroadcast, Scope};
pub use rooms::RoomRegistry;
pub use socket::websocket_handler;
