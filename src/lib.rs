//! EventHub - Main Library
//!
//! EventHub is a CRUD application for creating, browsing, and attending
//! events, with near-real-time updates pushed to connected clients over a
//! room-scoped websocket layer.
//!
//! # Overview
//!
//! This library provides:
//! - A REST API for authentication and event management
//! - A websocket fan-out layer that broadcasts attendee changes, event
//!   edits, and cancellations to clients viewing an event
//! - A headless client library (HTTP wrapper, socket wrapper, and a
//!   centralized state store) that a UI layer can drive
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between client and server
//!   - Wire events (`ServerEvent`, `ClientCommand`)
//!   - Event and user DTOs, auth request/response shapes
//!
//! - **`backend`** - Server-side code (only compiled with the `server` feature)
//!   - Axum HTTP server with REST handlers for auth and events
//!   - Room registry and websocket broadcast fan-out
//!   - PostgreSQL persistence via sqlx
//!
//! - **`client`** - Client library
//!   - HTTP client wrapper (bearer tokens, base URL, 401 handling)
//!   - Socket client wrapper (shared connection, per-event rooms)
//!   - Predictable-state store with auth and events slices
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the backend module and the
//!   `eventhub-server` binary. Client-only consumers can disable it to
//!   avoid pulling in axum/sqlx.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use eventhub::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```
//!
//! ## Client-Side
//!
//! ```rust,no_run
//! use eventhub::client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(ClientConfig::default());
//! // client.login(...), client.list_events(...), ...
//! ```

/// Types shared between frontend and backend
pub mod shared;

/// Server-side code (REST API, websocket fan-out, persistence)
#[cfg(feature = "server")]
pub mod backend;

/// Client library (HTTP wrapper, socket wrapper, state store)
pub mod client;
