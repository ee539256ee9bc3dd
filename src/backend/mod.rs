//! Backend Module
//!
//! This module contains all server-side code for the EventHub application:
//! a complete Axum HTTP server with REST handlers for authentication and
//! events, plus a websocket layer that fans out near-real-time updates to
//! clients viewing an event.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - Auth handlers (register, login, logout, me) with JWT tokens
//! - Event CRUD and attend/unattend handlers
//! - Room-scoped websocket broadcast fan-out
//! - Database persistence (PostgreSQL via sqlx)
//!
//! This module is only compiled when the `server` feature is enabled.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization, state, configuration
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and user management
//! ├── events/         - Event model, queries, and handlers
//! ├── realtime/       - Room registry and websocket fan-out
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) containing the optional
//! database pool, the realtime broadcast channel, and the room registry.
//! State is cloned into handlers via Axum's `State`/`FromRef` extraction;
//! the broadcast channel uses `tokio::sync::broadcast` for efficient
//! multi-subscriber fan-out.
//!
//! # Error Handling
//!
//! Handlers and extractors return `BackendError` (converted to JSON error
//! responses), with proper propagation via the `?` operator.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Event model, queries, and handlers
pub mod events;

/// Realtime room registry and websocket fan-out
pub mod realtime;

/// Backend error types
pub mod error;

/// Middleware for request processing
pub mod middleware;

// Re-export commonly used types
pub use error::BackendError;
pub use server::state::AppState;
