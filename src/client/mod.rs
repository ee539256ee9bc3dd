//! Client Module
//!
//! A headless client for the EventHub server: typed HTTP calls, the
//! websocket connection, and an application store that mirrors the
//! server's state on the client side.
//!
//! # Architecture
//!
//! The client module is organized into focused submodules:
//!
//! - **`config`** - Server URL and token configuration
//! - **`http`** - HTTP plumbing (bearer attachment, error mapping)
//! - **`api`** - Typed calls for every REST endpoint
//! - **`socket`** - Websocket connection and room commands
//! - **`store`** - Application state, actions, and realtime reducers
//!
//! # Module Structure
//!
//! ```text
//! client/
//! ├── mod.rs    - Module exports and documentation
//! ├── config.rs - Server URL and token configuration
//! ├── http.rs   - HTTP client plumbing and error type
//! ├── api.rs    - Typed REST calls
//! ├── socket.rs - Websocket connection
//! └── store.rs  - Application state and reducers
//! ```
//!
//! # Session Handling
//!
//! Every authenticated call attaches the stored token as a bearer
//! header. A 401 from any call surfaces as [`http::ClientError::Unauthorized`];
//! the store reacts by clearing the session and navigating to the login
//! route, so an expired token never leaves the app in a half-logged-in
//! state.

/// Server URL and token configuration
pub mod config;

/// HTTP client plumbing and error type
pub mod http;

/// Typed REST calls
pub mod api;

/// Websocket connection
pub mod socket;

/// Application state and reducers
pub mod store;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::ClientConfig;
pub use http::ClientError;
pub use socket::SocketHandle;
pub use store::{Route, Store};
