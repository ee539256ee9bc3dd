//! Shared Types Module
//!
//! This module contains types used by both the client and the server:
//!
//! - **`models`** - Data transfer objects (events, user summaries, auth
//!   request/response shapes)
//! - **`event`** - Wire events for the realtime socket layer
//!   (`ServerEvent`, `ClientCommand`)
//!
//! Everything here is plain serde data: no axum, sqlx, or reqwest types
//! leak into this module, so it compiles for client-only builds.

/// Data transfer objects shared between client and server
pub mod models;

/// Realtime wire events
pub mod event;

// Re-export commonly used types
pub use event::{ClientCommand, ServerEvent, UpdateKind};
pub use models::{
    AuthResponse, EventCategory, EventDto, LoginRequest, MessageResponse, RegisterRequest,
    UserSummary,
};
