//! Events Module
//!
//! Event documents and everything that operates on them: database queries
//! (with creator/attendee population), request validation, and the REST
//! handlers for the `/api/events` surface.
//!
//! # Module Structure
//!
//! ```text
//! events/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request DTOs and validation
//! ├── db.rs       - Event queries and attendee population
//! └── handlers.rs - HTTP handlers (list/get/create/update/delete,
//!                   attend/unattend) and their broadcasts
//! ```
//!
//! # Consistency
//!
//! All writes are last-write-wins at the database; broadcasts are sent
//! after the write commits and carry the post-write state.

/// Request DTOs and validation
pub mod types;

/// Event queries and attendee population
pub mod db;

/// HTTP handlers for the events surface
pub mod handlers;

pub use handlers::{
    attend_event, create_event, delete_event, get_event, list_events, unattend_event,
    update_event,
};
