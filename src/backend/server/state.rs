/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The broadcast channel for real-time events
 * - The room membership registry backing viewer counts
 * - Optional services (database)
 *
 * # Thread Safety
 *
 * All state is designed to be thread-safe:
 * - `broadcast::Sender` is thread-safe and can be cloned
 * - `RoomRegistry` is internally an `Arc<Mutex<..>>`
 * - `Option<T>` for optional services that may not be configured
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::realtime::broadcast::EventBroadcast;
use crate::backend::realtime::rooms::RoomRegistry;

/// Application state shared across all handlers
///
/// # Fields
///
/// * `db_pool` - Optional PostgreSQL database connection pool
/// * `realtime` - Broadcast channel for real-time events
/// * `rooms` - Per-event room membership counts
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured (e.g., if
    /// `DATABASE_URL` environment variable is not set). Handlers should
    /// check for `None` before using the database.
    pub db_pool: Option<PgPool>,

    /// Real-time event broadcast channel
    ///
    /// Every websocket connection subscribes to this channel; REST
    /// handlers push events onto it after their writes commit.
    pub realtime: EventBroadcast,

    /// Room membership registry
    ///
    /// Tracks how many websocket connections are in each event's room,
    /// backing the `viewerCount` broadcast.
    pub rooms: RoomRegistry,
}

/// Implement FromRef for Option<PgPool>
///
/// This allows Axum handlers that only need the database to extract the
/// optional pool directly from `AppState`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for EventBroadcast
///
/// This allows Axum handlers to extract the real-time event broadcast
/// sender directly from `AppState`.
impl FromRef<AppState> for EventBroadcast {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.realtime.clone()
    }
}

/// Implement FromRef for RoomRegistry
impl FromRef<AppState> for RoomRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.rooms.clone()
    }
}
