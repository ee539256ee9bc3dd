//! In-process test server helpers
//!
//! Builds the real router over test state. Without a database pool the
//! data routes answer 503, which is enough for the routing and auth
//! tests; database-backed tests pass a pool from [`super::database`].

use axum::Router;
use sqlx::PgPool;
use tokio::sync::broadcast;

use eventhub::backend::realtime::RoomRegistry;
use eventhub::backend::routes::create_router;
use eventhub::backend::server::AppState;

/// Application state without a database
pub fn test_state() -> AppState {
    let (realtime, _) = broadcast::channel(100);
    AppState {
        db_pool: None,
        realtime,
        rooms: RoomRegistry::new(),
    }
}

/// Application state over a real database pool
pub fn test_state_with_pool(pool: PgPool) -> AppState {
    let (realtime, _) = broadcast::channel(100);
    AppState {
        db_pool: Some(pool),
        realtime,
        rooms: RoomRegistry::new(),
    }
}

/// The full router over the given state
pub fn test_app(state: AppState) -> Router<()> {
    create_router(state)
}

/// Serve the app on an ephemeral port, returning its base URL.
///
/// The server task runs until the returned handle is aborted or the
/// test process exits.
pub async fn spawn_server(state: AppState) -> (String, tokio::task::JoinHandle<()>) {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    (format!("http://{}", addr), handle)
}
