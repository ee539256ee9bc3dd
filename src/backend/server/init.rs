/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server, including state creation, database loading, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Create the broadcast channel and room registry
 * 2. Load optional services (database, running migrations)
 * 3. Create and configure the router
 *
 * # Error Handling
 *
 * The function is designed to be resilient:
 * - Missing database: server continues, data routes answer 503
 * - Migration failures: logged but don't prevent startup
 */

use axum::Router;
use tokio::sync::broadcast;

use crate::backend::realtime::broadcast::Scope;
use crate::backend::realtime::rooms::RoomRegistry;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::ServerEvent;

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing EventHub backend server");

    // Step 1: Create the broadcast channel and room registry
    // Capacity of 1000 events is more than enough headroom; a connection
    // that lags behind skips missed events rather than disconnecting
    let (realtime, _) = broadcast::channel::<(Scope, ServerEvent)>(1000);
    let rooms = RoomRegistry::new();

    tracing::info!("Broadcast channel and room registry initialized");

    // Step 2: Load optional services
    let db_pool = load_database().await;

    // Step 3: Create app state
    let app_state = AppState {
        db_pool,
        realtime,
        rooms,
    };

    // Step 4: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
