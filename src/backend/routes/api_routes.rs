/**
 * API Route Wiring
 *
 * This module attaches the API endpoints to the router:
 * - Authentication endpoints (register, login, logout, current user)
 * - Event endpoints (CRUD plus attend/unattend)
 * - The websocket upgrade endpoint
 *
 * # Authentication
 *
 * Protected handlers take the `AuthUser` extractor, which rejects with
 * 401 before the handler body runs. Public routes (listing and fetching
 * events, register, login) take no extractor.
 */

use axum::Router;

use crate::backend::auth::{get_me, login, logout, register};
use crate::backend::events::{
    attend_event, create_event, delete_event, get_event, list_events, unattend_event,
    update_event,
};
use crate::backend::realtime::socket::websocket_handler;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// ## Authentication Routes
/// - `POST /api/auth/register` - User registration (public)
/// - `POST /api/auth/login` - User login (public)
/// - `POST /api/auth/logout` - User logout (requires token)
/// - `GET /api/auth/me` - Get current user (requires token)
///
/// ## Event Routes
/// - `GET /api/events` - List events (public)
/// - `POST /api/events` - Create an event (requires token)
/// - `GET /api/events/{id}` - Fetch one event (public)
/// - `PUT /api/events/{id}` - Edit an event (creator only)
/// - `DELETE /api/events/{id}` - Cancel an event (creator only)
/// - `POST /api/events/{id}/attend` - Join the attendee list (requires token)
/// - `POST /api/events/{id}/unattend` - Leave the attendee list (requires token)
///
/// ## Realtime
/// - `GET /api/ws` - Websocket upgrade, token in the `token` query parameter
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route("/api/auth/register", axum::routing::post(register))
        .route("/api/auth/login", axum::routing::post(login))
        .route("/api/auth/logout", axum::routing::post(logout))
        .route("/api/auth/me", axum::routing::get(get_me))
        // Event endpoints
        .route(
            "/api/events",
            axum::routing::get(list_events).post(create_event),
        )
        .route(
            "/api/events/{id}",
            axum::routing::get(get_event)
                .put(update_event)
                .delete(delete_event),
        )
        .route("/api/events/{id}/attend", axum::routing::post(attend_event))
        .route(
            "/api/events/{id}/unattend",
            axum::routing::post(unattend_event),
        )
        // Websocket endpoint
        .route("/api/ws", axum::routing::get(websocket_handler))
}
