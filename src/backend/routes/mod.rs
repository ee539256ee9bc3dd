//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! The routes module is organized into focused submodules:
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - API endpoints (auth, events, websocket)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint wiring
//! ```
//!
//! # Route Types
//!
//! ## Auth Routes
//!
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/logout` - User logout
//! - `GET /api/auth/me` - Get current user
//!
//! ## Event Routes
//!
//! - `GET /api/events` - List events
//! - `POST /api/events` - Create an event
//! - `GET /api/events/{id}` - Fetch one event
//! - `PUT /api/events/{id}` - Edit an event
//! - `DELETE /api/events/{id}` - Cancel an event
//! - `POST /api/events/{id}/attend` - Join the attendee list
//! - `POST /api/events/{id}/unattend` - Leave the attendee list
//!
//! ## Realtime
//!
//! - `GET /api/ws` - Websocket upgrade (token in query)
//!
//! ## Health
//!
//! - `GET /` - Liveness probe

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
