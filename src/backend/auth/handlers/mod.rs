//! Authentication Handlers Module
//!
//! HTTP handlers for the auth endpoints:
//!
//! - `POST /api/auth/register` - User registration ([`register`])
//! - `POST /api/auth/login` - User login ([`login`])
//! - `POST /api/auth/logout` - Logout acknowledgement ([`logout`])
//! - `GET /api/auth/me` - Get current user ([`get_me`])
//!
//! Request/response shapes live in [`crate::shared::models`] so the client
//! library reuses the exact same types.

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Logout acknowledgement handler
pub mod logout;

/// Get current user handler
pub mod me;

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use register::register;
