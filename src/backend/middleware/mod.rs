//! Middleware Module
//!
//! Request-processing guards for the backend:
//!
//! - **`auth`** - Bearer-token authentication: the [`auth::AuthUser`]
//!   extractor verifies the JWT from the `Authorization` header and hands
//!   the authenticated identity to the handler.

/// Bearer-token authentication guard
pub mod auth;

pub use auth::{authenticate_token, AuthUser, AuthenticatedUser};
