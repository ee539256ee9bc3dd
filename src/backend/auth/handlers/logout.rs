/**
 * Logout Handler
 *
 * This module implements the handler for POST /api/auth/logout.
 *
 * Sessions are stateless JWTs with a built-in expiry, so there is nothing
 * to invalidate server-side; the endpoint acknowledges the request and the
 * client discards its copy of the token.
 */

use axum::response::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::models::MessageResponse;

/// Logout handler
///
/// Requires a valid bearer token (so a stolen-token logout attempt still
/// has to present one). Always succeeds with an acknowledgement.
///
/// # Example Response
///
/// ```json
/// {"message": "Logged out"}
/// ```
pub async fn logout(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::info!("User logged out: {}", user.email);

    Json(MessageResponse {
        message: "Logged out".to_string(),
    })
}
