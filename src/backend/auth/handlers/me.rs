/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The route sits behind the auth middleware, which verifies the bearer
 * token and attaches the authenticated user to the request.
 *
 * # Response
 *
 * Returns user information without sensitive data (no password hash).
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::shared::models::UserSummary;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - Missing or invalid token (rejected by middleware)
/// * `404 Not Found` - Token is valid but the user no longer exists
/// * `503 Service Unavailable` - Database is not configured
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "createdAt": "2026-01-01T00:00:00Z"
/// }
/// ```
pub async fn get_me(
    State(pool): State<Option<PgPool>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserSummary>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::no_database()
    })?;

    let user = get_user_by_id(&pool, auth.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", auth.user_id);
            BackendError::not_found("User not found")
        })?;

    Ok(Json(user.summary()))
}
