/**
 * Authentication Guard
 *
 * This module protects routes that require user authentication. The
 * [`AuthUser`] extractor pulls the JWT from the Authorization header,
 * verifies it, confirms the user still exists, and hands the identity to
 * the handler. Routes opt in per-handler, the way the Express original
 * attached its `auth` middleware per-route.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from a JWT token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Axum extractor for the authenticated user
///
/// This extractor:
/// 1. Extracts the JWT token from the Authorization header
/// 2. Verifies the token
/// 3. Confirms the user still exists in the database (when one is configured)
///
/// Rejects with 401 Unauthorized if the token is missing or invalid.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    // Rejections render as the usual {"error", "status"} JSON body
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("Missing Authorization header");
                BackendError::unauthorized("Authentication required")
            })?;

        // Extract token (format: "Bearer <token>")
        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Authentication required")
        })?;

        let user = authenticate_token(token, state.db_pool.as_ref()).await?;
        Ok(AuthUser(user))
    }
}

/// Verify a raw JWT and resolve the identity it carries.
///
/// Shared by the HTTP extractor and the websocket handshake (which carries
/// its token as a query parameter instead of a header).
pub async fn authenticate_token(
    token: &str,
    pool: Option<&PgPool>,
) -> Result<AuthenticatedUser, BackendError> {
    // Verify token
    let claims = verify_token(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        BackendError::unauthorized("Invalid or expired token")
    })?;

    // Parse user ID from claims
    let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
        tracing::error!("Invalid user ID in token: {:?}", e);
        BackendError::handler(StatusCode::INTERNAL_SERVER_ERROR, "Server error")
    })?;

    // Verify user exists in database
    if let Some(pool) = pool {
        if let Err(e) = verify_user_exists(pool, user_id).await {
            tracing::warn!("User not found in database: {:?}", e);
            return Err(BackendError::unauthorized("Invalid or expired token"));
        }
    }

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

/// Verify user exists in database
async fn verify_user_exists(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    use crate::backend::auth::users::get_user_by_id;

    get_user_by_id(pool, user_id)
        .await?
        .ok_or(sqlx::Error::RowNotFound)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::create_token;

    #[tokio::test]
    async fn test_authenticate_valid_token_without_db() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, "test@example.com".to_string()).unwrap();

        let user = authenticate_token(&token, None).await.unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.email, "test@example.com");
    }

    #[tokio::test]
    async fn test_authenticate_garbage_token() {
        let error = authenticate_token("invalid.token.here", None)
            .await
            .unwrap_err();
        assert_eq!(error.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.message(), "Invalid or expired token");
    }

    #[test]
    fn test_bearer_prefix_parsing() {
        assert_eq!("Bearer abc".strip_prefix("Bearer "), Some("abc"));
        assert_eq!("Token abc".strip_prefix("Bearer "), None);
    }
}
