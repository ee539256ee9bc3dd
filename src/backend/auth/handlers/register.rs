/**
 * Registration Handler
 *
 * This module implements the user registration handler for
 * POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate name, email format, and password length
 * 2. Check if a user with this email already exists
 * 3. Hash password using bcrypt
 * 4. Create user in database
 * 5. Generate JWT token
 * 6. Return token and user info
 *
 * # Validation
 *
 * - Name must be 1-80 characters
 * - Email must contain '@' (basic validation)
 * - Password must be at least 8 characters long
 * - Email must be unique
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;

use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{create_user, get_user_by_email};
use crate::backend::error::BackendError;
use crate::shared::models::{AuthResponse, RegisterRequest};

/// Maximum accepted display-name length.
const MAX_NAME_LEN: usize = 80;

/// Validate the registration payload, returning the first problem found.
fn validate(request: &RegisterRequest) -> Result<(), BackendError> {
    let name = request.name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LEN {
        return Err(BackendError::bad_request(format!(
            "Name must be 1-{} characters",
            MAX_NAME_LEN
        )));
    }

    if !request.email.contains('@') {
        return Err(BackendError::bad_request("Invalid email format"));
    }

    if request.password.len() < 8 {
        return Err(BackendError::bad_request(
            "Password must be at least 8 characters",
        ));
    }

    Ok(())
}

/// Registration handler
///
/// Validates the input, creates a new user account, and returns a JWT
/// token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - Invalid name, email format, or short password
/// * `409 Conflict` - A user with this email already exists
/// * `503 Service Unavailable` - Database is not configured
/// * `500 Internal Server Error` - Hashing, insertion, or token generation failed
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada Lovelace",
///   "email": "ada@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn register(
    State(pool): State<Option<PgPool>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::no_database()
    })?;
    tracing::info!("Registration request for email: {}", request.email);

    validate(&request)?;

    // Check if email already exists
    if get_user_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Email already exists: {}", request.email);
        return Err(BackendError::conflict("Email already registered"));
    }

    // Hash password
    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::handler(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
        )
    })?;

    // Create user. A concurrent registration can slip past the check
    // above; the unique index on email turns the loser into a 409
    let user = create_user(
        &pool,
        request.name.trim().to_string(),
        request.email.clone(),
        password_hash,
    )
    .await
    .map_err(|e| BackendError::or_conflict(e, "Email already registered"))?;

    // Create token
    let token = create_token(user.id, user.email.clone()).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::handler(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Server error",
        )
    })?;

    tracing::info!("User created successfully: {} ({})", user.name, user.email);

    Ok(Json(AuthResponse {
        token,
        user: user.summary(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_good_input() {
        assert!(validate(&request("Ada", "ada@example.com", "password123")).is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let result = validate(&request("   ", "ada@example.com", "password123"));
        assert_eq!(result.unwrap_err().status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let result = validate(&request("Ada", "not-an-email", "password123"));
        assert_eq!(result.unwrap_err().status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validate_rejects_short_password() {
        let result = validate(&request("Ada", "ada@example.com", "short"));
        assert_eq!(result.unwrap_err().status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_no_database() {
        let result = register(
            State(None),
            Json(request("Ada", "ada@example.com", "password123")),
        )
        .await;
        assert_eq!(
            result.unwrap_err().status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
