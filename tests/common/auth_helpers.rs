//! Authentication test helpers
//!
//! Provides utilities for creating test users, generating tokens,
//! and testing authentication flows.

use sqlx::PgPool;
use uuid::Uuid;

use eventhub::backend::auth::sessions::create_token;
use eventhub::backend::auth::users::create_user;

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Create a test user in the database
pub async fn create_test_user(
    pool: &PgPool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

    let user = create_user(pool, name.to_string(), email.to_string(), password_hash).await?;
    let token = create_token(user.id, user.email.clone()).expect("Failed to create test token");

    Ok(TestUser {
        id: user.id,
        name: user.name,
        email: user.email,
        password: password.to_string(),
        token,
    })
}

/// Create a test user with a unique email
pub async fn create_unique_test_user(
    pool: &PgPool,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, "Test User", &email, "test_password_123").await
}

/// Generate a test JWT token without touching the database
pub fn generate_test_token(user_id: Uuid, email: &str) -> String {
    create_token(user_id, email.to_string()).expect("Failed to generate test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
