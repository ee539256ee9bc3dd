/**
 * HTTP Client Plumbing
 *
 * The request helpers shared by every typed API call: bearer token
 * attachment, error-body decoding, and the client error type.
 *
 * # Error Mapping
 *
 * - Transport failures surface as `ClientError::Network`
 * - A 401 response surfaces as `ClientError::Unauthorized` so callers
 *   can clear the session in one place
 * - Other non-success responses decode the server's `{"error": ...}`
 *   body into `ClientError::Api`
 */

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Client-side error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server rejected the session token
    #[error("Session expired")]
    Unauthorized,

    /// The server answered with an error body
    #[error("{message}")]
    Api {
        /// HTTP status of the response
        status: StatusCode,
        /// The server's error message
        message: String,
    },

    /// Websocket failure
    #[error("Websocket error: {0}")]
    Socket(#[from] tokio_tungstenite::tungstenite::Error),

    /// JSON encode/decode failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error body shape the server emits
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Attach the bearer token, if there is one.
pub fn with_bearer(builder: RequestBuilder, token: Option<&String>) -> RequestBuilder {
    match token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

/// Send a request and decode the JSON response.
///
/// Non-success statuses are mapped to [`ClientError`] before any body
/// decoding of the success type is attempted.
pub async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ClientError> {
    let response = builder.send().await?;
    let status = response.status();

    if status == StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }

    if !status.is_success() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        };
        return Err(ClientError::Api { status, message });
    }

    Ok(response.json::<T>().await?)
}
