/**
 * Client Configuration
 *
 * Holds the server URL and the current session token. The URL comes from
 * `CLIENT_API_URL`, defaulting to the local development server.
 */

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    server_url: String,
    token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url,
            token: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for a specific server URL
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            token: None,
        }
    }

    /// Set the JWT token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Get the JWT token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    /// Get the websocket URL, with the token as a query parameter.
    ///
    /// The browser websocket API cannot set headers, so the server reads
    /// the token from the query string on the handshake.
    pub fn ws_url(&self) -> String {
        let base = self
            .server_url
            .replacen("https://", "wss://", 1)
            .replacen("http://", "ws://", 1);
        match &self.token {
            Some(token) => format!("{}/api/ws?token={}", base, token),
            None => format!("{}/api/ws", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        let config = ClientConfig::with_server_url("http://127.0.0.1:3000");
        assert_eq!(
            config.api_url("/api/events"),
            "http://127.0.0.1:3000/api/events"
        );
    }

    #[test]
    fn test_set_and_clear_token() {
        let mut config = ClientConfig::with_server_url("http://127.0.0.1:3000");
        assert!(config.get_token().is_none());

        config.set_token(Some("jwt".to_string()));
        assert_eq!(config.get_token(), Some(&"jwt".to_string()));

        config.clear_token();
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_ws_url_scheme_and_token() {
        let mut config = ClientConfig::with_server_url("https://hub.example.com");
        config.set_token(Some("jwt".to_string()));
        assert_eq!(config.ws_url(), "wss://hub.example.com/api/ws?token=jwt");

        let plain = ClientConfig::with_server_url("http://127.0.0.1:3000");
        assert_eq!(plain.ws_url(), "ws://127.0.0.1:3000/api/ws");
    }
}
