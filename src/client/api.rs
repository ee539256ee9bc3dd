/**
 * Typed API Calls
 *
 * One method per REST endpoint, built on the plumbing in `http`. The
 * client owns the configuration so the token set at login is attached to
 * every later call.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::client::config::ClientConfig;
use crate::client::http::{send_json, with_bearer, ClientError};
use crate::shared::models::{
    AuthResponse, EventDto, LoginRequest, MessageResponse, RegisterRequest, UserSummary,
};

/// Payload for creating an event
#[derive(Debug, Clone, Serialize)]
pub struct CreateEventPayload {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Payload for editing an event; unset fields keep their value
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateEventPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// List filters for GET /api/events
#[derive(Debug, Clone, Default)]
pub struct EventListFilter {
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

/// HTTP client for the EventHub API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Store the session token used by later calls.
    pub fn set_token(&mut self, token: Option<String>) {
        self.config.set_token(token);
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        with_bearer(
            self.http.get(self.config.api_url(path)),
            self.config.get_token(),
        )
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        with_bearer(
            self.http.post(self.config.api_url(path)),
            self.config.get_token(),
        )
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        with_bearer(
            self.http.put(self.config.api_url(path)),
            self.config.get_token(),
        )
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        with_bearer(
            self.http.delete(self.config.api_url(path)),
            self.config.get_token(),
        )
    }

    // --- Auth ---

    /// POST /api/auth/register
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ClientError> {
        send_json(self.post("/api/auth/register").json(request)).await
    }

    /// POST /api/auth/login
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ClientError> {
        send_json(self.post("/api/auth/login").json(request)).await
    }

    /// POST /api/auth/logout
    pub async fn logout(&self) -> Result<MessageResponse, ClientError> {
        send_json(self.post("/api/auth/logout")).await
    }

    /// GET /api/auth/me
    pub async fn me(&self) -> Result<UserSummary, ClientError> {
        send_json(self.get("/api/auth/me")).await
    }

    // --- Events ---

    /// GET /api/events
    pub async fn list_events(&self, filter: &EventListFilter) -> Result<Vec<EventDto>, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(category) = &filter.category {
            query.push(("category", category.clone()));
        }
        if let Some(date) = filter.date {
            query.push(("date", date.to_string()));
        }
        send_json(self.get("/api/events").query(&query)).await
    }

    /// GET /api/events/{id}
    pub async fn get_event(&self, id: Uuid) -> Result<EventDto, ClientError> {
        send_json(self.get(&format!("/api/events/{}", id))).await
    }

    /// POST /api/events
    pub async fn create_event(&self, payload: &CreateEventPayload) -> Result<EventDto, ClientError> {
        send_json(self.post("/api/events").json(payload)).await
    }

    /// PUT /api/events/{id}
    pub async fn update_event(
        &self,
        id: Uuid,
        payload: &UpdateEventPayload,
    ) -> Result<EventDto, ClientError> {
        send_json(self.put(&format!("/api/events/{}", id)).json(payload)).await
    }

    /// DELETE /api/events/{id}
    pub async fn delete_event(&self, id: Uuid) -> Result<MessageResponse, ClientError> {
        send_json(self.delete(&format!("/api/events/{}", id))).await
    }

    /// POST /api/events/{id}/attend
    pub async fn attend_event(&self, id: Uuid) -> Result<EventDto, ClientError> {
        send_json(self.post(&format!("/api/events/{}/attend", id))).await
    }

    /// POST /api/events/{id}/unattend
    pub async fn unattend_event(&self, id: Uuid) -> Result<EventDto, ClientError> {
        send_json(self.post(&format!("/api/events/{}/unattend", id))).await
    }
}
