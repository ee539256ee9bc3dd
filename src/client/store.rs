/**
 * Application Store
 *
 * Client-side state with Redux-style slices: an auth slice, an events
 * slice, and a navigation route. Async actions call the API and reduce
 * the response into state; [`Store::apply_server_event`] reduces pushed
 * websocket events the same way, so REST responses and realtime frames
 * converge on the same state.
 *
 * # Session Expiry
 *
 * Any action that fails with `ClientError::Unauthorized` clears the
 * session and navigates to the login route.
 */

use uuid::Uuid;

use crate::client::api::{ApiClient, CreateEventPayload, EventListFilter, UpdateEventPayload};
use crate::client::config::ClientConfig;
use crate::client::http::ClientError;
use crate::shared::models::{EventDto, LoginRequest, RegisterRequest, UserSummary};
use crate::shared::ServerEvent;

/// Where the application currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Events,
    EventDetail(Uuid),
    CreateEvent,
}

/// Authentication slice
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<UserSummary>,
    pub error: Option<String>,
}

/// Events slice
#[derive(Debug, Clone, Default)]
pub struct EventsState {
    pub events: Vec<EventDto>,
    pub current: Option<EventDto>,
    /// Viewers of the currently open event, from `viewerCount` frames
    pub viewer_count: usize,
    pub error: Option<String>,
}

/// The application store
pub struct Store {
    api: ApiClient,
    pub auth: AuthState,
    pub events: EventsState,
    pub route: Route,
    /// Last realtime notice, suitable for a toast
    pub notice: Option<String>,
}

impl Store {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            api: ApiClient::new(config),
            auth: AuthState::default(),
            events: EventsState::default(),
            route: Route::Login,
            notice: None,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Whether a session token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.api.config().get_token().is_some()
    }

    /// Install a token without validating it (e.g. restored from storage).
    pub fn set_token(&mut self, token: String) {
        self.api.set_token(Some(token));
    }

    /// Drop the session and go back to login.
    fn session_expired(&mut self) {
        tracing::warn!("Session expired, clearing token");
        self.api.set_token(None);
        self.auth = AuthState {
            user: None,
            error: Some("Session expired, please log in again".to_string()),
        };
        self.route = Route::Login;
    }

    fn fail_auth(&mut self, error: ClientError) {
        match error {
            ClientError::Unauthorized => self.session_expired(),
            other => self.auth.error = Some(other.to_string()),
        }
    }

    fn fail_events(&mut self, error: ClientError) {
        match error {
            ClientError::Unauthorized => self.session_expired(),
            other => self.events.error = Some(other.to_string()),
        }
    }

    // --- Auth actions ---

    pub async fn login(&mut self, email: String, password: String) {
        self.auth.error = None;
        match self.api.login(&LoginRequest { email, password }).await {
            Ok(response) => {
                self.api.set_token(Some(response.token));
                self.auth.user = Some(response.user);
                self.route = Route::Events;
            }
            Err(error) => self.fail_auth(error),
        }
    }

    pub async fn register(&mut self, name: String, email: String, password: String) {
        self.auth.error = None;
        let request = RegisterRequest {
            name,
            email,
            password,
        };
        match self.api.register(&request).await {
            Ok(response) => {
                self.api.set_token(Some(response.token));
                self.auth.user = Some(response.user);
                self.route = Route::Events;
            }
            Err(error) => self.fail_auth(error),
        }
    }

    pub async fn logout(&mut self) {
        // Best effort; the session is stateless server-side
        if let Err(error) = self.api.logout().await {
            tracing::debug!("Logout call failed: {}", error);
        }
        self.api.set_token(None);
        self.auth = AuthState::default();
        self.events = EventsState::default();
        self.route = Route::Login;
    }

    /// Restore the session from a stored token.
    pub async fn load_session(&mut self, token: String) {
        self.api.set_token(Some(token));
        match self.api.me().await {
            Ok(user) => {
                self.auth.user = Some(user);
                self.route = Route::Events;
            }
            Err(error) => self.fail_auth(error),
        }
    }

    // --- Event actions ---

    pub async fn load_events(&mut self, filter: EventListFilter) {
        self.events.error = None;
        match self.api.list_events(&filter).await {
            Ok(events) => self.events.events = events,
            Err(error) => self.fail_events(error),
        }
    }

    /// Open an event's detail view.
    pub async fn open_event(&mut self, id: Uuid) {
        self.events.error = None;
        match self.api.get_event(id).await {
            Ok(event) => {
                self.events.current = Some(event);
                self.events.viewer_count = 0;
                self.route = Route::EventDetail(id);
            }
            Err(error) => self.fail_events(error),
        }
    }

    pub async fn create_event(&mut self, payload: CreateEventPayload) {
        self.events.error = None;
        match self.api.create_event(&payload).await {
            Ok(event) => {
                let id = event.id;
                self.upsert_event(event.clone());
                self.events.current = Some(event);
                self.route = Route::EventDetail(id);
            }
            Err(error) => self.fail_events(error),
        }
    }

    pub async fn update_event(&mut self, id: Uuid, payload: UpdateEventPayload) {
        self.events.error = None;
        match self.api.update_event(id, &payload).await {
            Ok(event) => self.replace_event(event),
            Err(error) => self.fail_events(error),
        }
    }

    pub async fn cancel_event(&mut self, id: Uuid) {
        self.events.error = None;
        match self.api.delete_event(id).await {
            Ok(_) => self.remove_event(id),
            Err(error) => self.fail_events(error),
        }
    }

    pub async fn attend(&mut self, id: Uuid) {
        self.events.error = None;
        match self.api.attend_event(id).await {
            Ok(event) => self.replace_event(event),
            Err(error) => self.fail_events(error),
        }
    }

    pub async fn unattend(&mut self, id: Uuid) {
        self.events.error = None;
        match self.api.unattend_event(id).await {
            Ok(event) => self.replace_event(event),
            Err(error) => self.fail_events(error),
        }
    }

    // --- Realtime reducers ---

    /// Reduce a pushed websocket event into state.
    pub fn apply_server_event(&mut self, event: ServerEvent) {
        match event {
            ServerEvent::ViewerCount { event_id, count } => {
                if self.current_id() == Some(event_id) {
                    self.events.viewer_count = count;
                }
            }
            ServerEvent::NewEvent { event, message } => {
                self.upsert_event(event);
                self.notice = Some(message);
            }
            ServerEvent::EventUpdated {
                event_id,
                attendees,
                event,
                message,
                ..
            } => {
                if let Some(doc) = event {
                    self.replace_event(doc);
                } else if let Some(attendees) = attendees {
                    self.set_attendees(event_id, attendees);
                }
                self.notice = Some(message);
            }
            ServerEvent::EventCancelled { event_id, message } => {
                self.remove_event(event_id);
                self.notice = Some(message);
            }
        }
    }

    fn current_id(&self) -> Option<Uuid> {
        self.events.current.as_ref().map(|event| event.id)
    }

    /// Add an event to the list, or refresh it if already present.
    fn upsert_event(&mut self, event: EventDto) {
        match self.events.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.events.push(event),
        }
    }

    /// Replace an event everywhere it appears.
    fn replace_event(&mut self, event: EventDto) {
        if self.current_id() == Some(event.id) {
            self.events.current = Some(event.clone());
        }
        self.upsert_event(event);
    }

    fn set_attendees(&mut self, event_id: Uuid, attendees: Vec<UserSummary>) {
        if let Some(current) = &mut self.events.current {
            if current.id == event_id {
                current.attendees = attendees.clone();
            }
        }
        if let Some(listed) = self.events.events.iter_mut().find(|e| e.id == event_id) {
            listed.attendees = attendees;
        }
    }

    /// Drop an event from state; leaving its detail view if open.
    fn remove_event(&mut self, event_id: Uuid) {
        self.events.events.retain(|e| e.id != event_id);
        if self.current_id() == Some(event_id) {
            self.events.current = None;
            self.events.viewer_count = 0;
            self.route = Route::Events;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::EventCategory;
    use crate::shared::UpdateKind;
    use chrono::Utc;

    fn store() -> Store {
        Store::new(ClientConfig::with_server_url("http://127.0.0.1:3000"))
    }

    fn user(name: &str) -> UserSummary {
        UserSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            created_at: Utc::now(),
        }
    }

    fn event(name: &str) -> EventDto {
        EventDto {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: "desc".to_string(),
            date: Utc::now(),
            time: "18:30".to_string(),
            location: "Hall".to_string(),
            category: EventCategory::Social,
            image: None,
            creator: user("Ada"),
            attendees: Vec::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_new_event_appends_once() {
        let mut store = store();
        let e = event("Meetup");

        store.apply_server_event(ServerEvent::NewEvent {
            event: e.clone(),
            message: "New event".to_string(),
        });
        store.apply_server_event(ServerEvent::NewEvent {
            event: e,
            message: "New event".to_string(),
        });

        assert_eq!(store.events.events.len(), 1);
        assert_eq!(store.notice.as_deref(), Some("New event"));
    }

    #[test]
    fn test_attendance_update_reaches_list_and_detail() {
        let mut store = store();
        let e = event("Meetup");
        let id = e.id;
        store.events.events.push(e.clone());
        store.events.current = Some(e);

        store.apply_server_event(ServerEvent::attendance(
            UpdateKind::NewAttendee,
            id,
            vec![user("Grace")],
            "A new attendee has joined the event!",
        ));

        assert_eq!(store.events.events[0].attendees.len(), 1);
        assert_eq!(store.events.current.as_ref().unwrap().attendees.len(), 1);
    }

    #[test]
    fn test_modified_event_replaces_document() {
        let mut store = store();
        let mut e = event("Meetup");
        store.events.events.push(e.clone());
        store.events.current = Some(e.clone());

        e.name = "Renamed".to_string();
        store.apply_server_event(ServerEvent::modified(e, "Event has been updated"));

        assert_eq!(store.events.events[0].name, "Renamed");
        assert_eq!(store.events.current.as_ref().unwrap().name, "Renamed");
    }

    #[test]
    fn test_cancelled_event_navigates_away() {
        let mut store = store();
        let e = event("Meetup");
        let id = e.id;
        store.events.events.push(e.clone());
        store.events.current = Some(e);
        store.route = Route::EventDetail(id);

        store.apply_server_event(ServerEvent::EventCancelled {
            event_id: id,
            message: "Event \"Meetup\" has been cancelled".to_string(),
        });

        assert!(store.events.events.is_empty());
        assert!(store.events.current.is_none());
        assert_eq!(store.route, Route::Events);
    }

    #[test]
    fn test_viewer_count_only_for_open_event() {
        let mut store = store();
        let e = event("Meetup");
        let id = e.id;
        store.events.current = Some(e);

        store.apply_server_event(ServerEvent::ViewerCount {
            event_id: Uuid::new_v4(),
            count: 9,
        });
        assert_eq!(store.events.viewer_count, 0);

        store.apply_server_event(ServerEvent::ViewerCount {
            event_id: id,
            count: 4,
        });
        assert_eq!(store.events.viewer_count, 4);
    }
}
