/**
 * Event Request Types
 *
 * Request payloads and query parameters for the events surface, plus
 * their validation. Categories arrive as strings and are checked against
 * the fixed category set so an unknown category yields a 400 with a
 * message rather than a bare deserialization failure.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use crate::backend::error::BackendError;
use crate::shared::models::EventCategory;

/// Payload for POST /api/events
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Distinguishes an absent `image` field from an explicit `null`:
/// absent keeps the current value, `null` clears it.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Payload for PUT /api/events/{id} — all fields optional, partial update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    /// Leave out to keep the current image; send `null` to clear it
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
}

impl UpdateEventRequest {
    /// Whether the payload changes anything at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.image.is_none()
    }
}

/// Query parameters for GET /api/events
///
/// `category` filters exactly; `date` keeps events on or after the given
/// calendar date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EventFilter {
    /// Lower bound on the event date, midnight UTC of the filter date.
    pub fn date_from(&self) -> Option<DateTime<Utc>> {
        self.date
            .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc())
    }
}

/// Parse and validate a category label.
pub fn parse_category(label: &str) -> Result<EventCategory, BackendError> {
    EventCategory::parse(label).ok_or_else(|| {
        BackendError::bad_request(format!("Unknown event category: {}", label))
    })
}

/// Validate a create payload, returning the parsed category.
pub fn validate_create(request: &CreateEventRequest) -> Result<EventCategory, BackendError> {
    if request.name.trim().is_empty() {
        return Err(BackendError::bad_request("Event name is required"));
    }
    if request.description.trim().is_empty() {
        return Err(BackendError::bad_request("Event description is required"));
    }
    if request.time.trim().is_empty() {
        return Err(BackendError::bad_request("Event time is required"));
    }
    if request.location.trim().is_empty() {
        return Err(BackendError::bad_request("Event location is required"));
    }
    parse_category(&request.category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn create_request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Rust Meetup".to_string(),
            description: "Monthly meetup".to_string(),
            date: Utc::now(),
            time: "18:30".to_string(),
            location: "Community Hall".to_string(),
            category: "Technological Events".to_string(),
            image: None,
        }
    }

    #[test]
    fn test_validate_create_ok() {
        let category = validate_create(&create_request()).unwrap();
        assert_eq!(category, EventCategory::Technological);
    }

    #[test]
    fn test_validate_create_rejects_blank_name() {
        let mut request = create_request();
        request.name = "  ".to_string();
        let err = validate_create(&request).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validate_create_rejects_unknown_category() {
        let mut request = create_request();
        request.category = "Birthday Parties".to_string();
        let err = validate_create(&request).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("Birthday Parties"));
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateEventRequest::default().is_empty());
        let update = UpdateEventRequest {
            name: Some("New name".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_image_null_differs_from_absent() {
        let keep: UpdateEventRequest = serde_json::from_str(r#"{"name":"Renamed"}"#).unwrap();
        assert_eq!(keep.image, None);

        let clear: UpdateEventRequest = serde_json::from_str(r#"{"image":null}"#).unwrap();
        assert_eq!(clear.image, Some(None));
        assert!(!clear.is_empty());

        let set: UpdateEventRequest =
            serde_json::from_str(r#"{"image":"https://img.example.com/a.png"}"#).unwrap();
        assert_eq!(set.image, Some(Some("https://img.example.com/a.png".to_string())));
    }

    #[test]
    fn test_filter_date_from_is_midnight_utc() {
        let filter = EventFilter {
            category: None,
            date: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
        };
        let from = filter.date_from().unwrap();
        assert_eq!(from.to_rfc3339(), "2026-03-01T00:00:00+00:00");
    }
}
