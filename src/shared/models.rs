/**
 * Shared Data Transfer Objects
 *
 * This module defines the JSON shapes exchanged between the client and the
 * REST API: event documents, user summaries, and the auth request/response
 * payloads. Field names are camelCase on the wire.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as embedded in API responses.
///
/// This is the "populated" form of a user reference: enough to render a
/// creator line or an attendee list, never the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Fixed set of event categories.
///
/// Creating or editing an event with a category outside this set is
/// rejected with a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    #[serde(rename = "Social Events")]
    Social,
    #[serde(rename = "Corporate Events")]
    Corporate,
    #[serde(rename = "Cultural Events")]
    Cultural,
    #[serde(rename = "Sporting Events")]
    Sporting,
    #[serde(rename = "Educational Events")]
    Educational,
    #[serde(rename = "Political Events")]
    Political,
    #[serde(rename = "Charity Events")]
    Charity,
    #[serde(rename = "Religious Events")]
    Religious,
    #[serde(rename = "Trade and Commercial Events")]
    TradeAndCommercial,
    #[serde(rename = "Entertainment Events")]
    Entertainment,
    #[serde(rename = "Environmental Events")]
    Environmental,
    #[serde(rename = "Technological Events")]
    Technological,
    #[serde(rename = "Government Events")]
    Government,
}

impl EventCategory {
    /// All categories, in display order.
    pub const ALL: [EventCategory; 13] = [
        EventCategory::Social,
        EventCategory::Corporate,
        EventCategory::Cultural,
        EventCategory::Sporting,
        EventCategory::Educational,
        EventCategory::Political,
        EventCategory::Charity,
        EventCategory::Religious,
        EventCategory::TradeAndCommercial,
        EventCategory::Entertainment,
        EventCategory::Environmental,
        EventCategory::Technological,
        EventCategory::Government,
    ];

    /// The canonical label, as stored in the database and sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Social => "Social Events",
            EventCategory::Corporate => "Corporate Events",
            EventCategory::Cultural => "Cultural Events",
            EventCategory::Sporting => "Sporting Events",
            EventCategory::Educational => "Educational Events",
            EventCategory::Political => "Political Events",
            EventCategory::Charity => "Charity Events",
            EventCategory::Religious => "Religious Events",
            EventCategory::TradeAndCommercial => "Trade and Commercial Events",
            EventCategory::Entertainment => "Entertainment Events",
            EventCategory::Environmental => "Environmental Events",
            EventCategory::Technological => "Technological Events",
            EventCategory::Government => "Government Events",
        }
    }

    /// Parse a category from its canonical label.
    pub fn parse(label: &str) -> Option<EventCategory> {
        Self::ALL.iter().copied().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event document as returned by the API.
///
/// The `creator` reference and the `attendees` list are resolved to
/// [`UserSummary`] values at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    /// Unique event ID (UUID)
    pub id: Uuid,
    /// Event name
    pub name: String,
    /// Event description
    pub description: String,
    /// Event date
    pub date: DateTime<Utc>,
    /// Free-form time-of-day string (e.g. "18:30")
    pub time: String,
    /// Venue or address
    pub location: String,
    /// Event category
    pub category: EventCategory,
    /// Optional image URL
    pub image: Option<String>,
    /// The user who created the event
    pub creator: UserSummary,
    /// Users attending the event
    pub attendees: Vec<UserSummary>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl EventDto {
    /// Whether the given user is on the attendee list.
    pub fn is_attending(&self, user_id: Uuid) -> bool {
        self.attendees.iter().any(|a| a.id == user_id)
    }
}

/// Registration request (POST /api/auth/register)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request (POST /api/auth/login)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful auth response: a bearer token plus the user it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Generic acknowledgement response (`{"message": "..."}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in EventCategory::ALL {
            let parsed = EventCategory::parse(category.as_str());
            assert_eq!(parsed, Some(category));
        }
    }

    #[test]
    fn test_category_parse_unknown() {
        assert_eq!(EventCategory::parse("Birthday Parties"), None);
        assert_eq!(EventCategory::parse(""), None);
    }

    #[test]
    fn test_category_serde_uses_labels() {
        let json = serde_json::to_string(&EventCategory::TradeAndCommercial).unwrap();
        assert_eq!(json, "\"Trade and Commercial Events\"");

        let back: EventCategory = serde_json::from_str("\"Charity Events\"").unwrap();
        assert_eq!(back, EventCategory::Charity);
    }

    #[test]
    fn test_user_summary_camel_case() {
        let user = UserSummary {
            id: Uuid::new_v4(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
