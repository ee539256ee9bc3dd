/**
 * Realtime Wire Events
 *
 * This module defines the JSON frames exchanged over the websocket:
 * commands from the client (joining and leaving event rooms) and events
 * pushed by the server (attendee changes, edits, cancellations, viewer
 * counts).
 *
 * # Wire Format
 *
 * Every frame is a JSON object with an `event` discriminator, and payload
 * fields in camelCase:
 *
 * ```json
 * {"event":"joinEvent","eventId":"550e8400-..."}
 * {"event":"eventUpdated","type":"newAttendee","eventId":"...","attendees":[...],"message":"..."}
 * {"event":"eventCancelled","eventId":"...","message":"..."}
 * ```
 */
use crate::shared::models::{EventDto, UserSummary};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Commands sent from the client over the socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientCommand {
    /// Join the room for an event (start receiving room-scoped updates)
    JoinEvent { event_id: Uuid },
    /// Leave the room for an event
    LeaveEvent { event_id: Uuid },
}

/// Discriminates what changed in an `eventUpdated` frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateKind {
    /// A user joined the attendee list
    NewAttendee,
    /// A user left the attendee list
    AttendeeLeft,
    /// The event document itself was edited
    EventModified,
}

/// Events pushed from the server over the socket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerEvent {
    /// Number of sockets currently in an event room (room-scoped)
    ViewerCount { event_id: Uuid, count: usize },

    /// A new event was created (broadcast to all clients).
    ///
    /// The document rides under `data`; the `event` key is taken by the
    /// frame discriminator.
    NewEvent {
        #[serde(rename = "data")]
        event: EventDto,
        message: String,
    },

    /// An event changed: new attendee, attendee left, or document edited.
    ///
    /// `attendees` carries the updated attendee list for attendance
    /// changes; `event` carries the full document for edits.
    EventUpdated {
        #[serde(rename = "type")]
        kind: UpdateKind,
        event_id: Uuid,
        #[serde(skip_serializing_if = "Option::is_none")]
        attendees: Option<Vec<UserSummary>>,
        #[serde(rename = "data", skip_serializing_if = "Option::is_none")]
        event: Option<EventDto>,
        message: String,
    },

    /// The event was cancelled (room-scoped); clients viewing it should
    /// navigate away.
    EventCancelled { event_id: Uuid, message: String },
}

impl ServerEvent {
    /// Build an attendance-change update carrying the new attendee list.
    pub fn attendance(
        kind: UpdateKind,
        event_id: Uuid,
        attendees: Vec<UserSummary>,
        message: impl Into<String>,
    ) -> Self {
        ServerEvent::EventUpdated {
            kind,
            event_id,
            attendees: Some(attendees),
            event: None,
            message: message.into(),
        }
    }

    /// Build an edit update carrying the full updated document.
    pub fn modified(event: EventDto, message: impl Into<String>) -> Self {
        ServerEvent::EventUpdated {
            kind: UpdateKind::EventModified,
            event_id: event.id,
            attendees: None,
            event: Some(event),
            message: message.into(),
        }
    }

    /// The event id this frame is about, if it is room-scoped data.
    pub fn event_id(&self) -> Option<Uuid> {
        match self {
            ServerEvent::ViewerCount { event_id, .. }
            | ServerEvent::EventUpdated { event_id, .. }
            | ServerEvent::EventCancelled { event_id, .. } => Some(*event_id),
            ServerEvent::NewEvent { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_command_wire_format() {
        let id: Uuid = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let json = serde_json::to_value(ClientCommand::JoinEvent { event_id: id }).unwrap();
        assert_eq!(json["event"], "joinEvent");
        assert_eq!(json["eventId"], "550e8400-e29b-41d4-a716-446655440000");

        let parsed: ClientCommand =
            serde_json::from_str(r#"{"event":"leaveEvent","eventId":"550e8400-e29b-41d4-a716-446655440000"}"#)
                .unwrap();
        assert_eq!(parsed, ClientCommand::LeaveEvent { event_id: id });
    }

    #[test]
    fn test_event_updated_kind_is_named_type() {
        let event = ServerEvent::attendance(
            UpdateKind::NewAttendee,
            Uuid::new_v4(),
            Vec::new(),
            "A new attendee has joined the event!",
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "eventUpdated");
        assert_eq!(json["type"], "newAttendee");
        assert!(json.get("eventId").is_some());
        // The unused document payload is omitted, not null
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_event_cancelled_wire_format() {
        let id = Uuid::new_v4();
        let event = ServerEvent::EventCancelled {
            event_id: id,
            message: "Event \"Rust Meetup\" has been cancelled".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "eventCancelled");
        assert_eq!(json["eventId"], id.to_string());
    }

    #[test]
    fn test_viewer_count_roundtrip() {
        let event = ServerEvent::ViewerCount {
            event_id: Uuid::new_v4(),
            count: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: ServerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_event_id_scoping() {
        let id = Uuid::new_v4();
        let cancelled = ServerEvent::EventCancelled {
            event_id: id,
            message: String::new(),
        };
        assert_eq!(cancelled.event_id(), Some(id));
    }
}
