/**
 * Event Handlers
 *
 * This module implements the HTTP handlers for the events surface:
 *
 * - GET    /api/events              - list events (public, filterable)
 * - POST   /api/events              - create an event
 * - GET    /api/events/{id}         - fetch one event (public)
 * - PUT    /api/events/{id}         - edit an event (creator only)
 * - DELETE /api/events/{id}         - cancel an event (creator only)
 * - POST   /api/events/{id}/attend  - join the attendee list
 * - POST   /api/events/{id}/unattend - leave the attendee list
 *
 * # Broadcasts
 *
 * Writes push realtime events after the database commit:
 *
 * - create: `newEvent` to all clients
 * - edit: `eventUpdated` (`type: eventModified`) to the event room and
 *   to all clients, so both detail viewers and list viewers refresh
 * - attend/unattend: `eventUpdated` (`type: newAttendee` /
 *   `attendeeLeft`) to the room and to all clients
 * - delete: `eventCancelled` to the event room only
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::events::db::{self, EventChanges};
use crate::backend::events::types::{
    parse_category, validate_create, CreateEventRequest, EventFilter, UpdateEventRequest,
};
use crate::backend::middleware::auth::AuthUser;
use crate::backend::realtime::broadcast::{broadcast_event, Scope};
use crate::backend::server::state::AppState;
use crate::shared::{EventDto, MessageResponse, ServerEvent, UpdateKind};

/// Resolve the database pool or fail with 503.
fn pool(state: &AppState) -> Result<&PgPool, BackendError> {
    state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        BackendError::no_database()
    })
}

/// Fetch an event or fail with 404.
async fn require_event(pool: &PgPool, id: Uuid) -> Result<EventDto, BackendError> {
    db::get_event(pool, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Event not found"))
}

/// Push an update to the event's room and to every connected client.
///
/// List views need attendance and edit changes too, so these events go
/// out globally as well as to the room.
async fn notify_room_and_all(state: &AppState, event_id: Uuid, event: ServerEvent) {
    broadcast_event(&state.realtime, Scope::Room(event_id), event.clone()).await;
    broadcast_event(&state.realtime, Scope::All, event).await;
}

/// Merge a partial update into the current document, validating as we go.
fn merge_changes(
    current: &EventDto,
    request: UpdateEventRequest,
) -> Result<EventChanges, BackendError> {
    if request.is_empty() {
        return Err(BackendError::bad_request("No fields to update"));
    }

    for (label, value) in [
        ("name", &request.name),
        ("description", &request.description),
        ("time", &request.time),
        ("location", &request.location),
    ] {
        if let Some(value) = value {
            if value.trim().is_empty() {
                return Err(BackendError::bad_request(format!(
                    "Event {} cannot be blank",
                    label
                )));
            }
        }
    }

    let category = match &request.category {
        Some(label) => parse_category(label)?,
        None => current.category,
    };

    Ok(EventChanges {
        name: request.name.unwrap_or_else(|| current.name.clone()),
        description: request
            .description
            .unwrap_or_else(|| current.description.clone()),
        date: request.date.unwrap_or(current.date),
        time: request.time.unwrap_or_else(|| current.time.clone()),
        location: request.location.unwrap_or_else(|| current.location.clone()),
        category,
        // Absent keeps the current image; an explicit null clears it
        image: match request.image {
            Some(image) => image,
            None => current.image.clone(),
        },
    })
}

/// GET /api/events - list events, newest date last
///
/// Public. `?category=` filters exactly, `?date=` keeps events on or
/// after the given calendar date.
pub async fn list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<EventDto>>, BackendError> {
    let pool = pool(&state)?;

    // Reject unknown categories with a 400 instead of an empty list
    if let Some(label) = &filter.category {
        parse_category(label)?;
    }

    let events = db::list_events(pool, filter.category.as_deref(), filter.date_from()).await?;
    tracing::debug!("Listed {} events", events.len());
    Ok(Json(events))
}

/// GET /api/events/{id} - fetch one event
///
/// Public.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDto>, BackendError> {
    let pool = pool(&state)?;
    let event = require_event(pool, id).await?;
    Ok(Json(event))
}

/// POST /api/events - create an event
///
/// The authenticated user becomes the creator. Broadcasts `newEvent` to
/// every connected client.
pub async fn create_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<EventDto>), BackendError> {
    let pool = pool(&state)?;
    let category = validate_create(&request)?;

    let event = db::create_event(
        pool,
        user.user_id,
        EventChanges {
            name: request.name.trim().to_string(),
            description: request.description,
            date: request.date,
            time: request.time,
            location: request.location,
            category,
            image: request.image,
        },
    )
    .await?;

    tracing::info!("Event created: {} ({})", event.name, event.id);

    broadcast_event(
        &state.realtime,
        Scope::All,
        ServerEvent::NewEvent {
            message: format!("New event \"{}\" has been created!", event.name),
            event: event.clone(),
        },
    )
    .await;

    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{id} - edit an event
///
/// Only the creator may edit. Broadcasts the updated document as
/// `eventUpdated` with `type: eventModified`.
pub async fn update_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEventRequest>,
) -> Result<Json<EventDto>, BackendError> {
    let pool = pool(&state)?;

    let current = require_event(pool, id).await?;
    if current.creator.id != user.user_id {
        return Err(BackendError::forbidden("You can only modify your own events"));
    }

    let changes = merge_changes(&current, request)?;
    let updated = db::update_event(pool, id, changes).await?;

    tracing::info!("Event updated: {} ({})", updated.name, updated.id);

    notify_room_and_all(
        &state,
        id,
        ServerEvent::modified(updated.clone(), "Event has been updated"),
    )
    .await;

    Ok(Json(updated))
}

/// DELETE /api/events/{id} - cancel an event
///
/// Only the creator may cancel. Broadcasts `eventCancelled` to the
/// event's room so viewers navigate away.
pub async fn delete_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, BackendError> {
    let pool = pool(&state)?;

    let event = require_event(pool, id).await?;
    if event.creator.id != user.user_id {
        return Err(BackendError::forbidden("You can only modify your own events"));
    }

    db::delete_event(pool, id).await?;
    tracing::info!("Event cancelled: {} ({})", event.name, event.id);

    broadcast_event(
        &state.realtime,
        Scope::Room(id),
        ServerEvent::EventCancelled {
            event_id: id,
            message: format!("Event \"{}\" has been cancelled", event.name),
        },
    )
    .await;

    Ok(Json(MessageResponse {
        message: "Event cancelled successfully".to_string(),
    }))
}

/// POST /api/events/{id}/attend - join the attendee list
///
/// Broadcasts `eventUpdated` with `type: newAttendee` and the updated
/// attendee list.
pub async fn attend_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDto>, BackendError> {
    let pool = pool(&state)?;

    let mut event = require_event(pool, id).await?;
    if db::is_attending(pool, id, user.user_id).await? {
        return Err(BackendError::conflict("You are already attending this event"));
    }

    // Concurrent attends race past the check above; the unique index on
    // the join table decides, and the loser still gets a 409
    db::add_attendee(pool, id, user.user_id)
        .await
        .map_err(|e| BackendError::or_conflict(e, "You are already attending this event"))?;
    event.attendees = db::get_attendees(pool, id).await?;

    tracing::info!("User {} attends event {}", user.user_id, id);

    notify_room_and_all(
        &state,
        id,
        ServerEvent::attendance(
            UpdateKind::NewAttendee,
            id,
            event.attendees.clone(),
            "A new attendee has joined the event!",
        ),
    )
    .await;

    Ok(Json(event))
}

/// POST /api/events/{id}/unattend - leave the attendee list
///
/// Broadcasts `eventUpdated` with `type: attendeeLeft` and the updated
/// attendee list.
pub async fn unattend_event(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<EventDto>, BackendError> {
    let pool = pool(&state)?;

    let mut event = require_event(pool, id).await?;
    if !db::remove_attendee(pool, id, user.user_id).await? {
        return Err(BackendError::conflict("You are not attending this event"));
    }
    event.attendees = db::get_attendees(pool, id).await?;

    tracing::info!("User {} left event {}", user.user_id, id);

    notify_room_and_all(
        &state,
        id,
        ServerEvent::attendance(
            UpdateKind::AttendeeLeft,
            id,
            event.attendees.clone(),
            "An attendee has left the event",
        ),
    )
    .await;

    Ok(Json(event))
}
