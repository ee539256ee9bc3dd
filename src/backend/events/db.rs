//! Database operations for events
//!
//! This module contains the event queries: CRUD on the `events` table plus
//! attendee membership in `event_attendees`. Reads resolve the creator
//! reference and populate the attendee list as user summaries, so callers
//! always get a fully-populated [`EventDto`].

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::models::{EventCategory, EventDto, UserSummary};

/// Shared SELECT head joining each event to its creator.
const EVENT_SELECT: &str = r#"
    SELECT e.id, e.name, e.description, e.date, e.time, e.location, e.category,
           e.image, e.created_at, e.updated_at,
           u.id AS creator_id, u.name AS creator_name, u.email AS creator_email,
           u.created_at AS creator_created_at
    FROM events e
    JOIN users u ON u.id = e.creator_id
"#;

/// The mutable fields of an event, merged and validated by the handler.
#[derive(Debug, Clone)]
pub struct EventChanges {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub category: EventCategory,
    pub image: Option<String>,
}

/// Decode one joined row into an event with an empty attendee list.
fn row_to_event(row: &sqlx::postgres::PgRow) -> Result<EventDto, sqlx::Error> {
    let category_label: String = row.get("category");
    let category = EventCategory::parse(&category_label).ok_or_else(|| {
        sqlx::Error::Decode(format!("unknown event category in database: {}", category_label).into())
    })?;

    Ok(EventDto {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        date: row.get("date"),
        time: row.get("time"),
        location: row.get("location"),
        category,
        image: row.get("image"),
        creator: UserSummary {
            id: row.get("creator_id"),
            name: row.get("creator_name"),
            email: row.get("creator_email"),
            created_at: row.get("creator_created_at"),
        },
        attendees: Vec::new(),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

/// List events, optionally filtered by category and/or a lower date bound,
/// with creators resolved and attendee lists populated.
pub async fn list_events(
    pool: &PgPool,
    category: Option<&str>,
    date_from: Option<DateTime<Utc>>,
) -> Result<Vec<EventDto>, sqlx::Error> {
    let sql = format!(
        "{EVENT_SELECT}
        WHERE ($1::text IS NULL OR e.category = $1)
          AND ($2::timestamptz IS NULL OR e.date >= $2)
        ORDER BY e.date ASC"
    );

    let rows = sqlx::query(&sql)
        .bind(category)
        .bind(date_from)
        .fetch_all(pool)
        .await?;

    let mut events = rows
        .iter()
        .map(row_to_event)
        .collect::<Result<Vec<_>, _>>()?;

    // Populate attendee lists in one batched query
    let ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
    let mut attendees = attendees_for_events(pool, &ids).await?;
    for event in &mut events {
        if let Some(list) = attendees.remove(&event.id) {
            event.attendees = list;
        }
    }

    Ok(events)
}

/// Get a single event by id, populated, or None if it does not exist.
pub async fn get_event(pool: &PgPool, id: Uuid) -> Result<Option<EventDto>, sqlx::Error> {
    let sql = format!("{EVENT_SELECT} WHERE e.id = $1");

    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    let Some(row) = row else {
        return Ok(None);
    };

    let mut event = row_to_event(&row)?;
    event.attendees = get_attendees(pool, id).await?;
    Ok(Some(event))
}

/// Insert a new event and return it populated.
pub async fn create_event(
    pool: &PgPool,
    creator_id: Uuid,
    changes: EventChanges,
) -> Result<EventDto, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO events (id, name, description, date, time, location, category,
                            image, creator_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(id)
    .bind(&changes.name)
    .bind(&changes.description)
    .bind(changes.date)
    .bind(&changes.time)
    .bind(&changes.location)
    .bind(changes.category.as_str())
    .bind(&changes.image)
    .bind(creator_id)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    get_event(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Overwrite the mutable fields of an event and return it populated.
pub async fn update_event(
    pool: &PgPool,
    id: Uuid,
    changes: EventChanges,
) -> Result<EventDto, sqlx::Error> {
    let now = Utc::now();

    sqlx::query(
        r#"
        UPDATE events
        SET name = $1, description = $2, date = $3, time = $4, location = $5,
            category = $6, image = $7, updated_at = $8
        WHERE id = $9
        "#,
    )
    .bind(&changes.name)
    .bind(&changes.description)
    .bind(changes.date)
    .bind(&changes.time)
    .bind(&changes.location)
    .bind(changes.category.as_str())
    .bind(&changes.image)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    get_event(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}

/// Delete an event. Attendee rows cascade at the database.
pub async fn delete_event(pool: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM events WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Whether a user is on the attendee list of an event.
pub async fn is_attending(
    pool: &PgPool,
    event_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let row = sqlx::query(
        "SELECT EXISTS(SELECT 1 FROM event_attendees WHERE event_id = $1 AND user_id = $2)",
    )
    .bind(event_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<bool, _>(0))
}

/// Append a user to the attendee list.
pub async fn add_attendee(
    pool: &PgPool,
    event_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO event_attendees (event_id, user_id, joined_at) VALUES ($1, $2, $3)",
    )
    .bind(event_id)
    .bind(user_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;
    Ok(())
}

/// Remove a user from the attendee list. Returns true if a row was removed.
pub async fn remove_attendee(
    pool: &PgPool,
    event_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM event_attendees WHERE event_id = $1 AND user_id = $2")
        .bind(event_id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Attendees of one event as user summaries, in join order.
pub async fn get_attendees(pool: &PgPool, event_id: Uuid) -> Result<Vec<UserSummary>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT u.id, u.name, u.email, u.created_at
        FROM event_attendees ea
        JOIN users u ON u.id = ea.user_id
        WHERE ea.event_id = $1
        ORDER BY ea.joined_at ASC
        "#,
    )
    .bind(event_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| UserSummary {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Attendees for a batch of events, keyed by event id.
async fn attendees_for_events(
    pool: &PgPool,
    event_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<UserSummary>>, sqlx::Error> {
    if event_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = sqlx::query(
        r#"
        SELECT ea.event_id, u.id, u.name, u.email, u.created_at
        FROM event_attendees ea
        JOIN users u ON u.id = ea.user_id
        WHERE ea.event_id = ANY($1)
        ORDER BY ea.joined_at ASC
        "#,
    )
    .bind(event_ids)
    .fetch_all(pool)
    .await?;

    let mut map: HashMap<Uuid, Vec<UserSummary>> = HashMap::new();
    for row in rows {
        let event_id: Uuid = row.get("event_id");
        map.entry(event_id).or_default().push(UserSummary {
            id: row.get("id"),
            name: row.get("name"),
            email: row.get("email"),
            created_at: row.get("created_at"),
        });
    }

    Ok(map)
}
