/**
 * Room Membership Registry
 *
 * Tracks how many websocket connections are currently in each event's
 * room. The counts back the `viewerCount` broadcast: joining or leaving a
 * room changes the count and the new value is pushed to the room.
 *
 * The registry is shared state, cloned into every connection handler.
 * Entries disappear when their count reaches zero so the map never grows
 * past the set of rooms with live viewers.
 */

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Shared per-room viewer counts
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    inner: Arc<Mutex<HashMap<Uuid, usize>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a connection joining a room, returning the new viewer count.
    pub fn join(&self, event_id: Uuid) -> usize {
        let mut rooms = self.inner.lock().unwrap();
        let count = rooms.entry(event_id).or_insert(0);
        *count += 1;
        *count
    }

    /// Record a connection leaving a room, returning the new viewer count.
    ///
    /// Leaving a room the connection never joined is a no-op at count zero.
    pub fn leave(&self, event_id: Uuid) -> usize {
        let mut rooms = self.inner.lock().unwrap();
        match rooms.get_mut(&event_id) {
            Some(count) if *count > 1 => {
                *count -= 1;
                *count
            }
            Some(_) => {
                rooms.remove(&event_id);
                0
            }
            None => 0,
        }
    }

    /// Current viewer count of a room.
    pub fn count(&self, event_id: Uuid) -> usize {
        self.inner.lock().unwrap().get(&event_id).copied().unwrap_or(0)
    }
}
