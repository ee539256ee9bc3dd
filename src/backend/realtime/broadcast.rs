/**
 * Real-time Event Broadcasting
 *
 * This module provides utilities for broadcasting real-time events to
 * connected websocket clients. It includes the broadcast type definition,
 * the delivery scope, and the broadcast helper function.
 *
 * # Broadcasting
 *
 * Events are broadcast using `tokio::sync::broadcast`, which provides a
 * multi-producer, multi-consumer channel. Every websocket connection
 * subscribes to the same channel; the [`Scope`] attached to each event
 * tells the connection whether the event is for it.
 */

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::shared::ServerEvent;

/// Delivery scope of a broadcast event
///
/// - `All` - every connected client (e.g. `newEvent`)
/// - `Room(event_id)` - only clients that joined that event's room
///   (e.g. `eventCancelled`, `viewerCount`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Room(Uuid),
}

/// Real-time event broadcast channel
///
/// This type can be cloned and shared across handlers to allow
/// broadcasting events from anywhere in the application.
pub type EventBroadcast = broadcast::Sender<(Scope, ServerEvent)>;

/// Broadcast a real-time event to all subscribed connections
///
/// Connections apply the scope filter themselves; this function only puts
/// the event on the channel.
///
/// # Returns
///
/// Number of active subscribers that received the event (0 if no subscribers)
pub async fn broadcast_event(broadcast_tx: &EventBroadcast, scope: Scope, event: ServerEvent) -> usize {
    match broadcast_tx.send((scope, event)) {
        Ok(subscriber_count) => {
            tracing::debug!("[Realtime] Event broadcast to {} subscribers", subscriber_count);
            subscriber_count
        }
        Err(e) => {
            // No subscribers, that's okay
            tracing::debug!("[Realtime] No subscribers to receive event: {:?}", e);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_broadcast_event_with_subscriber() {
        let (tx, mut rx) = broadcast::channel::<(Scope, ServerEvent)>(100);

        let event_id = Uuid::new_v4();
        let count = broadcast_event(&tx, Scope::Room(event_id), ServerEvent::ViewerCount {
            event_id,
            count: 3,
        })
        .await;
        assert_eq!(count, 1);

        let (scope, event) = rx.recv().await.unwrap();
        assert_eq!(scope, Scope::Room(event_id));
        assert_eq!(event.event_id(), Some(event_id));
    }

    #[tokio::test]
    async fn test_broadcast_event_no_subscribers() {
        let (tx, _) = broadcast::channel::<(Scope, ServerEvent)>(100);
        drop(tx.subscribe());

        let event_id = Uuid::new_v4();
        let count = broadcast_event(&tx, Scope::All, ServerEvent::EventCancelled {
            event_id,
            message: "Event cancelled".to_string(),
        })
        .await;

        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_broadcast_multiple_subscribers() {
        let (tx, _rx) = broadcast::channel::<(Scope, ServerEvent)>(100);
        let mut sub1 = tx.subscribe();
        let mut sub2 = tx.subscribe();

        let event_id = Uuid::new_v4();
        let count = broadcast_event(&tx, Scope::Room(event_id), ServerEvent::ViewerCount {
            event_id,
            count: 1,
        })
        .await;

        assert_eq!(count, 3);
        assert!(sub1.recv().await.is_ok());
        assert!(sub2.recv().await.is_ok());
    }
}
