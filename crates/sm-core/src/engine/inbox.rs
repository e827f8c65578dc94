//! Conversation and notification readers.

use tracing::debug;
use uuid::Uuid;

use super::MatchEngine;
use crate::error::Result;
use crate::models::{Message, Notification};

impl MatchEngine {
    /// Every message between `a` and `b`, oldest first.
    pub async fn get_conversation(&self, a: Uuid, b: Uuid) -> Result<Vec<Message>> {
        let mut messages = self.store.list_messages_between(a, b).await?;
        // stable: equal timestamps keep insertion order
        messages.sort_by_key(|m| m.timestamp);
        Ok(messages)
    }

    /// Notifications addressed to `user_id`, in store order.
    pub async fn get_user_notifications(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        self.store.list_notifications_for(user_id).await
    }

    /// Flags a notification as read. Returns `false` if it does not exist.
    pub async fn mark_notification_as_read(&self, notification_id: Uuid) -> Result<bool> {
        let _tx = self.write_gate.lock().await;

        let Some(mut notification) = self.store.find_notification(notification_id).await? else {
            return Ok(false);
        };
        if !notification.read {
            notification.read = true;
            self.store.update_notification(notification).await?;
            debug!(notification_id = %notification_id, "notification marked read");
        }
        Ok(true)
    }
}
