//! Contact gate: who may write to whom, and the side effects of a sent message.

use tracing::{info, warn};
use uuid::Uuid;

use super::MatchEngine;
use crate::error::{AppError, PolicyViolation, Result};
use crate::models::{Gender, Message, Notification, NotificationKind};

impl MatchEngine {
    /// Sends `content` from `sender_id` to `receiver_id`.
    ///
    /// The first message between two users may not come from a male sender.
    /// On success the receiver is notified and every match linking the pair
    /// is marked contacted.
    pub async fn send_message(&self, sender_id: Uuid, receiver_id: Uuid, content: &str) -> Result<Message> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError("message content is empty".into()));
        }
        if sender_id == receiver_id {
            return Err(AppError::ValidationError("cannot send a message to yourself".into()));
        }

        let _tx = self.write_gate.lock().await;

        let sender = self.require_user(sender_id).await?;
        let receiver = self.require_user(receiver_id).await?;

        let first_contact = self
            .store
            .list_messages_between(sender.id, receiver.id)
            .await?
            .is_empty();
        if first_contact && sender.gender == Gender::Male {
            warn!(sender_id = %sender.id, receiver_id = %receiver.id, "first contact refused");
            return Err(PolicyViolation::FirstContactNotPermitted.into());
        }

        let pair_matches = self.store.list_matches_between(sender.id, receiver.id).await?;
        if self.config.require_match_for_contact && pair_matches.is_empty() {
            warn!(sender_id = %sender.id, receiver_id = %receiver.id, "contact refused: no match");
            return Err(PolicyViolation::ContactRequiresMatch.into());
        }

        let now = self.clock.now();
        let message = Message::new(sender.id, receiver.id, content.to_string(), now);
        self.store.insert_message(message.clone()).await?;
        self.store
            .insert_notification(Notification::new(
                receiver.id,
                NotificationKind::Message { first_contact },
                &sender,
                now,
            ))
            .await?;

        for mut record in pair_matches.into_iter().filter(|m| !m.contacted) {
            record.contacted = true;
            self.store.update_match(record).await?;
        }

        info!(
            message_id = %message.id,
            sender_id = %sender.id,
            receiver_id = %receiver.id,
            first_contact,
            "message sent"
        );
        Ok(message)
    }
}
