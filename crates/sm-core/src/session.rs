//! # Session
//!
//! A request context bound to one signed-in user. Replaces a process-wide
//! "current user": every operation names its actor explicitly, and switching
//! users means opening a new session.

use std::fmt;

use uuid::Uuid;

use crate::engine::{MatchEngine, MatchOutcome};
use crate::error::Result;
use crate::models::{Match, Message, Notification, User, UserPreference};

pub struct Session<'e> {
    engine: &'e MatchEngine,
    user_id: Uuid,
}

impl fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("user_id", &self.user_id).finish_non_exhaustive()
    }
}

impl<'e> Session<'e> {
    pub(crate) fn new(engine: &'e MatchEngine, user_id: Uuid) -> Self {
        Self { engine, user_id }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// A fresh copy of the signed-in user (quota, preferences...).
    pub async fn current_user(&self) -> Result<User> {
        self.engine.require_user(self.user_id).await
    }

    pub async fn find_matches(&self) -> Result<MatchOutcome> {
        self.engine.request_matches(self.user_id).await
    }

    pub async fn matches(&self) -> Result<Vec<Match>> {
        self.engine.get_user_matches(self.user_id).await
    }

    /// Deletes one of this user's own matches. Other users' matches are left
    /// alone and reported as not found.
    pub async fn delete_match(&self, match_id: Uuid) -> Result<bool> {
        match self.engine.store().find_match(match_id).await? {
            Some(record) if record.user_id == self.user_id => self.engine.delete_match(match_id).await,
            _ => Ok(false),
        }
    }

    pub async fn send_message(&self, receiver_id: Uuid, content: &str) -> Result<Message> {
        self.engine.send_message(self.user_id, receiver_id, content).await
    }

    pub async fn conversation_with(&self, other: Uuid) -> Result<Vec<Message>> {
        self.engine.get_conversation(self.user_id, other).await
    }

    /// This user's notifications, newest first.
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        let mut notifications = self.engine.get_user_notifications(self.user_id).await?;
        notifications.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(notifications)
    }

    /// Marks one of this user's notifications as read.
    pub async fn mark_notification_as_read(&self, notification_id: Uuid) -> Result<bool> {
        match self.engine.store().find_notification(notification_id).await? {
            Some(n) if n.user_id == self.user_id => {
                self.engine.mark_notification_as_read(notification_id).await
            }
            _ => Ok(false),
        }
    }

    pub async fn update_preferences(&self, preferences: UserPreference) -> Result<User> {
        self.engine.update_preferences(self.user_id, preferences).await
    }
}
