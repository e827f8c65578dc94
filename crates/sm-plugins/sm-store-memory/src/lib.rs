//! # sm-store-memory
//!
//! Process-lifetime implementation of `Store`.
//! Each collection is a `Vec` behind an async `RwLock`, so list queries keep
//! insertion order. Nothing is persisted.

pub mod seed;

use async_trait::async_trait;
use sm_core::error::{AppError, Result};
use sm_core::models::{Match, Message, Notification, User};
use sm_core::traits::Store;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<User>>,
    matches: RwLock<Vec<Match>>,
    /// (requester, candidate) for every match ever stored; survives deletes
    match_history: RwLock<Vec<(Uuid, Uuid)>>,
    messages: RwLock<Vec<Message>>,
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with `users`, in the given order.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
            ..Self::default()
        }
    }
}

/// Replaces the element with the same id. Returns whether one was found.
fn replace_by<T>(items: &mut [T], record: T, same: impl Fn(&T, &T) -> bool) -> bool {
    match items.iter_mut().find(|item| same(item, &record)) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn insert_user(&self, user: User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.id == user.id) {
            return Err(AppError::Conflict(format!("user {} already exists", user.id)));
        }
        users.push(user);
        Ok(())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn update_user(&self, user: User) -> Result<bool> {
        let mut users = self.users.write().await;
        Ok(replace_by(users.as_mut_slice(), user, |a, b| a.id == b.id))
    }

    async fn insert_match(&self, record: Match) -> Result<()> {
        self.match_history
            .write()
            .await
            .push((record.user_id, record.matched_user_id));
        self.matches.write().await.push(record);
        Ok(())
    }

    async fn find_match(&self, id: Uuid) -> Result<Option<Match>> {
        Ok(self.matches.read().await.iter().find(|m| m.id == id).cloned())
    }

    async fn list_matches_for(&self, user_id: Uuid) -> Result<Vec<Match>> {
        Ok(self
            .matches
            .read()
            .await
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_matches_between(&self, a: Uuid, b: Uuid) -> Result<Vec<Match>> {
        Ok(self
            .matches
            .read()
            .await
            .iter()
            .filter(|m| m.links(a, b))
            .cloned()
            .collect())
    }

    async fn update_match(&self, record: Match) -> Result<bool> {
        let mut matches = self.matches.write().await;
        Ok(replace_by(matches.as_mut_slice(), record, |a, b| a.id == b.id))
    }

    async fn delete_match(&self, id: Uuid) -> Result<bool> {
        let mut matches = self.matches.write().await;
        match matches.iter().position(|m| m.id == id) {
            Some(index) => {
                matches.remove(index);
                debug!(match_id = %id, "match record removed");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn matched_history(&self, user_id: Uuid) -> Result<Vec<Uuid>> {
        Ok(self
            .match_history
            .read()
            .await
            .iter()
            .filter(|(requester, _)| *requester == user_id)
            .map(|(_, candidate)| *candidate)
            .collect())
    }

    async fn insert_message(&self, message: Message) -> Result<()> {
        self.messages.write().await.push(message);
        Ok(())
    }

    async fn list_messages_between(&self, a: Uuid, b: Uuid) -> Result<Vec<Message>> {
        Ok(self
            .messages
            .read()
            .await
            .iter()
            .filter(|m| m.between(a, b))
            .cloned()
            .collect())
    }

    async fn insert_notification(&self, notification: Notification) -> Result<()> {
        self.notifications.write().await.push(notification);
        Ok(())
    }

    async fn find_notification(&self, id: Uuid) -> Result<Option<Notification>> {
        Ok(self
            .notifications
            .read()
            .await
            .iter()
            .find(|n| n.id == id)
            .cloned())
    }

    async fn list_notifications_for(&self, user_id: Uuid) -> Result<Vec<Notification>> {
        Ok(self
            .notifications
            .read()
            .await
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn update_notification(&self, notification: Notification) -> Result<bool> {
        let mut notifications = self.notifications.write().await;
        Ok(replace_by(notifications.as_mut_slice(), notification, |a, b| a.id == b.id))
    }
}
