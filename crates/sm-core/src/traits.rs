//! # Core Traits (Ports)
//!
//! Any storage plugin must implement these traits to be used by the engine.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Match, Message, Notification, User};

/// Record store for users, matches, messages and notifications.
///
/// List methods return records in insertion order. `update_*` methods replace
/// the stored record with the same id and return whether one existed.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait Store: Send + Sync {
    // User Operations
    async fn insert_user(&self, user: User) -> Result<()>;
    async fn find_user(&self, id: Uuid) -> Result<Option<User>>;
    async fn list_users(&self) -> Result<Vec<User>>;
    async fn update_user(&self, user: User) -> Result<bool>;

    // Match Operations
    async fn insert_match(&self, record: Match) -> Result<()>;
    async fn find_match(&self, id: Uuid) -> Result<Option<Match>>;
    /// Matches requested by `user_id`.
    async fn list_matches_for(&self, user_id: Uuid) -> Result<Vec<Match>>;
    /// Matches linking `a` and `b`, in either direction.
    async fn list_matches_between(&self, a: Uuid, b: Uuid) -> Result<Vec<Match>>;
    async fn update_match(&self, record: Match) -> Result<bool>;
    async fn delete_match(&self, id: Uuid) -> Result<bool>;
    /// Every candidate ever matched to `user_id`, including deleted matches.
    async fn matched_history(&self, user_id: Uuid) -> Result<Vec<Uuid>>;

    // Message Operations
    async fn insert_message(&self, message: Message) -> Result<()>;
    /// Messages exchanged between `a` and `b`, in either direction.
    async fn list_messages_between(&self, a: Uuid, b: Uuid) -> Result<Vec<Message>>;

    // Notification Operations
    async fn insert_notification(&self, notification: Notification) -> Result<()>;
    async fn find_notification(&self, id: Uuid) -> Result<Option<Notification>>;
    async fn list_notifications_for(&self, user_id: Uuid) -> Result<Vec<Notification>>;
    async fn update_notification(&self, notification: Notification) -> Result<bool>;
}

/// Source of "now" for timestamps.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
