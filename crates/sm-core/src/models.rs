//! # Domain Models
//!
//! These structs represent the core entities of Sparkmatch.
//! We use UUID v7 for time-ordered, globally unique identification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

/// What a user is looking for. Embedded in [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    /// Inclusive lower age bound
    pub min_age: u32,
    /// Inclusive upper age bound
    pub max_age: u32,
    pub gender: Gender,
    /// Not used in scoring yet
    pub interests: Vec<String>,
    pub location: String,
    /// Not used numerically; location match is exact city equality
    pub max_distance: u32,
}

impl UserPreference {
    pub fn accepts_age(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// A member profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub bio: String,
    pub images: Vec<String>,
    /// "City, Region"
    pub location: String,
    pub interests: Vec<String>,
    pub preferences: UserPreference,
    /// Match-generation requests left; decremented once per successful request
    pub matches_remaining: i32,
    pub last_match_request: Option<DateTime<Utc>>,
}

impl User {
    /// The city part of `location`: everything before the first comma.
    pub fn city(&self) -> &str {
        self.location.split(',').next().unwrap_or_default()
    }
}

/// A directed proposal of `matched_user_id` to the requester `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub user_id: Uuid,
    pub matched_user_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub viewed: bool,
    /// Set once the pair has exchanged a message
    pub contacted: bool,
}

impl Match {
    pub fn new(user_id: Uuid, matched_user_id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            matched_user_id,
            timestamp,
            viewed: false,
            contacted: false,
        }
    }

    /// True if this match links `a` and `b`, in either direction.
    pub fn links(&self, a: Uuid, b: Uuid) -> bool {
        (self.user_id == a && self.matched_user_id == b)
            || (self.user_id == b && self.matched_user_id == a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Message {
    pub fn new(sender_id: Uuid, receiver_id: Uuid, content: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            sender_id,
            receiver_id,
            content,
            timestamp,
            read: false,
        }
    }

    /// True if this message was exchanged between `a` and `b`, in either direction.
    pub fn between(&self, a: Uuid, b: Uuid) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

/// Why a notification was raised. Serialized as `{"type": "match" | "message", ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotificationKind {
    /// The recipient was proposed to the actor by the match generator.
    Match,
    /// The actor sent the recipient a message.
    #[serde(rename_all = "camelCase")]
    Message { first_contact: bool },
}

impl NotificationKind {
    /// The wire-level type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Match => "match",
            NotificationKind::Message { .. } => "message",
        }
    }

    /// Display text shown to the recipient, given the actor's name.
    pub fn render(&self, actor_name: &str) -> String {
        match self {
            NotificationKind::Match => "You've been selected as a potential match!".to_string(),
            NotificationKind::Message { first_contact: true } => {
                format!("{actor_name} sent you a first message!")
            }
            NotificationKind::Message { first_contact: false } => {
                format!("New message from {actor_name}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    /// Recipient
    pub user_id: Uuid,
    #[serde(flatten)]
    pub kind: NotificationKind,
    /// The actor who triggered it
    pub related_user_id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Builds an unread notification for `recipient`, rendering its content from `kind`.
    pub fn new(recipient: Uuid, kind: NotificationKind, actor: &User, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id: recipient,
            kind,
            related_user_id: actor.id,
            content: kind.render(&actor.name),
            timestamp,
            read: false,
        }
    }
}
