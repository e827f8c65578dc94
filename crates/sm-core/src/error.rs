//! # AppError
//!
//! Centralized error handling for the Sparkmatch engine.
//! Keeps "blocked by a rule" apart from "target does not exist" so callers can
//! render the right message.

use thiserror::Error;

/// An expected, user-facing refusal. Not a system failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    /// The daily match-request counter is at zero.
    #[error("no match requests remaining today")]
    QuotaExhausted,

    /// The requester still has uncontacted matches.
    #[error("pending matches must be handled first")]
    PendingMatches,

    /// A male user tried to open a conversation.
    #[error("contact not permitted: males cannot send the first message")]
    FirstContactNotPermitted,

    /// Messaging is restricted to matched pairs and the pair has no match.
    #[error("contact not permitted: no match between these users")]
    ContactRequiresMatch,
}

impl PolicyViolation {
    /// Short headline for the caller's UI.
    pub fn title(&self) -> &'static str {
        match self {
            PolicyViolation::QuotaExhausted => "No matches remaining today",
            PolicyViolation::PendingMatches => "You have pending matches",
            PolicyViolation::FirstContactNotPermitted
            | PolicyViolation::ContactRequiresMatch => "Message not sent",
        }
    }

    /// Longer explanation for the caller's UI.
    pub fn description(&self) -> &'static str {
        match self {
            PolicyViolation::QuotaExhausted => {
                "You've used all your matches for today. Try again tomorrow."
            }
            PolicyViolation::PendingMatches => {
                "Please respond to your current matches before finding new ones."
            }
            PolicyViolation::FirstContactNotPermitted => {
                "Males cannot initiate contact. Wait for the other person to message you first."
            }
            PolicyViolation::ContactRequiresMatch => {
                "You can only message people you have been matched with."
            }
        }
    }
}

/// The primary error type for all sm-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., User, Match, Notification)
    #[error("{0} not found with ID {1}")]
    NotFound(&'static str, String),

    /// A business rule refused the operation
    #[error("blocked by policy: {0}")]
    PolicyBlocked(#[from] PolicyViolation),

    /// Validation failure (e.g., empty message, inverted age range)
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Resource already exists (e.g., duplicate user id)
    #[error("conflict: {0}")]
    Conflict(String),

    /// Settings could not be loaded or are out of range
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Infrastructure failure (e.g., store unavailable)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn user_not_found(id: impl ToString) -> Self {
        AppError::NotFound("user", id.to_string())
    }

    /// The policy that blocked the operation, if that is what happened.
    pub fn policy(&self) -> Option<PolicyViolation> {
        match self {
            AppError::PolicyBlocked(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(..))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

/// A specialized Result type for Sparkmatch logic.
pub type Result<T> = std::result::Result<T, AppError>;
