//! # Policy Engine
//!
//! Coordinates the scorer, the match generator and the contact gate over an
//! injected [`Store`]. Every compound check-then-write operation runs under
//! `write_gate`, so two requests can never both pass a quota or first-contact
//! check before either one writes.

mod inbox;
mod matching;
mod messaging;
mod profiles;

use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::User;
use crate::session::Session;
use crate::settings::EngineConfig;
use crate::traits::{Clock, Store, SystemClock};

pub use matching::MatchOutcome;

/// Entry point for every exposed operation.
pub struct MatchEngine {
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
    write_gate: Mutex<()>,
}

impl MatchEngine {
    pub fn new(store: Arc<dyn Store>, config: EngineConfig) -> Self {
        Self::with_clock(store, Arc::new(SystemClock), config)
    }

    pub fn with_clock(store: Arc<dyn Store>, clock: Arc<dyn Clock>, config: EngineConfig) -> Self {
        Self {
            store,
            clock,
            config,
            write_gate: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn Store> {
        &self.store
    }

    /// Opens a session bound to `user_id`.
    pub async fn session(&self, user_id: Uuid) -> Result<Session<'_>> {
        let user = self.require_user(user_id).await?;
        Ok(Session::new(self, user.id))
    }

    pub(crate) async fn require_user(&self, id: Uuid) -> Result<User> {
        self.store
            .find_user(id)
            .await?
            .ok_or_else(|| AppError::user_not_found(id))
    }
}
