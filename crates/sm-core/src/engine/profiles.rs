//! Profile reads, preference edits and on-demand scoring.

use std::collections::HashSet;

use tracing::info;
use uuid::Uuid;

use super::MatchEngine;
use crate::error::{AppError, Result};
use crate::models::{User, UserPreference};
use crate::scoring::{self, Breakdown};

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 99;

impl MatchEngine {
    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        self.store.list_users().await
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        self.store.find_user(user_id).await
    }

    /// Compatibility of `b` for `a`, in `0..=100`.
    pub fn score_compatibility(&self, a: &User, b: &User) -> u32 {
        scoring::score(a, b)
    }

    /// Per-term breakdown for two stored users.
    pub async fn compatibility_between(&self, a: Uuid, b: Uuid) -> Result<Breakdown> {
        let a = self.require_user(a).await?;
        let b = self.require_user(b).await?;
        Ok(Breakdown::between(&a, &b))
    }

    /// Replaces a user's preferences after validating and normalising them.
    ///
    /// Interests are trimmed; blanks and duplicates are dropped.
    pub async fn update_preferences(&self, user_id: Uuid, mut preferences: UserPreference) -> Result<User> {
        validate_age_range(&preferences)?;
        preferences.interests = normalize_interests(preferences.interests);

        let _tx = self.write_gate.lock().await;
        let mut user = self.require_user(user_id).await?;
        user.preferences = preferences;
        self.store.update_user(user.clone()).await?;
        info!(user_id = %user.id, "preferences updated");
        Ok(user)
    }
}

fn validate_age_range(preferences: &UserPreference) -> Result<()> {
    let (min, max) = (preferences.min_age, preferences.max_age);
    if min < MIN_AGE || max > MAX_AGE {
        return Err(AppError::ValidationError(format!(
            "age range must lie within {MIN_AGE}..={MAX_AGE}, got {min}..={max}"
        )));
    }
    if min > max {
        return Err(AppError::ValidationError(format!(
            "minimum age {min} is above maximum age {max}"
        )));
    }
    Ok(())
}

fn normalize_interests(raw: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .filter(|i| seen.insert(i.clone()))
        .collect()
}
