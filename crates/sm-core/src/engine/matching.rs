//! Match generation: quota and pending gating, candidate filtering, ranking.

use std::collections::HashSet;

use tracing::{debug, info};
use uuid::Uuid;

use super::MatchEngine;
use crate::error::{AppError, PolicyViolation, Result};
use crate::models::{Match, Notification, NotificationKind, User};
use crate::scoring;

/// What a match request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// New matches were stored; holds the ones to display.
    Created(Vec<Match>),
    /// Uncontacted matches already exist; holds them unchanged.
    Pending(Vec<Match>),
    QuotaExhausted,
    /// Nobody eligible is left. The quota was not charged.
    NoCandidates,
}

impl MatchOutcome {
    /// The matches to show, whatever the outcome.
    pub fn into_matches(self) -> Vec<Match> {
        match self {
            MatchOutcome::Created(matches) | MatchOutcome::Pending(matches) => matches,
            MatchOutcome::QuotaExhausted | MatchOutcome::NoCandidates => Vec::new(),
        }
    }

    /// The rule that stopped generation, if any.
    pub fn policy(&self) -> Option<PolicyViolation> {
        match self {
            MatchOutcome::QuotaExhausted => Some(PolicyViolation::QuotaExhausted),
            MatchOutcome::Pending(_) => Some(PolicyViolation::PendingMatches),
            MatchOutcome::Created(_) | MatchOutcome::NoCandidates => None,
        }
    }
}

impl MatchEngine {
    /// Runs one match request for `user_id` and reports which path it took.
    ///
    /// Gating order: unknown user (error), quota, pending matches. Only the
    /// `Created` path writes to the store.
    pub async fn request_matches(&self, user_id: Uuid) -> Result<MatchOutcome> {
        let _tx = self.write_gate.lock().await;

        let mut user = self.require_user(user_id).await?;
        if user.matches_remaining <= 0 {
            debug!(user_id = %user.id, "match request refused: quota exhausted");
            return Ok(MatchOutcome::QuotaExhausted);
        }

        let existing = self.store.list_matches_for(user.id).await?;
        let pending: Vec<Match> = existing.iter().filter(|m| !m.contacted).cloned().collect();
        if !pending.is_empty() {
            debug!(user_id = %user.id, pending = pending.len(), "match request refused: pending matches");
            return Ok(MatchOutcome::Pending(pending));
        }

        let excluded: HashSet<Uuid> = if self.config.rematch_after_delete {
            existing.iter().map(|m| m.matched_user_id).collect()
        } else {
            self.store.matched_history(user.id).await?.into_iter().collect()
        };

        let ranked = self.rank_candidates(&user, &excluded).await?;
        if ranked.is_empty() {
            debug!(user_id = %user.id, "match request found no eligible candidates");
            return Ok(MatchOutcome::NoCandidates);
        }

        let now = self.clock.now();
        let mut created = Vec::with_capacity(ranked.len());
        for (score, candidate) in ranked {
            let record = Match::new(user.id, candidate.id, now);
            self.store.insert_match(record.clone()).await?;
            self.store
                .insert_notification(Notification::new(candidate.id, NotificationKind::Match, &user, now))
                .await?;
            debug!(user_id = %user.id, candidate_id = %candidate.id, score, "match stored");
            created.push(record);
        }

        user.matches_remaining -= 1;
        user.last_match_request = Some(now);
        info!(
            user_id = %user.id,
            created = created.len(),
            matches_remaining = user.matches_remaining,
            "generated matches"
        );
        self.store.update_user(user).await?;

        created.truncate(self.config.display_limit);
        Ok(MatchOutcome::Created(created))
    }

    /// The plain contract: new matches, the pending set, or an empty list.
    ///
    /// An unknown user, an exhausted quota and an empty candidate pool all
    /// yield `[]`. Use [`MatchEngine::request_matches`] to tell them apart.
    pub async fn generate_matches(&self, user_id: Uuid) -> Result<Vec<Match>> {
        match self.request_matches(user_id).await {
            Ok(outcome) => Ok(outcome.into_matches()),
            Err(AppError::NotFound(..)) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    /// The requester's matches in insertion order, capped at the display limit.
    pub async fn get_user_matches(&self, user_id: Uuid) -> Result<Vec<Match>> {
        let mut matches = self.store.list_matches_for(user_id).await?;
        matches.truncate(self.config.display_limit);
        Ok(matches)
    }

    /// Removes a match. Returns `false` if it did not exist.
    pub async fn delete_match(&self, match_id: Uuid) -> Result<bool> {
        let _tx = self.write_gate.lock().await;
        let removed = self.store.delete_match(match_id).await?;
        if removed {
            info!(match_id = %match_id, "match deleted");
        }
        Ok(removed)
    }

    /// Eligible candidates for `user`, best score first. Ties keep store order.
    async fn rank_candidates(&self, user: &User, excluded: &HashSet<Uuid>) -> Result<Vec<(u32, User)>> {
        let wanted = &user.preferences;
        let mut ranked: Vec<(u32, User)> = self
            .store
            .list_users()
            .await?
            .into_iter()
            .filter(|c| c.id != user.id)
            .filter(|c| c.gender == wanted.gender && wanted.accepts_age(c.age))
            .filter(|c| !excluded.contains(&c.id))
            .map(|c| (scoring::score(user, &c), c))
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.truncate(self.config.match_limit(user.gender));
        Ok(ranked)
    }
}
