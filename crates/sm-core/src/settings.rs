//! # Engine Settings
//!
//! Limits and policy switches for the engine. Loaded from an optional TOML
//! file plus `SPARKMATCH__*` environment variables via the `config` crate.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::Gender;

pub const DEFAULT_CONFIG_FILE: &str = "sparkmatch";
pub const ENV_PREFIX: &str = "SPARKMATCH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Matches handed back to the caller per request
    pub display_limit: usize,
    /// Matches persisted per request for female requesters
    pub female_match_limit: usize,
    /// Matches persisted per request for male requesters
    pub male_match_limit: usize,
    /// Starting `matches_remaining` for seeded profiles
    pub default_daily_quota: i32,
    /// When set, a deleted match no longer blocks the same candidate
    pub rematch_after_delete: bool,
    /// When set, messages are only allowed between matched pairs
    pub require_match_for_contact: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            display_limit: 5,
            female_match_limit: 50,
            male_match_limit: 5,
            default_daily_quota: 2,
            rematch_after_delete: false,
            require_match_for_contact: false,
        }
    }
}

impl EngineConfig {
    /// Loads `<file>.toml` (if present) layered under the environment.
    ///
    /// `SPARKMATCH__DISPLAY_LIMIT=3` overrides `display_limit`.
    pub fn load(file: Option<&str>) -> Result<Self> {
        let settings = Config::builder()
            .add_source(File::with_name(file.unwrap_or(DEFAULT_CONFIG_FILE)).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: EngineConfig = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display_limit == 0 {
            return Err(AppError::Configuration("display_limit must be at least 1".into()));
        }
        if self.female_match_limit == 0 || self.male_match_limit == 0 {
            return Err(AppError::Configuration("match limits must be at least 1".into()));
        }
        Ok(())
    }

    /// How many ranked candidates a requester of `gender` gets persisted.
    pub fn match_limit(&self, gender: Gender) -> usize {
        match gender {
            Gender::Female => self.female_match_limit,
            Gender::Male => self.male_match_limit,
        }
    }
}
