//! # Sparkmatch Demo Binary
//!
//! Assembles the engine from the plugins selected at compile time, seeds the
//! demo profiles and plays a short session: Emma requests matches, Michael
//! tries to write first and is refused, Emma opens the conversation and
//! Michael's reply goes through.

use std::sync::Arc;

use anyhow::Context;
use sm_core::{EngineConfig, MatchEngine, MatchOutcome, Store};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "store-memory")]
use sm_store_memory::{seed, InMemoryStore};

const LOG_JSON_ENV: &str = "SPARKMATCH_LOG_JSON";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_JSON_ENV).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));

    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // 1. Load settings (sparkmatch.toml + SPARKMATCH__* overrides)
    let config = EngineConfig::load(None).context("loading engine settings")?;

    // 2. Initialize the store implementation
    let store = build_store(&config)?;

    // 3. Wrap in the engine (dynamic dispatch over the store port)
    let engine = MatchEngine::new(store, config);
    tracing::info!(
        users = engine.get_all_users().await?.len(),
        display_limit = engine.config().display_limit,
        require_match_for_contact = engine.config().require_match_for_contact,
        "sparkmatch demo starting"
    );

    run_demo(&engine).await
}

#[cfg(feature = "store-memory")]
fn build_store(config: &EngineConfig) -> anyhow::Result<Arc<dyn Store>> {
    Ok(Arc::new(InMemoryStore::with_users(seed::demo_users(
        config.default_daily_quota,
    ))))
}

#[cfg(not(feature = "store-memory"))]
fn build_store(_config: &EngineConfig) -> anyhow::Result<Arc<dyn Store>> {
    anyhow::bail!("no store plugin enabled; build with --features store-memory")
}

#[cfg(feature = "store-memory")]
async fn run_demo(engine: &MatchEngine) -> anyhow::Result<()> {
    let emma = engine.session(seed::EMMA).await?;
    let michael = engine.session(seed::MICHAEL).await?;

    match emma.find_matches().await? {
        MatchOutcome::Created(matches) => {
            let me = emma.current_user().await?;
            for m in &matches {
                if let Some(candidate) = engine.get_user_by_id(m.matched_user_id).await? {
                    let breakdown = engine.compatibility_between(me.id, candidate.id).await?;
                    tracing::info!(
                        candidate = %candidate.name,
                        score = engine.score_compatibility(&me, &candidate),
                        breakdown = %serde_json::to_string(&breakdown)?,
                        "match for Emma"
                    );
                }
            }
        }
        other => {
            let reason = other.policy().map(|p| p.description()).unwrap_or("no eligible candidates");
            tracing::warn!(reason, "no new matches for Emma");
        }
    }
    tracing::info!(
        matches_remaining = emma.current_user().await?.matches_remaining,
        "Emma's quota after the request"
    );

    match michael.send_message(seed::EMMA, "Hi Emma!").await {
        Err(err) => match err.policy() {
            Some(policy) => tracing::warn!(title = policy.title(), description = policy.description(), "message refused"),
            None => return Err(err.into()),
        },
        Ok(_) => tracing::error!("male first contact was not refused"),
    }

    emma.send_message(seed::MICHAEL, "hi").await?;
    michael.send_message(seed::EMMA, "Hi Emma, great to hear from you!").await?;

    for message in emma.conversation_with(seed::MICHAEL).await? {
        tracing::info!(from = %message.sender_id, content = %message.content, "conversation");
    }
    for note in michael.notifications().await? {
        tracing::info!(kind = note.kind.as_str(), content = %note.content, "Michael's notification");
    }

    let snapshot = serde_json::to_string_pretty(&emma.matches().await?)?;
    println!("{snapshot}");
    Ok(())
}

#[cfg(not(feature = "store-memory"))]
async fn run_demo(_engine: &MatchEngine) -> anyhow::Result<()> {
    Ok(())
}
