//! Shared fixtures for the engine integration tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use sm_core::models::{Gender, User, UserPreference};
use sm_core::traits::MockClock;
use sm_core::{EngineConfig, MatchEngine};
use sm_store_memory::{seed, InMemoryStore};
use uuid::Uuid;

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 9, 0, 0).unwrap()
}

/// A clock that moves forward one second on every read, starting at [`epoch`].
pub fn stepping_clock() -> MockClock {
    let ticks = AtomicI64::new(0);
    let mut clock = MockClock::new();
    clock
        .expect_now()
        .returning(move || epoch() + Duration::seconds(ticks.fetch_add(1, Ordering::SeqCst)));
    clock
}

/// A member in Denver who wants the opposite gender at any adult age.
pub fn person(name: &str, age: u32, gender: Gender) -> User {
    User {
        id: Uuid::now_v7(),
        name: name.to_string(),
        age,
        gender,
        bio: format!("{name}'s bio"),
        images: vec![],
        location: "Denver, CO".into(),
        interests: vec![],
        preferences: UserPreference {
            min_age: 18,
            max_age: 99,
            gender: match gender {
                Gender::Female => Gender::Male,
                Gender::Male => Gender::Female,
            },
            interests: vec![],
            location: "Denver, CO".into(),
            max_distance: 25,
        },
        matches_remaining: 2,
        last_match_request: None,
    }
}

/// Engine over an in-memory store holding `users`; the store is returned too
/// so tests can inspect or seed records directly.
pub fn engine_with(users: Vec<User>, config: EngineConfig) -> (Arc<InMemoryStore>, MatchEngine) {
    let store = Arc::new(InMemoryStore::with_users(users));
    let engine = MatchEngine::with_clock(store.clone(), Arc::new(stepping_clock()), config);
    (store, engine)
}

/// Engine over the six demo profiles with default settings.
pub fn demo_engine() -> (Arc<InMemoryStore>, MatchEngine) {
    engine_with(seed::demo_users(2), EngineConfig::default())
}
