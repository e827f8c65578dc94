use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Gender, User, UserPreference};
use crate::traits::MockClock;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 6, 14, 30, 0).unwrap()
}

pub fn fixed_clock() -> MockClock {
    let mut clock = MockClock::new();
    clock.expect_now().return_const(fixed_now());
    clock
}

/// A user open to every age, with no interests.
pub fn user(name: &str, age: u32, gender: Gender, wants: Gender) -> User {
    User {
        id: Uuid::now_v7(),
        name: name.to_string(),
        age,
        gender,
        bio: String::new(),
        images: vec![],
        location: "New York, NY".into(),
        interests: vec![],
        preferences: UserPreference {
            min_age: 18,
            max_age: 99,
            gender: wants,
            interests: vec![],
            location: "New York, NY".into(),
            max_distance: 25,
        },
        matches_remaining: 2,
        last_match_request: None,
    }
}
