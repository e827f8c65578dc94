//! # Compatibility Scoring
//!
//! Additive 0-100 score between two users. Pure; no store access.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::User;

pub const MAX_SCORE: u32 = 100;

const AGE_FIT_POINTS: u32 = 15;
const GENDER_FIT_POINTS: u32 = 20;
const INTEREST_POINTS: u32 = 30;
const LOCATION_POINTS: u32 = 20;

/// Per-term contributions of a score, before the cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Breakdown {
    /// `b`'s age is inside `a`'s preferred range
    pub age_fit_a: u32,
    /// `a`'s age is inside `b`'s preferred range
    pub age_fit_b: u32,
    pub gender: u32,
    pub interests: u32,
    pub location: u32,
}

impl Breakdown {
    pub fn between(a: &User, b: &User) -> Self {
        let mutual_gender = a.preferences.gender == b.gender && b.preferences.gender == a.gender;

        Self {
            age_fit_a: points_if(a.preferences.accepts_age(b.age), AGE_FIT_POINTS),
            age_fit_b: points_if(b.preferences.accepts_age(a.age), AGE_FIT_POINTS),
            gender: points_if(mutual_gender, GENDER_FIT_POINTS),
            interests: interest_points(&a.interests, &b.interests),
            location: points_if(a.city() == b.city(), LOCATION_POINTS),
        }
    }

    /// Sum of all terms, capped at [`MAX_SCORE`].
    pub fn total(&self) -> u32 {
        let sum = self.age_fit_a + self.age_fit_b + self.gender + self.interests + self.location;
        sum.min(MAX_SCORE)
    }
}

/// Compatibility of `b` for `a`, in `0..=100`.
pub fn score(a: &User, b: &User) -> u32 {
    Breakdown::between(a, b).total()
}

fn points_if(cond: bool, points: u32) -> u32 {
    if cond {
        points
    } else {
        0
    }
}

/// `floor(30 * |A ∩ B| / max(|A|, |B|))` over de-duplicated sets; 0 when both are empty.
fn interest_points(a: &[String], b: &[String]) -> u32 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let larger = a.len().max(b.len());
    if larger == 0 {
        return 0;
    }
    let shared = a.intersection(&b).count();
    // shared <= larger, so this never exceeds INTEREST_POINTS
    (INTEREST_POINTS as usize * shared / larger) as u32
}
