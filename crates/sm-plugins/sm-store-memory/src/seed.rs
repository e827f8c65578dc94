//! Demo profiles for local runs and tests.
//!
//! Ids are fixed (`Uuid::from_u128(1..=6)`) so the demo is reproducible.

use sm_core::models::{Gender, User, UserPreference};
use uuid::Uuid;

pub const EMMA: Uuid = Uuid::from_u128(1);
pub const MICHAEL: Uuid = Uuid::from_u128(2);
pub const SOPHIA: Uuid = Uuid::from_u128(3);
pub const JAMES: Uuid = Uuid::from_u128(4);
pub const OLIVIA: Uuid = Uuid::from_u128(5);
pub const DANIEL: Uuid = Uuid::from_u128(6);

struct Profile<'a> {
    id: Uuid,
    name: &'a str,
    age: u32,
    gender: Gender,
    bio: &'a str,
    location: &'a str,
    interests: &'a [&'a str],
    wants: (u32, u32, &'a [&'a str], u32),
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Profile<'_> {
    fn into_user(self, quota: i32) -> User {
        let (min_age, max_age, pref_interests, max_distance) = self.wants;
        User {
            id: self.id,
            name: self.name.to_string(),
            age: self.age,
            gender: self.gender,
            bio: self.bio.to_string(),
            images: vec!["/placeholder.svg".into(), "/placeholder.svg".into()],
            location: self.location.to_string(),
            interests: strings(self.interests),
            preferences: UserPreference {
                min_age,
                max_age,
                gender: match self.gender {
                    Gender::Female => Gender::Male,
                    Gender::Male => Gender::Female,
                },
                interests: strings(pref_interests),
                location: self.location.to_string(),
                max_distance,
            },
            matches_remaining: quota,
            last_match_request: None,
        }
    }
}

/// The six demo members, each starting with `quota` match requests.
pub fn demo_users(quota: i32) -> Vec<User> {
    let profiles = [
        Profile {
            id: EMMA,
            name: "Emma Johnson",
            age: 28,
            gender: Gender::Female,
            bio: "Love hiking, photography, and trying new restaurants.",
            location: "New York, NY",
            interests: &["hiking", "photography", "food"],
            wants: (27, 35, &["fitness", "travel"], 25),
        },
        Profile {
            id: MICHAEL,
            name: "Michael Davis",
            age: 31,
            gender: Gender::Male,
            bio: "Software engineer who enjoys fitness and travel.",
            location: "Boston, MA",
            interests: &["fitness", "travel", "technology"],
            wants: (25, 32, &["fitness", "art"], 20),
        },
        Profile {
            id: SOPHIA,
            name: "Sophia Martinez",
            age: 27,
            gender: Gender::Female,
            bio: "Artist and yoga instructor seeking creative connections.",
            location: "Chicago, IL",
            interests: &["art", "yoga", "music"],
            wants: (26, 34, &["art", "music"], 15),
        },
        Profile {
            id: JAMES,
            name: "James Wilson",
            age: 33,
            gender: Gender::Male,
            bio: "Finance professional who loves cooking and wine tasting.",
            location: "San Francisco, CA",
            interests: &["cooking", "wine", "hiking"],
            wants: (28, 36, &["cooking", "travel"], 30),
        },
        Profile {
            id: OLIVIA,
            name: "Olivia Lee",
            age: 29,
            gender: Gender::Female,
            bio: "Marketing specialist with a passion for literature and coffee.",
            location: "Los Angeles, CA",
            interests: &["literature", "coffee", "beaches"],
            wants: (28, 37, &["reading", "outdoors"], 25),
        },
        Profile {
            id: DANIEL,
            name: "Daniel Brown",
            age: 30,
            gender: Gender::Male,
            bio: "Architect who enjoys rock climbing and craft beer.",
            location: "Seattle, WA",
            interests: &["architecture", "rock climbing", "beer"],
            wants: (26, 33, &["outdoors", "design"], 20),
        },
    ];

    profiles.into_iter().map(|p| p.into_user(quota)).collect()
}
