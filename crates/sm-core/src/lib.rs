//! sparkmatch/crates/sm-core/src/lib.rs
//!
//! The central policy logic and interface definitions for Sparkmatch:
//! compatibility scoring, match generation and the first-contact gate.

pub mod engine;
pub mod error;
pub mod models;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod traits;

#[cfg(test)]
mod test_support;

// Re-exporting for easier access in other crates
pub use engine::{MatchEngine, MatchOutcome};
pub use error::*;
pub use models::*;
pub use session::Session;
pub use settings::EngineConfig;
pub use traits::*;
