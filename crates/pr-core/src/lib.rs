//! `pr-core`: foundational types for the `rust_pra` peer-review simulator.
//!
//! This crate is a dependency of every other `pr-*` crate.  It has no `pr-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `LearnerId`, `SubmissionId`                            |
//! | [`time`]   | `Tick`, `SimClock`                                     |
//! | [`config`] | `ReviewConfig`, `SimConfig`                            |
//! | [`rng`]    | `LearnerRng` (seeded per learner)                      |
//! | [`error`]  | `PrError`, `PrResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ReviewConfig, SimConfig};
pub use error::{PrError, PrResult};
pub use ids::{LearnerId, SubmissionId};
pub use rng::LearnerRng;
pub use time::{SimClock, Tick};
