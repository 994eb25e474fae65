//! `pr-learner`: the learner finite-state machine.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`state`]      | `LearnerState` enum                                         |
//! | [`profile`]    | `LearnerProfile`: fixed per-learner inputs                  |
//! | [`context`]    | `ReviewContext<'a>`: the shared state a transition touches  |
//! | [`learner`]    | `Learner`, `Transition`                                     |
//! | [`population`] | `PopulationBuilder`: seeded synthetic profiles              |
//! | [`error`]      | `LearnerError`, `LearnerResult<T>`                          |
//!
//! # Design notes
//!
//! A learner is driven by exactly one call per tick,
//! [`Learner::respond_to`].  The call runs to completion and may read and
//! write the shared pool and submission store through the
//! [`ReviewContext`]; it never blocks and never yields.  Which learner is
//! called first within a tick is the simulator's business (ascending id).

pub mod context;
pub mod error;
pub mod learner;
pub mod population;
pub mod profile;
pub mod state;

#[cfg(test)]
mod tests;

pub use context::ReviewContext;
pub use error::{LearnerError, LearnerResult};
pub use learner::{Learner, Transition};
pub use population::PopulationBuilder;
pub use profile::LearnerProfile;
pub use state::LearnerState;
