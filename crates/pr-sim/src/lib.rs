//! `pr-sim`: tick loop orchestrator for the rust_pra peer-review simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① on_tick_start(tick)
//!   ② for each learner in ascending LearnerId order:
//!        respond_to(tick, pool, store)
//!          Submitted(id) → capture SubmissionEvent → on_submission
//!          Graded{..}    → capture GradeRecord     → on_graded
//!   ③ every summary_interval_ticks: on_tick_end(TickSummary)
//! on_sim_end(end_tick)
//! ```
//!
//! Everything is single-threaded.  The pool and the submission store are the
//! only state shared between learners, and each learner call gets exclusive
//! access to both for its whole transition.
//!
//! # Quick-start
//!
//! ```rust
//! use pr_core::SimConfig;
//! use pr_learner::PopulationBuilder;
//! use pr_sim::{CollectingObserver, SimBuilder};
//!
//! let profiles = PopulationBuilder::new(10, 42).build().unwrap();
//! let mut sim = SimBuilder::new(SimConfig::new(200), profiles).build().unwrap();
//! let mut obs = CollectingObserver::default();
//! sim.run(&mut obs).unwrap();
//! assert!(!obs.events.is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{CollectingObserver, NoopObserver, SimObserver, TickSummary};
pub use sim::{Outcomes, Sim};
