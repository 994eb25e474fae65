//! Run configuration.
//!
//! The review constants are an explicit value handed to every component that
//! needs them; nothing reads them from global state.

use crate::{PrError, PrResult, SimClock, Tick};

// ── ReviewConfig ──────────────────────────────────────────────────────────────

/// Constants of the peer-review workflow, fixed for the whole run.
///
/// `Default` gives the classic course setup: three reviews per submission,
/// three reviews owed per learner, a 240-point pass mark, 50 ticks of work
/// and 20 ticks per review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReviewConfig {
    /// Reviews a submission needs before it can be graded.
    pub reviews_per_submission: usize,

    /// Reviews a learner must complete per cycle before waiting for a grade.
    pub reviews_per_learner: usize,

    /// Minimum score for a passing grade.
    pub passing_points: i64,

    /// Ticks of work before a submission is complete.
    pub work_ticks: u64,

    /// Ticks one review takes.
    pub review_ticks: u64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            reviews_per_submission: 3,
            reviews_per_learner:    3,
            passing_points:         240,
            work_ticks:             50,
            review_ticks:           20,
        }
    }
}

impl ReviewConfig {
    /// Reject configurations under which the workflow cannot make progress.
    ///
    /// `reviews_per_learner = 0` is allowed: learners then wait for their
    /// grade straight after submitting.
    pub fn validate(&self) -> PrResult<()> {
        if self.reviews_per_submission == 0 {
            return Err(PrError::Config(
                "reviews_per_submission must be at least 1".into(),
            ));
        }
        if self.work_ticks == 0 {
            return Err(PrError::Config("work_ticks must be at least 1".into()));
        }
        if self.review_ticks == 0 {
            return Err(PrError::Config("review_ticks must be at least 1".into()));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate; the run covers `0..total_ticks`.
    pub total_ticks: u64,

    /// Workflow constants.
    pub review: ReviewConfig,

    /// Report a tick summary every N ticks.  0 disables summaries.
    pub summary_interval_ticks: u64,
}

impl SimConfig {
    /// Config with default review constants and no tick summaries.
    pub fn new(total_ticks: u64) -> Self {
        Self {
            total_ticks,
            review: ReviewConfig::default(),
            summary_interval_ticks: 0,
        }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new()
    }
}
