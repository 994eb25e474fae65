//! Shared simulation state handed to every learner transition.

use pr_core::ReviewConfig;
use pr_review::{SubmissionPool, SubmissionStore};

/// Mutable view of the state shared by all learners during one tick.
///
/// Built by the simulator for each learner call from explicit field borrows,
/// so a transition can only touch the pool and the store, never another
/// learner.
pub struct ReviewContext<'a> {
    /// Workflow constants for the run.
    pub config:      &'a ReviewConfig,

    /// Submissions awaiting review.
    pub pool:        &'a mut SubmissionPool,

    /// Owner of every submission of the run.
    pub submissions: &'a mut SubmissionStore,
}

impl<'a> ReviewContext<'a> {
    #[inline]
    pub fn new(
        config:      &'a ReviewConfig,
        pool:        &'a mut SubmissionPool,
        submissions: &'a mut SubmissionStore,
    ) -> Self {
        Self { config, pool, submissions }
    }
}
