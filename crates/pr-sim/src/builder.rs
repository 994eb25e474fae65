//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use pr_core::SimConfig;
use pr_learner::{Learner, LearnerProfile};
use pr_review::{SubmissionPool, SubmissionStore};
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, review constants, summary interval
/// - `Vec<LearnerProfile>`: from the input parser or
///   [`pr_learner::PopulationBuilder`], in any order
///
/// # Optional inputs
///
/// | Method                   | Default                          |
/// |--------------------------|----------------------------------|
/// | `.summary_interval(n)`   | `config.summary_interval_ticks`  |
///
/// # Example
///
/// ```rust,ignore
/// let profiles = PopulationBuilder::new(n, seed).build()?;
/// let mut sim = SimBuilder::new(config, profiles)
///     .summary_interval(100)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    profiles: Vec<LearnerProfile>,
}

impl SimBuilder {
    pub fn new(config: SimConfig, profiles: Vec<LearnerProfile>) -> Self {
        Self { config, profiles }
    }

    /// Emit a [`TickSummary`][crate::TickSummary] every `ticks` ticks
    /// (0 disables).
    pub fn summary_interval(mut self, ticks: u64) -> Self {
        self.config.summary_interval_ticks = ticks;
        self
    }

    /// Validate inputs, order the learners by id, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config
            .review
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))?;

        // ── Learner ids must be unique ────────────────────────────────────
        let mut seen = HashSet::with_capacity(self.profiles.len());
        for p in &self.profiles {
            if !seen.insert(p.id) {
                return Err(SimError::DuplicateLearner(p.id));
            }
        }

        // ── Visitation order is ascending id ──────────────────────────────
        let mut profiles = self.profiles;
        profiles.sort_unstable_by_key(|p| p.id);
        let learners: Vec<Learner> = profiles.into_iter().map(Learner::new).collect();

        debug!(
            learners = learners.len(),
            total_ticks = self.config.total_ticks,
            "simulation built"
        );

        Ok(Sim {
            clock:       self.config.make_clock(),
            config:      self.config,
            learners,
            submissions: SubmissionStore::new(),
            pool:        SubmissionPool::new(),
        })
    }
}
