//! The `Sim` struct and its tick loop.

use pr_core::{LearnerId, SimClock, SimConfig, Tick};
use pr_learner::{Learner, ReviewContext, Transition};
use pr_review::{GradeRecord, SubmissionEvent, SubmissionPool, SubmissionState, SubmissionStore};
use tracing::debug;

use crate::{SimObserver, SimResult, TickSummary};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Course results at the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcomes {
    pub learners:      usize,
    /// Learners whose latest attempt was graded passing.
    pub passed:        usize,
    /// Failing grades handed out so far, across all attempts.
    pub failed_grades: usize,
    /// Attempts created so far, across all learners.
    pub submissions:   usize,
}

// ── Per-tick tallies ──────────────────────────────────────────────────────────

#[derive(Default)]
struct TickCounts {
    events: usize,
    graded: usize,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds the learners (sorted by id), the store that owns every submission,
/// and the review pool.  Each tick visits every learner exactly once, in
/// ascending id order, and forwards what they produce to the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, review constants, summaries).
    pub config: SimConfig,

    /// Logical clock: the next tick to process.
    pub clock: SimClock,

    pub(crate) learners:    Vec<Learner>,
    pub(crate) submissions: SubmissionStore,
    pub(crate) pool:        SubmissionPool,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        debug!(from = self.clock.current_tick.0, to = self.config.total_ticks, "run started");
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        debug!(tick = self.clock.current_tick.0, submissions = self.submissions.len(), "run finished");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Learners in visitation (ascending id) order.
    #[inline]
    pub fn learners(&self) -> &[Learner] {
        &self.learners
    }

    pub fn learner(&self, id: LearnerId) -> Option<&Learner> {
        self.learners
            .binary_search_by_key(&id, |l| l.id())
            .ok()
            .map(|i| &self.learners[i])
    }

    #[inline]
    pub fn submissions(&self) -> &SubmissionStore {
        &self.submissions
    }

    #[inline]
    pub fn pool(&self) -> &SubmissionPool {
        &self.pool
    }

    /// Pass/fail tallies over the whole population.
    pub fn outcomes(&self) -> Outcomes {
        let passed = self
            .learners
            .iter()
            .filter_map(|l| l.current_submission())
            .filter_map(|id| self.submissions.get(id).ok())
            .filter(|s| s.state == SubmissionState::Passing)
            .count();
        let failed_grades = self
            .submissions
            .iter()
            .filter(|s| s.state == SubmissionState::Failing)
            .count();
        Outcomes {
            learners: self.learners.len(),
            passed,
            failed_grades,
            submissions: self.submissions.len(),
        }
    }

    /// Snapshot of the population as it stands now.
    pub fn summary(&self, tick: Tick) -> TickSummary {
        let mut learners = [0usize; 5];
        for l in &self.learners {
            learners[l.state().index()] += 1;
        }
        TickSummary {
            tick,
            pool_size: self.pool.len(),
            events:    0,
            graded:    0,
            learners,
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let counts = self.process_tick(now, observer)?;

        let interval = self.config.summary_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            let summary = TickSummary {
                events: counts.events,
                graded: counts.graded,
                ..self.summary(now)
            };
            observer.on_tick_end(&summary);
        }

        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<TickCounts> {
        let mut counts = TickCounts::default();
        // Explicit field borrows so the borrow checker sees disjoint access.
        let cfg = &self.config.review;

        for learner in &mut self.learners {
            let mut ctx = ReviewContext::new(cfg, &mut self.pool, &mut self.submissions);
            match learner.respond_to(now, &mut ctx)? {
                Transition::Quiet => {}

                // ── Hand-in: the event written to the output ──────────────
                Transition::Submitted(id) => {
                    let sub = self.submissions.get(id)?;
                    observer.on_submission(&SubmissionEvent::capture(sub, now, cfg));
                    counts.events += 1;
                }

                // ── Grade: observer-only notification ─────────────────────
                Transition::Graded { submission, .. } => {
                    let sub = self.submissions.get(submission)?;
                    if let Some(record) = GradeRecord::capture(sub, now, cfg) {
                        observer.on_graded(now, &record);
                    }
                    counts.graded += 1;
                }
            }
        }

        Ok(counts)
    }
}
