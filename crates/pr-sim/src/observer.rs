//! Simulation observer trait for progress reporting and data collection.

use pr_core::Tick;
use pr_learner::LearnerState;
use pr_review::{GradeRecord, SubmissionEvent};

// ── TickSummary ───────────────────────────────────────────────────────────────

/// Aggregate state at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:      Tick,
    /// Submissions waiting in the pool after every learner moved.
    pub pool_size: usize,
    /// Submission events emitted during this tick.
    pub events:    usize,
    /// Grades given during this tick.
    pub graded:    usize,
    /// Learner count per state, indexed by [`LearnerState::index`].
    pub learners:  [usize; 5],
}

impl TickSummary {
    #[inline]
    pub fn in_state(&self, state: LearnerState) -> usize {
        self.learners[state.index()]
    }

    pub fn total_learners(&self) -> usize {
        self.learners.iter().sum()
    }
}

// ── SimObserver ───────────────────────────────────────────────────────────────

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: event printer
///
/// ```rust
/// use pr_review::SubmissionEvent;
/// use pr_sim::SimObserver;
///
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_submission(&mut self, ev: &SubmissionEvent) {
///         println!("{} handed in attempt {}", ev.learner, ev.sequence);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any learner moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called for every submission handed in for review, in the order they
    /// were produced.
    fn on_submission(&mut self, _event: &SubmissionEvent) {}

    /// Called when a fully reviewed submission receives its grade.
    fn on_graded(&mut self, _tick: Tick, _record: &GradeRecord) {}

    /// Called at summary intervals (every `config.summary_interval_ticks`
    /// ticks, never when the interval is 0).
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps everything it is told, in order.  Mostly for tests and small runs.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    pub events:    Vec<SubmissionEvent>,
    pub grades:    Vec<GradeRecord>,
    pub summaries: Vec<TickSummary>,
    pub finished:  Option<Tick>,
}

impl SimObserver for CollectingObserver {
    fn on_submission(&mut self, event: &SubmissionEvent) {
        self.events.push(*event);
    }

    fn on_graded(&mut self, _tick: Tick, record: &GradeRecord) {
        self.grades.push(*record);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summaries.push(*summary);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}
