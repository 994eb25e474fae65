//! The learner state machine.

use pr_core::{LearnerId, SubmissionId, Tick};
use pr_review::{Grade, ReviewError, SubmissionState};
use tracing::{debug, trace};

use crate::{LearnerError, LearnerProfile, LearnerResult, LearnerState, ReviewContext};

// ── Transition ────────────────────────────────────────────────────────────────

/// What a single [`Learner::respond_to`] call produced besides state changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Nothing observable.
    Quiet,
    /// The learner handed this submission in for review.  This is the
    /// submission event written to the output.
    Submitted(SubmissionId),
    /// The learner's fully reviewed submission received a grade.
    Graded {
        submission: SubmissionId,
        grade:      Grade,
    },
}

impl Transition {
    /// The emitted submission, if this transition was a hand-in.
    #[inline]
    pub fn submitted(self) -> Option<SubmissionId> {
        match self {
            Transition::Submitted(id) => Some(id),
            _ => None,
        }
    }
}

// ── Learner ───────────────────────────────────────────────────────────────────

/// One participant of the course.
///
/// Owns the ordered ids of its own attempts (last is current) and the ids it
/// has claimed for review in the current cycle.  While a review is under way
/// it is the last entry of `reviews_done` and `review_started_at` is set.
#[derive(Clone, Debug)]
pub struct Learner {
    profile:           LearnerProfile,
    state:             LearnerState,
    submissions:       Vec<SubmissionId>,
    reviews_done:      Vec<SubmissionId>,
    review_started_at: Option<Tick>,
}

impl Learner {
    pub fn new(profile: LearnerProfile) -> Self {
        Self {
            profile,
            state:             LearnerState::Inactive,
            submissions:       Vec::new(),
            reviews_done:      Vec::new(),
            review_started_at: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> LearnerId {
        self.profile.id
    }

    #[inline]
    pub fn profile(&self) -> &LearnerProfile {
        &self.profile
    }

    #[inline]
    pub fn state(&self) -> LearnerState {
        self.state
    }

    /// Own attempts, oldest first.
    #[inline]
    pub fn submissions(&self) -> &[SubmissionId] {
        &self.submissions
    }

    #[inline]
    pub fn current_submission(&self) -> Option<SubmissionId> {
        self.submissions.last().copied()
    }

    /// Submissions claimed for review this cycle, including one in progress.
    #[inline]
    pub fn reviews_done(&self) -> &[SubmissionId] {
        &self.reviews_done
    }

    /// The submission currently being reviewed, if any.
    pub fn review_in_progress(&self) -> Option<SubmissionId> {
        self.review_started_at.and(self.reviews_done.last().copied())
    }

    /// Reviews finished this cycle.
    pub fn completed_reviews(&self) -> usize {
        self.reviews_done.len() - usize::from(self.review_started_at.is_some())
    }

    // ── Transition function ───────────────────────────────────────────────

    /// React to tick `at`.  Called exactly once per tick.
    pub fn respond_to(
        &mut self,
        at:  Tick,
        ctx: &mut ReviewContext<'_>,
    ) -> LearnerResult<Transition> {
        if at.is_before(self.profile.first_start) {
            return Ok(Transition::Quiet);
        }

        let Some(current) = self.current_submission() else {
            self.start_submission(at, 0, ctx)?;
            self.set_state(LearnerState::Working, at);
            return Ok(Transition::Quiet);
        };

        let cfg = ctx.config;
        let sub = ctx.submissions.get(current).map_err(|e| self.review_error(at, e))?;

        if sub.is_complete(at, cfg) && !sub.is_graded() {
            if !sub.is_submitted_to_review() {
                ctx.pool
                    .submit(current, ctx.submissions, cfg)
                    .map_err(|e| self.review_error(at, e))?;
                let sub = ctx.submissions.get_mut(current).map_err(|e| self.review_error(at, e))?;
                sub.state = SubmissionState::SubmittedToReview;
                debug!(learner = self.id().0, submission = current.0, sequence = sub.sequence, tick = at.0, "submitted for review");
                return Ok(Transition::Submitted(current));
            }
            return self.review_cycle(at, current, ctx);
        }

        if sub.is_failing(at, cfg) {
            let sequence = sub.sequence;
            self.handle_failure(at, sequence, ctx)?;
            self.set_state(LearnerState::Working, at);
            return Ok(Transition::Quiet);
        }
        if sub.is_passing(at, cfg) {
            self.set_state(LearnerState::Sleeping, at);
            return Ok(Transition::Quiet);
        }
        if sub.is_pending(at, cfg) {
            self.set_state(LearnerState::Working, at);
            return Ok(Transition::Quiet);
        }

        Err(LearnerError::UndefinedTransition {
            learner: self.id(),
            tick:    at,
            state:   self.state,
        })
    }

    // ── Review cycle ──────────────────────────────────────────────────────

    /// The learner's own submission is in the pool: owe reviews, then wait
    /// for the grade.
    fn review_cycle(
        &mut self,
        at:      Tick,
        current: SubmissionId,
        ctx:     &mut ReviewContext<'_>,
    ) -> LearnerResult<Transition> {
        let cfg = ctx.config;

        if self.completed_reviews() >= cfg.reviews_per_learner {
            self.set_state(LearnerState::WaitingForGrade, at);
            let sub = ctx.submissions.get_mut(current).map_err(|e| self.review_error(at, e))?;
            if !sub.is_fully_reviewed(cfg) {
                return Ok(Transition::Quiet);
            }
            let grade = sub.record_grade(cfg).map_err(|e| self.review_error(at, e))?;
            let (score, sequence) = (sub.current_score(), sub.sequence);
            debug!(learner = self.id().0, submission = current.0, score, %grade, tick = at.0, "graded");
            if grade == Grade::Failing {
                self.handle_failure(at, sequence, ctx)?;
                self.set_state(LearnerState::Working, at);
            }
            return Ok(Transition::Graded { submission: current, grade });
        }

        match self.review_started_at {
            Some(started) if at.checked_since(started).is_some_and(|e| e >= cfg.review_ticks) => {
                self.finish_review(at, ctx)?;
                if self.completed_reviews() >= cfg.reviews_per_learner {
                    self.set_state(LearnerState::WaitingForGrade, at);
                } else {
                    self.set_state(LearnerState::Reviewing, at);
                    self.claim_review(at, ctx);
                }
            }
            Some(_) => self.set_state(LearnerState::Reviewing, at),
            None => {
                self.set_state(LearnerState::Reviewing, at);
                self.claim_review(at, ctx);
            }
        }
        Ok(Transition::Quiet)
    }

    /// Record the in-progress review and put the submission back in the
    /// pool if it still needs reviewers.
    fn finish_review(&mut self, at: Tick, ctx: &mut ReviewContext<'_>) -> LearnerResult<()> {
        let cfg = ctx.config;
        let Some(reviewed) = self.review_in_progress() else {
            return Err(LearnerError::UndefinedTransition {
                learner: self.id(),
                tick:    at,
                state:   self.state,
            });
        };

        let sub = ctx.submissions.get_mut(reviewed).map_err(|e| self.review_error(at, e))?;
        sub.provide_review(self.id(), self.profile.review_bias, at, cfg)
            .map_err(|e| self.review_error(at, e))?;
        let needs_more = sub.is_reviewable(cfg);
        self.review_started_at = None;
        trace!(learner = self.id().0, submission = reviewed.0, tick = at.0, "review recorded");

        if needs_more {
            ctx.pool
                .resubmit(reviewed, ctx.submissions, cfg)
                .map_err(|e| self.review_error(at, e))?;
        }
        Ok(())
    }

    /// Try to take the next submission from the pool.  Finding none is not
    /// an error; the learner tries again next tick.
    fn claim_review(&mut self, at: Tick, ctx: &mut ReviewContext<'_>) {
        match ctx.pool.retrieve(self.id(), ctx.submissions) {
            Some(id) => {
                self.reviews_done.push(id);
                self.review_started_at = Some(at);
                trace!(learner = self.id().0, submission = id.0, tick = at.0, "review started");
            }
            None => trace!(learner = self.id().0, tick = at.0, "nothing to review"),
        }
    }

    // ── Submissions ───────────────────────────────────────────────────────

    fn start_submission(
        &mut self,
        at:       Tick,
        sequence: u32,
        ctx:      &mut ReviewContext<'_>,
    ) -> LearnerResult<()> {
        let id = ctx
            .submissions
            .create(self.id(), self.profile.true_grade, at, sequence)
            .map_err(|e| self.review_error(at, e))?;
        self.submissions.push(id);
        Ok(())
    }

    /// Start the next attempt and begin a fresh review cycle.
    fn handle_failure(
        &mut self,
        at:                Tick,
        previous_sequence: u32,
        ctx:               &mut ReviewContext<'_>,
    ) -> LearnerResult<()> {
        // The attempt count is bounded by the store's u32 id space.
        let sequence = previous_sequence.saturating_add(1);
        self.start_submission(at, sequence, ctx)?;
        self.reviews_done.clear();
        self.review_started_at = None;
        debug!(learner = self.id().0, sequence, tick = at.0, "resubmitting after failed grade");
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn set_state(&mut self, next: LearnerState, at: Tick) {
        if self.state != next {
            trace!(learner = self.id().0, from = %self.state, to = %next, tick = at.0, "state change");
            self.state = next;
        }
    }

    fn review_error(&self, at: Tick, source: ReviewError) -> LearnerError {
        LearnerError::Review {
            learner: self.id(),
            tick:    at,
            state:   self.state,
            source,
        }
    }
}
