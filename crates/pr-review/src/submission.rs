//! One learner's attempt at the assignment, and its review lifecycle.
//!
//! Completion, passing and failing are mostly *derived* from the clock and
//! the collected reviews rather than stored.  The explicit `state` only
//! records the two things time cannot tell us: that the owner has handed the
//! attempt in, and the grade once one has been given.

use std::fmt;

use pr_core::{LearnerId, ReviewConfig, SubmissionId, Tick};

use crate::{ReviewError, ReviewResult};

// ── SubmissionState ───────────────────────────────────────────────────────────

/// Explicit lifecycle marker of a [`Submission`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubmissionState {
    /// Being worked on.
    InFlight,
    /// Handed in and placed in the review pool.
    SubmittedToReview,
    /// Work finished.  Completion is normally derived from elapsed ticks;
    /// this marker forces it.
    Complete,
    /// Graded below the pass mark.
    Failing,
    /// Graded at or above the pass mark.
    Passing,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubmissionState::InFlight          => "in_flight",
            SubmissionState::SubmittedToReview => "submitted_to_review",
            SubmissionState::Complete          => "complete",
            SubmissionState::Failing           => "failing",
            SubmissionState::Passing           => "passing",
        };
        f.write_str(s)
    }
}

// ── Grade ─────────────────────────────────────────────────────────────────────

/// Final classification of a fully reviewed submission.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    Passing,
    Failing,
}

impl Grade {
    #[inline]
    pub fn is_passing(self) -> bool {
        self == Grade::Passing
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_passing() { "passing" } else { "failing" })
    }
}

// ── ReviewRecord ──────────────────────────────────────────────────────────────

/// One finished peer review.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReviewRecord {
    pub reviewer: LearnerId,
    /// The reviewer's fixed bias, added to the score once per review.
    pub bias:     i64,
    /// Tick at which the review was recorded.
    pub at:       Tick,
}

// ── Submission ────────────────────────────────────────────────────────────────

/// One attempt by a learner at the assignment.
///
/// Built only by [`SubmissionStore::create`][crate::SubmissionStore::create],
/// which assigns the globally unique id.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    pub id:          SubmissionId,
    pub owner:       LearnerId,
    /// The owner's true grade, earned once per review received.
    pub owner_grade: i64,
    pub created_at:  Tick,
    /// 0-based attempt index within the owner's submissions.
    pub sequence:    u32,
    pub state:       SubmissionState,
    /// Append-only, first reviewer first.
    reviews:         Vec<ReviewRecord>,
}

impl Submission {
    pub(crate) fn new(
        id:          SubmissionId,
        owner:       LearnerId,
        owner_grade: i64,
        created_at:  Tick,
        sequence:    u32,
    ) -> Self {
        Self {
            id,
            owner,
            owner_grade,
            created_at,
            sequence,
            state: SubmissionState::InFlight,
            reviews: Vec::new(),
        }
    }

    // ── Review queries ────────────────────────────────────────────────────

    /// Reviews recorded so far, in the order they were given.
    #[inline]
    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    #[inline]
    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }

    /// Has `learner` already reviewed this submission?
    pub fn reviewed_by(&self, learner: LearnerId) -> bool {
        self.reviews.iter().any(|r| r.reviewer == learner)
    }

    /// Fewer reviews than the workflow requires.
    #[inline]
    pub fn is_reviewable(&self, cfg: &ReviewConfig) -> bool {
        self.reviews.len() < cfg.reviews_per_submission
    }

    /// Exactly the required number of reviews collected.
    #[inline]
    pub fn is_fully_reviewed(&self, cfg: &ReviewConfig) -> bool {
        self.reviews.len() == cfg.reviews_per_submission
    }

    /// `owner_grade × reviews + Σ reviewer bias`.  Recomputed on every call.
    ///
    /// [`provide_review`][Self::provide_review] refuses any review that would
    /// take this outside `i64`, so the clamp below never applies.
    pub fn current_score(&self) -> i64 {
        let wide = self.exact_score(None);
        i64::try_from(wide).unwrap_or(if wide < 0 { i64::MIN } else { i64::MAX })
    }

    /// The score in `i128`, optionally counting one more review with `pending`
    /// bias.  Cannot overflow: both terms are at most `2^63 × reviews`.
    fn exact_score(&self, pending: Option<i64>) -> i128 {
        let count = (self.reviews.len() + usize::from(pending.is_some())) as i128;
        let biases: i128 = self
            .reviews
            .iter()
            .map(|r| i128::from(r.bias))
            .chain(pending.map(i128::from))
            .sum();
        i128::from(self.owner_grade) * count + biases
    }

    /// Tick of the final required review, or `None` while reviews are
    /// still outstanding.
    pub fn last_review_tick(&self, cfg: &ReviewConfig) -> Option<Tick> {
        if self.reviews.len() < cfg.reviews_per_submission {
            return None;
        }
        self.reviews.last().map(|r| r.at)
    }

    // ── Lifecycle queries ─────────────────────────────────────────────────

    /// Forced complete, or at least `work_ticks` elapsed since creation.
    pub fn is_complete(&self, at: Tick, cfg: &ReviewConfig) -> bool {
        if self.state == SubmissionState::Complete {
            return true;
        }
        matches!(at.checked_since(self.created_at), Some(e) if e >= cfg.work_ticks)
    }

    /// Strictly inside the work window.
    pub fn is_pending(&self, at: Tick, cfg: &ReviewConfig) -> bool {
        matches!(at.checked_since(self.created_at), Some(e) if e < cfg.work_ticks)
    }

    pub fn is_passing(&self, at: Tick, cfg: &ReviewConfig) -> bool {
        self.state == SubmissionState::Passing
            || (self.is_complete(at, cfg) && self.current_score() >= cfg.passing_points)
    }

    pub fn is_failing(&self, at: Tick, cfg: &ReviewConfig) -> bool {
        self.state == SubmissionState::Failing
            || (self.is_complete(at, cfg) && self.current_score() < cfg.passing_points)
    }

    #[inline]
    pub fn is_submitted_to_review(&self) -> bool {
        self.state == SubmissionState::SubmittedToReview
    }

    /// A grade has been recorded.
    #[inline]
    pub fn is_graded(&self) -> bool {
        matches!(self.state, SubmissionState::Passing | SubmissionState::Failing)
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Record `reviewer`'s review at `at`.
    ///
    /// The owner may not review their own attempt, nobody reviews twice, and
    /// a fully reviewed submission takes no more reviews.  A review whose
    /// score would not fit in `i64` is refused with
    /// [`ReviewError::ScoreOverflow`].
    pub fn provide_review(
        &mut self,
        reviewer: LearnerId,
        bias:     i64,
        at:       Tick,
        cfg:      &ReviewConfig,
    ) -> ReviewResult<()> {
        if reviewer == self.owner {
            return Err(ReviewError::SelfReview { learner: reviewer, submission: self.id });
        }
        if self.reviewed_by(reviewer) {
            return Err(ReviewError::DuplicateReviewer { learner: reviewer, submission: self.id });
        }
        if !self.is_reviewable(cfg) {
            return Err(ReviewError::NotReviewable {
                submission: self.id,
                reviews:    self.reviews.len(),
                required:   cfg.reviews_per_submission,
            });
        }
        if i64::try_from(self.exact_score(Some(bias))).is_err() {
            return Err(ReviewError::ScoreOverflow {
                submission: self.id,
                reviews:    self.reviews.len() + 1,
            });
        }
        self.reviews.push(ReviewRecord { reviewer, bias, at });
        Ok(())
    }

    /// Classify against the pass mark and store the grade.
    ///
    /// Only allowed once every required review is in.
    pub fn record_grade(&mut self, cfg: &ReviewConfig) -> ReviewResult<Grade> {
        if !self.is_fully_reviewed(cfg) {
            return Err(ReviewError::NotFullyReviewed {
                submission: self.id,
                reviews:    self.reviews.len(),
                required:   cfg.reviews_per_submission,
            });
        }
        let grade = if self.current_score() >= cfg.passing_points {
            Grade::Passing
        } else {
            Grade::Failing
        };
        self.state = match grade {
            Grade::Passing => SubmissionState::Passing,
            Grade::Failing => SubmissionState::Failing,
        };
        Ok(grade)
    }
}
