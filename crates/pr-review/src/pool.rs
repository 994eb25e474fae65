//! `SubmissionPool`: submissions waiting for a reviewer.
//!
//! # Fairness
//!
//! The pool is an insertion-ordered set.  [`retrieve`][SubmissionPool::retrieve]
//! scans from the front, so among the submissions a learner is allowed to
//! review the one that has waited longest is always handed out first.  A
//! submission that still needs reviewers after a review goes back in at the
//! *back*, behind everything that was waiting meanwhile.
//!
//! # Claims
//!
//! Retrieval removes the id in the same `&mut self` call, so a submission is
//! held by at most one reviewer at a time and nobody else can claim it until
//! it is resubmitted.

use indexmap::IndexSet;
use pr_core::{LearnerId, ReviewConfig, SubmissionId};
use tracing::trace;

use crate::{ReviewError, ReviewResult, SubmissionStore};

#[derive(Default)]
pub struct SubmissionPool {
    waiting: IndexSet<SubmissionId>,
}

impl SubmissionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a freshly handed-in submission up for review.
    pub fn submit(
        &mut self,
        id:    SubmissionId,
        store: &SubmissionStore,
        cfg:   &ReviewConfig,
    ) -> ReviewResult<()> {
        self.insert(id, store, cfg)?;
        trace!(submission = id.0, waiting = self.waiting.len(), "submitted to pool");
        Ok(())
    }

    /// Return a submission that was handed out, reviewed, and still needs
    /// more reviewers.  It joins the back of the queue.
    pub fn resubmit(
        &mut self,
        id:    SubmissionId,
        store: &SubmissionStore,
        cfg:   &ReviewConfig,
    ) -> ReviewResult<()> {
        self.insert(id, store, cfg)?;
        trace!(submission = id.0, waiting = self.waiting.len(), "resubmitted to pool");
        Ok(())
    }

    /// Claim the longest-waiting submission `requester` may review: not
    /// their own and not one they already reviewed.  `None` when nothing
    /// qualifies.
    pub fn retrieve(
        &mut self,
        requester: LearnerId,
        store:     &SubmissionStore,
    ) -> Option<SubmissionId> {
        let position = self.waiting.iter().position(|&id| {
            store
                .get(id)
                .is_ok_and(|s| s.owner != requester && !s.reviewed_by(requester))
        })?;
        let id = self.waiting.shift_remove_index(position)?;
        trace!(submission = id.0, learner = requester.0, "retrieved from pool");
        Some(id)
    }

    pub fn contains(&self, id: SubmissionId) -> bool {
        self.waiting.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.waiting.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    /// Waiting submissions, longest-waiting first.
    pub fn iter(&self) -> impl Iterator<Item = SubmissionId> + '_ {
        self.waiting.iter().copied()
    }

    fn insert(
        &mut self,
        id:    SubmissionId,
        store: &SubmissionStore,
        cfg:   &ReviewConfig,
    ) -> ReviewResult<()> {
        let submission = store.get(id)?;
        if !submission.is_reviewable(cfg) {
            return Err(ReviewError::NotReviewable {
                submission: id,
                reviews:    submission.review_count(),
                required:   cfg.reviews_per_submission,
            });
        }
        if !self.waiting.insert(id) {
            return Err(ReviewError::AlreadyPooled(id));
        }
        Ok(())
    }
}
