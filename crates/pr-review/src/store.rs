//! `SubmissionStore`: the arena that owns every submission of a run.
//!
//! Ids are handed out from a monotonic counter and double as indices, so
//! lookup is a bounds-checked `Vec` access.  Submissions are never removed.

use pr_core::{LearnerId, SubmissionId, Tick};
use tracing::trace;

use crate::{ReviewError, ReviewResult, Submission};

#[derive(Default)]
pub struct SubmissionStore {
    submissions: Vec<Submission>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new attempt for `owner` at `created_at` and return its id.
    ///
    /// Fails with [`ReviewError::StoreFull`] once every `u32` id is taken.
    pub fn create(
        &mut self,
        owner:       LearnerId,
        owner_grade: i64,
        created_at:  Tick,
        sequence:    u32,
    ) -> ReviewResult<SubmissionId> {
        let id = SubmissionId::try_from(self.submissions.len())
            .map_err(|_| ReviewError::StoreFull { owner })?;
        self.submissions
            .push(Submission::new(id, owner, owner_grade, created_at, sequence));
        trace!(submission = id.0, learner = owner.0, sequence, tick = created_at.0, "submission created");
        Ok(id)
    }

    pub fn get(&self, id: SubmissionId) -> ReviewResult<&Submission> {
        self.submissions
            .get(id.index())
            .ok_or(ReviewError::UnknownSubmission(id))
    }

    pub fn get_mut(&mut self, id: SubmissionId) -> ReviewResult<&mut Submission> {
        self.submissions
            .get_mut(id.index())
            .ok_or(ReviewError::UnknownSubmission(id))
    }

    /// Number of submissions created so far.
    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// All submissions in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.submissions.iter()
    }
}
