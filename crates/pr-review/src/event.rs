//! Plain snapshot records handed to observers and output writers.

use pr_core::{LearnerId, ReviewConfig, SubmissionId, Tick};

use crate::{Grade, Submission, SubmissionState};

/// A submission handed in for review, as it looked at the moment it was
/// emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmissionEvent {
    pub submission:     SubmissionId,
    pub learner:        LearnerId,
    pub sequence:       u32,
    pub created_at:     Tick,
    pub score:          i64,
    /// `None` until every required review has been recorded.
    pub last_review_at: Option<Tick>,
    pub emitted_at:     Tick,
}

impl SubmissionEvent {
    pub fn capture(submission: &Submission, emitted_at: Tick, cfg: &ReviewConfig) -> Self {
        Self {
            submission:     submission.id,
            learner:        submission.owner,
            sequence:       submission.sequence,
            created_at:     submission.created_at,
            score:          submission.current_score(),
            last_review_at: submission.last_review_tick(cfg),
            emitted_at,
        }
    }
}

/// A grade given to a fully reviewed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeRecord {
    pub submission:     SubmissionId,
    pub learner:        LearnerId,
    pub sequence:       u32,
    pub score:          i64,
    pub grade:          Grade,
    pub last_review_at: Tick,
    pub graded_at:      Tick,
}

impl GradeRecord {
    /// Snapshot a graded submission.  `None` if it has no grade yet.
    pub fn capture(submission: &Submission, graded_at: Tick, cfg: &ReviewConfig) -> Option<Self> {
        let grade = match submission.state {
            SubmissionState::Passing => Grade::Passing,
            SubmissionState::Failing => Grade::Failing,
            _ => return None,
        };
        Some(Self {
            submission:     submission.id,
            learner:        submission.owner,
            sequence:       submission.sequence,
            score:          submission.current_score(),
            grade,
            last_review_at: submission.last_review_tick(cfg)?,
            graded_at,
        })
    }
}
