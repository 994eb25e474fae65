use pr_core::{LearnerId, SubmissionId};
use thiserror::Error;

/// Violations of the submission and pool invariants.
///
/// None of these are recoverable: they mean the caller broke a rule the
/// workflow depends on, and the run must stop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("{0} is unknown to the submission store")]
    UnknownSubmission(SubmissionId),

    #[error("{submission} already has {reviews} of {required} reviews and cannot take more")]
    NotReviewable {
        submission: SubmissionId,
        reviews:    usize,
        required:   usize,
    },

    #[error("{0} is already waiting in the review pool")]
    AlreadyPooled(SubmissionId),

    #[error("{learner} cannot review their own {submission}")]
    SelfReview {
        learner:    LearnerId,
        submission: SubmissionId,
    },

    #[error("{learner} has already reviewed {submission}")]
    DuplicateReviewer {
        learner:    LearnerId,
        submission: SubmissionId,
    },

    #[error("score of {submission} does not fit in 64 bits after {reviews} reviews")]
    ScoreOverflow {
        submission: SubmissionId,
        reviews:    usize,
    },

    #[error("submission store is full: no id left for {owner}'s next attempt")]
    StoreFull {
        owner: LearnerId,
    },

    #[error("{submission} has {reviews} of {required} reviews and cannot be graded yet")]
    NotFullyReviewed {
        submission: SubmissionId,
        reviews:    usize,
        required:   usize,
    },
}

pub type ReviewResult<T> = Result<T, ReviewError>;
