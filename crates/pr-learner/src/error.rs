use pr_core::{LearnerId, Tick};
use pr_review::ReviewError;
use thiserror::Error;

use crate::LearnerState;

/// Fatal learner errors.  Both variants carry the learner, tick and state at
/// which the run broke.
#[derive(Debug, Error)]
pub enum LearnerError {
    #[error("{learner} in state {state} has no transition at {tick}")]
    UndefinedTransition {
        learner: LearnerId,
        tick:    Tick,
        state:   LearnerState,
    },

    #[error("{learner} in state {state} at {tick}: {source}")]
    Review {
        learner: LearnerId,
        tick:    Tick,
        state:   LearnerState,
        #[source]
        source:  ReviewError,
    },
}

pub type LearnerResult<T> = Result<T, LearnerError>;
