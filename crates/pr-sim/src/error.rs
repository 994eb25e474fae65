use pr_core::LearnerId;
use pr_learner::LearnerError;
use pr_review::ReviewError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{0} appears more than once in the population")]
    DuplicateLearner(LearnerId),

    #[error("learner error: {0}")]
    Learner(#[from] LearnerError),

    #[error("submission store error: {0}")]
    Review(#[from] ReviewError),
}

pub type SimResult<T> = Result<T, SimError>;
