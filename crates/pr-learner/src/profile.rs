use pr_core::{LearnerId, Tick};

/// The fixed inputs describing one learner.
///
/// `true_grade` is what the learner's work is worth per review received;
/// `review_bias` is what this learner adds (or subtracts) on every review
/// they give.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnerProfile {
    pub id:          LearnerId,
    /// No action is taken before this tick.
    pub first_start: Tick,
    pub true_grade:  i64,
    pub review_bias: i64,
}

impl LearnerProfile {
    pub fn new(id: LearnerId, first_start: Tick, true_grade: i64, review_bias: i64) -> Self {
        Self { id, first_start, true_grade, review_bias }
    }
}
