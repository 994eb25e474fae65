//! Learner lifecycle states.

use std::fmt;

/// What a learner is doing at the current tick.
///
/// ```text
/// Inactive ─▶ Working ⇄ Reviewing ⇄ WaitingForGrade
///                ⇅            (failed grade ─▶ Working)
///             Sleeping
/// ```
///
/// `Inactive` is only ever the initial state.  There is no terminal state: a
/// learner that passed sleeps.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LearnerState {
    /// Before the learner's first start tick.
    #[default]
    Inactive,
    /// Working on their own submission.
    Working,
    /// Reviewing, or looking for, someone else's submission.
    Reviewing,
    /// Owed reviews done; waiting for their own submission's grade.
    WaitingForGrade,
    /// Passed; nothing left to do.
    Sleeping,
}

impl LearnerState {
    /// Every state, in declaration order.  Handy for per-state tallies.
    pub const ALL: [LearnerState; 5] = [
        LearnerState::Inactive,
        LearnerState::Working,
        LearnerState::Reviewing,
        LearnerState::WaitingForGrade,
        LearnerState::Sleeping,
    ];

    /// Position in [`ALL`][Self::ALL].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LearnerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LearnerState::Inactive        => "inactive",
            LearnerState::Working         => "working",
            LearnerState::Reviewing       => "reviewing",
            LearnerState::WaitingForGrade => "waiting_for_grade",
            LearnerState::Sleeping        => "sleeping",
        };
        f.write_str(s)
    }
}
