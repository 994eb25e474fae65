//! Seeded synthetic learner populations.
//!
//! # Usage
//!
//! ```rust
//! use pr_learner::PopulationBuilder;
//!
//! let profiles = PopulationBuilder::new(25, /*seed=*/ 42)
//!     .start_window(0, 10)
//!     .grades(70, 95)
//!     .biases(-4, 4)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(profiles.len(), 25);
//! assert!(profiles.iter().all(|p| (70..=95).contains(&p.true_grade)));
//! ```

use pr_core::{LearnerId, LearnerRng, PrError, PrResult, Tick};

use crate::LearnerProfile;

/// Fluent builder for a reproducible list of [`LearnerProfile`]s.
///
/// Each learner draws from its own [`LearnerRng`], so the same seed always
/// produces the same learners, and a larger population starts with exactly
/// the learners of a smaller one.
pub struct PopulationBuilder {
    count:    usize,
    seed:     u64,
    first_id: u32,
    start:    (u64, u64),
    grade:    (i64, i64),
    bias:     (i64, i64),
}

impl PopulationBuilder {
    /// `count` learners with ids starting at 1, starting within ticks 0–10,
    /// true grades 60–100 and review biases −5–5.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            first_id: 1,
            start:    (0, 10),
            grade:    (60, 100),
            bias:     (-5, 5),
        }
    }

    pub fn first_id(mut self, id: u32) -> Self {
        self.first_id = id;
        self
    }

    /// Inclusive range of first start ticks.  Bounds may be given in either
    /// order.
    pub fn start_window(mut self, from: u64, to: u64) -> Self {
        self.start = (from.min(to), from.max(to));
        self
    }

    /// Inclusive range of true grades.
    pub fn grades(mut self, from: i64, to: i64) -> Self {
        self.grade = (from.min(to), from.max(to));
        self
    }

    /// Inclusive range of review biases.
    pub fn biases(mut self, from: i64, to: i64) -> Self {
        self.bias = (from.min(to), from.max(to));
        self
    }

    /// Draw the profiles.  Fails if the ids `first_id..first_id + count`
    /// do not all fit in a `u32`.
    pub fn build(self) -> PrResult<Vec<LearnerProfile>> {
        let out_of_range = || {
            PrError::Config(format!(
                "{} learners starting at id {} exceed the u32 id space",
                self.count, self.first_id
            ))
        };
        let count = u32::try_from(self.count).map_err(|_| out_of_range())?;
        if count > 0 {
            self.first_id.checked_add(count - 1).ok_or_else(out_of_range)?;
        }

        let profiles = (0..count)
            .map(|i| {
                let id = LearnerId(self.first_id + i);
                let mut rng = LearnerRng::new(self.seed, id);
                LearnerProfile {
                    id,
                    first_start: Tick(rng.gen_range(self.start.0..=self.start.1)),
                    true_grade:  rng.gen_range(self.grade.0..=self.grade.1),
                    review_bias: rng.gen_range(self.bias.0..=self.bias.1),
                }
            })
            .collect();
        Ok(profiles)
    }
}
