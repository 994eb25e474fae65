//! Deterministic per-learner RNG.
//!
//! # Determinism strategy
//!
//! The simulation itself is fully deterministic and draws no random numbers.
//! Randomness is only used to synthesise learner populations, and each
//! learner gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (learner_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive ids uniformly across the seed space.  Growing a
//! synthetic population therefore never changes the learners already in it.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::LearnerId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-learner deterministic RNG.
pub struct LearnerRng(SmallRng);

impl LearnerRng {
    /// Seed deterministically from the run's global seed and a learner id.
    pub fn new(global_seed: u64, learner: LearnerId) -> Self {
        let seed = global_seed ^ (learner.0 as u64).wrapping_mul(MIXING_CONSTANT);
        LearnerRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
