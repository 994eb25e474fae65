//! Logical time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter with no mapping to wall
//! clock time: one tick is one step of the review workflow and nothing more.
//! Work and review durations are expressed in ticks (see
//! [`ReviewConfig`][crate::ReviewConfig]), so all arithmetic is exact integer
//! arithmetic.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Non-negative by construction (`u64`); negative values are rejected at the
/// input boundary before a `Tick` is ever built.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, or `None` if `earlier` is
    /// in the future.
    #[inline]
    pub fn checked_since(self, earlier: Tick) -> Option<u64> {
        self.0.checked_sub(earlier.0)
    }

    /// `true` if `self` is strictly earlier than `other`.
    #[inline]
    pub fn is_before(self, other: Tick) -> bool {
        self < other
    }

    /// `true` if `self` is strictly later than `other`.
    #[inline]
    pub fn is_after(self, other: Tick) -> bool {
        self > other
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The shared logical clock of one run.
///
/// Only ever moves forward, one tick at a time.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick: advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    /// Create a clock positioned at tick 0.
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}
