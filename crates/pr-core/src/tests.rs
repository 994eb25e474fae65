//! Unit tests for pr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LearnerId, SubmissionId};

    #[test]
    fn index_roundtrip() {
        let id = SubmissionId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(SubmissionId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn conversion_rejects_ids_past_u32() {
        let last = u32::MAX as usize;
        assert_eq!(SubmissionId::try_from(last).unwrap(), SubmissionId(u32::MAX));
        assert!(SubmissionId::try_from(last + 1).is_err());
    }

    #[test]
    fn ordering() {
        assert!(LearnerId(0) < LearnerId(1));
        assert!(SubmissionId(100) > SubmissionId(99));
    }

    #[test]
    fn display() {
        assert_eq!(LearnerId(7).to_string(), "LearnerId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn checked_since_rejects_future() {
        assert_eq!(Tick(15).checked_since(Tick(5)), Some(10));
        assert_eq!(Tick(5).checked_since(Tick(5)), Some(0));
        assert_eq!(Tick(5).checked_since(Tick(6)), None);
    }

    #[test]
    fn before_after() {
        assert!(Tick(1).is_before(Tick(2)));
        assert!(!Tick(2).is_before(Tick(2)));
        assert!(Tick(3).is_after(Tick(2)));
        assert_eq!(Tick(4), Tick(4));
    }

    #[test]
    fn clock_advance() {
        let mut clock = SimClock::new();
        assert_eq!(clock.current_tick, Tick::ZERO);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.to_string(), "T2");
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig::new(500);
        assert_eq!(cfg.end_tick(), Tick(500));
        assert_eq!(cfg.make_clock().current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod config {
    use crate::ReviewConfig;

    #[test]
    fn defaults_match_course_setup() {
        let cfg = ReviewConfig::default();
        assert_eq!(cfg.reviews_per_submission, 3);
        assert_eq!(cfg.reviews_per_learner, 3);
        assert_eq!(cfg.passing_points, 240);
        assert_eq!(cfg.work_ticks, 50);
        assert_eq!(cfg.review_ticks, 20);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_required_reviews_rejected() {
        let cfg = ReviewConfig { reviews_per_submission: 0, ..ReviewConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_durations_rejected() {
        let work = ReviewConfig { work_ticks: 0, ..ReviewConfig::default() };
        let review = ReviewConfig { review_ticks: 0, ..ReviewConfig::default() };
        assert!(work.validate().is_err());
        assert!(review.validate().is_err());
    }

    #[test]
    fn no_owed_reviews_is_allowed() {
        let cfg = ReviewConfig { reviews_per_learner: 0, ..ReviewConfig::default() };
        assert!(cfg.validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::{LearnerId, LearnerRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = LearnerRng::new(12345, LearnerId(0));
        let mut r2 = LearnerRng::new(12345, LearnerId(0));
        for _ in 0..100 {
            let a: u32 = r1.gen_range(0..=u32::MAX);
            let b: u32 = r2.gen_range(0..=u32::MAX);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_learners_differ() {
        let mut r0 = LearnerRng::new(1, LearnerId(0));
        let mut r1 = LearnerRng::new(1, LearnerId(1));
        let a: u64 = r0.gen_range(0..=u64::MAX);
        let b: u64 = r1.gen_range(0..=u64::MAX);
        assert_ne!(a, b, "seeds for adjacent learners should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = LearnerRng::new(0, LearnerId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(-5i32..=5);
            assert!((-5..=5).contains(&v));
        }
    }
}
