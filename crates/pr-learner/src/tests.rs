//! Unit tests for the learner state machine.

use pr_core::{LearnerId, ReviewConfig, SubmissionId, Tick};
use pr_review::{SubmissionPool, SubmissionStore};

use crate::{Learner, LearnerProfile, ReviewContext, Transition};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Everything a learner transition needs, plus the learners themselves, so
/// tests can step a tiny population by hand in ascending id order.
struct Harness {
    cfg:      ReviewConfig,
    pool:     SubmissionPool,
    store:    SubmissionStore,
    learners: Vec<Learner>,
}

impl Harness {
    fn new(cfg: ReviewConfig, profiles: &[(u32, u64, i64, i64)]) -> Self {
        let learners = profiles
            .iter()
            .map(|&(id, start, grade, bias)| {
                Learner::new(LearnerProfile::new(LearnerId(id), Tick(start), grade, bias))
            })
            .collect();
        Self {
            cfg,
            pool: SubmissionPool::new(),
            store: SubmissionStore::new(),
            learners,
        }
    }

    /// Run one tick for every learner and return their transitions.
    fn step(&mut self, at: u64) -> Vec<Transition> {
        let mut out = Vec::new();
        for learner in &mut self.learners {
            let mut ctx = ReviewContext::new(&self.cfg, &mut self.pool, &mut self.store);
            out.push(learner.respond_to(Tick(at), &mut ctx).unwrap());
        }
        out
    }

    /// Step every tick in `from..to` and collect emitted submissions.
    fn run(&mut self, from: u64, to: u64) -> Vec<(u64, SubmissionId)> {
        let mut emitted = Vec::new();
        for t in from..to {
            for tr in self.step(t) {
                if let Some(id) = tr.submitted() {
                    emitted.push((t, id));
                }
            }
        }
        emitted
    }
}

/// One review per submission, one owed per learner, 2 work ticks, 1 review
/// tick, pass mark 50.
fn quick_cfg() -> ReviewConfig {
    ReviewConfig {
        reviews_per_submission: 1,
        reviews_per_learner:    1,
        passing_points:         50,
        work_ticks:             2,
        review_ticks:           1,
    }
}

#[cfg(test)]
mod lifecycle_tests {
    use super::*;
    use crate::LearnerState;
    use pr_review::SubmissionState;

    #[test]
    fn inactive_before_first_start() {
        let mut h = Harness::new(ReviewConfig::default(), &[(1, 5, 85, 4)]);
        for t in 0..5 {
            assert_eq!(h.step(t), [Transition::Quiet]);
            assert_eq!(h.learners[0].state(), LearnerState::Inactive);
        }
        assert!(h.store.is_empty());
    }

    #[test]
    fn first_start_creates_submission() {
        let mut h = Harness::new(ReviewConfig::default(), &[(1, 5, 85, 4)]);
        h.run(0, 6);
        let learner = &h.learners[0];
        assert_eq!(learner.state(), LearnerState::Working);
        assert_eq!(learner.submissions().len(), 1);
        let sub = h.store.get(learner.submissions()[0]).unwrap();
        assert_eq!(sub.created_at, Tick(5));
        assert_eq!(sub.sequence, 0);
        assert_eq!(sub.state, SubmissionState::InFlight);
    }

    #[test]
    fn first_event_after_work_window() {
        // Start at 5, 50 ticks of work → hand-in at 55.
        let mut h = Harness::new(ReviewConfig::default(), &[(1, 5, 85, 4)]);
        let emitted = h.run(0, 56);
        assert_eq!(emitted, [(55, SubmissionId(0))]);
        assert!(h.pool.contains(SubmissionId(0)));
        assert_eq!(
            h.store.get(SubmissionId(0)).unwrap().state,
            SubmissionState::SubmittedToReview
        );
    }

    #[test]
    fn working_while_pending() {
        let mut h = Harness::new(ReviewConfig::default(), &[(1, 0, 85, 4)]);
        h.run(0, 30);
        assert_eq!(h.learners[0].state(), LearnerState::Working);
        assert!(h.pool.is_empty());
    }
}

#[cfg(test)]
mod review_tests {
    use super::*;
    use crate::LearnerState;

    #[test]
    fn starved_learner_idles_without_error() {
        // Alone in the course: the only pooled submission is their own.
        let mut h = Harness::new(quick_cfg(), &[(1, 0, 60, 0)]);
        h.run(0, 10);
        let learner = &h.learners[0];
        assert_eq!(learner.state(), LearnerState::Reviewing);
        assert!(learner.reviews_done().is_empty());
        assert_eq!(h.pool.len(), 1);
    }

    #[test]
    fn review_takes_review_ticks() {
        let cfg = ReviewConfig { review_ticks: 3, ..quick_cfg() };
        let mut h = Harness::new(cfg, &[(1, 0, 60, 0), (2, 0, 60, 0)]);
        h.run(0, 4); // hand-in at 2, claims at 3
        assert_eq!(h.learners[0].review_in_progress(), Some(SubmissionId(1)));

        h.run(4, 6);
        assert_eq!(h.learners[0].state(), LearnerState::Reviewing);
        assert_eq!(h.store.get(SubmissionId(1)).unwrap().review_count(), 0);

        h.step(6);
        let reviews = h.store.get(SubmissionId(1)).unwrap().reviews().to_vec();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].reviewer, LearnerId(1));
        assert_eq!(reviews[0].at, Tick(6));
        assert_eq!(h.learners[0].state(), LearnerState::WaitingForGrade);
        assert_eq!(h.learners[0].completed_reviews(), 1);
    }

    #[test]
    fn reviewed_submission_returns_to_pool_until_full() {
        let cfg = ReviewConfig { reviews_per_submission: 2, ..quick_cfg() };
        let mut h = Harness::new(cfg, &[(1, 0, 60, 0), (2, 0, 60, 0), (3, 0, 60, 0)]);
        h.run(0, 5);
        // Tick 3: L1 takes S1, L2 takes S0, L3 finds only its own S2.
        // Tick 4: S1 and S0 come back with one review each; L3 takes S1.
        assert_eq!(h.store.get(SubmissionId(0)).unwrap().review_count(), 1);
        assert!(h.pool.contains(SubmissionId(0)));
        assert_eq!(h.store.get(SubmissionId(1)).unwrap().review_count(), 1);
        assert!(!h.pool.contains(SubmissionId(1)));
        assert_eq!(h.learners[2].review_in_progress(), Some(SubmissionId(1)));
        assert_eq!(h.pool.iter().collect::<Vec<_>>(), [SubmissionId(2), SubmissionId(0)]);
    }

    #[test]
    fn no_self_or_double_reviews_under_contention() {
        let cfg = ReviewConfig {
            reviews_per_submission: 3,
            reviews_per_learner:    3,
            passing_points:         240,
            work_ticks:             2,
            review_ticks:           1,
        };
        let profiles: Vec<(u32, u64, i64, i64)> =
            (1..=6).map(|i| (i, u64::from(i % 3), 80, i64::from(i) - 3)).collect();
        let mut h = Harness::new(cfg, &profiles);
        h.run(0, 60);
        for sub in h.store.iter() {
            assert!(sub.review_count() <= 3);
            assert!(!sub.reviewed_by(sub.owner), "{:?} reviewed by its owner", sub.id);
            let mut reviewers: Vec<u32> = sub.reviews().iter().map(|r| r.reviewer.0).collect();
            let before = reviewers.len();
            reviewers.sort_unstable();
            reviewers.dedup();
            assert_eq!(reviewers.len(), before, "{:?} has a repeated reviewer", sub.id);
        }
    }
}

#[cfg(test)]
mod grading_tests {
    use super::*;
    use crate::LearnerState;
    use pr_review::{Grade, SubmissionState};

    /// Hand `learner`'s pooled submission to each reviewer in turn and
    /// record their reviews directly, as finished reviews would.
    fn review_by(h: &mut Harness, sub: SubmissionId, reviewers: &[(u32, i64)], at: u64) {
        for &(r, bias) in reviewers {
            assert_eq!(h.pool.retrieve(LearnerId(r), &h.store), Some(sub));
            let s = h.store.get_mut(sub).unwrap();
            s.provide_review(LearnerId(r), bias, Tick(at), &h.cfg).unwrap();
            if s.is_reviewable(&h.cfg) {
                h.pool.resubmit(sub, &h.store, &h.cfg).unwrap();
            }
        }
    }

    fn no_owed_reviews() -> ReviewConfig {
        ReviewConfig { reviews_per_learner: 0, ..ReviewConfig::default() }
    }

    #[test]
    fn passing_grade_then_sleep() {
        // 85 × 3 + (4 + 3 + 3) = 265 ≥ 240.
        let mut h = Harness::new(no_owed_reviews(), &[(1, 5, 85, 4)]);
        h.run(0, 56);
        review_by(&mut h, SubmissionId(0), &[(2, 4), (3, 3), (4, 3)], 56);

        assert_eq!(
            h.step(57),
            [Transition::Graded { submission: SubmissionId(0), grade: Grade::Passing }]
        );
        assert_eq!(h.learners[0].state(), LearnerState::WaitingForGrade);
        assert_eq!(h.store.get(SubmissionId(0)).unwrap().current_score(), 265);

        h.step(58);
        assert_eq!(h.learners[0].state(), LearnerState::Sleeping);
        assert_eq!(h.learners[0].submissions().len(), 1);
    }

    #[test]
    fn failing_grade_starts_next_attempt() {
        // 80 × 3 − 5 = 235 < 240.
        let mut h = Harness::new(no_owed_reviews(), &[(1, 0, 80, 0)]);
        h.run(0, 51);
        review_by(&mut h, SubmissionId(0), &[(2, -2), (3, -3), (4, 0)], 51);

        assert_eq!(
            h.step(52),
            [Transition::Graded { submission: SubmissionId(0), grade: Grade::Failing }]
        );
        let learner = &h.learners[0];
        assert_eq!(learner.state(), LearnerState::Working);
        assert!(learner.reviews_done().is_empty());
        assert_eq!(learner.submissions().len(), 2);

        let next_id = learner.submissions()[1];

        assert_eq!(h.store.get(SubmissionId(0)).unwrap().state, SubmissionState::Failing);
        let next = h.store.get(next_id).unwrap();
        assert_eq!(next.sequence, 1);
        assert_eq!(next.created_at, Tick(52));
        assert_eq!(next.state, SubmissionState::InFlight);

        // The new attempt goes through the full work window again.
        let emitted = h.run(53, 103);
        assert_eq!(emitted, [(102, next_id)]);
    }

    #[test]
    fn no_grade_before_all_reviews() {
        let mut h = Harness::new(no_owed_reviews(), &[(1, 0, 100, 0)]);
        h.run(0, 51);
        review_by(&mut h, SubmissionId(0), &[(2, 0), (3, 0)], 51);
        for t in 52..60 {
            assert_eq!(h.step(t), [Transition::Quiet]);
        }
        assert_eq!(h.learners[0].state(), LearnerState::WaitingForGrade);
        assert!(!h.store.get(SubmissionId(0)).unwrap().is_graded());
    }

    #[test]
    fn two_learners_review_each_other() {
        // L1 (60) passes, L2 (40) fails and resubmits.
        let mut h = Harness::new(quick_cfg(), &[(1, 0, 60, 0), (2, 0, 40, 0)]);

        let emitted = h.run(0, 5);
        assert_eq!(emitted, [(2, SubmissionId(0)), (2, SubmissionId(1))]);
        assert_eq!(h.store.get(SubmissionId(0)).unwrap().reviews()[0].reviewer, LearnerId(2));
        assert_eq!(h.store.get(SubmissionId(1)).unwrap().reviews()[0].reviewer, LearnerId(1));

        assert_eq!(
            h.step(5),
            [
                Transition::Graded { submission: SubmissionId(0), grade: Grade::Passing },
                Transition::Graded { submission: SubmissionId(1), grade: Grade::Failing },
            ]
        );
        assert_eq!(h.step(6), [Transition::Quiet, Transition::Quiet]);
        assert_eq!(h.learners[0].state(), LearnerState::Sleeping);
        assert_eq!(h.learners[1].state(), LearnerState::Working);

        assert_eq!(h.step(7), [Transition::Quiet, Transition::Submitted(SubmissionId(2))]);
        let retry = h.store.get(SubmissionId(2)).unwrap();
        assert_eq!((retry.owner, retry.sequence, retry.created_at), (LearnerId(2), 1, Tick(5)));
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use crate::{LearnerError, LearnerState};
    use pr_review::ReviewError;

    #[test]
    fn clock_regression_is_fatal() {
        let mut h = Harness::new(ReviewConfig::default(), &[(1, 0, 80, 0)]);
        h.step(10);
        let mut ctx = ReviewContext::new(&h.cfg, &mut h.pool, &mut h.store);
        let err = h.learners[0].respond_to(Tick(3), &mut ctx).unwrap_err();
        match err {
            LearnerError::UndefinedTransition { learner, tick, state } => {
                assert_eq!(learner, LearnerId(1));
                assert_eq!(tick, Tick(3));
                assert_eq!(state, LearnerState::Working);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn pool_violation_carries_learner_context() {
        let mut h = Harness::new(ReviewConfig::default(), &[(1, 0, 80, 0)]);
        h.run(0, 50);
        // Sneak the submission into the pool before its owner hands it in.
        h.pool.submit(SubmissionId(0), &h.store, &h.cfg).unwrap();
        let mut ctx = ReviewContext::new(&h.cfg, &mut h.pool, &mut h.store);
        let err = h.learners[0].respond_to(Tick(50), &mut ctx).unwrap_err();
        match err {
            LearnerError::Review { learner, tick, source, .. } => {
                assert_eq!(learner, LearnerId(1));
                assert_eq!(tick, Tick(50));
                assert_eq!(source, ReviewError::AlreadyPooled(SubmissionId(0)));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[cfg(test)]
mod population_tests {
    use crate::PopulationBuilder;
    use pr_core::{LearnerId, PrError};

    #[test]
    fn same_seed_same_population() {
        let a = PopulationBuilder::new(20, 7).build().unwrap();
        let b = PopulationBuilder::new(20, 7).build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn larger_population_extends_smaller() {
        let small = PopulationBuilder::new(5, 99).build().unwrap();
        let large = PopulationBuilder::new(12, 99).build().unwrap();
        assert_eq!(&large[..5], &small[..]);
    }

    #[test]
    fn values_within_ranges() {
        let profiles = PopulationBuilder::new(200, 3)
            .first_id(10)
            .start_window(20, 5)
            .grades(70, 90)
            .biases(-2, 2)
            .build()
            .unwrap();
        assert_eq!(profiles[0].id, LearnerId(10));
        assert_eq!(profiles[199].id, LearnerId(209));
        for p in &profiles {
            assert!((5..=20).contains(&p.first_start.0));
            assert!((70..=90).contains(&p.true_grade));
            assert!((-2..=2).contains(&p.review_bias));
        }
    }

    #[test]
    fn ids_up_to_u32_max_accepted() {
        let profiles = PopulationBuilder::new(3, 1).first_id(u32::MAX - 2).build().unwrap();
        let ids: Vec<u32> = profiles.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, [u32::MAX - 2, u32::MAX - 1, u32::MAX]);
    }

    #[test]
    fn ids_past_u32_max_rejected() {
        let err = PopulationBuilder::new(4, 1).first_id(u32::MAX - 2).build().unwrap_err();
        assert!(matches!(err, PrError::Config(_)));
    }

    #[test]
    fn empty_population_at_any_first_id() {
        assert!(PopulationBuilder::new(0, 1).first_id(u32::MAX).build().unwrap().is_empty());
    }
}
