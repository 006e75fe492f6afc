//! Property-based tests for the performance tracker and tier movement.
//!
//! - accuracy stays within [0, 100] and hits the ends exactly
//! - streak resets on a miss and grows by one per hit
//! - max streak never falls below the current streak
//! - statistics counts add up to the number of recorded attempts
//! - decisions never leave the tier set and never jump two tiers

mod common;

use proptest::prelude::*;

use math_adventures::adaptive::engine::EARLY_SESSION_REASON;
use math_adventures::adaptive::{AdaptiveConfig, AdaptiveEngine, Difficulty, PolicyKind};

use common::{record_all, tracker_with, tracker_with_window};

fn arb_results(max_len: usize) -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 0..=max_len)
}

fn arb_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn arb_policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![Just(PolicyKind::Threshold), Just(PolicyKind::Heuristic)]
}

proptest! {
    #[test]
    fn accuracy_is_bounded_and_exact_at_extremes(
        results in arb_results(40),
        window in 1usize..=50,
    ) {
        let tracker = tracker_with_window(window, &results);
        let slice = &results[results.len().saturating_sub(window)..];
        let accuracy = tracker.accuracy(Some(window));

        prop_assert!((0.0..=100.0).contains(&accuracy));
        if !slice.is_empty() {
            prop_assert_eq!(accuracy == 100.0, slice.iter().all(|&c| c));
            prop_assert_eq!(accuracy == 0.0, slice.iter().all(|&c| !c));
        } else {
            prop_assert_eq!(accuracy, 0.0);
        }
    }

    #[test]
    fn streak_resets_then_counts_up(prefix in arb_results(20), hits in 0usize..15) {
        let mut tracker = tracker_with(&prefix);
        record_all(&mut tracker, Difficulty::Easy, &[false]);
        prop_assert_eq!(tracker.streak(), 0);

        for expected in 1..=hits {
            record_all(&mut tracker, Difficulty::Easy, &[true]);
            prop_assert_eq!(tracker.streak(), expected);
        }
    }

    #[test]
    fn max_streak_dominates_current_streak(results in arb_results(60)) {
        let tracker = tracker_with(&results);
        prop_assert!(tracker.max_streak() >= tracker.streak());

        let longest = results
            .split(|&c| !c)
            .map(|run| run.len())
            .max()
            .unwrap_or(0);
        prop_assert_eq!(tracker.max_streak(), longest);
    }

    #[test]
    fn statistics_counts_add_up(results in arb_results(60)) {
        let tracker = tracker_with(&results);
        let stats = tracker.statistics();

        prop_assert_eq!(stats.total_questions, results.len());
        prop_assert_eq!(stats.correct_answers + stats.incorrect_answers, results.len());
        prop_assert_eq!(stats.correct_answers, results.iter().filter(|&&c| c).count());
    }

    #[test]
    fn decisions_step_at_most_one_tier(
        results in arb_results(30),
        current in arb_difficulty(),
        kind in arb_policy(),
    ) {
        let mut engine = AdaptiveEngine::new(AdaptiveConfig::default(), kind);
        let tracker = tracker_with(&results);
        let decision = engine.decide_next_difficulty(current, &tracker);

        let step = decision.next.index() as i64 - current.index() as i64;
        prop_assert!(step.abs() <= 1);
        prop_assert!(Difficulty::ALL.contains(&decision.next));
    }

    #[test]
    fn warm_up_never_moves(
        results in arb_results(2),
        current in arb_difficulty(),
        kind in arb_policy(),
    ) {
        let mut engine = AdaptiveEngine::new(AdaptiveConfig::default(), kind);
        let tracker = tracker_with(&results);
        let decision = engine.decide_next_difficulty(current, &tracker);

        prop_assert_eq!(decision.next, current);
        prop_assert_eq!(decision.reason.as_str(), EARLY_SESSION_REASON);
    }
}
