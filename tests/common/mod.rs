#![allow(dead_code)]

use std::time::Duration;

use math_adventures::adaptive::{Difficulty, ManualClock, Operator, PerformanceTracker};

pub fn tracker_with_window(window: usize, results: &[bool]) -> PerformanceTracker<ManualClock> {
    let mut tracker = PerformanceTracker::with_clock("tester", window, ManualClock::new());
    record_all(&mut tracker, Difficulty::Medium, results);
    tracker
}

pub fn tracker_with(results: &[bool]) -> PerformanceTracker<ManualClock> {
    tracker_with_window(5, results)
}

pub fn record_all(
    tracker: &mut PerformanceTracker<ManualClock>,
    difficulty: Difficulty,
    results: &[bool],
) {
    for &correct in results {
        let id = tracker.len() as u64 + 1;
        tracker.record_attempt(
            id,
            difficulty,
            correct,
            Duration::from_millis(1500),
            12,
            4,
            Operator::Divide,
        );
    }
}

/// `correct` hits followed by `misses`, then a trailing run of `streak` hits.
pub fn pattern(correct: usize, misses: usize, streak: usize) -> Vec<bool> {
    let mut results = vec![true; correct];
    results.extend(std::iter::repeat(false).take(misses));
    results.extend(std::iter::repeat(true).take(streak));
    results
}
