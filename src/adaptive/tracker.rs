use std::time::Duration;

use chrono::Utc;

use crate::adaptive::clock::{Clock, SystemClock};
use crate::adaptive::types::{Attempt, Difficulty, Operator, SessionStatistics};

/// Append-only record of one learner's session.
///
/// Every metric is recomputed from the attempt log on demand; an empty window
/// reports 0.0 rather than failing.
pub struct PerformanceTracker<C: Clock = SystemClock> {
    learner_name: String,
    performance_window: usize,
    clock: C,
    session_start: Duration,
    attempts: Vec<Attempt>,
    difficulty_history: Vec<Difficulty>,
}

impl PerformanceTracker<SystemClock> {
    pub fn new(learner_name: impl Into<String>, performance_window: usize) -> Self {
        Self::with_clock(learner_name, performance_window, SystemClock::new())
    }
}

impl<C: Clock> PerformanceTracker<C> {
    pub fn with_clock(learner_name: impl Into<String>, performance_window: usize, clock: C) -> Self {
        let session_start = clock.now();
        Self {
            learner_name: learner_name.into(),
            performance_window,
            clock,
            session_start,
            attempts: Vec::new(),
            difficulty_history: Vec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn record_attempt(
        &mut self,
        puzzle_id: u64,
        difficulty: Difficulty,
        correct: bool,
        response_time: Duration,
        operand1: i64,
        operand2: i64,
        operator: Operator,
    ) -> &Attempt {
        let attempt = Attempt {
            seq: self.attempts.len() as u64 + 1,
            timestamp: Utc::now(),
            puzzle_id,
            difficulty,
            correct,
            response_time,
            operand1,
            operand2,
            operator,
        };
        tracing::trace!(seq = attempt.seq, correct, difficulty = %difficulty, "attempt recorded");
        self.attempts.push(attempt);
        &self.attempts[self.attempts.len() - 1]
    }

    pub fn record_difficulty_change(&mut self, difficulty: Difficulty) {
        self.difficulty_history.push(difficulty);
    }

    fn window(&self, window: Option<usize>) -> &[Attempt] {
        match window {
            Some(size) => &self.attempts[self.attempts.len().saturating_sub(size)..],
            None => &self.attempts,
        }
    }

    /// Percentage of correct attempts among the last `window` (all when `None`).
    pub fn accuracy(&self, window: Option<usize>) -> f64 {
        let slice = self.window(window);
        if slice.is_empty() {
            return 0.0;
        }
        let correct = slice.iter().filter(|a| a.correct).count();
        correct as f64 / slice.len() as f64 * 100.0
    }

    pub fn recent_accuracy(&self) -> f64 {
        self.accuracy(Some(self.performance_window))
    }

    pub fn streak(&self) -> usize {
        self.attempts
            .iter()
            .rev()
            .take_while(|a| a.correct)
            .count()
    }

    pub fn max_streak(&self) -> usize {
        let mut max_streak = 0;
        let mut current = 0;
        for attempt in &self.attempts {
            if attempt.correct {
                current += 1;
                max_streak = max_streak.max(current);
            } else {
                current = 0;
            }
        }
        max_streak
    }

    /// Mean latency in seconds.
    pub fn avg_response_time(&self, window: Option<usize>) -> f64 {
        let slice = self.window(window);
        if slice.is_empty() {
            return 0.0;
        }
        let total: f64 = slice.iter().map(|a| a.response_time.as_secs_f64()).sum();
        total / slice.len() as f64
    }

    pub fn statistics(&self) -> SessionStatistics {
        let total = self.attempts.len();
        let correct = self.attempts.iter().filter(|a| a.correct).count();

        SessionStatistics {
            learner_name: self.learner_name.clone(),
            total_questions: total,
            correct_answers: correct,
            incorrect_answers: total - correct,
            accuracy: self.accuracy(None),
            recent_accuracy: self.recent_accuracy(),
            avg_response_time: self.avg_response_time(None),
            current_streak: self.streak(),
            max_streak: self.max_streak(),
            difficulty_transitions: self.difficulty_history.len().saturating_sub(1),
            final_difficulty: self
                .difficulty_history
                .last()
                .map(|d| d.as_str().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            session_duration: self.elapsed().as_secs_f64(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.session_start)
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn difficulty_history(&self) -> &[Difficulty] {
        &self.difficulty_history
    }

    pub fn current_difficulty(&self) -> Option<Difficulty> {
        self.difficulty_history.last().copied()
    }

    pub fn learner_name(&self) -> &str {
        &self.learner_name
    }

    pub fn performance_window(&self) -> usize {
        self.performance_window
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}
