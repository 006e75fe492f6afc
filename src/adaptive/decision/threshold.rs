use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::decision::{DifficultyPolicy, PerformanceSnapshot};
use crate::adaptive::types::{Decision, Difficulty};

/// Fixed accuracy/streak rules. The up-move is tested before the down-move.
#[derive(Debug, Clone)]
pub struct ThresholdPolicy {
    high_accuracy: f64,
    low_accuracy: f64,
    streak_threshold: usize,
}

impl ThresholdPolicy {
    pub fn new(high_accuracy: f64, low_accuracy: f64, streak_threshold: usize) -> Self {
        Self {
            high_accuracy,
            low_accuracy,
            streak_threshold,
        }
    }

    pub fn from_config(config: &AdaptiveConfig) -> Self {
        Self::new(
            config.accuracy_threshold_high,
            config.accuracy_threshold_low,
            config.streak_threshold,
        )
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::from_config(&AdaptiveConfig::default())
    }
}

impl DifficultyPolicy for ThresholdPolicy {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn decide(&self, current: Difficulty, snapshot: &PerformanceSnapshot) -> Decision {
        let accuracy = snapshot.recent_accuracy;
        let streak = snapshot.streak;

        if accuracy >= self.high_accuracy && streak >= self.streak_threshold && !current.is_max() {
            Decision::new(
                current.harder(),
                format!("Strong performance: {accuracy:.1}% accuracy, {streak} streak"),
            )
        } else if (accuracy <= self.low_accuracy || streak == 0) && !current.is_min() {
            Decision::new(current.easier(), format!("Struggling: {accuracy:.1}% accuracy"))
        } else {
            Decision::new(
                current,
                format!("Maintaining level: {accuracy:.1}% accuracy in optimal zone"),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(recent_accuracy: f64, streak: usize) -> PerformanceSnapshot {
        PerformanceSnapshot {
            recent_accuracy,
            streak,
        }
    }

    #[test]
    fn test_moves_up_on_strong_run() {
        let policy = ThresholdPolicy::default();
        let decision = policy.decide(Difficulty::Medium, &snapshot(100.0, 5));
        assert_eq!(decision.next, Difficulty::Hard);
        assert_eq!(decision.reason, "Strong performance: 100.0% accuracy, 5 streak");
    }

    #[test]
    fn test_hard_with_strong_run_holds() {
        let policy = ThresholdPolicy::default();
        let decision = policy.decide(Difficulty::Hard, &snapshot(100.0, 5));
        assert_eq!(decision.next, Difficulty::Hard);
        assert!(decision.reason.contains("optimal zone"));
    }

    #[test]
    fn test_moves_down_on_low_accuracy_or_broken_streak() {
        let policy = ThresholdPolicy::default();
        let low = policy.decide(Difficulty::Hard, &snapshot(40.0, 1));
        assert_eq!(low.next, Difficulty::Medium);
        assert_eq!(low.reason, "Struggling: 40.0% accuracy");

        let broken = policy.decide(Difficulty::Medium, &snapshot(80.0, 0));
        assert_eq!(broken.next, Difficulty::Easy);
    }

    #[test]
    fn test_easy_never_moves_down() {
        let policy = ThresholdPolicy::default();
        let decision = policy.decide(Difficulty::Easy, &snapshot(0.0, 0));
        assert_eq!(decision.next, Difficulty::Easy);
        assert_eq!(decision.reason, "Maintaining level: 0.0% accuracy in optimal zone");
    }

    #[test]
    fn test_up_check_wins_when_both_conditions_hold() {
        // overlapping thresholds make both branches true; the up-move must win
        let policy = ThresholdPolicy::new(40.0, 60.0, 1);
        let decision = policy.decide(Difficulty::Medium, &snapshot(50.0, 3));
        assert_eq!(decision.next, Difficulty::Hard);
        assert!(decision.reason.starts_with("Strong performance"));
    }

    #[test]
    fn test_middle_band_holds() {
        let policy = ThresholdPolicy::default();
        let decision = policy.decide(Difficulty::Medium, &snapshot(60.0, 1));
        assert_eq!(decision.next, Difficulty::Medium);
    }
}
