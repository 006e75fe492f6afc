use crate::adaptive::clock::Clock;
use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::decision::{AdaptationPolicy, DifficultyPolicy, PerformanceSnapshot, PolicyKind};
use crate::adaptive::tracker::PerformanceTracker;
use crate::adaptive::types::{Decision, Difficulty};

pub const EARLY_SESSION_REASON: &str = "Early session - maintaining difficulty";

/// Picks the next tier from a tracker's recent performance.
///
/// Nothing moves until `early_session_minimum` attempts are on record; after
/// that the policy chosen at construction decides, one tier at a time.
/// Recent accuracy always comes from the tracker's own window, so decisions
/// agree with `PerformanceTracker::statistics`.
pub struct AdaptiveEngine {
    config: AdaptiveConfig,
    policy: AdaptationPolicy,
    last_decision_reason: Option<String>,
}

impl AdaptiveEngine {
    pub fn new(config: AdaptiveConfig, kind: PolicyKind) -> Self {
        let policy = kind.build(&config);
        Self::with_policy(config, policy)
    }

    pub fn with_policy(config: AdaptiveConfig, policy: AdaptationPolicy) -> Self {
        Self {
            config,
            policy,
            last_decision_reason: None,
        }
    }

    pub fn decide_next_difficulty<C: Clock>(
        &mut self,
        current: Difficulty,
        tracker: &PerformanceTracker<C>,
    ) -> Decision {
        if tracker.len() < self.config.early_session_minimum {
            return Decision::new(current, EARLY_SESSION_REASON);
        }

        let snapshot = self.snapshot(tracker);
        let decision = self.policy.decide(current, &snapshot);

        tracing::debug!(
            policy = self.policy.name(),
            current = %current,
            next = %decision.next,
            recent_accuracy = snapshot.recent_accuracy,
            streak = snapshot.streak,
            reason = %decision.reason,
            "difficulty decision"
        );

        self.last_decision_reason = Some(decision.reason.clone());
        decision
    }

    /// How close recent accuracy sits to the target band, in [0, 1].
    pub fn confidence_score<C: Clock>(&self, tracker: &PerformanceTracker<C>) -> f64 {
        if tracker.len() < self.config.confidence_min_attempts {
            return 0.0;
        }
        let accuracy = tracker.recent_accuracy();
        (1.0 - (accuracy - self.config.confidence_target).abs() / 100.0).clamp(0.0, 1.0)
    }

    pub fn last_decision_reason(&self) -> Option<&str> {
        self.last_decision_reason.as_deref()
    }

    pub fn policy(&self) -> &AdaptationPolicy {
        &self.policy
    }

    pub fn config(&self) -> &AdaptiveConfig {
        &self.config
    }

    fn snapshot<C: Clock>(&self, tracker: &PerformanceTracker<C>) -> PerformanceSnapshot {
        PerformanceSnapshot {
            recent_accuracy: tracker.recent_accuracy(),
            streak: tracker.streak(),
        }
    }
}

impl Default for AdaptiveEngine {
    fn default() -> Self {
        Self::new(AdaptiveConfig::default(), PolicyKind::Heuristic)
    }
}
