pub mod heuristic;
pub mod threshold;

pub use heuristic::HeuristicPolicy;
pub use threshold::ThresholdPolicy;

use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::types::{Decision, Difficulty};

/// The two signals every policy reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceSnapshot {
    pub recent_accuracy: f64,
    pub streak: usize,
}

pub trait DifficultyPolicy {
    fn name(&self) -> &'static str;
    fn decide(&self, current: Difficulty, snapshot: &PerformanceSnapshot) -> Decision;
}

/// Policy picked once when the engine is built.
#[derive(Debug, Clone)]
pub enum AdaptationPolicy {
    Threshold(ThresholdPolicy),
    Heuristic(HeuristicPolicy),
}

impl AdaptationPolicy {
    pub fn threshold(config: &AdaptiveConfig) -> Self {
        Self::Threshold(ThresholdPolicy::from_config(config))
    }

    pub fn heuristic(config: &AdaptiveConfig) -> Self {
        Self::Heuristic(HeuristicPolicy::from_config(config))
    }
}

impl DifficultyPolicy for AdaptationPolicy {
    fn name(&self) -> &'static str {
        match self {
            Self::Threshold(policy) => policy.name(),
            Self::Heuristic(policy) => policy.name(),
        }
    }

    fn decide(&self, current: Difficulty, snapshot: &PerformanceSnapshot) -> Decision {
        match self {
            Self::Threshold(policy) => policy.decide(current, snapshot),
            Self::Heuristic(policy) => policy.decide(current, snapshot),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Threshold,
    Heuristic,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::Heuristic => "heuristic",
        }
    }

    /// Unknown names fall back to the heuristic tree.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "threshold" | "rule" | "rules" => Self::Threshold,
            _ => Self::Heuristic,
        }
    }

    pub fn build(&self, config: &AdaptiveConfig) -> AdaptationPolicy {
        match self {
            Self::Threshold => AdaptationPolicy::threshold(config),
            Self::Heuristic => AdaptationPolicy::heuristic(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_kind_parse() {
        assert_eq!(PolicyKind::parse("threshold"), PolicyKind::Threshold);
        assert_eq!(PolicyKind::parse(" Rules "), PolicyKind::Threshold);
        assert_eq!(PolicyKind::parse("heuristic"), PolicyKind::Heuristic);
        assert_eq!(PolicyKind::parse("nonsense"), PolicyKind::Heuristic);
    }

    #[test]
    fn test_enum_dispatches_to_wrapped_policy() {
        let config = AdaptiveConfig::default();
        let snapshot = PerformanceSnapshot {
            recent_accuracy: 60.0,
            streak: 0,
        };
        // threshold drops on a zero streak, the tree holds in the 60-80 band
        let threshold = PolicyKind::Threshold.build(&config);
        let heuristic = PolicyKind::Heuristic.build(&config);
        assert_eq!(threshold.name(), "threshold");
        assert_eq!(heuristic.name(), "heuristic");
        assert_eq!(threshold.decide(Difficulty::Medium, &snapshot).next, Difficulty::Easy);
        assert_eq!(heuristic.decide(Difficulty::Medium, &snapshot).next, Difficulty::Medium);
    }
}
