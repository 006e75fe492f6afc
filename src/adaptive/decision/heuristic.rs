use crate::adaptive::config::{AdaptiveConfig, HeuristicBands};
use crate::adaptive::decision::{DifficultyPolicy, PerformanceSnapshot};
use crate::adaptive::types::{Decision, Difficulty};

/// Hand-built decision tree over recent accuracy bands. First matching band
/// wins; blocked moves at either end hold with their own reason.
#[derive(Debug, Clone, Default)]
pub struct HeuristicPolicy {
    bands: HeuristicBands,
}

impl HeuristicPolicy {
    pub fn new(bands: HeuristicBands) -> Self {
        Self { bands }
    }

    pub fn from_config(config: &AdaptiveConfig) -> Self {
        Self::new(config.heuristic.clone())
    }

    pub fn bands(&self) -> &HeuristicBands {
        &self.bands
    }
}

impl DifficultyPolicy for HeuristicPolicy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn decide(&self, current: Difficulty, snapshot: &PerformanceSnapshot) -> Decision {
        let accuracy = snapshot.recent_accuracy;
        let streak = snapshot.streak;
        let bands = &self.bands;

        if accuracy < bands.struggle_below {
            if current.is_min() {
                Decision::new(current, format!("Already at {current} level"))
            } else {
                Decision::new(
                    current.easier(),
                    format!(
                        "Accuracy {accuracy:.1}% below {:.0}% threshold",
                        bands.struggle_below
                    ),
                )
            }
        } else if accuracy >= bands.strong_from && streak >= bands.strong_streak {
            if current.is_max() {
                Decision::new(current, format!("Already at {current} level"))
            } else {
                Decision::new(
                    current.harder(),
                    format!("High accuracy {accuracy:.1}% + streak {streak}"),
                )
            }
        } else if accuracy >= bands.solid_from
            && accuracy < bands.strong_from
            && streak >= bands.solid_streak
        {
            if current.is_min() {
                Decision::new(
                    current.harder(),
                    format!("Solid performance: {accuracy:.1}% accuracy ready for challenge"),
                )
            } else {
                Decision::new(
                    current,
                    format!("Solid performance: {accuracy:.1}% maintaining level"),
                )
            }
        } else {
            Decision::new(
                current,
                format!("Balanced performance: {accuracy:.1}% accuracy, maintaining level"),
            )
        }
    }
}
