use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeuristicBands {
    pub struggle_below: f64,
    pub solid_from: f64,
    pub strong_from: f64,
    pub strong_streak: usize,
    pub solid_streak: usize,
}

impl Default for HeuristicBands {
    fn default() -> Self {
        Self {
            struggle_below: 50.0,
            solid_from: 60.0,
            strong_from: 80.0,
            strong_streak: 2,
            solid_streak: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveConfig {
    pub accuracy_threshold_high: f64,
    pub accuracy_threshold_low: f64,
    pub streak_threshold: usize,
    /// No adaptation until this many attempts are on record.
    pub early_session_minimum: usize,
    /// Trailing attempts used for recent accuracy; handed to the tracker,
    /// which is the only place the window is applied.
    pub performance_window: usize,
    pub heuristic: HeuristicBands,
    pub confidence_target: f64,
    pub confidence_min_attempts: usize,
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            accuracy_threshold_high: 80.0,
            accuracy_threshold_low: 50.0,
            streak_threshold: 2,
            early_session_minimum: 3,
            performance_window: 5,
            heuristic: HeuristicBands::default(),
            confidence_target: 75.0,
            confidence_min_attempts: 3,
        }
    }
}

impl AdaptiveConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("MATH_ACCURACY_HIGH") {
            config.accuracy_threshold_high = val.parse().unwrap_or(config.accuracy_threshold_high);
        }
        if let Ok(val) = std::env::var("MATH_ACCURACY_LOW") {
            config.accuracy_threshold_low = val.parse().unwrap_or(config.accuracy_threshold_low);
        }
        if let Ok(val) = std::env::var("MATH_STREAK_THRESHOLD") {
            config.streak_threshold = val.parse().unwrap_or(config.streak_threshold);
        }
        if let Ok(val) = std::env::var("MATH_EARLY_SESSION_MINIMUM") {
            config.early_session_minimum = val.parse().unwrap_or(config.early_session_minimum);
        }
        if let Ok(val) = std::env::var("MATH_PERFORMANCE_WINDOW") {
            config.performance_window = val.parse().unwrap_or(config.performance_window);
        }

        config
    }
}
