use std::path::PathBuf;

use crate::adaptive::config::AdaptiveConfig;
use crate::adaptive::decision::PolicyKind;
use crate::adaptive::types::Difficulty;

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    /// Daily-rolling session log directory; `None` keeps logs on stderr only.
    pub log_dir: Option<PathBuf>,
    pub learner_name: Option<String>,
    pub start_difficulty: Difficulty,
    pub policy: PolicyKind,
    pub seed: Option<u64>,
    pub summary_json: Option<PathBuf>,
    pub adaptive: AdaptiveConfig,
}

impl Config {
    pub fn from_env() -> Self {
        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());

        let file_logs = std::env::var("ENABLE_FILE_LOGS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let log_dir = file_logs.then(|| {
            PathBuf::from(std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()))
        });

        let learner_name = std::env::var("MATH_LEARNER")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let start_difficulty = std::env::var("MATH_START_DIFFICULTY")
            .ok()
            .and_then(|value| value.parse::<Difficulty>().ok())
            .unwrap_or_default();

        let policy = std::env::var("MATH_POLICY")
            .map(|value| PolicyKind::parse(&value))
            .unwrap_or(PolicyKind::Heuristic);

        let seed = std::env::var("MATH_SEED")
            .ok()
            .and_then(|value| value.parse::<u64>().ok());

        let summary_json = std::env::var("MATH_SUMMARY_JSON")
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            log_dir,
            learner_name,
            start_difficulty,
            policy,
            seed,
            summary_json,
            adaptive: AdaptiveConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_dir: None,
            learner_name: None,
            start_difficulty: Difficulty::Easy,
            policy: PolicyKind::Heuristic,
            seed: None,
            summary_json: None,
            adaptive: AdaptiveConfig::default(),
        }
    }
}
