pub mod clock;
pub mod config;
pub mod decision;
pub mod engine;
pub mod tracker;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::AdaptiveConfig;
pub use decision::{AdaptationPolicy, DifficultyPolicy, PerformanceSnapshot, PolicyKind};
pub use engine::AdaptiveEngine;
pub use tracker::PerformanceTracker;
pub use types::*;
