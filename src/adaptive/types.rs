use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];
    pub const MIN: Difficulty = Self::Easy;
    pub const MAX: Difficulty = Self::Hard;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn from_index(index: usize) -> Result<Self, Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::InvalidTierIndex(index))
    }

    /// One tier up, saturating at `Hard`.
    pub fn harder(&self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            _ => Self::Hard,
        }
    }

    /// One tier down, saturating at `Easy`.
    pub fn easier(&self) -> Self {
        match self {
            Self::Hard => Self::Medium,
            _ => Self::Easy,
        }
    }

    pub fn is_min(&self) -> bool {
        *self == Self::MIN
    }

    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }

    /// Inclusive operand bounds used by the puzzle generator.
    pub fn operand_range(&self) -> (i64, i64) {
        match self {
            Self::Easy => (1, 10),
            Self::Medium => (5, 50),
            Self::Hard => (10, 100),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(Error::InvalidDifficulty(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Computed in `f64`, so no operands can overflow. Division rounds to two
    /// decimals; dividing by zero yields 0.
    pub fn apply(&self, lhs: i64, rhs: i64) -> f64 {
        let (lhs, rhs) = (lhs as f64, rhs as f64);
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs == 0.0 {
                    0.0
                } else {
                    (lhs / rhs * 100.0).round() / 100.0
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single answered question. Created by the tracker and never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub puzzle_id: u64,
    pub difficulty: Difficulty,
    pub correct: bool,
    pub response_time: Duration,
    pub operand1: i64,
    pub operand2: i64,
    pub operator: Operator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub next: Difficulty,
    pub reason: String,
}

impl Decision {
    pub fn new(next: Difficulty, reason: impl Into<String>) -> Self {
        Self {
            next,
            reason: reason.into(),
        }
    }

    pub fn is_change_from(&self, current: Difficulty) -> bool {
        self.next != current
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatistics {
    pub learner_name: String,
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub accuracy: f64,
    pub recent_accuracy: f64,
    pub avg_response_time: f64,
    pub current_streak: usize,
    pub max_streak: usize,
    pub difficulty_transitions: usize,
    pub final_difficulty: String,
    pub session_duration: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_order() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_steps_are_clamped() {
        assert_eq!(Difficulty::Easy.easier(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.harder(), Difficulty::Medium);
        assert_eq!(Difficulty::Medium.harder(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.harder(), Difficulty::Hard);
        assert_eq!(Difficulty::Hard.easier(), Difficulty::Medium);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Hard ".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "Expert".parse::<Difficulty>(),
            Err(Error::InvalidDifficulty(name)) if name == "Expert"
        ));
    }

    #[test]
    fn test_difficulty_from_index() {
        assert_eq!(Difficulty::from_index(1).unwrap(), Difficulty::Medium);
        assert!(matches!(
            Difficulty::from_index(3),
            Err(Error::InvalidTierIndex(3))
        ));
    }

    #[test]
    fn test_operator_division() {
        assert_eq!(Operator::Divide.apply(10, 3), 3.33);
        assert_eq!(Operator::Divide.apply(2, 3), 0.67);
        assert_eq!(Operator::Divide.apply(7, 0), 0.0);
        assert_eq!(Operator::Subtract.apply(3, 9), -6.0);
    }

    #[test]
    fn test_operator_extreme_operands_do_not_overflow() {
        assert_eq!(Operator::Add.apply(i64::MAX, i64::MAX), 2.0 * i64::MAX as f64);
        assert_eq!(Operator::Subtract.apply(i64::MIN, i64::MAX), i64::MIN as f64 - i64::MAX as f64);
        assert!(Operator::Multiply.apply(i64::MAX, i64::MAX).is_finite());
        assert_eq!(Operator::Multiply.apply(12, -4), -48.0);
    }
}
