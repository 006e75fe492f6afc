use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::adaptive::types::{Difficulty, Operator};
use crate::error::Result;

const RECENT_PUZZLE_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    pub id: u64,
    pub difficulty: Difficulty,
    pub operand1: i64,
    pub operand2: i64,
    pub operator: Operator,
    pub answer: f64,
    pub text: String,
}

impl Puzzle {
    pub fn new(id: u64, difficulty: Difficulty, operand1: i64, operand2: i64, operator: Operator) -> Self {
        Self {
            id,
            difficulty,
            operand1,
            operand2,
            operator,
            answer: operator.apply(operand1, operand2),
            text: format!("{operand1} {operator} {operand2} = ?"),
        }
    }

    /// Answers within 0.01 of the expected value count as correct.
    pub fn is_correct(&self, answer: f64) -> bool {
        (answer - self.answer).abs() < 0.01
    }
}

pub struct PuzzleGenerator {
    rng: StdRng,
    counter: u64,
    recent: VecDeque<Puzzle>,
}

impl PuzzleGenerator {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            counter: 0,
            recent: VecDeque::with_capacity(RECENT_PUZZLE_CAPACITY),
        }
    }

    pub fn generate(&mut self, difficulty: Difficulty) -> Puzzle {
        self.counter += 1;
        let (min, max) = difficulty.operand_range();
        let operand1 = self.rng.random_range(min..=max);
        let operand2 = self.rng.random_range(min..=max);
        let operator = Operator::ALL[self.rng.random_range(0..Operator::ALL.len())];

        let puzzle = Puzzle::new(self.counter, difficulty, operand1, operand2, operator);

        self.recent.push_back(puzzle.clone());
        if self.recent.len() > RECENT_PUZZLE_CAPACITY {
            self.recent.pop_front();
        }

        puzzle
    }

    /// Generates for a tier given by name; unknown names are rejected.
    pub fn generate_named(&mut self, difficulty: &str) -> Result<Puzzle> {
        let difficulty: Difficulty = difficulty.parse()?;
        Ok(self.generate(difficulty))
    }

    /// The last `count` puzzles, oldest first.
    pub fn recent_puzzles(&self, count: usize) -> Vec<Puzzle> {
        let skip = self.recent.len().saturating_sub(count);
        self.recent.iter().skip(skip).cloned().collect()
    }

    pub fn generated_count(&self) -> u64 {
        self.counter
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}
