use std::io::{BufRead, Write};

use crate::adaptive::clock::{Clock, SystemClock};
use crate::adaptive::engine::AdaptiveEngine;
use crate::adaptive::tracker::PerformanceTracker;
use crate::adaptive::types::{Difficulty, SessionStatistics};
use crate::config::Config;
use crate::error::Result;
use crate::puzzle::{Puzzle, PuzzleGenerator};

const DEFAULT_LEARNER: &str = "Learner";
const QUICK_STATS_EVERY: usize = 3;
const CONTINUE_PROMPT_FROM: usize = 5;
const RULE: &str = "============================================================";

/// Where the session gets its questions from.
pub trait PuzzleSource {
    fn next_puzzle(&mut self, difficulty: Difficulty) -> Puzzle;
}

impl PuzzleSource for PuzzleGenerator {
    fn next_puzzle(&mut self, difficulty: Difficulty) -> Puzzle {
        self.generate(difficulty)
    }
}

/// Tier suggested for the next session from overall accuracy.
pub fn recommend_next_difficulty(accuracy: f64) -> (Difficulty, &'static str) {
    if accuracy >= 80.0 {
        (Difficulty::Hard, "Try Hard level - you're doing great!")
    } else if accuracy >= 60.0 {
        (Difficulty::Medium, "Continue with Medium level - good progress!")
    } else {
        (Difficulty::Easy, "Practice Easy level more - keep trying!")
    }
}

/// Console question loop over any reader/writer pair.
pub struct Session<R, W, C = SystemClock> {
    input: R,
    output: W,
    clock: C,
    config: Config,
    puzzles: Box<dyn PuzzleSource>,
}

impl<R: BufRead, W: Write> Session<R, W, SystemClock> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        let puzzles: Box<dyn PuzzleSource> = match config.seed {
            Some(seed) => Box::new(PuzzleGenerator::with_seed(seed)),
            None => Box::new(PuzzleGenerator::new()),
        };
        Self::with_parts(input, output, config, puzzles, SystemClock::new())
    }
}

impl<R: BufRead, W: Write, C: Clock + Clone> Session<R, W, C> {
    pub fn with_parts(
        input: R,
        output: W,
        config: Config,
        puzzles: Box<dyn PuzzleSource>,
        clock: C,
    ) -> Self {
        Self {
            input,
            output,
            clock,
            config,
            puzzles,
        }
    }

    /// Runs the whole session and returns the final statistics. The summary
    /// is printed however the loop ends: quit, declined continue, or EOF.
    pub fn run(&mut self) -> Result<SessionStatistics> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "Welcome to Math Adventures!")?;
        writeln!(self.output, "Adaptive arithmetic practice")?;
        writeln!(self.output, "{RULE}\n")?;

        let learner = match self.config.learner_name.clone() {
            Some(name) => name,
            None => self
                .prompt("Enter your name: ")?
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_LEARNER.to_string()),
        };

        writeln!(self.output, "\nChoose starting difficulty:")?;
        writeln!(self.output, "   [1] Easy   [2] Medium   [3] Hard")?;
        let mut current = self
            .prompt("Your choice (1-3): ")?
            .and_then(|choice| choice.trim().parse::<usize>().ok())
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|index| Difficulty::from_index(index).ok())
            .unwrap_or(self.config.start_difficulty);

        let mut tracker = PerformanceTracker::with_clock(
            learner,
            self.config.adaptive.performance_window,
            self.clock.clone(),
        );
        let mut engine = AdaptiveEngine::new(self.config.adaptive.clone(), self.config.policy);
        tracker.record_difficulty_change(current);

        tracing::info!(
            learner = tracker.learner_name(),
            difficulty = %current,
            policy = self.config.policy.as_str(),
            "session started"
        );
        writeln!(self.output, "\nStarting at {current} level")?;

        self.question_loop(&mut tracker, &mut engine, &mut current)?;

        let stats = tracker.statistics();
        self.print_summary(&stats)?;

        if let Some(path) = self.config.summary_json.clone() {
            let json = serde_json::to_string_pretty(&stats)?;
            std::fs::write(&path, json)?;
            tracing::info!(path = %path.display(), "session summary written");
        }

        tracing::info!(
            total = stats.total_questions,
            accuracy = stats.accuracy,
            final_difficulty = %stats.final_difficulty,
            "session ended"
        );
        Ok(stats)
    }

    fn question_loop(
        &mut self,
        tracker: &mut PerformanceTracker<C>,
        engine: &mut AdaptiveEngine,
        current: &mut Difficulty,
    ) -> Result<()> {
        let mut question_number = 0usize;

        loop {
            question_number += 1;
            let puzzle = self.puzzles.next_puzzle(*current);

            writeln!(self.output, "\nQuestion {question_number} ({current}):")?;
            writeln!(self.output, "   {}", puzzle.text)?;

            let started = self.clock.now();
            let Some(line) = self.prompt("Your answer: ")? else {
                break;
            };
            let line = line.trim();
            if matches!(line.to_lowercase().as_str(), "quit" | "exit" | "q") {
                break;
            }

            let answer = match line.parse::<f64>().ok().filter(|value| value.is_finite()) {
                Some(value) => value,
                None => {
                    tracing::warn!(input = line, "rejected non-numeric answer");
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };
            let response_time = self.clock.now().saturating_sub(started);
            let correct = puzzle.is_correct(answer);

            tracker.record_attempt(
                puzzle.id,
                *current,
                correct,
                response_time,
                puzzle.operand1,
                puzzle.operand2,
                puzzle.operator,
            );

            if correct {
                writeln!(
                    self.output,
                    "Correct! (Time: {:.1}s)",
                    response_time.as_secs_f64()
                )?;
            } else {
                writeln!(self.output, "Incorrect. The answer is {}", puzzle.answer)?;
            }

            if question_number % QUICK_STATS_EVERY == 0 {
                self.print_quick_stats(tracker)?;
            }

            let decision = engine.decide_next_difficulty(*current, tracker);
            if decision.is_change_from(*current) {
                if decision.next > *current {
                    writeln!(self.output, "Level up! Reason: {}", decision.reason)?;
                } else {
                    writeln!(self.output, "Adjusted difficulty. Reason: {}", decision.reason)?;
                }
                tracing::info!(
                    from = %current,
                    to = %decision.next,
                    reason = %decision.reason,
                    "difficulty changed"
                );
                *current = decision.next;
                tracker.record_difficulty_change(decision.next);
            }

            if question_number >= CONTINUE_PROMPT_FROM {
                let reply = self.prompt("\nContinue? (y/n): ")?;
                if reply.map(|r| r.trim().to_lowercase()) != Some("y".to_string()) {
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_quick_stats(&mut self, tracker: &PerformanceTracker<C>) -> Result<()> {
        writeln!(self.output, "\nQuick Stats:")?;
        writeln!(self.output, "   Accuracy: {:.1}%", tracker.accuracy(None))?;
        writeln!(self.output, "   Avg Time: {:.1}s", tracker.avg_response_time(None))?;
        writeln!(self.output, "   Streak: {}", tracker.streak())?;
        Ok(())
    }

    fn print_summary(&mut self, stats: &SessionStatistics) -> Result<()> {
        let out = &mut self.output;
        writeln!(out, "\n{RULE}")?;
        writeln!(out, "Session Summary")?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "\nStudent: {}", stats.learner_name)?;
        writeln!(out, "Questions Answered: {}", stats.total_questions)?;
        writeln!(out, "Correct: {}", stats.correct_answers)?;
        writeln!(out, "Incorrect: {}", stats.incorrect_answers)?;
        writeln!(out, "\nPerformance Metrics:")?;
        writeln!(out, "   Overall Accuracy: {:.1}%", stats.accuracy)?;
        writeln!(out, "   Recent Accuracy: {:.1}%", stats.recent_accuracy)?;
        writeln!(out, "   Avg Response Time: {:.1}s", stats.avg_response_time)?;
        writeln!(out, "   Current Streak: {}", stats.current_streak)?;
        writeln!(out, "   Max Streak: {}", stats.max_streak)?;
        writeln!(out, "\nLearning Progress:")?;
        writeln!(out, "   Final Level: {}", stats.final_difficulty)?;
        writeln!(out, "   Difficulty Transitions: {}", stats.difficulty_transitions)?;
        writeln!(out, "   Session Duration: {:.1}s", stats.session_duration)?;

        let (_, advice) = recommend_next_difficulty(stats.accuracy);
        writeln!(out, "\nRecommendation for Next Session:")?;
        writeln!(out, "   {advice}")?;
        writeln!(out, "\n{RULE}")?;
        writeln!(out, "Thanks for using Math Adventures!")?;
        writeln!(out, "{RULE}")?;
        out.flush()?;
        Ok(())
    }

    /// `None` on end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
