//! Contention reports for `AtomicOption` scenarios.
//!
//! A scenario records what its threads observed into a report; `verify`
//! turns that record into the first violated invariant, if any.

use core::time::Duration;
use std::collections::HashSet;

pub mod config;

pub use config::ContentionConfig;

/// An invariant a contention scenario found broken.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ContentionViolation {
    #[display("round {round}: {winners} threads won set_if_none, expected exactly one")]
    WinnerCount { round: usize, winners: usize },

    #[display("round {round}: the cell did not hold the winning thread's value")]
    WinnerNotStored { round: usize },

    #[display("handoff delivered {delivered} of {expected} values")]
    LostValues { expected: usize, delivered: usize },

    #[display("handoff delivered value {value} more than once")]
    DuplicateValue { value: usize },

    #[display("{count} worker threads panicked")]
    WorkerPanicked { count: usize },
}

/// Outcome of one single-writer race round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Threads whose `set_if_none` returned `true`
    pub winners: usize,
    /// Whether `get` after the round returned the winner's value
    pub winner_stored: bool,
}

/// Result of a `SetOnceRace` run.
#[derive(Debug, Clone)]
pub struct ContentionReport {
    /// One entry per round that ran before the time limit
    pub rounds: Vec<RoundOutcome>,
    /// Threads racing per round
    pub contenders: usize,
    /// Worker threads that panicked across all rounds
    pub panicked: usize,
    /// Wall-clock time for the run
    pub duration: Duration,
}

impl ContentionReport {
    /// Total `set_if_none` attempts across every round.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rounds.len() * self.contenders
    }

    /// Rounds per second.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn rounds_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.rounds.len() as f64 / secs
        }
    }

    /// Checks that every round had a single winner whose value stuck.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in round order.
    pub fn verify(&self) -> Result<(), ContentionViolation> {
        if self.panicked > 0 {
            return Err(ContentionViolation::WorkerPanicked {
                count: self.panicked,
            });
        }
        for (round, outcome) in self.rounds.iter().enumerate() {
            if outcome.winners != 1 {
                return Err(ContentionViolation::WinnerCount {
                    round,
                    winners: outcome.winners,
                });
            }
            if !outcome.winner_stored {
                return Err(ContentionViolation::WinnerNotStored { round });
            }
        }
        Ok(())
    }
}

/// Result of a `Handoff` run.
#[derive(Debug, Clone)]
pub struct HandoffReport {
    /// Values offered by all producers
    pub expected: usize,
    /// Values taken by consumers, in no particular order
    pub delivered: Vec<usize>,
    /// Worker threads that panicked
    pub panicked: usize,
    /// Wall-clock time for the run
    pub duration: Duration,
}

impl HandoffReport {
    /// Checks that every produced value reached exactly one consumer.
    ///
    /// # Errors
    ///
    /// Returns a duplicate before reporting a shortfall, so a double
    /// delivery is never masked by a lost value.
    pub fn verify(&self) -> Result<(), ContentionViolation> {
        if self.panicked > 0 {
            return Err(ContentionViolation::WorkerPanicked {
                count: self.panicked,
            });
        }
        let mut seen = HashSet::with_capacity(self.delivered.len());
        for value in &self.delivered {
            if !seen.insert(*value) {
                return Err(ContentionViolation::DuplicateValue { value: *value });
            }
        }
        if self.delivered.len() != self.expected {
            return Err(ContentionViolation::LostValues {
                expected: self.expected,
                delivered: self.delivered.len(),
            });
        }
        Ok(())
    }
}
