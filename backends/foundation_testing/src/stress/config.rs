//! Contention scenario configuration.

use core::time::Duration;

/// How hard a scenario hammers a shared cell.
#[derive(Debug, Clone, Copy)]
pub struct ContentionConfig {
    /// Threads racing on the cell in every round
    contenders: usize,
    /// Number of rounds, each on a fresh cell
    rounds: usize,
    /// Optional wall-clock budget; remaining rounds are skipped once spent
    time_limit: Option<Duration>,
}

impl ContentionConfig {
    /// Creates a configuration with the defaults:
    ///
    /// - `contenders`: 8
    /// - `rounds`: 100
    /// - `time_limit`: None
    #[must_use]
    pub const fn new() -> Self {
        Self {
            contenders: 8,
            rounds: 100,
            time_limit: None,
        }
    }

    /// Sets the number of racing threads. Values below 1 are raised to 1.
    #[must_use]
    pub const fn contenders(mut self, count: usize) -> Self {
        self.contenders = if count == 0 { 1 } else { count };
        self
    }

    /// Sets the number of rounds.
    #[must_use]
    pub const fn rounds(mut self, count: usize) -> Self {
        self.rounds = count;
        self
    }

    /// Sets the wall-clock budget for the whole scenario.
    #[must_use]
    pub const fn time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn get_contenders(&self) -> usize {
        self.contenders
    }

    #[must_use]
    pub const fn get_rounds(&self) -> usize {
        self.rounds
    }

    #[must_use]
    pub const fn get_time_limit(&self) -> Option<Duration> {
        self.time_limit
    }
}

impl Default for ContentionConfig {
    fn default() -> Self {
        Self::new()
    }
}
