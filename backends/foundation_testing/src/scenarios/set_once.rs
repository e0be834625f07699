//! Single-writer race on an `AtomicOption`.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Instant;

use foundation_options::{AtomicOption, Optional};

use crate::stress::{ContentionConfig, ContentionReport, RoundOutcome};

/// Releases `contenders` threads at once against an empty cell, each
/// offering its own id through `set_if_none`, and records how many won.
///
/// # Examples
///
/// ```
/// use foundation_testing::scenarios::SetOnceRace;
/// use foundation_testing::stress::ContentionConfig;
///
/// let report = SetOnceRace::new(ContentionConfig::new().contenders(4).rounds(10)).run();
/// assert_eq!(report.rounds.len(), 10);
/// assert!(report.verify().is_ok());
/// ```
pub struct SetOnceRace {
    config: ContentionConfig,
}

impl SetOnceRace {
    #[must_use]
    pub const fn new(config: ContentionConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn run(self) -> ContentionReport {
        let start = Instant::now();
        let contenders = self.config.get_contenders();
        let mut rounds = Vec::new();
        let mut panicked = 0;

        for round in 0..self.config.get_rounds() {
            if let Some(limit) = self.config.get_time_limit() {
                if start.elapsed() >= limit {
                    tracing::info!("SetOnceRace: time limit reached after {round} rounds");
                    break;
                }
            }

            let (outcome, lost) = Self::race(contenders);
            if outcome.winners != 1 {
                tracing::error!("SetOnceRace: round {round} had {} winners", outcome.winners);
            }
            panicked += lost;
            rounds.push(outcome);
        }

        ContentionReport {
            rounds,
            contenders,
            panicked,
            duration: start.elapsed(),
        }
    }

    fn race(contenders: usize) -> (RoundOutcome, usize) {
        let cell = Arc::new(AtomicOption::new());
        let barrier = Arc::new(Barrier::new(contenders));
        let wins = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..contenders)
            .map(|id| {
                let cell = Arc::clone(&cell);
                let barrier = Arc::clone(&barrier);
                let wins = Arc::clone(&wins);
                thread::spawn(move || {
                    barrier.wait();
                    let won = cell.set_if_none(id);
                    if won {
                        wins.fetch_add(1, Ordering::SeqCst);
                    }
                    won.then_some(id)
                })
            })
            .collect();

        let mut winner = None;
        let mut panicked = 0;
        for handle in handles {
            match handle.join() {
                Ok(Some(id)) => winner = Some(id),
                Ok(None) => {}
                Err(_) => panicked += 1,
            }
        }

        let winner_stored = match winner {
            Some(id) => cell.get() == Optional::Some(id),
            None => false,
        };

        let outcome = RoundOutcome {
            winners: wins.load(Ordering::SeqCst),
            winner_stored,
        };
        (outcome, panicked)
    }
}
