//! Producer/consumer handoff through a single `AtomicOption`.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use foundation_options::{AtomicOption, Optional};

use crate::stress::{ContentionConfig, HandoffReport};

/// Runs `contenders` producers and `contenders` consumers against one
/// cell. Producers spin on `set_if_none` until their value lands,
/// consumers spin on `get_and_clear` until every value has been taken.
///
/// With a time limit set, all workers stop once it passes and the report
/// carries whatever was delivered so far.
///
/// # Examples
///
/// ```
/// use foundation_testing::scenarios::Handoff;
/// use foundation_testing::stress::ContentionConfig;
///
/// let report = Handoff::new(ContentionConfig::new().contenders(2))
///     .values_per_producer(50)
///     .run();
/// assert_eq!(report.expected, 100);
/// assert!(report.verify().is_ok());
/// ```
pub struct Handoff {
    config: ContentionConfig,
    per_producer: usize,
}

impl Handoff {
    #[must_use]
    pub const fn new(config: ContentionConfig) -> Self {
        Self {
            config,
            per_producer: 100,
        }
    }

    /// Sets how many values each producer publishes. Defaults to 100.
    #[must_use]
    pub const fn values_per_producer(mut self, count: usize) -> Self {
        self.per_producer = count;
        self
    }

    #[must_use]
    pub fn run(self) -> HandoffReport {
        let start = Instant::now();
        let workers = self.config.get_contenders();
        let per_producer = self.per_producer;
        let expected = workers * per_producer;

        let cell = Arc::new(AtomicOption::new());
        let taken = Arc::new(AtomicUsize::new(0));
        let stop = Arc::new(AtomicBool::new(false));

        if let Some(limit) = self.config.get_time_limit() {
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                thread::sleep(limit);
                stop.store(true, Ordering::Release);
            });
        }

        let producers: Vec<_> = (0..workers)
            .map(|producer| {
                let cell = Arc::clone(&cell);
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    for i in 0..per_producer {
                        let value = producer * per_producer + i;
                        while !cell.set_if_none(value) {
                            if stop.load(Ordering::Acquire) {
                                return;
                            }
                            thread::yield_now();
                        }
                    }
                })
            })
            .collect();

        let consumers: Vec<_> = (0..workers)
            .map(|_| {
                let cell = Arc::clone(&cell);
                let taken = Arc::clone(&taken);
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    let mut seen = Vec::new();
                    while taken.load(Ordering::Acquire) < expected {
                        if stop.load(Ordering::Acquire) {
                            break;
                        }
                        match cell.get_and_clear() {
                            Optional::Some(value) => {
                                taken.fetch_add(1, Ordering::AcqRel);
                                seen.push(value);
                            }
                            Optional::None => thread::yield_now(),
                        }
                    }
                    seen
                })
            })
            .collect();

        let mut panicked = 0;
        for producer in producers {
            if producer.join().is_err() {
                panicked += 1;
            }
        }

        let mut delivered = Vec::with_capacity(expected);
        for consumer in consumers {
            match consumer.join() {
                Ok(seen) => delivered.extend(seen),
                Err(_) => panicked += 1,
            }
        }

        stop.store(true, Ordering::Release);
        tracing::info!(
            "Handoff: delivered {} of {expected} values with {workers} producers",
            delivered.len()
        );

        HandoffReport {
            expected,
            delivered,
            panicked,
            duration: start.elapsed(),
        }
    }
}
