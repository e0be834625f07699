//! Reusable contention scenarios for `foundation_options::AtomicOption`.
//!
//! This crate provides:
//! - **Contention config**: thread count, round count and time budget
//! - **Scenarios**: single-writer races and producer/consumer handoff
//! - **Reports**: what the threads observed, with `verify` to check the
//!   cell's invariants held
//!
//! # Examples
//!
//! ```rust
//! use foundation_testing::scenarios::SetOnceRace;
//! use foundation_testing::stress::ContentionConfig;
//!
//! let config = ContentionConfig::new().contenders(8).rounds(20);
//! let report = SetOnceRace::new(config).run();
//!
//! assert_eq!(report.attempts(), 160); // 8 threads * 20 rounds
//! assert!(report.verify().is_ok());
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod scenarios;
pub mod stress;

pub use scenarios::{Handoff, SetOnceRace};
pub use stress::{ContentionConfig, ContentionReport, ContentionViolation, HandoffReport};
