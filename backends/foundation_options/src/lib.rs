//! Optional values for the ewe_platform foundation crates.
//!
//! This crate provides:
//! - **[`Optional`]**: a present value or its absence, with a total
//!   combinator surface (`map`, `flat_map`, `filter`, `or_option`,
//!   `or_default`, `match_with`, `match_action`, `of_type`, `log`, ...)
//! - **Lifts**: combining 2, 3, 4 or any number of `Optional`s through one
//!   function, short-circuiting on the first `None`
//! - **[`AtomicOption`]**: a lock-free cell holding an `Optional` with atomic
//!   `get`, `get_and_clear` and `set_if_none`
//! - **[`Unit`]**: the value returned by side-effect-only operations
//! - **[`option_unsafe`]**: extraction that asserts presence, kept apart from
//!   the safe surface
//!
//! # Examples
//!
//! ```rust
//! use foundation_options::{option_unsafe, AtomicOption, Optional};
//!
//! let width = Optional::of_nullable(Some(3));
//! let height = Optional::some(4);
//! let area = width.lift(height, |w, h| w * h);
//! assert_eq!(option_unsafe::get_unsafe(area), 12);
//!
//! let leader = AtomicOption::new();
//! assert!(leader.set_if_none("node-a"));
//! assert!(!leader.set_if_none("node-b"));
//! assert_eq!(leader.get(), Optional::Some("node-a"));
//! ```
//!
//! # Features
//!
//! - `standard` (default): info, warning and error events through `tracing`
//! - `debug_trace`: adds debug events (supplier failures, cell clears,
//!   rejected `set_if_none` calls)

#[macro_use]
mod logging;

pub mod assertion;
pub mod atomic_option;
pub mod errors;
mod lift;
pub mod option_unsafe;
pub mod optional;
pub mod unit;

pub use assertion::OptionalAssertion;
pub use atomic_option::AtomicOption;
pub use errors::{AccessError, AccessResult};
pub use optional::{Erased, Optional, NONE_HASH_CODE, NONE_NAME};
pub use unit::Unit;
