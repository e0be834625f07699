//! Contention scenarios for `AtomicOption`.
//!
//! - `SetOnceRace`: many threads race `set_if_none` on a fresh cell
//! - `Handoff`: producers publish through one cell, consumers take with
//!   `get_and_clear`

pub mod handoff;
pub mod set_once;

pub use handoff::Handoff;
pub use set_once::SetOnceRace;
