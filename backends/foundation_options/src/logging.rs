//! Crate-local logging macros that forward to `tracing`.
//!
//! Each level is compiled in or out through the `log_*` cargo features so the
//! combinators stay free of logging cost when a level is disabled. Declared
//! with `#[macro_use]` ahead of the other modules so the macros are in
//! textual scope everywhere in the crate.

macro_rules! info {
    ($($t:tt)*) => {
        if cfg!(feature = "log_info") {
            tracing::info!($($t)*);
        }
    };
}

macro_rules! warn {
    ($($t:tt)*) => {
        if cfg!(feature = "log_warnings") {
            tracing::warn!($($t)*);
        }
    };
}

macro_rules! debug {
    ($($t:tt)*) => {
        if cfg!(feature = "log_debug") {
            tracing::debug!($($t)*);
        }
    };
}

macro_rules! error {
    ($($t:tt)*) => {
        if cfg!(feature = "log_errors") {
            tracing::error!($($t)*);
        }
    };
}
