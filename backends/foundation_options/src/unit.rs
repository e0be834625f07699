//! The [`Unit`] type: a single, information-free value.
//!
//! Used as the return type of operations that only run side effects, such as
//! [`Optional::match_action`](crate::Optional::match_action).

use core::fmt;

/// Zero-information marker value.
///
/// Every `Unit` equals every other `Unit`; [`Unit::DEFAULT`] is the canonical
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Unit;

impl Unit {
    /// The one and only unit value.
    pub const DEFAULT: Self = Self;

    /// Runs `action` and returns [`Unit::DEFAULT`].
    #[inline]
    pub fn from_action<F>(action: F) -> Self
    where
        F: FnOnce(),
    {
        action();
        Self::DEFAULT
    }

    /// Discards `ignored` and returns [`Unit::DEFAULT`].
    #[inline]
    #[allow(clippy::needless_pass_by_value)]
    pub fn as_unit<V>(ignored: V) -> Self {
        drop(ignored);
        Self::DEFAULT
    }
}

impl From<()> for Unit {
    #[inline]
    fn from((): ()) -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Unit")
    }
}
