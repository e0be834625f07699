//! The [`Optional`] sum type and its combinator surface.
//!
//! An [`Optional`] is either [`Optional::Some`] holding a value or
//! [`Optional::None`]. Every combinator is total: it never panics on its own
//! and it decides what to do purely by case analysis on the variant. Closures
//! handed to a combinator run only on the branch that needs them.
//!
//! ```rust
//! use foundation_options::Optional;
//!
//! let port = Optional::of_nullable(Some("8080"))
//!     .flat_map(|raw| Optional::try_as_option(|| raw.parse::<u16>()))
//!     .filter(|port| *port > 1024)
//!     .or_default(|| 3000);
//!
//! assert_eq!(port, 8080);
//! ```
//!
//! Extraction that asserts presence lives in [`option_unsafe`](crate::option_unsafe)
//! so it never looks like the safe surface at a call site.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;
use std::panic::{self, UnwindSafe};

use crate::unit::Unit;

/// Hash code reported by [`Optional::hash_code`] for every `None`.
pub const NONE_HASH_CODE: u64 = 0;

/// Display form of [`Optional::None`].
pub const NONE_NAME: &str = "None";

/// A type-erased value, used to push heterogeneous inputs through
/// [`Optional::lift_all`] and recover them with [`Optional::of_type`].
pub type Erased = Box<dyn Any + Send>;

/// A present value or its absence.
///
/// `None` carries no payload, so all `None` values of a given `T` are the same
/// value: they compare equal and hash to [`NONE_HASH_CODE`]. `Some(x)` hashes
/// and displays exactly like `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    /// The shared absent value.
    pub const NONE: Self = Self::None;

    /// Returns the shared absent value.
    #[inline]
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    /// Wraps a value that is known to be present.
    #[inline]
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Builds an `Optional` from a possibly-absent input.
    ///
    /// This is the entry point for values coming from code that models
    /// absence with `std::option::Option`: a missing input always degrades
    /// to `None`.
    #[inline]
    #[must_use]
    pub fn of_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Runs `supplier` and keeps its value, turning any error into `None`.
    ///
    /// The error is dropped on purpose: callers learn only that no value was
    /// produced. Use a `Result` directly when the failure has to be inspected.
    pub fn try_as_option<E, F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
    {
        match supplier() {
            Ok(value) => Self::Some(value),
            Err(_) => {
                debug!("try_as_option: supplier failed, yielding None");
                Self::None
            }
        }
    }

    /// Runs `supplier`, turning a panic into `None`.
    ///
    /// Like [`Optional::try_as_option`] the panic payload is discarded. The
    /// process panic hook still runs, so the message may reach stderr.
    pub fn catch_as_option<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(supplier) {
            Ok(value) => Self::Some(value),
            Err(_) => {
                debug!("catch_as_option: supplier panicked, yielding None");
                Self::None
            }
        }
    }

    /// Returns `true` when a value is present.
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` when no value is present.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrows the wrapped value.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts into the standard library representation.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Identity: returns the receiver unchanged.
    #[inline]
    #[must_use]
    pub fn id(self) -> Self {
        self
    }

    /// Runs `action` on the value when present. Returns the receiver.
    #[must_use]
    pub fn if_some<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` when no value is present. Returns the receiver.
    #[must_use]
    pub fn if_none<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            action();
        }
        self
    }

    /// Transforms the value with `selector`; `None` stays `None` and
    /// `selector` is not called.
    #[must_use]
    pub fn map<R, F>(self, selector: F) -> Optional<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Some(value) => Optional::Some(selector(value)),
            Self::None => Optional::None,
        }
    }

    /// Binds the value to another `Optional` produced by `selector`. The
    /// result of `selector` is returned as is, not re-wrapped.
    #[must_use]
    pub fn flat_map<R, F>(self, selector: F) -> Optional<R>
    where
        F: FnOnce(T) -> Optional<R>,
    {
        match self {
            Self::Some(value) => selector(value),
            Self::None => Optional::None,
        }
    }

    /// Keeps the value only if `predicate` accepts it.
    #[must_use]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Returns the receiver when present, otherwise the `Optional` built by
    /// `supplier`. `supplier` runs only in the `None` case.
    #[must_use]
    pub fn or_option<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => supplier(),
        }
    }

    /// Returns the value when present, otherwise the value built by
    /// `supplier`. `supplier` runs only in the `None` case.
    pub fn or_default<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// Case analysis producing a value: exactly one of the branches runs.
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Case analysis for side effects: exactly one of the branches runs.
    pub fn match_action<S, N>(self, on_some: S, on_none: N) -> Unit
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        match self {
            Self::Some(value) => Unit::from_action(|| on_some(value)),
            Self::None => Unit::from_action(on_none),
        }
    }

    /// Keeps the value only if its runtime type is `U`.
    ///
    /// The check is made against the concrete type of the wrapped value. When
    /// the value is itself erased (`Box<dyn Any>` or [`Erased`]) the check
    /// looks through the box at the value inside it.
    #[must_use]
    pub fn of_type<U>(self) -> Optional<U>
    where
        T: Any,
        U: Any,
    {
        match self {
            Self::Some(value) => downcast_value(Box::new(value)),
            Self::None => Optional::None,
        }
    }

    /// Erases the value type so it can travel with values of other types.
    #[must_use]
    pub fn erase(self) -> Optional<Erased>
    where
        T: Any + Send,
    {
        self.map(|value| Box::new(value) as Erased)
    }

    /// Hands the display form of the receiver to `sink`, then returns the
    /// receiver.
    #[must_use]
    pub fn log<F>(self, sink: F) -> Self
    where
        T: fmt::Display,
        F: FnOnce(&str),
    {
        self.log_tagged("", sink)
    }

    /// Like [`Optional::log`], prefixing the line with `tag` when it is not
    /// empty (`"{tag}: {option}"`).
    #[must_use]
    pub fn log_tagged<F>(self, tag: &str, sink: F) -> Self
    where
        T: fmt::Display,
        F: FnOnce(&str),
    {
        let line = if tag.is_empty() {
            self.to_string()
        } else {
            format!("{tag}: {self}")
        };
        sink(&line);
        self
    }

    /// Emits the line built by [`Optional::log_tagged`] as an info event.
    #[must_use]
    pub fn traced(self, tag: &str) -> Self
    where
        T: fmt::Display,
    {
        self.log_tagged(tag, |line| info!("{line}"))
    }

    /// Hash of the wrapped value under [`DefaultHasher`], or
    /// [`NONE_HASH_CODE`] for `None`.
    #[must_use]
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        match self {
            Self::Some(value) => {
                let mut hasher = DefaultHasher::new();
                value.hash(&mut hasher);
                hasher.finish()
            }
            Self::None => NONE_HASH_CODE,
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    #[inline]
    #[must_use]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

fn downcast_value<U: Any>(erased: Box<dyn Any>) -> Optional<U> {
    let erased = match erased.downcast::<U>() {
        Ok(value) => return Optional::Some(*value),
        Err(erased) => erased,
    };
    let erased = match erased.downcast::<Box<dyn Any>>() {
        Ok(inner) => return downcast_value(*inner),
        Err(erased) => erased,
    };
    match erased.downcast::<Erased>() {
        Ok(inner) => downcast_value(*inner),
        Err(_) => Optional::None,
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Some(value) => value.hash(state),
            Self::None => state.write_u64(NONE_HASH_CODE),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => value.fmt(f),
            Self::None => f.write_str(NONE_NAME),
        }
    }
}
