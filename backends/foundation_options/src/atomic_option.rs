//! Atomic cell holding an [`Optional`].
//!
//! The state lives in a single atomic pointer: null is `None`, anything else
//! points at the `Some` value. Every operation is one atomic instruction on
//! that pointer (a load, a swap or a compare-exchange), so concurrent callers
//! always observe a complete state and never a half-written one. Values
//! removed from the cell are reclaimed through `crossbeam::epoch`, which keeps
//! them alive until no reader can still be looking at them.

use core::fmt;
use core::sync::atomic::Ordering;

use crossbeam::epoch::{self, Atomic, Owned, Shared};

use crate::optional::Optional;

/// A thread-safe, lock-free holder of an [`Optional<T>`].
///
/// Reads hand out clones of the held value; store an `Arc<U>` when callers
/// need to share one instance.
///
/// Replaced values are destroyed once no reader can still see them, which
/// may happen later and on another thread. Hence `T: Send + 'static`: a
/// value that is `!Send` or borrows from a stack frame is rejected.
///
/// ```compile_fail
/// use foundation_options::AtomicOption;
/// use std::rc::Rc;
///
/// let _cell = AtomicOption::with_value(Rc::new(1));
/// ```
///
/// ```compile_fail
/// use foundation_options::AtomicOption;
///
/// let local = String::from("scoped");
/// let _cell = AtomicOption::with_value(local.as_str());
/// ```
///
/// ```rust
/// use foundation_options::{AtomicOption, Optional};
///
/// let cell = AtomicOption::new();
/// assert!(cell.set_if_none("first"));
/// assert!(!cell.set_if_none("second"));
/// assert_eq!(cell.get_and_clear(), Optional::Some("first"));
/// assert_eq!(cell.get(), Optional::None);
/// ```
pub struct AtomicOption<T: Send + 'static> {
    slot: Atomic<T>,
}

impl<T: Send + 'static> AtomicOption<T> {
    /// Creates an empty cell.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Atomic::null(),
        }
    }

    /// Creates a cell holding `value`.
    #[inline]
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self {
            slot: Atomic::new(value),
        }
    }

    /// Returns `true` if the cell currently holds a value.
    #[inline]
    pub fn is_some(&self) -> bool {
        let guard = epoch::pin();
        !self.slot.load(Ordering::Acquire, &guard).is_null()
    }

    /// Returns `true` if the cell is currently empty.
    #[inline]
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns the current state without changing it.
    pub fn get(&self) -> Optional<T>
    where
        T: Clone,
    {
        let guard = epoch::pin();
        let current = self.slot.load(Ordering::Acquire, &guard);
        // SAFETY: non-null pointers in the slot come from `Owned::new` and are
        // only reclaimed through `defer_destroy`, which cannot run while
        // `guard` is pinned.
        match unsafe { current.as_ref() } {
            Some(value) => Optional::Some(value.clone()),
            None => Optional::None,
        }
    }

    /// Empties the cell and returns what it held just before.
    pub fn get_and_clear(&self) -> Optional<T>
    where
        T: Clone,
    {
        let previous = self.get_and_set(Optional::None);
        if previous.is_some() {
            debug!("atomic option cleared");
        }
        previous
    }

    /// Stores `value` only if the cell is empty.
    ///
    /// Returns `true` when this call filled the cell and `false` when it
    /// already held a value, in which case the cell is left untouched. Among
    /// any number of concurrent callers on an empty cell exactly one wins.
    pub fn set_if_none(&self, value: T) -> bool {
        let guard = epoch::pin();
        match self.slot.compare_exchange(
            Shared::null(),
            Owned::new(value),
            Ordering::AcqRel,
            Ordering::Acquire,
            &guard,
        ) {
            Ok(_) => true,
            Err(_rejected) => {
                debug!("set_if_none rejected: cell already holds a value");
                false
            }
        }
    }

    /// Replaces the state with `value`, discarding the previous one.
    pub fn set(&self, value: Optional<T>) {
        let guard = epoch::pin();
        let previous = self.slot.swap(into_shared(value, &guard), Ordering::AcqRel, &guard);
        if !previous.is_null() {
            // SAFETY: `previous` was unlinked by the swap above, so no new
            // reader can reach it; existing readers are covered by the epoch.
            unsafe { guard.defer_destroy(previous) };
        }
    }

    /// Replaces the state with `value` and returns the previous state.
    pub fn get_and_set(&self, value: Optional<T>) -> Optional<T>
    where
        T: Clone,
    {
        let guard = epoch::pin();
        let previous = self.slot.swap(into_shared(value, &guard), Ordering::AcqRel, &guard);
        // SAFETY: `previous` is still alive under `guard`; it is unlinked, so
        // it is handed to `defer_destroy` exactly once.
        unsafe {
            match previous.as_ref() {
                Some(value) => {
                    let value = value.clone();
                    guard.defer_destroy(previous);
                    Optional::Some(value)
                }
                None => Optional::None,
            }
        }
    }

    /// Consumes the cell and returns its state.
    pub fn into_inner(self) -> Optional<T> {
        // SAFETY: owning `self` means no other thread can reach the slot.
        unsafe {
            let guard = epoch::unprotected();
            let current = self.slot.swap(Shared::null(), Ordering::Relaxed, guard);
            if current.is_null() {
                Optional::None
            } else {
                Optional::Some(*current.into_owned().into_box())
            }
        }
    }
}

fn into_shared<'g, T>(value: Optional<T>, guard: &'g epoch::Guard) -> Shared<'g, T> {
    match value {
        Optional::Some(value) => Owned::new(value).into_shared(guard),
        Optional::None => Shared::null(),
    }
}

impl<T: Send + 'static> Drop for AtomicOption<T> {
    fn drop(&mut self) {
        // SAFETY: `&mut self` means no other thread can reach the slot.
        unsafe {
            let guard = epoch::unprotected();
            let current = self.slot.load(Ordering::Relaxed, guard);
            if !current.is_null() {
                drop(current.into_owned());
            }
        }
    }
}

impl<T: Send + 'static> Default for AtomicOption<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + 'static> From<Optional<T>> for AtomicOption<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(value) => Self::with_value(value),
            Optional::None => Self::new(),
        }
    }
}

impl<T: Send + 'static + fmt::Debug> fmt::Debug for AtomicOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = epoch::pin();
        let current = self.slot.load(Ordering::Acquire, &guard);
        // SAFETY: see `get`.
        let value = unsafe { current.as_ref() };
        f.debug_tuple("AtomicOption").field(&value).finish()
    }
}
