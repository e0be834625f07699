//! Extraction that asserts presence.
//!
//! These helpers exist for trusted boundaries where presence has already been
//! established some other way, for example through [`Optional::is_some`].
//! Everywhere else prefer [`Optional::match_with`] or [`Optional::or_default`].
//!
//! Nothing here is `unsafe` in the memory-safety sense: a missing value is
//! reported as a panic or as an error, never as undefined behaviour.

use crate::errors::{AccessError, AccessResult};
use crate::optional::Optional;

/// Returns the wrapped value.
///
/// # Panics
///
/// Panics with [`AccessError::IllegalState`] when `option` is `None`.
#[track_caller]
pub fn get_unsafe<T>(option: Optional<T>) -> T {
    match try_get_unsafe(option) {
        Ok(value) => value,
        Err(err) => {
            error!("get_unsafe on None");
            panic!("{err}")
        }
    }
}

/// Returns the wrapped value, or [`AccessError::IllegalState`] for `None`.
///
/// # Errors
///
/// Fails when `option` is `None`.
pub fn try_get_unsafe<T>(option: Optional<T>) -> AccessResult<T> {
    match option {
        Optional::Some(value) => Ok(value),
        Optional::None => Err(AccessError::IllegalState),
    }
}

/// Returns the wrapped value, or the caller's own `error` for `None`.
///
/// The error is passed through untouched.
///
/// # Errors
///
/// Returns `error` when `option` is `None`.
pub fn or_throw_unsafe<T, E>(option: Optional<T>, error: E) -> Result<T, E> {
    match option {
        Optional::Some(value) => Ok(value),
        Optional::None => {
            warn!("or_throw_unsafe on None, raising caller error");
            Err(error)
        }
    }
}

/// Matches on `option` with branches whose result may be absent.
///
/// Either branch may return `None`; the chosen branch's result is lifted
/// through [`Optional::of_nullable`], so the caller always gets an
/// `Optional` back instead of an unchecked value.
pub fn match_unsafe<T, R, S, N>(option: Optional<T>, on_some: S, on_none: N) -> Optional<R>
where
    S: FnOnce(T) -> Option<R>,
    N: FnOnce() -> Option<R>,
{
    Optional::of_nullable(option.match_with(on_some, on_none))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
    #[display("session expired")]
    struct SessionExpired;

    /// WHY: get_unsafe is the trusted-boundary accessor
    /// WHAT: Some yields its value
    #[test]
    fn test_get_unsafe_some() {
        assert_eq!(get_unsafe(Optional::some(1)), 1);
    }

    /// WHY: Unchecked access on None is a programmer error
    /// WHAT: get_unsafe must panic with the illegal state message
    #[test]
    #[should_panic(expected = "illegal state")]
    fn test_get_unsafe_none_panics() {
        let _ = get_unsafe(Optional::<i32>::none());
    }

    /// WHY: Callers that prefer `?` get a typed error instead of a panic
    /// WHAT: try_get_unsafe maps None to IllegalState
    #[test]
    fn test_try_get_unsafe() {
        assert_eq!(try_get_unsafe(Optional::some("v")), Ok("v"));
        assert_eq!(
            try_get_unsafe(Optional::<&str>::none()),
            Err(AccessError::IllegalState)
        );
    }

    /// WHY: or_throw_unsafe raises exactly what the caller supplied
    /// WHAT: Some yields the value, None yields the caller's error unchanged
    #[test]
    fn test_or_throw_unsafe() {
        assert_eq!(or_throw_unsafe(Optional::some(1), SessionExpired), Ok(1));
        assert_eq!(
            or_throw_unsafe(Optional::<i32>::none(), SessionExpired),
            Err(SessionExpired)
        );
    }

    /// WHY: Each branch of match_unsafe picks its own result
    /// WHAT: Some runs the first branch, None runs the second
    #[test]
    fn test_match_unsafe_selects_branch() {
        let on_some = match_unsafe(Optional::some(""), |_| Some("some"), || Some("none"));
        assert_eq!(on_some, Optional::Some("some"));

        let on_none = match_unsafe(Optional::<&str>::none(), |_| Some("some"), || Some("none"));
        assert_eq!(on_none, Optional::Some("none"));
    }

    /// WHY: Branches may produce nothing
    /// WHAT: An absent branch result surfaces as None
    #[test]
    fn test_match_unsafe_absent_result() {
        let parsed = match_unsafe(Optional::some("x1"), |raw| raw.parse::<u8>().ok(), || Some(0));
        assert!(parsed.is_none());

        let fallback = match_unsafe(Optional::<&str>::none(), |_| Some(1_u8), || None);
        assert!(fallback.is_none());
    }

    /// WHY: Presence established through is_some makes get_unsafe safe to call
    /// WHAT: The of_nullable round trip returns the original value
    #[test]
    fn test_of_nullable_round_trip() {
        let option = Optional::of_nullable(Some(String::from("x")));
        assert!(option.is_some());
        assert_eq!(get_unsafe(option), "x");
    }
}
