// region -- AccessError

pub type AccessResult<T> = core::result::Result<T, AccessError>;

/// Failures raised by the unchecked accessors in [`option_unsafe`](crate::option_unsafe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AccessError {
    /// A value was demanded from `Optional::None`.
    #[display("illegal state: no value present in None")]
    IllegalState,
}

// --- end region: AccessError

#[cfg(test)]
mod tests {
    use super::*;

    /// WHY: Error messages surface in panics and logs
    /// WHAT: IllegalState must describe the missing value
    #[test]
    fn test_illegal_state_display() {
        assert_eq!(
            AccessError::IllegalState.to_string(),
            "illegal state: no value present in None"
        );
    }

    /// WHY: Callers box and propagate the error with `?`
    /// WHAT: AccessError must be usable as a `dyn Error`
    #[test]
    fn test_is_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> = Box::new(AccessError::IllegalState);
        assert!(boxed.source().is_none());
    }
}
