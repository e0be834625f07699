//! Test-facing assertions over an [`Optional`].

use core::fmt;

use crate::optional::Optional;

/// Chainable assertions for an [`Optional`], obtained from
/// [`Optional::assertions`]. Every failed assertion panics with a message
/// that ends with `(actual = ...)`.
pub struct OptionalAssertion<'a, T> {
    actual: &'a Optional<T>,
}

impl<T> Optional<T> {
    /// Starts a chain of assertions on this `Optional`.
    #[must_use]
    pub fn assertions(&self) -> OptionalAssertion<'_, T> {
        OptionalAssertion::new(self)
    }
}

impl<'a, T> OptionalAssertion<'a, T> {
    #[must_use]
    pub fn new(actual: &'a Optional<T>) -> Self {
        Self { actual }
    }
}

impl<T: fmt::Debug> OptionalAssertion<'_, T> {
    /// # Panics
    ///
    /// Panics if the `Optional` holds a value.
    #[track_caller]
    pub fn assert_is_none(&self) {
        if self.actual.is_some() {
            self.fail("Option was not None");
        }
    }

    /// # Panics
    ///
    /// Panics if the `Optional` is `None`.
    #[track_caller]
    pub fn assert_is_some(&self) -> &Self {
        if self.actual.is_none() {
            self.fail("Option was not Some");
        }
        self
    }

    /// # Panics
    ///
    /// Panics if the `Optional` is `None` or its value fails `predicate`.
    #[track_caller]
    pub fn assert_value_matches<F>(&self, predicate: F) -> &Self
    where
        F: FnOnce(&T) -> bool,
    {
        match self.actual {
            Optional::Some(value) => {
                if !predicate(value) {
                    self.fail(&format!("Option value <{value:?}> did not match predicate"));
                }
            }
            Optional::None => self.fail("Option was not Some"),
        }
        self
    }

    /// # Panics
    ///
    /// Panics if the `Optional` is `None` or its value differs from `expected`.
    #[track_caller]
    pub fn assert_value(&self, expected: &T) -> &Self
    where
        T: PartialEq,
    {
        match self.actual {
            Optional::Some(value) if value == expected => {}
            Optional::Some(value) => self.fail(&format!(
                "Option value <{value:?}> did not equal expected value: <{expected:?}>"
            )),
            Optional::None => self.fail("Option was not Some"),
        }
        self
    }

    #[track_caller]
    fn fail(&self, message: &str) -> ! {
        panic!("{message} (actual = {:?})", self.actual)
    }
}
