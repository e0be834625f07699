//! Combining several [`Optional`]s through one function.
//!
//! Every lift succeeds only when all of its inputs are `Some`; the combining
//! function never runs otherwise. The fixed-arity forms receive inputs that
//! are already evaluated. [`Optional::lift_all`] walks its inputs in order and
//! stops pulling from the sequence at the first `None`.

use crate::optional::Optional;

impl<T> Optional<T> {
    /// Combines the receiver with one more `Optional`.
    #[must_use]
    pub fn lift<B, R, F>(self, second: Optional<B>, f: F) -> Optional<R>
    where
        F: FnOnce(T, B) -> R,
    {
        match (self, second) {
            (Self::Some(a), Optional::Some(b)) => Optional::Some(f(a, b)),
            _ => Optional::None,
        }
    }

    /// Combines the receiver with two more `Optional`s.
    #[must_use]
    pub fn lift3<B, C, R, F>(self, second: Optional<B>, third: Optional<C>, f: F) -> Optional<R>
    where
        F: FnOnce(T, B, C) -> R,
    {
        match (self, second, third) {
            (Self::Some(a), Optional::Some(b), Optional::Some(c)) => Optional::Some(f(a, b, c)),
            _ => Optional::None,
        }
    }

    /// Combines the receiver with three more `Optional`s.
    #[must_use]
    pub fn lift4<B, C, D, R, F>(
        self,
        second: Optional<B>,
        third: Optional<C>,
        fourth: Optional<D>,
        f: F,
    ) -> Optional<R>
    where
        F: FnOnce(T, B, C, D) -> R,
    {
        match (self, second, third, fourth) {
            (Self::Some(a), Optional::Some(b), Optional::Some(c), Optional::Some(d)) => {
                Optional::Some(f(a, b, c, d))
            }
            _ => Optional::None,
        }
    }

    /// Combines the receiver with an ordered sequence of `Optional`s.
    ///
    /// If the receiver is `None` the sequence is not touched. Otherwise the
    /// sequence is consumed in order until the first `None`, which ends the
    /// lift with `None`. When every input is present, `f` receives the values
    /// in input order, the receiver's value first.
    ///
    /// Inputs of different types can be combined by [erasing](Optional::erase)
    /// them first and recovering each value inside `f`.
    ///
    /// ```rust
    /// use foundation_options::Optional;
    ///
    /// let total = Optional::some(1).lift_all(
    ///     [Optional::some(2), Optional::some(3), Optional::some(4)],
    ///     |values| values.into_iter().sum::<i32>(),
    /// );
    /// assert_eq!(total, Optional::Some(10));
    /// ```
    pub fn lift_all<I, R, F>(self, rest: I, f: F) -> Optional<R>
    where
        I: IntoIterator<Item = Optional<T>>,
        F: FnOnce(Vec<T>) -> R,
    {
        let Self::Some(first) = self else {
            return Optional::None;
        };

        let rest = rest.into_iter();
        let mut values = Vec::with_capacity(1 + rest.size_hint().0);
        values.push(first);

        for option in rest {
            match option {
                Optional::Some(value) => values.push(value),
                Optional::None => return Optional::None,
            }
        }

        Optional::Some(f(values))
    }
}
