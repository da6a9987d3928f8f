use std::cmp::Ordering;

/// Orders two values of the same type, or fails trying.
///
/// This is the fallible counterpart of [`Comparator`](crate::Comparator).
/// Every `Fn(&T, &T) -> Result<Ordering, E>` implements this trait.
///
/// The error type is a generic parameter rather than an associated type so that
/// one closure-based combinator can forward whatever error its parts produce.
///
/// Errors are passed through untouched by every combinator in this crate:
/// no combinator catches, wraps, or retries them.
///
/// # Examples
///
/// ```
/// use better_compare::prelude::*;
/// use std::{cmp::Ordering, num::ParseIntError};
///
/// let numerically = |a: &&str, b: &&str| -> Result<Ordering, ParseIntError> {
///     Ok(a.parse::<i64>()?.cmp(&b.parse::<i64>()?))
/// };
///
/// assert_eq!(numerically.try_compare(&"10", &"9"), Ok(Ordering::Greater));
/// assert!(numerically.try_compare(&"10", &"nine").is_err());
/// ```
pub trait TryComparator<T: ?Sized, E> {
    /// Compares two values, returning the error of the first failed step.
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering, E>;
}

impl<F, T, E> TryComparator<T, E> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    #[inline]
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering, E> {
        self(a, b)
    }
}
