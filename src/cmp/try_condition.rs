use std::{cmp::Ordering, fmt::Debug};

use crate::{TryComparator, assert_try_comparator};

use super::asc_bool;

/// A [`TryComparator`] that puts every value satisfying a fallible predicate first,
/// and orders values within each group by another fallible comparator.
///
/// It follows the same rule as [`Condition`](super::Condition).
/// The predicate is evaluated on the first value, then on the second one.
/// The first error met is returned as is, and nothing after it is evaluated.
///
/// This comparator is constructed by [`try_condition()`].
#[derive(Clone, Copy)]
pub struct TryCondition<P, C> {
    pred: P,
    cmp: C,
}

impl<P, C> TryCondition<P, C> {
    /// Creates a new instance of this comparator from a fallible predicate and the fallible
    /// comparator used within each group.
    #[inline]
    pub const fn new(pred: P, cmp: C) -> Self {
        Self { pred, cmp }
    }

    /// Returns the predicate and the inner comparator.
    #[inline]
    pub fn into_parts(self) -> (P, C) {
        (self.pred, self.cmp)
    }
}

/// Creates a [`TryCondition`]: values satisfying `pred` order first,
/// and `cmp` orders values within each group. Both may fail with the same error type.
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::try_condition};
/// use std::{cmp::Ordering, num::ParseIntError};
///
/// let negative_first = try_condition(
///     |num: &&str| -> Result<bool, ParseIntError> { Ok(num.parse::<i32>()? < 0) },
///     |a: &&str, b: &&str| -> Result<Ordering, ParseIntError> {
///         Ok(a.parse::<i32>()?.cmp(&b.parse::<i32>()?))
///     },
/// );
///
/// assert_eq!(negative_first.try_compare(&"7", &"-2"), Ok(Ordering::Greater));
/// assert_eq!(negative_first.try_compare(&"7", &"2"), Ok(Ordering::Greater));
/// assert!(negative_first.try_compare(&"seven", &"2").is_err());
/// ```
#[inline]
pub const fn try_condition<T, E, P, C>(pred: P, cmp: C) -> TryCondition<P, C>
where
    T: ?Sized,
    P: Fn(&T) -> Result<bool, E>,
    C: TryComparator<T, E>,
{
    assert_try_comparator::<_, T, E>(TryCondition::new(pred, cmp))
}

impl<T, E, P, C> TryComparator<T, E> for TryCondition<P, C>
where
    T: ?Sized,
    P: Fn(&T) -> Result<bool, E>,
    C: TryComparator<T, E>,
{
    #[inline]
    fn try_compare(&self, a: &T, b: &T) -> Result<Ordering, E> {
        let a_holds = (self.pred)(a)?;
        let b_holds = (self.pred)(b)?;

        if a_holds == b_holds {
            self.cmp.try_compare(a, b)
        } else {
            Ok(asc_bool(&a_holds, &b_holds))
        }
    }
}

impl<P, C> Debug for TryCondition<P, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryCondition")
            .field("pred", &std::any::type_name::<P>())
            .field("cmp", &std::any::type_name::<C>())
            .finish()
    }
}
