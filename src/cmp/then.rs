use std::{cmp::Ordering, fmt::Debug};

use crate::Comparator;

/// A [`Comparator`] that orders values lexicographically by two comparators.
///
/// The second comparator is only consulted for the values the first one
/// considers equivalent, so a chain of weak orderings is a weak ordering.
///
/// This comparator is constructed by [`Comparator::then()`].
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::{asc, by_key}};
///
/// let mut words = ["pear", "fig", "kiwi", "apple", "date"];
/// words.sort_with(&by_key(|word: &&str| word.len()).then(asc));
///
/// assert_eq!(words, ["fig", "date", "kiwi", "pear", "apple"]);
/// ```
#[derive(Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    #[inline]
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns both comparators, in the order they are consulted.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<T, A, B> Comparator<T> for Then<A, B>
where
    T: ?Sized,
    A: Comparator<T>,
    B: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.first.compare(a, b) {
            Ordering::Equal => self.second.compare(a, b),
            ordering => ordering,
        }
    }
}

impl<A, B> Debug for Then<A, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Then")
            .field("first", &std::any::type_name::<A>())
            .field("second", &std::any::type_name::<B>())
            .finish()
    }
}
