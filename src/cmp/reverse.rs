use std::{cmp::Ordering, fmt::Debug};

use crate::Comparator;

/// A [`Comparator`] that orders values the opposite way of another comparator.
///
/// Equivalent values stay equivalent, so reversing a weak ordering yields a weak ordering.
///
/// This comparator is constructed by [`Comparator::reverse()`].
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::by_key};
///
/// let mut words = ["fig", "banana", "kiwi"];
/// words.sort_with(&by_key(|word: &&str| word.len()).reverse());
///
/// assert_eq!(words, ["banana", "kiwi", "fig"]);
/// ```
#[derive(Clone, Copy)]
pub struct Reverse<C> {
    cmp: C,
}

impl<C> Reverse<C> {
    #[inline]
    pub(crate) const fn new(cmp: C) -> Self {
        Self { cmp }
    }

    /// Returns the comparator being reversed.
    #[inline]
    pub fn into_inner(self) -> C {
        self.cmp
    }
}

impl<T, C> Comparator<T> for Reverse<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.cmp.compare(a, b).reverse()
    }

    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        self.cmp.gt(a, b)
    }

    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self.cmp.ge(a, b)
    }

    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        self.cmp.lt(a, b)
    }

    #[inline]
    fn ge(&self, a: &T, b: &T) -> bool {
        self.cmp.le(a, b)
    }
}

impl<C> Debug for Reverse<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reverse")
            .field("cmp", &std::any::type_name::<C>())
            .finish()
    }
}
