use std::cmp::Ordering;

/// Orders values from the least to the greatest, following their [`Ord`] implementation.
///
/// Being a plain function, it is a [`Comparator`](crate::Comparator) on its own.
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::asc};
///
/// let mut words = ["pear", "apple", "fig"];
/// words.sort_with(&asc);
///
/// assert_eq!(words, ["apple", "fig", "pear"]);
/// ```
#[inline]
pub fn asc<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Orders values from the greatest to the least, following their [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::desc};
///
/// let mut nums = [2, 9, 4];
/// nums.sort_with(&desc);
///
/// assert_eq!(nums, [9, 4, 2]);
/// ```
#[inline]
pub fn desc<T: Ord + ?Sized>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Orders booleans with `true` first.
///
/// This is the opposite of `bool`'s own [`Ord`] implementation, where `false < true`.
/// It is the order [`condition()`](super::condition) uses to put the values satisfying
/// its predicate first.
///
/// # Examples
///
/// ```
/// use better_compare::cmp::asc_bool;
/// use std::cmp::Ordering;
///
/// assert_eq!(asc_bool(&true, &false), Ordering::Less);
/// assert_eq!(asc_bool(&false, &true), Ordering::Greater);
/// assert_eq!(asc_bool(&true, &true), Ordering::Equal);
/// ```
#[inline]
pub fn asc_bool(a: &bool, b: &bool) -> Ordering {
    b.cmp(a)
}
