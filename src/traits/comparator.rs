use std::cmp::Ordering;

use crate::cmp::{Condition, Reverse, Then};

/// Orders two values of the same type.
///
/// This trait requires one core method:
///
/// - [`compare`](Comparator::compare): returns [`Less`] if the first argument orders
///   before the second, [`Equal`] if they are order-equivalent, and [`Greater`]
///   if it orders after.
///
/// Every `Fn(&T, &T) -> Ordering` implements this trait, including functions like
/// [`i32::cmp`] and [`f64::total_cmp`].
///
/// # Laws
///
/// Sorting only makes sense with a comparator that is a *weak ordering*:
///
/// - `compare(a, a) == Equal`.
/// - `compare(a, b) == compare(b, a).reverse()`.
/// - If `compare(a, b)` and `compare(b, c)` are both `Less` (or `Equal`),
///   so is `compare(a, c)`.
///
/// Nothing checks these. Every adaptor in this crate preserves them,
/// so a comparator built only out of law-abiding pieces is law-abiding too.
///
/// # Purity
///
/// [`compare`](Comparator::compare) takes `&self`. A comparator should not rely on
/// how many times, or in which order, it is called: sort routines make no promise about either.
/// A comparator is [`Sync`] whenever its parts are, so the same value may back
/// several sorts running on different threads.
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::asc};
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
///
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// assert!(by_len.equivalent(&"ab", &"cd"));
///
/// // Break ties alphabetically.
/// let order = by_len.then(asc);
/// assert_eq!(order.compare(&"ab", &"cd"), Ordering::Less);
/// ```
///
/// [`Less`]: Ordering::Less
/// [`Equal`]: Ordering::Equal
/// [`Greater`]: Ordering::Greater
pub trait Comparator<T: ?Sized> {
    /// Compares two values.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns whether `a` orders strictly before `b`.
    #[inline]
    fn lt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_lt()
    }

    /// Returns whether `a` orders before or together with `b`.
    #[inline]
    fn le(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_le()
    }

    /// Returns whether `a` orders strictly after `b`.
    #[inline]
    fn gt(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_gt()
    }

    /// Returns whether `a` orders after or together with `b`.
    #[inline]
    fn ge(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_ge()
    }

    /// Returns whether `a` and `b` are order-equivalent.
    ///
    /// Equivalent values need not be equal: a comparator that only looks at
    /// a key considers all values with the same key equivalent.
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.compare(a, b).is_eq()
    }

    /// Returns the lesser of two values, or `a` if they are equivalent.
    ///
    /// This matches the tie rule of [`std::cmp::min_by()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::by_key};
    ///
    /// let order = by_key(|pair: &(char, u8)| pair.0);
    ///
    /// assert_eq!(order.min_of(&('a', 1), &('a', 2)), &('a', 1));
    /// assert_eq!(order.min_of(&('b', 1), &('a', 2)), &('a', 2));
    /// ```
    #[inline]
    fn min_of<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        // See: https://doc.rust-lang.org/beta/src/core/cmp.rs.html#1704-1708
        if self.gt(a, b) { b } else { a }
    }

    /// Returns the greater of two values, or `b` if they are equivalent.
    ///
    /// This matches the tie rule of [`std::cmp::max_by()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::by_key};
    ///
    /// let order = by_key(|pair: &(char, u8)| pair.0);
    ///
    /// assert_eq!(order.max_of(&('a', 1), &('a', 2)), &('a', 2));
    /// assert_eq!(order.max_of(&('b', 1), &('a', 2)), &('b', 1));
    /// ```
    #[inline]
    fn max_of<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        // See: https://doc.rust-lang.org/beta/src/core/cmp.rs.html#1025-1027
        if self.gt(a, b) { a } else { b }
    }

    /// Creates a [`Comparator`] that orders values the opposite way.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::asc};
    ///
    /// let mut nums = [2, 3, 1];
    /// nums.sort_with(&asc.reverse());
    ///
    /// assert_eq!(nums, [3, 2, 1]);
    /// ```
    #[inline]
    fn reverse(self) -> Reverse<Self>
    where
        Self: Sized,
    {
        Reverse::new(self)
    }

    /// Creates a [`Comparator`] that orders values by `self` first,
    /// **then** by `other` among the values `self` considers equivalent.
    ///
    /// `other` is only called when `self` returns [`Equal`](Ordering::Equal).
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::by_key};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Pet { name: &'static str, age: u8 }
    ///
    /// let mut pets = [
    ///     Pet { name: "Ruff", age: 2 },
    ///     Pet { name: "Fido", age: 4 },
    ///     Pet { name: "Fido", age: 3 },
    /// ];
    ///
    /// let order = by_key(|pet: &Pet| pet.name).then(by_key(|pet: &Pet| pet.age));
    /// pets.sort_with(&order);
    ///
    /// assert_eq!(pets.map(|pet| pet.age), [3, 4, 2]);
    /// ```
    #[inline]
    fn then<C>(self, other: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Comparator<T>,
    {
        Then::new(self, other)
    }

    /// Creates a [`Comparator`] that puts every value satisfying `pred`
    /// before every value that does not, and orders values within each group by `self`.
    ///
    /// This is the method form of [`condition()`](crate::cmp::condition):
    /// `cmp.prioritize(pred)` is `condition(pred, cmp)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::asc};
    ///
    /// let mut nums = [5, 1, 4, 2, 3];
    /// nums.sort_with(&asc.prioritize(|&num: &i32| num >= 3));
    ///
    /// assert_eq!(nums, [3, 4, 5, 1, 2]);
    /// ```
    #[inline]
    fn prioritize<P>(self, pred: P) -> Condition<P, Self>
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        Condition::new(pred, self)
    }
}

impl<F, T> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;

    #[test]
    fn closures_and_fn_items() {
        assert_eq!(i32::cmp.compare(&1, &2), Ordering::Less);
        assert_eq!(f64::total_cmp.compare(&-0.0, &0.0), Ordering::Less);

        let by_abs = |a: &i32, b: &i32| a.unsigned_abs().cmp(&b.unsigned_abs());
        assert!(by_abs.equivalent(&-3, &3));
        assert!(by_abs.lt(&2, &-3));
        assert!(by_abs.le(&3, &-3));
        assert!(by_abs.gt(&-4, &3));
        assert!(by_abs.ge(&-4, &4));
    }

    #[test]
    fn unsized_values() {
        let by_len = |a: &str, b: &str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare("abc", "de"), Ordering::Greater);
        assert_eq!(by_len.min_of("abc", "de"), "de");
    }

    #[test]
    fn min_max_tie_rules() {
        let by_first = |a: &(u8, u8), b: &(u8, u8)| a.0.cmp(&b.0);

        let (x, y) = ((1, 0), (1, 1));
        assert_eq!(by_first.min_of(&x, &y), &x);
        assert_eq!(by_first.max_of(&x, &y), &y);

        assert_eq!(
            by_first.min_of(&x, &y),
            std::cmp::min_by(&x, &y, |a, b| by_first(*a, *b))
        );
        assert_eq!(
            by_first.max_of(&x, &y),
            std::cmp::max_by(&x, &y, |a, b| by_first(*a, *b))
        );
    }
}
