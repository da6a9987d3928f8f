use std::{cmp::Ordering, fmt::Debug};

use crate::{Comparator, assert_comparator};

use super::asc_bool;

/// A [`Comparator`] that puts every value satisfying a predicate before every value
/// that does not, and orders values within each group by another comparator.
///
/// For two values `a` and `b`, it evaluates the predicate once on each. Then:
///
/// - If the predicate agrees on both, the result is exactly what the inner comparator
///   returns for `(a, b)`.
/// - Otherwise, the one satisfying the predicate orders first,
///   whatever the inner comparator would have said. The inner comparator is not called.
///
/// If the inner comparator is a weak ordering, so is this one.
/// A panic in either the predicate or the inner comparator unwinds through
/// [`compare()`](Comparator::compare) untouched.
///
/// This comparator is constructed by [`condition()`] or [`Comparator::prioritize()`].
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::{by_key, condition}};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Item { v: i32, flag: bool }
///
/// let mut items = [
///     Item { v: 5, flag: false },
///     Item { v: 1, flag: true },
///     Item { v: 3, flag: true },
///     Item { v: 2, flag: false },
/// ];
///
/// items.sort_with(&condition(|item: &Item| item.flag, by_key(|item: &Item| item.v)));
///
/// assert_eq!(
///     items,
///     [
///         Item { v: 1, flag: true },
///         Item { v: 3, flag: true },
///         Item { v: 2, flag: false },
///         Item { v: 5, flag: false },
///     ],
/// );
/// ```
#[derive(Clone, Copy)]
pub struct Condition<P, C> {
    pred: P,
    cmp: C,
}

impl<P, C> Condition<P, C> {
    /// Creates a new instance of this comparator from a predicate and the comparator
    /// used within each group.
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

/// Creates a [`Condition`]: values satisfying `pred` order first,
/// and `cmp` orders values within each group.
///
/// `condition(pred, cmp)` is the same as `cmp.prioritize(pred)`.
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::{condition, desc}};
/// use std::cmp::Ordering;
///
/// let odd_first = condition(|num: &i32| num % 2 != 0, desc);
///
/// // Disagreement: the odd one wins, even though `desc` says otherwise.
/// assert_eq!(odd_first.compare(&1, &8), Ordering::Less);
/// // Agreement: `desc` decides.
/// assert_eq!(odd_first.compare(&1, &7), Ordering::Greater);
/// ```
#[inline]
pub const fn condition<T, P, C>(pred: P, cmp: C) -> Condition<P, C>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    C: Comparator<T>,
{
    assert_comparator::<_, T>(Condition::new(pred, cmp))
}

impl<T, P, C> Comparator<T> for Condition<P, C>
where
    T: ?Sized,
    P: Fn(&T) -> bool,
    C: Comparator<T>,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        let (a_holds, b_holds) = ((self.pred)(a), (self.pred)(b));

        if a_holds == b_holds {
            self.cmp.compare(a, b)
        } else {
            asc_bool(&a_holds, &b_holds)
        }
    }
}

impl<P, C> Debug for Condition<P, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Condition")
            .field("pred", &std::any::type_name::<P>())
            .field("cmp", &std::any::type_name::<C>())
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::Cell;

    use crate::{
        SortWith,
        cmp::{asc, by_key, desc},
    };

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Item {
        v: i32,
        flag: bool,
    }

    const fn item(v: i32, flag: bool) -> Item {
        Item { v, flag }
    }

    #[test]
    fn flagged_items_first() {
        let mut items = [
            item(5, false),
            item(1, true),
            item(3, true),
            item(2, false),
        ];

        items.sort_with(&condition(|it: &Item| it.flag, by_key(|it: &Item| it.v)));

        assert_eq!(
            items,
            [item(1, true), item(3, true), item(2, false), item(5, false)]
        );
    }

    #[test]
    fn disagreement_ignores_inner() {
        let order = condition(|it: &Item| it.flag, by_key(|it: &Item| it.v));

        // The inner comparator alone would put 100 after 1.
        assert_eq!(
            order.compare(&item(100, true), &item(1, false)),
            Ordering::Less
        );
        assert_eq!(
            order.compare(&item(1, false), &item(100, true)),
            Ordering::Greater
        );
    }

    #[test]
    fn agreement_delegates() {
        let inner = |a: &Item, b: &Item| b.v.cmp(&a.v);
        let order = condition(|it: &Item| it.flag, inner);

        for flag in [true, false] {
            for (x, y) in [(1, 2), (2, 1), (4, 4)] {
                let (a, b) = (item(x, flag), item(y, flag));
                assert_eq!(order.compare(&a, &b), inner(&a, &b));
            }
        }
    }

    #[test]
    fn reflexive() {
        let order = condition(|num: &i32| *num > 0, asc);
        for num in [-3, 0, 5] {
            assert_eq!(order.compare(&num, &num), Ordering::Equal);
        }
    }

    #[test]
    fn call_counts() {
        let pred_calls = Cell::new(0);
        let cmp_calls = Cell::new(0);

        let order = condition(
            |num: &i32| {
                pred_calls.set(pred_calls.get() + 1);
                *num >= 0
            },
            |a: &i32, b: &i32| {
                cmp_calls.set(cmp_calls.get() + 1);
                a.cmp(b)
            },
        );

        order.compare(&1, &2);
        assert_eq!((pred_calls.get(), cmp_calls.get()), (2, 1));

        order.compare(&-1, &2);
        assert_eq!((pred_calls.get(), cmp_calls.get()), (4, 1));
    }

    #[test]
    #[should_panic(expected = "no classification for 13")]
    fn predicate_panic_propagates() {
        let order = condition(
            |num: &i32| {
                if *num == 13 {
                    panic!("no classification for {num}");
                }
                num % 2 == 0
            },
            asc,
        );

        let mut nums = [4, 13, 8, 1];
        nums.sort_with(&order);
    }

    #[test]
    #[should_panic(expected = "inner comparator failed")]
    fn inner_panic_propagates() {
        let order = condition(
            |_: &i32| true,
            |_: &i32, _: &i32| -> Ordering { panic!("inner comparator failed") },
        );

        let mut nums = [1, 2];
        nums.sort_with(&order);
    }

    #[test]
    fn shared_across_threads() {
        let order = condition(|num: &i32| num % 3 == 0, desc);

        let mut left: Vec<i32> = (0..200).collect();
        let mut right: Vec<i32> = (0..200).rev().collect();

        std::thread::scope(|scope| {
            scope.spawn(|| left.sort_with(&order));
            scope.spawn(|| right.sort_with(&order));
        });

        assert_eq!(left, right);
        assert!(left.is_sorted_with(&order));
        assert_eq!(left[0], 198);
    }

    #[test]
    fn debug_names_parts() {
        let debug = format!("{:?}", condition(|num: &i32| *num > 0, asc::<i32>));
        assert!(debug.starts_with("Condition"));
        assert!(debug.contains("asc"));
    }

    #[test]
    fn into_parts_round_trip() {
        let (pred, cmp) = condition(|num: &i32| *num > 0, desc::<i32>).into_parts();
        assert!(pred(&1));
        assert_eq!(cmp(&1, &2), Ordering::Greater);
    }
}
