//! Drives [`itertools`] adaptors with [`Comparator`]s.
//!
//! This module is only available with the `itertools` feature.

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::IntoIter as VecIntoIter;
#[cfg(feature = "std")]
use std::vec::IntoIter as VecIntoIter;

use itertools::{Itertools, MinMaxResult};

use crate::Comparator;

/// Extends [`Iterator`] with methods that take a [`Comparator`] where
/// [`Itertools`] takes a comparison closure.
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Returns the minimum and the maximum items according to a comparator.
    ///
    /// This corresponds to [`Itertools::minmax_by()`], including its tie rules:
    /// the first of several minimal items and the last of several maximal items win.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::asc, iter::IteratorExt};
    /// use itertools::MinMaxResult;
    ///
    /// let order = asc.prioritize(|num: &i32| num % 2 == 0);
    ///
    /// assert_eq!([3, 8, 1, 6].into_iter().minmax_with(&order), MinMaxResult::MinMax(6, 3));
    /// assert_eq!([5].into_iter().minmax_with(&order), MinMaxResult::OneElement(5));
    /// ```
    #[inline]
    fn minmax_with<C>(self, cmp: &C) -> MinMaxResult<Self::Item>
    where
        Self: Sized,
        C: Comparator<Self::Item> + ?Sized,
    {
        self.minmax_by(|a, b| cmp.compare(a, b))
    }

    /// Collects every item and returns them sorted by a comparator.
    ///
    /// Equivalent items keep their relative order.
    /// This corresponds to [`Itertools::sorted_by()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::{by_key, condition}, iter::IteratorExt};
    ///
    /// let order = condition(|word: &&str| word.starts_with('k'), by_key(|word: &&str| word.len()));
    /// let words: Vec<_> = ["pear", "kiwi", "fig", "kale"].into_iter().sorted_with(&order).collect();
    ///
    /// assert_eq!(words, ["kiwi", "kale", "fig", "pear"]);
    /// ```
    #[cfg(feature = "alloc")]
    #[inline]
    fn sorted_with<C>(self, cmp: &C) -> VecIntoIter<Self::Item>
    where
        Self: Sized,
        C: Comparator<Self::Item> + ?Sized,
    {
        self.sorted_by(|a, b| cmp.compare(a, b))
    }

    /// Returns the `k` smallest items according to a comparator, in sorted order.
    ///
    /// This corresponds to [`Itertools::k_smallest_by()`].
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::desc, iter::IteratorExt};
    ///
    /// let largest: Vec<_> = [4, 9, 1, 7, 3].into_iter().k_smallest_with(2, &desc).collect();
    /// assert_eq!(largest, [9, 7]);
    /// ```
    #[cfg(feature = "alloc")]
    #[inline]
    fn k_smallest_with<C>(self, k: usize, cmp: &C) -> VecIntoIter<Self::Item>
    where
        Self: Sized,
        C: Comparator<Self::Item> + ?Sized,
    {
        self.k_smallest_by(k, |a, b| cmp.compare(a, b))
    }
}

impl<I: Iterator> IteratorExt for I {}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::{
        SortWith,
        cmp::condition,
        test_utils::{Id, ids},
    };

    use super::*;

    proptest! {
        #[test]
        fn agrees_with_slice_sorting(nums in propvec(-8..8_i32, ..=32), k in 0..40_usize) {
            agrees_with_slice_sorting_impl(nums, k)?;
        }
    }

    fn agrees_with_slice_sorting_impl(nums: Vec<i32>, k: usize) -> TestCaseResult {
        let order = condition(
            |id: &Id| id.num < 0,
            |a: &Id, b: &Id| a.num.cmp(&b.num),
        );

        let mut expected: Vec<Id> = ids(&nums).collect();
        expected.sort_with(&order);

        let sorted: Vec<Id> = ids(&nums).sorted_with(&order).collect();
        prop_assert!(Id::full_eq_slice(&sorted, &expected));

        let smallest: Vec<Id> = ids(&nums).k_smallest_with(k, &order).collect();
        prop_assert_eq!(smallest.len(), k.min(nums.len()));
        prop_assert!(smallest.is_sorted_with(&order));
        for (actual, wanted) in smallest.iter().zip(&expected) {
            prop_assert!(order.equivalent(actual, wanted));
        }

        match ids(&nums).minmax_with(&order) {
            MinMaxResult::NoElements => prop_assert!(nums.is_empty()),
            MinMaxResult::OneElement(id) => prop_assert!(nums.len() == 1 && id.id == 0),
            MinMaxResult::MinMax(min, max) => {
                prop_assert!(order.equivalent(&min, &expected[0]));
                prop_assert!(order.equivalent(&max, &expected[expected.len() - 1]));
            }
        }

        Ok(())
    }
}
