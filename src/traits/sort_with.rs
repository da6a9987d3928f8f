#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::{vec, vec::Vec};

use crate::Comparator;
#[cfg(feature = "alloc")]
use crate::TryComparator;

/// Extends slices with sorting methods that take a [`Comparator`] or a [`TryComparator`].
///
/// The comparator is taken by reference so that the same value can be reused across sorts.
/// Trait objects work too:
///
/// ```
/// use better_compare::{prelude::*, cmp::desc};
///
/// let order: &dyn Comparator<i32> = &desc::<i32>;
///
/// let mut nums = [1, 3, 2];
/// nums.sort_unstable_with(order);
/// assert_eq!(nums, [3, 2, 1]);
/// ```
pub trait SortWith<T> {
    /// Sorts the slice with a comparator, keeping equivalent items in their original order.
    ///
    /// This is [`slice::sort_by()`] driven by a [`Comparator`],
    /// and inherits its guarantees and its behavior on comparators that violate the ordering laws.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::by_key};
    ///
    /// let mut words = ["bb", "a", "cc", "d"];
    /// words.sort_with(&by_key(|word: &&str| word.len()));
    ///
    /// assert_eq!(words, ["a", "d", "bb", "cc"]);
    /// ```
    #[cfg(feature = "alloc")]
    fn sort_with<C>(&mut self, cmp: &C)
    where
        C: Comparator<T> + ?Sized;

    /// Sorts the slice with a comparator, without preserving the order of equivalent items.
    ///
    /// This is [`slice::sort_unstable_by()`] driven by a [`Comparator`].
    /// Unlike [`sort_with()`](SortWith::sort_with), it does not allocate.
    fn sort_unstable_with<C>(&mut self, cmp: &C)
    where
        C: Comparator<T> + ?Sized;

    /// Returns whether no item orders strictly after the item following it.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::asc};
    ///
    /// let order = asc.prioritize(|&num: &i32| num < 0);
    ///
    /// assert!(![-1, -5, 0, 2].is_sorted_with(&order));
    /// assert!([-5, -1, 0, 2].is_sorted_with(&order));
    /// assert!([0_i32; 0].is_sorted_with(&order));
    /// ```
    fn is_sorted_with<C>(&self, cmp: &C) -> bool
    where
        C: Comparator<T> + ?Sized;

    /// Sorts the slice with a fallible comparator, keeping equivalent items in their original order.
    ///
    /// Sorting stops at the first error, which is returned as is.
    /// In that case the slice is left exactly as it was before the call.
    /// The comparator is never called again after it has failed.
    ///
    /// Like [`slice::sort_by()`], slices shorter than two items or of zero-sized items
    /// are left as they are, and the comparator is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use better_compare::{prelude::*, cmp::try_condition};
    /// use std::cmp::Ordering;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Unknown(&'static str);
    ///
    /// let is_vowel = |ch: &char| match *ch {
    ///     'a' | 'e' | 'i' | 'o' | 'u' => Ok(true),
    ///     'a'..='z' => Ok(false),
    ///     _ => Err(Unknown("not a lowercase letter")),
    /// };
    /// let order = try_condition(is_vowel, |a: &char, b: &char| Ok(a.cmp(b)));
    ///
    /// let mut letters = ['d', 'a', 'c', 'e'];
    /// assert_eq!(letters.try_sort_with(&order), Ok(()));
    /// assert_eq!(letters, ['a', 'e', 'c', 'd']);
    ///
    /// let mut letters = ['d', 'a', '!', 'e'];
    /// assert_eq!(letters.try_sort_with(&order), Err(Unknown("not a lowercase letter")));
    /// assert_eq!(letters, ['d', 'a', '!', 'e']);
    /// ```
    #[cfg(feature = "alloc")]
    fn try_sort_with<C, E>(&mut self, cmp: &C) -> Result<(), E>
    where
        C: TryComparator<T, E> + ?Sized;
}

impl<T> SortWith<T> for [T] {
    #[cfg(feature = "alloc")]
    #[inline]
    fn sort_with<C>(&mut self, cmp: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_by(|a, b| cmp.compare(a, b));
    }

    #[inline]
    fn sort_unstable_with<C>(&mut self, cmp: &C)
    where
        C: Comparator<T> + ?Sized,
    {
        self.sort_unstable_by(|a, b| cmp.compare(a, b));
    }

    #[inline]
    fn is_sorted_with<C>(&self, cmp: &C) -> bool
    where
        C: Comparator<T> + ?Sized,
    {
        self.is_sorted_by(|a, b| cmp.le(a, b))
    }

    #[cfg(feature = "alloc")]
    fn try_sort_with<C, E>(&mut self, cmp: &C) -> Result<(), E>
    where
        C: TryComparator<T, E> + ?Sized,
    {
        let len = self.len();
        if len < 2 || size_of::<T>() == 0 {
            return Ok(());
        }

        let order = sorted_indices(self, cmp).inspect_err(|_| {
            #[cfg(feature = "log")]
            log::debug!("comparator failed while sorting {len} items; slice left unmodified");
        })?;

        debug_assert_eq!(order.len(), len);
        apply_permutation(self, &order);
        Ok(())
    }
}

/// Bottom-up merge sort over positions, so that a failed comparison
/// can bail out before anything in `items` has moved.
#[cfg(feature = "alloc")]
fn sorted_indices<T, C, E>(items: &[T], cmp: &C) -> Result<Vec<usize>, E>
where
    C: TryComparator<T, E> + ?Sized,
{
    let len = items.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut scratch = vec![0; len];
    let mut width = 1;

    while width < len {
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);

            merge_runs(
                items,
                cmp,
                &order[start..mid],
                &order[mid..end],
                &mut scratch[start..end],
            )?;
        }

        std::mem::swap(&mut order, &mut scratch);
        width *= 2;
    }

    Ok(order)
}

#[cfg(feature = "alloc")]
fn merge_runs<T, C, E>(
    items: &[T],
    cmp: &C,
    left: &[usize],
    right: &[usize],
    out: &mut [usize],
) -> Result<(), E>
where
    C: TryComparator<T, E> + ?Sized,
{
    let (mut i, mut j) = (0, 0);

    for slot in out {
        // Only a strictly lesser right item may jump ahead. Stability depends on it.
        let take_right = match (left.get(i), right.get(j)) {
            (Some(&l), Some(&r)) => cmp.try_compare(&items[r], &items[l])?.is_lt(),
            (None, _) => true,
            (_, None) => false,
        };

        if take_right {
            *slot = right[j];
            j += 1;
        } else {
            *slot = left[i];
            i += 1;
        }
    }

    Ok(())
}

/// Moves `items[order[k]]` to position `k` for every `k`, following each cycle with swaps.
#[cfg(feature = "alloc")]
fn apply_permutation<T>(items: &mut [T], order: &[usize]) {
    let mut placed = vec![false; items.len()];

    for start in 0..items.len() {
        if placed[start] {
            continue;
        }

        let mut current = start;
        loop {
            let next = order[current];
            placed[current] = true;
            if next == start {
                break;
            }

            items.swap(current, next);
            current = next;
        }
    }
}
