use std::{cmp::Ordering, fmt::Debug, marker::PhantomData};

use crate::{Comparator, assert_comparator};

/// A [`Comparator`] that orders values by the [`Ord`] implementation of a key
/// extracted from each of them.
///
/// The key is extracted twice per comparison, once for each value.
/// Values with equal keys are equivalent.
///
/// This comparator is constructed by [`by_key()`].
pub struct ByKey<T: ?Sized, K, F> {
    f: F,
    _marker: PhantomData<fn(&T) -> K>,
}

/// Creates a [`ByKey`] from a key-extraction function.
///
/// This is the comparator counterpart of [`slice::sort_by_key()`].
///
/// # Examples
///
/// ```
/// use better_compare::{prelude::*, cmp::by_key};
///
/// let mut nums = [-5_i32, 3, -1, 4];
/// nums.sort_with(&by_key(|num: &i32| num.unsigned_abs()));
///
/// assert_eq!(nums, [-1, 3, 4, -5]);
/// ```
#[inline]
pub const fn by_key<T, K, F>(f: F) -> ByKey<T, K, F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    assert_comparator::<_, T>(ByKey {
        f,
        _marker: PhantomData,
    })
}

impl<T: ?Sized, K, F> ByKey<T, K, F> {
    /// Returns the key-extraction function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<T, K, F> Comparator<T> for ByKey<T, K, F>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a).cmp(&(self.f)(b))
    }
}

impl<T: ?Sized, K, F: Clone> Clone for ByKey<T, K, F> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: ?Sized, K, F: Copy> Copy for ByKey<T, K, F> {}

impl<T: ?Sized, K, F> Debug for ByKey<T, K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByKey")
            .field("f", &std::any::type_name::<F>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_keys_are_equivalent() {
        let order = by_key(|pair: &(char, u32)| pair.1 % 10);

        assert!(order.equivalent(&('a', 13), &('b', 3)));
        assert_eq!(order.compare(&('a', 19), &('b', 21)), Ordering::Greater);
    }

    #[test]
    fn unsized_keys_source() {
        let order = by_key(|word: &str| word.len());
        assert_eq!(order.compare("abc", "z"), Ordering::Greater);
    }

    #[test]
    fn copy_when_key_fn_is_copy() {
        let order = by_key(|num: &i32| -num);
        let copied = order;
        assert_eq!(order.compare(&1, &2), copied.compare(&1, &2));
        assert_eq!(order.into_inner()(&3), -3);
    }
}
