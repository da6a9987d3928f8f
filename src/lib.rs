//! Provides a composable, declarative way to build sort orders.
//!
//! If [`Ord`] describes *the* order of a type, a [`Comparator`] describes *an* order
//! for it, one that can be built out of smaller orders.
//!
//! # Motivation
//!
//! Suppose we have a list of tasks, and we are asked to show the pinned ones first,
//! then the rest, each group sorted by priority.
//! What would be our approach?
//!
//! - Approach 1: A monolithic closure
//!
//! ```
//! struct Task { pinned: bool, priority: u8 }
//!
//! let mut tasks = vec![
//!     Task { pinned: false, priority: 5 },
//!     Task { pinned: true, priority: 1 },
//!     Task { pinned: true, priority: 3 },
//!     Task { pinned: false, priority: 2 },
//! ];
//!
//! tasks.sort_by(|a, b| match (a.pinned, b.pinned) {
//!     (true, false) => std::cmp::Ordering::Less,
//!     (false, true) => std::cmp::Ordering::Greater,
//!     _ => a.priority.cmp(&b.priority),
//! });
//!
//! let priorities: Vec<_> = tasks.iter().map(|task| task.priority).collect();
//! assert_eq!(priorities, [1, 3, 2, 5]);
//! ```
//!
//! **Cons:** The grouping rule and the secondary order are tangled together.
//! Swapping the secondary order, or adding a third level, means rewriting the whole `match`.
//!
//! - Approach 2: Sorting by a tuple key
//!
//! ```
//! struct Task { pinned: bool, priority: u8 }
//!
//! let mut tasks = vec![
//!     Task { pinned: false, priority: 5 },
//!     Task { pinned: true, priority: 1 },
//! ];
//!
//! tasks.sort_by_key(|task| (!task.pinned, task.priority));
//! assert!(tasks[0].pinned);
//! ```
//!
//! **Cons:** The `!` is easy to forget, and it only works when every level of the order
//! can be expressed as an [`Ord`] key.
//!
//! This crate proposes composing the order out of named pieces:
//!
//! ```
//! use better_compare::{prelude::*, cmp::{by_key, condition}};
//!
//! #[derive(Debug, PartialEq)]
//! struct Task { pinned: bool, priority: u8 }
//!
//! let mut tasks = vec![
//!     Task { pinned: false, priority: 5 },
//!     Task { pinned: true, priority: 1 },
//!     Task { pinned: true, priority: 3 },
//!     Task { pinned: false, priority: 2 },
//! ];
//!
//! let order = condition(|task: &Task| task.pinned, by_key(|task: &Task| task.priority));
//! tasks.sort_with(&order);
//!
//! let priorities: Vec<_> = tasks.iter().map(|task| task.priority).collect();
//! assert_eq!(priorities, [1, 3, 2, 5]);
//! ```
//!
//! Each piece is a [`Comparator`] on its own, and the result is one too,
//! so it can be wrapped again:
//!
//! ```
//! use better_compare::{prelude::*, cmp::asc};
//!
//! let order = asc
//!     .prioritize(|num: &i32| num % 2 == 0)
//!     .prioritize(|num: &i32| *num == 7);
//!
//! let mut nums = [4, 7, 1, 2, 3];
//! nums.sort_with(&order);
//!
//! assert_eq!(nums, [7, 2, 4, 1, 3]);
//! ```
//!
//! # Comparator
//!
//! The core trait is roughly:
//!
//! ```
//! use std::cmp::Ordering;
//!
//! pub trait Comparator<T: ?Sized> {
//!     fn compare(&self, a: &T, b: &T) -> Ordering;
//! }
//! ```
//!
//! Every `Fn(&T, &T) -> Ordering` is a [`Comparator`], so `i32::cmp`, `f64::total_cmp`
//! and ordinary closures plug straight into the combinators.
//! The produced comparator must be a valid weak ordering for sorting to make sense.
//! This is the caller's obligation: every combinator in this crate preserves the ordering laws
//! of its inputs, but none of them can repair inputs that break those laws.
//!
//! [`TryComparator`] is the fallible counterpart. Its errors are never swallowed:
//! they come back out of [`try_sort_with`](SortWith::try_sort_with) exactly as they were produced.
//!
//! # Features
//!
//! - `std` (default): enables `alloc`.
//! - `alloc`: stable sorting helpers.
//! - `itertools`: [`IteratorExt`](iter::IteratorExt), driving `itertools` adaptors with a [`Comparator`].
//! - `log`: emits a `debug` record through the [`log`](https://docs.rs/log) facade
//!   when a fallible sort is abandoned.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod cmp;
#[cfg(feature = "itertools")]
pub mod iter;
pub mod prelude;
mod traits;

#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use traits::*;

#[inline(always)]
const fn assert_comparator<C: Comparator<T>, T: ?Sized>(comparator: C) -> C {
    comparator
}

#[inline(always)]
const fn assert_try_comparator<C: TryComparator<T, E>, T: ?Sized, E>(comparator: C) -> C {
    comparator
}
