//! [`Comparator`]s and the combinators that build new ones out of them.
//!
//! This module provides the primitive orders ([`asc()`], [`desc()`], [`asc_bool()`])
//! and adaptors that wrap comparators into new comparators,
//! such as [`condition()`], [`by_key()`], [`Then`], and [`Reverse`].
//!
//! This module corresponds to [`std::cmp`].
//!
//! [`Comparator`]: crate::Comparator

mod by_key;
mod condition;
mod primitive;
mod reverse;
mod then;
mod try_condition;

pub use by_key::*;
pub use condition::*;
pub use primitive::*;
pub use reverse::*;
pub use then::*;
pub use try_condition::*;
