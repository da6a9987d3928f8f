//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the traits needed to call this crate's methods.
//!
//! # Example
//!
//! ```
//! use better_compare::prelude::*;
//! ```

pub use crate::traits::*;
