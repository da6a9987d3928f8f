mod comparator;
mod sort_with;
mod try_comparator;

pub use comparator::*;
pub use sort_with::*;
pub use try_comparator::*;
