//! Combinations, ranks, and the lexicographic bijection between them.
//!
//! Parallel enumeration splits the combination space by rank, so the
//! bijection between a combination and its position in lexicographic
//! order is a first-class operation here: [`binomial`] counts the space,
//! [`CombinationCursor::unrank`] enters it at an arbitrary rank, and
//! [`CombinationCursor::advance`] steps to the successor in O(k).

mod binomial;
mod cursor;

pub use binomial::binomial;
pub use cursor::CombinationCursor;
