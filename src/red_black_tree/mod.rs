//! Left-leaning red black trees: self-balancing binary search trees that use a color bit on
//! each node to keep the tree an encoding of a 2-3 tree.
//!
//! Two variants are provided. [`RedBlackInsertOnly`] supports insertion and search only, while
//! [`RedBlackFull`] additionally supports removal.

mod full;
mod insert_only;
mod iter;
mod node;
mod tree;

pub use self::full::RedBlackFull;
pub use self::insert_only::RedBlackInsertOnly;
pub use self::iter::{RedBlackIntoIter, RedBlackIter};
