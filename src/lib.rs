//! Self-balancing binary search trees.
//!
//! The crate provides an [avl tree](avl_tree::AvlTree) and two left-leaning
//! [red black trees](red_black_tree). All of them implement [`BalancedTree`]; the trees that
//! support deletion also implement [`RemovableTree`].

mod balanced_tree;
mod error;
pub mod avl_tree;
pub mod red_black_tree;

pub use self::balanced_tree::{BalancedTree, RemovableTree};
pub use self::error::{Error, Result};
