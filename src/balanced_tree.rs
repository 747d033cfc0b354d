//! The contract shared by every self-balancing tree in the crate.

use crate::error::Result;
use std::fmt;

/// An ordered container of unique keys that keeps its height logarithmic in its size.
///
/// Every tree in this crate implements this trait. Trees that support deletion additionally
/// implement [`RemovableTree`].
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlTree;
/// use balanced_collections::red_black_tree::RedBlackInsertOnly;
/// use balanced_collections::BalancedTree;
///
/// fn fill<B: BalancedTree<u32>>(tree: &mut B) {
///     for key in 0..10u32 {
///         tree.add(key).unwrap();
///     }
/// }
///
/// let mut avl = AvlTree::new();
/// let mut red_black = RedBlackInsertOnly::new();
/// fill(&mut avl);
/// fill(&mut red_black);
///
/// assert!(BalancedTree::is_balanced(&avl));
/// assert!(BalancedTree::is_balanced(&red_black));
/// ```
pub trait BalancedTree<T> {
    /// Inserts a key into the tree. Returns `Ok(true)` if a new node was created and `Ok(false)`
    /// if the key was already present. An absent key is rejected with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument).
    fn add<K>(&mut self, key: K) -> Result<bool>
    where
        K: Into<Option<T>>;

    /// Checks if a key exists in the tree.
    fn contains(&self, key: &T) -> bool;

    /// Returns the number of keys in the tree.
    fn len(&self) -> usize;

    /// Returns `true` if the tree holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    fn height(&self) -> usize;

    /// Checks that an in-order traversal yields strictly increasing keys.
    fn is_bst(&self) -> bool;

    /// Checks the balance invariant of the tree.
    fn is_balanced(&self) -> bool;
}

/// A [`BalancedTree`] that also supports deletion.
pub trait RemovableTree<T>: BalancedTree<T> {
    /// Removes a key from the tree, returning it if it was present.
    fn remove(&mut self, key: &T) -> Option<T>;
}

pub(crate) fn is_strictly_increasing<'a, T, I>(keys: I) -> bool
where
    T: Ord + 'a,
    I: Iterator<Item = &'a T>,
{
    let keys: Vec<&T> = keys.collect();
    keys.windows(2).all(|pair| pair[0] < pair[1])
}

// Renders `(depth, label)` pairs with one `--` per level of depth.
pub(crate) fn render_dump(lines: &[(usize, String)], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (depth, label) in lines {
        writeln!(f, "{}{}", "--".repeat(*depth), label)?;
    }
    Ok(())
}
