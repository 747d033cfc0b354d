use crate::balanced_tree::{self, BalancedTree, RemovableTree};
use crate::error::{self, Result};
use crate::red_black_tree::iter::{RedBlackIntoIter, RedBlackIter};
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use log::debug;
use std::fmt;

/// An ordered set implemented using a left-leaning red black tree that supports deletion.
///
/// Insertion follows the same repair sequence as
/// [`RedBlackInsertOnly`](crate::red_black_tree::RedBlackInsertOnly), except that inserting a key
/// that is already present is a no-op. Removal pushes a red link down the search path so that
/// the unlinked node is never a lone black node, then repairs the left-leaning invariant on the
/// way back up. A node with two children is replaced by its in-order successor.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackFull;
///
/// let mut tree = RedBlackFull::new();
/// tree.add(0u32).unwrap();
/// tree.add(3u32).unwrap();
///
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.ceil(&2), Some(&3));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// assert!(tree.is_balanced());
/// ```
pub struct RedBlackFull<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> RedBlackFull<T> {
    /// Constructs a new, empty `RedBlackFull<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackFull;
    ///
    /// let tree: RedBlackFull<u32> = RedBlackFull::new();
    /// ```
    pub fn new() -> Self {
        RedBlackFull { tree: None, len: 0 }
    }

    /// Inserts a key into the tree. Returns `Ok(true)` if the key was inserted and `Ok(false)` if
    /// it was already present. Returns `Err(Error::InvalidArgument)` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackFull;
    ///
    /// let mut tree = RedBlackFull::new();
    /// assert_eq!(tree.add(1u32), Ok(true));
    /// assert_eq!(tree.add(1u32), Ok(false));
    /// assert!(tree.add(None).is_err());
    /// ```
    pub fn add<K>(&mut self, key: K) -> Result<bool>
    where
        T: Ord,
        K: Into<Option<T>>,
    {
        let key = error::require_key(key.into())?;
        if self.contains(&key) {
            debug!("red black: ignoring duplicate key");
            return Ok(false);
        }

        let RedBlackFull {
            ref mut tree,
            ref mut len,
        } = self;
        tree::insert(tree, Node::new(key));
        tree::make_root_black(tree);
        *len += 1;
        Ok(true)
    }

    /// Removes a key from the tree. If the key exists in the tree, it will return the removed
    /// key. Otherwise it will return `None` and the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackFull;
    ///
    /// let mut tree = RedBlackFull::new();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        if !self.contains(key) {
            debug!("red black: key to remove was not found");
            return None;
        }

        let RedBlackFull {
            ref mut tree,
            ref mut len,
        } = self;
        tree::prepare_root_for_removal(tree);
        let ret = tree::remove(tree, key);
        tree::make_root_black(tree);
        if ret.is_some() {
            *len -= 1;
        }
        ret
    }

    /// Removes and returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackFull;
    ///
    /// let mut tree = RedBlackFull::new();
    /// tree.add(3u32).unwrap();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(tree.remove_min(), Some(1));
    /// assert_eq!(tree.remove_min(), Some(3));
    /// assert_eq!(tree.remove_min(), None);
    /// ```
    pub fn remove_min(&mut self) -> Option<T> {
        let RedBlackFull {
            ref mut tree,
            ref mut len,
        } = self;
        tree::prepare_root_for_removal(tree);
        let ret = tree::remove_min(tree).map(|node| node.key);
        tree::make_root_black(tree);
        if ret.is_some() {
            *len -= 1;
        }
        ret
    }

    /// Checks if a key exists in the tree.
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        tree::get(&self.tree, key).is_some()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    pub fn floor(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::floor(&self.tree, key)
    }

    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::ceil(&self.tree, key)
    }

    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    pub fn max(&self) -> Option<&T> {
        tree::max(&self.tree)
    }

    /// Checks that an in-order traversal of the tree yields strictly increasing keys.
    pub fn is_bst(&self) -> bool
    where
        T: Ord,
    {
        balanced_tree::is_strictly_increasing(self.iter())
    }

    /// Checks the color invariants of the tree, after insertions and removals alike.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Returns the pre-order structure of the tree as color-annotated `(depth, label)` pairs.
    pub fn dump_lines(&self) -> Vec<(usize, String)>
    where
        T: fmt::Display,
    {
        let mut lines = Vec::new();
        tree::dump(&self.tree, 0, &mut lines);
        lines
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    pub fn iter(&self) -> RedBlackIter<'_, T> {
        RedBlackIter::new(&self.tree)
    }
}

impl<T> BalancedTree<T> for RedBlackFull<T>
where
    T: Ord,
{
    fn add<K>(&mut self, key: K) -> Result<bool>
    where
        K: Into<Option<T>>,
    {
        RedBlackFull::add(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        RedBlackFull::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        RedBlackFull::height(self)
    }

    fn is_bst(&self) -> bool {
        RedBlackFull::is_bst(self)
    }

    fn is_balanced(&self) -> bool {
        RedBlackFull::is_balanced(self)
    }
}

impl<T> RemovableTree<T> for RedBlackFull<T>
where
    T: Ord,
{
    fn remove(&mut self, key: &T) -> Option<T> {
        RedBlackFull::remove(self, key)
    }
}

impl<T> fmt::Display for RedBlackFull<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        balanced_tree::render_dump(&self.dump_lines(), f)
    }
}

impl<T> IntoIterator for RedBlackFull<T> {
    type IntoIter = RedBlackIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackIntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a RedBlackFull<T>
where
    T: 'a,
{
    type IntoIter = RedBlackIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for RedBlackFull<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackFull;
    use crate::Error;

    #[test]
    fn test_len_empty() {
        let tree: RedBlackFull<u32> = RedBlackFull::new();
        assert_eq!(tree.len(), 0);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_add_duplicate() {
        let mut tree = RedBlackFull::new();
        assert_eq!(tree.add(1u32), Ok(true));
        assert_eq!(tree.add(1u32), Ok(false));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_add_absent_key() {
        let mut tree: RedBlackFull<u32> = RedBlackFull::new();
        assert_eq!(tree.add(None), Err(Error::InvalidArgument("key is absent")));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_leaf() {
        let mut tree = RedBlackFull::new();
        tree.add(1u32).unwrap();
        tree.add(2u32).unwrap();
        assert_eq!(tree.remove(&1), Some(1));
        assert_eq!(tree.len(), 1);
        assert!(tree.is_balanced());
        assert_eq!(tree.to_string(), "2[black]\n--null\n--null\n");
    }

    #[test]
    fn test_remove_root_with_two_children() {
        let mut tree = RedBlackFull::new();
        for key in vec![10u32, 20, 30] {
            tree.add(key).unwrap();
        }
        assert_eq!(tree.remove(&20), Some(20));
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&10, &30]);
        assert!(tree.is_balanced());
        assert!(tree.is_bst());
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = RedBlackFull::new();
        for key in 0..10u32 {
            tree.add(key).unwrap();
        }
        let before = tree.dump_lines();
        assert_eq!(tree.remove(&10), None);
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.dump_lines(), before);
    }

    #[test]
    fn test_remove_all_keeps_balance() {
        let mut tree = RedBlackFull::new();
        for key in 0..128u32 {
            tree.add(key).unwrap();
        }
        for key in (0..128u32).filter(|key| key % 3 == 0) {
            assert_eq!(tree.remove(&key), Some(key));
            assert!(tree.is_balanced());
            assert!(tree.is_bst());
        }
        for key in (0..128u32).filter(|key| key % 3 != 0).rev() {
            assert_eq!(tree.remove(&key), Some(key));
            assert!(tree.is_balanced());
        }
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_min() {
        let mut tree = RedBlackFull::new();
        for key in 0..64u32 {
            tree.add(key).unwrap();
        }
        for key in 0..64u32 {
            assert_eq!(tree.remove_min(), Some(key));
            assert!(tree.is_balanced());
        }
        assert_eq!(tree.remove_min(), None);
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max_floor_ceil() {
        let mut tree = RedBlackFull::new();
        tree.add(1u32).unwrap();
        tree.add(3u32).unwrap();
        tree.add(5u32).unwrap();

        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
        assert_eq!(tree.floor(&2), Some(&1));
        assert_eq!(tree.ceil(&2), Some(&3));
    }

    #[test]
    fn test_iter() {
        let mut tree = RedBlackFull::new();
        tree.add(1u32).unwrap();
        tree.add(5u32).unwrap();
        tree.add(3u32).unwrap();

        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
        assert_eq!((&tree).into_iter().count(), 3);
    }
}
