use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::balanced_tree::{self, BalancedTree, RemovableTree};
use crate::error::{self, Result};
use log::debug;
use std::fmt;

/// An ordered set implemented using an avl tree.
///
/// An avl tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of two child subtrees of any node differ by at most one. Inserting a key that is
/// already present is a no-op.
///
/// # Examples
///
/// ```
/// use balanced_collections::avl_tree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// tree.add(0u32).unwrap();
/// tree.add(3u32).unwrap();
///
/// assert_eq!(tree.len(), 2);
///
/// assert_eq!(tree.min(), Some(&0));
/// assert_eq!(tree.ceil(&2), Some(&3));
///
/// assert_eq!(tree.remove(&0), Some(0));
/// assert_eq!(tree.remove(&1), None);
/// assert!(tree.is_balanced());
/// ```
pub struct AvlTree<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree { tree: None, len: 0 }
    }

    /// Inserts a key into the tree. Returns `Ok(true)` if the key was inserted and `Ok(false)` if
    /// it was already present, in which case the tree is left untouched. Returns
    /// `Err(Error::InvalidArgument)` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    /// use balanced_collections::Error;
    ///
    /// let mut tree = AvlTree::new();
    /// assert_eq!(tree.add(1u32), Ok(true));
    /// assert_eq!(tree.add(1u32), Ok(false));
    /// assert!(tree.add(None).is_err());
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add<K>(&mut self, key: K) -> Result<bool>
    where
        T: Ord,
        K: Into<Option<T>>,
    {
        let key = error::require_key(key.into())?;
        let AvlTree {
            ref mut tree,
            ref mut len,
        } = self;
        if tree::insert(tree, Node::new(key)) {
            *len += 1;
            Ok(true)
        } else {
            debug!("avl: ignoring duplicate key");
            Ok(false)
        }
    }

    /// Removes a key from the tree. If the key exists in the tree, it will return the removed
    /// key. Otherwise it will return `None` and the tree is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<T>
    where
        T: Ord,
    {
        let AvlTree {
            ref mut tree,
            ref mut len,
        } = self;
        let ret = tree::remove(tree, key);
        match ret {
            Some(_) => *len -= 1,
            None => debug!("avl: key to remove was not found"),
        }
        ret
    }

    /// Removes and returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(3u32).unwrap();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(tree.remove_min(), Some(1));
    /// assert_eq!(tree.remove_min(), Some(3));
    /// assert_eq!(tree.remove_min(), None);
    /// ```
    pub fn remove_min(&mut self) -> Option<T> {
        let AvlTree {
            ref mut tree,
            ref mut len,
        } = self;
        tree::remove_min(tree).map(|node| {
            *len -= 1;
            node.key
        })
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool
    where
        T: Ord,
    {
        tree::get(&self.tree, key).is_some()
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// tree.add(2u32).unwrap();
    /// tree.clear();
    /// assert_eq!(tree.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for key in 1..6u32 {
    ///     tree.add(key).unwrap();
    /// }
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns a key in the tree that is less than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(tree.floor(&0), None);
    /// assert_eq!(tree.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the tree that is greater than or equal to a particular key. Returns
    /// `None` if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(tree.ceil(&0), Some(&1));
    /// assert_eq!(tree.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// tree.add(3u32).unwrap();
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(1u32).unwrap();
    /// tree.add(3u32).unwrap();
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
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

    /// Checks that the heights of the two child subtrees of every node differ by at most one.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Returns the pre-order structure of the tree as `(depth, label)` pairs. Absent children are
    /// labelled `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(2u32).unwrap();
    /// tree.add(1u32).unwrap();
    /// assert_eq!(
    ///     tree.dump_lines(),
    ///     vec![
    ///         (0, String::from("2")),
    ///         (1, String::from("1")),
    ///         (2, String::from("null")),
    ///         (2, String::from("null")),
    ///         (1, String::from("null")),
    ///     ],
    /// );
    /// ```
    pub fn dump_lines(&self) -> Vec<(usize, String)>
    where
        T: fmt::Display,
    {
        let mut lines = Vec::new();
        tree::dump(&self.tree, 0, &mut lines);
        lines
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.add(3u32).unwrap();
    /// tree.add(1u32).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> AvlTreeIter<'_, T> {
        AvlTreeIter {
            current: &self.tree,
            stack: Vec::new(),
        }
    }
}

impl<T> BalancedTree<T> for AvlTree<T>
where
    T: Ord,
{
    fn add<K>(&mut self, key: K) -> Result<bool>
    where
        K: Into<Option<T>>,
    {
        AvlTree::add(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        AvlTree::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        AvlTree::height(self)
    }

    fn is_bst(&self) -> bool {
        AvlTree::is_bst(self)
    }

    fn is_balanced(&self) -> bool {
        AvlTree::is_balanced(self)
    }
}

impl<T> RemovableTree<T> for AvlTree<T>
where
    T: Ord,
{
    fn remove(&mut self, key: &T) -> Option<T> {
        AvlTree::remove(self, key)
    }
}

impl<T> fmt::Display for AvlTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        balanced_tree::render_dump(&self.dump_lines(), f)
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type IntoIter = AvlTreeIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            current: self.tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type IntoIter = AvlTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `AvlTree<T>`.
///
/// This iterator traverses the keys of the tree in-order and yields owned keys.
pub struct AvlTreeIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> Iterator for AvlTreeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { key, right, .. } = node;
            self.current = right;
            key
        })
    }
}

/// An iterator for `AvlTree<T>`.
///
/// This iterator traverses the keys of the tree in-order and yields immutable references.
pub struct AvlTreeIter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for AvlTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::AvlTree;
    use crate::avl_tree::tree::{self, Tree};
    use crate::Error;

    // Stored heights must agree with the heights recomputed from scratch.
    fn check_heights(tree: &Tree<u32>) -> usize {
        match tree {
            None => 0,
            Some(ref node) => {
                let height = check_heights(&node.left).max(check_heights(&node.right)) + 1;
                assert_eq!(node.height, height);
                height
            },
        }
    }

    #[test]
    fn test_len_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let tree: AvlTree<u32> = AvlTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn test_add() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.add(1u32), Ok(true));
        assert!(tree.contains(&1));
    }

    #[test]
    fn test_add_duplicate() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.add(1u32), Ok(true));
        assert_eq!(tree.add(1u32), Ok(false));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_add_absent_key() {
        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        assert_eq!(tree.add(None), Err(Error::InvalidArgument("key is absent")));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1]);
    }

    #[test]
    fn test_remove() {
        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        assert_eq!(tree.remove(&1), Some(1));
        assert!(!tree.contains(&1));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        tree.add(2u32).unwrap();
        assert_eq!(tree.remove(&3), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_remove_two_children() {
        let mut tree = AvlTree::new();
        for key in vec![4u32, 2, 6, 1, 3, 5, 7] {
            tree.add(key).unwrap();
        }
        assert_eq!(tree.remove(&4), Some(4));
        assert_eq!(tree.dump_lines()[0], (0, String::from("5")));
        assert!(tree.is_balanced());
        assert!(tree.is_bst());
        check_heights(&tree.tree);
    }

    #[test]
    fn test_remove_min() {
        let mut tree = AvlTree::new();
        for key in 0..32u32 {
            tree.add(key).unwrap();
        }
        for key in 0..16u32 {
            assert_eq!(tree.remove_min(), Some(key));
            assert!(tree.is_balanced());
            check_heights(&tree.tree);
        }
        assert_eq!(tree.len(), 16);
        assert_eq!(tree.min(), Some(&16));
    }

    #[test]
    fn test_double_rotation() {
        let mut tree = AvlTree::new();
        tree.add(3u32).unwrap();
        tree.add(1u32).unwrap();
        tree.add(2u32).unwrap();
        assert_eq!(tree.dump_lines()[0], (0, String::from("2")));
        assert_eq!(tree.height(), 2);

        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        tree.add(3u32).unwrap();
        tree.add(2u32).unwrap();
        assert_eq!(tree.dump_lines()[0], (0, String::from("2")));
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_ascending_height() {
        let mut tree = AvlTree::new();
        for key in 0..1023u32 {
            tree.add(key).unwrap();
            assert!(tree.is_balanced());
        }
        assert_eq!(tree.height(), 10);
        assert_eq!(check_heights(&tree.tree), tree::height(&tree.tree));
    }

    #[test]
    fn test_min_max() {
        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        tree.add(3u32).unwrap();
        tree.add(5u32).unwrap();

        assert_eq!(tree.min(), Some(&1));
        assert_eq!(tree.max(), Some(&5));
    }

    #[test]
    fn test_floor_ceil() {
        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        tree.add(3u32).unwrap();
        tree.add(5u32).unwrap();

        assert_eq!(tree.floor(&0), None);
        assert_eq!(tree.floor(&2), Some(&1));
        assert_eq!(tree.floor(&4), Some(&3));
        assert_eq!(tree.floor(&6), Some(&5));

        assert_eq!(tree.ceil(&0), Some(&1));
        assert_eq!(tree.ceil(&2), Some(&3));
        assert_eq!(tree.ceil(&4), Some(&5));
        assert_eq!(tree.ceil(&6), None);
    }

    #[test]
    fn test_into_iter() {
        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        tree.add(5u32).unwrap();
        tree.add(3u32).unwrap();

        assert_eq!(tree.into_iter().collect::<Vec<u32>>(), vec![1, 3, 5]);
    }

    #[test]
    fn test_iter() {
        let mut tree = AvlTree::new();
        tree.add(1u32).unwrap();
        tree.add(5u32).unwrap();
        tree.add(3u32).unwrap();

        assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &3, &5]);
    }

    #[test]
    fn test_display() {
        let mut tree = AvlTree::new();
        tree.add(2u32).unwrap();
        tree.add(1u32).unwrap();
        tree.add(3u32).unwrap();

        assert_eq!(
            tree.to_string(),
            "2\n--1\n----null\n----null\n--3\n----null\n----null\n",
        );
    }
}
