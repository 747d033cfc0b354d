use crate::balanced_tree::{self, BalancedTree};
use crate::error::{self, Result};
use crate::red_black_tree::iter::{RedBlackIntoIter, RedBlackIter};
use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;
use log::debug;
use std::fmt;

/// An ordered set implemented using an insert-only left-leaning red black tree.
///
/// A left-leaning red black tree is a binary search tree that encodes a 2-3 tree: a red link
/// glues a node to its parent as part of the same 3-node, and red links always lean left. Every
/// path from the root to an absent child crosses the same number of black links, so the height
/// of the tree stays logarithmic in its size.
///
/// This variant only supports insertion and search. Inserting a key that is already present
/// replaces the stored key without changing the size of the tree.
///
/// # Examples
///
/// ```
/// use balanced_collections::red_black_tree::RedBlackInsertOnly;
///
/// let mut tree = RedBlackInsertOnly::new();
/// tree.add(10u32).unwrap();
/// tree.add(20u32).unwrap();
/// tree.add(30u32).unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.min(), Some(&10));
/// assert_eq!(tree.floor(&25), Some(&20));
/// assert!(tree.is_balanced());
/// ```
pub struct RedBlackInsertOnly<T> {
    tree: tree::Tree<T>,
    len: usize,
}

impl<T> RedBlackInsertOnly<T> {
    /// Constructs a new, empty `RedBlackInsertOnly<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackInsertOnly;
    ///
    /// let tree: RedBlackInsertOnly<u32> = RedBlackInsertOnly::new();
    /// ```
    pub fn new() -> Self {
        RedBlackInsertOnly { tree: None, len: 0 }
    }

    /// Inserts a key into the tree. Returns `Ok(true)` if a new node was created and `Ok(false)`
    /// if an equal key was already present, in which case the stored key is replaced. Returns
    /// `Err(Error::InvalidArgument)` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackInsertOnly;
    ///
    /// let mut tree = RedBlackInsertOnly::new();
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
        let RedBlackInsertOnly {
            ref mut tree,
            ref mut len,
        } = self;
        let replaced = tree::insert(tree, Node::new(key));
        tree::make_root_black(tree);
        match replaced {
            Some(_) => {
                debug!("red black: replaced duplicate key");
                Ok(false)
            },
            None => {
                *len += 1;
                Ok(true)
            },
        }
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackInsertOnly;
    ///
    /// let mut tree = RedBlackInsertOnly::new();
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
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackInsertOnly;
    ///
    /// let mut tree = RedBlackInsertOnly::new();
    /// tree.add(1u32).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, counting both red
    /// and black nodes.
    pub fn height(&self) -> usize {
        tree::height(&self.tree)
    }

    /// Returns a key in the tree that is less than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    pub fn floor(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::floor(&self.tree, key)
    }

    /// Returns a key in the tree that is greater than or equal to a particular key. Returns
    /// `None` if such a key does not exist.
    pub fn ceil(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        tree::ceil(&self.tree, key)
    }

    /// Returns the minimum key of the tree. Returns `None` if the tree is empty.
    pub fn min(&self) -> Option<&T> {
        tree::min(&self.tree)
    }

    /// Returns the maximum key of the tree. Returns `None` if the tree is empty.
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

    /// Checks the color invariants: the root is black, red links lean left, no red node has a
    /// red left child, and every path to an absent child has the same black height.
    pub fn is_balanced(&self) -> bool {
        tree::is_balanced(&self.tree)
    }

    /// Returns the pre-order structure of the tree as `(depth, label)` pairs. Labels carry the
    /// color of the node and absent children are labelled `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_collections::red_black_tree::RedBlackInsertOnly;
    ///
    /// let mut tree = RedBlackInsertOnly::new();
    /// tree.add(1u32).unwrap();
    /// tree.add(2u32).unwrap();
    /// assert_eq!(
    ///     tree.dump_lines(),
    ///     vec![
    ///         (0, String::from("2[black]")),
    ///         (1, String::from("1[red]")),
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
    /// use balanced_collections::red_black_tree::RedBlackInsertOnly;
    ///
    /// let mut tree = RedBlackInsertOnly::new();
    /// tree.add(3u32).unwrap();
    /// tree.add(1u32).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackIter<'_, T> {
        RedBlackIter::new(&self.tree)
    }
}

impl<T> BalancedTree<T> for RedBlackInsertOnly<T>
where
    T: Ord,
{
    fn add<K>(&mut self, key: K) -> Result<bool>
    where
        K: Into<Option<T>>,
    {
        RedBlackInsertOnly::add(self, key)
    }

    fn contains(&self, key: &T) -> bool {
        RedBlackInsertOnly::contains(self, key)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn height(&self) -> usize {
        RedBlackInsertOnly::height(self)
    }

    fn is_bst(&self) -> bool {
        RedBlackInsertOnly::is_bst(self)
    }

    fn is_balanced(&self) -> bool {
        RedBlackInsertOnly::is_balanced(self)
    }
}

impl<T> fmt::Display for RedBlackInsertOnly<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        balanced_tree::render_dump(&self.dump_lines(), f)
    }
}

impl<T> IntoIterator for RedBlackInsertOnly<T> {
    type IntoIter = RedBlackIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackIntoIter::new(self.tree)
    }
}

impl<'a, T> IntoIterator for &'a RedBlackInsertOnly<T>
where
    T: 'a,
{
    type IntoIter = RedBlackIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for RedBlackInsertOnly<T> {
    fn default() -> Self {
        Self::new()
    }
}
