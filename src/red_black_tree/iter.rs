use crate::red_black_tree::node::Node;
use crate::red_black_tree::tree;

/// An owning iterator for the red black trees.
///
/// This iterator traverses the keys of the tree in-order and yields owned keys.
pub struct RedBlackIntoIter<T> {
    current: tree::Tree<T>,
    stack: Vec<Node<T>>,
}

impl<T> RedBlackIntoIter<T> {
    pub(crate) fn new(tree: tree::Tree<T>) -> Self {
        RedBlackIntoIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<T> Iterator for RedBlackIntoIter<T> {
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

/// An iterator for the red black trees.
///
/// This iterator traverses the keys of the tree in-order and yields immutable references.
pub struct RedBlackIter<'a, T> {
    current: &'a tree::Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> RedBlackIter<'a, T> {
    pub(crate) fn new(tree: &'a tree::Tree<T>) -> Self {
        RedBlackIter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, T> Iterator for RedBlackIter<'a, T>
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
