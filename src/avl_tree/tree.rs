use crate::avl_tree::node::Node;
use log::trace;
use std::cmp::Ordering;
use std::fmt::Display;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => node.height,
    }
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("avl: rotating left below a node of height {}", node.height);
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    trace!("avl: rotating right below a node of height {}", node.height);
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// Recomputes the height of the root of `tree` and restores its balance factor with at most one
// single or double rotation.
fn balance<T>(tree: &mut Tree<T>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance() > 1 {
        if let Some(child) = node.left.take() {
            if child.balance() < 0 {
                node.left = Some(rotate_left(child));
            } else {
                node.left = Some(child);
            }
        }
        node = rotate_right(node);
    } else if node.balance() < -1 {
        if let Some(child) = node.right.take() {
            if child.balance() > 0 {
                node.right = Some(rotate_right(child));
            } else {
                node.right = Some(child);
            }
        }
        node = rotate_left(node);
    }

    *tree = Some(node);
}

// Unlinks the leftmost node of `tree`, rebalancing every node on the path back up.
pub fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            let ret = remove_min(&mut node.left);
            balance(tree);
            return ret;
        }
    }

    let mut node = tree.take()?;
    *tree = node.right.take();
    Some(node)
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>) -> Tree<T> {
    match remove_min(&mut right_tree) {
        Some(mut new_root) => {
            new_root.left = left_tree;
            new_root.right = right_tree;
            Some(new_root)
        },
        None => left_tree,
    }
}

/// Inserts `new_node` below `tree`. Returns `false` and leaves the tree untouched if a node with
/// an equal key already exists.
pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>) -> bool
where
    T: Ord,
{
    let inserted = match tree {
        Some(ref mut node) => match new_node.key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => return false,
        },
        None => {
            *tree = Some(Box::new(new_node));
            return true;
        },
    };

    if inserted {
        balance(tree);
    }
    inserted
}

pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => match key.cmp(&node.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node {
                    key, left, right, ..
                } = unboxed_node;
                *tree = match (left, right) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, right) => combine_subtrees(left, right),
                };
                Some(key)
            },
        },
        None => return None,
    };

    if ret.is_some() {
        balance(tree);
    }
    ret
}

pub fn get<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&node.key),
    })
}

pub fn ceil<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Greater => ceil(&node.right, key),
        Ordering::Less => match ceil(&node.left, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn floor<'a, T>(tree: &'a Tree<T>, key: &T) -> Option<&'a T>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| match key.cmp(&node.key) {
        Ordering::Less => floor(&node.left, key),
        Ordering::Greater => match floor(&node.right, key) {
            None => Some(&node.key),
            res => res,
        },
        Ordering::Equal => Some(&node.key),
    })
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

// Pre-order walk checking the balance factor stored at every node.
pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => true,
        Some(ref node) => {
            node.balance().abs() <= 1 && is_balanced(&node.left) && is_balanced(&node.right)
        },
    }
}

pub fn dump<T>(tree: &Tree<T>, depth: usize, lines: &mut Vec<(usize, String)>)
where
    T: Display,
{
    match tree {
        None => lines.push((depth, String::from("null"))),
        Some(ref node) => {
            lines.push((depth, node.key.to_string()));
            dump(&node.left, depth + 1, lines);
            dump(&node.right, depth + 1, lines);
        },
    }
}
