use crate::red_black_tree::node::{Color, Node};
use std::cmp;
use std::cmp::Ordering;
use std::fmt::Display;
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

// Absent children count as black.
pub fn is_red<T>(tree: &Tree<T>) -> bool {
    match tree {
        None => false,
        Some(ref node) => node.color == Color::Red,
    }
}

// Whether a removal should push a red link down into `tree` before descending into it.
fn needs_red_link<T>(tree: &Tree<T>) -> bool {
    match tree {
        Some(ref child) => child.color != Color::Red && !is_red(&child.left),
        None => false,
    }
}

/// Inserts `new_node` below `tree` and repairs every node on the way back up. If a node with an
/// equal key exists, its key is replaced and the old key is returned.
pub fn insert<T>(tree: &mut Tree<T>, new_node: Node<T>) -> Option<T>
where
    T: Ord,
{
    let ret = match tree {
        Some(ref mut node) => match new_node.key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, new_node),
            Ordering::Greater => insert(&mut node.right, new_node),
            Ordering::Equal => Some(mem::replace(&mut node.key, new_node.key)),
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    if let Some(ref mut node) = tree {
        node.fix_up();
    }
    ret
}

pub fn make_root_black<T>(tree: &mut Tree<T>) {
    if let Some(ref mut node) = tree {
        node.color = Color::Black;
    }
}

// A removal starts from a red root unless one of its children already is red.
pub fn prepare_root_for_removal<T>(tree: &mut Tree<T>) {
    if let Some(ref mut node) = tree {
        if !is_red(&node.left) && !is_red(&node.right) {
            node.color = Color::Red;
        }
    }
}

/// Unlinks the leftmost node of `tree`, keeping a red link on the search path so that the
/// unlinked node is never a lone black node.
pub fn remove_min<T>(tree: &mut Tree<T>) -> Option<Box<Node<T>>> {
    if let Some(ref mut node) = tree {
        if node.left.is_some() {
            if needs_red_link(&node.left) {
                node.move_red_left();
            }

            let ret = remove_min(&mut node.left);
            node.fix_up();
            return ret;
        }
    }

    let mut node = tree.take()?;
    *tree = node.right.take();
    Some(node)
}

fn combine_subtrees<T>(left_tree: Tree<T>, mut right_tree: Tree<T>, color: Color) -> Tree<T> {
    match remove_min(&mut right_tree) {
        Some(mut new_root) => {
            new_root.left = left_tree;
            new_root.right = right_tree;
            new_root.color = color;
            Some(new_root)
        },
        None => left_tree,
    }
}

/// Removes `key` from `tree`.
///
/// The key must be present: the red links pushed down on the way to it are only guaranteed to be
/// undone when the search ends at a node.
pub fn remove<T>(tree: &mut Tree<T>, key: &T) -> Option<T>
where
    T: Ord,
{
    let ret = match tree.take() {
        Some(mut node) => {
            if *key < node.key {
                if needs_red_link(&node.left) {
                    node.move_red_left();
                }

                let ret = remove(&mut node.left, key);
                *tree = Some(node);
                ret
            } else {
                if is_red(&node.left) {
                    node.rotate_right();
                }

                if *key == node.key && node.right.is_none() {
                    return Some(node.key);
                }

                if needs_red_link(&node.right) {
                    node.move_red_right();
                }

                if *key == node.key {
                    let Node {
                        key,
                        left,
                        right,
                        color,
                    } = *node;
                    *tree = combine_subtrees(left, right, color);
                    Some(key)
                } else {
                    let ret = remove(&mut node.right, key);
                    *tree = Some(node);
                    ret
                }
            }
        },
        None => return None,
    };

    if let Some(ref mut node) = tree {
        node.fix_up();
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

pub fn height<T>(tree: &Tree<T>) -> usize {
    match tree {
        None => 0,
        Some(ref node) => cmp::max(height(&node.left), height(&node.right)) + 1,
    }
}

/// Checks the left-leaning red black invariants: the root is black, no red link leans right,
/// no red node has a red left child, and every path to an absent child crosses the same number
/// of black nodes.
pub fn is_balanced<T>(tree: &Tree<T>) -> bool {
    fn check<T>(tree: &Tree<T>, mut black_height: usize) -> bool {
        let node = match tree {
            None => return black_height == 0,
            Some(ref node) => node,
        };
        if is_red(&node.right) {
            return false;
        }
        if node.color == Color::Black {
            if black_height == 0 {
                return false;
            }
            black_height -= 1;
        } else if is_red(&node.left) {
            return false;
        }
        check(&node.left, black_height) && check(&node.right, black_height)
    }

    if is_red(tree) {
        return false;
    }

    let mut black_height = 0;
    let mut curr = tree;
    while let Some(ref node) = curr {
        if node.color == Color::Black {
            black_height += 1;
        }
        curr = &node.left;
    }
    check(tree, black_height)
}

pub fn dump<T>(tree: &Tree<T>, depth: usize, lines: &mut Vec<(usize, String)>)
where
    T: Display,
{
    match tree {
        None => lines.push((depth, String::from("null"))),
        Some(ref node) => {
            let color = match node.color {
                Color::Red => "red",
                Color::Black => "black",
            };
            lines.push((depth, format!("{}[{}]", node.key, color)));
            dump(&node.left, depth + 1, lines);
            dump(&node.right, depth + 1, lines);
        },
    }
}
