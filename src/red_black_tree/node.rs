use crate::red_black_tree::tree;
use log::trace;
use std::mem;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A struct representing an internal node of a left-leaning red black tree.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    pub fn flip_colors(&mut self) {
        trace!("red black: flipping colors");
        self.color = self.color.flip();
        if let Some(ref mut child) = self.left {
            child.color = child.color.flip();
        }
        if let Some(ref mut child) = self.right {
            child.color = child.color.flip();
        }
    }

    // The right child takes the place of this node and inherits its color; this node becomes a
    // red left child.
    pub fn rotate_left(&mut self) {
        trace!("red black: rotating left");
        let mut child = match self.right.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        self.right = child.left.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.left = Some(child);
    }

    pub fn rotate_right(&mut self) {
        trace!("red black: rotating right");
        let mut child = match self.left.take() {
            Some(child) => child,
            None => unreachable!(),
        };
        self.left = child.right.take();
        mem::swap(&mut *child, self);
        self.color = child.color;
        child.color = Color::Red;
        self.right = Some(child);
    }

    fn is_left_left_red(&self) -> bool {
        match self.left {
            Some(ref child) => child.color == Color::Red && tree::is_red(&child.left),
            None => false,
        }
    }

    /// Restores the left-leaning invariant at this node. The three rules are applied in order,
    /// each one seeing the shape left behind by the previous one.
    pub fn fix_up(&mut self) {
        if tree::is_red(&self.right) && !tree::is_red(&self.left) {
            self.rotate_left();
        }

        if self.is_left_left_red() {
            self.rotate_right();
        }

        if tree::is_red(&self.left) && tree::is_red(&self.right) {
            self.flip_colors();
        }
    }

    // Makes the left child or one of its children red before descending left.
    pub fn move_red_left(&mut self) {
        self.flip_colors();
        if let Some(mut child) = self.right.take() {
            if tree::is_red(&child.left) {
                child.rotate_right();
                self.right = Some(child);
                self.rotate_left();
                self.flip_colors();
            } else {
                self.right = Some(child);
            }
        }
    }

    // Makes the right child or one of its children red before descending right.
    pub fn move_red_right(&mut self) {
        self.flip_colors();
        if self.is_left_left_red() {
            self.rotate_right();
            self.flip_colors();
        }
    }
}
