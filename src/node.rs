//! The building block of an [`OrderedTree`][crate::OrderedTree]. A `Node` owns its value and
//! both of its children, so a `Box<Node<E>>` is a complete subtree that can be handed around,
//! rotated, and re-attached by whoever holds it.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Node;
//!
//! //   4              6
//! //    \            / \
//! //     8    ->    4   8
//! //    /
//! //   6
//! let subtree = Box::new(Node::new(4).with_right(Node::new(8).with_left(Node::new(6))));
//! let subtree = subtree.rotate_right_left();
//!
//! assert_eq!(subtree.value(), &6);
//! assert_eq!(subtree.left().map(Node::value), Some(&4));
//! assert_eq!(subtree.right().map(Node::value), Some(&8));
//! assert_eq!(subtree.iter().collect::<Vec<_>>(), [&4, &6, &8]);
//! ```

use std::fmt;

use crate::rotation::{Child, Rotation, RotationError};

/// An owned link to a child subtree.
pub(crate) type Link<E> = Option<Box<Node<E>>>;

/// A single value and the two subtrees hanging off of it. Nodes have no parent pointers;
/// each one is owned by exactly one parent (or by the tree, for the root).
pub struct Node<E> {
    pub(crate) value: E,
    pub(crate) left: Link<E>,
    pub(crate) right: Link<E>,
}

impl<E> Drop for Node<E> {
    // Dropping the children recursively would use one stack frame per level, and inserting
    // sorted input builds chains as deep as the tree is large.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<E>>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

// `Clone`, `PartialEq` and `Debug` are written by hand so none of them recurse per level.
impl<E> Clone for Node<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        let mut root = Node::new(self.value.clone());
        let mut stack: Vec<(&Node<E>, &mut Node<E>)> = vec![(self, &mut root)];
        while let Some((src, dst)) = stack.pop() {
            let Node { left, right, .. } = dst;
            if let Some(src_left) = src.left() {
                let copy = left.insert(Box::new(Node::new(src_left.value.clone())));
                stack.push((src_left, &mut **copy));
            }
            if let Some(src_right) = src.right() {
                let copy = right.insert(Box::new(Node::new(src_right.value.clone())));
                stack.push((src_right, &mut **copy));
            }
        }
        root
    }
}

impl<E> PartialEq for Node<E>
where
    E: PartialEq,
{
    /// Two subtrees are equal when they have the same shape and equal values in the same
    /// places.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<E> Eq for Node<E> where E: Eq {}

impl<E> fmt::Debug for Node<E>
where
    E: fmt::Debug,
{
    // Only the immediate children are shown; walk `left()`/`right()` to see deeper levels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<E> Node<E> {
    /// Creates a leaf holding `value`.
    pub fn new(value: E) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Sets the left subtree, replacing (and dropping) any existing one.
    ///
    /// Nothing checks that the resulting subtree is ordered. That is up to the caller when
    /// assembling detached subtrees.
    pub fn with_left(mut self, left: Node<E>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Sets the right subtree, replacing (and dropping) any existing one.
    pub fn with_right(mut self, right: Node<E>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// The value stored in this node.
    pub fn value(&self) -> &E {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<E>> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<E>> {
        self.right.as_deref()
    }

    /// Visits the values of this subtree in order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(Some(self))
    }

    /// How many nodes are in the subtree rooted at this node, including itself.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// How many levels are in the subtree rooted at this node. A node with no children has a
    /// height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Whether an in-order walk of this subtree yields non-decreasing values. This holds for
    /// any subtree built by inserting and is kept by every rotation.
    pub fn is_sorted(&self) -> bool
    where
        E: Ord,
    {
        self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b)
    }

    /// Checks that this subtree has the children `rotation` pivots around, without changing
    /// anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Child, Node, Rotation};
    ///
    /// let node = Node::new(1).with_right(Node::new(2));
    /// assert!(node.check_rotation(Rotation::Left).is_ok());
    ///
    /// let err = node.check_rotation(Rotation::RightLeft).unwrap_err();
    /// assert_eq!(err.missing, Child::RightLeft);
    /// ```
    pub fn check_rotation(&self, rotation: Rotation) -> Result<(), RotationError> {
        let pivot = match rotation.pivot() {
            Child::Right => self.right(),
            _ => self.left(),
        };
        let missing = match (pivot, rotation) {
            (None, _) => Some(rotation.pivot()),
            (Some(right), Rotation::RightLeft) if right.left.is_none() => Some(Child::RightLeft),
            (Some(left), Rotation::LeftRight) if left.right.is_none() => Some(Child::LeftRight),
            _ => None,
        };

        match missing {
            Some(missing) => Err(RotationError::new(rotation, missing)),
            None => Ok(()),
        }
    }

    /// Performs `rotation` on this subtree and returns the new subtree root.
    ///
    /// ## Panics
    ///
    /// When the subtree lacks a child the rotation needs. See [`Node::check_rotation`].
    pub fn rotate(self: Box<Self>, rotation: Rotation) -> Box<Self> {
        match rotation {
            Rotation::Left => self.rotate_left(),
            Rotation::Right => self.rotate_right(),
            Rotation::RightLeft => self.rotate_right_left(),
            Rotation::LeftRight => self.rotate_left_right(),
        }
    }

    /// Rotate this subtree to the left. This moves the right child up vertically and this node
    /// down vertically, returning the right child as the new subtree root. Whoever owned this
    /// node must store the returned node in its place.
    ///
    /// ## Panics
    ///
    /// When called on a node without a right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   old_root (i.e. "self")          new_root
    ///    /     \                        /     \
    ///   x    new_root    rotate ->  old_root   z
    ///         /  \                    /  \
    ///        y    z                  x    y
    /// ```
    pub fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        self.assert_rotation(Rotation::Left);
        let mut new_root = self.right.take().expect("Rotate left => right child");

        self.right = new_root.left.take();
        new_root.left = Some(self);
        new_root
    }

    /// Rotate this subtree to the right. This moves the left child up vertically and this node
    /// down vertically, returning the left child as the new subtree root.
    ///
    /// ## Panics
    ///
    /// When called on a node without a left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///      old_root (i.e. "self")     new_root
    ///       /     \                   /     \
    ///   new_root   z     rotate ->   x    old_root
    ///    /  \                               /  \
    ///   x    y                             y    z
    /// ```
    pub fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        self.assert_rotation(Rotation::Right);
        let mut new_root = self.left.take().expect("Rotate right => left child");

        self.left = new_root.right.take();
        new_root.right = Some(self);
        new_root
    }

    /// Rotates the right child to the right, then this node to the left. The right child's left
    /// child ends up as the subtree root with this node and the old right child beneath it.
    ///
    /// ## Panics
    ///
    /// When this node has no right child or that child has no left child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///   a            a               b
    ///    \            \             / \
    ///     c    ->      b     ->    a   c
    ///    /              \
    ///   b                c
    /// ```
    pub fn rotate_right_left(mut self: Box<Self>) -> Box<Self> {
        self.assert_rotation(Rotation::RightLeft);
        let right = self.right.take().expect("Rotate right-left => right child");

        self.right = Some(right.rotate_right());
        self.rotate_left()
    }

    /// Rotates the left child to the left, then this node to the right. Mirror image of
    /// [`Node::rotate_right_left`].
    ///
    /// ## Panics
    ///
    /// When this node has no left child or that child has no right child.
    ///
    /// # Diagram
    ///
    /// ```text
    ///     c          c             b
    ///    /          /             / \
    ///   a    ->    b     ->      a   c
    ///    \        /
    ///     b      a
    /// ```
    pub fn rotate_left_right(mut self: Box<Self>) -> Box<Self> {
        self.assert_rotation(Rotation::LeftRight);
        let left = self.left.take().expect("Rotate left-right => left child");

        self.left = Some(left.rotate_left());
        self.rotate_right()
    }

    fn assert_rotation(&self, rotation: Rotation) {
        if let Err(err) = self.check_rotation(rotation) {
            panic!("{}", err);
        }
    }
}

impl<'a, E> IntoIterator for &'a Node<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order iterator over the values of a subtree. It keeps its own stack of pending
/// ancestors instead of recursing.
#[derive(Clone, Debug)]
pub struct Iter<'a, E> {
    stack: Vec<&'a Node<E>>,
}

impl<'a, E> Iter<'a, E> {
    pub(crate) fn new(root: Option<&'a Node<E>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<E>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}
