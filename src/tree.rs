//! A mutable, unbalanced BST. Values are inserted by walking down from the root and hanging a
//! new leaf off of the first empty link; nothing is ever rebalanced automatically. Instead,
//! the tree hands out [`NodeMut`] handles so a caller can walk to any subtree and apply one of
//! the [`Rotation`]s to it.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, Rotation};
//!
//! let mut tree = OrderedTree::new();
//! for value in [1, 2, 3] {
//!     tree.insert(value);
//! }
//!
//! // Sorted input builds a chain leaning to the right.
//! assert_eq!(tree.height(), 3);
//!
//! // Rotating the root left promotes 2.
//! tree.rotate_root(Rotation::Left).unwrap();
//! assert_eq!(tree.root().map(|n| *n.value()), Some(2));
//! assert_eq!(tree.height(), 2);
//!
//! assert!(tree.contains(&3));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &2, &3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::{Iter, Link, Node};
use crate::rotation::{Rotation, RotationError};

/// A Binary Search Tree supporting insertion, lookup, and caller-driven rotations.
///
/// Values that compare greater than a node go to its right; everything else, including
/// values equal to it, goes to its left.
pub struct OrderedTree<E> {
    root: Link<E>,
    len: usize,
}

impl<E> Default for OrderedTree<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for OrderedTree<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<E> fmt::Debug for OrderedTree<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("values", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<E> OrderedTree<E> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// How many values are stored in the tree. Duplicates are counted each time they were
    /// inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// How many levels the tree has. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// Inserts the given value into the tree. This always adds a new leaf, even when an equal
    /// value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn insert(&mut self, value: E)
    where
        E: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value > node.value {
                &mut node.right
            } else {
                &mut node.left
            };
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Whether a value comparing equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains(&self, value: &E) -> bool
    where
        E: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return true,
                Ordering::Greater => node.right(),
                Ordering::Less => node.left(),
            };
        }
        false
    }

    /// Visits every value in the tree in order.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter::new(self.root())
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<E>> {
        self.root.as_deref()
    }

    /// A handle to the root node that can walk down the tree and rotate subtrees in place.
    pub fn root_mut(&mut self) -> Option<NodeMut<'_, E>> {
        NodeMut::new(&mut self.root)
    }

    /// Performs `rotation` on the whole tree, replacing the root with the promoted node.
    ///
    /// # Errors
    ///
    /// When the tree is empty or the root lacks a child the rotation needs. The tree is left
    /// unchanged.
    pub fn rotate_root(&mut self, rotation: Rotation) -> Result<(), RotationError> {
        match self.root_mut() {
            Some(mut root) => root.rotate(rotation),
            None => Err(RotationError::new(rotation, rotation.pivot())),
        }
    }

    /// Gives up the tree's nodes, returning its root. This lets the caller apply the
    /// [`Node`] rotation primitives to the whole structure directly.
    pub fn into_root(self) -> Option<Box<Node<E>>> {
        self.root
    }
}

impl<E> FromIterator<E> for OrderedTree<E>
where
    E: Ord,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<E> Extend<E> for OrderedTree<E>
where
    E: Ord,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, E> IntoIterator for &'a OrderedTree<E> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A mutable handle to a non-empty subtree of an [`OrderedTree`].
///
/// The handle holds the link that owns the subtree, so rotating through it re-attaches the
/// new subtree root to the same parent (or to the tree, for the root). It never exposes values
/// mutably or lets subtrees be swapped, which keeps the tree's ordering and length intact.
pub struct NodeMut<'a, E> {
    // Always `Some`: handles are only built over occupied links.
    link: &'a mut Link<E>,
}

impl<'a, E> fmt::Debug for NodeMut<'a, E>
where
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeMut").field(self.node()).finish()
    }
}

impl<'a, E> NodeMut<'a, E> {
    fn new(link: &'a mut Link<E>) -> Option<Self> {
        if link.is_some() {
            Some(Self { link })
        } else {
            None
        }
    }

    /// The subtree root this handle points at.
    pub fn node(&self) -> &Node<E> {
        self.link.as_deref().expect("NodeMut => occupied link")
    }

    /// The value stored in the subtree root.
    pub fn value(&self) -> &E {
        self.node().value()
    }

    /// A handle to the left child, borrowing this one.
    pub fn left(&mut self) -> Option<NodeMut<'_, E>> {
        NodeMut::new(&mut self.node_mut().left)
    }

    /// A handle to the right child, borrowing this one.
    pub fn right(&mut self) -> Option<NodeMut<'_, E>> {
        NodeMut::new(&mut self.node_mut().right)
    }

    /// Turns this handle into one for the left child.
    pub fn into_left(self) -> Option<NodeMut<'a, E>> {
        NodeMut::new(&mut self.into_node_mut().left)
    }

    /// Turns this handle into one for the right child.
    pub fn into_right(self) -> Option<NodeMut<'a, E>> {
        NodeMut::new(&mut self.into_node_mut().right)
    }

    /// Performs `rotation` on this subtree. Afterwards the handle points at the promoted node,
    /// which now occupies the link the old subtree root was in.
    ///
    /// # Errors
    ///
    /// When the subtree lacks a child the rotation needs. Nothing is changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Rotation};
    ///
    /// let mut tree: OrderedTree<_> = [5, 3, 1].into_iter().collect();
    ///
    /// let mut root = tree.root_mut().unwrap();
    /// let mut three = root.left().unwrap();
    /// three.rotate(Rotation::Right).unwrap();
    /// assert_eq!(three.value(), &1);
    ///
    /// // The promoted node was re-attached to the root.
    /// assert_eq!(tree.root().unwrap().left().map(|n| *n.value()), Some(1));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn rotate(&mut self, rotation: Rotation) -> Result<(), RotationError> {
        if let Err(err) = self.node().check_rotation(rotation) {
            tracing::debug!(%err, "refusing rotation");
            return Err(err);
        }

        let node = self.link.take().expect("NodeMut => occupied link");
        let node = node.rotate(rotation);
        tracing::trace!(%rotation, "rotated subtree");

        *self.link = Some(node);
        Ok(())
    }

    fn node_mut(&mut self) -> &mut Node<E> {
        self.link.as_deref_mut().expect("NodeMut => occupied link")
    }

    fn into_node_mut(self) -> &'a mut Node<E> {
        let link = self.link;
        link.as_deref_mut().expect("NodeMut => occupied link")
    }
}
