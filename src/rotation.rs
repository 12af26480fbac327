//! The kinds of rotation a [`Node`][crate::Node] supports and the error reported when a
//! subtree doesn't have the shape a rotation needs.

use std::fmt;

use thiserror::Error;

/// One of the four structural rotations. Each one changes which node roots a subtree without
/// changing the in-order sequence of values in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// The right child becomes the subtree root.
    Left,
    /// The left child becomes the subtree root.
    Right,
    /// Rotate the right child right, then rotate the root left. Promotes the right child's
    /// left child.
    RightLeft,
    /// Rotate the left child left, then rotate the root right. Promotes the left child's
    /// right child.
    LeftRight,
}

impl Rotation {
    /// All rotations, in declaration order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Left,
        Rotation::Right,
        Rotation::RightLeft,
        Rotation::LeftRight,
    ];

    /// The child of the subtree root that moves up (or whose child moves up) in this rotation.
    pub(crate) fn pivot(self) -> Child {
        match self {
            Self::Left | Self::RightLeft => Child::Right,
            Self::Right | Self::LeftRight => Child::Left,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::RightLeft => "right-left",
            Self::LeftRight => "left-right",
        })
    }
}

/// A link, relative to the subtree root, that a rotation requires to be present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Child {
    /// The root's left child.
    Left,
    /// The root's right child.
    Right,
    /// The right child of the root's left child.
    LeftRight,
    /// The left child of the root's right child.
    RightLeft,
}

impl fmt::Display for Child {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left child",
            Self::Right => "right child",
            Self::LeftRight => "left child with a right child",
            Self::RightLeft => "right child with a left child",
        })
    }
}

/// A rotation was requested on a subtree lacking the child it pivots around.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("cannot rotate {rotation}: node has no {missing}")]
pub struct RotationError {
    /// The rotation that was refused.
    pub rotation: Rotation,
    /// The link the rotation needed.
    pub missing: Child,
}

impl RotationError {
    pub(crate) fn new(rotation: Rotation, missing: Child) -> Self {
        Self { rotation, missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let names: Vec<_> = Rotation::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(names, ["left", "right", "right-left", "left-right"]);
    }

    #[test]
    fn error_names_the_missing_child() {
        let err = RotationError::new(Rotation::Left, Child::Right);
        assert_eq!(
            err.to_string(),
            "cannot rotate left: node has no right child"
        );

        let err = RotationError::new(Rotation::LeftRight, Child::LeftRight);
        assert_eq!(
            err.to_string(),
            "cannot rotate left-right: node has no left child with a right child"
        );
    }
}
