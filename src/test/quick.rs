use quickcheck::{Arbitrary, Gen};

use crate::Rotation;

/// An enum for the various kinds of "things" to do to
/// an ordered tree in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op<E> {
    /// Insert the value into the data structure
    Insert(E),
    /// Check the value is found exactly when it was inserted
    Contains(E),
    /// Walk from the root (`true` is left) and rotate whatever subtree we end up at
    Rotate(Vec<bool>, Rotation),
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(E::arbitrary(g)),
            1 => Op::Contains(E::arbitrary(g)),
            2 => Op::Rotate(Vec::arbitrary(g), Rotation::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

impl Arbitrary for Rotation {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Rotation::ALL).unwrap()
    }
}
