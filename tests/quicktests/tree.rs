use ordered_tree::{Node, OrderedTree, Rotation};

use std::collections::HashSet;

/// Checks that every value left of a node is `<=` it and every value right of it is `>`, which
/// is how inserting arranges values.
fn ties_go_left(node: Option<&Node<i8>>) -> bool {
    let Some(node) = node else {
        return true;
    };
    node.left()
        .map_or(true, |left| left.iter().all(|v| v <= node.value()))
        && node
            .right()
            .map_or(true, |right| right.iter().all(|v| v > node.value()))
        && ties_go_left(node.left())
        && ties_go_left(node.right())
}

fn in_order(node: Option<&Node<i8>>) -> Vec<i8> {
    node.map_or_else(Vec::new, |n| n.iter().copied().collect())
}

#[quickcheck]
fn inserting_keeps_search_order(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();

    ties_go_left(tree.root())
}

#[quickcheck]
fn len_counts_every_insert(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    tree.len() == xs.len()
        && tree.iter().count() == xs.len()
        && tree.root().map_or(0, Node::count) == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn rotating_root_keeps_in_order_values(xs: Vec<i8>, rotation: u8) -> bool {
    let rotation = Rotation::ALL[rotation as usize % Rotation::ALL.len()];
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let before = in_order(tree.root());
    let allowed = tree
        .root()
        .map_or(false, |root| root.check_rotation(rotation).is_ok());

    tree.rotate_root(rotation).is_ok() == allowed
        && in_order(tree.root()) == before
        && xs.iter().all(|x| tree.contains(x))
        && tree.len() == xs.len()
}

#[quickcheck]
fn rotating_left_then_right_restores_shape(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let Some(root) = tree.into_root() else {
        return true;
    };
    if root.right().is_none() {
        return true;
    }

    let restored = root.clone().rotate_left().rotate_right();
    restored == root
}

#[quickcheck]
fn rotating_right_then_left_restores_shape(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let Some(root) = tree.into_root() else {
        return true;
    };
    if root.left().is_none() {
        return true;
    }

    let restored = root.clone().rotate_right().rotate_left();
    restored == root
}

#[test]
fn example_tree() {
    let tree: OrderedTree<_> = [5, 3, 8, 1, 4].into_iter().collect();

    let root = tree.root().unwrap();
    assert_eq!(root.value(), &5);
    assert_eq!(root.right().map(Node::value), Some(&8));
    let three = root.left().unwrap();
    assert_eq!(three.value(), &3);
    assert_eq!(three.left().map(Node::value), Some(&1));
    assert_eq!(three.right().map(Node::value), Some(&4));

    assert!(tree.contains(&4));
    assert!(!tree.contains(&9));
    assert_eq!(tree.len(), 5);
}

#[test]
fn example_right_left_rotation() {
    let a = Box::new(Node::new(4).with_right(Node::new(8).with_left(Node::new(6))));
    let before: Vec<_> = a.iter().copied().collect();

    let b = a.rotate_right_left();

    assert_eq!(b.value(), &6);
    assert_eq!(b.left().map(Node::value), Some(&4));
    assert_eq!(b.right().map(Node::value), Some(&8));
    assert_eq!(before, [4, 6, 8]);
    assert_eq!(b.iter().copied().collect::<Vec<_>>(), before);
}

#[test]
fn rebalancing_a_chain_by_hand() {
    // Sorted input leaves every node on the right spine. Rotating each node on the way down
    // left once halves the height.
    let mut tree: OrderedTree<_> = (1..=7).collect();
    assert_eq!(tree.height(), 7);

    let mut handle = tree.root_mut();
    while let Some(mut node) = handle {
        if node.rotate(Rotation::Left).is_err() {
            break;
        }
        handle = node.into_right();
    }

    assert_eq!(tree.height(), 4);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), (1..=7).collect::<Vec<_>>());
    assert!(tree.root().unwrap().is_sorted());
}
