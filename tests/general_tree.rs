mod common;

use common::{build, child_values, seed_tree, Lifecycle, Tracked};
use lcrs::{Error, GeneralTree, InvalidArgument, NodeHandle};
use test_case::test_case;

#[test]
fn two_children_then_delete_the_second() -> Result<(), Error> {
    let mut tree = GeneralTree::<_>::new();
    let root = tree.create_root(1)?;
    tree.insert_left_child(root, 2)?;
    let first = tree.root().child(0)?.handle();
    tree.insert_right_sibling(first, 3)?;

    assert_eq!(tree.root().children_count()?, 2);
    assert_eq!(tree.root().child(0)?.data()?, &2);
    assert_eq!(tree.root().child(1)?.data()?, &3);

    let first = tree.root().child(0)?.handle();
    tree.delete_right_sibling(first)?;
    assert_eq!(tree.root().children_count()?, 1);
    assert!(tree.root().child(0)?.right_sibling()?.is_null());
    Ok(())
}

#[test]
fn root_has_no_parent() -> Result<(), Error> {
    let tree = seed_tree();
    assert!(tree.root().is_root()?);
    assert!(tree.root().parent()?.is_null());
    Ok(())
}

#[test]
fn inserted_child_knows_its_parent() -> Result<(), Error> {
    let mut tree = seed_tree();
    let destiny = tree.root().child(1)?.handle();
    let child = tree.insert_left_child(destiny, 42)?;
    assert_eq!(tree.node(child).data()?, &42);
    assert_eq!(tree.node(child).parent()?, destiny);
    Ok(())
}

#[test_case(0, 3 ; "newest first")]
#[test_case(1, 2 ; "middle")]
#[test_case(2, 1 ; "oldest last")]
fn left_children_come_out_reversed(index: usize, expected: u32) {
    let mut tree = GeneralTree::<u32>::with_root(0);
    let root = tree.root().handle();
    for value in 1..=3 {
        tree.insert_left_child(root, value).expect("root is valid");
    }
    let child = tree.root().child(index).expect("root is valid");
    assert_eq!(child.data(), Ok(&expected));
}

#[test_case(0 ; "root")]
#[test_case(1 ; "inner node")]
#[test_case(2 ; "leaf")]
#[test_case(4 ; "last child of the root")]
fn right_sibling_fails_only_for_the_root(position: usize) {
    let (mut tree, handles) = build(&[0, 1, 1, 0], |i| i);
    let destiny = handles[position];
    let was_root = tree.node(destiny).is_root().expect("handle is valid");
    let parent = tree.node(destiny).parent().expect("handle is valid").handle();
    match tree.insert_right_sibling(destiny, 100) {
        Ok(new) => {
            assert!(!was_root);
            assert_eq!(tree.node(destiny).right_sibling(), Ok(tree.node(new)));
            assert_eq!(tree.node(new).parent().map(|p| p.handle()), Ok(parent));
        }
        Err(error) => {
            assert!(was_root);
            assert_eq!(error, InvalidArgument::RootSibling.into());
        }
    }
}

#[test_case(&[], 0 ; "leaf")]
#[test_case(&[0], 1 ; "single child")]
#[test_case(&[0, 0, 0], 3 ; "three leaves")]
#[test_case(&[0, 1, 2, 0, 4], 5 ; "two chains")]
#[test_case(&[0, 1, 1, 0, 4, 4, 0], 7 ; "bushy")]
fn delete_left_child_releases_the_whole_forest(shape: &[usize], expected: usize) {
    let lifecycle = Lifecycle::new();
    let (mut tree, handles) = build(shape, |i| Tracked::new(i, &lifecycle));
    let forest: usize = {
        let root = tree.root();
        let mut total = 0;
        let mut child = root.left_child().expect("root is valid");
        while !child.is_null() {
            total += 1 + child.descendants_count().expect("child is valid");
            child = child.right_sibling().expect("child is valid");
        }
        total
    };
    assert_eq!(forest, expected);
    assert_eq!(tree.delete_left_child(handles[0]), Ok(expected));
    assert_eq!(lifecycle.drops(), expected);
    assert_eq!(tree.root().has_left_child(), Ok(false));
    assert_eq!(tree.len(), 1);
    assert_eq!(lifecycle.clones(), 0);
}

#[test]
fn delete_right_sibling_keeps_later_siblings() -> Result<(), Error> {
    let (mut tree, handles) = build(&[0, 0, 2, 0], |i| i);
    assert_eq!(tree.delete_right_sibling(handles[1])?, 2);
    assert_eq!(child_values(tree.root()), vec![1, 4]);
    assert!(tree.root().has_left_child()?);
    Ok(())
}

#[test]
fn clear_is_idempotent() {
    let lifecycle = Lifecycle::new();
    let (mut tree, _) = build(&[0, 0, 1], |i| Tracked::new(i, &lifecycle));
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(lifecycle.drops(), 4);
    tree.clear();
    assert_eq!(lifecycle.drops(), 4);
    let root = tree.create_root(Tracked::new(9, &lifecycle)).expect("tree is empty");
    tree.insert_left_child(root, Tracked::new(10, &lifecycle)).expect("root is valid");
    assert_eq!(tree.len(), 2);
}

#[test]
fn dropping_the_tree_releases_every_node_once() {
    let lifecycle = Lifecycle::new();
    let (tree, _) = build(&[0, 1, 2, 3, 0, 5], |i| Tracked::new(i, &lifecycle));
    assert_eq!(lifecycle.drops(), 0);
    drop(tree);
    assert_eq!(lifecycle.drops(), 7);
}

#[test]
fn copy_clones_every_value_once() {
    let lifecycle = Lifecycle::new();
    let (source, handles) = build(&[0, 1, 1, 0, 4], |i| Tracked::new(i, &lifecycle));
    let mut copy = source.clone();
    assert_eq!(lifecycle.clones(), source.len());
    assert_eq!(copy, source);

    let root = copy.root().handle();
    copy.delete_left_child(root).expect("root is valid");
    assert_ne!(copy, source);
    assert_eq!(source.len(), 6);
    assert_eq!(source.node(handles[2]).data().map(|t| t.value), Ok(2));
}

#[test]
fn move_out_and_reuse() -> Result<(), Error> {
    let mut source = seed_tree();
    let snapshot = source.clone();
    let moved = std::mem::take(&mut source);
    assert!(source.is_empty());
    assert_eq!(moved, snapshot);
    source.create_root(5)?;
    assert_eq!(source.root().data()?, &5);
    Ok(())
}

#[test]
fn transplant_neither_clones_nor_drops() -> Result<(), Error> {
    let lifecycle = Lifecycle::new();
    let (mut tree, handles) = build(&[0, 0], |i| Tracked::new(i, &lifecycle));
    let (mut other, _) = build(&[0, 1, 1, 0], |i| Tracked::new(100 + i, &lifecycle));
    let clones_before = lifecycle.clones();

    let grafted = tree.insert_right_sibling_tree(handles[1], &mut other)?;
    assert!(other.is_empty());
    assert_eq!(lifecycle.clones(), clones_before);
    assert_eq!(lifecycle.drops(), 0);
    assert_eq!(tree.len(), 8);

    let values: Vec<u32> = child_values(tree.root()).iter().map(|t| t.value).collect();
    assert_eq!(values, vec![1, 100, 2]);
    assert_eq!(tree.node(grafted).parent()?, tree.root());
    assert_eq!(tree.node(grafted).descendants_count()?, 4);
    let values: Vec<u32> = child_values(tree.node(grafted)).iter().map(|t| t.value).collect();
    assert_eq!(values, vec![101, 104]);
    let first = tree.node(grafted).child(0)?;
    let values: Vec<u32> = child_values(first).iter().map(|t| t.value).collect();
    assert_eq!(values, vec![102, 103]);
    assert_eq!(first.depth()?, 2);
    Ok(())
}

#[test]
fn transplant_of_an_empty_tree_is_a_no_op() -> Result<(), Error> {
    let mut tree = seed_tree();
    let snapshot = tree.clone();
    let mut empty = GeneralTree::new();
    let root = tree.root().handle();
    assert!(tree.insert_left_child_tree(root, &mut empty)?.is_null());
    let first = tree.root().child(0)?.handle();
    assert!(tree.insert_right_sibling_tree(first, &mut empty)?.is_null());
    assert_eq!(tree, snapshot);
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum Destiny {
    Null,
    Deleted,
    Foreign,
}

#[test_case(Destiny::Null, InvalidArgument::NullNode ; "null destiny")]
#[test_case(Destiny::Deleted, InvalidArgument::DanglingNode ; "deleted destiny")]
#[test_case(Destiny::Foreign, InvalidArgument::ForeignNode ; "destiny from another tree")]
fn transplant_failure_leaves_the_argument_intact(kind: Destiny, reason: InvalidArgument) {
    let mut tree = seed_tree();
    let stranger = seed_tree();
    let destiny = match kind {
        Destiny::Null => NodeHandle::null(),
        Destiny::Deleted => {
            let first = tree.root().child(0).expect("root is valid").handle();
            let second = tree.root().child(1).expect("root is valid").handle();
            tree.delete_right_sibling(first).expect("first child is not the root");
            second
        }
        Destiny::Foreign => stranger.root().handle(),
    };
    let snapshot = tree.clone();
    let mut other = seed_tree();
    assert_eq!(
        tree.insert_left_child_tree(destiny, &mut other),
        Err(reason.into()),
    );
    assert_eq!(other, seed_tree());
    assert_eq!(tree, snapshot);
}

#[test]
fn equality() {
    let a = seed_tree();
    let b = seed_tree();
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);

    let (c, handles) = build(&[0, 1, 1, 0], |i| [1, 2, 4, 5, 3][i as usize]);
    assert_eq!(a, c);
    let mut d = c.clone();
    *d.data_mut(d.root().child(1).expect("root is valid").handle()).expect("valid") = 6;
    assert_ne!(a, d);

    let mut e = c;
    e.insert_left_child(handles[4], 0).expect("leaf is valid");
    assert_ne!(a, e);

    let empty = GeneralTree::<u32>::new();
    assert_eq!(empty, GeneralTree::new());
    assert_ne!(empty, a);
    assert_ne!(a, empty);
}

#[test]
fn navigation_reports_null_receivers() {
    let tree = seed_tree();
    let leaf = tree.root().child(1).expect("root is valid");
    let null = leaf.left_child().expect("leaf is valid");
    assert!(null.is_null());
    let reason = Error::from(InvalidArgument::NullNode);
    assert_eq!(null.left_child().map(|n| n.is_null()), Err(reason));
    assert_eq!(null.parent().map(|n| n.is_null()), Err(reason));
    assert_eq!(null.right_sibling().map(|n| n.is_null()), Err(reason));
    assert_eq!(null.data().copied(), Err(reason));
    assert_eq!(null.is_root(), Err(reason));
    assert_eq!(null.is_leaf(), Err(reason));
    assert_eq!(null.has_left_child(), Err(reason));
    assert_eq!(null.has_right_sibling(), Err(reason));
    assert_eq!(null.children_count(), Err(reason));
    assert_eq!(null.depth(), Err(reason));
    assert_eq!(null.descendants_count(), Err(reason));
    assert_eq!(null.child(0).map(|n| n.is_null()), Err(reason));
}

#[test]
fn handles_from_a_cleared_tree_dangle() {
    let mut tree = seed_tree();
    let old_root = tree.root().handle();
    tree.clear();
    let new_root = tree.create_root(1).expect("tree is empty");
    assert_ne!(old_root, new_root);
    assert_eq!(
        tree.insert_left_child(old_root, 2),
        Err(InvalidArgument::DanglingNode.into()),
    );
}
