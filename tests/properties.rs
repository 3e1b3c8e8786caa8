mod common;

use common::{build, child_values, Lifecycle, Shape, Tracked};
use lcrs::NodeRef;
use proptest::prelude::*;

/// Random tree shapes of up to `max` nodes besides the root.
fn shapes(max: usize) -> impl Strategy<Value = Shape> {
    proptest::collection::vec(any::<prop::sample::Index>(), 0..max)
        .prop_map(|picks| {
            picks
                .iter()
                .enumerate()
                .map(|(i, pick)| pick.index(i + 1))
                .collect()
        })
}

/// Number of nodes in the subtree of every node, computed from the shape alone.
fn subtree_sizes(shape: &[usize]) -> Vec<usize> {
    let mut sizes = vec![1; shape.len() + 1];
    for (i, &parent) in shape.iter().enumerate().rev() {
        sizes[parent] += sizes[i + 1];
    }
    sizes
}

fn child_numbers(node: NodeRef<'_, Tracked>) -> Vec<u32> {
    child_values(node).iter().map(|t| t.value).collect()
}

proptest! {
    #[test]
    fn copy_equals_source(shape in shapes(48)) {
        let lifecycle = Lifecycle::new();
        let (source, _) = build(&shape, |i| Tracked::new(i, &lifecycle));
        let copy = source.clone();
        prop_assert_eq!(lifecycle.clones(), shape.len() + 1, "one clone per node");
        prop_assert_eq!(&copy, &source);
        prop_assert_eq!(copy.len(), source.len());
    }

    #[test]
    fn equality_is_reflexive_and_symmetric(a in shapes(24), b in shapes(24)) {
        let (left, _) = build(&a, |i| i % 3);
        let (right, _) = build(&b, |i| i % 3);
        prop_assert_eq!(&left, &left);
        prop_assert_eq!(left == right, right == left);
        if a == b {
            prop_assert_eq!(&left, &right);
        }
    }

    #[test]
    fn changing_one_value_breaks_equality(shape in shapes(32), pick in any::<prop::sample::Index>()) {
        let (source, _) = build(&shape, |i| i);
        let (mut copy, handles) = build(&shape, |i| i);
        prop_assert_eq!(&copy, &source);
        let target = handles[pick.index(handles.len())];
        *copy.data_mut(target).expect("handles from the builder are valid") += 1000;
        prop_assert_ne!(&copy, &source);
    }

    #[test]
    fn deletion_counts_match_the_shape(shape in shapes(48), pick in any::<prop::sample::Index>()) {
        let lifecycle = Lifecycle::new();
        let (mut tree, handles) = build(&shape, |i| Tracked::new(i, &lifecycle));
        let sizes = subtree_sizes(&shape);
        let position = pick.index(handles.len());
        let destiny = handles[position];

        prop_assert_eq!(tree.node(destiny).descendants_count(), Ok(sizes[position] - 1));
        let removed = tree.delete_left_child(destiny).expect("handles from the builder are valid");
        prop_assert_eq!(removed, sizes[position] - 1);
        prop_assert_eq!(lifecycle.drops(), removed);
        prop_assert_eq!(tree.len(), shape.len() + 1 - removed);
        prop_assert_eq!(tree.node(destiny).is_leaf(), Ok(true));

        tree.clear();
        prop_assert_eq!(lifecycle.drops(), shape.len() + 1);
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn transplant_preserves_shape(host in shapes(16), guest in shapes(16), pick in any::<prop::sample::Index>()) {
        let lifecycle = Lifecycle::new();
        let (mut tree, handles) = build(&host, |i| Tracked::new(i, &lifecycle));
        let (mut other, _) = build(&guest, |i| Tracked::new(i, &lifecycle));
        let expected = other.clone();
        let clones = lifecycle.clones();

        let destiny = handles[pick.index(handles.len())];
        let grafted = tree.insert_left_child_tree(destiny, &mut other).expect("handles from the builder are valid");
        prop_assert!(other.is_empty());
        prop_assert_eq!(lifecycle.clones(), clones);
        prop_assert_eq!(lifecycle.drops(), 0);
        prop_assert_eq!(tree.len(), host.len() + guest.len() + 2);
        prop_assert_eq!(tree.node(grafted).descendants_count(), Ok(guest.len()));
        prop_assert_eq!(tree.node(destiny).child(0), Ok(tree.node(grafted)));

        prop_assert_eq!(child_numbers(tree.node(grafted)), child_numbers(expected.root()));
    }
}
