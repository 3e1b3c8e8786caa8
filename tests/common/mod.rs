#![allow(dead_code)]

use std::{cell::Cell, rc::Rc};
use lcrs::{GeneralTree, NodeHandle, NodeRef};

/// Counts how many times the values sharing it were cloned and dropped.
#[derive(Debug, Default)]
pub struct Lifecycle {
    clones: Cell<usize>,
    drops: Cell<usize>,
}
impl Lifecycle {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
    pub fn clones(&self) -> usize {
        self.clones.get()
    }
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// An element which reports its clones and drops to a shared [`Lifecycle`]. Equality only looks at the value.
#[derive(Debug)]
pub struct Tracked {
    pub value: u32,
    lifecycle: Rc<Lifecycle>,
}
impl Tracked {
    pub fn new(value: u32, lifecycle: &Rc<Lifecycle>) -> Self {
        Self {
            value,
            lifecycle: Rc::clone(lifecycle),
        }
    }
}
impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.lifecycle.clones.set(self.lifecycle.clones() + 1);
        Self::new(self.value, &self.lifecycle)
    }
}
impl Drop for Tracked {
    fn drop(&mut self) {
        self.lifecycle.drops.set(self.lifecycle.drops() + 1);
    }
}
impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A tree shape, described as a list of parent positions: node `i + 1` is attached as the last child of node `shape[i]`, which must be at most `i`. Node 0 is the root.
pub type Shape = Vec<usize>;

/// Builds a tree of the given shape, storing `make(i)` in node `i`. Returns the handles of the nodes in the same order.
pub fn build<T>(shape: &[usize], mut make: impl FnMut(u32) -> T) -> (GeneralTree<T>, Vec<NodeHandle>) {
    let mut tree = GeneralTree::with_root(make(0));
    let mut handles = vec![tree.root().handle()];
    // Most recently added child of every node, for appending after it
    let mut last_child: Vec<Option<NodeHandle>> = vec![None];
    for (i, &parent) in shape.iter().enumerate() {
        let value = make(u32::try_from(i + 1).expect("shape too large"));
        let handle = match last_child[parent] {
            Some(previous) => tree.insert_right_sibling(previous, value),
            None => tree.insert_left_child(handles[parent], value),
        }
        .expect("builder handles are valid");
        last_child[parent] = Some(handle);
        last_child.push(None);
        handles.push(handle);
    }
    (tree, handles)
}

/// `1 -> [2 -> [4, 5], 3]`
pub fn seed_tree() -> GeneralTree<u32> {
    build(&[0, 1, 1, 0], |i| [1, 2, 4, 5, 3][i as usize]).0
}

/// Collects the values of the children of a node, walking the sibling links.
pub fn child_values<T: Clone>(node: NodeRef<'_, T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut child = node.left_child().expect("node is valid");
    while !child.is_null() {
        values.push(child.data().expect("child is valid").clone());
        child = child.right_sibling().expect("child is valid");
    }
    values
}
