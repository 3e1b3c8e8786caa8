//! Whole-subtree algorithms.
//!
//! All of them follow the left-child/right-sibling/parent links directly instead of keeping a stack of pending nodes, so none of them recurses, no matter how deep the tree is. Only relocation between arenas allocates, for its table of relocated keys.

use core::{fmt::Debug, iter::FusedIterator};
use alloc::vec::Vec;
use crate::storage::Storage;
use super::{GeneralTree, Node, DANGLING_LINK_MSG};

/// An iterator over the keys of a node and the siblings which come after it.
pub(crate) struct SiblingKeys<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a GeneralTree<T, K, S>,
    key: Option<K>,
}
impl<T, K, S> Iterator for SiblingKeys<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = K;
    fn next(&mut self) -> Option<Self::Item> {
        let current_key = self.key.take()?;
        self.key = self.tree.get(&current_key).right_sibling.clone();
        Some(current_key)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.key.is_some() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}
impl<T, K, S> FusedIterator for SiblingKeys<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}

impl<T, K, S> GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Iterates over `first` and every sibling after it.
    pub(crate) fn sibling_keys(&self, first: Option<K>) -> SiblingKeys<'_, T, K, S> {
        SiblingKeys { tree: self, key: first }
    }

    /// Returns the node which comes after `current` in pre-order, without leaving the subtree under `top`.
    pub(super) fn next_preorder(&self, current: &K, top: &K) -> Option<K> {
        if let Some(child) = &self.get(current).left_child {
            return Some(child.clone());
        }
        let mut cursor = current.clone();
        loop {
            if cursor == *top {
                return None;
            }
            let node = self.get(&cursor);
            if let Some(sibling) = &node.right_sibling {
                return Some(sibling.clone());
            }
            cursor = node.parent.clone().expect(DANGLING_LINK_MSG);
        }
    }

    pub(super) fn count_descendants(&self, top: &K) -> usize {
        let mut count = 0;
        let mut cursor = self.next_preorder(top, top);
        while let Some(key) = cursor {
            count += 1;
            cursor = self.next_preorder(&key, top);
        }
        count
    }

    /// Releases `top` and everything under it, returning the number of nodes released.
    ///
    /// `top` must already be unlinked from its parent and siblings; its own `right_sibling` link is ignored.
    pub(super) fn remove_subtree(&mut self, top: K) -> usize {
        let mut removed = 0;
        let mut cursor = top.clone();
        loop {
            // Leaves are released leftmost first, so the released node is always the first child of its parent
            while let Some(child) = self.get(&cursor).left_child.clone() {
                cursor = child;
            }
            let node = self.storage.remove(&cursor).expect(DANGLING_LINK_MSG);
            removed += 1;
            if cursor == top {
                break;
            }
            let parent = node.parent.expect(DANGLING_LINK_MSG);
            self.get_mut(&parent).left_child = node.right_sibling.clone();
            cursor = node.right_sibling.unwrap_or(parent);
        }
        removed
    }

    /// Moves every node of `other` into this tree's storage, leaving `other` empty. The old root becomes a child of `parent` and is returned, but is not linked into the children list of `parent` yet.
    ///
    /// No value is cloned. Returns `None` if `other` was empty.
    pub(super) fn adopt(&mut self, other: &mut Self, parent: Option<K>) -> Option<K> {
        let top = other.root.take()?;
        // Pre-order, so that every parent is relocated before its children and children come in order.
        // Each entry holds the old key and the position of the parent entry.
        let mut order: Vec<(K, Option<usize>)> = Vec::with_capacity(other.storage.len());
        // Positions of the ancestors of the node being visited, root first
        let mut path: Vec<usize> = Vec::new();
        let mut cursor = Some(top.clone());
        while let Some(key) = cursor {
            let old_parent = other.get(&key).parent.clone();
            while let Some(&position) = path.last() {
                if Some(&order[position].0) == old_parent.as_ref() {
                    break;
                }
                path.pop();
            }
            let parent_position = path.last().copied();
            cursor = other.next_preorder(&key, &top);
            path.push(order.len());
            order.push((key, parent_position));
        }
        // For every relocated node: its new key and the position of its most recently relocated child
        let mut relocated: Vec<(K, Option<usize>)> = Vec::with_capacity(order.len());
        for (old_key, parent_position) in order {
            let node = other.storage.remove(&old_key).expect(DANGLING_LINK_MSG);
            let new_parent = match parent_position {
                Some(p) => Some(relocated[p].0.clone()),
                None => parent.clone(),
            };
            let new_key = self.storage.add(Node::new(node.value, new_parent));
            if let Some(p) = parent_position {
                let position = relocated.len();
                match relocated[p].1.replace(position) {
                    Some(previous) => {
                        let previous_key = relocated[previous].0.clone();
                        self.get_mut(&previous_key).right_sibling = Some(new_key.clone());
                    }
                    None => {
                        let parent_key = relocated[p].0.clone();
                        self.get_mut(&parent_key).left_child = Some(new_key.clone());
                    }
                }
            }
            relocated.push((new_key, None));
        }
        relocated.into_iter().next().map(|(key, _)| key)
    }
}

impl<T, K, S> Clone for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Clone,
{
    /// Creates a deep copy of the tree, cloning every value exactly once, in pre-order.
    ///
    /// The copy is a different tree: handles issued by the original are rejected by it as foreign.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        let source_root = match &self.root {
            Some(root) => root.clone(),
            None => return copy,
        };
        let mut source = source_root.clone();
        let mut target = copy.storage.add(Node::new(self.get(&source).value.clone(), None));
        copy.root = Some(target.clone());
        loop {
            if let Some(child) = self.get(&source).left_child.clone() {
                let node = Node::new(self.get(&child).value.clone(), Some(target.clone()));
                let new_child = copy.storage.add(node);
                copy.get_mut(&target).left_child = Some(new_child.clone());
                source = child;
                target = new_child;
                continue;
            }
            // Climb until there is a sibling to continue with
            loop {
                if source == source_root {
                    return copy;
                }
                let node = self.get(&source);
                if let Some(sibling) = node.right_sibling.clone() {
                    let parent = copy.get(&target).parent.clone();
                    let new_sibling = copy
                        .storage
                        .add(Node::new(self.get(&sibling).value.clone(), parent));
                    copy.get_mut(&target).right_sibling = Some(new_sibling.clone());
                    source = sibling;
                    target = new_sibling;
                    break;
                }
                source = node.parent.clone().expect(DANGLING_LINK_MSG);
                target = copy.get(&target).parent.clone().expect(DANGLING_LINK_MSG);
            }
        }
    }
}

impl<T, K, S> PartialEq for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: PartialEq,
{
    /// Compares the shape of the trees and the values at every position. Two empty trees are equal.
    fn eq(&self, other: &Self) -> bool {
        let (mut a, mut b) = match (&self.root, &other.root) {
            (None, None) => return true,
            (Some(a), Some(b)) => (a.clone(), b.clone()),
            _ => return false,
        };
        loop {
            let (node_a, node_b) = (self.get(&a), other.get(&b));
            if node_a.value != node_b.value {
                return false;
            }
            match (&node_a.left_child, &node_b.left_child) {
                (Some(child_a), Some(child_b)) => {
                    a = child_a.clone();
                    b = child_b.clone();
                    continue;
                }
                (None, None) => {}
                _ => return false,
            }
            // Climb both trees in lockstep until there is a sibling to continue with
            loop {
                let (node_a, node_b) = (self.get(&a), other.get(&b));
                match (&node_a.right_sibling, &node_b.right_sibling) {
                    (Some(sibling_a), Some(sibling_b)) => {
                        a = sibling_a.clone();
                        b = sibling_b.clone();
                        break;
                    }
                    (None, None) => {}
                    _ => return false,
                }
                match (&node_a.parent, &node_b.parent) {
                    (Some(parent_a), Some(parent_b)) => {
                        a = parent_a.clone();
                        b = parent_b.clone();
                    }
                    (None, None) => return true,
                    _ => return false,
                }
            }
        }
    }
}
impl<T, K, S> Eq for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Eq,
{
}
