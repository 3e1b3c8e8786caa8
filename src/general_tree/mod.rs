//! General trees, ones which don't impose any restrictions on the number of child nodes that a node can have, stored in left-child/right-sibling form.
//!
//! Every node stores a link to its parent, to its first ("left") child and to the next ("right") sibling. Together, those links encode an ordered list of children of any length, with no per-node variable-length storage.
//!
//! # Example
//! ```rust
//! use lcrs::GeneralTree;
//!
//! # fn main() -> Result<(), lcrs::Error> {
//! // Trees start out empty. The turbofish there is needed to state that we are using the default
//! // storage method instead of asking the compiler to infer it, which would be impossible.
//! let mut tree = GeneralTree::<_>::new();
//! let root = tree.create_root(1)?;
//!
//! // Mutating methods accept and return handles, which don't borrow the tree:
//! let two = tree.insert_left_child(root, 2)?;
//! tree.insert_right_sibling(two, 3)?;
//!
//! // Navigation goes through a NodeRef, which does:
//! let root_ref = tree.root();
//! assert_eq!(root_ref.children_count()?, 2);
//! assert_eq!(root_ref.child(0)?.data()?, &2);
//! assert_eq!(root_ref.child(1)?.data()?, &3);
//!
//! // Removing a sibling also removes everything under it:
//! tree.delete_right_sibling(two)?;
//! assert_eq!(tree.root().children_count()?, 1);
//! assert!(tree.root().child(0)?.right_sibling()?.is_null());
//! # Ok(())
//! # }
//! ```

use core::fmt::Debug;
use tracing::{debug, trace};
use crate::{
    storage::{Storage, DefaultStorage, SlotKey},
    Error,
    InvalidArgument,
};

mod debug_print;
mod handle;
mod node;
mod node_ref;
mod walk;

use handle::TreeId;
pub use handle::NodeHandle;
pub use node::Node;
pub use node_ref::NodeRef;


static DANGLING_LINK_MSG: &str = "\
a link inside the tree pointed to a node which is not present in the storage";

/// A general tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
pub struct GeneralTree<T, K = SlotKey, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    storage: S,
    root: Option<K>,
    id: TreeId,
}
impl<T, K, S> GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty tree.
    ///
    /// # Example
    /// ```rust
    /// # use lcrs::GeneralTree;
    /// let tree = GeneralTree::<u32>::new();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_null());
    /// ```
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
            id: TreeId::next(),
        }
    }
    /// Creates an empty tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            id: TreeId::next(),
        }
    }
    /// Creates a tree with the specified value for the root node.
    ///
    /// # Example
    /// ```rust
    /// # use lcrs::GeneralTree;
    /// let tree = GeneralTree::<_>::with_root(100_201);
    /// assert_eq!(tree.root().data(), Ok(&100_201));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        let key = tree.storage.add(Node::new(value, None));
        tree.root = Some(key);
        tree
    }

    /// Returns a reference to the root node of the tree, which is null if the tree is empty.
    #[inline(always)]
    pub fn root(&self) -> NodeRef<'_, T, K, S> {
        NodeRef::new(self, self.handle_for(self.root.clone()))
    }
    /// Returns a reference to the node designated by the handle.
    ///
    /// The handle is not checked here: queries on the returned reference report null, dangling and foreign handles instead.
    #[inline(always)]
    pub fn node(&self, handle: NodeHandle<K>) -> NodeRef<'_, T, K, S> {
        NodeRef::new(self, handle)
    }
    /// Returns `true` if the tree does not have a root, `false` otherwise.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns a *mutable* reference to the value stored in the node designated by the handle.
    ///
    /// # Errors
    /// [`InvalidArgument`] if the handle is null, dangling or issued by a different tree.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    pub fn data_mut(&mut self, handle: NodeHandle<K>) -> Result<&mut T, Error> {
        let key = self.resolve(&handle)?.clone();
        Ok(&mut self.get_mut(&key).value)
    }

    /// Makes a tree out of a single root node with the given value.
    ///
    /// # Errors
    /// [`Error::RootExists`] if the tree already has a root. The value is dropped in that case.
    ///
    /// [`Error::RootExists`]: ../enum.Error.html#variant.RootExists " "
    #[inline]
    pub fn create_root(&mut self, value: T) -> Result<NodeHandle<K>, Error> {
        self.emplace_root(move || value)
    }
    /// Makes a tree out of a single root node, with the value produced by the closure.
    ///
    /// The closure is only called once the tree is known to be empty.
    ///
    /// # Errors
    /// [`Error::RootExists`] if the tree already has a root.
    ///
    /// [`Error::RootExists`]: ../enum.Error.html#variant.RootExists " "
    pub fn emplace_root(&mut self, f: impl FnOnce() -> T) -> Result<NodeHandle<K>, Error> {
        if self.root.is_some() {
            return Err(Error::RootExists);
        }
        let key = self.storage.add(Node::new(f(), None));
        trace!(?key, "created root node");
        self.root = Some(key.clone());
        Ok(self.handle_for(Some(key)))
    }

    /// Adds a node with the given value as the new first child of `destiny`. The previous children of `destiny` come after it.
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling or issued by a different tree. The value is dropped in that case.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    #[inline]
    pub fn insert_left_child(
        &mut self,
        destiny: NodeHandle<K>,
        value: T,
    ) -> Result<NodeHandle<K>, Error> {
        self.emplace_left_child(destiny, move || value)
    }
    /// Adds a node with the value produced by the closure as the new first child of `destiny`.
    ///
    /// The closure is only called once `destiny` has been checked.
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling or issued by a different tree.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    pub fn emplace_left_child(
        &mut self,
        destiny: NodeHandle<K>,
        f: impl FnOnce() -> T,
    ) -> Result<NodeHandle<K>, Error> {
        let parent = self.resolve(&destiny)?.clone();
        let mut node = Node::new(f(), Some(parent.clone()));
        node.right_sibling = self.get(&parent).left_child.clone();
        let key = self.storage.add(node);
        self.get_mut(&parent).left_child = Some(key.clone());
        trace!(?key, ?parent, "inserted left child");
        Ok(self.handle_for(Some(key)))
    }
    /// Adds a node with the given value right after `destiny` among the children of its parent.
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling, issued by a different tree or the root node, which cannot have siblings. The value is dropped in that case.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    #[inline]
    pub fn insert_right_sibling(
        &mut self,
        destiny: NodeHandle<K>,
        value: T,
    ) -> Result<NodeHandle<K>, Error> {
        self.emplace_right_sibling(destiny, move || value)
    }
    /// Adds a node with the value produced by the closure right after `destiny` among the children of its parent.
    ///
    /// The closure is only called once `destiny` has been checked.
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling, issued by a different tree or the root node.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    pub fn emplace_right_sibling(
        &mut self,
        destiny: NodeHandle<K>,
        f: impl FnOnce() -> T,
    ) -> Result<NodeHandle<K>, Error> {
        let sibling = self.resolve(&destiny)?.clone();
        let (parent, next) = self.sibling_slot(&sibling)?;
        let mut node = Node::new(f(), Some(parent));
        node.right_sibling = next;
        let key = self.storage.add(node);
        self.get_mut(&sibling).right_sibling = Some(key.clone());
        trace!(?key, ?sibling, "inserted right sibling");
        Ok(self.handle_for(Some(key)))
    }

    /// Moves the whole of `other` into this tree, making its root the new first child of `destiny`. `other` is left empty and can be reused.
    ///
    /// No value gets cloned. Handles issued by `other` stop being valid for either tree; the returned handle designates the transplanted root. Returns a null handle and does nothing if `other` is empty.
    ///
    /// The nodes are relocated into the storage of this tree, which takes time proportional to the size of `other`.
    ///
    /// A tree cannot be inserted into itself, which the borrow checker rules out:
    /// ```compile_fail
    /// # use lcrs::GeneralTree;
    /// let mut tree = GeneralTree::<_>::with_root(1);
    /// let root = tree.root().handle();
    /// tree.insert_left_child_tree(root, &mut tree);
    /// ```
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling or issued by a different tree. `other` is left untouched in that case.
    ///
    /// # Panics
    /// If the storage of this tree cannot make room for every node of `other`, which happens before either tree is modified.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    pub fn insert_left_child_tree(
        &mut self,
        destiny: NodeHandle<K>,
        other: &mut Self,
    ) -> Result<NodeHandle<K>, Error> {
        let parent = self.resolve(&destiny)?.clone();
        let moved = other.len();
        self.storage.reserve(moved);
        let key = match self.adopt(other, Some(parent.clone())) {
            Some(key) => key,
            None => return Ok(NodeHandle::null()),
        };
        let previous_head = self.get_mut(&parent).left_child.replace(key.clone());
        self.get_mut(&key).right_sibling = previous_head;
        trace!(?key, ?parent, moved, "transplanted tree as left child");
        Ok(self.handle_for(Some(key)))
    }
    /// Moves the whole of `other` into this tree, making its root the next sibling of `destiny`. `other` is left empty and can be reused.
    ///
    /// No value gets cloned. Handles issued by `other` stop being valid for either tree; the returned handle designates the transplanted root. Returns a null handle and does nothing if `other` is empty.
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling, issued by a different tree or the root node. `other` is left untouched in that case.
    ///
    /// # Panics
    /// If the storage of this tree cannot make room for every node of `other`, which happens before either tree is modified.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    pub fn insert_right_sibling_tree(
        &mut self,
        destiny: NodeHandle<K>,
        other: &mut Self,
    ) -> Result<NodeHandle<K>, Error> {
        let sibling = self.resolve(&destiny)?.clone();
        let (parent, _) = self.sibling_slot(&sibling)?;
        let moved = other.len();
        self.storage.reserve(moved);
        let key = match self.adopt(other, Some(parent)) {
            Some(key) => key,
            None => return Ok(NodeHandle::null()),
        };
        let next = self.get_mut(&sibling).right_sibling.replace(key.clone());
        self.get_mut(&key).right_sibling = next;
        trace!(?key, ?sibling, moved, "transplanted tree as right sibling");
        Ok(self.handle_for(Some(key)))
    }

    /// Removes all children of `destiny`, along with everything under them, returning the number of nodes removed.
    ///
    /// Does nothing if `destiny` is a leaf.
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling or issued by a different tree.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    pub fn delete_left_child(&mut self, destiny: NodeHandle<K>) -> Result<usize, Error> {
        let parent = self.resolve(&destiny)?.clone();
        let mut next = self.get_mut(&parent).left_child.take();
        let mut removed = 0;
        while let Some(key) = next {
            next = self.get(&key).right_sibling.clone();
            removed += self.remove_subtree(key);
        }
        debug!(?parent, removed, "deleted children");
        Ok(removed)
    }
    /// Removes the node which comes after `destiny`, along with everything under it, returning the number of nodes removed. The siblings after the removed node move up to follow `destiny`.
    ///
    /// Does nothing if `destiny` is the last child of its parent.
    ///
    /// # Errors
    /// [`InvalidArgument`] if `destiny` is null, dangling, issued by a different tree or the root node.
    ///
    /// [`InvalidArgument`]: ../enum.InvalidArgument.html " "
    pub fn delete_right_sibling(&mut self, destiny: NodeHandle<K>) -> Result<usize, Error> {
        let sibling = self.resolve(&destiny)?.clone();
        let target = match self.sibling_slot(&sibling)? {
            (_, Some(target)) => target,
            (_, None) => return Ok(0),
        };
        let after = self.get(&target).right_sibling.clone();
        self.get_mut(&sibling).right_sibling = after;
        let removed = self.remove_subtree(target);
        debug!(?sibling, removed, "deleted right sibling");
        Ok(removed)
    }
    /// Removes every node of the tree, leaving it empty.
    ///
    /// Handles issued before the call become dangling, even if the memory of the nodes is later reused.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            let removed = self.remove_subtree(root);
            debug!(removed, "cleared tree");
        }
    }

    /// Checks that the handle designates a node of this tree and returns its key.
    fn resolve<'h>(&self, handle: &'h NodeHandle<K>) -> Result<&'h K, Error> {
        let (tree, key) = handle.parts().ok_or(InvalidArgument::NullNode)?;
        if tree != self.id {
            Err(InvalidArgument::ForeignNode.into())
        } else if self.storage.contains_key(key) {
            Ok(key)
        } else {
            Err(InvalidArgument::DanglingNode.into())
        }
    }
    #[inline(always)]
    fn handle_for(&self, key: Option<K>) -> NodeHandle<K> {
        NodeHandle::new(self.id, key)
    }
    /// Returns the parent and the current right sibling of a node which is about to get a new right sibling.
    fn sibling_slot(&self, key: &K) -> Result<(K, Option<K>), Error> {
        let node = self.get(key);
        let parent = node.parent.clone().ok_or(InvalidArgument::RootSibling)?;
        Ok((parent, node.right_sibling.clone()))
    }
    #[track_caller]
    fn get(&self, key: &K) -> &Node<T, K> {
        self.storage.get(key).expect(DANGLING_LINK_MSG)
    }
    #[track_caller]
    fn get_mut(&mut self, key: &K) -> &mut Node<T, K> {
        self.storage.get_mut(key).expect(DANGLING_LINK_MSG)
    }
}
impl<T, K, S> Default for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty tree.
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
impl<T, K, S> From<T> for GeneralTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a tree with the specified value for the root node.
    #[inline(always)]
    fn from(root: T) -> Self {
        Self::with_root(root)
    }
}

/// A general tree which uses a *sparse* `Vec` as backing storage.
///
/// The default `GeneralTree` type already uses this, so this is only provided for explicitness and consistency.
#[allow(unused_qualifications)]
pub type SparseVecGeneralTree<T> =
    GeneralTree<T, SlotKey, crate::storage::SparseVec<Node<T, SlotKey>>>;
/// A general tree which uses a *sparse* `ArrayVec` as backing storage, i.e. a tree with a fixed maximum number of nodes which never allocates for them.
///
/// `A` is the array type, like `[SparseStorageSlot<Node<T, SlotKey>>; 32]`. Adding a node to a full tree panics.
#[allow(unused_qualifications)]
pub type ArrayVecGeneralTree<T, A> =
    GeneralTree<T, SlotKey, crate::storage::SparseStorage<Node<T, SlotKey>, arrayvec::ArrayVec<A>>>;
/// A general tree which uses a `SlotMap` as backing storage.
#[cfg(feature = "slotmap_storage")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap_storage")))]
pub type SlotMapGeneralTree<T> = GeneralTree<
    T,
    slotmap::DefaultKey,
    slotmap::SlotMap<slotmap::DefaultKey, Node<T, slotmap::DefaultKey>>,
>;
/// A general tree which uses a `DenseSlotMap` as backing storage.
#[cfg(feature = "slotmap_storage")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "slotmap_storage")))]
pub type DenseSlotMapGeneralTree<T> = GeneralTree<
    T,
    slotmap::DefaultKey,
    slotmap::DenseSlotMap<slotmap::DefaultKey, Node<T, slotmap::DefaultKey>>,
>;
