use core::{
    fmt::Debug,
    sync::atomic::{AtomicUsize, Ordering},
};
use crate::storage::SlotKey;

/// Tells trees apart, so that a handle issued by one tree is never mistaken for a node of another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TreeId(usize);
impl TreeId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A non-owning reference to a node of a general tree, or to no node at all.
///
/// Handles are what mutating methods of [`GeneralTree`] accept and return. Unlike [`NodeRef`], a handle does not borrow the tree, so it can be kept around while the tree is being modified. Two handles are equal if and only if they designate the same node of the same tree, or are both null; the values stored in the nodes are never compared.
///
/// A handle stays valid until the node it designates is removed from the tree, either by being deleted or by being transplanted into a different tree. Trees check handles before using them: a null handle is reported as [`InvalidArgument::NullNode`], a handle to a removed node as [`InvalidArgument::DanglingNode`] and a handle issued by a different tree as [`InvalidArgument::ForeignNode`]. Moving a tree keeps its handles valid; cloning it does not carry them over to the copy.
///
/// [`GeneralTree`]: struct.GeneralTree.html " "
/// [`NodeRef`]: struct.NodeRef.html " "
/// [`InvalidArgument::NullNode`]: ../enum.InvalidArgument.html#variant.NullNode " "
/// [`InvalidArgument::DanglingNode`]: ../enum.InvalidArgument.html#variant.DanglingNode " "
/// [`InvalidArgument::ForeignNode`]: ../enum.InvalidArgument.html#variant.ForeignNode " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeHandle<K = SlotKey>
where
    K: Clone + Debug + Eq,
{
    node: Option<(TreeId, K)>,
}
impl<K> NodeHandle<K>
where
    K: Clone + Debug + Eq,
{
    /// Returns a handle which does not designate any node.
    ///
    /// # Example
    /// ```rust
    /// # use lcrs::NodeHandle;
    /// let handle = NodeHandle::<lcrs::storage::SlotKey>::null();
    /// assert!(handle.is_null());
    /// ```
    #[inline(always)]
    pub const fn null() -> Self {
        Self { node: None }
    }
    #[inline(always)]
    pub(crate) fn new(tree: TreeId, key: Option<K>) -> Self {
        Self {
            node: key.map(|key| (tree, key)),
        }
    }
    #[inline(always)]
    pub(crate) fn parts(&self) -> Option<(TreeId, &K)> {
        self.node.as_ref().map(|(tree, key)| (*tree, key))
    }
    /// Returns `true` if the handle does not designate any node, `false` otherwise.
    #[inline(always)]
    pub const fn is_null(&self) -> bool {
        self.node.is_none()
    }
    /// Returns a reference to the raw storage key for the node, or `None` for a null handle.
    #[inline(always)]
    pub fn raw_key(&self) -> Option<&K> {
        self.node.as_ref().map(|(_, key)| key)
    }
    /// Consumes the handle and returns the underlying raw storage key for the node.
    #[inline(always)]
    pub fn into_raw_key(self) -> Option<K> {
        self.node.map(|(_, key)| key)
    }
}
impl<K> Default for NodeHandle<K>
where
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn default() -> Self {
        Self::null()
    }
}
