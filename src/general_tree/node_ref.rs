use core::fmt::{self, Debug, Formatter};
use crate::{
    storage::{Storage, DefaultStorage, SlotKey},
    Error,
};
use super::{GeneralTree, Node, NodeHandle};

/// A reference to a node in a general tree, or to no node at all.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree. It borrows the tree immutably: to modify the tree, convert it into a [`NodeHandle`] first.
///
/// Every query except [`is_null`] and [`handle`] reports [`InvalidArgument::NullNode`] when invoked on a null reference, [`InvalidArgument::DanglingNode`] when the node has already been removed from the tree and [`InvalidArgument::ForeignNode`] when the reference was made from a handle issued by a different tree.
///
/// [`NodeHandle`]: struct.NodeHandle.html " "
/// [`is_null`]: #method.is_null " "
/// [`handle`]: #method.handle " "
/// [`InvalidArgument::NullNode`]: ../enum.InvalidArgument.html#variant.NullNode " "
/// [`InvalidArgument::DanglingNode`]: ../enum.InvalidArgument.html#variant.DanglingNode " "
/// [`InvalidArgument::ForeignNode`]: ../enum.InvalidArgument.html#variant.ForeignNode " "
pub struct NodeRef<'a, T, K = SlotKey, S = DefaultStorage<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a GeneralTree<T, K, S>,
    handle: NodeHandle<K>,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    pub(super) const fn new(tree: &'a GeneralTree<T, K, S>, handle: NodeHandle<K>) -> Self {
        Self { tree, handle }
    }
    /// Returns the handle of the node, which can be passed to the mutating methods of the tree.
    #[inline]
    pub fn handle(&self) -> NodeHandle<K> {
        self.handle.clone()
    }
    /// Returns `true` if the reference does not point to any node, `false` otherwise.
    ///
    /// This is the only query which never fails.
    #[inline(always)]
    pub const fn is_null(&self) -> bool {
        self.handle.is_null()
    }
    /// Returns the tree which the reference points into.
    #[inline(always)]
    pub const fn tree(&self) -> &'a GeneralTree<T, K, S> {
        self.tree
    }

    /// Returns a reference to the first child of the node, or a null reference if the node is a leaf.
    #[inline]
    pub fn left_child(&self) -> Result<Self, Error> {
        Ok(self.relative(&self.node()?.left_child))
    }
    /// Returns a reference to the parent of the node, or a null reference if the node is the root.
    #[inline]
    pub fn parent(&self) -> Result<Self, Error> {
        Ok(self.relative(&self.node()?.parent))
    }
    /// Returns a reference to the sibling which comes after the node, or a null reference if it's the last child of its parent.
    #[inline]
    pub fn right_sibling(&self) -> Result<Self, Error> {
        Ok(self.relative(&self.node()?.right_sibling))
    }
    /// Returns a reference to the value stored in the node.
    ///
    /// # Example
    /// ```rust
    /// # use lcrs::{GeneralTree, InvalidArgument};
    /// let tree = GeneralTree::<_>::with_root("Root");
    /// assert_eq!(tree.root().data(), Ok(&"Root"));
    ///
    /// let empty = GeneralTree::<&str>::new();
    /// assert_eq!(empty.root().data(), Err(InvalidArgument::NullNode.into()));
    /// ```
    #[inline]
    pub fn data(&self) -> Result<&'a T, Error> {
        Ok(&self.node()?.value)
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline]
    pub fn is_root(&self) -> Result<bool, Error> {
        Ok(self.node()?.is_root())
    }
    /// Returns `true` if the node does not have children, `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> Result<bool, Error> {
        Ok(self.node()?.left_child.is_none())
    }
    /// Returns `true` if the node has at least one child, `false` otherwise.
    #[inline]
    pub fn has_left_child(&self) -> Result<bool, Error> {
        Ok(self.node()?.left_child.is_some())
    }
    /// Returns `true` if another node comes after this one among the children of its parent, `false` otherwise.
    #[inline]
    pub fn has_right_sibling(&self) -> Result<bool, Error> {
        Ok(self.node()?.right_sibling.is_some())
    }
    /// Returns a reference to the child at the given position, counting from zero, or a null reference if there are not that many children.
    ///
    /// Takes time proportional to `index`.
    ///
    /// # Example
    /// ```rust
    /// # use lcrs::GeneralTree;
    /// # fn main() -> Result<(), lcrs::Error> {
    /// let mut tree = GeneralTree::<_>::with_root(1);
    /// let root = tree.root().handle();
    /// let first = tree.insert_left_child(root, 2)?;
    /// let second = tree.insert_right_sibling(first, 3)?;
    ///
    /// assert_eq!(tree.root().child(0)?, first);
    /// assert_eq!(tree.root().child(1)?, second);
    /// assert!(tree.root().child(2)?.is_null());
    /// # Ok(())
    /// # }
    /// ```
    pub fn child(&self, index: usize) -> Result<Self, Error> {
        let first = self.node()?.left_child.clone();
        Ok(self.relative(&self.tree.sibling_keys(first).nth(index)))
    }
    /// Returns the number of children of the node.
    ///
    /// Takes time proportional to the number of children.
    pub fn children_count(&self) -> Result<usize, Error> {
        let first = self.node()?.left_child.clone();
        Ok(self.tree.sibling_keys(first).count())
    }
    /// Returns the number of parent links between the node and the root; the root itself has a depth of 0.
    pub fn depth(&self) -> Result<usize, Error> {
        let mut depth = 0;
        let mut parent = self.node()?.parent.clone();
        while let Some(key) = parent {
            depth += 1;
            parent = self.tree.get(&key).parent.clone();
        }
        Ok(depth)
    }
    /// Returns the number of nodes in the subtree under the node, not including the node itself.
    ///
    /// Walks the entire subtree.
    pub fn descendants_count(&self) -> Result<usize, Error> {
        let top = self.tree.resolve(&self.handle)?;
        Ok(self.tree.count_descendants(top))
    }

    fn relative(&self, key: &Option<K>) -> Self {
        Self::new(self.tree, self.tree.handle_for(key.clone()))
    }
    fn node(&self) -> Result<&'a Node<T, K>, Error> {
        let tree = self.tree;
        Ok(tree.get(tree.resolve(&self.handle)?))
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{
}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            handle: self.handle.clone(),
        }
    }
}
impl<T, K, S> PartialEq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}
impl<T, K, S> Eq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
}
impl<T, K, S> PartialEq<NodeHandle<K>> for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn eq(&self, other: &NodeHandle<K>) -> bool {
        self.handle == *other
    }
}
impl<T, K, S> PartialEq<NodeRef<'_, T, K, S>> for NodeHandle<K>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn eq(&self, other: &NodeRef<'_, T, K, S>) -> bool {
        other == self
    }
}
impl<T, K, S> Debug for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("handle", &self.handle)
            .field("data", &self.data().ok())
            .finish()
    }
}
impl<'a, T, K, S> From<NodeRef<'a, T, K, S>> for NodeHandle<K>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn from(op: NodeRef<'a, T, K, S>) -> Self {
        op.handle
    }
}
