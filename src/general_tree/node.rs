use core::fmt::Debug;

/// A node of a general tree.
///
/// Created by the general tree internally and only publicly exposed so that general tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where
    K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) parent: Option<K>,
    pub(super) left_child: Option<K>,
    pub(super) right_sibling: Option<K>,
}

impl<T, K> Node<T, K>
where
    K: Clone + Debug + Eq,
{
    /// Creates a childless node without siblings under the given parent, or a root node if there is none.
    #[inline(always)]
    pub(super) const fn new(value: T, parent: Option<K>) -> Self {
        Self {
            value,
            parent,
            left_child: None,
            right_sibling: None,
        }
    }
    #[inline(always)]
    pub(super) const fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
