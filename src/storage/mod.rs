//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`Storage`], the main trait for the backing storages for trees
//! - [`ListStorage`], a trait used for implementing `Storage` for list-like collections through [`SparseStorage`]
//! - [`SparseStorage`], a wrapper around `ListStorage`s which turns them into arenas with stable, generation-checked keys
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified
//!
//! [`Storage`]: trait.Storage.html " "
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`SparseStorage`]: struct.SparseStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "

mod list;
pub use list::*;

#[cfg(feature = "slotmap_storage")]
mod slotmap_impl;

use core::fmt::Debug;

/// Trait for various kinds of containers which can be the backing storage for trees.
///
/// There's a number of invariants which have to be followed by the container, and trees rely on them for correctness:
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - keys returned by `add` must stay valid and keep pointing to the same element until that element is removed, regardless of any other insertions or removals;
/// - once an element is removed, its key must never be reported as present again, not even after the storage reuses the memory for another element;
/// - if an element is added at a key, it must be retrieveable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
pub trait Storage: Sized {
    /// The type used for element naming.
    type Key: Clone + Debug + Eq;
    /// The type of the elements stored.
    type Element;

    /// Adds an element to the collection with an unspecified key, returning that key.
    ///
    /// # Panics
    /// Storages with a fixed capacity panic if they are full.
    fn add(&mut self, element: Self::Element) -> Self::Key;
    /// Removes and returns the element identified by `key` within the storage, or `None` if the key is not present.
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Element>;
    /// Returns the number of elements in the storage, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Creates an empty storage with the specified capacity.
    ///
    /// # Panics
    /// Storages with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Returns a reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get(&self, key: &Self::Key) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the key is not present in the storage.
    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Element>;

    /// Returns `true` if the specified key is present in the storage, `false` otherwise.
    #[inline]
    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
    /// Creates a new empty storage. Dynamically-allocated storages created this way do not allocate memory.
    ///
    /// Storages with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the storage contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the storage can hold without requiring a memory allocation.
    ///
    /// For storages which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least additional more elements to be inserted in the given storage. The storage may reserve more space to avoid frequent reallocations. After calling `reserve`, `capacity` will be greater than or equal to `self.len()` + `additional`. Does nothing if capacity is already sufficient.
    ///
    /// For storages which have a fixed capacity, this should first check for the specified amount of elements to reserve for and if it's not zero, either reallocate the collection anew or, if that is not supported, panic. The default implementation does exactly that.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
    /// Shrinks the capacity of the storage as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is always a [`SparseVec`], which gives every node a generation-checked [`SlotKey`] and reuses the memory of removed nodes through a free-list.
///
/// [`SparseVec`]: type.SparseVec.html " "
/// [`SlotKey`]: struct.SlotKey.html " "
pub type DefaultStorage<T> = SparseVec<T>;
