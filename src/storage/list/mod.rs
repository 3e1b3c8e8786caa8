mod alloc_impl;
mod arrayvec_impl;

mod sparse;
pub use sparse::{
    SparseStorage,
    Slot as SparseStorageSlot,
    SlotKey,
    Vec as SparseVec,
};

/// Trait for list-like containers which can be the body of a [`SparseStorage`].
///
/// The containers are only ever grown at the back; removed elements are replaced in place, which is what keeps the indices handed out by `SparseStorage` stable.
///
/// Implementors must uphold the following:
/// - `new` and `with_capacity` ***must*** return empty collections, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - it should be impossible for the length of the collection to overflow `usize`;
/// - if an element is added at a position, it must be retrieveable in the exact same state as it was inserted until it is removed or modified using a method which explicitly does so.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub trait ListStorage: Sized {
    /// The type of values in the container.
    type Element;

    /// Creates an empty collection with the specified capacity.
    ///
    /// # Panics
    /// Collections with a fixed capacity should panic if the specified capacity does not match their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element to the back of the collection.
    ///
    /// # Panics
    /// Collections with a fixed capacity panic if they are full.
    fn push(&mut self, element: Self::Element);
    /// Returns the number of elements in the collection, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns a reference to the specified element in the collection, or `None` if the index is out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Element>;
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index is out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element>;

    /// Creates a new empty collection. Dynamically-allocated collections created this way do not allocate memory.
    ///
    /// Collections with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the collection contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the amount of elements the collection can hold without requiring a memory allocation.
    ///
    /// For collections which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least additional more elements to be inserted in the given collection. The collection may reserve more space to avoid frequent reallocations. After calling `reserve`, `capacity` will be greater than or equal to `self.len()` + `additional`. Does nothing if capacity is already sufficient.
    ///
    /// For collections which have a fixed capacity, this should first check for the specified amount of elements to reserve for and if it's not zero, either reallocate the collection anew or, if that is not supported, panic. The default implementation does exactly that.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
    /// Shrinks the capacity of the collection as much as possible.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}
