use core::{
    mem,
    num::NonZeroUsize,
};
use super::ListStorage;
use crate::storage::Storage;

/// A `Vec` wrapped in [`SparseStorage`].
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
pub type Vec<T> = SparseStorage<T, alloc::vec::Vec<Slot<T>>>;

/// The key type of [`SparseStorage`]: an index into the underlying list plus the generation of the slot at the moment the element was added.
///
/// [`SparseStorage`]: struct.SparseStorage.html " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    index: usize,
    generation: u32,
}
impl SlotKey {
    /// Returns the index of the slot inside the underlying list storage.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.index
    }
    /// Returns the generation of the slot which this key was issued for.
    #[inline(always)]
    pub const fn generation(&self) -> u32 {
        self.generation
    }
}

/// A wrapper around a list-like storage type which turns it into an arena with stable keys and cheap removal.
///
/// Sparse storage with element type `E` wraps a normal storage which stores `Slot<E>`, which is a tagged union storing either an element or a "hole". Removing an element never shifts other elements around: the element is replaced with a hole instead, so the indices stored inside other elements don't get invalidated. Holes are chained into a free-list and reused by subsequent insertions, oldest hole first.
///
/// Every slot counts how many times it has been vacated. Keys remember that generation, so a key for a removed element is reported as absent even after its slot has been reused for a new element. The counter wraps after `u32::MAX` reuses of the very same slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    storage: S,
    /// Length, first element, last element
    hole_list: Option<(NonZeroUsize, usize, usize)>,
}
impl<E, S> SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    /// Consumes the sparse storage and returns its inner storage.
    #[inline(always)]
    pub fn into_inner(self) -> S {
        self.storage
    }
    /// Returns the number of holes in the storage. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn num_holes(&self) -> usize {
        self.hole_list.map_or(0, |x| x.0.get())
    }
    /// Returns `true` if there are no holes in the storage, `false` otherwise. This operation returns immediately instead of looping through the entire storage, since the sparse storage automatically tracks the number of holes it creates and destroys.
    #[inline(always)]
    pub fn is_dense(&self) -> bool {
        self.num_holes() == 0
    }

    /// Sets the specified element to a hole and appends the hole to the end of the free-list, returning the value or `None` if it was already a hole or the index was out of range.
    fn punch_hole(&mut self, index: usize) -> Option<E> {
        let val = self.storage.get_mut(index)?.punch_hole()?;
        if let Some(hole_info) = &mut self.hole_list {
            // It's impossible to have more than usize::MAX elements in a ListStorage
            hole_info.0 = NonZeroUsize::new(hole_info.0.get() + 1)
                .expect("hole count overflowed");
            let old_end = hole_info.2;
            hole_info.2 = index;
            // Make the previous end point to the hole we just punched
            if let Some(slot) = self.storage.get_mut(old_end) {
                slot.set_hole_link(Some(index));
            }
        } else {
            self.hole_list = Some((
                NonZeroUsize::new(1).expect("1 is not zero"), // Only one hole
                index, // List starts from the hole we just punched...
                index, // ...and ends with it
            ));
        }
        Some(val)
    }
}
impl<E, S> Default for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    #[inline(always)]
    fn default() -> Self {
        Self {storage: S::new(), hole_list: None}
    }
}
impl<E, S> Storage for SparseStorage<E, S>
where S: ListStorage<Element = Slot<E>> {
    type Key = SlotKey;
    type Element = E;

    #[inline]
    fn add(&mut self, element: Self::Element) -> SlotKey {
        if let Some((count, head, tail)) = self.hole_list {
            if let Some(hole) = self.storage.get_mut(head) {
                let (generation, next_hole) = hole.fill(element);
                self.hole_list = match (NonZeroUsize::new(count.get() - 1), next_hole) {
                    (Some(count), Some(next_hole)) => Some((count, next_hole, tail)),
                    _ => None,
                };
                return SlotKey { index: head, generation };
            }
        }
        self.storage.push(Slot::new_element(element));
        SlotKey {
            index: self.storage.len() - 1,
            generation: 0,
        }
    }
    #[inline]
    fn remove(&mut self, key: &SlotKey) -> Option<Self::Element> {
        if !self.contains_key(key) {
            return None;
        }
        self.punch_hole(key.index)
    }
    #[inline(always)]
    fn len(&self) -> usize {
        self.storage.len() - self.num_holes()
    }
    #[inline(always)]
    fn with_capacity(capacity: usize) -> Self {
        Self {storage: S::with_capacity(capacity), hole_list: None}
    }
    #[inline]
    fn get(&self, key: &SlotKey) -> Option<&Self::Element> {
        self.storage.get(key.index)?.element(key.generation)
    }
    #[inline]
    fn get_mut(&mut self, key: &SlotKey) -> Option<&mut Self::Element> {
        self.storage.get_mut(key.index)?.element_mut(key.generation)
    }
    #[inline(always)]
    fn new() -> Self {
        Self::default()
    }
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        // Holes will be filled before the list grows
        let additional = additional.saturating_sub(self.num_holes());
        self.storage.reserve(additional)
    }
    #[inline(always)]
    fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }
}

/// A slot inside a sparse storage.
///
/// This is an opaque structure, only used for the purpose of a `SparseStorage` being validly declarable, because leaking private types through generic argument defaults is impossible, and it'd be impossible to declare the type of the backing storage if it was explicitly different.
///
/// # Representation
/// *The contents of this section are an implementation detail.*
///
/// The structure is a newtype wrapper around the following enum:
/// ```no_run
/// # /*
/// enum SlotInner<T> {
///     Element { generation: u32, value: T },
///     Hole { generation: u32, next: Option<usize> },
/// }
/// # */
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot<T> (SlotInner<T>);
impl<T> Slot<T> {
    #[inline(always)]
    const fn new_element(value: T) -> Self {
        Self (SlotInner::Element { generation: 0, value })
    }
    #[inline]
    fn element(&self, generation: u32) -> Option<&T> {
        match &self.0 {
            SlotInner::Element { generation: current, value } if *current == generation => Some(value),
            _ => None,
        }
    }
    #[inline]
    fn element_mut(&mut self, generation: u32) -> Option<&mut T> {
        match &mut self.0 {
            SlotInner::Element { generation: current, value } if *current == generation => Some(value),
            _ => None,
        }
    }
    #[inline]
    fn set_hole_link(&mut self, link: Option<usize>) {
        if let SlotInner::Hole { next, .. } = &mut self.0 {
            *next = link;
        }
    }
    /// Replaces an element with a hole of the next generation, returning the element or `None` if the slot already was a hole.
    fn punch_hole(&mut self) -> Option<T> {
        let generation = match &self.0 {
            SlotInner::Element { generation, .. } => *generation,
            SlotInner::Hole { .. } => return None,
        };
        let hole = SlotInner::Hole {
            generation: generation.wrapping_add(1),
            next: None,
        };
        match mem::replace(&mut self.0, hole) {
            SlotInner::Element { value, .. } => Some(value),
            SlotInner::Hole { .. } => None,
        }
    }
    /// Puts an element into a hole, returning the generation of the new element and the link to the next hole.
    fn fill(&mut self, value: T) -> (u32, Option<usize>) {
        let (generation, next) = match &self.0 {
            SlotInner::Hole { generation, next } => (*generation, *next),
            SlotInner::Element { generation, .. } => (*generation, None),
        };
        self.0 = SlotInner::Element { generation, value };
        (generation, next)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum SlotInner<T> {
    /// A value in the slot.
    Element { generation: u32, value: T },
    /// A hole, with an index to the next one.
    Hole { generation: u32, next: Option<usize> },
}
