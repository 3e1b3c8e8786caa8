//! An arena-allocated general tree stored in left-child/right-sibling form.
//!
//! # Overview
//! A general tree is a tree in which every node can have any number of ordered children. Instead of keeping a list of children in each node, this crate links every node to its first ("left") child and to its next ("right") sibling, plus its parent. Walking right along the siblings starting at the left child visits the children of a node in order.
//!
//! Nodes live in a single backing storage owned by the tree, the "arena", and link to each other using keys into that storage instead of pointers. This gives cheap insertion and removal, and lets whole-tree algorithms (deep copy, structural equality, removal of subtrees) walk the links directly without recursion.
//!
//! Nodes are designated with two kinds of references:
//! - [`NodeHandle`] — a plain `Copy` key, which does not borrow the tree. All mutating methods of [`GeneralTree`] take and return handles.
//! - [`NodeRef`] — a handle together with a shared borrow of the tree, used for navigation and reading values.
//!
//! Both can be null. Handles are checked on every use: operating on a null handle, on one whose node has already been removed, or on one issued by a different tree, is reported as an [`InvalidArgument`] error instead of misbehaving.
//!
//! ```rust
//! use lcrs::GeneralTree;
//!
//! # fn main() -> Result<(), lcrs::Error> {
//! let mut tree = GeneralTree::<_>::with_root("animals");
//! let root = tree.root().handle();
//! let birds = tree.insert_left_child(root, "birds")?;
//! let mammals = tree.insert_right_sibling(birds, "mammals")?;
//! tree.insert_left_child(mammals, "cats")?;
//!
//! let mut pets = GeneralTree::<_>::with_root("dogs");
//! let dogs = tree.insert_right_sibling_tree(birds, &mut pets)?;
//! assert!(pets.is_empty());
//!
//! assert_eq!(tree.root().child(1)?, dogs);
//! assert_eq!(tree.len(), 5);
//! assert_eq!(
//!     format!("{:?}", tree),
//!     r#"GeneralTree({"animals": ["birds", "dogs", {"mammals": ["cats"]}]})"#,
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Storage
//! The trait used for defining the "arena" type used is [`Storage`]. Implementing it directly isn't the only way to get your type to be supported by the tree — [`ListStorage`] is a trait which allows you to define an arena storage in terms of a list-like collection, which is then wrapped in a [`SparseStorage`].
//!
//! Sparse storage leaves holes behind removed elements and fills them with the next added ones. Every slot counts how many times it has been vacated, and keys remember that count, so a key to a removed node never designates a node added later in its place.
//!
//! Out of the box, `ListStorage` is implemented for [`Vec`] and [`ArrayVec`], and with the `slotmap_storage` feature, `Storage` is implemented for [`SlotMap`] and [`DenseSlotMap`].
//!
//! # Logging
//! Node creation, transplantation and removal emit [`tracing`] events at the `trace` and `debug` levels. The crate never installs a subscriber.
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the standard library, disabling `no_std` for the crate and enabling `std` support in the dependencies. Without it, the crate only needs `alloc`.
//! - `slotmap_storage` — adds `Storage` trait implementations for [`SlotMap`] and [`DenseSlotMap`].
//! - `doc_cfg` — marks feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [`SlotMap`]: https://docs.rs/slotmap/*/slotmap/struct.SlotMap.html " "
//! [`DenseSlotMap`]: https://docs.rs/slotmap/*/slotmap/dense/struct.DenseSlotMap.html " "
//! [`tracing`]: https://docs.rs/tracing " "
//! [`NodeHandle`]: general_tree/struct.NodeHandle.html " "
//! [`NodeRef`]: general_tree/struct.NodeRef.html " "
//! [`GeneralTree`]: general_tree/struct.GeneralTree.html " "
//! [`InvalidArgument`]: enum.InvalidArgument.html " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`ListStorage`]: storage/trait.ListStorage.html " "
//! [`SparseStorage`]: storage/struct.SparseStorage.html " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_hasher,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    // sick of this stupid lint, disabling
    // clippy::module_name_repetitions,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod general_tree;
pub use general_tree::{GeneralTree, NodeHandle, NodeRef};

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseStorage as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::general_tree::{
        GeneralTree,
        NodeHandle as GeneralTreeNodeHandle,
        NodeRef as GeneralTreeNodeRef,
    };
    #[doc(no_inline)]
    pub use crate::{
        Error as TreeError,
        InvalidArgument as InvalidTreeArgument,
    };
}

/// The error type returned by fallible operations on general trees and their nodes.
///
/// A method which returns an error has not modified the tree.
#[derive(thiserror::Error, Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Error {
    /// A node passed to the method, or the node the method was called on, could not be used. See [`InvalidArgument`] for the details.
    ///
    /// [`InvalidArgument`]: enum.InvalidArgument.html " "
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// A root node was requested for a tree which already has one.
    #[error("the tree already has a root node")]
    RootExists,
}
impl Error {
    /// Returns `true` if the error was caused by a node which could not be used, `false` otherwise.
    ///
    /// # Example
    /// ```rust
    /// # use lcrs::{Error, InvalidArgument};
    /// assert!(Error::from(InvalidArgument::NullNode).is_invalid_argument());
    /// assert!(!Error::RootExists.is_invalid_argument());
    /// ```
    #[inline]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(..))
    }
}

/// The reason why a node could not be used by an operation.
#[derive(thiserror::Error, Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum InvalidArgument {
    /// The handle or reference did not designate any node.
    #[error("the node handle is null")]
    NullNode,
    /// The node has been removed from the tree.
    #[error("the node handle designates a node which has been removed")]
    DanglingNode,
    /// The handle was issued by a different tree.
    #[error("the node handle was issued by a different tree")]
    ForeignNode,
    /// A right sibling was requested for the root node, which cannot have siblings.
    #[error("the root node cannot have siblings")]
    RootSibling,
}
