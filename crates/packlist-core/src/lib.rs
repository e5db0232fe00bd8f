//! Growable fixed-width integer lists.
//!
//! This is the leaf crate of the packlist workspace. It defines
//! [`IntList`], a contiguous growable sequence of fixed-width integers
//! whose capacity is managed independently of its logical length, plus
//! the [`FixedInt`] element trait and the [`ValueBox`] interop adapter.
//!
//! # Architecture
//!
//! ```text
//! IntList<T: FixedInt>
//! ├── storage: Vec<T>   (fully initialised; its length IS the capacity)
//! └── len: usize        (logical length, 0 ..= capacity)
//! ```
//!
//! Keeping every slot initialised lets capacity grow or shrink without
//! tracking uninitialised regions, and lets a decoder overwrite storage
//! in bulk before publishing a new length. That is the pattern
//! `packlist-codec` builds its buffer-reusing decode on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod list;

pub use element::{FixedInt, ValueBox};
pub use error::ListError;
pub use list::IntList;
