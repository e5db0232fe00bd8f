//! Packlist: compact, reusable fixed-width integer lists with a
//! varint-framed binary codec.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the packlist sub-crates. For most users, adding `packlist` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use packlist::prelude::*;
//!
//! // Build a list and encode it.
//! let mut list = IntList::<i32>::new();
//! for v in [1, 300, 70_000] {
//!     list.push(v);
//! }
//! let mut buf = Vec::new();
//! encode(&mut buf, &list).unwrap();
//! assert_eq!(buf[0], 3); // one-byte varint length
//!
//! // One-shot decode into a fresh, exactly-sized list.
//! let fresh: IntList<i32> = decode(&mut buf.as_slice()).unwrap();
//! assert_eq!(fresh, list);
//!
//! // Reuse-biased decode: the same list absorbs stream after stream
//! // without reallocating once its storage is large enough.
//! let reused = decode_into(&mut buf.as_slice(), Some(fresh), ResizePolicy::GrowOnly).unwrap();
//! assert_eq!(reused.as_slice(), &[1, 300, 70_000]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`list`] | `packlist-core` | [`list::IntList`], element and boxing traits, list errors |
//! | [`codec`] | `packlist-codec` | encode/decode, varint primitives, resize policies |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable integer lists and element traits (`packlist-core`).
pub use packlist_core as list;

/// Binary codec, varint primitives, and resize policies (`packlist-codec`).
pub use packlist_codec as codec;

/// Common imports for typical packlist usage.
///
/// ```rust
/// use packlist::prelude::*;
/// ```
pub mod prelude {
    pub use packlist_codec::{
        decode, decode_into, encode, encode_or_empty, CodecError, ResizePolicy,
    };
    pub use packlist_core::{FixedInt, IntList, ListError, ValueBox};
}
