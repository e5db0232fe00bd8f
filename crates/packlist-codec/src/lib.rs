//! Compact binary codec for packlist integer lists.
//!
//! Encodes an [`IntList`](packlist_core::IntList) as a varint length
//! prefix followed by its elements, and decodes either into a fresh list
//! or into an existing one whose storage is reused across cycles. All
//! I/O goes through `std::io::{Read, Write}` (no serde dependency), so
//! tests use `Vec<u8>` / `&[u8]` and production code uses buffered files
//! or sockets.
//!
//! # Format
//!
//! ```text
//! [len: uvarint] [element_0: WIDTH bytes LE] ... [element_{len-1}]
//! ```
//!
//! No magic, no padding, no alignment. The length prefix uses 7 bits of
//! magnitude per byte with a continuation flag in the high bit; elements
//! are fixed-width little-endian. Within one encode or decode call,
//! elements are processed strictly in index order.
//!
//! # Capacity reconciliation
//!
//! [`decode_into`] accepts a [`ResizePolicy`] that decides how an
//! existing list's storage reacts to a stream of a different length:
//! [`ResizePolicy::Exact`] resizes to match exactly, while
//! [`ResizePolicy::GrowOnly`] only ever grows, the policy for message
//! buffers decoded into repeatedly in a tight loop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod varint;

pub use codec::{
    decode, decode_into, encode, encode_or_empty, read_element, write_element, ResizePolicy,
};
pub use error::CodecError;
pub use varint::{read_uvarint, uvarint_len, write_uvarint, MAX_UVARINT_BYTES};
