//! Binary encode/decode for integer lists.
//!
//! The wire layout is a varint length prefix followed by the elements in
//! index order, each in fixed-width little-endian form. Decoding can
//! build a fresh list or reuse an existing one's storage under a
//! [`ResizePolicy`], which is what keeps allocation churn flat when the
//! same list is decoded into across many cycles.

use std::io::{self, Read, Write};

use packlist_core::{FixedInt, IntList};

use crate::error::CodecError;
use crate::varint::{read_uvarint, write_uvarint};

/// Widest element kind, in bytes. Sizes the stack buffer the element
/// primitives stage bytes through.
const MAX_ELEMENT_WIDTH: usize = 8;

/// How a decode reconciles an existing list's capacity against the
/// incoming length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Reallocate to exactly the incoming length whenever it differs from
    /// the current capacity, growing or shrinking.
    Exact,
    /// Reallocate only when the incoming length exceeds the current
    /// capacity; never shrink. Retains memory in exchange for avoided
    /// reallocation across repeated decodes into the same list.
    GrowOnly,
}

// ── Element primitives ──────────────────────────────────────────

/// Write one element in fixed-width little-endian form.
pub fn write_element<T: FixedInt>(w: &mut dyn Write, value: T) -> Result<(), CodecError> {
    let mut buf = [0u8; MAX_ELEMENT_WIDTH];
    value.put_le(&mut buf);
    w.write_all(&buf[..T::WIDTH])?;
    Ok(())
}

/// Read one fixed-width little-endian element.
pub fn read_element<T: FixedInt>(r: &mut dyn Read) -> Result<T, CodecError> {
    let mut buf = [0u8; MAX_ELEMENT_WIDTH];
    r.read_exact(&mut buf[..T::WIDTH]).map_err(|e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::Truncated {
                detail: format!("stream ended inside a {}-byte element", T::WIDTH),
            }
        } else {
            CodecError::Io(e)
        }
    })?;
    Ok(T::get_le(&buf))
}

// ── List encode ─────────────────────────────────────────────────

/// Encode `list` as a varint length followed by its elements in index
/// order.
///
/// Performs no heap allocation; bytes are staged through a stack buffer.
pub fn encode<T: FixedInt>(w: &mut dyn Write, list: &IntList<T>) -> Result<(), CodecError> {
    write_uvarint(w, list.len() as u64)?;
    for &value in list.as_slice() {
        write_element(w, value)?;
    }
    Ok(())
}

/// Encode a possibly-absent list.
///
/// An absent list is written identically to an empty one (a zero length).
/// Callers that must distinguish absent from empty need an out-of-band
/// marker; this codec does not provide one.
pub fn encode_or_empty<T: FixedInt>(
    w: &mut dyn Write,
    list: Option<&IntList<T>>,
) -> Result<(), CodecError> {
    match list {
        Some(list) => encode(w, list),
        None => {
            write_uvarint(w, 0)?;
            Ok(())
        }
    }
}

// ── List decode ─────────────────────────────────────────────────

/// Decode a fresh list, sized to exactly the declared length.
pub fn decode<T: FixedInt>(r: &mut dyn Read) -> Result<IntList<T>, CodecError> {
    let len = read_len(r)?;
    let mut list = IntList::with_capacity(len);
    read_elements(r, &mut list, len)?;
    Ok(list)
}

/// Decode into `existing` if present, reconciling its capacity against the
/// declared length per `policy`; decode a fresh exactly-sized list
/// otherwise. Returns the list with exactly the decoded elements.
pub fn decode_into<T: FixedInt>(
    r: &mut dyn Read,
    existing: Option<IntList<T>>,
    policy: ResizePolicy,
) -> Result<IntList<T>, CodecError> {
    let len = read_len(r)?;
    let mut list = match existing {
        Some(mut list) => {
            let resize = match policy {
                ResizePolicy::Exact => list.capacity() != len,
                ResizePolicy::GrowOnly => list.capacity() < len,
            };
            if resize {
                list.set_capacity(len);
            }
            list
        }
        None => IntList::with_capacity(len),
    };
    read_elements(r, &mut list, len)?;
    Ok(list)
}

/// Read the declared length, rejecting values this platform cannot
/// address.
fn read_len(r: &mut dyn Read) -> Result<usize, CodecError> {
    let len = read_uvarint(r)?;
    usize::try_from(len).map_err(|_| CodecError::LengthOverflow { len })
}

/// Overwrite the first `len` storage slots from the stream, then publish
/// the new length. Capacity must already be at least `len`.
fn read_elements<T: FixedInt>(
    r: &mut dyn Read,
    list: &mut IntList<T>,
    len: usize,
) -> Result<(), CodecError> {
    for slot in &mut list.storage_mut()[..len] {
        *slot = read_element(r)?;
    }
    list.set_len(len);
    Ok(())
}
