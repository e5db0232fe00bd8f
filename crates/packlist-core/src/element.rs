//! Fixed-width integer element kinds and the boxed-value adapter.
//!
//! [`FixedInt`] is the closed set of element types an
//! [`IntList`](crate::IntList) can hold. Each kind knows its wire width
//! and its little-endian byte layout, so the codec never dispatches on a
//! runtime type tag.

use std::fmt::Debug;

mod sealed {
    /// Restricts [`FixedInt`](super::FixedInt) to the impls in this module.
    pub trait Sealed {}
}

/// A fixed-width integer that can live in an [`IntList`](crate::IntList)
/// and travel over the wire in little-endian form.
///
/// Sealed: the set of element kinds is closed. The width is a compile-time
/// constant, so list storage and codec buffers are sized without any
/// per-value bookkeeping.
pub trait FixedInt: Copy + Ord + Default + Debug + sealed::Sealed {
    /// Number of bytes this kind occupies on the wire.
    const WIDTH: usize;

    /// Write the little-endian representation into `buf[..Self::WIDTH]`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`Self::WIDTH`](FixedInt::WIDTH).
    fn put_le(self, buf: &mut [u8]);

    /// Read a value from the little-endian bytes in `buf[..Self::WIDTH]`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`Self::WIDTH`](FixedInt::WIDTH).
    fn get_le(buf: &[u8]) -> Self;
}

macro_rules! impl_fixed_int {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl FixedInt for $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();

            fn put_le(self, buf: &mut [u8]) {
                buf[..Self::WIDTH].copy_from_slice(&self.to_le_bytes());
            }

            fn get_le(buf: &[u8]) -> Self {
                let mut bytes = [0u8; std::mem::size_of::<$ty>()];
                bytes.copy_from_slice(&buf[..Self::WIDTH]);
                <$ty>::from_le_bytes(bytes)
            }
        }
    )*};
}

impl_fixed_int!(i8, i16, i32, i64, u8, u16, u32, u64);

/// Interop with callers that manipulate boxed values rather than raw
/// primitives.
///
/// Surrounding infrastructure that wraps element values (reusable message
/// holders, pooled cells) implements this to exchange values with an
/// [`IntList`](crate::IntList) without the list depending on the wrapper
/// machinery. The blanket impl covers the trivial case where the "box" is
/// the primitive itself.
pub trait ValueBox<T> {
    /// Extract the primitive value.
    fn get(&self) -> T;
    /// Overwrite the held value in place.
    fn set(&mut self, value: T);
}

impl<T: FixedInt> ValueBox<T> for T {
    fn get(&self) -> T {
        *self
    }

    fn set(&mut self, value: T) {
        *self = value;
    }
}
