// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Binary layout of clamped values.
//!
//! Every bounded integer and floating primitive is laid out as its native
//! fixed-width little-endian byte pattern. `Decimal` uses its 16-byte
//! serialized form. Wrappers add no framing: a `Clamped<T>` occupies exactly
//! the bytes of `T`, and a scaled fixed-point value exactly the 8 bytes of
//! its raw integer.

use clampnum_core::{ClampError, Decimal, Result};

/// Fixed-width little-endian encoding.
///
/// # Examples
///
/// ```rust
/// # use clampnum::bytes::ByteLayout;
///
/// let mut buf = [0u8; 2];
/// (-2i16).write_le(&mut buf).unwrap();
/// assert_eq!(buf, [0xFE, 0xFF]);
/// assert_eq!(i16::read_le(&buf).unwrap(), -2);
/// assert!(i16::read_le(&buf[..1]).is_err());
/// ```
pub trait ByteLayout: Sized + Copy {
    /// The exact number of bytes the value occupies.
    const WIDTH: usize;

    /// Writes the value into `out`, which must be exactly `WIDTH` bytes long.
    fn write_le(self, out: &mut [u8]) -> Result<()>;

    /// Reads a value from `bytes`, which must be exactly `WIDTH` bytes long.
    fn read_le(bytes: &[u8]) -> Result<Self>;
}

/// Fails unless `actual` matches `expected`.
#[inline]
pub(crate) fn ensure_width(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        tracing::debug!(expected, actual, "rejecting byte buffer of the wrong width");
        Err(ClampError::InvalidByteLength { expected, actual })
    }
}

macro_rules! byte_layout_impl {
    ($($t:ty),*) => {
        $(
            impl ByteLayout for $t {
                const WIDTH: usize = core::mem::size_of::<$t>();

                #[inline]
                fn write_le(self, out: &mut [u8]) -> Result<()> {
                    ensure_width(Self::WIDTH, out.len())?;
                    out.copy_from_slice(&self.to_le_bytes());
                    Ok(())
                }

                #[inline]
                fn read_le(bytes: &[u8]) -> Result<Self> {
                    let array = bytes.try_into().map_err(|_| ClampError::InvalidByteLength {
                        expected: Self::WIDTH,
                        actual: bytes.len(),
                    })?;
                    Ok(<$t>::from_le_bytes(array))
                }
            }
        )*
    };
}

byte_layout_impl!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl ByteLayout for Decimal {
    const WIDTH: usize = 16;

    fn write_le(self, out: &mut [u8]) -> Result<()> {
        ensure_width(Self::WIDTH, out.len())?;
        out.copy_from_slice(&self.serialize());
        Ok(())
    }

    fn read_le(bytes: &[u8]) -> Result<Self> {
        let array: [u8; 16] = bytes.try_into().map_err(|_| ClampError::InvalidByteLength {
            expected: Self::WIDTH,
            actual: bytes.len(),
        })?;
        Ok(Decimal::deserialize(array))
    }
}
