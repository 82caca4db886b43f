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

//! Checked bit shifts by value.
//!
//! Shifts operate on the raw bit pattern and never saturate. The only
//! failure is a shift amount at or beyond the bit width of the type, which
//! is reported as `None` so callers can choose the result.

use core::ops::{Shl, Shr};

/// A trait for types that support checked left shift by value (no references).
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::checked_arithmetic::CheckedShlVal;
///
/// let a: u8 = 1;
/// assert_eq!(a.checked_shl_val(8), None); // Shift amount >= bit width
/// assert_eq!(a.checked_shl_val(3), Some(8));
/// assert_eq!(0x81u8.checked_shl_val(1), Some(0x02)); // Bits shifted out are lost
/// ```
pub trait CheckedShlVal: Sized + Shl<u32, Output = Self> {
    /// Performs checked left shift by value, returning `None` if `rhs` is
    /// at least the number of bits in the type.
    fn checked_shl_val(self, rhs: u32) -> Option<Self>;
}

/// A trait for types that support checked right shift by value (no references).
///
/// Signed types shift arithmetically, unsigned types logically.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::checked_arithmetic::CheckedShrVal;
///
/// assert_eq!(1u8.checked_shr_val(8), None);
/// assert_eq!((-16i8).checked_shr_val(2), Some(-4));
/// ```
pub trait CheckedShrVal: Sized + Shr<u32, Output = Self> {
    /// Performs checked right shift by value, returning `None` if `rhs` is
    /// at least the number of bits in the type.
    fn checked_shr_val(self, rhs: u32) -> Option<Self>;
}

macro_rules! checked_shift_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident, $($t:ty),*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, rhs: u32) -> Option<$t> {
                    <$t>::$src_method(self, rhs)
                }
            }
        )*
    };
}

checked_shift_impl_val!(CheckedShlVal, checked_shl_val, checked_shl, i8, u8, i16, u16, i32, u32, i64, u64);
checked_shift_impl_val!(CheckedShrVal, checked_shr_val, checked_shr, i8, u8, i16, u16, i32, u32, i64, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_shl_val_within_width() {
        assert_eq!(1i64.checked_shl_val(63), Some(i64::MIN));
        assert_eq!(0xFFFFu16.checked_shl_val(8), Some(0xFF00));
    }

    #[test]
    fn test_checked_shift_out_of_width() {
        assert_eq!(1u32.checked_shl_val(32), None);
        assert_eq!(1u32.checked_shr_val(32), None);
        assert_eq!((-1i8).checked_shr_val(200), None);
    }

    #[test]
    fn test_checked_shr_val_preserves_sign() {
        assert_eq!(i32::MIN.checked_shr_val(31), Some(-1));
        assert_eq!(u32::MAX.checked_shr_val(31), Some(1));
    }
}
