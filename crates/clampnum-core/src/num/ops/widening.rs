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

//! # Widened Saturation Engine
//!
//! The saturation algorithm for the eight bounded integer shapes
//! (`i8`/`u8` through `i64`/`u64`), written once. Every operand is widened
//! losslessly into `i128`, the exact mathematical result is computed there,
//! and the result is narrowed back with [`Widen::narrow_saturating`], which
//! clamps into `[MIN, MAX]` of the target shape.
//!
//! `i128` holds every sum, difference, quotient and remainder of two 64-bit
//! operands exactly. Products of two `u64` values can exceed `i128::MAX`, so
//! multiplication falls back to the sign of the product when the wide
//! multiply itself reports overflow.
//!
//! Division by zero saturates by the sign of the dividend: a positive
//! dividend yields `MAX`, a negative one `MIN`, and `0 / 0` yields `0`. This
//! mirrors what IEEE-754 division followed by the finite guard produces for
//! floating types. A remainder by zero is `0`.

use num_traits::PrimInt;

/// Magnitude above which every integer power saturates for every shape.
const POW_MAGNITUDE_CAP: u128 = 1 << 64;

/// Lossless widening into `i128` and saturating narrowing back.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::widening::Widen;
///
/// assert_eq!(200u8.widen(), 200i128);
/// assert_eq!(u8::narrow_saturating(300), 255);
/// assert_eq!(i8::narrow_saturating(-300), -128);
/// assert_eq!(u32::narrow_saturating(-1), 0);
/// ```
pub trait Widen: PrimInt {
    /// The smallest value of the shape, widened.
    const WIDE_MIN: i128;
    /// The largest value of the shape, widened.
    const WIDE_MAX: i128;

    /// Widens `self` into `i128` without loss.
    fn widen(self) -> i128;

    /// Narrows `wide` into the shape, clamping to its bounds.
    fn narrow_saturating(wide: i128) -> Self;
}

macro_rules! widen_impl {
    ($($t:ty),*) => {
        $(
            impl Widen for $t {
                const WIDE_MIN: i128 = <$t>::MIN as i128;
                const WIDE_MAX: i128 = <$t>::MAX as i128;

                #[inline(always)]
                fn widen(self) -> i128 {
                    self as i128
                }

                #[inline(always)]
                fn narrow_saturating(wide: i128) -> Self {
                    if wide > Self::WIDE_MAX {
                        <$t>::MAX
                    } else if wide < Self::WIDE_MIN {
                        <$t>::MIN
                    } else {
                        wide as $t
                    }
                }
            }
        )*
    };
}

widen_impl!(i8, u8, i16, u16, i32, u32, i64, u64);

/// Returns `MAX` for a positive sign, `MIN` for a negative one and zero otherwise.
#[inline(always)]
pub fn saturate_by_sign<T: Widen>(sign: i128) -> T {
    match sign.signum() {
        1 => T::max_value(),
        -1 => T::min_value(),
        _ => T::zero(),
    }
}

/// Narrows a result given as sign and magnitude, clamping to the bounds of `T`.
#[inline]
pub fn narrow_magnitude<T: Widen>(negative: bool, magnitude: u128) -> T {
    match i128::try_from(magnitude) {
        Ok(m) => T::narrow_saturating(if negative { -m } else { m }),
        Err(_) if negative => T::min_value(),
        Err(_) => T::max_value(),
    }
}

/// Saturating `a + b`.
#[inline(always)]
pub fn add<T: Widen>(a: T, b: T) -> T {
    T::narrow_saturating(a.widen() + b.widen())
}

/// Saturating `a - b`.
#[inline(always)]
pub fn sub<T: Widen>(a: T, b: T) -> T {
    T::narrow_saturating(a.widen() - b.widen())
}

/// Saturating `a * b`.
#[inline(always)]
pub fn mul<T: Widen>(a: T, b: T) -> T {
    let (wa, wb) = (a.widen(), b.widen());
    match wa.checked_mul(wb) {
        Some(product) => T::narrow_saturating(product),
        None => saturate_by_sign(wa.signum() * wb.signum()),
    }
}

/// Saturating `a / b`, truncating toward zero.
#[inline]
pub fn div<T: Widen>(a: T, b: T) -> T {
    if b.is_zero() {
        tracing::trace!(dividend = %a.widen(), "integer division by zero saturated");
        return saturate_by_sign(a.widen());
    }
    T::narrow_saturating(a.widen() / b.widen())
}

/// Remainder of truncating division; takes the sign of `a`.
#[inline]
pub fn rem<T: Widen>(a: T, b: T) -> T {
    if b.is_zero() {
        return T::zero();
    }
    T::narrow_saturating(a.widen() % b.widen())
}

/// Saturating `-a`. Any nonzero unsigned value negates to zero.
#[inline(always)]
pub fn neg<T: Widen>(a: T) -> T {
    T::narrow_saturating(-a.widen())
}

/// Saturating `|a|`.
#[inline(always)]
pub fn abs<T: Widen>(a: T) -> T {
    T::narrow_saturating(a.widen().abs())
}

/// Saturating `base ^ exp`.
///
/// Negative exponents follow truncating integer division: `1` and `-1` keep
/// their magnitude, `0` is a division by zero and saturates to `MAX`, and any
/// other base truncates to `0`. Positive exponents use square-and-multiply on
/// the magnitude and stop as soon as the result is known to saturate.
pub fn pow<T: Widen>(base: T, exp: i32) -> T {
    let wide = base.widen();
    let odd = exp & 1 == 1;

    if exp < 0 {
        return match wide {
            0 => saturate_by_sign(1),
            1 => T::one(),
            -1 => T::narrow_saturating(if odd { -1 } else { 1 }),
            _ => T::zero(),
        };
    }

    let negative = wide < 0 && odd;
    let mut factor = wide.unsigned_abs();
    let mut magnitude: u128 = 1;
    let mut remaining = exp.unsigned_abs();

    while remaining > 0 {
        if remaining & 1 == 1 {
            magnitude = magnitude.saturating_mul(factor).min(POW_MAGNITUDE_CAP + 1);
            if magnitude > POW_MAGNITUDE_CAP {
                break;
            }
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = factor.saturating_mul(factor).min(POW_MAGNITUDE_CAP + 1);
        }
    }

    narrow_magnitude(negative, magnitude)
}
