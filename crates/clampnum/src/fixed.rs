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

//! # Scaled Fixed-Point Values
//!
//! `Fixed<R>` stores a decimal quantity as a raw 64-bit integer equal to the
//! value times `10^6`. Addition, subtraction and remainder act on the raw
//! integers directly; multiplication and division go through the scaled
//! routines in `clampnum_core::fixed::scaled`, which carry the intermediate
//! exactly and saturate only the final result.
//!
//! The smallest step, [`Fixed::EPSILON`], is raw `1`, i.e. `0.000001`.

use crate::{bytes::ByteLayout, numeric::ClampedNumeric};
use clampnum_core::{
    Result,
    fixed::scaled::{self, MidpointRounding, SCALE, ScaledRaw},
    num::{
        constants::{Extremes, PlusOne, Zero},
        finite::FiniteGuard,
    },
};
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

/// Raw storage for [`Fixed`]: `i64` or `u64`.
pub trait FixedRaw: ScaledRaw + ClampedNumeric {}

impl<R> FixedRaw for R where R: ScaledRaw + ClampedNumeric {}

/// A decimal value with six implied fractional digits and saturating arithmetic.
///
/// # Examples
///
/// ```rust
/// # use clampnum::fixed::ClampedFixed;
///
/// let price = ClampedFixed::from_raw(2_500_000); // 2.5
/// let qty = ClampedFixed::from_int(4);
/// assert_eq!(price * qty, ClampedFixed::from_int(10));
/// assert_eq!((price / qty).to_string(), "0.625");
/// assert_eq!(ClampedFixed::MAX + ClampedFixed::EPSILON, ClampedFixed::MAX);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed<R>(R);

/// Signed scaled fixed-point value backed by an `i64`.
pub type ClampedFixed = Fixed<i64>;

/// Unsigned scaled fixed-point value backed by a `u64`.
pub type ClampedUFixed = Fixed<u64>;

impl<R> Fixed<R>
where
    R: FixedRaw,
{
    /// The smallest positive step (raw `1`).
    pub const EPSILON: Self = Self(<R as PlusOne>::PLUS_ONE);
    /// The smallest representable value.
    pub const MIN: Self = Self(<R as Extremes>::MIN_VALUE);
    /// The largest representable value.
    pub const MAX: Self = Self(<R as Extremes>::MAX_VALUE);
    /// Zero.
    pub const ZERO: Self = Self(<R as Zero>::ZERO);
    /// One (raw `SCALE`).
    pub const ONE: Self = Self(<R as ScaledRaw>::SCALE);

    /// Wraps a raw scaled integer.
    #[inline]
    pub const fn from_raw(raw: R) -> Self {
        Self(raw)
    }

    /// Returns the raw scaled integer.
    #[inline]
    pub fn raw(self) -> R {
        self.0
    }

    /// Converts a whole number, saturating when it is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clampnum::fixed::ClampedFixed;
    ///
    /// assert_eq!(ClampedFixed::from_int(-3).raw(), -3_000_000);
    /// assert_eq!(ClampedFixed::from_int(i64::MAX), ClampedFixed::MAX);
    /// ```
    #[inline]
    pub fn from_int(value: R) -> Self {
        Self(value.saturating_mul_val(<R as ScaledRaw>::SCALE))
    }

    /// Converts a float, rounding to the nearest step.
    ///
    /// Non-finite inputs pass through the finite guard first, so `+∞`
    /// saturates to `MAX`, `-∞` to `MIN` and `NaN` becomes zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clampnum::fixed::{ClampedFixed, ClampedUFixed};
    ///
    /// assert_eq!(ClampedFixed::from_f64(-1.25).raw(), -1_250_000);
    /// assert_eq!(ClampedFixed::from_f64(f64::INFINITY), ClampedFixed::MAX);
    /// assert_eq!(ClampedUFixed::from_f64(-7.0), ClampedUFixed::ZERO);
    /// ```
    pub fn from_f64(value: f64) -> Self {
        let scaled = (value.check() * SCALE as f64).round();
        Self(R::narrow_saturating(scaled as i128))
    }

    /// Returns the nearest `f64` to this value.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0.widen() as f64 / SCALE as f64
    }

    /// Rounds toward positive infinity to a whole number.
    #[inline]
    pub fn ceil(self) -> Self {
        Self(scaled::ceiling(self.0, <R as ScaledRaw>::SCALE))
    }

    /// Rounds toward negative infinity to a whole number.
    #[inline]
    pub fn floor(self) -> Self {
        Self(scaled::floor(self.0, <R as ScaledRaw>::SCALE))
    }

    /// Drops the fractional part.
    #[inline]
    pub fn trunc(self) -> Self {
        Self(scaled::truncate(self.0, <R as ScaledRaw>::SCALE))
    }

    /// Rounds to `digits` fractional digits using `mode`.
    ///
    /// Six or more digits is full precision and returns `self` unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `digits` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clampnum::fixed::ClampedFixed;
    /// # use clampnum_core::fixed::scaled::MidpointRounding;
    ///
    /// let x = ClampedFixed::from_raw(1_005_000); // 1.005
    /// assert_eq!(x.round(2, MidpointRounding::ToEven).unwrap().to_string(), "1");
    /// assert_eq!(x.round(2, MidpointRounding::AwayFromZero).unwrap().to_string(), "1.01");
    /// assert!(x.round(-2, MidpointRounding::ToEven).is_err());
    /// ```
    #[inline]
    pub fn round(self, digits: i32, mode: MidpointRounding) -> Result<Self> {
        scaled::round(self.0, digits, mode).map(Self)
    }

    /// Returns the absolute value; `MIN` of a signed raw type maps to `MAX`.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs_val())
    }

    /// Writes the 8 little-endian bytes of the raw integer into `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` is not exactly 8 bytes long.
    #[inline]
    pub fn write_le(self, out: &mut [u8]) -> Result<()> {
        self.0.write_le(out)
    }

    /// Reads a value from the 8 little-endian bytes of its raw integer.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not exactly 8 bytes long.
    #[inline]
    pub fn read_le(bytes: &[u8]) -> Result<Self> {
        <R as ByteLayout>::read_le(bytes).map(Self)
    }
}

impl<R> std::fmt::Display for Fixed<R>
where
    R: FixedRaw,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let wide = self.0.widen();
        let scale = SCALE.unsigned_abs() as u128;
        let magnitude = wide.unsigned_abs();
        let (whole, fraction) = (magnitude / scale, magnitude % scale);

        if wide < 0 {
            f.write_str("-")?;
        }
        if fraction == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{fraction:06}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl<R> std::fmt::Debug for Fixed<R>
where
    R: FixedRaw,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fixed({self})")
    }
}

macro_rules! fixed_binary_op {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident, |$a:ident, $b:ident| $body:expr) => {
        impl<R> $op_trait for Fixed<R>
        where
            R: FixedRaw,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                let ($a, $b) = (self.0, rhs.0);
                Self($body)
            }
        }

        impl<R> $assign_trait for Fixed<R>
        where
            R: FixedRaw,
        {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = $op_trait::$op(*self, rhs);
            }
        }
    };
}

fixed_binary_op!(Add, add, AddAssign, add_assign, |a, b| a.saturating_add_val(b));
fixed_binary_op!(Sub, sub, SubAssign, sub_assign, |a, b| a.saturating_sub_val(b));
fixed_binary_op!(Rem, rem, RemAssign, rem_assign, |a, b| a.saturating_rem_val(b));
fixed_binary_op!(Mul, mul, MulAssign, mul_assign, |a, b| scaled::scaled_multiply(
    a,
    b,
    <R as ScaledRaw>::SCALE
));
fixed_binary_op!(Div, div, DivAssign, div_assign, |a, b| scaled::scaled_divide(
    a,
    b,
    <R as ScaledRaw>::SCALE
));

impl<R> Neg for Fixed<R>
where
    R: FixedRaw,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.saturating_neg_val())
    }
}

impl<R> Sum for Fixed<R>
where
    R: FixedRaw,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fx(raw: i64) -> ClampedFixed {
        ClampedFixed::from_raw(raw)
    }

    #[test]
    fn test_constants() {
        assert_eq!(ClampedFixed::EPSILON.raw(), 1);
        assert_eq!(ClampedFixed::ONE.raw(), 1_000_000);
        assert_eq!(ClampedUFixed::ONE.raw(), 1_000_000);
        assert_eq!(ClampedFixed::MIN.raw(), i64::MIN);
        assert_eq!(ClampedUFixed::MIN.raw(), 0);
    }

    #[test]
    fn test_scaled_multiply_scenario() {
        assert_eq!(fx(2_500_000) * fx(4_000_000), fx(10_000_000));
        assert_eq!(fx(-2_500_000) * fx(4_000_000), fx(-10_000_000));
        assert_eq!(ClampedFixed::MAX * ClampedFixed::from_int(2), ClampedFixed::MAX);
        assert_eq!(ClampedFixed::MIN * ClampedFixed::from_int(2), ClampedFixed::MIN);
    }

    #[test]
    fn test_division() {
        assert_eq!(fx(10_000_000) / fx(4_000_000), fx(2_500_000));
        assert_eq!(ClampedFixed::ONE / ClampedFixed::from_int(3), fx(333_333));
        assert_eq!(ClampedFixed::ONE / ClampedFixed::ZERO, ClampedFixed::MAX);
        assert_eq!(-ClampedFixed::ONE / ClampedFixed::ZERO, ClampedFixed::MIN);
        assert_eq!(ClampedFixed::ZERO / ClampedFixed::ZERO, ClampedFixed::ZERO);
    }

    #[test]
    fn test_additive_saturation() {
        assert_eq!(ClampedFixed::MAX + ClampedFixed::EPSILON, ClampedFixed::MAX);
        assert_eq!(ClampedFixed::MIN - ClampedFixed::EPSILON, ClampedFixed::MIN);
        assert_eq!(ClampedUFixed::from_f64(1.5) - ClampedUFixed::from_int(2), ClampedUFixed::ZERO);
        assert_eq!(-ClampedFixed::MIN, ClampedFixed::MAX);
        assert_eq!(-ClampedUFixed::ONE, ClampedUFixed::ZERO);
    }

    #[test]
    fn test_remainder_keeps_dividend_sign() {
        assert_eq!(fx(-5_500_000) % fx(2_000_000), fx(-1_500_000));
        assert_eq!(fx(5_500_000) % ClampedFixed::ZERO, ClampedFixed::ZERO);
    }

    #[test]
    fn test_ceil_floor_trunc() {
        let x = fx(-1_250_000);
        assert_eq!(x.ceil(), ClampedFixed::from_int(-1));
        assert_eq!(x.floor(), ClampedFixed::from_int(-2));
        assert_eq!(x.trunc(), ClampedFixed::from_int(-1));
        assert_eq!(ClampedFixed::MAX.ceil(), ClampedFixed::MAX);
        assert_eq!(ClampedUFixed::from_f64(7.9).floor(), ClampedUFixed::from_int(7));
    }

    #[test]
    fn test_round_digits() {
        let x = fx(3_141_593);
        assert_eq!(x.round(2, MidpointRounding::ToEven), Ok(fx(3_140_000)));
        assert_eq!(x.round(4, MidpointRounding::ToPositiveInfinity), Ok(fx(3_141_600)));
        for digits in [6, 7, i32::MAX] {
            assert_eq!(x.round(digits, MidpointRounding::ToEven), Ok(x));
            assert_eq!(x.round(digits, MidpointRounding::AwayFromZero), Ok(x));
        }
        assert!(x.round(-1, MidpointRounding::ToEven).is_err());
    }

    #[test]
    fn test_float_conversion() {
        assert_eq!(ClampedFixed::from_f64(0.000_001), ClampedFixed::EPSILON);
        assert_eq!(ClampedFixed::from_f64(f64::NAN), ClampedFixed::ZERO);
        assert_eq!(ClampedFixed::from_f64(f64::NEG_INFINITY), ClampedFixed::MIN);
        assert_eq!(ClampedFixed::from_f64(1e300), ClampedFixed::MAX);
        assert_eq!(fx(-2_750_000).to_f64(), -2.75);
    }

    #[test]
    fn test_display() {
        assert_eq!(fx(10_000_000).to_string(), "10");
        assert_eq!(fx(-1_250_000).to_string(), "-1.25");
        assert_eq!(fx(1).to_string(), "0.000001");
        assert_eq!(fx(-1).to_string(), "-0.000001");
        assert_eq!(ClampedFixed::MIN.to_string(), "-9223372036854.775808");
        assert_eq!(ClampedUFixed::MAX.to_string(), "18446744073709.551615");
        assert_eq!(format!("{:?}", fx(500_000)), "Fixed(0.5)");
    }

    #[test]
    fn test_byte_layout_is_raw_integer() {
        let mut buf = [0u8; 8];
        fx(-2_500_000).write_le(&mut buf).unwrap();
        assert_eq!(buf, (-2_500_000i64).to_le_bytes());
        assert_eq!(ClampedFixed::read_le(&buf).unwrap(), fx(-2_500_000));
        assert!(ClampedFixed::read_le(&buf[..4]).is_err());
    }

    #[test]
    fn test_sum() {
        let total: ClampedFixed = [fx(1_500_000), fx(2_250_000), fx(-750_000)].into_iter().sum();
        assert_eq!(total, ClampedFixed::from_int(3));
    }

    proptest! {
        #[test]
        fn test_multiply_then_divide_round_trips(a in -1_000_000_000_000i64..1_000_000_000_000, k in 1i64..1_000) {
            let b = ClampedFixed::from_int(k);
            prop_assert_eq!((fx(a) * b) / b, fx(a));
        }

        #[test]
        fn test_unsigned_results_stay_in_range(a in any::<u64>(), b in any::<u64>()) {
            let (x, y) = (ClampedUFixed::from_raw(a), ClampedUFixed::from_raw(b));
            for r in [x + y, x - y, x * y, x / y, x % y, -x, x.ceil(), x.floor()] {
                prop_assert!(ClampedUFixed::MIN <= r && r <= ClampedUFixed::MAX);
            }
        }
    }
}
