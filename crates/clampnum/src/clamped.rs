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

//! # Clamped Values
//!
//! `Clamped<T>` is a value type that behaves like the primitive `T` but never
//! overflows, underflows, or panics on arithmetic: every operator saturates
//! to `T`'s bounds. Floating values are additionally kept finite; `±∞` and
//! `NaN` are mapped to the extremes and zero when a value is created and
//! after every operation.
//!
//! Bitwise operators are only available for integer primitives. They act on
//! the raw bit pattern and are exact, so they never saturate.

use crate::numeric::ClampedNumeric;
use clampnum_core::{
    Decimal, Result,
    num::{
        constants::{Extremes, PlusOne, Zero},
        ops::checked_arithmetic::{CheckedShlVal, CheckedShrVal},
    },
};
use num_traits::PrimInt;
use std::{
    iter::{Product, Sum},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
        DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, Shr, Sub, SubAssign,
    },
};

/// A numeric value whose arithmetic saturates at the bounds of `T`.
///
/// # Examples
///
/// ```rust
/// # use clampnum::clamped::{ClampedF64, ClampedI8, ClampedU32};
///
/// let a = ClampedI8::new(120);
/// let b = ClampedI8::new(50);
/// assert_eq!((a + b).get(), 127);
/// assert_eq!((-a - b).get(), -128);
///
/// assert_eq!((ClampedU32::new(3) - ClampedU32::new(5)).get(), 0);
///
/// let inf = ClampedF64::new(f64::INFINITY);
/// assert_eq!(inf.get(), f64::MAX);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Clamped<T>(T);

pub type ClampedI8 = Clamped<i8>;
pub type ClampedU8 = Clamped<u8>;
pub type ClampedI16 = Clamped<i16>;
pub type ClampedU16 = Clamped<u16>;
pub type ClampedI32 = Clamped<i32>;
pub type ClampedU32 = Clamped<u32>;
pub type ClampedI64 = Clamped<i64>;
pub type ClampedU64 = Clamped<u64>;
pub type ClampedF32 = Clamped<f32>;
pub type ClampedF64 = Clamped<f64>;
pub type ClampedDecimal = Clamped<Decimal>;

impl<T> Clamped<T>
where
    T: ClampedNumeric,
{
    /// The smallest representable value.
    pub const MIN: Self = Self(<T as Extremes>::MIN_VALUE);
    /// The largest representable value.
    pub const MAX: Self = Self(<T as Extremes>::MAX_VALUE);
    /// Zero.
    pub const ZERO: Self = Self(<T as Zero>::ZERO);
    /// One.
    pub const ONE: Self = Self(<T as PlusOne>::PLUS_ONE);

    /// Creates a clamped value, mapping non-finite floats into range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clampnum::clamped::ClampedF32;
    ///
    /// assert_eq!(ClampedF32::new(f32::NEG_INFINITY).get(), f32::MIN);
    /// assert_eq!(ClampedF32::new(f32::NAN).get(), 0.0);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self(value.check())
    }

    /// Returns the underlying primitive.
    #[inline]
    pub fn get(self) -> T {
        self.0
    }

    /// Raises `self` to the power `exp`, saturating on overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use clampnum::clamped::ClampedI32;
    ///
    /// assert_eq!(ClampedI32::new(2).pow(10).get(), 1024);
    /// assert_eq!(ClampedI32::new(2).pow(40), ClampedI32::MAX);
    /// ```
    #[inline]
    pub fn pow(self, exp: i32) -> Self {
        Self(self.0.saturating_pow_val(exp))
    }

    /// Returns the absolute value; `MIN` of a signed type maps to `MAX`.
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs_val())
    }

    /// Returns the smaller of `self` and `other`.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Returns the larger of `self` and `other`.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Writes the native little-endian bytes of the value into `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if `out` is not exactly as wide as `T`.
    #[inline]
    pub fn write_le(self, out: &mut [u8]) -> Result<()> {
        self.0.write_le(out)
    }

    /// Reads a value from native little-endian bytes, applying the finite guard.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is not exactly as wide as `T`.
    #[inline]
    pub fn read_le(bytes: &[u8]) -> Result<Self> {
        T::read_le(bytes).map(Self::new)
    }
}

impl<T> From<T> for Clamped<T>
where
    T: ClampedNumeric,
{
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> std::fmt::Debug for Clamped<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Clamped({:?})", self.0)
    }
}

impl<T> std::fmt::Display for Clamped<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! clamped_binary_op {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident, $method:ident) => {
        impl<T> $op_trait for Clamped<T>
        where
            T: ClampedNumeric,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self(self.0.$method(rhs.0))
            }
        }

        impl<T> $assign_trait for Clamped<T>
        where
            T: ClampedNumeric,
        {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = $op_trait::$op(*self, rhs);
            }
        }
    };
}

clamped_binary_op!(Add, add, AddAssign, add_assign, saturating_add_val);
clamped_binary_op!(Sub, sub, SubAssign, sub_assign, saturating_sub_val);
clamped_binary_op!(Mul, mul, MulAssign, mul_assign, saturating_mul_val);
clamped_binary_op!(Div, div, DivAssign, div_assign, saturating_div_val);
clamped_binary_op!(Rem, rem, RemAssign, rem_assign, saturating_rem_val);

impl<T> Neg for Clamped<T>
where
    T: ClampedNumeric,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.saturating_neg_val())
    }
}

impl<T> Sum for Clamped<T>
where
    T: ClampedNumeric,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<T> Product for Clamped<T>
where
    T: ClampedNumeric,
{
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

macro_rules! clamped_bitwise_op {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident) => {
        impl<T> $op_trait for Clamped<T>
        where
            T: ClampedNumeric + PrimInt,
        {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                Self($op_trait::$op(self.0, rhs.0))
            }
        }

        impl<T> $assign_trait for Clamped<T>
        where
            T: ClampedNumeric + PrimInt,
        {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                *self = $op_trait::$op(*self, rhs);
            }
        }
    };
}

clamped_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign);
clamped_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign);
clamped_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign);

impl<T> Not for Clamped<T>
where
    T: ClampedNumeric + PrimInt,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

// Shifting by the full width or more moves every bit out: left shifts
// leave zero, right shifts leave the sign fill.
impl<T> Shl<u32> for Clamped<T>
where
    T: ClampedNumeric + PrimInt + CheckedShlVal,
{
    type Output = Self;

    #[inline]
    fn shl(self, rhs: u32) -> Self {
        Self(self.0.checked_shl_val(rhs).unwrap_or_else(T::zero))
    }
}

impl<T> Shr<u32> for Clamped<T>
where
    T: ClampedNumeric + PrimInt + CheckedShrVal,
{
    type Output = Self;

    #[inline]
    fn shr(self, rhs: u32) -> Self {
        Self(self.0.checked_shr_val(rhs).unwrap_or_else(|| {
            if self.0 < T::zero() { !T::zero() } else { T::zero() }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_constants() {
        assert_eq!(ClampedI8::MIN.get(), i8::MIN);
        assert_eq!(ClampedU16::MAX.get(), u16::MAX);
        assert_eq!(ClampedF64::ZERO.get(), 0.0);
        assert_eq!(ClampedDecimal::ONE.get(), Decimal::ONE);
    }

    #[test]
    fn test_signed_saturation_scenarios() {
        assert_eq!(ClampedI8::new(120) + ClampedI8::new(50), ClampedI8::MAX);
        assert_eq!(ClampedI8::new(-120) + ClampedI8::new(-50), ClampedI8::MIN);
        assert_eq!(ClampedI8::MAX + ClampedI8::ONE, ClampedI8::MAX);
        assert_eq!(ClampedI8::MIN - ClampedI8::ONE, ClampedI8::MIN);
        assert_eq!(-ClampedI8::MIN, ClampedI8::MAX);
        assert_eq!(ClampedI64::MIN / ClampedI64::new(-1), ClampedI64::MAX);
    }

    #[test]
    fn test_unsigned_negation_is_zero() {
        assert_eq!(-ClampedU8::new(5), ClampedU8::ZERO);
        assert_eq!(-ClampedU64::MAX, ClampedU64::ZERO);
        assert_eq!(-ClampedU32::ZERO, ClampedU32::ZERO);
    }

    #[test]
    fn test_assign_operators() {
        let mut x = ClampedU8::new(200);
        x += ClampedU8::new(100);
        assert_eq!(x, ClampedU8::MAX);
        x -= ClampedU8::new(255);
        assert_eq!(x, ClampedU8::ZERO);
        x -= ClampedU8::ONE;
        assert_eq!(x, ClampedU8::ZERO);

        let mut y = ClampedI32::new(7);
        y %= ClampedI32::new(-4);
        assert_eq!(y.get(), 3);
        y *= ClampedI32::MAX;
        assert_eq!(y, ClampedI32::MAX);
        y /= ClampedI32::ZERO;
        assert_eq!(y, ClampedI32::MAX);
    }

    #[test]
    fn test_float_values_stay_finite() {
        let big = ClampedF32::MAX;
        assert_eq!(big + big, ClampedF32::MAX);
        assert_eq!(-big - big, ClampedF32::MIN);
        assert_eq!(ClampedF64::new(1.0) / ClampedF64::ZERO, ClampedF64::MAX);
        assert_eq!(ClampedF64::ZERO / ClampedF64::ZERO, ClampedF64::ZERO);
        assert_eq!(ClampedF64::new(f64::NAN), ClampedF64::ZERO);
    }

    #[test]
    fn test_decimal_saturates() {
        let max = ClampedDecimal::MAX;
        assert_eq!(max + ClampedDecimal::ONE, max);
        assert_eq!(max * -max, ClampedDecimal::MIN);
        assert_eq!(ClampedDecimal::ONE / ClampedDecimal::ZERO, max);
    }

    #[test]
    fn test_bitwise_is_exact() {
        let a = ClampedU8::new(0b1100_1010);
        let b = ClampedU8::new(0b1010_0110);
        assert_eq!((a & b).get(), 0b1000_0010);
        assert_eq!((a | b).get(), 0b1110_1110);
        assert_eq!((a ^ b).get(), 0b0110_1100);
        assert_eq!((!a).get(), 0b0011_0101);
        assert_eq!((a << 1).get(), 0b1001_0100);
        assert_eq!((a >> 4).get(), 0b0000_1100);
        assert_eq!((!ClampedI8::ZERO).get(), -1);
    }

    #[test]
    fn test_shift_out_of_width() {
        assert_eq!(ClampedU32::new(1) << 32, ClampedU32::ZERO);
        assert_eq!(ClampedU32::MAX >> 40, ClampedU32::ZERO);
        assert_eq!(ClampedI16::new(-5) >> 16, ClampedI16::new(-1));
        assert_eq!(ClampedI16::new(5) >> 16, ClampedI16::ZERO);
    }

    #[test]
    fn test_sum_and_product_saturate() {
        let total: ClampedI16 = [30_000, 30_000, -5].into_iter().map(ClampedI16::new).sum();
        assert_eq!(total, ClampedI16::new(i16::MAX - 5));
        let product: ClampedU8 = (1..=6).map(ClampedU8::new).product();
        assert_eq!(product, ClampedU8::MAX);
    }

    #[test]
    fn test_min_max_abs() {
        assert_eq!(ClampedI8::new(3).min(ClampedI8::new(-3)).get(), -3);
        assert_eq!(ClampedF64::new(0.5).max(ClampedF64::new(0.25)).get(), 0.5);
        assert_eq!(ClampedI8::MIN.abs(), ClampedI8::MAX);
    }

    #[test]
    fn test_byte_layout_round_trip() {
        let mut buf = [0u8; 8];
        ClampedI64::new(-42).write_le(&mut buf).unwrap();
        assert_eq!(buf, (-42i64).to_le_bytes());
        assert_eq!(ClampedI64::read_le(&buf).unwrap(), ClampedI64::new(-42));
    }

    #[test]
    fn test_read_le_guards_non_finite_floats() {
        let bytes = f64::NEG_INFINITY.to_le_bytes();
        assert_eq!(ClampedF64::read_le(&bytes).unwrap(), ClampedF64::MIN);
        let bytes = f32::NAN.to_le_bytes();
        assert_eq!(ClampedF32::read_le(&bytes).unwrap(), ClampedF32::ZERO);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format!("{}", ClampedI32::new(-17)), "-17");
        assert_eq!(format!("{:?}", ClampedU8::new(9)), "Clamped(9)");
    }

    proptest! {
        #[test]
        fn test_operators_match_widened_reference(a in any::<i16>(), b in any::<i16>(), exp in -3i32..40) {
            let (x, y) = (ClampedI16::new(a), ClampedI16::new(b));
            let (wa, wb) = (i32::from(a), i32::from(b));
            let clamp = |v: i32| ClampedI16::new(v.clamp(i16::MIN.into(), i16::MAX.into()) as i16);

            prop_assert_eq!(x + y, clamp(wa + wb));
            prop_assert_eq!(x - y, clamp(wa - wb));
            prop_assert_eq!(x * y, clamp(wa * wb));
            prop_assert_eq!(-x, clamp(-wa));
            prop_assert_eq!(x.abs(), clamp(wa.abs()));
            if b == 0 {
                let saturated = match a.signum() {
                    1 => ClampedI16::MAX,
                    -1 => ClampedI16::MIN,
                    _ => ClampedI16::ZERO,
                };
                prop_assert_eq!(x / y, saturated);
                prop_assert_eq!(x % y, ClampedI16::ZERO);
            } else {
                prop_assert_eq!(x / y, clamp(wa / wb));
                prop_assert_eq!(x % y, clamp(wa % wb));
            }

            let expected_pow = if exp < 0 {
                match a {
                    0 => ClampedI16::MAX,
                    1 => ClampedI16::ONE,
                    -1 => ClampedI16::new(if exp % 2 == 0 { 1 } else { -1 }),
                    _ => ClampedI16::ZERO,
                }
            } else {
                match i128::from(a).checked_pow(exp.unsigned_abs()) {
                    Some(p) => ClampedI16::new(p.clamp(i16::MIN.into(), i16::MAX.into()) as i16),
                    None if a < 0 && exp % 2 == 1 => ClampedI16::MIN,
                    None => ClampedI16::MAX,
                }
            };
            prop_assert_eq!(x.pow(exp), expected_pow);
        }

        #[test]
        fn test_float_operators_stay_finite(a in any::<f64>(), b in any::<f64>()) {
            let (x, y) = (ClampedF64::new(a), ClampedF64::new(b));
            for r in [x + y, x - y, x * y, x / y, x % y, -x, x.pow(7)] {
                prop_assert!(r.get().is_finite());
            }
        }
    }
}
