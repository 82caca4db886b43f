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

use crate::num::{
    constants::{Extremes, PlusOne, Zero},
    finite::FiniteGuard,
    ops::widening,
};
use core::ops::{Add, Div, Mul, Rem, Sub};
use rust_decimal::Decimal;

macro_rules! saturating_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_fn:path) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                $src_fn(self, v)
            }
        }
    };
}

macro_rules! saturating_impl_unary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_fn:path) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> Self {
                $src_fn(self)
            }
        }
    };
}

macro_rules! saturating_impl_integers {
    ($($t:ty),*) => {
        $(
            saturating_impl_binary_val!(SaturatingAddVal, saturating_add_val, $t, widening::add);
            saturating_impl_binary_val!(SaturatingSubVal, saturating_sub_val, $t, widening::sub);
            saturating_impl_binary_val!(SaturatingMulVal, saturating_mul_val, $t, widening::mul);
            saturating_impl_binary_val!(SaturatingDivVal, saturating_div_val, $t, widening::div);
            saturating_impl_binary_val!(SaturatingRemVal, saturating_rem_val, $t, widening::rem);
            saturating_impl_unary_val!(SaturatingNegVal, saturating_neg_val, $t, widening::neg);
            saturating_impl_unary_val!(SaturatingAbsVal, saturating_abs_val, $t, widening::abs);

            impl SaturatingPowVal for $t {
                #[inline]
                fn saturating_pow_val(self, exp: i32) -> Self {
                    widening::pow(self, exp)
                }
            }
        )*
    };
}

// IEEE-754 arithmetic never wraps; overflow shows up as an infinity and
// invalid operations as NaN, both of which the guard maps back into range.
macro_rules! saturating_impl_floats {
    ($($t:ty),*) => {
        $(
            impl SaturatingAddVal for $t {
                #[inline(always)]
                fn saturating_add_val(self, v: Self) -> Self {
                    (self + v).check()
                }
            }

            impl SaturatingSubVal for $t {
                #[inline(always)]
                fn saturating_sub_val(self, v: Self) -> Self {
                    (self - v).check()
                }
            }

            impl SaturatingMulVal for $t {
                #[inline(always)]
                fn saturating_mul_val(self, v: Self) -> Self {
                    (self * v).check()
                }
            }

            impl SaturatingDivVal for $t {
                #[inline(always)]
                fn saturating_div_val(self, v: Self) -> Self {
                    (self / v).check()
                }
            }

            impl SaturatingRemVal for $t {
                #[inline(always)]
                fn saturating_rem_val(self, v: Self) -> Self {
                    (self % v).check()
                }
            }

            impl SaturatingNegVal for $t {
                #[inline(always)]
                fn saturating_neg_val(self) -> Self {
                    (-self).check()
                }
            }

            impl SaturatingAbsVal for $t {
                #[inline(always)]
                fn saturating_abs_val(self) -> Self {
                    self.abs().check()
                }
            }

            impl SaturatingPowVal for $t {
                #[inline(always)]
                fn saturating_pow_val(self, exp: i32) -> Self {
                    self.powi(exp).check()
                }
            }
        )*
    };
}

/// Saturating addition by value (no references).
///
/// The result is clamped to the bounds of the type instead of wrapping.
/// For floating types an infinite sum becomes the largest finite value of
/// the matching sign.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingAddVal;
///
/// let x: i8 = 120;
/// let y: i8 = 50;
/// assert_eq!(x.saturating_add_val(y), 127); // Clamps at i8::MAX
///
/// let m: i8 = -120;
/// let n: i8 = -50;
/// assert_eq!(m.saturating_add_val(n), -128); // Clamps at i8::MIN
///
/// assert_eq!(f64::MAX.saturating_add_val(f64::MAX), f64::MAX);
/// ```
pub trait SaturatingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs saturating addition by value.
    fn saturating_add_val(self, v: Self) -> Self;
}

/// Saturating subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingSubVal;
///
/// let a: u8 = 5;
/// let b: u8 = 10;
/// assert_eq!(a.saturating_sub_val(b), 0); // Clamps at u8::MIN
///
/// let x: i8 = -128;
/// assert_eq!(x.saturating_sub_val(1), -128);
/// ```
pub trait SaturatingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs saturating subtraction by value.
    fn saturating_sub_val(self, v: Self) -> Self;
}

/// Saturating multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingMulVal;
///
/// let x: i8 = 30;
/// let y: i8 = 10;
/// assert_eq!(x.saturating_mul_val(y), 127); // 300 -> clamps at i8::MAX
///
/// let m: i8 = -30;
/// assert_eq!(m.saturating_mul_val(y), -128); // -300 -> clamps at i8::MIN
///
/// assert_eq!(u64::MAX.saturating_mul_val(u64::MAX), u64::MAX);
/// ```
pub trait SaturatingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs saturating multiplication by value.
    fn saturating_mul_val(self, v: Self) -> Self;
}

/// Saturating division by value (no references).
///
/// Integer division truncates toward zero. Dividing by zero saturates by the
/// sign of the dividend: positive to `MAX`, negative to `MIN`, zero to zero.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingDivVal;
///
/// assert_eq!((-7i32).saturating_div_val(2), -3);
/// assert_eq!(i8::MIN.saturating_div_val(-1), 127);
/// assert_eq!(10u16.saturating_div_val(0), u16::MAX);
/// assert_eq!((-1.0f32).saturating_div_val(0.0), f32::MIN);
/// ```
pub trait SaturatingDivVal: Sized + Div<Self, Output = Self> {
    /// Performs saturating division by value.
    fn saturating_div_val(self, v: Self) -> Self;
}

/// Saturating remainder by value (no references).
///
/// The remainder takes the sign of the dividend. Its magnitude never exceeds
/// the divisor's, so no clamping is ever needed; a zero divisor yields zero.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingRemVal;
///
/// assert_eq!((-7i32).saturating_rem_val(3), -1);
/// assert_eq!(7i32.saturating_rem_val(-3), 1);
/// assert_eq!(7u8.saturating_rem_val(0), 0);
/// ```
pub trait SaturatingRemVal: Sized + Rem<Self, Output = Self> {
    /// Performs saturating remainder by value.
    fn saturating_rem_val(self, v: Self) -> Self;
}

/// Saturating negation by value (no references).
///
/// For signed integers, negating the minimum clamps to the maximum. Unsigned
/// integers have no negative values, so any nonzero value negates to zero.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingNegVal;
///
/// assert_eq!(100i8.saturating_neg_val(), -100);
/// assert_eq!((-128i8).saturating_neg_val(), 127); // Clamps to i8::MAX
/// assert_eq!(42u32.saturating_neg_val(), 0);
/// ```
pub trait SaturatingNegVal: Sized {
    /// Performs saturating negation by value.
    fn saturating_neg_val(self) -> Self;
}

/// Saturating absolute value by value (no references).
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingAbsVal;
///
/// assert_eq!((-128i8).saturating_abs_val(), 127);
/// assert_eq!((-2.5f64).saturating_abs_val(), 2.5);
/// ```
pub trait SaturatingAbsVal: Sized {
    /// Computes the saturating absolute value.
    fn saturating_abs_val(self) -> Self;
}

/// Saturating exponentiation by value (no references).
///
/// `x^0 == 1` for every `x`. Large exponents saturate early instead of
/// building an unbounded intermediate.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::ops::saturating_arithmetic::SaturatingPowVal;
///
/// assert_eq!(3i16.saturating_pow_val(4), 81);
/// assert_eq!(10i16.saturating_pow_val(5), i16::MAX);
/// assert_eq!((-10i16).saturating_pow_val(5), i16::MIN);
/// assert_eq!(2u8.saturating_pow_val(-1), 0);
/// assert_eq!(10.0f32.saturating_pow_val(100), f32::MAX);
/// ```
pub trait SaturatingPowVal: Sized {
    /// Raises `self` to the power `exp`, saturating on overflow.
    fn saturating_pow_val(self, exp: i32) -> Self;
}

saturating_impl_integers!(i8, u8, i16, u16, i32, u32, i64, u64);
saturating_impl_floats!(f32, f64);

/// Saturation target for an overflowed decimal result of the given sign.
#[inline(always)]
fn decimal_saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN_VALUE
    } else {
        Decimal::MAX_VALUE
    }
}

// `Decimal` reports overflow through its checked operations; the sign of a
// sum or difference that overflows is the sign of its dominant operand.
impl SaturatingAddVal for Decimal {
    #[inline]
    fn saturating_add_val(self, v: Self) -> Self {
        self.checked_add(v)
            .unwrap_or_else(|| decimal_saturated(self.is_sign_negative()))
    }
}

impl SaturatingSubVal for Decimal {
    #[inline]
    fn saturating_sub_val(self, v: Self) -> Self {
        self.checked_sub(v)
            .unwrap_or_else(|| decimal_saturated(self.is_sign_negative()))
    }
}

impl SaturatingMulVal for Decimal {
    #[inline]
    fn saturating_mul_val(self, v: Self) -> Self {
        self.checked_mul(v).unwrap_or_else(|| {
            decimal_saturated(self.is_sign_negative() != v.is_sign_negative())
        })
    }
}

impl SaturatingDivVal for Decimal {
    #[inline]
    fn saturating_div_val(self, v: Self) -> Self {
        if v.is_zero() {
            tracing::trace!(dividend = %self, "decimal division by zero saturated");
            return if self.is_zero() {
                Decimal::ZERO
            } else {
                decimal_saturated(self.is_sign_negative())
            };
        }
        self.checked_div(v).unwrap_or_else(|| {
            decimal_saturated(self.is_sign_negative() != v.is_sign_negative())
        })
    }
}

impl SaturatingRemVal for Decimal {
    #[inline]
    fn saturating_rem_val(self, v: Self) -> Self {
        self.checked_rem(v).unwrap_or(Decimal::ZERO)
    }
}

impl SaturatingNegVal for Decimal {
    #[inline(always)]
    fn saturating_neg_val(self) -> Self {
        -self
    }
}

impl SaturatingAbsVal for Decimal {
    #[inline(always)]
    fn saturating_abs_val(self) -> Self {
        self.abs()
    }
}

impl SaturatingPowVal for Decimal {
    fn saturating_pow_val(self, exp: i32) -> Self {
        let negative = self.is_sign_negative() && exp & 1 == 1;
        let mut factor = self.abs();
        let mut magnitude = <Decimal as PlusOne>::PLUS_ONE;
        let mut remaining = exp.unsigned_abs();
        let mut saturated = false;

        while remaining > 0 {
            if remaining & 1 == 1 {
                match magnitude.checked_mul(factor) {
                    Some(m) => magnitude = m,
                    None => {
                        saturated = true;
                        break;
                    }
                }
            }
            remaining >>= 1;
            if remaining > 0 {
                match factor.checked_mul(factor) {
                    Some(f) => factor = f,
                    None => {
                        saturated = true;
                        break;
                    }
                }
            }
        }

        if exp < 0 {
            if self.is_zero() {
                return decimal_saturated(false);
            }
            if saturated {
                return <Decimal as Zero>::ZERO;
            }
            let reciprocal = <Decimal as PlusOne>::PLUS_ONE.saturating_div_val(magnitude);
            return if negative { -reciprocal } else { reciprocal };
        }

        if saturated {
            decimal_saturated(negative)
        } else if negative {
            -magnitude
        } else {
            magnitude
        }
    }
}
