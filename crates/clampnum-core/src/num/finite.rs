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

//! # Finite-Value Guard
//!
//! Maps non-finite floating-point values onto the finite range of their type:
//! `+∞` becomes the largest finite value, `-∞` the smallest, and `NaN` zero.
//! Every clamped floating value passes through [`FiniteGuard::check`] when it
//! is created and after every arithmetic step, so the observable invariant
//! "always finite" holds end to end.
//!
//! The guard is idempotent: `x.check().check() == x.check()` for every input.
//! Integers and `Decimal` have no non-finite states; their impls are the
//! identity so generic wrappers can apply the guard unconditionally.

use crate::num::constants::{Extremes, Zero};
use rust_decimal::Decimal;

/// Sanitizes a value into the finite range of its type.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::finite::FiniteGuard;
///
/// assert_eq!(f64::INFINITY.check(), f64::MAX);
/// assert_eq!(f64::NEG_INFINITY.check(), f64::MIN);
/// assert_eq!(f32::NAN.check(), 0.0);
/// assert_eq!(1.5f32.check(), 1.5);
/// ```
pub trait FiniteGuard: Sized + Copy {
    /// Returns `self` unchanged when finite, otherwise the finite value it maps to.
    fn check(self) -> Self;
}

macro_rules! finite_guard_impl_float {
    ($($t:ty),*) => {
        $(
            impl FiniteGuard for $t {
                #[inline(always)]
                fn check(self) -> Self {
                    if self.is_finite() {
                        self
                    } else if self.is_nan() {
                        <$t as Zero>::ZERO
                    } else if self.is_sign_positive() {
                        <$t as Extremes>::MAX_VALUE
                    } else {
                        <$t as Extremes>::MIN_VALUE
                    }
                }
            }
        )*
    };
}

macro_rules! finite_guard_impl_identity {
    ($($t:ty),*) => {
        $(
            impl FiniteGuard for $t {
                #[inline(always)]
                fn check(self) -> Self {
                    self
                }
            }
        )*
    };
}

finite_guard_impl_float!(f32, f64);
finite_guard_impl_identity!(i8, u8, i16, u16, i32, u32, i64, u64, Decimal);
