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

//! # Clamped Numeric Trait
//!
//! `ClampedNumeric` collects every capability a primitive needs to back a
//! [`Clamped`](crate::clamped::Clamped) value: bounds and identity
//! constants, the finite-value guard, the by-value saturating operations
//! from `clampnum_core`, and a fixed-width byte layout. It is implemented
//! automatically for every type that satisfies the bounds, which today are
//! the eight integer shapes `i8` through `u64`, `f32`, `f64` and `Decimal`.
//!
//! Generic code bounds on this one trait instead of repeating the full list,
//! and every method it offers returns `Self`, so results stay in the same
//! clamped type without any runtime lookup.

use crate::bytes::ByteLayout;
use clampnum_core::num::{
    constants::{Extremes, PlusOne, Zero},
    finite::FiniteGuard,
    ops::saturating_arithmetic,
};

/// A trait alias for primitives that can be wrapped as clamped values.
pub trait ClampedNumeric:
    Copy
    + PartialEq
    + PartialOrd
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + PlusOne
    + Extremes
    + FiniteGuard
    + ByteLayout
    + saturating_arithmetic::SaturatingAddVal
    + saturating_arithmetic::SaturatingSubVal
    + saturating_arithmetic::SaturatingMulVal
    + saturating_arithmetic::SaturatingDivVal
    + saturating_arithmetic::SaturatingRemVal
    + saturating_arithmetic::SaturatingNegVal
    + saturating_arithmetic::SaturatingAbsVal
    + saturating_arithmetic::SaturatingPowVal
    + Send
    + Sync
{
}

impl<T> ClampedNumeric for T where
    T: Copy
        + PartialEq
        + PartialOrd
        + Default
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + PlusOne
        + Extremes
        + FiniteGuard
        + ByteLayout
        + saturating_arithmetic::SaturatingAddVal
        + saturating_arithmetic::SaturatingSubVal
        + saturating_arithmetic::SaturatingMulVal
        + saturating_arithmetic::SaturatingDivVal
        + saturating_arithmetic::SaturatingRemVal
        + saturating_arithmetic::SaturatingNegVal
        + saturating_arithmetic::SaturatingAbsVal
        + saturating_arithmetic::SaturatingPowVal
        + Send
        + Sync
{
}
