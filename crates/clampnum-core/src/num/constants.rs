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

use rust_decimal::Decimal;

/// A trait for numeric types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for numeric types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for numeric types with a smallest and largest finite value.
///
/// These are the saturation targets of every clamped operation: a result
/// above `MAX_VALUE` becomes `MAX_VALUE`, a result below `MIN_VALUE` becomes
/// `MIN_VALUE`. For floating types they are the largest finite magnitudes,
/// never the infinities.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::num::constants::Extremes;
///
/// assert_eq!(<i8 as Extremes>::MIN_VALUE, -128);
/// assert_eq!(<u16 as Extremes>::MAX_VALUE, 65_535);
/// assert_eq!(<f64 as Extremes>::MAX_VALUE, f64::MAX);
/// ```
pub trait Extremes {
    /// The smallest representable value.
    const MIN_VALUE: Self;
    /// The largest representable value.
    const MAX_VALUE: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_zero_for {
    ($t:ty, $zero:expr) => {
        impl_const_for!(Zero, ZERO, $zero, $t);
    };
}

macro_rules! impl_plus_one_for {
    ($t:ty, $one:expr) => {
        impl_const_for!(PlusOne, PLUS_ONE, $one, $t);
    };
}

macro_rules! impl_extremes_for {
    ($t:ty, $min:expr, $max:expr) => {
        impl Extremes for $t {
            const MIN_VALUE: Self = $min;
            const MAX_VALUE: Self = $max;
        }
    };
}

macro_rules! impl_integer_constants {
    ($($t:ty),*) => {
        $(
            impl_zero_for!($t, 0);
            impl_plus_one_for!($t, 1);
            impl_extremes_for!($t, <$t>::MIN, <$t>::MAX);
        )*
    };
}

impl_integer_constants!(i8, u8, i16, u16, i32, u32, i64, u64);

impl_zero_for!(f32, 0.0);
impl_zero_for!(f64, 0.0);
impl_zero_for!(Decimal, Decimal::ZERO);

impl_plus_one_for!(f32, 1.0);
impl_plus_one_for!(f64, 1.0);
impl_plus_one_for!(Decimal, Decimal::ONE);

impl_extremes_for!(f32, f32::MIN, f32::MAX);
impl_extremes_for!(f64, f64::MIN, f64::MAX);
impl_extremes_for!(Decimal, Decimal::MIN, Decimal::MAX);
