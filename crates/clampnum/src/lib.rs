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

//! # Clampnum
//!
//! **Numeric value types that saturate instead of overflowing.**
//!
//! A clamped value behaves like the primitive it wraps, except that no
//! arithmetic operator ever wraps around, panics, or produces a non-finite
//! float. Results outside the representable range are clamped to the type's
//! minimum or maximum. All numeric work is delegated to `clampnum_core`; this
//! crate supplies the value types and their operator, conversion and layout
//! plumbing.
//!
//! ## Architecture
//!
//! * **`numeric`**: `ClampedNumeric`, the single bound that every wrapped
//!   primitive satisfies (`i8` to `u64`, `f32`, `f64`, `Decimal`).
//! * **`clamped`**: `Clamped<T>` and the aliases `ClampedI8` … `ClampedU64`,
//!   `ClampedF32`, `ClampedF64`, `ClampedDecimal`.
//! * **`fixed`**: `Fixed<R>` scaled fixed-point values with six implied
//!   decimal digits, aliased as `ClampedFixed` (`i64`) and `ClampedUFixed`
//!   (`u64`).
//! * **`bytes`**: The fixed-width little-endian layout of every value.
//!
//! With the `serde` feature, every value type serializes as its primitive or
//! raw integer.
//!
//! ## Example
//!
//! ```rust
//! use clampnum::{ClampedFixed, ClampedI8, ClampedU8};
//!
//! assert_eq!((ClampedI8::new(120) + ClampedI8::new(50)).get(), 127);
//! assert_eq!((ClampedU8::new(3) - ClampedU8::new(4)).get(), 0);
//!
//! let product = ClampedFixed::from_raw(2_500_000) * ClampedFixed::from_raw(4_000_000);
//! assert_eq!(product.to_string(), "10");
//! ```

pub mod bytes;
pub mod clamped;
pub mod fixed;
pub mod numeric;

#[cfg(feature = "serde")]
mod serde_impl;

pub use clamped::{
    Clamped, ClampedDecimal, ClampedF32, ClampedF64, ClampedI8, ClampedI16, ClampedI32, ClampedI64,
    ClampedU8, ClampedU16, ClampedU32, ClampedU64,
};
pub use clampnum_core::{ClampError, Decimal, fixed::scaled::MidpointRounding};
pub use fixed::{ClampedFixed, ClampedUFixed, Fixed};
pub use numeric::ClampedNumeric;
