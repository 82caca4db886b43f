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

//! # Clampnum Core
//!
//! The saturating arithmetic engine behind the clamped numeric family.
//! Every function here is pure: it takes primitive values, returns a
//! primitive value, and never overflows, wraps, or panics on arithmetic.
//! Results outside the representable range are clamped to the type's
//! minimum or maximum instead.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits, the finite-value guard for
//!   floating types, and by-value saturating operations (`add`, `sub`,
//!   `mul`, `div`, `rem`, `neg`, `abs`, `pow`) for the eight bounded integer
//!   shapes, `f32`, `f64` and `Decimal`.
//! - `fixed`: Scaled fixed-point multiply, divide, ceiling, floor, truncate
//!   and digit rounding on raw `i64`/`u64` values at scale `10^6`.
//! - `error`: `ClampError`, raised only for malformed requests such as a
//!   negative rounding digit count.
//!
//! ## Division by zero
//!
//! Integer, decimal and fixed-point division by zero saturate by the sign of
//! the dividend (`MAX` for positive, `MIN` for negative, `0` for zero), which
//! is what IEEE-754 division followed by the finite guard yields for floats.
//! A remainder by zero is `0` for every type.
//!
//! ## Concurrency
//!
//! There is no shared state. Every operation can be called from any number
//! of threads without synchronization.

pub mod error;
pub mod fixed;
pub mod num;

pub use error::{ClampError, Result};
pub use rust_decimal::Decimal;
