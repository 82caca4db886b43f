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

/// The error type for input validation in the clamped numeric family.
///
/// Arithmetic never fails; only malformed requests do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClampError {
    /// A rounding request asked for a negative number of fractional digits.
    #[error("rounding digit count must be non-negative, got {0}")]
    NegativeRoundingDigits(i32),
    /// A byte buffer does not match the fixed width of the value's layout.
    #[error("expected a buffer of {expected} bytes, got {actual}")]
    InvalidByteLength {
        /// The exact width of the layout.
        expected: usize,
        /// The length of the buffer that was supplied.
        actual: usize,
    },
}

/// A specialized `Result` type for clamped numeric validation.
pub type Result<T> = core::result::Result<T, ClampError>;
