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

//! # Scaled Fixed-Point Arithmetic
//!
//! A fixed-point quantity is stored as a raw 64-bit integer equal to the
//! decimal value times [`SCALE`] (`10^6`), so raw `1` is the smallest
//! representable step and raw `2_500_000` means `2.5`.
//!
//! Multiplying two raw values scales the result by `SCALE²`, and dividing
//! one raw value by another cancels the scale entirely; both operations
//! correct for that by dividing or multiplying by `scale` once. The
//! intermediate is carried as a `u128` magnitude with a separate sign, which
//! holds the exact product of any two 64-bit operands, so the only lossy
//! step is the final truncating division followed by saturation into the raw
//! bounds.
//!
//! Rounding works on the raw integer directly: the sub-`10^(6 - digits)`
//! remainder is removed according to a [`MidpointRounding`] mode and the
//! quotient is scaled back up, saturating if that overflows.

use crate::{
    error::{ClampError, Result},
    num::ops::widening::{self, Widen},
};

/// The fixed scale factor between a decimal value and its raw integer.
pub const SCALE: i64 = 1_000_000;

/// Number of decimal digits carried by [`SCALE`].
pub const SCALE_DIGITS: u32 = 6;

/// Largest fractional digit count [`round`] will round to.
pub const MAX_ROUND_DIGITS: i32 = 5;

/// Raw storage types for scaled fixed-point values.
///
/// Implemented for `i64` and `u64`.
pub trait ScaledRaw: Widen {
    /// [`SCALE`] expressed in the raw type.
    const SCALE: Self;
}

impl ScaledRaw for i64 {
    const SCALE: Self = SCALE;
}

impl ScaledRaw for u64 {
    const SCALE: Self = SCALE as u64;
}

/// Strategy for discarding the digits removed by [`round`].
///
/// `ToEven` and `AwayFromZero` only differ from plain nearest rounding at an
/// exact midpoint. The three directed modes apply to any nonzero remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MidpointRounding {
    /// Round to nearest; a midpoint goes to the even neighbour.
    #[default]
    ToEven,
    /// Round to nearest; a midpoint goes away from zero.
    AwayFromZero,
    /// Truncate toward zero.
    ToZero,
    /// Round toward negative infinity.
    ToNegativeInfinity,
    /// Round toward positive infinity.
    ToPositiveInfinity,
}

impl std::fmt::Display for MidpointRounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ToEven => "ToEven",
            Self::AwayFromZero => "AwayFromZero",
            Self::ToZero => "ToZero",
            Self::ToNegativeInfinity => "ToNegativeInfinity",
            Self::ToPositiveInfinity => "ToPositiveInfinity",
        };
        f.write_str(name)
    }
}

#[inline]
fn finish<R: Widen>(op: &'static str, negative: bool, magnitude: u128) -> R {
    let result: R = widening::narrow_magnitude(negative, magnitude);
    if result.widen().unsigned_abs() != magnitude {
        tracing::trace!(op, negative, %magnitude, "scaled result saturated");
    }
    result
}

/// Multiplies two raw values and removes the doubled scale: `(a * b) / scale`.
///
/// The product is exact; the quotient truncates toward zero and saturates to
/// the raw bounds. A zero `scale` is a division by zero and saturates by the
/// sign of the product.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::fixed::scaled::{scaled_multiply, SCALE};
///
/// // 2.5 * 4.0 = 10.0
/// assert_eq!(scaled_multiply(2_500_000i64, 4_000_000, SCALE), 10_000_000);
/// // -1.5 * 0.5 = -0.75
/// assert_eq!(scaled_multiply(-1_500_000i64, 500_000, SCALE), -750_000);
/// assert_eq!(scaled_multiply(i64::MAX, 2_000_000, SCALE), i64::MAX);
/// ```
pub fn scaled_multiply<R: Widen>(a: R, b: R, scale: R) -> R {
    let (wa, wb, ws) = (a.widen(), b.widen(), scale.widen());
    let negative = (wa < 0) ^ (wb < 0) ^ (ws < 0);

    if ws == 0 {
        tracing::trace!(a = %wa, b = %wb, "scaled multiply with zero scale saturated");
        return widening::saturate_by_sign(wa.signum() * wb.signum());
    }

    match wa.unsigned_abs().checked_mul(wb.unsigned_abs()) {
        Some(product) => finish("scaled_multiply", negative, product / ws.unsigned_abs()),
        None => widening::narrow_magnitude(negative, u128::MAX),
    }
}

/// Divides two raw values and restores the cancelled scale: `(a * scale) / b`.
///
/// The scaled dividend is exact; the quotient truncates toward zero and
/// saturates to the raw bounds. Division by zero saturates by the sign of
/// `a`: positive to `MAX`, negative to `MIN`, zero to zero.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::fixed::scaled::{scaled_divide, SCALE};
///
/// // 10.0 / 4.0 = 2.5
/// assert_eq!(scaled_divide(10_000_000i64, 4_000_000, SCALE), 2_500_000);
/// // 1.0 / 3.0 = 0.333333
/// assert_eq!(scaled_divide(1_000_000i64, 3_000_000, SCALE), 333_333);
/// assert_eq!(scaled_divide(-1i64, 0, SCALE), i64::MIN);
/// ```
pub fn scaled_divide<R: Widen>(a: R, b: R, scale: R) -> R {
    let (wa, wb, ws) = (a.widen(), b.widen(), scale.widen());

    if wb == 0 {
        tracing::trace!(dividend = %wa, "scaled division by zero saturated");
        return widening::saturate_by_sign(wa.signum() * ws.signum());
    }

    let negative = (wa < 0) ^ (wb < 0) ^ (ws < 0);
    match wa.unsigned_abs().checked_mul(ws.unsigned_abs()) {
        Some(dividend) => finish("scaled_divide", negative, dividend / wb.unsigned_abs()),
        None => widening::narrow_magnitude(negative, u128::MAX),
    }
}

/// Rounds `raw` toward positive infinity to a multiple of `scale`.
///
/// Saturates to `MAX` when the next multiple is not representable. A
/// non-positive `scale` leaves `raw` unchanged.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::fixed::scaled::{ceiling, SCALE};
///
/// assert_eq!(ceiling(1_200_000i64, SCALE), 2_000_000);
/// assert_eq!(ceiling(-1_200_000i64, SCALE), -1_000_000);
/// assert_eq!(ceiling(3_000_000i64, SCALE), 3_000_000);
/// ```
pub fn ceiling<R: Widen>(raw: R, scale: R) -> R {
    let (w, s) = (raw.widen(), scale.widen());
    if s <= 0 {
        return raw;
    }
    let r = w % s;
    R::narrow_saturating(if r > 0 { w - r + s } else { w - r })
}

/// Rounds `raw` toward negative infinity to a multiple of `scale`.
///
/// Saturates to `MIN` when the previous multiple is not representable. A
/// non-positive `scale` leaves `raw` unchanged.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::fixed::scaled::{floor, SCALE};
///
/// assert_eq!(floor(1_800_000i64, SCALE), 1_000_000);
/// assert_eq!(floor(-1_200_000i64, SCALE), -2_000_000);
/// assert_eq!(floor(999_999u64, SCALE as u64), 0);
/// ```
pub fn floor<R: Widen>(raw: R, scale: R) -> R {
    let (w, s) = (raw.widen(), scale.widen());
    if s <= 0 {
        return raw;
    }
    let r = w % s;
    R::narrow_saturating(if r < 0 { w - r - s } else { w - r })
}

/// Rounds `raw` toward zero to a multiple of `scale`.
///
/// A non-positive `scale` leaves `raw` unchanged.
pub fn truncate<R: Widen>(raw: R, scale: R) -> R {
    let (w, s) = (raw.widen(), scale.widen());
    if s <= 0 {
        return raw;
    }
    R::narrow_saturating(w - w % s)
}

/// Rounds a raw value at scale `10^6` to `digits` fractional decimal digits.
///
/// Requests for more than [`MAX_ROUND_DIGITS`] digits return `raw`
/// unchanged, since the scale carries no finer digit to remove. The
/// result saturates when rounding away from zero steps past the raw bounds.
///
/// # Errors
///
/// Returns [`ClampError::NegativeRoundingDigits`] when `digits < 0`.
///
/// # Examples
///
/// ```rust
/// # use clampnum_core::fixed::scaled::{round, MidpointRounding};
///
/// // 1.234567 -> 1.235
/// assert_eq!(round(1_234_567i64, 3, MidpointRounding::ToEven), Ok(1_235_000));
/// // 2.5 -> 2 (ties to even), 3 (ties away from zero)
/// assert_eq!(round(2_500_000i64, 0, MidpointRounding::ToEven), Ok(2_000_000));
/// assert_eq!(round(2_500_000i64, 0, MidpointRounding::AwayFromZero), Ok(3_000_000));
/// assert!(round(1i64, -1, MidpointRounding::ToEven).is_err());
/// // Full precision is left alone.
/// assert_eq!(round(1_234_567i64, 6, MidpointRounding::ToEven), Ok(1_234_567));
/// ```
pub fn round<R: Widen>(raw: R, digits: i32, mode: MidpointRounding) -> Result<R> {
    if digits < 0 {
        tracing::debug!(digits, "rejecting negative rounding digit count");
        return Err(ClampError::NegativeRoundingDigits(digits));
    }

    if digits > MAX_ROUND_DIGITS {
        return Ok(raw);
    }

    let digits = digits.unsigned_abs();
    let factor = 10i128.pow(SCALE_DIGITS - digits);
    let w = raw.widen();
    let (quotient, remainder) = (w / factor, w % factor);
    let doubled = remainder.unsigned_abs() * 2;
    let half_point = factor.unsigned_abs();

    let away_from_zero = match mode {
        MidpointRounding::ToEven => {
            doubled > half_point || (doubled == half_point && quotient % 2 != 0)
        }
        MidpointRounding::AwayFromZero => doubled >= half_point,
        MidpointRounding::ToZero => false,
        MidpointRounding::ToNegativeInfinity => remainder < 0,
        MidpointRounding::ToPositiveInfinity => remainder > 0,
    };

    let quotient = if away_from_zero {
        quotient + remainder.signum()
    } else {
        quotient
    };
    Ok(R::narrow_saturating(quotient * factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const U_SCALE: u64 = SCALE as u64;

    #[test]
    fn test_scaled_multiply_examples() {
        assert_eq!(scaled_multiply(2_500_000i64, 4_000_000, SCALE), 10_000_000);
        assert_eq!(scaled_multiply(2_500_000u64, 4_000_000, U_SCALE), 10_000_000);
        assert_eq!(scaled_multiply(1i64, 1, SCALE), 0);
        assert_eq!(scaled_multiply(-1_000_000i64, -1_000_000, SCALE), 1_000_000);
        assert_eq!(scaled_multiply(0i64, i64::MIN, SCALE), 0);
    }

    #[test]
    fn test_scaled_multiply_saturates_without_intermediate_overflow() {
        assert_eq!(scaled_multiply(i64::MAX, i64::MAX, SCALE), i64::MAX);
        assert_eq!(scaled_multiply(i64::MIN, i64::MAX, SCALE), i64::MIN);
        assert_eq!(scaled_multiply(i64::MIN, i64::MIN, SCALE), i64::MAX);
        assert_eq!(scaled_multiply(u64::MAX, u64::MAX, U_SCALE), u64::MAX);
        // 9_223_372.036854 * 1.0 stays exact even though raw * raw overflows i64.
        assert_eq!(scaled_multiply(i64::MAX, SCALE, SCALE), i64::MAX);
        assert_eq!(scaled_multiply(i64::MIN, SCALE, SCALE), i64::MIN);
        assert_eq!(scaled_multiply(i64::MIN + 1, SCALE, SCALE), i64::MIN + 1);
    }

    #[test]
    fn test_scaled_multiply_zero_scale() {
        assert_eq!(scaled_multiply(3i64, 4, 0), i64::MAX);
        assert_eq!(scaled_multiply(-3i64, 4, 0), i64::MIN);
        assert_eq!(scaled_multiply(0i64, 4, 0), 0);
    }

    #[test]
    fn test_scaled_divide_examples() {
        assert_eq!(scaled_divide(10_000_000i64, 4_000_000, SCALE), 2_500_000);
        assert_eq!(scaled_divide(-10_000_000i64, 4_000_000, SCALE), -2_500_000);
        assert_eq!(scaled_divide(2_000_000i64, 3_000_000, SCALE), 666_666);
        assert_eq!(scaled_divide(i64::MAX, 1, SCALE), i64::MAX);
        assert_eq!(scaled_divide(i64::MIN, -1, SCALE), i64::MAX);
        assert_eq!(scaled_divide(u64::MAX, 1, U_SCALE), u64::MAX);
    }

    #[test]
    fn test_scaled_divide_by_zero() {
        assert_eq!(scaled_divide(5i64, 0, SCALE), i64::MAX);
        assert_eq!(scaled_divide(-5i64, 0, SCALE), i64::MIN);
        assert_eq!(scaled_divide(0i64, 0, SCALE), 0);
        assert_eq!(scaled_divide(5u64, 0, U_SCALE), u64::MAX);
    }

    #[test]
    fn test_ceiling_and_floor() {
        assert_eq!(ceiling(1i64, SCALE), 1_000_000);
        assert_eq!(ceiling(-999_999i64, SCALE), 0);
        assert_eq!(floor(-1i64, SCALE), -1_000_000);
        assert_eq!(floor(1_999_999i64, SCALE), 1_000_000);
        assert_eq!(ceiling(i64::MAX, SCALE), i64::MAX);
        assert_eq!(floor(i64::MIN, SCALE), i64::MIN);
        assert_eq!(ceiling(u64::MAX, U_SCALE), u64::MAX);
        assert_eq!(floor(u64::MAX, U_SCALE), u64::MAX - u64::MAX % U_SCALE);
        assert_eq!(ceiling(17i64, 0), 17);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate(1_999_999i64, SCALE), 1_000_000);
        assert_eq!(truncate(-1_999_999i64, SCALE), -1_000_000);
        assert_eq!(truncate(999_999u64, U_SCALE), 0);
    }

    #[test]
    fn test_round_modes_at_midpoints() {
        use MidpointRounding::*;
        let cases: [(i64, MidpointRounding, i64); 10] = [
            (2_500_000, ToEven, 2_000_000),
            (3_500_000, ToEven, 4_000_000),
            (-2_500_000, ToEven, -2_000_000),
            (-3_500_000, ToEven, -4_000_000),
            (2_500_000, AwayFromZero, 3_000_000),
            (-2_500_000, AwayFromZero, -3_000_000),
            (2_500_000, ToZero, 2_000_000),
            (-2_500_000, ToNegativeInfinity, -3_000_000),
            (-2_500_000, ToPositiveInfinity, -2_000_000),
            (2_000_001, ToPositiveInfinity, 3_000_000),
        ];
        for (raw, mode, expected) in cases {
            assert_eq!(round(raw, 0, mode), Ok(expected), "{raw} {mode}");
        }
    }

    #[test]
    fn test_round_to_fractional_digits() {
        assert_eq!(round(1_234_567i64, 2, MidpointRounding::ToEven), Ok(1_230_000));
        assert_eq!(round(1_234_567i64, 5, MidpointRounding::ToEven), Ok(1_234_570));
        assert_eq!(round(1_234_565i64, 5, MidpointRounding::ToEven), Ok(1_234_560));
        assert_eq!(round(1_234_565i64, 5, MidpointRounding::AwayFromZero), Ok(1_234_570));
        assert_eq!(round(-1_234_567i64, 1, MidpointRounding::ToZero), Ok(-1_200_000));
        assert_eq!(round(1_234_567u64, 4, MidpointRounding::ToNegativeInfinity), Ok(1_234_500));
    }

    #[test]
    fn test_round_beyond_max_digits_is_identity() {
        for raw in [1_234_567i64, -1_234_567, -7, 5, 15, i64::MAX, i64::MIN] {
            for digits in [6, 7, i32::MAX] {
                for mode in [
                    MidpointRounding::ToEven,
                    MidpointRounding::AwayFromZero,
                    MidpointRounding::ToZero,
                    MidpointRounding::ToNegativeInfinity,
                    MidpointRounding::ToPositiveInfinity,
                ] {
                    assert_eq!(round(raw, digits, mode), Ok(raw), "{raw} {digits} {mode}");
                }
            }
        }
        assert_eq!(round(u64::MAX, 6, MidpointRounding::AwayFromZero), Ok(u64::MAX));
    }

    #[test]
    fn test_round_rejects_negative_digits() {
        assert_eq!(
            round(1i64, -1, MidpointRounding::ToEven),
            Err(ClampError::NegativeRoundingDigits(-1))
        );
        assert!(round(1u64, i32::MIN, MidpointRounding::ToZero).is_err());
    }

    #[test]
    fn test_round_saturates_at_bounds() {
        assert_eq!(round(i64::MAX, 0, MidpointRounding::ToPositiveInfinity), Ok(i64::MAX));
        assert_eq!(round(i64::MIN, 0, MidpointRounding::ToNegativeInfinity), Ok(i64::MIN));
        assert_eq!(round(u64::MAX, 0, MidpointRounding::AwayFromZero), Ok(u64::MAX));
    }

    #[test]
    fn test_midpoint_rounding_default_is_to_even() {
        assert_eq!(MidpointRounding::default(), MidpointRounding::ToEven);
    }

    proptest! {
        #[test]
        fn test_scaled_round_trip(a in -1_000_000_000_000i64..1_000_000_000_000, k in 1i64..1_000) {
            let b = k * SCALE;
            let product = scaled_multiply(a, b, SCALE);
            prop_assert_eq!(product, a * k);
            prop_assert_eq!(scaled_divide(product, b, SCALE), a);
        }

        #[test]
        fn test_scaled_ops_match_exact_reference(a in any::<i64>(), b in any::<i64>()) {
            let exact_mul = (a as i128 * b as i128) / SCALE as i128;
            prop_assert_eq!(
                scaled_multiply(a, b, SCALE),
                exact_mul.clamp(i64::MIN as i128, i64::MAX as i128) as i64
            );
            if b != 0 {
                let exact_div = (a as i128 * SCALE as i128) / b as i128;
                prop_assert_eq!(
                    scaled_divide(a, b, SCALE),
                    exact_div.clamp(i64::MIN as i128, i64::MAX as i128) as i64
                );
            }
        }

        #[test]
        fn test_floor_le_raw_le_ceiling(raw in (i64::MIN / 2)..(i64::MAX / 2)) {
            let lo = floor(raw, SCALE);
            let hi = ceiling(raw, SCALE);
            prop_assert!(lo <= raw && raw <= hi);
            prop_assert_eq!(lo % SCALE, 0);
            prop_assert_eq!(hi % SCALE, 0);
            prop_assert!(hi - lo == 0 || hi - lo == SCALE);
        }

        #[test]
        fn test_round_stays_within_one_step(raw in (i64::MIN / 2)..(i64::MAX / 2), digits in 0i32..=5) {
            let step = 10i64.pow(SCALE_DIGITS - digits as u32);
            for mode in [
                MidpointRounding::ToEven,
                MidpointRounding::AwayFromZero,
                MidpointRounding::ToZero,
                MidpointRounding::ToNegativeInfinity,
                MidpointRounding::ToPositiveInfinity,
            ] {
                let rounded = round(raw, digits, mode).unwrap();
                prop_assert_eq!(rounded % step, 0);
                prop_assert!((rounded - raw).abs() < step);
            }
        }
    }
}
