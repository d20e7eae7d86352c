/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use num_traits::{AsPrimitive, Float};
use std::fmt;

/// Maps a caller-supplied strength onto the canonical `[0, 1]` fraction
/// domain.
///
/// Values already inside `[0, 1]` pass through untouched, everything else is
/// treated as a percent: clamped to `[0, 100]` (or `[-100, 100]` when
/// `allow_negative` is set, with `[-1, 0)` passing through as well) and
/// divided by 100. The overlap between the fraction domain and the low end of
/// the percent domain is resolved in favor of the fraction reading.
///
/// Non-finite inputs saturate at the nearest domain bound (`NaN` and `+∞`
/// normalize to 1, `-∞` to the lower bound) instead of propagating.
#[inline]
pub fn normalize_ratio<T>(ratio: T, allow_negative: bool) -> T
where
    T: Float + 'static,
    f32: AsPrimitive<T>,
{
    let hundred: T = 100f32.as_();
    if ratio >= T::zero() && ratio <= T::one() {
        return ratio;
    }
    if allow_negative && ratio < T::zero() && ratio >= -T::one() {
        return ratio;
    }
    let lower = if allow_negative { -hundred } else { T::zero() };
    ratio.min(hundred).max(lower) / hundred
}

/// Rotates a hue by the given number of degrees, wrapping the result into
/// `[0, 360)`.
#[inline]
pub fn rotate_hue(hue: f32, degrees: f32) -> f32 {
    let rotated = (hue + degrees) % 360.0;
    if rotated < 0.0 { rotated + 360.0 } else { rotated }
}

/// Clamps a channel into `[floor, ceil]`. NaN resolves to `ceil` rather than
/// poisoning the stored value.
#[inline]
pub(crate) fn clamp_channel(value: f32, floor: f32, ceil: f32) -> f32 {
    value.min(ceil).max(floor)
}

/// Scales a percent channel relative to its current value.
///
/// The strength is normalized with [normalize_ratio], the delta is
/// `round(value * strength)` and the adjusted channel is clamped back into
/// `[0, 100]`. Every lighten/darken-family mutation reduces to this.
#[inline]
pub(crate) fn scale_channel(value: f32, ratio: f32, increase: bool) -> f32 {
    let normalized = normalize_ratio(ratio, true);
    let delta = (value * normalized).round();
    let scaled = if increase { value + delta } else { value - delta };
    clamp_channel(scaled, 0.0, 100.0)
}

/// Prints a channel rounded to one decimal, dropping the fraction entirely
/// when it is whole.
pub(crate) struct OneDecimal(pub(crate) f32);

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            write!(f, "{}", rounded as i64)
        } else {
            write!(f, "{rounded:.1}")
        }
    }
}
