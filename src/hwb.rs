/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::adjust::{OneDecimal, clamp_channel, normalize_ratio};
use crate::{Hsl, Hsv, Rgba};
use std::fmt;

/// Represents a color in the HWB model
///
/// Whiteness and blackness may sum past 100; such values are degenerate and
/// resolve to an achromatic gray on conversion.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Hwb {
    /// Hue angle in degrees, [0, 360]
    pub h: f32,
    /// Whiteness percent, [0, 100]
    pub w: f32,
    /// Blackness percent, [0, 100]
    pub b: f32,
}

/// Hue in degrees from channels on a percent scale, from whichever channel
/// anchors the maximum. A 360° fallback shift keeps red-anchored hues
/// non-negative.
fn rgb_to_hue(r: f32, g: f32, b: f32) -> f32 {
    let value = r.max(g).max(b);
    let whiteness = r.min(g).min(b);
    let delta = value - whiteness;
    if delta == 0.0 {
        return 0.0;
    }
    let segment = if value == r {
        (g - b) / delta
    } else if value == g {
        (b - r) / delta
    } else {
        (r - g) / delta
    };
    let shift = if value == r {
        if segment < 0.0 { 6.0 } else { 0.0 }
    } else if value == g {
        2.0
    } else {
        4.0
    };
    (segment + shift) * 60.0
}

impl Hwb {
    /// Creates new instance
    #[inline]
    pub const fn new(h: f32, w: f32, b: f32) -> Hwb {
        Hwb { h, w, b }
    }

    /// Parses a hex color string and converts it, degrading to black on
    /// invalid input
    #[inline]
    pub fn from_hex(hex: &str) -> Hwb {
        Hwb::from_rgba(Rgba::from_hex(hex))
    }

    /// Converts [Rgba] into [Hwb]: whiteness is the minimum channel,
    /// blackness the distance of the maximum from full intensity.
    pub fn from_rgba(rgba: Rgba) -> Hwb {
        let r = rgba.r as f32 / 255.0 * 100.0;
        let g = rgba.g as f32 / 255.0 * 100.0;
        let b = rgba.b as f32 / 255.0 * 100.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        Hwb::new(
            clamp_channel(rgb_to_hue(r, g, b).round(), 0.0, 360.0),
            clamp_channel(min.round(), 0.0, 100.0),
            clamp_channel((100.0 - max).round(), 0.0, 100.0),
        )
    }

    /// Converts [Hwb] into [Rgba].
    ///
    /// Degenerate input (whiteness + blackness at or past full scale)
    /// resolves to the achromatic gray at `w / (w + b)`. Otherwise a fully
    /// saturated reference color at the hue is blended toward white and
    /// black by the two ratios. The result is fully opaque.
    pub fn to_rgba(&self) -> Rgba {
        let whiteness = normalize_ratio(self.w, false);
        let blackness = normalize_ratio(self.b, false);

        if whiteness + blackness >= 1.0 {
            let gray = (whiteness / (whiteness + blackness) * 255.0).round() as u8;
            return Rgba::new(gray, gray, gray, 1.0);
        }

        let reference = Hsl::new(self.h, 100.0, 50.0).to_rgba();
        let apply = |channel: u8| -> u8 {
            let mut value = channel as f32 / 255.0;
            value *= 1.0 - whiteness - blackness;
            value += whiteness;
            (value * 255.0).round() as u8
        };
        Rgba::new(
            apply(reference.r),
            apply(reference.g),
            apply(reference.b),
            1.0,
        )
    }

    /// Converts [Hwb] into [Hsv]. Saturation collapses to zero once
    /// blackness covers the full scale.
    pub fn to_hsv(&self) -> Hsv {
        let saturation = if self.b == 100.0 {
            0.0
        } else {
            100.0 - self.w / (100.0 - self.b) * 100.0
        };
        Hsv::new(
            self.h,
            clamp_channel(saturation.round(), 0.0, 100.0),
            (100.0 - self.b).round(),
        )
    }

    /// Converts [Hwb] into [Hsl] through HSV as the shared pivot
    #[inline]
    pub fn to_hsl(&self) -> Hsl {
        self.to_hsv().to_hsl()
    }

    /// Channels in declaration order `[h, w, b]`
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.h, self.w, self.b]
    }

    /// Floors every channel to a whole unit and clamps it into its domain.
    pub(crate) fn quantize(self) -> Hwb {
        Hwb::new(
            clamp_channel(self.h.floor(), 0.0, 360.0),
            clamp_channel(self.w.floor(), 0.0, 100.0),
            clamp_channel(self.b.floor(), 0.0, 100.0),
        )
    }
}

impl fmt::Display for Hwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hwb({},{}%,{}%)",
            OneDecimal(self.h),
            OneDecimal(self.w),
            OneDecimal(self.b)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_known_value() {
        let hwb = Hwb::from_rgba(Rgba::from_rgb(48, 229, 127));
        assert_eq!(hwb, Hwb::new(146.0, 19.0, 10.0));
    }

    #[test]
    fn to_rgba_known_value() {
        let rgba = Hwb::new(146.0, 19.0, 10.0).to_rgba();
        assert_eq!((rgba.r, rgba.g, rgba.b), (48, 229, 127));
    }

    #[test]
    fn degenerate_resolves_to_gray() {
        let even = Hwb::new(0.0, 60.0, 60.0).to_rgba();
        assert_eq!((even.r, even.g, even.b), (128, 128, 128));
        let white_heavy = Hwb::new(210.0, 90.0, 30.0).to_rgba();
        assert_eq!((white_heavy.r, white_heavy.g, white_heavy.b), (191, 191, 191));
    }

    #[test]
    fn to_hsv_known_value() {
        assert_eq!(Hwb::new(146.0, 19.0, 10.0).to_hsv().to_array(), [
            146.0, 79.0, 90.0
        ]);
    }

    #[test]
    fn to_hsv_clamps_degenerate_saturation() {
        assert_eq!(Hwb::new(0.0, 80.0, 50.0).to_hsv().to_array(), [
            0.0, 0.0, 50.0
        ]);
        assert_eq!(Hwb::new(0.0, 40.0, 100.0).to_hsv().to_array(), [
            0.0, 0.0, 0.0
        ]);
    }

    #[test]
    fn round_trip_stays_bounded() {
        use rand::Rng;
        let mut rng = rand::rng();
        for _ in 0..512 {
            let source = Rgba::from_rgb(
                rng.random_range(0..=255),
                rng.random_range(0..=255),
                rng.random_range(0..=255),
            );
            let rolled_back = Hwb::from_rgba(source).to_rgba();
            assert!((rolled_back.r as i32 - source.r as i32).abs() <= 6);
            assert!((rolled_back.g as i32 - source.g as i32).abs() <= 6);
            assert!((rolled_back.b as i32 - source.b as i32).abs() <= 6);
        }
    }
}
