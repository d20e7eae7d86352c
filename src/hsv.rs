/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::adjust::{OneDecimal, clamp_channel, normalize_ratio, rotate_hue};
use crate::{Hsl, Hwb, Rgba};
use std::fmt;

/// Represents a color in the HSV model
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Hsv {
    /// Hue angle in degrees, [0, 360]
    pub h: f32,
    /// Saturation percent, [0, 100]
    pub s: f32,
    /// Value percent, [0, 100]
    pub v: f32,
}

impl Hsv {
    /// Creates new instance
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Hsv {
        Hsv { h, s, v }
    }

    /// Parses a hex color string and converts it, degrading to black on
    /// invalid input
    #[inline]
    pub fn from_hex(hex: &str) -> Hsv {
        Hsv::from_rgba(Rgba::from_hex(hex))
    }

    /// Converts [Rgba] into [Hsv] by min/max channel decomposition.
    /// Achromatic input collapses to hue 0.
    pub fn from_rgba(rgba: Rgba) -> Hsv {
        let r = rgba.r as f32 / 255.0;
        let g = rgba.g as f32 / 255.0;
        let b = rgba.b as f32 / 255.0;

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        let mut hue = 0.0;
        if max != min {
            let segment = if max == r {
                (g - b) / delta + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };
            hue = segment / 6.0;
        }

        Hsv::new(
            clamp_channel((hue * 360.0).round(), 0.0, 360.0),
            clamp_channel((saturation * 100.0).round(), 0.0, 100.0),
            clamp_channel((max * 100.0).round(), 0.0, 100.0),
        )
    }

    /// Converts [Hsv] into [Rgba] with the six-way sector switch on the hue
    /// wheel. The result is fully opaque.
    pub fn to_rgba(&self) -> Rgba {
        let h = rotate_hue(self.h, 0.0) / 360.0;
        let s = normalize_ratio(self.s, false);
        let v = normalize_ratio(self.v, false);

        let i = (h * 6.0).floor();
        let f = h * 6.0 - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match (i as i32) % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            5 => (v, p, q),
            _ => (0.0, 0.0, 0.0),
        };
        Rgba::new(
            (r * 255.0).round() as u8,
            (g * 255.0).round() as u8,
            (b * 255.0).round() as u8,
            1.0,
        )
    }

    /// Converts [Hsv] into [Hsl]. Hue is shared, only the chroma/lightness
    /// axes are remapped.
    pub fn to_hsl(&self) -> Hsl {
        // lightness on a doubled 0..200 scale until the final halving
        let lightness = (200.0 - self.s) * self.v / 100.0;
        let saturation = if lightness == 0.0 || lightness == 200.0 {
            0.0
        } else {
            (self.s * self.v / 100.0)
                / (if lightness <= 100.0 {
                    lightness
                } else {
                    200.0 - lightness
                })
                * 100.0
        };
        Hsl::new(self.h, saturation.round(), (lightness * 5.0 / 10.0).round())
    }

    /// Converts [Hsv] into [Hwb]. Whiteness and blackness fall straight out
    /// of saturation and value.
    pub fn to_hwb(&self) -> Hwb {
        Hwb::new(
            self.h,
            ((100.0 - self.s) * self.v / 100.0).round(),
            (100.0 - self.v).round(),
        )
    }

    /// Channels in declaration order `[h, s, v]`
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.h, self.s, self.v]
    }

    /// Floors every channel to a whole unit and clamps it into its domain.
    pub(crate) fn quantize(self) -> Hsv {
        Hsv::new(
            clamp_channel(self.h.floor(), 0.0, 360.0),
            clamp_channel(self.s.floor(), 0.0, 100.0),
            clamp_channel(self.v.floor(), 0.0, 100.0),
        )
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsv({},{}%,{}%)",
            OneDecimal(self.h),
            OneDecimal(self.s),
            OneDecimal(self.v)
        )
    }
}
