/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::adjust::{OneDecimal, clamp_channel};
use crate::{Hsv, Hwb, Rgba};
use std::fmt;

/// Represents a color in the HSL model
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
pub struct Hsl {
    /// Hue angle in degrees, [0, 360]
    pub h: f32,
    /// Saturation percent, [0, 100]
    pub s: f32,
    /// Lightness percent, [0, 100]
    pub l: f32,
}

/// Maps a hue position onto a channel fraction across the six 60°-wide
/// segments of the HSL cylinder. `p` is the de-saturated lightness bound,
/// `q` the saturated one.
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 360.0;
    }
    if t > 360.0 {
        t -= 360.0;
    }
    if t < 60.0 {
        return p + (q - p) * 6.0 * (t / 360.0);
    }
    if t < 180.0 {
        return q;
    }
    if t < 240.0 {
        return p + (q - p) * ((240.0 - t) / 360.0) * 6.0;
    }
    p
}

impl Hsl {
    /// Creates new instance
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Hsl {
        Hsl { h, s, l }
    }

    /// Parses a hex color string and converts it, degrading to black on
    /// invalid input
    #[inline]
    pub fn from_hex(hex: &str) -> Hsl {
        Hsl::from_rgba(Rgba::from_hex(hex))
    }

    /// Converts [Rgba] into [Hsl] by min/max channel decomposition.
    /// Achromatic input collapses to hue 0. Channels are rounded to whole
    /// degree/percent units.
    pub fn from_rgba(rgba: Rgba) -> Hsl {
        let r = rgba.r as f32 / 255.0;
        let g = rgba.g as f32 / 255.0;
        let b = rgba.b as f32 / 255.0;

        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;
        let lightness = (max + min) / 2.0;

        let segment = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        let mut hue = segment * 60.0;
        if hue < 0.0 {
            hue += 360.0;
        }

        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        Hsl::new(
            hue.round(),
            (saturation * 100.0).round(),
            (lightness * 100.0).round(),
        )
    }

    /// Converts [Hsl] into [Rgba] through the classic p/q decomposition,
    /// short-circuiting achromatic input to a flat gray. The result is
    /// fully opaque.
    pub fn to_rgba(&self) -> Rgba {
        let mut hue = self.h;
        if hue > 360.0 {
            hue %= 360.0;
        } else if hue < 0.0 {
            hue += 360.0;
        }
        let mut s = self.s;
        let mut l = self.l;
        if s > 1.0 {
            s /= 100.0;
        }
        if l > 1.0 {
            l /= 100.0;
        }

        if self.s == 0.0 {
            let gray = (l * 255.0).round() as u8;
            return Rgba::new(gray, gray, gray, 1.0);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgba::new(
            (hue_to_channel(p, q, hue + 120.0) * 255.0).round() as u8,
            (hue_to_channel(p, q, hue) * 255.0).round() as u8,
            (hue_to_channel(p, q, hue - 120.0) * 255.0).round() as u8,
            1.0,
        )
    }

    /// Converts [Hsl] into [Hsv]. Hue is shared, only the chroma/lightness
    /// axes are remapped.
    pub fn to_hsv(&self) -> Hsv {
        let chroma = self.s * (if self.l < 50.0 { self.l } else { 100.0 - self.l }) / 100.0;
        let saturation = if chroma == 0.0 {
            0.0
        } else {
            (2.0 * chroma) / (self.l + chroma) * 100.0
        };
        let value = chroma + self.l;
        Hsv::new(self.h, saturation.round(), value.round())
    }

    /// Converts [Hsl] into [Hwb] through HSV as the shared pivot
    #[inline]
    pub fn to_hwb(&self) -> Hwb {
        self.to_hsv().to_hwb()
    }

    /// Channels in declaration order `[h, s, l]`
    #[inline]
    pub fn to_array(&self) -> [f32; 3] {
        [self.h, self.s, self.l]
    }

    /// Floors every channel to a whole unit and clamps it into its domain.
    /// Applied whenever a mutated record is stored back into an HSL value.
    pub(crate) fn quantize(self) -> Hsl {
        Hsl::new(
            clamp_channel(self.h.floor(), 0.0, 360.0),
            clamp_channel(self.s.floor(), 0.0, 100.0),
            clamp_channel(self.l.floor(), 0.0, 100.0),
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            OneDecimal(self.h),
            OneDecimal(self.s),
            OneDecimal(self.l)
        )
    }
}
