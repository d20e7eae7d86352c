/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::adjust::{clamp_channel, normalize_ratio};
use crate::hex;
use std::fmt;

/// Represents a color in the RGBA model
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Rgba {
    /// Red component in [0, 255]
    pub r: u8,
    /// Green component in [0, 255]
    pub g: u8,
    /// Blue component in [0, 255]
    pub b: u8,
    /// Opacity in [0, 1]
    pub a: f32,
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::new(0, 0, 0, 1.0)
    }
}

impl Rgba {
    /// Creates new instance
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Creates a fully opaque instance
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Rgba {
        Rgba { r, g, b, a: 1.0 }
    }

    /// Parses a hex color string, degrading to opaque black on invalid
    /// input. Accepts shorthand and full values, with or without `#`.
    #[inline]
    pub fn from_hex(hex: &str) -> Rgba {
        hex::hex_to_rgba(hex)
    }

    /// Renders the RGB channels as a lowercase, zero-padded hex string.
    /// Alpha is ignored.
    #[inline]
    pub fn to_hex_string(&self, remove_hashtag: bool) -> String {
        hex::rgba_to_hex(*self, remove_hashtag)
    }

    /// Mixes `additive` into this color by the given weight.
    ///
    /// The weight accepts a fraction or a percent, 0.5 being an even blend.
    /// The RGB blend weight is corrected for the alpha difference between
    /// the two inputs, matching the SASS `mix` function, rather than being
    /// a plain linear average.
    pub fn mix(&self, additive: Rgba, weight: f32) -> Rgba {
        let p = normalize_ratio(weight, false);
        let w = 2.0 * p - 1.0;
        let a = additive.a - self.a;

        let w1 = ((if w * a == -1.0 { w } else { (w + a) / (1.0 + w * a) }) + 1.0) / 2.0;
        let w2 = 1.0 - w1;

        let blend = |add: u8, base: u8| -> u8 {
            clamp_channel((w1 * add as f32 + w2 * base as f32).round(), 0.0, 255.0) as u8
        };
        Rgba::new(
            blend(additive.r, self.r),
            blend(additive.g, self.g),
            blend(additive.b, self.b),
            clamp_channel(additive.a * p + self.a * (1.0 - p), 0.0, 1.0),
        )
    }

    /// Collapses the RGB channels to their weighted luma, leaving alpha
    /// untouched.
    pub fn grayscale(&self) -> Rgba {
        let y = (self.r as f32 * 0.299 + self.g as f32 * 0.587 + self.b as f32 * 0.114).floor();
        let y = clamp_channel(y, 0.0, 255.0) as u8;
        Rgba::new(y, y, y, self.a)
    }

    /// Reduces alpha by a ratio relative to its current value.
    #[inline]
    pub fn fade(&self, ratio: f32) -> Rgba {
        let normalized = normalize_ratio(ratio, false);
        Rgba {
            a: clamp_channel(self.a - self.a * normalized, 0.0, 1.0),
            ..*self
        }
    }

    /// Increases alpha by a ratio relative to its current value.
    #[inline]
    pub fn fill(&self, ratio: f32) -> Rgba {
        let normalized = normalize_ratio(ratio, false);
        Rgba {
            a: clamp_channel(self.a + self.a * normalized, 0.0, 1.0),
            ..*self
        }
    }

    /// Replaces alpha with the given opacity, accepted as a fraction or a
    /// percent.
    #[inline]
    pub fn with_opacity(&self, percent: f32) -> Rgba {
        Rgba {
            a: normalize_ratio(percent, false),
            ..*self
        }
    }

    /// Channels in declaration order `[r, g, b, a]`
    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a]
    }
}

impl fmt::Display for Rgba {
    /// Prints `rgb(r,g,b)` for opaque values, `rgba(r,g,b,a)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 1.0 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_even_blend() {
        let white = Rgba::from_rgb(255, 255, 255);
        let black = Rgba::from_rgb(0, 0, 0);
        assert_eq!(white.mix(black, 0.5), Rgba::new(128, 128, 128, 1.0));
    }

    #[test]
    fn mix_boundary_weights() {
        let base = Rgba::from_rgb(200, 128, 75);
        let additive = Rgba::from_rgb(10, 20, 30);
        let kept = base.mix(additive, 0.0);
        assert_eq!((kept.r, kept.g, kept.b), (200, 128, 75));
        let replaced = base.mix(additive, 1.0);
        assert_eq!((replaced.r, replaced.g, replaced.b), (10, 20, 30));
    }

    #[test]
    fn mix_weights_account_for_alpha() {
        let base = Rgba::new(0, 0, 0, 0.25);
        let additive = Rgba::new(255, 255, 255, 0.75);
        let mixed = base.mix(additive, 0.5);
        // alpha gap shifts the blend toward the more opaque input
        assert_eq!((mixed.r, mixed.g, mixed.b), (191, 191, 191));
        assert!((mixed.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn grayscale_uses_floored_luma() {
        let gray = Rgba::new(200, 128, 75, 0.5).grayscale();
        assert_eq!((gray.r, gray.g, gray.b), (143, 143, 143));
        assert_eq!(gray.a, 0.5);
    }

    #[test]
    fn alpha_scaling() {
        assert!((Rgba::new(0, 0, 0, 0.8).fade(0.5).a - 0.4).abs() < 1e-6);
        assert!((Rgba::new(0, 0, 0, 0.5).fill(0.5).a - 0.75).abs() < 1e-6);
        assert_eq!(Rgba::new(0, 0, 0, 0.9).fill(0.5).a, 1.0);
        assert!((Rgba::new(0, 0, 0, 1.0).with_opacity(42.0).a - 0.42).abs() < 1e-6);
    }

    #[test]
    fn display_switches_on_alpha() {
        assert_eq!(Rgba::from_rgb(200, 128, 75).to_string(), "rgb(200,128,75)");
        assert_eq!(
            Rgba::new(200, 128, 75, 0.5).to_string(),
            "rgba(200,128,75,0.5)"
        );
    }

    #[test]
    fn hex_round_trip() {
        let parsed = Rgba::from_hex("#b9825b");
        assert_eq!((parsed.r, parsed.g, parsed.b), (185, 130, 91));
        assert_eq!(parsed.to_hex_string(false), "#b9825b");
        assert_eq!(parsed.to_hex_string(true), "b9825b");
    }
}
