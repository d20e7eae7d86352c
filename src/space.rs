/*
 * // Copyright 2025 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use crate::adjust::{clamp_channel, rotate_hue, scale_channel};
use crate::{Hsl, Hsv, Hwb, Rgba, hex, named};
use std::fmt;

/// Identifies which channel-set a [ColorSpace] value currently stores
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum ModelType {
    #[default]
    Rgb,
    Hsl,
    Hsv,
    Hwb,
}

/// Runtime key addressing one channel of any color model
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
    Hue,
    Saturation,
    Lightness,
    Value,
    Whiteness,
    Blackness,
}

/// A color stored in exactly one of the four supported models.
///
/// Every mutation converts the stored channel-set into the space the
/// operation is naturally defined in (HSL for lightness, saturation and hue
/// rotation, HWB for whiteness and blackness, RGBA for mixing, grayscale and
/// alpha), applies the adjustment there and converts the result back into
/// the original model. Mutators return `&mut Self` for chaining.
///
/// ```
/// use huemix::ColorSpace;
///
/// let mut color = ColorSpace::rgb(200, 128, 75);
/// color.rotate(90.0);
/// assert_eq!(color.to_string(), "rgb(86,200,76)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ColorSpace {
    Rgba(Rgba),
    Hsl(Hsl),
    Hsv(Hsv),
    Hwb(Hwb),
}

impl ColorSpace {
    /// Creates a fully opaque RGBA value
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> ColorSpace {
        ColorSpace::Rgba(Rgba::from_rgb(r, g, b))
    }

    /// Creates an RGBA value
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> ColorSpace {
        ColorSpace::Rgba(Rgba::new(r, g, b, a))
    }

    /// Creates an HSL value
    #[inline]
    pub const fn hsl(h: f32, s: f32, l: f32) -> ColorSpace {
        ColorSpace::Hsl(Hsl::new(h, s, l))
    }

    /// Creates an HSV value
    #[inline]
    pub const fn hsv(h: f32, s: f32, v: f32) -> ColorSpace {
        ColorSpace::Hsv(Hsv::new(h, s, v))
    }

    /// Creates an HWB value
    #[inline]
    pub const fn hwb(h: f32, w: f32, b: f32) -> ColorSpace {
        ColorSpace::Hwb(Hwb::new(h, w, b))
    }

    /// Creates an RGBA value from a hex string, degrading to opaque black
    /// on invalid input
    #[inline]
    pub fn from_hex(hex: &str) -> ColorSpace {
        ColorSpace::Rgba(Rgba::from_hex(hex))
    }

    /// Creates an RGBA value from a CSS color name, or `None` when the name
    /// is unknown
    pub fn from_css_color(name: &str) -> Option<ColorSpace> {
        named::css_color(name).map(ColorSpace::from_hex)
    }

    /// The model this value currently stores
    #[inline]
    pub const fn model_type(&self) -> ModelType {
        match self {
            ColorSpace::Rgba(_) => ModelType::Rgb,
            ColorSpace::Hsl(_) => ModelType::Hsl,
            ColorSpace::Hsv(_) => ModelType::Hsv,
            ColorSpace::Hwb(_) => ModelType::Hwb,
        }
    }

    /// Converts this value into another model, wrapping the converted
    /// channel-set in a new instance. Requesting the model the value is
    /// already stored in yields `None` rather than a redundant self-copy.
    pub fn to_space(&self, target: ModelType) -> Option<ColorSpace> {
        if self.model_type() == target {
            return None;
        }
        Some(match target {
            ModelType::Rgb => ColorSpace::Rgba(self.resolve_rgba()),
            ModelType::Hsl => ColorSpace::Hsl(self.resolve_hsl()),
            ModelType::Hsv => ColorSpace::Hsv(self.resolve_hsv()),
            ModelType::Hwb => ColorSpace::Hwb(self.resolve_hwb()),
        })
    }

    /// Reads a channel of the stored model, or `None` when the model has no
    /// such channel
    pub fn channel(&self, channel: Channel) -> Option<f32> {
        match (self, channel) {
            (ColorSpace::Rgba(c), Channel::Red) => Some(c.r as f32),
            (ColorSpace::Rgba(c), Channel::Green) => Some(c.g as f32),
            (ColorSpace::Rgba(c), Channel::Blue) => Some(c.b as f32),
            (ColorSpace::Rgba(c), Channel::Alpha) => Some(c.a),
            (ColorSpace::Hsl(c), Channel::Hue) => Some(c.h),
            (ColorSpace::Hsl(c), Channel::Saturation) => Some(c.s),
            (ColorSpace::Hsl(c), Channel::Lightness) => Some(c.l),
            (ColorSpace::Hsv(c), Channel::Hue) => Some(c.h),
            (ColorSpace::Hsv(c), Channel::Saturation) => Some(c.s),
            (ColorSpace::Hsv(c), Channel::Value) => Some(c.v),
            (ColorSpace::Hwb(c), Channel::Hue) => Some(c.h),
            (ColorSpace::Hwb(c), Channel::Whiteness) => Some(c.w),
            (ColorSpace::Hwb(c), Channel::Blackness) => Some(c.b),
            _ => None,
        }
    }

    /// Writes a channel of the stored model, clamping into its domain: hue
    /// floors into [0, 360], r/g/b floor into [0, 255], alpha clamps into
    /// [0, 1] and percent channels clamp into [0, 100]. Channels the model
    /// does not carry are ignored.
    pub fn set_channel(&mut self, channel: Channel, value: f32) -> &mut Self {
        match (&mut *self, channel) {
            (ColorSpace::Rgba(c), Channel::Red) => c.r = clamp_channel(value, 0.0, 255.0) as u8,
            (ColorSpace::Rgba(c), Channel::Green) => c.g = clamp_channel(value, 0.0, 255.0) as u8,
            (ColorSpace::Rgba(c), Channel::Blue) => c.b = clamp_channel(value, 0.0, 255.0) as u8,
            (ColorSpace::Rgba(c), Channel::Alpha) => c.a = clamp_channel(value, 0.0, 1.0),
            (ColorSpace::Hsl(c), Channel::Hue) => c.h = clamp_channel(value, 0.0, 360.0).floor(),
            (ColorSpace::Hsl(c), Channel::Saturation) => c.s = clamp_channel(value, 0.0, 100.0),
            (ColorSpace::Hsl(c), Channel::Lightness) => c.l = clamp_channel(value, 0.0, 100.0),
            (ColorSpace::Hsv(c), Channel::Hue) => c.h = clamp_channel(value, 0.0, 360.0).floor(),
            (ColorSpace::Hsv(c), Channel::Saturation) => c.s = clamp_channel(value, 0.0, 100.0),
            (ColorSpace::Hsv(c), Channel::Value) => c.v = clamp_channel(value, 0.0, 100.0),
            (ColorSpace::Hwb(c), Channel::Hue) => c.h = clamp_channel(value, 0.0, 360.0).floor(),
            (ColorSpace::Hwb(c), Channel::Whiteness) => c.w = clamp_channel(value, 0.0, 100.0),
            (ColorSpace::Hwb(c), Channel::Blackness) => c.b = clamp_channel(value, 0.0, 100.0),
            _ => {}
        }
        self
    }

    /// The stored RGBA record, when this value is in the RGBA model
    pub fn rgba(&self) -> Option<Rgba> {
        match self {
            ColorSpace::Rgba(c) => Some(*c),
            _ => None,
        }
    }

    /// The stored HSL record, when this value is in the HSL model
    pub fn hsl(&self) -> Option<Hsl> {
        match self {
            ColorSpace::Hsl(c) => Some(*c),
            _ => None,
        }
    }

    /// The stored HSV record, when this value is in the HSV model
    pub fn hsv(&self) -> Option<Hsv> {
        match self {
            ColorSpace::Hsv(c) => Some(*c),
            _ => None,
        }
    }

    /// The stored HWB record, when this value is in the HWB model
    pub fn hwb(&self) -> Option<Hwb> {
        match self {
            ColorSpace::Hwb(c) => Some(*c),
            _ => None,
        }
    }

    /// Channels of the stored model in declaration order
    pub fn to_array(&self) -> Vec<f32> {
        match self {
            ColorSpace::Rgba(c) => c.to_array().to_vec(),
            ColorSpace::Hsl(c) => c.to_array().to_vec(),
            ColorSpace::Hsv(c) => c.to_array().to_vec(),
            ColorSpace::Hwb(c) => c.to_array().to_vec(),
        }
    }

    /// Renders the value as a lowercase, zero-padded hex string, converting
    /// to RGBA first when needed
    pub fn to_hex_string(&self, remove_hashtag: bool) -> String {
        hex::rgba_to_hex(self.resolve_rgba(), remove_hashtag)
    }

    /// Lightens the color by a ratio relative to its current lightness
    pub fn lighten(&mut self, ratio: f32) -> &mut Self {
        let mut hsl = self.resolve_hsl();
        hsl.l = scale_channel(hsl.l, ratio, true);
        self.store_hsl(hsl);
        self
    }

    /// Darkens the color by a ratio relative to its current lightness
    pub fn darken(&mut self, ratio: f32) -> &mut Self {
        let mut hsl = self.resolve_hsl();
        hsl.l = scale_channel(hsl.l, ratio, false);
        self.store_hsl(hsl);
        self
    }

    /// Saturates the color by a ratio relative to its current saturation
    pub fn saturate(&mut self, ratio: f32) -> &mut Self {
        let mut hsl = self.resolve_hsl();
        hsl.s = scale_channel(hsl.s, ratio, true);
        self.store_hsl(hsl);
        self
    }

    /// Desaturates the color by a ratio relative to its current saturation
    pub fn desaturate(&mut self, ratio: f32) -> &mut Self {
        let mut hsl = self.resolve_hsl();
        hsl.s = scale_channel(hsl.s, ratio, false);
        self.store_hsl(hsl);
        self
    }

    /// Rotates the hue by the given number of degrees, wrapping at 360
    pub fn rotate(&mut self, degrees: f32) -> &mut Self {
        let mut hsl = self.resolve_hsl();
        hsl.h = rotate_hue(hsl.h, degrees);
        self.store_hsl(hsl);
        self
    }

    /// Whitens the color by a ratio relative to its current whiteness
    pub fn whiten(&mut self, ratio: f32) -> &mut Self {
        let mut hwb = self.resolve_hwb();
        hwb.w = scale_channel(hwb.w, ratio, true);
        self.store_hwb(hwb);
        self
    }

    /// Blackens the color by a ratio relative to its current blackness
    pub fn blacken(&mut self, ratio: f32) -> &mut Self {
        let mut hwb = self.resolve_hwb();
        hwb.b = scale_channel(hwb.b, ratio, true);
        self.store_hwb(hwb);
        self
    }

    /// Collapses the color to its weighted luma gray
    pub fn grayscale(&mut self) -> &mut Self {
        let rgba = self.resolve_rgba().grayscale();
        self.store_rgba(rgba);
        self
    }

    /// Mixes another color into this one by the given weight, blending in
    /// RGBA space with alpha-aware weighting
    pub fn mix(&mut self, other: &ColorSpace, weight: f32) -> &mut Self {
        let mixed = self.resolve_rgba().mix(other.resolve_rgba(), weight);
        self.store_rgba(mixed);
        self
    }

    /// Reduces alpha by a ratio relative to its current value
    pub fn fade(&mut self, ratio: f32) -> &mut Self {
        let rgba = self.resolve_rgba().fade(ratio);
        self.store_rgba(rgba);
        self
    }

    /// Increases alpha by a ratio relative to its current value
    pub fn fill(&mut self, ratio: f32) -> &mut Self {
        let rgba = self.resolve_rgba().fill(ratio);
        self.store_rgba(rgba);
        self
    }

    /// Replaces alpha with the given opacity, accepted as a fraction or a
    /// percent
    pub fn set_opacity(&mut self, percent: f32) -> &mut Self {
        let rgba = self.resolve_rgba().with_opacity(percent);
        self.store_rgba(rgba);
        self
    }

    fn resolve_rgba(&self) -> Rgba {
        match self {
            ColorSpace::Rgba(c) => *c,
            ColorSpace::Hsl(c) => c.to_rgba(),
            ColorSpace::Hsv(c) => c.to_rgba(),
            ColorSpace::Hwb(c) => c.to_rgba(),
        }
    }

    fn resolve_hsl(&self) -> Hsl {
        match self {
            ColorSpace::Rgba(c) => Hsl::from_rgba(*c),
            ColorSpace::Hsl(c) => *c,
            ColorSpace::Hsv(c) => c.to_hsl(),
            ColorSpace::Hwb(c) => c.to_hsl(),
        }
    }

    fn resolve_hsv(&self) -> Hsv {
        match self {
            ColorSpace::Rgba(c) => Hsv::from_rgba(*c),
            ColorSpace::Hsl(c) => c.to_hsv(),
            ColorSpace::Hsv(c) => *c,
            ColorSpace::Hwb(c) => c.to_hsv(),
        }
    }

    fn resolve_hwb(&self) -> Hwb {
        match self {
            ColorSpace::Rgba(c) => Hwb::from_rgba(*c),
            ColorSpace::Hsl(c) => c.to_hwb(),
            ColorSpace::Hsv(c) => c.to_hwb(),
            ColorSpace::Hwb(c) => *c,
        }
    }

    fn store_rgba(&mut self, rgba: Rgba) {
        *self = match self.model_type() {
            ModelType::Rgb => ColorSpace::Rgba(rgba),
            ModelType::Hsl => ColorSpace::Hsl(Hsl::from_rgba(rgba).quantize()),
            ModelType::Hsv => ColorSpace::Hsv(Hsv::from_rgba(rgba).quantize()),
            ModelType::Hwb => ColorSpace::Hwb(Hwb::from_rgba(rgba).quantize()),
        };
    }

    fn store_hsl(&mut self, hsl: Hsl) {
        *self = match self.model_type() {
            ModelType::Rgb => ColorSpace::Rgba(hsl.to_rgba()),
            ModelType::Hsl => ColorSpace::Hsl(hsl.quantize()),
            ModelType::Hsv => ColorSpace::Hsv(hsl.to_hsv().quantize()),
            ModelType::Hwb => ColorSpace::Hwb(hsl.to_hwb().quantize()),
        };
    }

    fn store_hwb(&mut self, hwb: Hwb) {
        *self = match self.model_type() {
            ModelType::Rgb => ColorSpace::Rgba(hwb.to_rgba()),
            ModelType::Hsl => ColorSpace::Hsl(hwb.to_hsl().quantize()),
            ModelType::Hsv => ColorSpace::Hsv(hwb.to_hsv().quantize()),
            ModelType::Hwb => ColorSpace::Hwb(hwb.quantize()),
        };
    }
}

impl From<Rgba> for ColorSpace {
    #[inline]
    fn from(value: Rgba) -> Self {
        ColorSpace::Rgba(value)
    }
}

impl From<Hsl> for ColorSpace {
    #[inline]
    fn from(value: Hsl) -> Self {
        ColorSpace::Hsl(value)
    }
}

impl From<Hsv> for ColorSpace {
    #[inline]
    fn from(value: Hsv) -> Self {
        ColorSpace::Hsv(value)
    }
}

impl From<Hwb> for ColorSpace {
    #[inline]
    fn from(value: Hwb) -> Self {
        ColorSpace::Hwb(value)
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpace::Rgba(c) => c.fmt(f),
            ColorSpace::Hsl(c) => c.fmt(f),
            ColorSpace::Hsv(c) => c.fmt(f),
            ColorSpace::Hwb(c) => c.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_hsl_space() {
        let hsl = ColorSpace::from_hex("#30e57f")
            .to_space(ModelType::Hsl)
            .unwrap();
        assert_eq!(hsl.to_string(), "hsl(146,78%,54%)");
        assert_eq!(hsl.model_type(), ModelType::Hsl);
    }

    #[test]
    fn same_space_conversion_is_absent() {
        let color = ColorSpace::rgb(48, 229, 127);
        assert_eq!(color.to_space(ModelType::Rgb), None);
        assert!(color.to_space(ModelType::Hwb).is_some());
    }

    #[test]
    fn whiten_collapses_saturation() {
        let mut color = ColorSpace::hsl(144.0, 50.0, 75.0);
        color.whiten(0.42);
        assert_eq!(color.to_string(), "hsl(144,0%,88%)");
    }

    #[test]
    fn rotation_through_hsl() {
        let mut color = ColorSpace::rgba(200, 128, 75, 1.0);
        color.rotate(90.0);
        assert_eq!(color.to_string(), "rgb(86,200,76)");
    }

    #[test]
    fn darken_scales_relative_to_current_lightness() {
        let mut color = ColorSpace::rgb(100, 100, 100);
        color.darken(0.2);
        assert_eq!(color.to_string(), "rgb(79,79,79)");
    }

    #[test]
    fn grayscale_on_hue_space() {
        let mut color = ColorSpace::hsl(146.0, 78.0, 54.0);
        color.grayscale();
        assert_eq!(color.to_string(), "hsl(0,0%,64%)");
    }

    #[test]
    fn mix_boundary_weights() {
        let other = ColorSpace::rgb(10, 20, 30);
        let mut kept = ColorSpace::rgb(200, 128, 75);
        kept.mix(&other, 0.0);
        assert_eq!(kept, ColorSpace::rgb(200, 128, 75));
        let mut replaced = ColorSpace::rgb(200, 128, 75);
        replaced.mix(&other, 1.0);
        assert_eq!(replaced, ColorSpace::rgb(10, 20, 30));
    }

    #[test]
    fn mix_even_blend() {
        let mut base = ColorSpace::rgb(255, 255, 255);
        base.mix(&ColorSpace::rgb(0, 0, 0), 0.5);
        assert_eq!(base, ColorSpace::rgb(128, 128, 128));
    }

    #[test]
    fn chained_mutations_stay_clamped() {
        let mut color = ColorSpace::hsl(300.0, 80.0, 60.0);
        color.lighten(100.0).saturate(5.0).rotate(-480.0).blacken(0.3);
        let hue = color.channel(Channel::Hue).unwrap();
        let saturation = color.channel(Channel::Saturation).unwrap();
        let lightness = color.channel(Channel::Lightness).unwrap();
        assert!((0.0..360.0).contains(&hue));
        assert!((0.0..=100.0).contains(&saturation));
        assert!((0.0..=100.0).contains(&lightness));
    }

    #[test]
    fn alpha_ops_on_rgba() {
        let mut color = ColorSpace::rgba(10, 20, 30, 0.8);
        color.fade(0.25);
        assert!((color.channel(Channel::Alpha).unwrap() - 0.6).abs() < 1e-6);
        color.set_opacity(50.0);
        assert!((color.channel(Channel::Alpha).unwrap() - 0.5).abs() < 1e-6);
        color.fill(1.0);
        assert_eq!(color.channel(Channel::Alpha), Some(1.0));
    }

    #[test]
    fn channel_access_is_model_keyed() {
        let color = ColorSpace::rgb(200, 128, 75);
        assert_eq!(color.channel(Channel::Red), Some(200.0));
        assert_eq!(color.channel(Channel::Hue), None);
        let hsl = ColorSpace::hsl(146.0, 78.0, 54.0);
        assert_eq!(hsl.channel(Channel::Lightness), Some(54.0));
        assert_eq!(hsl.channel(Channel::Blue), None);
    }

    #[test]
    fn set_channel_applies_domain_rules() {
        let mut color = ColorSpace::rgb(0, 0, 0);
        color.set_channel(Channel::Red, 300.0);
        assert_eq!(color.channel(Channel::Red), Some(255.0));
        // foreign channels are ignored
        color.set_channel(Channel::Hue, 90.0);
        assert_eq!(color.channel(Channel::Hue), None);

        let mut hsl = ColorSpace::hsl(0.0, 0.0, 0.0);
        hsl.set_channel(Channel::Hue, 450.7);
        assert_eq!(hsl.channel(Channel::Hue), Some(360.0));
        hsl.set_channel(Channel::Saturation, 50.5);
        assert_eq!(hsl.channel(Channel::Saturation), Some(50.5));
    }

    #[test]
    fn array_and_record_accessors() {
        let color = ColorSpace::hsl(146.0, 78.0, 54.0);
        assert_eq!(color.to_array(), vec![146.0, 78.0, 54.0]);
        assert_eq!(color.hsl(), Some(Hsl::new(146.0, 78.0, 54.0)));
        assert_eq!(color.rgba(), None);
        let rgba = ColorSpace::rgba(1, 2, 3, 0.5);
        assert_eq!(rgba.to_array(), vec![1.0, 2.0, 3.0, 0.5]);
    }

    #[test]
    fn named_construction() {
        let tomato = ColorSpace::from_css_color("tomato").unwrap();
        assert_eq!(tomato, ColorSpace::rgb(255, 99, 71));
        assert_eq!(ColorSpace::from_css_color("not-a-color"), None);
    }

    #[test]
    fn hex_output_pads_channels() {
        let color = ColorSpace::rgb(1, 2, 3);
        assert_eq!(color.to_hex_string(false), "#010203");
        assert_eq!(color.to_hex_string(true), "010203");
        let hsl = ColorSpace::hsl(146.0, 78.0, 54.0);
        assert_eq!(hsl.to_hex_string(false), "#2ee57e");
    }

    #[test]
    fn clone_is_independent() {
        let original = ColorSpace::rgb(200, 128, 75);
        let mut copy = original;
        copy.lighten(0.2);
        assert_eq!(original, ColorSpace::rgb(200, 128, 75));
        assert_ne!(original, copy);
    }
}
