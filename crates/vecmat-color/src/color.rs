//! RGB and RGBA color types.
//!
//! [`Color3f`] is an opaque RGB triple, [`Color4f`] adds an alpha channel.
//! All arithmetic is component-wise and unclamped; `blend` is the
//! component-wise product (modulate), the same operation as the `Mul`
//! operator on two colors.

use std::ops::{Add, Div, Mul, Sub};

/// Rec.709 luminance coefficients `[R, G, B]`.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// An RGB color with `f32` channels.
///
/// Channels are nominally in `[0.0, 1.0]` but are never clamped by
/// arithmetic; use [`clamped01`](Self::clamped01) to bring a result back
/// into range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color3f {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

/// An RGBA color with `f32` channels.
///
/// Alpha participates in `Add`/`Sub`/`blend` like any other channel; the
/// helpers that only make sense on color channels (`inverted`, `darker`,
/// `lighter`, `luminance`) leave alpha alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color4f {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel (1.0 = opaque).
    pub a: f32,
}

impl Color3f {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// Pure red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Pure green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Pure blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a color from channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit channel values, mapped to `[0.0, 1.0]`.
    #[inline]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Multiplies the two colors channel by channel (modulate).
    #[inline]
    pub fn blend(self, other: Self) -> Self {
        self * other
    }

    /// Returns the color with each channel replaced by `1.0 - channel`.
    #[inline]
    pub fn inverted(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b)
    }

    /// Returns the color scaled towards black by `k` in `[0.0, 1.0]`.
    #[inline]
    pub fn darker(self, k: f32) -> Self {
        self * (1.0 - k)
    }

    /// Returns the color moved towards white by `k` in `[0.0, 1.0]`.
    #[inline]
    pub fn lighter(self, k: f32) -> Self {
        self + (Self::WHITE - self) * k
    }

    /// Linear interpolation towards `other` by `weight` (unclamped).
    #[inline]
    pub fn lerp(self, other: Self, weight: f32) -> Self {
        self + (other - self) * weight
    }

    /// Rec.709 luminance of the color.
    #[inline]
    pub fn luminance(self) -> f32 {
        self.r * REC709_LUMA[0] + self.g * REC709_LUMA[1] + self.b * REC709_LUMA[2]
    }

    /// Returns the color with each channel clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn clamped01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Returns true if each channel is within tolerance of the matching
    /// channel of `other`.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        vecmat_core::f32::approx_eq(self.r, other.r)
            && vecmat_core::f32::approx_eq(self.g, other.g)
            && vecmat_core::f32::approx_eq(self.b, other.b)
    }
}

impl Color4f {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a color from channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from 8-bit channel values, mapped to `[0.0, 1.0]`.
    #[inline]
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Multiplies the two colors channel by channel, alpha included
    /// (modulate).
    #[inline]
    pub fn blend(self, other: Self) -> Self {
        self * other
    }

    /// Returns the color with each color channel replaced by
    /// `1.0 - channel`; alpha is preserved.
    #[inline]
    pub fn inverted(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Returns the color scaled towards black by `k` in `[0.0, 1.0]`;
    /// alpha is preserved.
    #[inline]
    pub fn darker(self, k: f32) -> Self {
        Self::new(self.r * (1.0 - k), self.g * (1.0 - k), self.b * (1.0 - k), self.a)
    }

    /// Returns the color moved towards white by `k` in `[0.0, 1.0]`;
    /// alpha is preserved.
    #[inline]
    pub fn lighter(self, k: f32) -> Self {
        Self::new(
            self.r + (1.0 - self.r) * k,
            self.g + (1.0 - self.g) * k,
            self.b + (1.0 - self.b) * k,
            self.a,
        )
    }

    /// Linear interpolation towards `other` by `weight` (unclamped), all
    /// four channels.
    #[inline]
    pub fn lerp(self, other: Self, weight: f32) -> Self {
        self + (other - self) * weight
    }

    /// Rec.709 luminance of the color channels; alpha does not
    /// participate.
    #[inline]
    pub fn luminance(self) -> f32 {
        self.r * REC709_LUMA[0] + self.g * REC709_LUMA[1] + self.b * REC709_LUMA[2]
    }

    /// Returns the color with each channel clamped to `[0.0, 1.0]`.
    #[inline]
    pub fn clamped01(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    /// Returns true if each channel is within tolerance of the matching
    /// channel of `other`.
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        vecmat_core::f32::approx_eq(self.r, other.r)
            && vecmat_core::f32::approx_eq(self.g, other.g)
            && vecmat_core::f32::approx_eq(self.b, other.b)
            && vecmat_core::f32::approx_eq(self.a, other.a)
    }
}

impl Add for Color3f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color3f {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul for Color3f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for Color3f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color3f> for f32 {
    type Output = Color3f;

    #[inline]
    fn mul(self, rhs: Color3f) -> Color3f {
        rhs * self
    }
}

impl Div<f32> for Color3f {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl Add for Color4f {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl Sub for Color4f {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl Mul for Color4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

impl Mul<f32> for Color4f {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Color4f> for f32 {
    type Output = Color4f;

    #[inline]
    fn mul(self, rhs: Color4f) -> Color4f {
        rhs * self
    }
}

impl Div<f32> for Color4f {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}

impl From<Color3f> for Color4f {
    /// Adds an opaque alpha channel.
    #[inline]
    fn from(c: Color3f) -> Self {
        Self::new(c.r, c.g, c.b, 1.0)
    }
}

impl From<Color4f> for Color3f {
    /// Drops the alpha channel.
    #[inline]
    fn from(c: Color4f) -> Self {
        Self::new(c.r, c.g, c.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_color3_eq(a: Color3f, b: Color3f) {
        assert_abs_diff_eq!(a.r, b.r, epsilon = 1e-6);
        assert_abs_diff_eq!(a.g, b.g, epsilon = 1e-6);
        assert_abs_diff_eq!(a.b, b.b, epsilon = 1e-6);
    }

    fn assert_color4_eq(a: Color4f, b: Color4f) {
        assert_abs_diff_eq!(a.r, b.r, epsilon = 1e-6);
        assert_abs_diff_eq!(a.g, b.g, epsilon = 1e-6);
        assert_abs_diff_eq!(a.b, b.b, epsilon = 1e-6);
        assert_abs_diff_eq!(a.a, b.a, epsilon = 1e-6);
    }

    #[test]
    fn test_sum_colors() {
        let c1 = Color3f::new(0.1, 0.2, 0.3);
        let c2 = Color3f::new(0.5, 0.6, 0.7);
        assert_color3_eq(c1 + c2, Color3f::new(0.6, 0.8, 1.0));

        let c1 = Color4f::new(0.1, 0.2, 0.3, 0.5);
        let c2 = Color4f::new(0.5, 0.6, 0.7, 0.5);
        assert_color4_eq(c1 + c2, Color4f::new(0.6, 0.8, 1.0, 1.0));
    }

    #[test]
    fn test_subtract_colors() {
        let c1 = Color3f::new(0.5, 0.6, 0.7);
        let c2 = Color3f::new(0.1, 0.2, 0.3);
        assert_color3_eq(c1 - c2, Color3f::new(0.4, 0.4, 0.4));

        let c1 = Color4f::new(0.5, 0.6, 0.7, 0.5);
        let c2 = Color4f::new(0.1, 0.2, 0.3, 0.5);
        assert_color4_eq(c1 - c2, Color4f::new(0.4, 0.4, 0.4, 0.0));
    }

    #[test]
    fn test_blend_is_componentwise_multiply() {
        let c1 = Color3f::new(0.1, 0.2, 0.3);
        let c2 = Color3f::new(0.5, 0.6, 0.7);
        assert_eq!(c1.blend(c2), c1 * c2);
        assert_color3_eq(c1.blend(c2), Color3f::new(0.05, 0.12, 0.21));

        let c1 = Color4f::new(0.1, 0.2, 0.3, 0.5);
        let c2 = Color4f::new(0.5, 0.6, 0.7, 0.5);
        assert_eq!(c1.blend(c2), c1 * c2);
        assert_color4_eq(c1.blend(c2), Color4f::new(0.05, 0.12, 0.21, 0.25));
    }

    #[test]
    fn test_multiply_scalar() {
        let c = Color3f::new(0.1, 0.2, 0.3);
        assert_color3_eq(c * 1.5, Color3f::new(0.15, 0.3, 0.45));
        assert_color3_eq(1.5 * c, c * 1.5);
        assert_color3_eq((c * 2.0) / 2.0, c);

        let c = Color4f::new(0.1, 0.2, 0.3, 0.5);
        assert_color4_eq(c * 1.5, Color4f::new(0.15, 0.3, 0.45, 0.75));
    }

    #[test]
    fn test_rgb_from_bytes() {
        assert_color3_eq(Color3f::rgb(255, 0, 0), Color3f::RED);
        assert_color3_eq(Color3f::rgb(0, 0, 0), Color3f::BLACK);
        let c = Color3f::rgb(51, 102, 153);
        assert_color3_eq(c, Color3f::new(0.2, 0.4, 0.6));
        assert_color4_eq(Color4f::rgba(255, 255, 255, 0), Color4f::new(1.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn test_inverted() {
        assert_color3_eq(Color3f::WHITE.inverted(), Color3f::BLACK);
        assert_color3_eq(Color3f::RED.inverted(), Color3f::new(0.0, 1.0, 1.0));
        let c = Color4f::new(0.2, 0.4, 0.6, 0.5);
        let inv = c.inverted();
        assert_color4_eq(inv, Color4f::new(0.8, 0.6, 0.4, 0.5));
        assert_eq!(inv.a, c.a);
    }

    #[test]
    fn test_darker_lighter() {
        let c = Color3f::new(0.4, 0.6, 0.8);
        assert_color3_eq(c.darker(0.5), Color3f::new(0.2, 0.3, 0.4));
        assert_color3_eq(c.lighter(0.5), Color3f::new(0.7, 0.8, 0.9));
        assert_color3_eq(c.darker(0.0), c);
        assert_color3_eq(c.lighter(1.0), Color3f::WHITE);

        let c = Color4f::new(0.4, 0.6, 0.8, 0.5);
        assert_eq!(c.darker(0.5).a, 0.5);
        assert_eq!(c.lighter(0.5).a, 0.5);
    }

    #[test]
    fn test_lerp() {
        let from = Color4f::BLACK;
        let to = Color4f::WHITE;
        assert_color4_eq(from.lerp(to, 0.0), from);
        assert_color4_eq(from.lerp(to, 1.0), to);
        assert_color4_eq(from.lerp(to, 0.5), Color4f::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_luminance() {
        assert_abs_diff_eq!(Color3f::WHITE.luminance(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Color3f::BLACK.luminance(), 0.0);
        assert_abs_diff_eq!(Color3f::GREEN.luminance(), 0.7152);
        let luma = Color3f::new(0.5, 0.3, 0.2).luminance();
        assert_abs_diff_eq!(luma, 0.3353, epsilon = 1e-4);
        assert_abs_diff_eq!(Color4f::new(0.5, 0.3, 0.2, 0.0).luminance(), luma);
    }

    #[test]
    fn test_clamped01() {
        let c = Color3f::new(1.5, -0.5, 0.5).clamped01();
        assert_color3_eq(c, Color3f::new(1.0, 0.0, 0.5));
        let c = (Color4f::WHITE + Color4f::WHITE).clamped01();
        assert_color4_eq(c, Color4f::WHITE);
    }

    #[test]
    fn test_conversions() {
        let c3 = Color3f::new(0.1, 0.2, 0.3);
        let c4 = Color4f::from(c3);
        assert_eq!(c4, Color4f::new(0.1, 0.2, 0.3, 1.0));
        assert_eq!(Color3f::from(c4), c3);
        assert_eq!(Color3f::from(Color4f::TRANSPARENT), Color3f::BLACK);
    }

    #[test]
    fn test_approx_eq() {
        let c = Color3f::new(0.1, 0.2, 0.3);
        assert!(c.approx_eq(c + Color3f::new(1e-8, 0.0, 0.0)));
        assert!(!c.approx_eq(Color3f::new(0.1, 0.2, 0.4)));
        assert!(!Color4f::new(f32::NAN, 0.0, 0.0, 0.0).approx_eq(Color4f::new(f32::NAN, 0.0, 0.0, 0.0)));
    }
}
