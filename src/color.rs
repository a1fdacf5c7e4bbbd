//! Per-pixel color transforms and ARGB packing.
//!
//! Pixels are [`rgb::Rgba<u8>`]. Transform math runs in `f32` over the
//! 0..=255 range; results are clamped and rounded back to `u8` with the
//! same rule everywhere. Every operation is pure and total: it consumes
//! a `Copy` color and returns a new one, and nothing here can fail.

use rgb::Rgba;

/// Rec. 601 luma weights.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Brighten/darken scale factor. `darker` multiplies each channel by
/// this, `brighter` divides — directional inverses, not exact ones.
const DERIVE_FACTOR: f32 = 0.7;

/// Fraction of the channel-to-luma distance moved per saturation step.
const SATURATION_STEP: f32 = 0.3;

/// Clamp to the legal channel range, then round to `u8`.
#[inline]
fn narrow(v: f32) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}

/// Luma of a color in the 0..=255 range, unrounded.
#[inline]
fn luma(c: Rgba<u8>) -> f32 {
    LUMA_R * f32::from(c.r) + LUMA_G * f32::from(c.g) + LUMA_B * f32::from(c.b)
}

/// Apply one `f32` mapping to each of the three color channels,
/// preserving alpha.
#[inline]
fn map_rgb(c: Rgba<u8>, f: impl Fn(f32) -> f32) -> Rgba<u8> {
    Rgba {
        r: narrow(f(f32::from(c.r))),
        g: narrow(f(f32::from(c.g))),
        b: narrow(f(f32::from(c.b))),
        a: c.a,
    }
}

/// Pure color transforms on [`Rgba<u8>`].
///
/// All methods preserve alpha and keep every channel inside 0..=255.
pub trait ColorOps: Sized {
    /// Replace all three color channels with the Rec. 601 luma.
    fn grayscale(self) -> Self;

    /// Replace each color channel with `255 - channel`.
    ///
    /// Exact involution: `c.invert().invert() == c`.
    fn invert(self) -> Self;

    /// Scale each color channel toward the maximum.
    fn brighter(self) -> Self;

    /// Scale each color channel toward zero.
    fn darker(self) -> Self;

    /// Move each color channel away from the pixel's luma.
    fn saturate(self) -> Self;

    /// Move each color channel toward the pixel's luma.
    fn desaturate(self) -> Self;
}

impl ColorOps for Rgba<u8> {
    fn grayscale(self) -> Self {
        let gray = narrow(luma(self));
        Rgba {
            r: gray,
            g: gray,
            b: gray,
            a: self.a,
        }
    }

    fn invert(self) -> Self {
        Rgba {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
            a: self.a,
        }
    }

    fn brighter(self) -> Self {
        map_rgb(self, |v| v / DERIVE_FACTOR)
    }

    fn darker(self) -> Self {
        map_rgb(self, |v| v * DERIVE_FACTOR)
    }

    fn saturate(self) -> Self {
        let gray = luma(self);
        map_rgb(self, |v| v + (v - gray) * SATURATION_STEP)
    }

    fn desaturate(self) -> Self {
        let gray = luma(self);
        map_rgb(self, |v| v + (gray - v) * SATURATION_STEP)
    }
}

/// Unpack `0xAARRGGBB` into a color.
#[inline]
pub fn argb_to_color(argb: u32) -> Rgba<u8> {
    Rgba {
        r: (argb >> 16) as u8,
        g: (argb >> 8) as u8,
        b: argb as u8,
        a: (argb >> 24) as u8,
    }
}

/// Pack a color into `0xAARRGGBB`.
#[inline]
pub fn color_to_argb(c: Rgba<u8>) -> u32 {
    u32::from(c.a) << 24 | u32::from(c.r) << 16 | u32::from(c.g) << 8 | u32::from(c.b)
}
