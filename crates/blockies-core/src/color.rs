#![forbid(unsafe_code)]

//! Palette derivation and color conversion.
//!
//! Colors come out of the seeded stream as HSL with integer-truncated
//! components, then convert to packed RGBA through the canonical
//! two-segment HSL formula. Hue spans the full wheel, saturation is
//! biased into `[40, 100)` so palettes never wash out, and lightness
//! is the sum of four draws scaled by 25: a central-limit smoothing
//! that clusters values toward mid-lightness.

use crate::rng::SeededRng;

/// A compact RGBA color.
///
/// - **Size:** 4 bytes, one pixel of the raster buffer.
/// - **Layout:** `0xRRGGBBAA` (R in bits 31..24, A in bits 7..0).
///
/// Derived palette colors are always fully opaque; the alpha channel
/// exists so the buffer can hand encoders a standard RGBA8 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[repr(transparent)]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Channels as `[r, g, b, a]`, the order encoders expect.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

/// An HSL color as the derivation stores it: integer-truncated hue in
/// `[0, 360)`, saturation in `[40, 100)`, and lightness usually in
/// `[0, 100]` but occasionally above (the four-draw sum is unclamped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u32,
    pub s: u32,
    pub l: u32,
}

impl Hsl {
    /// Derive one color from the stream: three components, six draws.
    ///
    /// Components truncate to integers on storage, matching the
    /// reference representation.
    #[must_use]
    pub fn derive(rng: &mut SeededRng) -> Self {
        let h = (rng.next_f64() * 360.0).floor() as u32;
        let s = (rng.next_f64() * 60.0 + 40.0) as u32;
        let l = ((rng.next_f64() + rng.next_f64() + rng.next_f64() + rng.next_f64()) * 25.0) as u32;
        Self { h, s, l }
    }

    /// Convert to a fully opaque packed RGBA pixel.
    ///
    /// Channels scale by 255 and truncate toward zero; lightness above
    /// 100 saturates channels at 255 rather than wrapping.
    #[must_use]
    pub fn to_rgba(self) -> PackedRgba {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;
        let (r, g, b) = hsl_to_rgb(h, s, l);
        PackedRgba::rgb(
            (r * 255.0) as u8,
            (g * 255.0) as u8,
            (b * 255.0) as u8,
        )
    }
}

/// The three derived colors of one identicon, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: Hsl,
    pub background: Hsl,
    pub spot: Hsl,
}

impl Palette {
    /// Derive the palette: exactly three colors, primary first, then
    /// background, then spot. The order is part of the fixed stream
    /// layout and must not change.
    #[must_use]
    pub fn derive(rng: &mut SeededRng) -> Self {
        let primary = Hsl::derive(rng);
        let background = Hsl::derive(rng);
        let spot = Hsl::derive(rng);
        Self {
            primary,
            background,
            spot,
        }
    }
}

/// Canonical two-segment HSL to RGB, all components normalized to
/// `[0, 1]`. Achromatic input (`s == 0`) short-circuits to gray.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { (l + s) - (l * s) };
    let p = 2.0 * l - q;
    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

/// Hue-rotation helper: wrap `t` into `[0, 1]`, then pick one of the
/// four piecewise-linear segments.
fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    } else if t > 1.0 {
        t -= 1.0;
    }
    if 6.0 * t < 1.0 {
        p + (q - p) * 6.0 * t
    } else if 2.0 * t < 1.0 {
        q
    } else if 3.0 * t < 2.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
