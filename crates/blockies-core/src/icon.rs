#![forbid(unsafe_code)]

//! Icon generation entry point.
//!
//! Ties the stream together in its fixed order: seed the generator,
//! draw every pattern cell, then derive the three palette colors, then
//! rasterize. Any reordering changes the visual identity of every
//! seed, so the sequence lives in exactly one place.

use crate::color::Palette;
use crate::pattern::PatternGrid;
use crate::raster::{RasterBuffer, RasterError, rasterize};
use crate::rng::SeededRng;

/// Default grid side, in cells.
pub const DEFAULT_SIZE: usize = 8;
/// Default cell side, in pixels.
pub const DEFAULT_SCALE: usize = 4;

/// Identicon builder.
///
/// ```
/// use blockies_core::Icon;
///
/// let buffer = Icon::new()
///     .scale(8)
///     .render("0x8ba1f109551bd432803012645ac136ddd64dba72")?;
/// assert_eq!(buffer.width(), 64);
/// # Ok::<(), blockies_core::RasterError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    size: usize,
    scale: usize,
}

impl Icon {
    /// Builder with the reference defaults: 8x8 cells at 4 pixels per
    /// cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            scale: DEFAULT_SCALE,
        }
    }

    /// Grid side in cells. Odd sizes reproduce the reference's
    /// truncated half-width and fail at rasterization; see
    /// [`PatternGrid::generate`].
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Pixels per cell.
    #[must_use]
    pub const fn scale(mut self, scale: usize) -> Self {
        self.scale = scale;
        self
    }

    /// Generate the identicon for `seed`.
    ///
    /// Pure: the same seed and options always produce a byte-identical
    /// buffer. Each call owns a fresh [`SeededRng`], so concurrent
    /// renders never share state.
    pub fn render(&self, seed: &str) -> Result<RasterBuffer, RasterError> {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::debug_span!("render_icon", size = self.size, scale = self.scale).entered();

        let mut rng = SeededRng::from_seed(seed);
        let grid = PatternGrid::generate(self.size, &mut rng);
        let palette = Palette::derive(&mut rng);
        rasterize(
            &grid,
            palette.primary.to_rgba(),
            palette.background.to_rgba(),
            palette.spot.to_rgba(),
            self.scale,
        )
    }
}

impl Default for Icon {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate an identicon with the default options.
pub fn generate(seed: &str) -> Result<RasterBuffer, RasterError> {
    Icon::new().render(seed)
}
