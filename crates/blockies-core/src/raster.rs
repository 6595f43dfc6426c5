#![forbid(unsafe_code)]

//! Rasterization of pattern grids into pixel buffers.
//!
//! One implementation serves every output path: the buffer it
//! produces is a plain row-major RGBA grid, and byte-stream or file
//! encoders sit on top of it as thin adapters. Each cell becomes a
//! flat-filled `scale x scale` block; there is no anti-aliasing and
//! no blending.

use core::fmt;

use crate::color::PackedRgba;
use crate::pattern::{CELL_BACKGROUND, CELL_PRIMARY, PatternGrid};

/// Rasterization failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// Grid length has no integer square root, so no cell width can
    /// be recovered from it. Rejected outright rather than truncating
    /// the computed dimension.
    InvalidGrid { len: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { len } => {
                write!(f, "grid length {len} is not a perfect square")
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// A finished square pixel buffer, row-major RGBA.
///
/// Produced once by [`rasterize`] and never mutated afterwards;
/// encoders receive it by shared reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    pixels: Vec<PackedRgba>,
}

impl RasterBuffer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![PackedRgba::BLACK; (width * height) as usize],
        }
    }

    /// Buffer width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at `(x, y)`; black for out-of-bounds coordinates.
    #[inline]
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> PackedRgba {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            PackedRgba::BLACK
        }
    }

    /// Row-major pixel slice.
    #[must_use]
    pub fn pixels(&self) -> &[PackedRgba] {
        &self.pixels
    }

    /// Flat `[r, g, b, a]` byte stream, the layout PNG and friends
    /// consume directly.
    #[must_use]
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for pixel in &self.pixels {
            bytes.extend_from_slice(&pixel.to_bytes());
        }
        bytes
    }

    /// Flat-fill the `scale x scale` block whose top-left pixel is
    /// `(x0, y0)`. Callers guarantee the block is in bounds.
    #[inline]
    fn fill_block(&mut self, x0: usize, y0: usize, scale: usize, color: PackedRgba) {
        let width = self.width as usize;
        for y in y0..y0 + scale {
            let row = y * width;
            for x in x0..x0 + scale {
                self.pixels[row + x] = color;
            }
        }
    }
}

/// Rasterize a grid into a `(width * scale)`-square buffer.
///
/// Cell class selects the color: `1` primary, any other non-zero
/// value spot, `0` background. The grid length must be a perfect
/// square; anything else is a contract violation and comes back as
/// [`RasterError::InvalidGrid`].
pub fn rasterize(
    grid: &PatternGrid,
    primary: PackedRgba,
    background: PackedRgba,
    spot: PackedRgba,
    scale: usize,
) -> Result<RasterBuffer, RasterError> {
    let len = grid.len();
    let grid_width = len.isqrt();
    if grid_width * grid_width != len {
        return Err(RasterError::InvalidGrid { len });
    }

    let side = grid_width * scale;
    let mut buffer = RasterBuffer::new(side as u32, side as u32);
    for (i, &cell) in grid.cells().iter().enumerate() {
        let row = i / grid_width;
        let col = i % grid_width;
        let color = match cell {
            CELL_PRIMARY => primary,
            CELL_BACKGROUND => background,
            _ => spot,
        };
        buffer.fill_block(col * scale, row * scale, scale, color);
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: PackedRgba = PackedRgba::rgb(10, 20, 30);
    const BACKGROUND: PackedRgba = PackedRgba::rgb(200, 200, 200);
    const SPOT: PackedRgba = PackedRgba::rgb(250, 0, 0);

    fn raster(cells: Vec<u8>, scale: usize) -> Result<RasterBuffer, RasterError> {
        rasterize(
            &PatternGrid::from_cells(cells),
            PRIMARY,
            BACKGROUND,
            SPOT,
            scale,
        )
    }

    #[test]
    fn output_is_grid_width_times_scale() {
        let buffer = raster(vec![0; 64], 4).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (32, 32));
        assert_eq!(buffer.pixels().len(), 32 * 32);
    }

    #[test]
    fn non_square_grid_is_rejected() {
        assert_eq!(raster(vec![0; 5], 4), Err(RasterError::InvalidGrid { len: 5 }));
        // 7 * 6 cells: what an odd-size pattern produces.
        assert_eq!(
            raster(vec![0; 42], 4),
            Err(RasterError::InvalidGrid { len: 42 })
        );
    }

    #[test]
    fn invalid_grid_error_names_the_length() {
        let err = raster(vec![1, 2, 3], 4).unwrap_err();
        assert_eq!(err.to_string(), "grid length 3 is not a perfect square");
    }

    #[test]
    fn cell_class_selects_color() {
        let buffer = raster(vec![0, 1, 2, 0], 1).unwrap();
        assert_eq!(buffer.get_pixel(0, 0), BACKGROUND);
        assert_eq!(buffer.get_pixel(1, 0), PRIMARY);
        assert_eq!(buffer.get_pixel(0, 1), SPOT);
        assert_eq!(buffer.get_pixel(1, 1), BACKGROUND);
    }

    #[test]
    fn blocks_are_flat_filled() {
        let buffer = raster(vec![0, 1, 2, 0], 3).unwrap();
        for (cell_x, cell_y, expected) in [
            (0, 0, BACKGROUND),
            (1, 0, PRIMARY),
            (0, 1, SPOT),
            (1, 1, BACKGROUND),
        ] {
            for dy in 0..3 {
                for dx in 0..3 {
                    assert_eq!(
                        buffer.get_pixel(cell_x * 3 + dx, cell_y * 3 + dy),
                        expected,
                        "block ({cell_x},{cell_y}) offset ({dx},{dy})"
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_reads_are_black() {
        let buffer = raster(vec![1; 4], 2).unwrap();
        assert_eq!(buffer.get_pixel(100, 0), PackedRgba::BLACK);
        assert_eq!(buffer.get_pixel(0, 100), PackedRgba::BLACK);
    }

    #[test]
    fn empty_grid_yields_empty_buffer() {
        let buffer = raster(Vec::new(), 4).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (0, 0));
        assert!(buffer.pixels().is_empty());
    }

    #[test]
    fn rgba8_stream_matches_pixels() {
        let buffer = raster(vec![1], 1).unwrap();
        assert_eq!(buffer.to_rgba8(), vec![10, 20, 30, 255]);
    }
}
