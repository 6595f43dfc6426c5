#![forbid(unsafe_code)]

//! Deterministic identicon kernel.
//!
//! # Role in blockies-rs
//! `blockies-core` turns an arbitrary seed string into a scaled RGBA
//! pixel buffer, reproducing the blockies generation scheme bit for
//! bit: the same seed always yields the same image, across runs and
//! platforms.
//!
//! # Primary responsibilities
//! - **[`SeededRng`]**: four-word i32 xorshift stream seeded from the
//!   input string, with the reference's exact wraparound semantics.
//! - **[`PatternGrid`]**: mirror-symmetric cell grid drawn from the
//!   stream.
//! - **[`Palette`]**/**[`Hsl`]**: the three derived colors and their
//!   conversion to packed RGBA.
//! - **[`rasterize`]**: flat-filled `scale x scale` blocks into a
//!   [`RasterBuffer`].
//!
//! # How it fits in the system
//! The stream order is fixed: every pattern cell is drawn first, then
//! primary, background, and spot colors. [`Icon`] (or the [`generate`]
//! shorthand) runs that sequence end to end. Encoding the finished
//! buffer to an image container lives in `blockies-image`, which
//! consumes the buffer through its RGBA8 byte view.
//!
//! Determinism is the contract; unpredictability is a non-goal. The
//! stream is not cryptographic and must never be treated as one.

pub mod color;
pub mod icon;
pub mod pattern;
pub mod raster;
pub mod rng;

pub use color::{Hsl, PackedRgba, Palette};
pub use icon::{DEFAULT_SCALE, DEFAULT_SIZE, Icon, generate};
pub use pattern::PatternGrid;
pub use raster::{RasterBuffer, RasterError, rasterize};
pub use rng::SeededRng;
