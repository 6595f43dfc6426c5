#![forbid(unsafe_code)]

//! PNG encoding for raster buffers.
//!
//! The buffer's RGBA8 byte view goes straight into the `image` crate's
//! PNG encoder. Two thin adapters cover both output paths over the one
//! rasterizer: [`encode_png`] returns bytes, [`save_png`] writes a
//! file. [`icon_bytes`] and [`save_icon`] bundle generation and
//! encoding into the one-call forms most callers want.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use blockies_core::{RasterBuffer, RasterError, generate};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use core::fmt;

/// Failure while producing a PNG artifact.
#[derive(Debug)]
pub enum PngError {
    /// Generation itself failed (non-square grid).
    Raster(RasterError),
    /// The PNG encoder rejected the buffer.
    Encode(image::ImageError),
    /// The destination could not be created or written.
    Io(std::io::Error),
}

impl fmt::Display for PngError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raster(err) => write!(f, "generation failed: {err}"),
            Self::Encode(err) => write!(f, "png encoding failed: {err}"),
            Self::Io(err) => write!(f, "destination write failed: {err}"),
        }
    }
}

impl std::error::Error for PngError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Raster(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<RasterError> for PngError {
    fn from(err: RasterError) -> Self {
        Self::Raster(err)
    }
}

impl From<image::ImageError> for PngError {
    fn from(err: image::ImageError) -> Self {
        Self::Encode(err)
    }
}

impl From<std::io::Error> for PngError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Encode a buffer as PNG into `writer`.
pub fn write_png<W: Write>(buffer: &RasterBuffer, writer: W) -> Result<(), PngError> {
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        &buffer.to_rgba8(),
        buffer.width(),
        buffer.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

/// Encode a buffer as PNG, returning the container bytes.
pub fn encode_png(buffer: &RasterBuffer) -> Result<Vec<u8>, PngError> {
    let mut bytes = Vec::new();
    write_png(buffer, &mut bytes)?;
    Ok(bytes)
}

/// Encode a buffer as PNG and write it to `path`.
pub fn save_png<P: AsRef<Path>>(buffer: &RasterBuffer, path: P) -> Result<(), PngError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_png(buffer, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Generate the identicon for `seed` and return it as PNG bytes.
pub fn icon_bytes(seed: &str) -> Result<Vec<u8>, PngError> {
    let buffer = generate(seed)?;
    encode_png(&buffer)
}

/// Generate the identicon for `seed` and save it as PNG at `path`.
pub fn save_icon<P: AsRef<Path>>(path: P, seed: &str) -> Result<(), PngError> {
    let buffer = generate(seed)?;
    save_png(&buffer, path)
}
