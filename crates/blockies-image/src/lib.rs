#![forbid(unsafe_code)]

//! PNG adapters over `blockies-core` raster buffers.
//!
//! # Role in blockies-rs
//! The core crate stops at a finished [`RasterBuffer`]; this crate is
//! the image sink. It encodes buffers to PNG, either into an
//! in-memory byte vector or to a caller-supplied destination. The
//! encoding is lossless with no color-space transforms, so decoded
//! pixels are bit-identical to the rasterizer's output.
//!
//! Write failures surface as [`PngError::Io`]; nothing here retries
//! or suppresses them. Retry policy belongs to the caller.

pub mod png;

pub use png::{PngError, encode_png, icon_bytes, save_icon, save_png, write_png};

pub use blockies_core::RasterBuffer;
