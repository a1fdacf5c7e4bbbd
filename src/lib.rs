//! Codecs and pixel transforms for the MSOE grid image formats.
//!
//! The crate covers three concerns:
//!
//! - [`msoe`] / [`bmsoe`] — decode/encode of the textual and binary
//!   grid formats; [`raster`] bridges `.png`-class files to the
//!   external `image` codec
//! - [`read_image`] / [`write_image`] / [`copy_image`] — path-level
//!   entry points with suffix-driven dispatch ([`DiskFormat`])
//! - [`transform`] — per-pixel mapping over a [`PixelBuffer`] and the
//!   named transforms (grayscale, invert, mirror, widen, ...) built on
//!   the [`ColorOps`] primitives
//!
//! Pixels are [`rgb::Rgba<u8>`]; buffers interoperate with `imgref`
//! via [`PixelBuffer::as_img`]. All failures surface as [`CodecError`]
//! — the library never prompts, logs above `debug`, or retries.

#![forbid(unsafe_code)]

mod buffer;
mod color;
mod error;
mod format;
mod hex;
mod io;

pub mod bmsoe;
pub mod msoe;
pub mod raster;
pub mod transform;

pub use buffer::PixelBuffer;
pub use color::{ColorOps, argb_to_color, color_to_argb};
pub use error::CodecError;
pub use format::DiskFormat;
pub use hex::{argb_to_hex, hex_to_argb};
pub use io::{copy_image, read_image, write_image};

// Re-exports for downstream consumers.
pub use imgref::{Img, ImgRef, ImgVec};
pub use rgb;
pub use rgb::Rgba;
