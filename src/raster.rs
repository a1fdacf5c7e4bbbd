//! Bridge to the external raster codec.
//!
//! `.png`-class files are delegated whole to the `image` crate; this
//! module only converts between its buffer types and [`PixelBuffer`]
//! and folds its errors into the local taxonomy. The raster formats
//! themselves are not our concern.

use std::io::Cursor;

use image::{DynamicImage, ImageError, ImageFormat, RgbaImage};
use log::debug;
use rgb::{ComponentBytes, FromSlice};

use crate::buffer::PixelBuffer;
use crate::error::CodecError;

fn from_image_error(err: ImageError) -> CodecError {
    match err {
        ImageError::IoError(io) => CodecError::Io(io),
        ImageError::Unsupported(e) => CodecError::UnsupportedFormat(e.to_string()),
        other => CodecError::invalid(other.to_string()),
    }
}

/// Decode raster bytes of the given format into an RGBA buffer.
///
/// # Errors
///
/// [`CodecError::InvalidFormat`] for malformed data,
/// [`CodecError::Io`]/[`CodecError::UnsupportedFormat`] passed through
/// from the external codec.
pub fn decode(data: &[u8], format: ImageFormat) -> Result<PixelBuffer, CodecError> {
    let img = image::load_from_memory_with_format(data, format).map_err(from_image_error)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!("raster decode: {format:?} {width}x{height}");
    let raw = rgba.into_raw();
    Ok(PixelBuffer::from_pixels(raw.as_rgba().to_vec(), width, height))
}

/// Encode an RGBA buffer through the external codec.
pub fn encode(image: &PixelBuffer, format: ImageFormat) -> Result<Vec<u8>, CodecError> {
    let raw = image.pixels().as_bytes().to_vec();
    let rgba = RgbaImage::from_raw(image.width(), image.height(), raw)
        .ok_or_else(|| CodecError::invalid("pixel buffer does not match its dimensions"))?;
    let img = DynamicImage::ImageRgba8(rgba);
    // JPEG cannot carry alpha; every other default codec takes RGBA.
    let img = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8()),
        _ => img,
    };
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, format).map_err(from_image_error)?;
    Ok(out.into_inner())
}
