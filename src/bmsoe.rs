//! The BMSOE binary grid format.
//!
//! Fixed layout, big-endian 32-bit signed integers throughout:
//!
//! ```text
//! bytes 0..4   width
//! bytes 4..8   height
//! bytes 8..    width*height ARGB words, row-major
//! ```
//!
//! Unlike the text format, the full ARGB word is stored, so alpha
//! round-trips losslessly.

use log::debug;
use rgb::Rgba;

use crate::buffer::PixelBuffer;
use crate::color::{argb_to_color, color_to_argb};
use crate::error::CodecError;

/// Pop one big-endian `i32` off the front of `data`.
fn read_i32(data: &mut &[u8]) -> Option<i32> {
    let (head, rest) = data.split_first_chunk::<4>()?;
    *data = rest;
    Some(i32::from_be_bytes(*head))
}

/// Decode a BMSOE binary grid.
///
/// Consumes the declared `width * height` ARGB words and requires the
/// stream to end exactly there.
///
/// # Errors
///
/// [`CodecError::InvalidFormat`] on a truncated header or grid, a
/// negative dimension, or trailing bytes after the grid.
pub fn decode(data: &[u8]) -> Result<PixelBuffer, CodecError> {
    let mut rest = data;
    let truncated = || CodecError::invalid("truncated BMSOE file");
    let width = read_i32(&mut rest).ok_or_else(truncated)?;
    let height = read_i32(&mut rest).ok_or_else(truncated)?;
    let width = u32::try_from(width)
        .map_err(|_| CodecError::invalid(format!("negative width {width}")))?;
    let height = u32::try_from(height)
        .map_err(|_| CodecError::invalid(format!("negative height {height}")))?;
    debug!("bmsoe decode: {width}x{height}");

    let count = u64::from(width) * u64::from(height);
    let mut pixels: Vec<Rgba<u8>> = Vec::new();
    for _ in 0..count {
        let argb = read_i32(&mut rest)
            .ok_or_else(|| CodecError::invalid("incorrect dimensions provided"))?;
        pixels.push(argb_to_color(argb as u32));
    }
    if !rest.is_empty() {
        return Err(CodecError::invalid("incorrect dimensions provided"));
    }
    Ok(PixelBuffer::from_pixels(pixels, width, height))
}

/// Encode a buffer as a BMSOE binary grid, alpha included.
///
/// Infallible; absence of an image is checked by the caller
/// ([`write_image`](crate::write_image)).
pub fn encode(image: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + image.pixels().len() * 4);
    out.extend_from_slice(&(image.width() as i32).to_be_bytes());
    out.extend_from_slice(&(image.height() as i32).to_be_bytes());
    for px in image.pixels() {
        out.extend_from_slice(&color_to_argb(*px).to_be_bytes());
    }
    out
}
