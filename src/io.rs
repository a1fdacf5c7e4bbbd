//! Path-level read/write entry points.
//!
//! This is the surface a front end calls: give it a path, get a
//! [`PixelBuffer`] or a typed error back. The suffix alone selects the
//! codec ([`DiskFormat`]); the whole file is read or written in one
//! blocking call, and the whole image is materialized in memory.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::CodecError;
use crate::format::DiskFormat;
use crate::{bmsoe, msoe, raster};

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and decode the image at `path`.
///
/// # Errors
///
/// [`CodecError::UnsupportedFormat`] for an unrecognized suffix,
/// [`CodecError::Io`] for storage failures, and whatever the selected
/// codec reports for malformed content.
pub fn read_image(path: impl AsRef<Path>) -> Result<PixelBuffer, CodecError> {
    let path = path.as_ref();
    let format = DiskFormat::from_path(path)
        .ok_or_else(|| CodecError::UnsupportedFormat(display_name(path)))?;
    debug!("read_image: {} as {format}", path.display());
    let data = fs::read(path)?;
    match format {
        DiskFormat::Msoe => msoe::decode(&data),
        DiskFormat::Bmsoe => bmsoe::decode(&data),
        DiskFormat::Raster(fmt) => raster::decode(&data, fmt),
    }
}

/// Encode `image` and write it to `path`.
///
/// `None` means the caller has no image; that is reported as
/// [`CodecError::EmptyImage`]. An unrecognized suffix is a plain write
/// failure ([`CodecError::Io`]) — unlike the read side, which names the
/// unsupported format.
pub fn write_image(path: impl AsRef<Path>, image: Option<&PixelBuffer>) -> Result<(), CodecError> {
    let path = path.as_ref();
    let format = DiskFormat::from_path(path).ok_or_else(|| {
        CodecError::Io(io::Error::other(format!(
            "failed to write {}: unrecognized extension",
            display_name(path)
        )))
    })?;
    let image = image.ok_or(CodecError::EmptyImage)?;
    debug!("write_image: {} as {format}", path.display());
    let data = match format {
        DiskFormat::Msoe => msoe::encode(image).into_bytes(),
        DiskFormat::Bmsoe => bmsoe::encode(image),
        DiskFormat::Raster(fmt) => raster::encode(image, fmt)?,
    };
    fs::write(path, data)?;
    Ok(())
}

/// Read the image at `src` and write it to `dst`, re-encoding under
/// whatever format `dst`'s suffix selects. Returns the decoded buffer.
pub fn copy_image(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
) -> Result<PixelBuffer, CodecError> {
    let image = read_image(src)?;
    write_image(dst, Some(&image))?;
    Ok(image)
}
