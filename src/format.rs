//! On-disk format identity and suffix dispatch.
//!
//! Format identity is determined solely by the file name's suffix —
//! there is no magic-byte sniffing. Renaming a file to another
//! recognized suffix reinterprets its bytes under that format's
//! grammar on the next read; that is by contract, not an accident to
//! correct.

use std::path::Path;

/// The codec a file routes to, keyed by its name suffix.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiskFormat {
    /// `.msoe` — textual hex grid.
    Msoe,
    /// `.bmsoe` — binary ARGB grid.
    Bmsoe,
    /// Anything the external raster codec recognizes (`.png` etc.).
    Raster(image::ImageFormat),
}

impl DiskFormat {
    /// Identify the format from a path's file name. Returns `None` for
    /// unrecognized suffixes.
    ///
    /// The custom suffixes are matched case-sensitively on the whole
    /// file name; raster suffixes go through the external codec's
    /// (case-insensitive) extension table.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        if name.ends_with(".msoe") {
            return Some(Self::Msoe);
        }
        if name.ends_with(".bmsoe") {
            return Some(Self::Bmsoe);
        }
        image::ImageFormat::from_extension(path.extension()?).map(Self::Raster)
    }

    /// Canonical suffix for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Msoe => "msoe",
            Self::Bmsoe => "bmsoe",
            Self::Raster(fmt) => fmt.extensions_str().first().copied().unwrap_or(""),
        }
    }
}

impl core::fmt::Display for DiskFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Msoe => f.write_str("MSOE"),
            Self::Bmsoe => f.write_str("BMSOE"),
            Self::Raster(fmt) => write!(f, "{fmt:?}"),
        }
    }
}
