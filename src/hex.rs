//! `#RRGGBB` hex literal ↔ packed ARGB conversion.
//!
//! The textual grid format stores one hex literal per pixel. Literals
//! carry no alpha: decoding forces full opacity, encoding drops the
//! alpha byte.

use crate::error::CodecError;

/// Byte length of a hex color literal, `#` included.
const LITERAL_LEN: usize = 7;

/// Mask selecting the RGB bytes of a packed ARGB value.
const RGB_MASK: u32 = 0x00FF_FFFF;

/// Alpha byte OR-ed into every decoded literal.
const OPAQUE: u32 = 0xFF00_0000;

/// Parse a `#RRGGBB` literal into a packed ARGB value.
///
/// The literal must be exactly 7 bytes: `#` followed by 6 hex digits of
/// either case. The result always has `0xFF` in the alpha byte.
///
/// # Errors
///
/// [`CodecError::InvalidFormat`] if the length, prefix, or any digit is
/// wrong.
pub fn hex_to_argb(literal: &str) -> Result<u32, CodecError> {
    let bytes = literal.as_bytes();
    if bytes.len() != LITERAL_LEN
        || bytes[0] != b'#'
        || !bytes[1..].iter().all(u8::is_ascii_hexdigit)
    {
        return Err(CodecError::invalid(format!("bad color literal: {literal:?}")));
    }
    // Digits are validated above, so from_str_radix cannot fail and
    // cannot sneak in a sign prefix.
    let rgb = u32::from_str_radix(&literal[1..], 16).map_err(|_| {
        CodecError::invalid(format!("bad color literal: {literal:?}"))
    })?;
    Ok(OPAQUE | rgb)
}

/// Format the RGB bytes of a packed ARGB value as `#RRGGBB`.
///
/// The alpha byte is masked off and lost. Digits are uppercase. Total
/// function: any `u32` input produces a valid literal.
pub fn argb_to_hex(argb: u32) -> String {
    format!("#{:06X}", argb & RGB_MASK)
}
