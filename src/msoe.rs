//! The MSOE textual grid format.
//!
//! Line-oriented, whitespace-delimited:
//!
//! ```text
//! MSOE
//! <width> <height>
//! #RRGGBB #RRGGBB ...        (one line per row, <width> literals each)
//! ```
//!
//! Hex literals carry no alpha, so the format is lossy: every decoded
//! pixel is fully opaque and encoding drops the source alpha.

use log::debug;
use rgb::Rgba;

use crate::buffer::PixelBuffer;
use crate::color::{argb_to_color, color_to_argb};
use crate::error::CodecError;
use crate::hex::{argb_to_hex, hex_to_argb};

/// First-line magic token.
const MAGIC: &str = "MSOE";

fn parse_dimensions(line: &str) -> Result<(u32, u32), CodecError> {
    let mut parts = line.split_whitespace();
    let bad = || CodecError::invalid(format!("bad dimensions line: {line:?}"));
    let width = parts.next().ok_or_else(bad)?.parse::<u32>().map_err(|_| bad())?;
    let height = parts.next().ok_or_else(bad)?.parse::<u32>().map_err(|_| bad())?;
    Ok((width, height))
}

/// Decode an MSOE text grid.
///
/// Reads exactly `height` row lines; content after the last row is
/// tolerated and ignored, as are extra literals on a row. Every decoded
/// pixel is fully opaque.
///
/// # Errors
///
/// [`CodecError::InvalidFormat`] on an empty file, a wrong magic line,
/// an unparsable dimensions line, missing rows or row literals, or a
/// bad hex literal.
pub fn decode(data: &[u8]) -> Result<PixelBuffer, CodecError> {
    if data.is_empty() {
        return Err(CodecError::invalid("input file is empty"));
    }
    let text = std::str::from_utf8(data)
        .map_err(|_| CodecError::invalid("not a text file"))?;
    let mut lines = text.lines();

    match lines.next() {
        Some(MAGIC) => {}
        _ => return Err(CodecError::invalid("not an MSOE file")),
    }
    let dims = lines
        .next()
        .ok_or_else(|| CodecError::invalid("missing dimensions line"))?;
    let (width, height) = parse_dimensions(dims)?;
    debug!("msoe decode: {width}x{height}");

    let mut pixels: Vec<Rgba<u8>> = Vec::new();
    for _ in 0..height {
        let row = lines
            .next()
            .ok_or_else(|| CodecError::invalid("incorrect dimensions provided"))?;
        let mut literals = row.split_whitespace();
        for _ in 0..width {
            let literal = literals
                .next()
                .ok_or_else(|| CodecError::invalid("incorrect dimensions provided"))?;
            pixels.push(argb_to_color(hex_to_argb(literal)?));
        }
    }
    Ok(PixelBuffer::from_pixels(pixels, width, height))
}

/// Encode a buffer as an MSOE text grid.
///
/// Writes a trailing space after every literal, including the last on a
/// row. Alpha is dropped. Infallible; absence of an image is checked
/// by the caller ([`write_image`](crate::write_image)).
pub fn encode(image: &PixelBuffer) -> String {
    let mut out = String::new();
    out.push_str(MAGIC);
    out.push('\n');
    out.push_str(&format!("{} {}\n", image.width(), image.height()));
    for row in image.rows() {
        for px in row {
            out.push_str(&argb_to_hex(color_to_argb(*px)));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(r: u8, g: u8, b: u8) -> Rgba<u8> {
        Rgba::new(r, g, b, 255)
    }

    #[test]
    fn encode_layout_is_exact() {
        let buf = PixelBuffer::from_pixels(
            vec![opaque(0x11, 0x22, 0x33), opaque(0x44, 0x55, 0x66)],
            2,
            1,
        );
        assert_eq!(encode(&buf), "MSOE\n2 1\n#112233 #445566 \n");
    }

    #[test]
    fn decode_reads_exact_layout() {
        let buf = decode(b"MSOE\n2 1\n#112233 #445566 \n").unwrap();
        assert_eq!((buf.width(), buf.height()), (2, 1));
        assert_eq!(buf.get(0, 0), opaque(0x11, 0x22, 0x33));
        assert_eq!(buf.get(1, 0), opaque(0x44, 0x55, 0x66));
    }

    #[test]
    fn decode_forces_opacity() {
        let buf = decode(b"MSOE\n1 1\n#0A0B0C\n").unwrap();
        assert_eq!(buf.get(0, 0).a, 255);
    }

    #[test]
    fn round_trip_resets_alpha() {
        let buf = PixelBuffer::from_pixels(
            vec![Rgba::new(1, 2, 3, 77), Rgba::new(4, 5, 6, 0)],
            1,
            2,
        );
        let back = decode(encode(&buf).as_bytes()).unwrap();
        assert_eq!(back.get(0, 0), opaque(1, 2, 3));
        assert_eq!(back.get(0, 1), opaque(4, 5, 6));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(decode(b""), Err(CodecError::InvalidFormat(_))));
    }

    #[test]
    fn rejects_wrong_magic() {
        assert!(decode(b"MSOW\n1 1\n#112233\n").is_err());
        assert!(decode(b"msoe\n1 1\n#112233\n").is_err());
        // Magic must be the whole line.
        assert!(decode(b"MSOE extra\n1 1\n#112233\n").is_err());
    }

    #[test]
    fn rejects_bad_dimension_lines() {
        assert!(decode(b"MSOE\n").is_err());
        assert!(decode(b"MSOE\n2\n").is_err());
        assert!(decode(b"MSOE\ntwo 1\n#112233 #445566\n").is_err());
        assert!(decode(b"MSOE\n-2 1\n#112233 #445566\n").is_err());
    }

    #[test]
    fn rejects_missing_rows() {
        let err = decode(b"MSOE\n2 2\n#112233 #445566\n").unwrap_err();
        assert!(err.to_string().contains("incorrect dimensions"));
    }

    #[test]
    fn rejects_short_rows() {
        let err = decode(b"MSOE\n3 1\n#112233 #445566\n").unwrap_err();
        assert!(err.to_string().contains("incorrect dimensions"));
    }

    #[test]
    fn rejects_bad_literals() {
        assert!(decode(b"MSOE\n1 1\n112233\n").is_err());
        assert!(decode(b"MSOE\n1 1\n#11223G\n").is_err());
    }

    #[test]
    fn tolerates_extra_tokens_and_trailing_lines() {
        let buf = decode(b"MSOE\n1 1\n#112233 #FFFFFF\nleftover junk\n").unwrap();
        assert_eq!((buf.width(), buf.height()), (1, 1));
        assert_eq!(buf.get(0, 0), opaque(0x11, 0x22, 0x33));
    }

    #[test]
    fn handles_crlf_line_endings() {
        let buf = decode(b"MSOE\r\n1 1\r\n#112233 \r\n").unwrap();
        assert_eq!(buf.get(0, 0), opaque(0x11, 0x22, 0x33));
    }

    #[test]
    fn zero_size_round_trips() {
        let empty = PixelBuffer::new(0, 0);
        let text = encode(&empty);
        assert_eq!(text, "MSOE\n0 0\n");
        let back = decode(text.as_bytes()).unwrap();
        assert!(back.is_empty());
    }
}
