//! Whole-buffer pixel transforms.
//!
//! [`map`] applies a coordinate-aware color function over every cell of
//! a buffer and is the basis for all the named transforms. The
//! geometric operations ([`mirror`], [`widen`]) read the source buffer
//! positionally but are still pure: the output depends only on the
//! input buffer.

use rgb::Rgba;

use crate::buffer::PixelBuffer;
use crate::color::ColorOps;

/// Produce a new buffer of identical dimensions where cell `(x, y)` is
/// `f(x, y, src[x, y])`.
///
/// Every cell is visited exactly once, row by row. `f` sees one input
/// color at a time; transforms that need wider read access (like
/// [`mirror`]) capture the source buffer in their closure instead.
pub fn map(src: &PixelBuffer, f: impl Fn(u32, u32, Rgba<u8>) -> Rgba<u8>) -> PixelBuffer {
    PixelBuffer::from_fn(src.width(), src.height(), |x, y| f(x, y, src.get(x, y)))
}

/// Rec. 601 grayscale of every pixel.
pub fn grayscale(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| c.grayscale())
}

/// Invert every pixel's color channels. Involution.
pub fn invert(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| c.invert())
}

/// Brighten every pixel.
pub fn brighten(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| c.brighter())
}

/// Darken every pixel.
pub fn darken(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| c.darker())
}

/// Push every pixel away from its own gray value.
pub fn saturate(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| c.saturate())
}

/// Pull every pixel toward its own gray value.
pub fn desaturate(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| c.desaturate())
}

/// Keep only the red channel; green and blue go to zero, alpha stays.
pub fn red_only(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| Rgba::new(c.r, 0, 0, c.a))
}

/// Keep only the blue channel; red and green go to zero, alpha stays.
pub fn blue_only(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, _, c| Rgba::new(0, 0, c.b, c.a))
}

/// Row-parity recolor: even rows keep only red, odd rows go grayscale.
pub fn red_gray(src: &PixelBuffer) -> PixelBuffer {
    map(src, |_, y, c| {
        if y % 2 == 0 {
            Rgba::new(c.r, 0, 0, c.a)
        } else {
            c.grayscale()
        }
    })
}

/// Horizontal flip: cell `(x, y)` takes the source color at
/// `(W-1-x, y)`. Involution.
pub fn mirror(src: &PixelBuffer) -> PixelBuffer {
    let width = src.width();
    map(src, |x, y, _| src.get(width - 1 - x, y))
}

/// Stretch the horizontal middle half of the source to double width.
///
/// Source columns `W/4 .. 3*(W/4)` are each written twice to
/// consecutive destination columns starting at 0; a pair is written
/// only while the cursor is below `W-1`. The output keeps the source
/// dimensions; for some widths the rightmost columns are never written
/// and stay at the blank-buffer default (transparent black).
pub fn widen(src: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (src.width(), src.height());
    let mut out = PixelBuffer::new(width, height);
    let quarter = width / 4;
    for y in 0..height {
        let mut write_x = 0;
        for x in quarter..quarter * 3 {
            if write_x + 1 < width {
                let color = src.get(x, y);
                out.set(write_x, y, color);
                out.set(write_x + 1, y, color);
                write_x += 2;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLANK: Rgba<u8> = Rgba::new(0, 0, 0, 0);

    fn opaque(r: u8, g: u8, b: u8) -> Rgba<u8> {
        Rgba::new(r, g, b, 255)
    }

    /// 1 row, colors keyed by column index.
    fn row(colors: &[Rgba<u8>]) -> PixelBuffer {
        PixelBuffer::from_pixels(colors.to_vec(), colors.len() as u32, 1)
    }

    #[test]
    fn map_passes_coordinates_and_color() {
        let src = PixelBuffer::from_fn(3, 2, |x, y| opaque(x as u8, y as u8, 0));
        let out = map(&src, |x, y, c| {
            assert_eq!((c.r, c.g), (x as u8, y as u8));
            Rgba::new(c.r, c.g, 7, c.a)
        });
        assert_eq!((out.width(), out.height()), (3, 2));
        assert_eq!(out.get(2, 1), opaque(2, 1, 7));
    }

    #[test]
    fn map_identity_copies_buffer() {
        let src = PixelBuffer::from_fn(4, 4, |x, y| opaque(x as u8, y as u8, 9));
        assert_eq!(map(&src, |_, _, c| c), src);
    }

    #[test]
    fn grayscale_equalizes_every_pixel() {
        let out = grayscale(&row(&[opaque(255, 0, 0)]));
        let px = out.get(0, 0);
        assert_eq!(px.r, px.g);
        assert_eq!(px.g, px.b);
    }

    #[test]
    fn invert_twice_is_identity() {
        let src = PixelBuffer::from_fn(5, 4, |x, y| Rgba::new(x as u8 * 13, y as u8 * 17, 3, 200));
        assert_eq!(invert(&invert(&src)), src);
    }

    #[test]
    fn channel_isolation() {
        let src = row(&[Rgba::new(10, 20, 30, 99)]);
        assert_eq!(red_only(&src).get(0, 0), Rgba::new(10, 0, 0, 99));
        assert_eq!(blue_only(&src).get(0, 0), Rgba::new(0, 0, 30, 99));
    }

    #[test]
    fn red_gray_alternates_by_row() {
        let src = PixelBuffer::from_fn(1, 4, |_, _| opaque(200, 100, 50));
        let out = red_gray(&src);
        for y in [0, 2] {
            assert_eq!(out.get(0, y), opaque(200, 0, 0));
        }
        for y in [1, 3] {
            let px = out.get(0, y);
            assert_eq!(px.r, px.g);
            assert_eq!(px.g, px.b);
        }
    }

    #[test]
    fn mirror_reverses_columns() {
        let a = opaque(1, 0, 0);
        let b = opaque(2, 0, 0);
        let c = opaque(3, 0, 0);
        let out = mirror(&row(&[a, b, c]));
        assert_eq!(out.get(0, 0), c);
        assert_eq!(out.get(1, 0), b);
        assert_eq!(out.get(2, 0), a);
    }

    #[test]
    fn mirror_twice_is_identity() {
        let src = PixelBuffer::from_fn(6, 3, |x, y| Rgba::new(x as u8, y as u8, 0, 50));
        assert_eq!(mirror(&mirror(&src)), src);
    }

    #[test]
    fn widen_doubles_middle_half_exactly() {
        // Width 8: quarter = 2, source columns 2..6 each written twice.
        let cols: Vec<_> = (0..8).map(|i| opaque(i as u8, 0, 0)).collect();
        let out = widen(&row(&cols));
        let got: Vec<u8> = (0..8).map(|x| out.get(x, 0).r).collect();
        assert_eq!(got, [2, 2, 3, 3, 4, 4, 5, 5]);
    }

    #[test]
    fn widen_leaves_tail_blank_on_uneven_widths() {
        // Width 5: quarter = 1, source columns 1..3 fill destination
        // 0..4; column 4 never gets written.
        let cols: Vec<_> = (0..5).map(|i| opaque(i as u8, 9, 9)).collect();
        let out = widen(&row(&cols));
        assert_eq!(out.get(0, 0), opaque(1, 9, 9));
        assert_eq!(out.get(1, 0), opaque(1, 9, 9));
        assert_eq!(out.get(2, 0), opaque(2, 9, 9));
        assert_eq!(out.get(3, 0), opaque(2, 9, 9));
        assert_eq!(out.get(4, 0), BLANK);
    }

    #[test]
    fn widen_on_narrow_buffers_is_all_blank() {
        // Width < 4 has an empty middle half; nothing is written.
        let out = widen(&row(&[opaque(1, 1, 1), opaque(2, 2, 2)]));
        assert_eq!(out.get(0, 0), BLANK);
        assert_eq!(out.get(1, 0), BLANK);
    }

    #[test]
    fn widen_keeps_dimensions() {
        let src = PixelBuffer::from_fn(9, 4, |x, y| opaque(x as u8, y as u8, 0));
        let out = widen(&src);
        assert_eq!((out.width(), out.height()), (9, 4));
    }

    #[test]
    fn transforms_on_empty_buffers() {
        let empty = PixelBuffer::new(0, 0);
        assert!(grayscale(&empty).is_empty());
        assert!(mirror(&empty).is_empty());
        assert!(widen(&empty).is_empty());
    }
}
