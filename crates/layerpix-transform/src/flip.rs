//! Horizontal and vertical flips
//!
//! Flips apply to a whole layer stack: every layer gets a fresh,
//! same-size, same-encoding buffer with mirrored content, while `id`,
//! `visible` and `locked` are carried over unchanged. Both flips are
//! involutions - applying one twice reproduces the stack pixel for pixel.

use crate::error::TransformResult;
use layerpix_core::{IndexedBuffer, Layer, PixelBuffer, TruecolorBuffer};

/// Flip every layer left-right (horizontal mirror).
///
/// Column `x` maps to column `width - 1 - x`; rows are unchanged.
pub fn flip_horizontal(layers: &[Layer]) -> TransformResult<Vec<Layer>> {
    layers
        .iter()
        .map(|layer| Ok(layer.with_data(flip_buffer_horizontal(&layer.data)?)))
        .collect()
}

/// Flip every layer top-bottom (vertical mirror).
///
/// Row `y` maps to row `height - 1 - y`; columns are unchanged.
pub fn flip_vertical(layers: &[Layer]) -> TransformResult<Vec<Layer>> {
    layers
        .iter()
        .map(|layer| Ok(layer.with_data(flip_buffer_vertical(&layer.data)?)))
        .collect()
}

/// Flip a single buffer left-right.
pub fn flip_buffer_horizontal(buf: &PixelBuffer) -> TransformResult<PixelBuffer> {
    match buf {
        PixelBuffer::Truecolor(src) => {
            let (w, h) = (src.width(), src.height());
            let mut out = TruecolorBuffer::new(w, h)?;
            for y in 0..h {
                for x in 0..w {
                    out.set_pixel_unchecked(w - 1 - x, y, src.get_pixel_unchecked(x, y));
                }
            }
            Ok(out.into())
        }
        PixelBuffer::Indexed(src) => {
            let (w, h) = (src.width(), src.height());
            let mut out = IndexedBuffer::new(w, h)?;
            for y in 0..h {
                for x in 0..w {
                    out.set_pixel_unchecked(w - 1 - x, y, src.get_pixel_unchecked(x, y));
                }
            }
            Ok(out.into())
        }
    }
}

/// Flip a single buffer top-bottom.
pub fn flip_buffer_vertical(buf: &PixelBuffer) -> TransformResult<PixelBuffer> {
    match buf {
        PixelBuffer::Truecolor(src) => {
            let (w, h) = (src.width(), src.height());
            let mut out = TruecolorBuffer::new(w, h)?;
            for y in 0..h {
                for x in 0..w {
                    out.set_pixel_unchecked(x, h - 1 - y, src.get_pixel_unchecked(x, y));
                }
            }
            Ok(out.into())
        }
        PixelBuffer::Indexed(src) => {
            let (w, h) = (src.width(), src.height());
            let mut out = IndexedBuffer::new(w, h)?;
            for y in 0..h {
                for x in 0..w {
                    out.set_pixel_unchecked(x, h - 1 - y, src.get_pixel_unchecked(x, y));
                }
            }
            Ok(out.into())
        }
    }
}
