//! Canvas resize - crop and pad anchored at the origin
//!
//! Resizing reallocates every layer at the new dimensions and copies the
//! overlapping rectangle row by row at matching offsets. Growing preserves
//! existing content anchored at the origin; shrinking crops from the
//! origin. There is no re-centering and no scaling.
//!
//! New pixels are the encoding's zero value, which is transparent in both
//! encodings. For indexed buffers this assumes the conventional palette
//! layout with slot 0 transparent; the fill is deliberately not remapped
//! to the palette's transparent index.

use crate::error::TransformResult;
use layerpix_core::{ColorMode, IndexedBuffer, Layer, PixelBuffer, TruecolorBuffer};

/// Resize every layer of a stack to `new_w x new_h`.
///
/// The output encoding follows `color_mode`, not the layer's current data;
/// a stray layer of the other encoding contributes no pixels and comes
/// back as a fully transparent buffer of the new size.
pub fn resize(
    layers: &[Layer],
    color_mode: ColorMode,
    new_w: u32,
    new_h: u32,
) -> TransformResult<Vec<Layer>> {
    layers
        .iter()
        .map(|layer| Ok(layer.with_data(resize_buffer(&layer.data, color_mode, new_w, new_h)?)))
        .collect()
}

/// Resize a single buffer, selecting the output encoding by `color_mode`.
pub fn resize_buffer(
    buf: &PixelBuffer,
    color_mode: ColorMode,
    new_w: u32,
    new_h: u32,
) -> TransformResult<PixelBuffer> {
    match color_mode {
        ColorMode::Truecolor => {
            let mut out = TruecolorBuffer::new(new_w, new_h)?;
            if let PixelBuffer::Truecolor(src) = buf {
                copy_overlap(src.data(), src.width(), out.data_mut(), new_w, src.height(), new_h);
            }
            Ok(out.into())
        }
        ColorMode::Indexed => {
            let mut out = IndexedBuffer::new(new_w, new_h)?;
            if let PixelBuffer::Indexed(src) = buf {
                copy_overlap(src.data(), src.width(), out.data_mut(), new_w, src.height(), new_h);
            }
            Ok(out.into())
        }
    }
}

/// Copy the overlapping rectangle `[0, min(old_w, new_w)) x [0, min(old_h,
/// new_h))` row by row, source and destination both anchored at the origin.
fn copy_overlap<T: Copy>(
    src: &[T],
    old_w: u32,
    dst: &mut [T],
    new_w: u32,
    old_h: u32,
    new_h: u32,
) {
    let copy_w = old_w.min(new_w) as usize;
    let copy_h = old_h.min(new_h) as usize;
    for y in 0..copy_h {
        let src_row = y * old_w as usize;
        let dst_row = y * new_w as usize;
        dst[dst_row..dst_row + copy_w].copy_from_slice(&src[src_row..src_row + copy_w]);
    }
}
