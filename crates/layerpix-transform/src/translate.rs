//! Translation - shifting layer content by an integer offset
//!
//! Content shifted past a canvas edge is discarded; pixels entering from
//! outside are filled with the encoding's transparent value (packed 0 for
//! truecolor, the palette's transparent index for indexed).
//!
//! Two fast paths: a `(0, 0)` shift returns the input buffer unchanged
//! (the functions take the buffer by value, so the identity case allocates
//! nothing), and a shift of at least one full canvas dimension yields an
//! entirely transparent buffer without visiting any source pixel.

use layerpix_core::{IndexedBuffer, TruecolorBuffer};

/// Translate a truecolor buffer by `(dx, dy)`.
///
/// Vacated pixels are filled with packed transparent zero.
pub fn translate_truecolor(src: TruecolorBuffer, dx: i32, dy: i32) -> TruecolorBuffer {
    if dx == 0 && dy == 0 {
        return src;
    }

    let (w, h) = (src.width(), src.height());
    let mut out = src.clone();
    out.fill(layerpix_core::color::TRANSPARENT);

    if dx.unsigned_abs() >= w || dy.unsigned_abs() >= h {
        return out;
    }
    shift_rows(src.data(), out.data_mut(), w, h, dx, dy);
    out
}

/// Translate an indexed buffer by `(dx, dy)`.
///
/// Vacated pixels are filled with `transparent_index`.
pub fn translate_indexed(
    src: IndexedBuffer,
    dx: i32,
    dy: i32,
    transparent_index: u8,
) -> IndexedBuffer {
    if dx == 0 && dy == 0 {
        return src;
    }

    let (w, h) = (src.width(), src.height());
    let mut out = src.clone();
    out.fill(transparent_index);

    if dx.unsigned_abs() >= w || dy.unsigned_abs() >= h {
        return out;
    }
    shift_rows(src.data(), out.data_mut(), w, h, dx, dy);
    out
}

/// Copy the surviving rectangle of `src` into `dst` at the shifted offset.
///
/// Only valid destination rows and columns are touched; `dst` is assumed
/// pre-filled with the transparent value.
fn shift_rows<T: Copy>(src: &[T], dst: &mut [T], w: u32, h: u32, dx: i32, dy: i32) {
    let (w, h) = (w as i64, h as i64);
    let (dx, dy) = (dx as i64, dy as i64);

    let x_start = dx.max(0);
    let x_end = (w + dx).min(w);
    let y_start = dy.max(0);
    let y_end = (h + dy).min(h);
    let row_len = (x_end - x_start) as usize;

    for y in y_start..y_end {
        let src_off = ((y - dy) * w + (x_start - dx)) as usize;
        let dst_off = (y * w + x_start) as usize;
        dst[dst_off..dst_off + row_len].copy_from_slice(&src[src_off..src_off + row_len]);
    }
}
