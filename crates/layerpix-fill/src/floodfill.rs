//! Flood fill - contiguous region growth and global replacement
//!
//! Both fill functions share one contract:
//!
//! 1. The source is cloned first; mutation happens only on the clone.
//! 2. The target value is read at the seed. A masked-out or out-of-range
//!    seed, or a target already equal to the replacement, returns the
//!    untouched clone - fills degrade to no-ops, they never error.
//! 3. Contiguous mode grows the 4-connected region (von Neumann
//!    neighborhood, no diagonals) reachable from the seed through
//!    target-valued cells. The frontier is an explicit stack, never
//!    recursion, so a fully connected canvas costs heap instead of call
//!    stack. Bounds, mask and value filtering happen on pop; neighbors are
//!    pushed unconditionally. The value check doubles as the visited
//!    check: a filled cell no longer equals the target.
//! 4. Non-contiguous mode replaces every target-valued pixel the mask
//!    admits, in raster order, regardless of connectivity.
//!
//! Worst-case cost is O(width * height) time and an O(width * height)
//! frontier (a single-color canvas).

use layerpix_core::{IndexedBuffer, SelectionMask, TruecolorBuffer};

/// Flood fill a truecolor buffer from a seed point.
///
/// Replaces pixels whose packed value equals the seed's value with
/// `replacement`. `contiguous` selects 4-connected region growth versus a
/// whole-buffer replace. A mask, when present, gates every write; a seed
/// outside the mask is a no-op.
pub fn flood_fill_truecolor(
    src: &TruecolorBuffer,
    x: i32,
    y: i32,
    replacement: u32,
    contiguous: bool,
    mask: Option<&SelectionMask>,
) -> TruecolorBuffer {
    let mut out = src.clone();

    let Some(target) = pixel_at(src.width(), src.height(), x, y)
        .map(|(sx, sy)| src.get_pixel_unchecked(sx, sy))
    else {
        // Out-of-range seed: nothing can match a missing read
        return out;
    };
    if seed_masked_out(mask, x, y) || target == replacement {
        return out;
    }

    if contiguous {
        fill_region(
            out.width(),
            out.height(),
            x,
            y,
            mask,
            |b: &TruecolorBuffer, sx, sy| b.get_pixel_unchecked(sx, sy) == target,
            |b, sx, sy| b.set_pixel_unchecked(sx, sy, replacement),
            &mut out,
        );
    } else {
        fill_global(
            out.width(),
            out.height(),
            mask,
            |b: &TruecolorBuffer, sx, sy| b.get_pixel_unchecked(sx, sy) == target,
            |b, sx, sy| b.set_pixel_unchecked(sx, sy, replacement),
            &mut out,
        );
    }
    out
}

/// Flood fill an indexed buffer from a seed point.
///
/// Same contract as [`flood_fill_truecolor`], over 8-bit palette slots. An
/// out-of-range seed reads as `transparent_index`, matching the editor's
/// convention that everything beyond the canvas is unpainted.
pub fn flood_fill_indexed(
    src: &IndexedBuffer,
    x: i32,
    y: i32,
    replacement: u8,
    contiguous: bool,
    transparent_index: u8,
    mask: Option<&SelectionMask>,
) -> IndexedBuffer {
    let mut out = src.clone();

    let target = pixel_at(src.width(), src.height(), x, y)
        .map(|(sx, sy)| src.get_pixel_unchecked(sx, sy))
        .unwrap_or(transparent_index);
    if seed_masked_out(mask, x, y) || target == replacement {
        return out;
    }

    if contiguous {
        fill_region(
            out.width(),
            out.height(),
            x,
            y,
            mask,
            |b: &IndexedBuffer, sx, sy| b.get_pixel_unchecked(sx, sy) == target,
            |b, sx, sy| b.set_pixel_unchecked(sx, sy, replacement),
            &mut out,
        );
    } else {
        fill_global(
            out.width(),
            out.height(),
            mask,
            |b: &IndexedBuffer, sx, sy| b.get_pixel_unchecked(sx, sy) == target,
            |b, sx, sy| b.set_pixel_unchecked(sx, sy, replacement),
            &mut out,
        );
    }
    out
}

/// Translate signed seed coordinates into in-bounds buffer coordinates.
fn pixel_at(w: u32, h: u32, x: i32, y: i32) -> Option<(u32, u32)> {
    if x < 0 || y < 0 || x as u32 >= w || y as u32 >= h {
        return None;
    }
    Some((x as u32, y as u32))
}

/// Whether a mask is present and excludes the seed pixel.
fn seed_masked_out(mask: Option<&SelectionMask>, x: i32, y: i32) -> bool {
    match mask {
        Some(m) => !(x >= 0 && y >= 0 && m.is_selected(x as u32, y as u32)),
        None => false,
    }
}

/// 4-connected region growth over an explicit frontier stack.
///
/// Neighbors are pushed unconditionally in the order +x, -x, +y, -y;
/// bounds, mask and value filtering happen when a coordinate is popped.
#[allow(clippy::too_many_arguments)]
fn fill_region<B>(
    w: u32,
    h: u32,
    seed_x: i32,
    seed_y: i32,
    mask: Option<&SelectionMask>,
    matches: impl Fn(&B, u32, u32) -> bool,
    set: impl Fn(&mut B, u32, u32),
    buf: &mut B,
) {
    let mut frontier: Vec<(i32, i32)> = vec![(seed_x, seed_y)];

    while let Some((x, y)) = frontier.pop() {
        let Some((ux, uy)) = pixel_at(w, h, x, y) else {
            continue;
        };
        if let Some(m) = mask {
            if !m.is_selected(ux, uy) {
                continue;
            }
        }
        // A filled cell no longer matches the target, so this also stops
        // revisits without a separate visited set
        if !matches(buf, ux, uy) {
            continue;
        }
        set(buf, ux, uy);

        frontier.push((x + 1, y));
        frontier.push((x - 1, y));
        frontier.push((x, y + 1));
        frontier.push((x, y - 1));
    }
}

/// Whole-buffer replacement in raster order, gated by mask and equality.
fn fill_global<B>(
    w: u32,
    h: u32,
    mask: Option<&SelectionMask>,
    matches: impl Fn(&B, u32, u32) -> bool,
    set: impl Fn(&mut B, u32, u32),
    buf: &mut B,
) {
    for y in 0..h {
        for x in 0..w {
            if let Some(m) = mask {
                if !m.is_selected(x, y) {
                    continue;
                }
            }
            if matches(buf, x, y) {
                set(buf, x, y);
            }
        }
    }
}
