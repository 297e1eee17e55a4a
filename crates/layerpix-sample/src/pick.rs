//! Color picking - resolving the effective color at a canvas point
//!
//! The eyedropper has two sampling modes:
//!
//! - [`SampleMode::Front`] reads the front-most visible, non-transparent
//!   layer pixel, top of the stack first ("topmost" = last layer).
//! - [`SampleMode::Composite`] delegates to an external [`Compositor`],
//!   which blends the whole visible stack and is trusted as an oracle.
//!
//! A layer whose buffer encoding contradicts the document's color mode is
//! skipped rather than treated as an error, so a partially migrated stack
//! still picks correctly from its well-formed layers.

use std::str::FromStr;

use crate::error::SampleError;
use layerpix_core::{ColorMode, Layer, Palette, PixelBuffer, color};

/// How the eyedropper resolves the color under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// Front-most visible non-transparent layer pixel
    #[default]
    Front,
    /// Fully composited pixel from the external compositor
    Composite,
}

impl FromStr for SampleMode {
    type Err = SampleError;

    /// Parse a sample mode name.
    ///
    /// An unrecognized name is a broken caller invariant and surfaces as
    /// the loud [`SampleError::InvalidMode`]; it is never silently mapped
    /// to a default mode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(SampleMode::Front),
            "composite" => Ok(SampleMode::Composite),
            other => Err(SampleError::InvalidMode(other.to_string())),
        }
    }
}

/// External compositor interface.
///
/// Must resolve the final visible color at a point by blending all visible
/// layers top to bottom per the color mode's blending rule. This crate
/// treats the implementation as an opaque, correct oracle.
pub trait Compositor {
    /// Blend the full stack at `(x, y)` into one packed RGBA value.
    fn composite_pixel(
        &self,
        layers: &[Layer],
        x: u32,
        y: u32,
        color_mode: ColorMode,
        palette: &Palette,
    ) -> u32;
}

/// Borrowed view of the editor state for one pick.
///
/// The layer stack is ordered bottom to top and, like the palette, must
/// stay stable for the duration of the call.
#[derive(Debug, Clone, Copy)]
pub struct PickContext<'a> {
    /// Layer stack, bottom to top
    pub layers: &'a [Layer],
    /// The document's pixel encoding
    pub color_mode: ColorMode,
    /// Palette for indexed documents
    pub palette: &'a Palette,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

/// Resolve the effective packed RGBA color at `(x, y)`.
///
/// Returns `None` outside the canvas, and in front mode also when an
/// indexed pixel resolves to a palette slot with no defined color. A
/// canvas point where no visible layer has ink yields packed transparent
/// zero, not `None`.
pub fn pick_color(
    ctx: &PickContext<'_>,
    x: i32,
    y: i32,
    mode: SampleMode,
    compositor: &dyn Compositor,
) -> Option<u32> {
    if x < 0 || y < 0 || x as u32 >= ctx.width || y as u32 >= ctx.height {
        return None;
    }
    let (x, y) = (x as u32, y as u32);

    match mode {
        SampleMode::Front => match ctx.color_mode {
            ColorMode::Indexed => {
                match find_top_palette_index(ctx.layers, x, y, ctx.palette.transparent_index()) {
                    Some(slot) => ctx.palette.color(slot),
                    None => Some(color::TRANSPARENT),
                }
            }
            ColorMode::Truecolor => Some(find_top_truecolor(ctx.layers, x, y)),
        },
        SampleMode::Composite => Some(compositor.composite_pixel(
            ctx.layers,
            x,
            y,
            ctx.color_mode,
            ctx.palette,
        )),
    }
}

/// Find the topmost visible, non-transparent palette slot at `(x, y)`.
///
/// Iterates the stack from last (topmost) to first, skipping invisible
/// layers and layers that are not indexed-encoded. Returns `None` when the
/// coordinates are out of bounds of every layer or no visible layer has
/// ink there.
pub fn find_top_palette_index(
    layers: &[Layer],
    x: u32,
    y: u32,
    transparent_index: u8,
) -> Option<u8> {
    layers
        .iter()
        .rev()
        .filter(|layer| layer.visible)
        .find_map(|layer| match &layer.data {
            PixelBuffer::Indexed(buf) => buf
                .get_pixel(x, y)
                .filter(|&slot| slot != transparent_index),
            PixelBuffer::Truecolor(_) => None,
        })
}

/// Topmost visible truecolor pixel with nonzero alpha, or transparent zero.
fn find_top_truecolor(layers: &[Layer], x: u32, y: u32) -> u32 {
    layers
        .iter()
        .rev()
        .filter(|layer| layer.visible)
        .find_map(|layer| match &layer.data {
            PixelBuffer::Truecolor(buf) => {
                buf.get_pixel(x, y).filter(|&p| !color::is_transparent(p))
            }
            PixelBuffer::Indexed(_) => None,
        })
        .unwrap_or(color::TRANSPARENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use layerpix_core::{IndexedBuffer, LayerId, TruecolorBuffer};

    /// Compositor that returns a fixed sentinel, to observe delegation.
    struct FixedCompositor(u32);

    impl Compositor for FixedCompositor {
        fn composite_pixel(
            &self,
            _layers: &[Layer],
            _x: u32,
            _y: u32,
            _color_mode: ColorMode,
            _palette: &Palette,
        ) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_out_of_bounds_is_none() {
        let palette = Palette::new(vec![0, 0xFF00_00FF], 0);
        let layers = vec![Layer::new(
            LayerId(0),
            IndexedBuffer::from_vec(2, 2, vec![1, 1, 1, 1]).unwrap(),
        )];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Indexed,
            palette: &palette,
            width: 2,
            height: 2,
        };
        let comp = FixedCompositor(0xDEAD_BEEF);

        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2)] {
            assert_eq!(pick_color(&ctx, x, y, SampleMode::Front, &comp), None);
            assert_eq!(pick_color(&ctx, x, y, SampleMode::Composite, &comp), None);
        }
    }

    #[test]
    fn test_front_indexed_resolves_through_palette() {
        let palette = Palette::new(vec![0, 0xFF00_00FF, 0x00FF_00FF], 0);
        let bottom = Layer::new(
            LayerId(0),
            IndexedBuffer::from_vec(2, 2, vec![1, 1, 1, 1]).unwrap(),
        );
        let top = Layer::new(
            LayerId(1),
            IndexedBuffer::from_vec(2, 2, vec![0, 2, 0, 0]).unwrap(),
        );
        let layers = vec![bottom, top];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Indexed,
            palette: &palette,
            width: 2,
            height: 2,
        };
        let comp = FixedCompositor(0);

        // Top layer has ink at (1,0); elsewhere its transparent slot lets
        // the bottom layer through
        assert_eq!(
            pick_color(&ctx, 1, 0, SampleMode::Front, &comp),
            Some(0x00FF_00FF)
        );
        assert_eq!(
            pick_color(&ctx, 0, 0, SampleMode::Front, &comp),
            Some(0xFF00_00FF)
        );
    }

    #[test]
    fn test_front_indexed_no_ink_is_packed_zero() {
        let palette = Palette::new(vec![0, 0xFF00_00FF], 0);
        let layers = vec![Layer::new(
            LayerId(0),
            IndexedBuffer::from_vec(2, 2, vec![0, 0, 0, 0]).unwrap(),
        )];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Indexed,
            palette: &palette,
            width: 2,
            height: 2,
        };

        // No ink anywhere: transparent zero, not None
        assert_eq!(
            pick_color(&ctx, 0, 0, SampleMode::Front, &FixedCompositor(0)),
            Some(color::TRANSPARENT)
        );
    }

    #[test]
    fn test_front_indexed_undefined_slot_is_none() {
        let palette = Palette::new(vec![0, 0xFF00_00FF], 0);
        let layers = vec![Layer::new(
            LayerId(0),
            IndexedBuffer::from_vec(2, 2, vec![9, 9, 9, 9]).unwrap(),
        )];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Indexed,
            palette: &palette,
            width: 2,
            height: 2,
        };

        // Ink exists but slot 9 has no defined color
        assert_eq!(
            pick_color(&ctx, 0, 0, SampleMode::Front, &FixedCompositor(0)),
            None
        );
    }

    #[test]
    fn test_front_truecolor_skips_invisible_and_transparent() {
        let opaque_red = color::compose_rgb(255, 0, 0);
        let opaque_blue = color::compose_rgb(0, 0, 255);
        // Alpha zero even though RGB bits are set
        let ghost = 0xFFFF_FF00;

        let bottom = Layer::new(
            LayerId(0),
            TruecolorBuffer::from_vec(1, 1, vec![opaque_red]).unwrap(),
        );
        let middle = Layer::new(
            LayerId(1),
            TruecolorBuffer::from_vec(1, 1, vec![ghost]).unwrap(),
        );
        let mut top = Layer::new(
            LayerId(2),
            TruecolorBuffer::from_vec(1, 1, vec![opaque_blue]).unwrap(),
        );
        top.visible = false;

        let palette = Palette::new(vec![], 0);
        let layers = vec![bottom, middle, top];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Truecolor,
            palette: &palette,
            width: 1,
            height: 1,
        };

        // Invisible top and zero-alpha middle both skipped
        assert_eq!(
            pick_color(&ctx, 0, 0, SampleMode::Front, &FixedCompositor(0)),
            Some(opaque_red)
        );
    }

    #[test]
    fn test_front_truecolor_all_transparent_is_packed_zero() {
        let palette = Palette::new(vec![], 0);
        let layers = vec![Layer::new(LayerId(0), TruecolorBuffer::new(1, 1).unwrap())];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Truecolor,
            palette: &palette,
            width: 1,
            height: 1,
        };

        assert_eq!(
            pick_color(&ctx, 0, 0, SampleMode::Front, &FixedCompositor(0)),
            Some(color::TRANSPARENT)
        );
    }

    #[test]
    fn test_mismatched_encoding_layer_is_skipped() {
        // An indexed layer in a truecolor document is skipped, not an error
        let opaque_red = color::compose_rgb(255, 0, 0);
        let stray = Layer::new(
            LayerId(0),
            IndexedBuffer::from_vec(1, 1, vec![1]).unwrap(),
        );
        let real = Layer::new(
            LayerId(1),
            TruecolorBuffer::from_vec(1, 1, vec![opaque_red]).unwrap(),
        );

        let palette = Palette::new(vec![], 0);
        let layers = vec![real, stray];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Truecolor,
            palette: &palette,
            width: 1,
            height: 1,
        };

        assert_eq!(
            pick_color(&ctx, 0, 0, SampleMode::Front, &FixedCompositor(0)),
            Some(opaque_red)
        );
    }

    #[test]
    fn test_composite_mode_delegates_unchanged() {
        let palette = Palette::new(vec![], 0);
        let layers = vec![Layer::new(LayerId(0), TruecolorBuffer::new(2, 2).unwrap())];
        let ctx = PickContext {
            layers: &layers,
            color_mode: ColorMode::Truecolor,
            palette: &palette,
            width: 2,
            height: 2,
        };

        assert_eq!(
            pick_color(&ctx, 1, 1, SampleMode::Composite, &FixedCompositor(0xCAFE_F00D)),
            Some(0xCAFE_F00D)
        );
    }

    #[test]
    fn test_sample_mode_parsing() {
        assert_eq!("front".parse::<SampleMode>().unwrap(), SampleMode::Front);
        assert_eq!(
            "composite".parse::<SampleMode>().unwrap(),
            SampleMode::Composite
        );
        assert!(matches!(
            "average".parse::<SampleMode>(),
            Err(SampleError::InvalidMode(s)) if s == "average"
        ));
    }

    #[test]
    fn test_find_top_palette_index_bounds() {
        let layers = vec![Layer::new(
            LayerId(0),
            IndexedBuffer::from_vec(2, 2, vec![1, 1, 1, 1]).unwrap(),
        )];
        assert_eq!(find_top_palette_index(&layers, 5, 0, 0), None);
        assert_eq!(find_top_palette_index(&layers, 0, 0, 0), Some(1));
        // Transparent slot is not ink
        assert_eq!(find_top_palette_index(&layers, 0, 0, 1), None);
    }
}
