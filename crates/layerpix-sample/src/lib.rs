//! layerpix-sample - Layer sampling (eyedropper) engine
//!
//! Resolves the effective color at a canvas point, either by reading the
//! front-most visible non-transparent layer pixel or by delegating to an
//! external compositor for a fully blended result.
//!
//! # Examples
//!
//! ```
//! use layerpix_core::{ColorMode, Layer, LayerId, Palette, TruecolorBuffer, color};
//! use layerpix_sample::{Compositor, PickContext, SampleMode, pick_color};
//!
//! struct NoComposite;
//! impl Compositor for NoComposite {
//!     fn composite_pixel(
//!         &self,
//!         _layers: &[Layer],
//!         _x: u32,
//!         _y: u32,
//!         _mode: ColorMode,
//!         _palette: &Palette,
//!     ) -> u32 {
//!         color::TRANSPARENT
//!     }
//! }
//!
//! let red = color::compose_rgb(255, 0, 0);
//! let layers = vec![Layer::new(
//!     LayerId(0),
//!     TruecolorBuffer::from_vec(1, 1, vec![red]).unwrap(),
//! )];
//! let palette = Palette::new(vec![], 0);
//! let ctx = PickContext {
//!     layers: &layers,
//!     color_mode: ColorMode::Truecolor,
//!     palette: &palette,
//!     width: 1,
//!     height: 1,
//! };
//!
//! assert_eq!(pick_color(&ctx, 0, 0, SampleMode::Front, &NoComposite), Some(red));
//! assert_eq!(pick_color(&ctx, 3, 0, SampleMode::Front, &NoComposite), None);
//! ```

pub mod error;
pub mod pick;

// Re-export core types
pub use layerpix_core;

pub use error::{SampleError, SampleResult};
pub use pick::{Compositor, PickContext, SampleMode, find_top_palette_index, pick_color};
