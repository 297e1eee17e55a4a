//! Layerpix - Pixel-manipulation core of a layered raster image editor
//!
//! A set of pure, deterministic transforms over 2D pixel buffers
//! (truecolor RGBA and palette-indexed):
//!
//! - Flood fill (contiguous and global, with selection masks)
//! - Geometric flips, canvas resize and translation
//! - Top-most-visible-pixel sampling across a layer stack
//! - View pan clamping
//!
//! Every user-facing tool of the editor (bucket fill, move, flip, canvas
//! resize, eyedropper) bottoms out in one of these routines. Each call is
//! a complete synchronous pass that borrows its inputs read-only and
//! returns freshly allocated results; committing results into the mutable
//! layer model and recording history belong to the caller.
//!
//! # Example
//!
//! ```
//! use layerpix::{IndexedBuffer, Layer, LayerId};
//! use layerpix::fill::flood_fill_indexed;
//! use layerpix::transform::flip_horizontal;
//!
//! let canvas = IndexedBuffer::from_vec(2, 2, vec![1, 1, 0, 1]).unwrap();
//! let filled = flood_fill_indexed(&canvas, 0, 0, 3, true, 0, None);
//! assert_eq!(filled.data(), &[3, 3, 0, 3]);
//!
//! let layers = vec![Layer::new(LayerId(0), filled)];
//! let flipped = flip_horizontal(&layers).unwrap();
//! assert_eq!(flipped[0].data.as_indexed().unwrap().data(), &[3, 3, 3, 0]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use layerpix_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use layerpix_fill as fill;
pub use layerpix_sample as sample;
pub use layerpix_transform as transform;
