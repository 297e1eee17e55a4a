//! layerpix-transform - Geometric transforms over layer stacks
//!
//! This crate provides the whole-canvas geometric operations of the
//! editor:
//!
//! - **Flips** - horizontal and vertical mirroring of every layer
//! - **Resize** - crop/pad anchored at the origin, no scaling
//! - **Translation** - integer shifts with out-of-bounds clipping
//!
//! All operations are pure: layers are borrowed read-only and results are
//! freshly allocated (translation takes its buffer by value so the
//! zero-shift identity can return it without copying).
//!
//! # Examples
//!
//! ```
//! use layerpix_core::{IndexedBuffer, Layer, LayerId};
//! use layerpix_transform::flip_horizontal;
//!
//! let buf = IndexedBuffer::from_vec(2, 1, vec![1, 2]).unwrap();
//! let layers = vec![Layer::new(LayerId(0), buf)];
//!
//! let flipped = flip_horizontal(&layers).unwrap();
//! assert_eq!(flipped[0].data.as_indexed().unwrap().data(), &[2, 1]);
//! ```

pub mod error;
pub mod flip;
pub mod resize;
pub mod translate;

// Re-export core types
pub use layerpix_core;

pub use error::{TransformError, TransformResult};
pub use flip::{flip_buffer_horizontal, flip_buffer_vertical, flip_horizontal, flip_vertical};
pub use resize::{resize, resize_buffer};
pub use translate::{translate_indexed, translate_truecolor};
