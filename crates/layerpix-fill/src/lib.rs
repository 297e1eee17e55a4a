//! layerpix-fill - Flood fill engine
//!
//! Bucket-fill for both pixel encodings, in two modes:
//!
//! - **Contiguous** - 4-connected region growth from a seed pixel
//! - **Global** - whole-buffer replacement of the seed's value
//!
//! Both modes honor an optional [`SelectionMask`](layerpix_core::SelectionMask)
//! and never mutate their input: the source is cloned and the clone is
//! returned. Fills never fail - masked or out-of-range seeds degrade to
//! no-ops.
//!
//! # Examples
//!
//! ```
//! use layerpix_core::IndexedBuffer;
//! use layerpix_fill::flood_fill_indexed;
//!
//! // 0 0        5 5
//! // 0 1   ->   5 1   (contiguous fill from the top-left corner)
//! let src = IndexedBuffer::from_vec(2, 2, vec![0, 0, 0, 1]).unwrap();
//! let out = flood_fill_indexed(&src, 0, 0, 5, true, 0, None);
//! assert_eq!(out.data(), &[5, 5, 5, 1]);
//! ```

pub mod floodfill;

// Re-export core types
pub use layerpix_core;

pub use floodfill::{flood_fill_indexed, flood_fill_truecolor};
