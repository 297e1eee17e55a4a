//! Layerpix Core - Basic data structures for layered raster editing
//!
//! This crate provides the data model shared by every layerpix operation:
//!
//! - [`TruecolorBuffer`] / [`IndexedBuffer`] - flat row-major pixel buffers
//! - [`PixelBuffer`] / [`ColorMode`] - the tagged union over both encodings
//! - [`Layer`] / [`LayerId`] - one layer of a document
//! - [`Palette`] - ordered packed-RGBA colors for indexed mode
//! - [`SelectionMask`] - optional byte mask gating editable pixels
//! - [`color`] - packed 32-bit RGBA helpers
//! - [`clamp_view`] - camera pan envelope clamping
//!
//! All operations built on these types are pure: inputs are borrowed
//! read-only and results are freshly allocated, so a returned buffer never
//! aliases an input.

pub mod buffer;
pub mod error;
pub mod layer;
pub mod mask;
pub mod palette;
pub mod view;

pub use buffer::{ColorMode, IndexedBuffer, PixelBuffer, TruecolorBuffer};
pub use error::{Error, Result};
pub use layer::{Layer, LayerId};
pub use mask::SelectionMask;
pub use palette::Palette;
pub use view::clamp_view;

/// Helper functions for packed 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB),
/// so `alpha(p) == 0` means fully transparent. Comparison and storage use
/// native unsigned `u32` arithmetic throughout.
pub mod color {
    /// Fully transparent packed pixel (all channels zero).
    pub const TRANSPARENT: u32 = 0;

    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a packed pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a packed pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a packed pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a packed pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Whether a packed pixel is fully transparent.
    #[inline]
    pub fn is_transparent(pixel: u32) -> bool {
        alpha(pixel) == 0
    }

    /// Compose a packed RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a packed RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a packed pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

}
