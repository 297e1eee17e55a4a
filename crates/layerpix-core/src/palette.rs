//! Palette - ordered colors for indexed buffers
//!
//! An [`IndexedBuffer`](crate::IndexedBuffer) pixel is a slot into a
//! palette of packed RGBA colors. One slot, the transparent index, is
//! reserved to mean "no ink"; the color stored at that slot (if any) is
//! not meaningful and is never resolved.

use crate::color;

/// Color palette for indexed-mode documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<u32>,
    transparent_index: u8,
}

impl Palette {
    /// Create a palette from packed RGBA colors.
    ///
    /// `transparent_index` may point past the end of `colors`; slots
    /// without a defined color simply resolve to `None`.
    pub fn new(colors: Vec<u32>, transparent_index: u8) -> Self {
        Self {
            colors,
            transparent_index,
        }
    }

    /// The slot reserved for "no ink".
    #[inline]
    pub fn transparent_index(&self) -> u8 {
        self.transparent_index
    }

    /// Number of defined slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the palette defines no colors at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve a slot to its packed RGBA color.
    ///
    /// Returns `None` for an undefined slot and for the transparent index
    /// (a transparent pixel has no color to resolve).
    pub fn color(&self, slot: u8) -> Option<u32> {
        if slot == self.transparent_index {
            return None;
        }
        self.colors.get(slot as usize).copied()
    }

    /// Resolve a slot like [`color`](Self::color), mapping the transparent
    /// index to packed transparent zero instead of `None`.
    pub fn color_or_transparent(&self, slot: u8) -> Option<u32> {
        if slot == self.transparent_index {
            return Some(color::TRANSPARENT);
        }
        self.colors.get(slot as usize).copied()
    }

    /// All defined slots, in order.
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }
}
