//! Selection masks - gating which pixels a tool may touch
//!
//! A mask is a byte buffer parallel to a pixel buffer: nonzero means the
//! pixel is selectable/editable. Operations take `Option<&SelectionMask>`;
//! `None` means the whole canvas is selectable.

use crate::error::{Error, Result};

/// Byte mask parallel to a pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SelectionMask {
    /// Create a mask from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0, or
    /// [`Error::LengthMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the pixel at (x, y) is selectable.
    ///
    /// Out-of-bounds coordinates are not selectable.
    #[inline]
    pub fn is_selected(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[(y as usize) * (self.width as usize) + x as usize] != 0
    }

    /// Mask data as a row-major slice.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
