//! Pixel buffers - flat row-major canvases in two encodings
//!
//! A layer's pixels live in one of two fixed-width encodings:
//!
//! - [`TruecolorBuffer`]: one packed 32-bit RGBA value per pixel
//!   (`0xRRGGBBAA`, alpha in the low byte)
//! - [`IndexedBuffer`]: one 8-bit palette slot per pixel
//!
//! Both store pixels in row-major order and maintain the invariant
//! `data.len() == width * height` from construction onward. Buffers are
//! never resized in place; every transform that changes dimensions or
//! content allocates and returns a new buffer.
//!
//! Structural equality (same dimensions, identical elements pairwise) is
//! the derived `PartialEq` on each buffer type.

use crate::error::{Error, Result};

/// Which pixel encoding a layer stack uses.
///
/// A stack is never mixed-mode: every layer of a document shares one
/// `ColorMode`. Operations that tolerate a stray mismatched layer skip it
/// rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Packed 32-bit RGBA per pixel
    Truecolor,
    /// 8-bit palette slot per pixel
    Indexed,
}

/// Truecolor pixel buffer: packed 32-bit RGBA, row-major.
///
/// The packed layout is `0xRRGGBBAA` with alpha in bits 0-7, so a pixel is
/// fully transparent exactly when `color::alpha(p) == 0`. See the
/// [`crate::color`] helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruecolorBuffer {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

/// Indexed pixel buffer: one 8-bit palette slot per pixel, row-major.
///
/// One slot per palette, the transparent index, denotes "no ink"; the
/// buffer itself does not know which slot that is - callers pass it where
/// transparency matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

macro_rules! impl_buffer {
    ($name:ident, $elem:ty) => {
        impl $name {
            /// Create a new zero-filled buffer.
            ///
            /// Element zero is fully transparent in both encodings (packed
            /// RGBA 0 has zero alpha; slot 0 is the conventional indexed
            /// transparent slot).
            ///
            /// # Errors
            ///
            /// Returns [`Error::InvalidDimension`] if either dimension is 0.
            pub fn new(width: u32, height: u32) -> Result<Self> {
                if width == 0 || height == 0 {
                    return Err(Error::InvalidDimension { width, height });
                }
                let data = vec![0 as $elem; (width as usize) * (height as usize)];
                Ok(Self {
                    width,
                    height,
                    data,
                })
            }

            /// Create a buffer from existing pixel data.
            ///
            /// # Errors
            ///
            /// Returns [`Error::InvalidDimension`] if either dimension is 0,
            /// or [`Error::LengthMismatch`] if `data.len() != width * height`.
            pub fn from_vec(width: u32, height: u32, data: Vec<$elem>) -> Result<Self> {
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

            /// Total number of pixels (`width * height`).
            #[inline]
            pub fn len(&self) -> usize {
                self.data.len()
            }

            /// Always false: zero-dimension buffers cannot be constructed.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            /// Pixel data as a row-major slice.
            #[inline]
            pub fn data(&self) -> &[$elem] {
                &self.data
            }

            /// Pixel data as a mutable row-major slice.
            #[inline]
            pub fn data_mut(&mut self) -> &mut [$elem] {
                &mut self.data
            }

            /// Consume the buffer, yielding its pixel data.
            pub fn into_vec(self) -> Vec<$elem> {
                self.data
            }

            /// Get the pixel at (x, y), or `None` out of bounds.
            #[inline]
            pub fn get_pixel(&self, x: u32, y: u32) -> Option<$elem> {
                if x >= self.width || y >= self.height {
                    return None;
                }
                Some(self.data[(y as usize) * (self.width as usize) + x as usize])
            }

            /// Get the pixel at (x, y) without bounds checking.
            ///
            /// # Panics
            ///
            /// Panics if `x >= width` or `y >= height`.
            #[inline]
            pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> $elem {
                self.data[(y as usize) * (self.width as usize) + x as usize]
            }

            /// Set the pixel at (x, y).
            ///
            /// # Errors
            ///
            /// Returns [`Error::CoordOutOfBounds`] if the coordinates are
            /// outside the buffer.
            #[inline]
            pub fn set_pixel(&mut self, x: u32, y: u32, val: $elem) -> Result<()> {
                if x >= self.width || y >= self.height {
                    return Err(Error::CoordOutOfBounds { x, y });
                }
                self.data[(y as usize) * (self.width as usize) + x as usize] = val;
                Ok(())
            }

            /// Set the pixel at (x, y) without bounds checking.
            ///
            /// # Panics
            ///
            /// Panics if `x >= width` or `y >= height`.
            #[inline]
            pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: $elem) {
                self.data[(y as usize) * (self.width as usize) + x as usize] = val;
            }

            /// Fill the whole buffer with one value.
            pub fn fill(&mut self, val: $elem) {
                self.data.fill(val);
            }
        }
    };
}

impl_buffer!(TruecolorBuffer, u32);
impl_buffer!(IndexedBuffer, u8);

/// A pixel buffer of either encoding.
///
/// The encoding travels with the data as a tagged union, so code that
/// expects one encoding matches on the variant instead of probing the
/// element type at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBuffer {
    /// Packed 32-bit RGBA buffer
    Truecolor(TruecolorBuffer),
    /// 8-bit palette-indexed buffer
    Indexed(IndexedBuffer),
}

impl PixelBuffer {
    /// The encoding of this buffer.
    pub fn mode(&self) -> ColorMode {
        match self {
            PixelBuffer::Truecolor(_) => ColorMode::Truecolor,
            PixelBuffer::Indexed(_) => ColorMode::Indexed,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        match self {
            PixelBuffer::Truecolor(b) => b.width(),
            PixelBuffer::Indexed(b) => b.width(),
        }
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        match self {
            PixelBuffer::Truecolor(b) => b.height(),
            PixelBuffer::Indexed(b) => b.height(),
        }
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        match self {
            PixelBuffer::Truecolor(b) => b.len(),
            PixelBuffer::Indexed(b) => b.len(),
        }
    }

    /// Always false: zero-dimension buffers cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The truecolor buffer, if this is one.
    pub fn as_truecolor(&self) -> Option<&TruecolorBuffer> {
        match self {
            PixelBuffer::Truecolor(b) => Some(b),
            PixelBuffer::Indexed(_) => None,
        }
    }

    /// The indexed buffer, if this is one.
    pub fn as_indexed(&self) -> Option<&IndexedBuffer> {
        match self {
            PixelBuffer::Truecolor(_) => None,
            PixelBuffer::Indexed(b) => Some(b),
        }
    }
}

impl From<TruecolorBuffer> for PixelBuffer {
    fn from(buf: TruecolorBuffer) -> Self {
        PixelBuffer::Truecolor(buf)
    }
}

impl From<IndexedBuffer> for PixelBuffer {
    fn from(buf: IndexedBuffer) -> Self {
        PixelBuffer::Indexed(buf)
    }
}
