//! Layers - a pixel buffer with identity and visibility flags
//!
//! The layer stack itself lives outside this library: an ordered sequence
//! of [`Layer`], bottom to top ("topmost" = last element). Operations here
//! borrow layers read-only and hand back replacement buffers; committing a
//! replacement into the stack (and recording history) is the caller's job.

use crate::buffer::PixelBuffer;

/// Opaque layer identifier.
///
/// Assigned by the owning application; this library only carries it
/// through transforms unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(pub u64);

/// One layer of a document.
///
/// `locked` is informational within this library - transforms and fills do
/// not gate on it. Tool-level restrictions are enforced by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Opaque identifier, preserved by every transform
    pub id: LayerId,
    /// Whether the layer participates in sampling/compositing
    pub visible: bool,
    /// Informational edit lock (caller-enforced)
    pub locked: bool,
    /// The layer's pixels
    pub data: PixelBuffer,
}

impl Layer {
    /// Create a visible, unlocked layer.
    pub fn new(id: LayerId, data: impl Into<PixelBuffer>) -> Self {
        Self {
            id,
            visible: true,
            locked: false,
            data: data.into(),
        }
    }

    /// A copy of this layer with replacement pixel data.
    ///
    /// Preserves `id`, `visible` and `locked`.
    pub fn with_data(&self, data: impl Into<PixelBuffer>) -> Self {
        Self {
            id: self.id,
            visible: self.visible,
            locked: self.locked,
            data: data.into(),
        }
    }
}
