//! View geometry - clamping the camera pan envelope
//!
//! The camera offset is expressed relative to the canvas center. Each axis
//! may pan at most half the canvas dimension past either edge.

/// Clamp a camera offset to the pan envelope of a canvas.
///
/// Each axis is clamped independently to `[-dim/2, +dim/2]` where `dim` is
/// that axis's canvas dimension in pixels.
pub fn clamp_view(cx: f32, cy: f32, canvas_w: u32, canvas_h: u32) -> (f32, f32) {
    let half_w = canvas_w as f32 / 2.0;
    let half_h = canvas_h as f32 / 2.0;
    (cx.clamp(-half_w, half_w), cy.clamp(-half_h, half_h))
}
