//! Data handed to whatever renderer the game uses. Sprite2D never rasterizes
//! anything itself.

use crate::math::Vec2;

/// Sub-rectangle of a texture strip, in texels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SourceRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SourceRect {
    /// Source rectangle for `frame` of a strip of `frame_width` x `height`
    /// frames laid out left to right.
    pub fn for_frame(frame: u32, frame_width: u32, height: u32) -> Self {
        Self {
            x: frame * frame_width,
            y: 0,
            width: frame_width,
            height,
        }
    }
}

/// Everything a textured-quad renderer needs to draw one sprite.
///
/// The quad is placed at `position`, rotated by `rotation` radians about
/// `origin` (given in unscaled texels), then scaled by `scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawParams {
    pub position: Vec2,
    pub source: SourceRect,
    pub origin: Vec2,
    /// Radians, already negated for the renderer's clockwise convention.
    pub rotation: f32,
    pub scale: Vec2,
    pub layer: f32,
}
