//! Two-phase sprite collision.
//!
//! The broad phase compares axis-aligned bounding rectangles and rejects most
//! pairs before any pixel is touched. Pairs that survive are tested pixel by
//! pixel: every opaque pixel of one sprite is projected into the other
//! sprite's frame through the composed transforms, and the test stops at the
//! first overlapping opaque pair.

use glam::{Affine2, Vec2 as GlamVec2};

use crate::mask::MaskFrame;
use crate::math::Rect;

/// Anything that can take part in pixel-exact collision.
pub trait Collidable {
    fn is_alive(&self) -> bool;

    /// Screen-space rectangle enclosing the sprite.
    fn bounding_rect(&self) -> Rect;

    /// Frame-local pixels to screen space.
    fn local_to_screen(&self) -> Affine2;

    /// Opacity of the frame currently shown, if a texture is bound.
    fn mask_frame(&self) -> Option<MaskFrame<'_>>;
}

/// How far a collision query got before it was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// At least one sprite is dead.
    Inactive,
    /// Bounding rectangles do not intersect; no pixels were compared.
    Separated,
    /// Bounding rectangles intersect but no opaque pixels overlap.
    NoPixelOverlap,
    Hit,
}

impl CollisionOutcome {
    pub fn is_hit(self) -> bool {
        self == CollisionOutcome::Hit
    }
}

/// Run both collision phases for a pair of sprites.
pub fn check<A, B>(a: &A, b: &B) -> CollisionOutcome
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    if !a.is_alive() || !b.is_alive() {
        return CollisionOutcome::Inactive;
    }

    if !a.bounding_rect().intersects(&b.bounding_rect()) {
        return CollisionOutcome::Separated;
    }

    let (Some(a_mask), Some(b_mask)) = (a.mask_frame(), b.mask_frame()) else {
        return CollisionOutcome::NoPixelOverlap;
    };
    let a_xf = a.local_to_screen();
    let b_xf = b.local_to_screen();

    // Sampling only integer pixels of one side can step over a magnified
    // partner, so sweep from both sides.
    if pixels_overlap(a_mask, a_xf, b_mask, b_xf) || pixels_overlap(b_mask, b_xf, a_mask, a_xf) {
        log::trace!("pixel collision confirmed");
        CollisionOutcome::Hit
    } else {
        CollisionOutcome::NoPixelOverlap
    }
}

/// True if the two sprites are alive and any of their opaque pixels overlap.
pub fn is_collided<A, B>(a: &A, b: &B) -> bool
where
    A: Collidable + ?Sized,
    B: Collidable + ?Sized,
{
    check(a, b).is_hit()
}

/// Project each opaque pixel of `from` into `to`'s frame and look for an
/// opaque pixel there.
fn pixels_overlap(from: MaskFrame<'_>, from_xf: Affine2, to: MaskFrame<'_>, to_xf: Affine2) -> bool {
    // a zero scale collapses the target to a line; nothing can land inside
    if to_xf.matrix2.determinant() == 0.0 {
        return false;
    }
    let from_to_local = to_xf.inverse() * from_xf;

    // stepping one pixel along x or y in `from` moves by these in `to`
    let step_x = from_to_local.matrix2.x_axis;
    let step_y = from_to_local.matrix2.y_axis;
    let to_width = to.width() as f32;
    let to_height = to.height() as f32;

    let mut row_start: GlamVec2 = from_to_local.translation;
    for y in 0..from.height() {
        let mut projected = row_start;
        for x in 0..from.width() {
            if from.is_opaque(x, y) {
                let cell = projected.floor();
                if cell.x >= 0.0
                    && cell.y >= 0.0
                    && cell.x < to_width
                    && cell.y < to_height
                    && to.is_opaque(cell.x as u32, cell.y as u32)
                {
                    return true;
                }
            }
            projected += step_x;
        }
        row_start += step_y;
    }

    false
}
