//! Affine placement of a sprite on screen.

use glam::{Affine2, Vec2 as GlamVec2};

use crate::math::{normalize_degrees, Rect, Vec2};

/// Transform describing where and how a sprite frame is placed on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    /// Upper-left anchor of the unrotated sprite.
    pub position: Vec2,
    pub scale: Vec2,
    /// Pivot for rotation and scaling, relative to `position`.
    pub origin: Vec2,
    /// Draw ordering hint passed through to the renderer.
    pub layer: f32,
    /// Rotation in degrees, counter-clockwise on screen. Always in `[0, 360)`.
    rotation: f32,
}

impl Transform2D {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn identity() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            origin: Vec2::ZERO,
            layer: 0.0,
            rotation: 0.0,
        }
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.rotation = normalize_degrees(degrees);
    }

    /// Adjust the rotation by `delta` degrees (positive or negative).
    pub fn rotate_by(&mut self, delta: f32) {
        self.set_rotation_degrees(self.rotation + delta);
    }

    /// Maps frame-local pixel coordinates to screen coordinates.
    ///
    /// Applied to a point, the steps are: translate by `-origin / scale`,
    /// rotate by `-rotation` (y points down, so this turns counter-clockwise
    /// on screen), scale, then translate to `position + origin`.
    pub fn to_affine(&self) -> Affine2 {
        let origin = self.origin.to_glam();
        let scale = self.scale.to_glam();
        Affine2::from_translation(self.position.to_glam() + origin)
            * Affine2::from_scale(scale)
            * Affine2::from_angle(-self.rotation.to_radians())
            * Affine2::from_translation(-origin / scale)
    }

    /// Screen-space axis-aligned rectangle enclosing a frame of
    /// `frame_width` x `frame_height` unscaled pixels.
    ///
    /// Unrotated sprites get the exact scaled rectangle. Rotated sprites get
    /// the floored bounds of the four projected corners, which may be looser
    /// than the rotated box itself. A zero scale component has no inverse
    /// pivot, so it also takes the exact path and yields a zero-area rect.
    pub fn bounding_rect(&self, frame_width: f32, frame_height: f32) -> Rect {
        if self.rotation == 0.0 || self.scale.x == 0.0 || self.scale.y == 0.0 {
            return Rect::new(
                self.position.x,
                self.position.y,
                frame_width * self.scale.x,
                frame_height * self.scale.y,
            );
        }

        let affine = self.to_affine();
        let corners = [
            GlamVec2::new(0.0, 0.0),
            GlamVec2::new(frame_width, 0.0),
            GlamVec2::new(0.0, frame_height),
            GlamVec2::new(frame_width, frame_height),
        ]
        .map(|corner| affine.transform_point2(corner).floor());

        let min = corners.iter().copied().fold(GlamVec2::splat(f32::INFINITY), GlamVec2::min);
        let max = corners
            .iter()
            .copied()
            .fold(GlamVec2::splat(f32::NEG_INFINITY), GlamVec2::max);
        Rect::from_min_max(min.into(), max.into())
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn rotation_stays_in_range() {
        let mut t = Transform2D::identity();
        t.rotate_by(-1.0);
        assert_eq!(t.rotation_degrees(), 359.0);
        t.rotate_by(1.0);
        assert_eq!(t.rotation_degrees(), 0.0);
        t.set_rotation_degrees(1080.0 + 45.0);
        assert!(approx_eq(t.rotation_degrees(), 45.0));
    }

    #[test]
    fn unrotated_bounds_are_exact() {
        let mut t = Transform2D::new(Vec2::new(10.25, -3.5));
        t.scale = Vec2::new(2.0, 0.5);
        t.origin = Vec2::new(7.0, 7.0);
        let rect = t.bounding_rect(16.0, 8.0);
        assert_eq!(rect, Rect::new(10.25, -3.5, 32.0, 4.0));
    }

    #[test]
    fn zero_scale_gives_finite_empty_bounds() {
        let mut t = Transform2D::new(Vec2::new(12.0, 8.0));
        t.origin = Vec2::new(4.0, 4.0);
        t.set_rotation_degrees(30.0);
        t.scale = Vec2::new(0.0, 1.0);
        let rect = t.bounding_rect(8.0, 8.0);
        assert!(rect.x.is_finite() && rect.y.is_finite());
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect, Rect::new(12.0, 8.0, 0.0, 8.0));

        t.scale = Vec2::ZERO;
        assert_eq!(t.bounding_rect(8.0, 8.0), Rect::new(12.0, 8.0, 0.0, 0.0));
    }

    #[test]
    fn zero_rotation_affine_ignores_origin() {
        let mut t = Transform2D::new(Vec2::new(5.0, 6.0));
        t.scale = Vec2::new(2.0, 3.0);
        t.origin = Vec2::new(4.0, 1.0);
        let p = t.to_affine().transform_point2(GlamVec2::new(1.0, 1.0));
        assert!(approx_eq(p.x, 7.0));
        assert!(approx_eq(p.y, 9.0));
    }

    #[test]
    fn quarter_turn_about_center() {
        // 10x2 bar pivoting around its center turns into a 2x10 bar.
        let mut t = Transform2D::identity();
        t.origin = Vec2::new(5.0, 1.0);
        t.set_rotation_degrees(90.0);
        let affine = t.to_affine();

        // The pivot itself does not move.
        let pivot = affine.transform_point2(GlamVec2::new(5.0, 1.0));
        assert!(approx_eq(pivot.x, 5.0));
        assert!(approx_eq(pivot.y, 1.0));

        // Counter-clockwise on screen: the right end of the bar goes up.
        let right_end = affine.transform_point2(GlamVec2::new(10.0, 1.0));
        assert!(approx_eq(right_end.x, 5.0));
        assert!(approx_eq(right_end.y, -4.0));

        let rect = t.bounding_rect(10.0, 2.0);
        assert!((rect.x - 4.0).abs() <= 1.0);
        assert!((rect.y + 4.0).abs() <= 1.0);
        assert!((rect.right() - 6.0).abs() <= 1.0);
        assert!((rect.bottom() - 6.0).abs() <= 1.0);
    }

    #[test]
    fn rotated_bounds_enclose_all_corners() {
        let mut t = Transform2D::new(Vec2::new(100.0, 50.0));
        t.scale = Vec2::new(1.5, 2.0);
        t.origin = Vec2::new(8.0, 8.0);
        t.set_rotation_degrees(33.0);
        let affine = t.to_affine();
        let rect = t.bounding_rect(16.0, 16.0);
        for corner in [(0.0, 0.0), (16.0, 0.0), (0.0, 16.0), (16.0, 16.0)] {
            let p = affine.transform_point2(GlamVec2::new(corner.0, corner.1));
            assert!(p.x >= rect.left() && p.x < rect.right() + 1.0);
            assert!(p.y >= rect.top() && p.y < rect.bottom() + 1.0);
        }
    }
}
