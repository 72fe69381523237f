//! Velocity, heading and time-to-live for a sprite.
//!
//! Angles are in degrees. Because the screen's y axis points down, a heading
//! of 90 degrees moves a sprite up the screen.

use glam::{Vec2 as GlamVec2, Vec3};

use crate::math::{normalize_degrees, Vec2};

/// Default fastest absolute speed, in pixels per tick.
pub const DEFAULT_MAX_SPEED: f32 = 10.0;

/// Heading in degrees of a velocity vector, in `[0, 360)`.
pub fn calculate_direction_angle(velocity: Vec2) -> f32 {
    normalize_degrees((-velocity.y).atan2(velocity.x).to_degrees())
}

/// Velocity state with a maximum-speed clamp.
///
/// The heading is kept separately from the velocity so that a stationary
/// sprite still faces a direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    velocity: Vec2,
    direction: f32,
    max_speed: f32,
}

impl Motion {
    pub fn new(max_speed: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            direction: 0.0,
            max_speed,
        }
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    pub fn direction_degrees(&self) -> f32 {
        self.direction
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Change the speed limit. The current velocity is re-clamped.
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
        self.set_velocity(self.velocity.x, self.velocity.y);
    }

    /// Set the velocity components, scaling both down uniformly if the
    /// resulting speed exceeds the limit.
    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        let mut velocity = Vec2::new(vx, vy);
        let speed = velocity.length();
        if speed > self.max_speed {
            velocity = velocity * (self.max_speed / speed);
        }
        self.velocity = velocity;

        // a zero vector has no heading; keep facing the old way
        if velocity != Vec2::ZERO {
            self.direction = calculate_direction_angle(velocity);
        }
    }

    /// Set the velocity from an absolute speed and a heading in degrees.
    ///
    /// The heading is stored as given even when the speed is zero.
    pub fn set_speed_and_direction(&mut self, speed: f32, degrees: f32) {
        let degrees = normalize_degrees(degrees);
        let radians = degrees.to_radians();
        self.set_velocity(speed * radians.cos(), -speed * radians.sin());
        self.direction = degrees;
    }

    /// Point in a new direction, keeping the current speed.
    pub fn set_direction(&mut self, degrees: f32) {
        self.set_speed_and_direction(self.speed(), degrees);
    }

    /// Turn by `delta` degrees, keeping the current speed.
    pub fn change_direction(&mut self, delta: f32) {
        self.set_direction(self.direction + delta);
    }

    /// Speed up (or slow down, if negative) along the current heading.
    pub fn accelerate(&mut self, amount: f32) {
        let radians = self.direction.to_radians();
        self.accelerate_xy(amount * radians.cos(), -amount * radians.sin());
    }

    /// Add an acceleration vector to the velocity, re-applying the clamp.
    pub fn accelerate_xy(&mut self, ax: f32, ay: f32) {
        self.set_velocity(self.velocity.x + ax, self.velocity.y + ay);
    }

    /// Bounce the velocity off a surface running along `slope`.
    ///
    /// `slope` must not be the zero vector.
    pub fn reflect(&mut self, slope: Vec2) {
        debug_assert!(slope != Vec2::ZERO, "reflect needs a non-zero slope");
        let slope = slope.to_glam().normalize_or_zero();
        let normal = slope.extend(0.0).cross(Vec3::NEG_Z).truncate();

        let velocity = self.velocity.to_glam();
        let reflected: GlamVec2 = velocity - 2.0 * velocity.dot(normal) * normal;
        self.velocity = reflected.into();
        if self.velocity != Vec2::ZERO {
            self.direction = calculate_direction_angle(self.velocity);
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SPEED)
    }
}

/// Remaining ticks before a sprite dies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Lifetime {
    #[default]
    Infinite,
    Ticks(u32),
}

impl Lifetime {
    /// Interpret a signed TTL where any negative value means "never expires".
    pub fn from_ttl(ttl: i32) -> Self {
        u32::try_from(ttl).map_or(Lifetime::Infinite, Lifetime::Ticks)
    }

    /// Signed TTL form: `-1` when infinite.
    pub fn as_ttl(&self) -> i32 {
        match self {
            Lifetime::Infinite => -1,
            Lifetime::Ticks(n) => i32::try_from(*n).unwrap_or(i32::MAX),
        }
    }

    /// Count one tick. Returns false once the lifetime was already used up,
    /// which is the tick on which the owner dies.
    pub fn tick(&mut self) -> bool {
        match self {
            Lifetime::Infinite => true,
            Lifetime::Ticks(0) => false,
            Lifetime::Ticks(n) => {
                *n -= 1;
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    #[test]
    fn direction_uses_screen_up() {
        assert!(approx_eq(calculate_direction_angle(Vec2::new(1.0, 0.0)), 0.0));
        assert!(approx_eq(calculate_direction_angle(Vec2::new(0.0, -1.0)), 90.0));
        assert!(approx_eq(calculate_direction_angle(Vec2::new(-1.0, 0.0)), 180.0));
        assert!(approx_eq(calculate_direction_angle(Vec2::new(0.0, 1.0)), 270.0));
    }

    #[test]
    fn set_velocity_clamps_uniformly() {
        let mut m = Motion::new(5.0);
        m.set_velocity(30.0, 40.0);
        assert!(vec_approx_eq(m.velocity(), Vec2::new(3.0, 4.0)));
        assert!(m.speed() <= 5.0 + EPSILON);
    }

    #[test]
    fn set_velocity_under_limit_is_untouched() {
        let mut m = Motion::default();
        m.set_velocity(3.0, -4.0);
        assert_eq!(m.velocity(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn zero_velocity_keeps_heading() {
        let mut m = Motion::default();
        m.set_speed_and_direction(0.0, 135.0);
        assert_eq!(m.velocity(), Vec2::ZERO);
        assert_eq!(m.direction_degrees(), 135.0);

        m.set_velocity(0.0, 0.0);
        assert_eq!(m.direction_degrees(), 135.0);
    }

    #[test]
    fn speed_direction_round_trip() {
        let mut m = Motion::default();
        for &(vx, vy) in &[(3.0, 4.0), (-2.0, 1.5), (0.5, -7.0), (-6.0, -6.0)] {
            m.set_velocity(vx, vy);
            let speed = m.speed();
            let heading = m.direction_degrees();
            let before = m.velocity();
            m.set_speed_and_direction(speed, heading);
            assert!(vec_approx_eq(m.velocity(), before), "round trip for ({vx}, {vy})");
        }
    }

    #[test]
    fn speed_and_direction_respects_limit() {
        let mut m = Motion::new(2.0);
        m.set_speed_and_direction(100.0, 45.0);
        assert!(m.speed() <= 2.0 + EPSILON);
        assert!(approx_eq(m.direction_degrees(), 45.0));
    }

    #[test]
    fn change_direction_wraps_and_keeps_speed() {
        let mut m = Motion::default();
        m.set_speed_and_direction(4.0, 10.0);
        m.change_direction(-20.0);
        assert!(approx_eq(m.direction_degrees(), 350.0));
        assert!(approx_eq(m.speed(), 4.0));
        m.change_direction(20.0);
        assert!(approx_eq(m.direction_degrees(), 10.0));
    }

    #[test]
    fn accelerate_along_heading() {
        let mut m = Motion::default();
        m.set_speed_and_direction(0.0, 90.0);
        m.accelerate(2.0);
        assert!(vec_approx_eq(m.velocity(), Vec2::new(0.0, -2.0)));
        m.accelerate(50.0);
        assert!(approx_eq(m.speed(), DEFAULT_MAX_SPEED));
        assert!(approx_eq(m.direction_degrees(), 90.0));
    }

    #[test]
    fn accelerate_xy_reclamps() {
        let mut m = Motion::new(5.0);
        m.set_velocity(4.0, 0.0);
        m.accelerate_xy(4.0, 0.0);
        assert!(vec_approx_eq(m.velocity(), Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn lowering_max_speed_reclamps() {
        let mut m = Motion::default();
        m.set_velocity(6.0, 8.0);
        m.set_max_speed(5.0);
        assert!(vec_approx_eq(m.velocity(), Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn reflect_off_floor() {
        // Moving down-right onto a horizontal floor.
        let mut m = Motion::default();
        m.set_velocity(3.0, 4.0);
        m.reflect(Vec2::new(1.0, 0.0));
        assert!(vec_approx_eq(m.velocity(), Vec2::new(3.0, -4.0)));
        assert!(approx_eq(
            m.direction_degrees(),
            calculate_direction_angle(Vec2::new(3.0, -4.0))
        ));
    }

    #[test]
    fn reflect_off_wall_ignores_slope_length() {
        let mut m = Motion::default();
        m.set_velocity(5.0, 1.0);
        m.reflect(Vec2::new(0.0, 12.0));
        assert!(vec_approx_eq(m.velocity(), Vec2::new(-5.0, 1.0)));
    }

    #[test]
    fn lifetime_counts_down_then_expires() {
        let mut life = Lifetime::from_ttl(2);
        assert!(life.tick());
        assert_eq!(life, Lifetime::Ticks(1));
        assert!(life.tick());
        assert_eq!(life, Lifetime::Ticks(0));
        assert!(!life.tick());
    }

    #[test]
    fn negative_ttl_is_infinite() {
        let mut life = Lifetime::from_ttl(-1);
        assert_eq!(life, Lifetime::Infinite);
        for _ in 0..1000 {
            assert!(life.tick());
        }
        assert_eq!(life.as_ttl(), -1);
        assert_eq!(Lifetime::from_ttl(-7), Lifetime::Infinite);
    }
}
