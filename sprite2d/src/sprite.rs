//! The sprite entity: one transform, one motion state, one animation state and
//! an optional bound texture mask, driven once per tick by the game loop.

use glam::Affine2;

use crate::animation::AnimationState;
use crate::collision::{self, Collidable, CollisionOutcome};
use crate::config::SpriteConfig;
use crate::error::{Result, SpriteError};
use crate::geometry::Transform2D;
use crate::mask::{AlphaMask, MaskFrame};
use crate::math::{Rect, Vec2};
use crate::motion::{Lifetime, Motion};
use crate::render::{DrawParams, SourceRect};

#[derive(Clone, Debug)]
struct BoundTexture {
    mask: AlphaMask,
    frame_width: u32,
}

/// A moving, animated, collidable 2D sprite.
///
/// `tag` is free for the game to use, e.g. to record which player owns a
/// board marker. Sprites of different tag types can still be tested against
/// each other.
#[derive(Clone, Debug)]
pub struct Sprite<T = ()> {
    transform: Transform2D,
    motion: Motion,
    animation: AnimationState,
    lifetime: Lifetime,
    alive: bool,
    texture: Option<BoundTexture>,
    pub tag: T,
}

impl Sprite {
    /// Create an untagged sprite with default settings.
    pub fn new() -> Self {
        Self::with_tag(())
    }
}

impl<T> Sprite<T> {
    pub fn with_tag(tag: T) -> Self {
        Self::from_config(&SpriteConfig::default(), tag)
    }

    pub fn from_config(config: &SpriteConfig, tag: T) -> Self {
        let mut transform = Transform2D::identity();
        transform.scale = config.scale;
        transform.layer = config.layer;

        let mut animation = AnimationState::new(1, config.continuous_animation);
        animation.frame_interval_ms = config.frame_interval_ms;

        Self {
            transform,
            motion: Motion::new(config.max_speed),
            animation,
            lifetime: Lifetime::from_ttl(config.ttl),
            alive: true,
            texture: None,
            tag,
        }
    }

    // --- texture -------------------------------------------------------

    /// Bind a single-frame texture.
    pub fn bind_texture(&mut self, mask: AlphaMask) -> Result<()> {
        self.bind_texture_strip(mask, 1)
    }

    /// Bind a texture strip of `frame_count` equal-width frames.
    ///
    /// On error the previously bound texture is left untouched.
    pub fn bind_texture_strip(&mut self, mask: AlphaMask, frame_count: u32) -> Result<()> {
        if frame_count == 0 {
            return Err(SpriteError::ZeroFrameCount);
        }
        if mask.width() % frame_count != 0 {
            return Err(SpriteError::UnevenFrameStrip {
                width: mask.width(),
                frame_count,
            });
        }

        let frame_width = mask.width() / frame_count;
        log::debug!(
            "binding {}x{} texture as {} frame(s) of width {}",
            mask.width(),
            mask.height(),
            frame_count,
            frame_width
        );
        self.texture = Some(BoundTexture { mask, frame_width });
        self.animation.set_frame_count(frame_count);
        Ok(())
    }

    pub fn mask(&self) -> Option<&AlphaMask> {
        self.texture.as_ref().map(|t| &t.mask)
    }

    /// Unscaled width of one frame, 0 before a texture is bound.
    pub fn frame_width(&self) -> u32 {
        self.texture.as_ref().map_or(0, |t| t.frame_width)
    }

    /// Unscaled height of the texture, 0 before a texture is bound.
    pub fn frame_height(&self) -> u32 {
        self.texture.as_ref().map_or(0, |t| t.mask.height())
    }

    /// Scaled frame width, ignoring rotation.
    pub fn width(&self) -> f32 {
        self.frame_width() as f32 * self.transform.scale.x
    }

    /// Scaled frame height, ignoring rotation.
    pub fn height(&self) -> f32 {
        self.frame_height() as f32 * self.transform.scale.y
    }

    /// Center offset from the upper-left anchor, ignoring rotation.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width() / 2.0, self.height() / 2.0)
    }

    // --- placement -----------------------------------------------------

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.position = position;
    }

    pub fn scale(&self) -> Vec2 {
        self.transform.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.transform.scale = scale;
    }

    pub fn origin(&self) -> Vec2 {
        self.transform.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.transform.origin = origin;
    }

    pub fn layer(&self) -> f32 {
        self.transform.layer
    }

    pub fn set_layer(&mut self, layer: f32) {
        self.transform.layer = layer;
    }

    pub fn rotation_angle(&self) -> f32 {
        self.transform.rotation_degrees()
    }

    pub fn set_rotation_angle(&mut self, degrees: f32) {
        self.transform.set_rotation_degrees(degrees);
    }

    pub fn change_rotation_angle(&mut self, delta: f32) {
        self.transform.rotate_by(delta);
    }

    /// Screen-space rectangle enclosing the current frame.
    pub fn bounding_rect(&self) -> Rect {
        self.transform
            .bounding_rect(self.frame_width() as f32, self.frame_height() as f32)
    }

    // --- lifecycle -----------------------------------------------------

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Explicitly set liveness. The engine itself only ever kills sprites.
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    /// Remaining ticks to live, or -1 when the sprite never expires.
    pub fn ttl(&self) -> i32 {
        self.lifetime.as_ttl()
    }

    pub fn set_ttl(&mut self, ttl: i32) {
        self.lifetime = Lifetime::from_ttl(ttl);
    }

    // --- motion --------------------------------------------------------

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn velocity(&self) -> Vec2 {
        self.motion.velocity()
    }

    pub fn set_velocity(&mut self, vx: f32, vy: f32) {
        self.motion.set_velocity(vx, vy);
    }

    pub fn speed(&self) -> f32 {
        self.motion.speed()
    }

    pub fn max_speed(&self) -> f32 {
        self.motion.max_speed()
    }

    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.motion.set_max_speed(max_speed);
    }

    pub fn direction_angle(&self) -> f32 {
        self.motion.direction_degrees()
    }

    pub fn set_speed_and_direction(&mut self, speed: f32, degrees: f32) {
        self.motion.set_speed_and_direction(speed, degrees);
    }

    pub fn set_direction_angle(&mut self, degrees: f32) {
        self.motion.set_direction(degrees);
    }

    pub fn change_direction_angle(&mut self, delta: f32) {
        self.motion.change_direction(delta);
    }

    pub fn accelerate(&mut self, amount: f32) {
        self.motion.accelerate(amount);
    }

    pub fn accelerate_xy(&mut self, ax: f32, ay: f32) {
        self.motion.accelerate_xy(ax, ay);
    }

    /// Bounce off a surface running along `slope` (must be non-zero).
    pub fn reflect(&mut self, slope: Vec2) {
        self.motion.reflect(slope);
    }

    /// Count down the lifetime and apply one tick of velocity.
    ///
    /// Returns false without moving if the sprite is dead or its lifetime
    /// ran out on this call. A dead sprite's lifetime is left untouched.
    pub fn move_step(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        if !self.lifetime.tick() {
            log::debug!("sprite at {:?} expired", self.transform.position);
            self.alive = false;
            return false;
        }

        self.transform.position += self.motion.velocity();
        true
    }

    /// Move, then wrap to the opposite edge of a `bounds_x` x `bounds_y`
    /// screen once the sprite is fully off one side.
    pub fn move_and_wrap(&mut self, bounds_x: f32, bounds_y: f32) -> bool {
        if !self.move_step() {
            return false;
        }

        let rect = self.bounding_rect();
        let before = self.transform.position;
        let position = &mut self.transform.position;
        if rect.right() < 0.0 {
            position.x += bounds_x - rect.left();
        } else if rect.left() > bounds_x {
            position.x -= rect.right();
        }
        if rect.bottom() < 0.0 {
            position.y += bounds_y - rect.top();
        } else if rect.top() > bounds_y {
            position.y -= rect.bottom();
        }
        if *position != before {
            log::trace!("sprite wrapped from {:?} to {:?}", before, position);
        }
        true
    }

    /// Move, then die once the sprite is fully off any edge of a
    /// `bounds_x` x `bounds_y` screen.
    pub fn move_and_vanish(&mut self, bounds_x: f32, bounds_y: f32) -> bool {
        if !self.move_step() {
            return false;
        }

        let rect = self.bounding_rect();
        if rect.right() < 0.0 || rect.left() > bounds_x || rect.bottom() < 0.0 || rect.top() > bounds_y {
            log::debug!("sprite vanished off screen at {:?}", self.transform.position);
            self.alive = false;
        }
        true
    }

    /// One simulation tick: move, then advance the animation if still alive.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let moved = self.move_step();
        if self.alive {
            self.animation.animate(now_ms);
        }
        moved
    }

    // --- animation -----------------------------------------------------

    pub fn animation(&self) -> &AnimationState {
        &self.animation
    }

    pub fn current_frame(&self) -> u32 {
        self.animation.current_frame()
    }

    /// Show `frame`; frames past the end of the strip reset to 0.
    pub fn set_current_frame(&mut self, frame: u32) {
        self.animation.set_current_frame(frame);
    }

    pub fn frame_count(&self) -> u32 {
        self.animation.frame_count()
    }

    pub fn set_frame_interval(&mut self, interval_ms: u64) {
        self.animation.frame_interval_ms = interval_ms;
    }

    pub fn set_continuous_animation(&mut self, continuous: bool) {
        self.animation.set_continuous(continuous);
    }

    pub fn start_animation_short(&mut self, start: u32, stop: u32, final_frame: u32) {
        self.animation.start_short(start, stop, final_frame);
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Advance the animation against the caller's clock.
    pub fn animate(&mut self, now_ms: u64) -> bool {
        self.animation.animate(now_ms)
    }

    // --- collision -----------------------------------------------------

    pub fn collision_with<O: Collidable + ?Sized>(&self, other: &O) -> CollisionOutcome {
        collision::check(self, other)
    }

    pub fn is_collided<O: Collidable + ?Sized>(&self, other: &O) -> bool {
        collision::is_collided(self, other)
    }

    // --- rendering -----------------------------------------------------

    /// Source rectangle of the current frame within the bound strip.
    pub fn source_rect(&self) -> Option<SourceRect> {
        self.texture.as_ref().map(|t| {
            SourceRect::for_frame(self.current_frame(), t.frame_width, t.mask.height())
        })
    }

    /// Draw data for the renderer, or `None` if the sprite is dead or has no
    /// texture.
    pub fn draw_params(&self) -> Option<DrawParams> {
        self.draw_params_with_camera(Vec2::ZERO)
    }

    /// Like [`Sprite::draw_params`], with the view scrolled so that
    /// `camera_upper_left` is the screen's upper-left corner.
    pub fn draw_params_with_camera(&self, camera_upper_left: Vec2) -> Option<DrawParams> {
        if !self.alive {
            return None;
        }
        let source = self.source_rect()?;
        let t = &self.transform;
        Some(DrawParams {
            position: t.position - camera_upper_left + t.origin,
            source,
            origin: t.origin.div_elem(t.scale),
            rotation: -t.rotation_degrees().to_radians(),
            scale: t.scale,
            layer: t.layer,
        })
    }
}

impl<T: Default> Default for Sprite<T> {
    fn default() -> Self {
        Self::with_tag(T::default())
    }
}

impl<T> Collidable for Sprite<T> {
    fn is_alive(&self) -> bool {
        self.alive
    }

    fn bounding_rect(&self) -> Rect {
        Self::bounding_rect(self)
    }

    fn local_to_screen(&self) -> Affine2 {
        self.transform.to_affine()
    }

    fn mask_frame(&self) -> Option<MaskFrame<'_>> {
        let current = self.current_frame();
        self.texture
            .as_ref()
            .map(|t| t.mask.frame(t.frame_width, current))
    }
}
