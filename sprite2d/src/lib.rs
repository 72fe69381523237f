//! Sprite2D - sprite entities for 2D games.
//!
//! Each [`Sprite`] carries an affine placement, a speed-limited velocity, a
//! frame-strip animation and a per-pixel alpha mask used for pixel-exact
//! collision. The game loop drives sprites once per tick; rendering, input
//! and image decoding stay with the game.

pub mod animation;
pub mod collision;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mask;
pub mod math;
pub mod motion;
pub mod render;
pub mod sprite;

pub use crate::animation::{AnimationMode, AnimationState};
pub use crate::collision::{is_collided, Collidable, CollisionOutcome};
pub use crate::config::SpriteConfig;
pub use crate::error::{Result, SpriteError};
pub use crate::geometry::Transform2D;
pub use crate::mask::AlphaMask;
pub use crate::math::{Rect, Vec2};
pub use crate::motion::{Lifetime, Motion};
pub use crate::render::{DrawParams, SourceRect};
pub use crate::sprite::Sprite;
