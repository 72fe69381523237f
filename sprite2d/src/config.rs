use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::Vec2;
use crate::motion::DEFAULT_MAX_SPEED;

/// Starting values for newly created sprites.
///
/// Every field is optional when deserializing; missing fields take the
/// defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub max_speed: f32,
    pub frame_interval_ms: u64,
    pub continuous_animation: bool,
    /// Ticks to live; negative means forever.
    pub ttl: i32,
    pub layer: f32,
    pub scale: Vec2,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            max_speed: DEFAULT_MAX_SPEED,
            frame_interval_ms: 0,
            continuous_animation: true,
            ttl: -1,
            layer: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl SpriteConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Override the minimum delay between animation frames.
    #[must_use]
    pub fn with_frame_interval(mut self, interval_ms: u64) -> Self {
        self.frame_interval_ms = interval_ms;
        self
    }

    #[must_use]
    pub fn with_continuous_animation(mut self, continuous: bool) -> Self {
        self.continuous_animation = continuous;
        self
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: i32) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: f32) -> Self {
        self.layer = layer;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }
}
