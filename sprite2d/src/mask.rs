//! Per-pixel opacity grid used by pixel-exact collision.
//!
//! An [`AlphaMask`] is built once from decoded texture data and never changes
//! afterwards. Clones share the same storage, so a mask can be handed to
//! several sprites (or kept by the asset loader) without copying.

use std::sync::Arc;

use image::{DynamicImage, RgbaImage};

use crate::error::{Result, SpriteError};

/// Immutable, reference-counted alpha values for a full texture strip, stored
/// row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    alpha: Arc<[u8]>,
}

impl AlphaMask {
    /// Build a mask from one opacity value per pixel (0 = transparent).
    pub fn from_alpha(width: u32, height: u32, alpha: impl Into<Vec<u8>>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SpriteError::EmptyTexture);
        }
        let alpha = alpha.into();
        let expected = width as usize * height as usize;
        if alpha.len() != expected {
            return Err(SpriteError::MaskSizeMismatch {
                expected,
                actual: alpha.len(),
            });
        }
        Ok(Self {
            width,
            height,
            alpha: alpha.into(),
        })
    }

    /// Build a mask from tightly packed RGBA8 pixels, keeping only the alpha
    /// channel.
    pub fn from_rgba8(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SpriteError::MaskSizeMismatch {
                expected,
                actual: rgba.len(),
            });
        }
        let alpha: Vec<u8> = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::from_alpha(width, height, alpha)
    }

    pub fn from_image(image: &RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let alpha: Vec<u8> = image.pixels().map(|px| px.0[3]).collect();
        Self::from_alpha(width, height, alpha)
    }

    pub fn from_dynamic_image(image: &DynamicImage) -> Result<Self> {
        Self::from_image(&image.to_rgba8())
    }

    /// A mask where every pixel is opaque.
    pub fn opaque(width: u32, height: u32) -> Result<Self> {
        Self::from_alpha(width, height, vec![u8::MAX; width as usize * height as usize])
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha at `(x, y)`, or 0 outside the mask.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    /// View onto one equal-width frame of the strip.
    pub fn frame(&self, frame_width: u32, frame: u32) -> MaskFrame<'_> {
        MaskFrame {
            mask: self,
            x_offset: frame_width * frame,
            width: frame_width,
        }
    }
}

/// One frame of an [`AlphaMask`] strip, addressed in frame-local pixels.
#[derive(Clone, Copy, Debug)]
pub struct MaskFrame<'a> {
    mask: &'a AlphaMask,
    x_offset: u32,
    width: u32,
}

impl MaskFrame<'_> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.mask.height
    }

    /// Frame-local lookup; anything outside the frame is transparent.
    pub fn is_opaque(&self, x: u32, y: u32) -> bool {
        x < self.width && self.mask.alpha_at(self.x_offset + x, y) > 0
    }
}
