//! Procedural textures so the demo needs no asset files.

use image::{Rgba, RgbaImage};

/// Filled circle of `radius` on a transparent square.
pub fn disc(radius: u32, color: [u8; 3]) -> RgbaImage {
    let size = radius * 2;
    let r = radius as f32;
    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - r;
        let dy = y as f32 + 0.5 - r;
        if dx * dx + dy * dy <= r * r {
            Rgba([color[0], color[1], color[2], 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Strip of `frames` square frames, each showing a bar at a different
/// height, so the animation is visible in collision shape too.
pub fn blinking_strip(side: u32, frames: u32) -> RgbaImage {
    let band = (side / frames).max(1);
    RgbaImage::from_fn(side * frames, side, |x, y| {
        let frame = x / side;
        if y / band == frame {
            Rgba([255, 220, 40, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Solid rectangle.
pub fn bar(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([200, 200, 255, 255]))
}
