//! Sprite images and colours
//!
//! Sprites wrap pre-decoded RGBA images. Decoding from disk happens outside
//! the engine; everything here works on pixels already in memory.

use std::sync::Arc;

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::foundation::math::IVec2;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    #[serde(default = "opaque")]
    pub a: u8,
}

const fn opaque() -> u8 {
    u8::MAX
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque colour from red, green and blue
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: u8::MAX }
    }

    /// Convert to an `image` pixel
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Shared, immutable sprite image
///
/// Cloning is cheap. Two sprites compare equal only when they share the same
/// underlying image, which is what draw-order tests care about.
#[derive(Debug, Clone)]
pub struct Sprite {
    image: Arc<RgbaImage>,
}

impl Sprite {
    /// Wrap a decoded image
    pub fn new(image: RgbaImage) -> Self {
        Self { image: Arc::new(image) }
    }

    /// Flat-coloured rectangle, optionally with a one pixel outline
    pub fn solid_rect(width: u32, height: u32, color: Color, outline: Option<Color>) -> Self {
        let Some(outline) = outline else {
            return Self::new(RgbaImage::from_pixel(width, height, color.to_rgba()));
        };

        let mut image = RgbaImage::from_pixel(width, height, outline.to_rgba());
        for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                image.put_pixel(x, y, color.to_rgba());
            }
        }
        Self::new(image)
    }

    /// Flat-coloured square, optionally with a one pixel outline
    pub fn solid_square(size: u32, color: Color, outline: Option<Color>) -> Self {
        Self::solid_rect(size, size, color, outline)
    }

    /// Pixel width
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Pixel height
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel size as a signed vector, for layout arithmetic
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width() as i32, self.height() as i32)
    }

    /// Underlying pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

impl PartialEq for Sprite {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl Eq for Sprite {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_square_with_outline() {
        let fill = Color::rgb(0, 255, 0);
        let edge = Color::rgb(0, 127, 0);
        let sprite = Sprite::solid_square(26, fill, Some(edge));

        assert_eq!(sprite.size(), IVec2::new(26, 26));
        assert_eq!(*sprite.image().get_pixel(0, 0), edge.to_rgba());
        assert_eq!(*sprite.image().get_pixel(25, 13), edge.to_rgba());
        assert_eq!(*sprite.image().get_pixel(1, 1), fill.to_rgba());
        assert_eq!(*sprite.image().get_pixel(24, 24), fill.to_rgba());
    }

    #[test]
    fn test_solid_rect_without_outline() {
        let sprite = Sprite::solid_rect(3, 10, Color::rgb(0, 0, 127), None);
        assert_eq!((sprite.width(), sprite.height()), (3, 10));
        assert!(sprite.image().pixels().all(|p| *p == Color::rgb(0, 0, 127).to_rgba()));
    }

    #[test]
    fn test_equality_is_identity() {
        let a = Sprite::solid_square(4, Color::BLACK, None);
        let b = Sprite::solid_square(4, Color::BLACK, None);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
