//! Draw surface contract
//!
//! The engine only ever clears, blits and presents. Window and swapchain
//! ownership stay with whoever implements [`DrawSurface`].

use image::RgbaImage;

use crate::foundation::math::IVec2;
use crate::render::sprite::{Color, Sprite};

/// Minimal 2D draw target
pub trait DrawSurface {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Draw `sprite` with its top-left corner at `position`
    fn blit(&mut self, sprite: &Sprite, position: IVec2);

    /// Finish the frame
    fn present(&mut self);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// `clear(color)`
    Clear(Color),
    /// `blit(sprite, position)`
    Blit {
        /// Sprite drawn
        sprite: Sprite,
        /// Screen position after camera offset
        position: IVec2,
    },
    /// `present()`
    Present,
}

/// Surface that records every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command since creation or the last [`Self::reset`]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Only the blits, in draw order
    pub fn blits(&self) -> impl Iterator<Item = (&Sprite, IVec2)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Blit { sprite, position } => Some((sprite, *position)),
            _ => None,
        })
    }

    /// Number of frames presented
    pub fn frames_presented(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Present)).count()
    }

    /// Forget recorded commands
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn blit(&mut self, sprite: &Sprite, position: IVec2) {
        self.commands.push(DrawCommand::Blit { sprite: sprite.clone(), position });
    }

    fn present(&mut self) {
        self.commands.push(DrawCommand::Present);
    }
}

/// Software surface that composites into an in-memory RGBA canvas
pub struct CanvasSurface {
    canvas: RgbaImage,
    frames_presented: u64,
}

impl CanvasSurface {
    /// Create a canvas of the given pixel size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: RgbaImage::new(width, height),
            frames_presented: 0,
        }
    }

    /// Current canvas contents
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Number of completed frames
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, color: Color) {
        let pixel = color.to_rgba();
        for p in self.canvas.pixels_mut() {
            *p = pixel;
        }
    }

    fn blit(&mut self, sprite: &Sprite, position: IVec2) {
        image::imageops::overlay(
            &mut self.canvas,
            sprite.image(),
            i64::from(position.x),
            i64::from(position.y),
        );
    }

    fn present(&mut self) {
        self.frames_presented += 1;
        log::trace!("Canvas frame {} presented", self.frames_presented);
    }
}
