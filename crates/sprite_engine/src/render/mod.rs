//! Rendering primitives
//!
//! Sprites, colours and the draw surface the scene compositor writes to.

pub mod sprite;
pub mod surface;

pub use sprite::{Color, Sprite};
pub use surface::{CanvasSurface, DrawCommand, DrawSurface, RecordingSurface};
