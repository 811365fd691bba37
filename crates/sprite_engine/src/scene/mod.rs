//! Scene composition
//!
//! Bridges game objects (which own positions and hit points) and the draw
//! surface (which only knows sprites and pixels).
//!
//! ## Architecture
//!
//! ```text
//! Game objects (simulation)
//!      ↓  RenderableId
//! RenderableStore (animation + draw position + layer)
//!      ↓
//! SceneCompositor (camera, draw passes)
//!      ↓
//! DrawSurface
//! ```

mod compositor;
mod draw_queue;
mod renderable;

pub use compositor::{FrameStats, SceneCompositor, SceneError};
pub use draw_queue::{DrawEntry, DrawPass, DrawQueue};
pub use renderable::{Renderable, RenderableId, RenderableStore};
