//! # Sprite Engine
//!
//! A small 2D sprite engine for top-down games.
//!
//! ## Features
//!
//! - **Frame-chain animation**: named animations that loop or hand over to a successor
//! - **Layered compositing**: underlay, depth-sorted ground and raised passes, overlay
//! - **Scrolling camera**: follows a focus renderable across a large background
//! - **Pluggable output**: anything implementing [`render::DrawSurface`]
//!
//! ## Quick Start
//!
//! ```rust
//! use sprite_engine::prelude::*;
//!
//! let mut store = RenderableStore::with_key();
//! let mut scene = SceneCompositor::new(640, 480);
//!
//! let player = store.insert(
//!     Renderable::from_sprite(Sprite::solid_square(26, Color::rgb(0, 255, 0), None))
//!         .at(IVec2::new(320, 200)),
//! );
//! scene.set_player(player);
//! scene.set_focus(player);
//!
//! let mut surface = RecordingSurface::new();
//! let stats = scene.update(1.0 / 60.0, &mut store, &mut surface)?;
//! assert_eq!(stats.blits, 1);
//! # Ok::<(), SceneError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::cast_possible_wrap)]

pub mod animation;
pub mod config;
pub mod foundation;
pub mod render;
pub mod scene;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        animation::{Animation, AnimationError, AnimationSet, AnimationState, Frame, IDLE},
        config::{Config, ConfigError, ConfigFormat},
        foundation::{
            collections::{OrderedSlotMap, OwnerHandle},
            math::{IVec2, Rect, Vec2},
        },
        render::{CanvasSurface, Color, DrawSurface, RecordingSurface, Sprite},
        scene::{FrameStats, Renderable, RenderableId, RenderableStore, SceneCompositor, SceneError},
    };
}
