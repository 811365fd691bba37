//! # Flying Squares
//!
//! Top-down projectile combat on top of `sprite_engine`.
//!
//! The caller owns a [`GameEngine`], registers a player and some enemies,
//! and then once per frame feeds it a [`TickInput`] and a draw surface:
//!
//! ```rust
//! use flying_squares::prelude::*;
//! use sprite_engine::foundation::math::{Rect, Vec2};
//! use sprite_engine::render::RecordingSurface;
//!
//! let mut engine = GameEngine::new(GameConfig::default());
//! let ship = engine.insert_sprite(assets::player_ship());
//! engine.set_player(GameObject::new(ship, Team::Ally, Vec2::new(320.0, 200.0), 10))?;
//!
//! let target = engine.insert_sprite(assets::enemy_ship());
//! engine.add_enemy(
//!     GameObject::new(target, Team::Enemy, Vec2::new(320.0, 50.0), 10).with_hitbox(Rect::with_size(13, 13)),
//! )?;
//!
//! let mut surface = RecordingSurface::new();
//! engine.apply_input(&TickInput::moving(Vec2::new(100.0, 0.0)))?;
//! engine.update(1.0 / 60.0, &mut surface)?;
//! # Ok::<(), EngineError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod assets;
pub mod config;
pub mod engine;
pub mod entity;
pub mod input;
pub mod projectile;

#[cfg(test)]
mod tests;

pub use config::{ClampPolicy, GameConfig, ProjectileConfig, ViewportConfig};
pub use engine::{EngineError, EntityId, GameEngine, ProjectileId, TickReport};
pub use entity::{GameObject, Team};
pub use input::{FireEvent, TickInput};
pub use projectile::{Projectile, ProjectileKind};

/// Common imports for game code
pub mod prelude {
    pub use crate::{
        assets, ClampPolicy, EngineError, EntityId, FireEvent, GameConfig, GameEngine, GameObject, Projectile,
        ProjectileId, ProjectileKind, Team, TickInput, TickReport,
    };
}
