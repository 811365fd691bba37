//! Ships and other hit-point carrying objects

use serde::{Deserialize, Serialize};
use sprite_engine::foundation::math::{to_pixel, Rect, Vec2};
use sprite_engine::scene::{RenderableId, RenderableStore};

/// Side an object fights for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// The player and anything fighting alongside them
    Ally,

    /// Targets of ally fire
    Enemy,
}

/// A ship on the field
#[derive(Debug, Clone)]
pub struct GameObject {
    /// World position, top-left of the sprite
    pub position: Vec2,

    /// Pixels per second
    velocity: Vec2,

    /// Hit points; may dip below zero before the object is swept
    pub hp: i32,

    /// Side this object fights for, fixed at creation
    team: Team,

    /// Intended top speed. Not enforced by motion.
    pub max_speed: f32,

    /// Collision box relative to the draw position; `None` is never hit
    pub hitbox: Option<Rect>,

    /// Score awarded when this object is defeated
    pub bounty: u32,

    /// Drawable facet
    renderable: RenderableId,
}

impl GameObject {
    /// Create a stationary object with no hitbox
    pub fn new(renderable: RenderableId, team: Team, position: Vec2, hp: i32) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            hp,
            team,
            max_speed: 0.0,
            hitbox: None,
            bounty: 0,
            renderable,
        }
    }

    /// Builder: collide with this box
    #[must_use]
    pub fn with_hitbox(mut self, hitbox: Rect) -> Self {
        self.hitbox = Some(hitbox);
        self
    }

    /// Builder: intended top speed
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Builder: score for defeating this object
    #[must_use]
    pub fn with_bounty(mut self, bounty: u32) -> Self {
        self.bounty = bounty;
        self
    }

    /// Side this object fights for
    pub fn team(&self) -> Team {
        self.team
    }

    /// Current velocity
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Replace the velocity
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Drawable facet
    pub fn renderable(&self) -> RenderableId {
        self.renderable
    }

    /// Whether hit points have run out
    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }

    /// Step motion by `dt` seconds and move the renderable to match
    pub fn update(&mut self, dt: f32, store: &mut RenderableStore) {
        self.position += self.velocity * dt;
        sync_renderable(self.renderable, self.position, store);
    }
}

/// Place a renderable at the pixel a world position truncates to
pub(crate) fn sync_renderable(id: RenderableId, position: Vec2, store: &mut RenderableStore) {
    if let Some(renderable) = store.get_mut(id) {
        renderable.set_position(to_pixel(position));
    }
}
