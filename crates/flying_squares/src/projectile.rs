//! Projectiles
//!
//! A projectile burns fuel proportional to the distance it covers along its
//! fastest axis and is removed once the fuel runs out, whether or not it hit
//! anything.

use serde::{Deserialize, Serialize};
use sprite_engine::foundation::math::{Rect, Vec2};
use sprite_engine::render::{Color, Sprite};
use sprite_engine::scene::{RenderableId, RenderableStore};

use crate::config::{ClampPolicy, ProjectileConfig};
use crate::entity::{sync_renderable, Team};

/// Motion policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Constant velocity
    Linear,

    /// Velocity grows every tick up to a per-axis cap
    Accelerating,
}

impl ProjectileKind {
    /// Default 3x10 image for this kind
    pub fn sprite(self) -> Sprite {
        match self {
            Self::Linear => Sprite::solid_rect(3, 10, Color::rgb(0, 0, 127), Some(Color::rgb(0, 0, 255))),
            Self::Accelerating => Sprite::solid_rect(3, 10, Color::rgb(127, 64, 0), Some(Color::rgb(255, 127, 0))),
        }
    }

    /// Default hitbox, matching [`Self::sprite`]
    pub const fn hitbox(self) -> Rect {
        Rect::with_size(3, 10)
    }
}

/// A shot in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    /// World position
    pub position: Vec2,

    /// Pixels per second
    pub velocity: Vec2,

    /// Hit points removed from whatever this hits
    pub damage: i32,

    /// Remaining fuel
    pub budget: f32,

    /// Collision box relative to the draw position
    pub hitbox: Rect,

    team: Team,
    kind: ProjectileKind,
    renderable: RenderableId,
}

impl Projectile {
    /// Create a projectile
    pub fn new(
        renderable: RenderableId,
        kind: ProjectileKind,
        team: Team,
        position: Vec2,
        velocity: Vec2,
        damage: i32,
        budget: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            damage,
            budget,
            hitbox: kind.hitbox(),
            team,
            kind,
            renderable,
        }
    }

    /// Builder: collide with this box instead of the kind's default
    #[must_use]
    pub fn with_hitbox(mut self, hitbox: Rect) -> Self {
        self.hitbox = hitbox;
        self
    }

    /// Motion policy
    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    /// Side that fired this projectile
    pub fn team(&self) -> Team {
        self.team
    }

    /// Drawable facet
    pub fn renderable(&self) -> RenderableId {
        self.renderable
    }

    /// Whether the fuel has run out
    pub fn is_spent(&self) -> bool {
        self.budget <= 0.0
    }

    /// Step motion and burn fuel. Returns `true` once the projectile is spent.
    pub fn update(&mut self, dt: f32, config: &ProjectileConfig, store: &mut RenderableStore) -> bool {
        if self.kind == ProjectileKind::Accelerating {
            self.accelerate(dt, config);
        }

        self.position += self.velocity * dt;
        self.budget -= self.velocity.x.abs().max(self.velocity.y.abs()) * dt;
        sync_renderable(self.renderable, self.position, store);

        self.is_spent()
    }

    fn accelerate(&mut self, dt: f32, config: &ProjectileConfig) {
        let ceiling = config.acceleration_ceiling;
        self.velocity *= 1.0 + config.acceleration_rate * dt;
        self.velocity.apply(|v| {
            *v = match config.clamp {
                ClampPolicy::PositiveOnly => v.min(ceiling),
                ClampPolicy::Symmetric => v.clamp(-ceiling, ceiling),
            };
        });
    }
}
