//! Per-tick input
//!
//! Key polling and key-to-vector mapping happen outside the game; by the time
//! input reaches the engine it is already a velocity and a list of shots.

use sprite_engine::foundation::math::Vec2;

use crate::entity::Team;
use crate::projectile::ProjectileKind;

/// Request to spawn a projectile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireEvent {
    /// Motion policy
    pub kind: ProjectileKind,

    /// Spawn position
    pub position: Vec2,

    /// Initial velocity
    pub velocity: Vec2,

    /// Damage on hit
    pub damage: i32,

    /// Side firing the shot
    pub team: Team,
}

impl FireEvent {
    /// Ally shot of `kind` worth one point of damage
    pub fn ally(kind: ProjectileKind, position: Vec2, velocity: Vec2) -> Self {
        Self {
            kind,
            position,
            velocity,
            damage: 1,
            team: Team::Ally,
        }
    }

    /// Builder: set damage
    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }
}

/// Everything the player did since the last tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Velocity to give the player
    pub player_velocity: Vec2,

    /// Shots to spawn before motion is applied
    pub fire: Vec<FireEvent>,
}

impl TickInput {
    /// Input that only moves the player
    pub fn moving(player_velocity: Vec2) -> Self {
        Self {
            player_velocity,
            fire: Vec::new(),
        }
    }

    /// Builder: queue a shot
    #[must_use]
    pub fn firing(mut self, event: FireEvent) -> Self {
        self.fire.push(event);
        self
    }
}
