//! Game configuration

use serde::{Deserialize, Serialize};
use sprite_engine::config::{Config, ConfigError};
use sprite_engine::render::Color;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Visible area
    pub viewport: ViewportConfig,

    /// Colour behind the background
    pub clear_color: Color,

    /// Projectile tuning
    pub projectiles: ProjectileConfig,
}

/// Viewport configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,
}

/// How accelerating projectiles cap their speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClampPolicy {
    /// Cap each axis from above only; negative components grow unbounded
    #[default]
    PositiveOnly,

    /// Cap each axis to `[-ceiling, ceiling]`
    Symmetric,
}

/// Projectile configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Fuel a projectile is fired with, in pixels travelled along its
    /// fastest axis
    pub default_budget: f32,

    /// Growth factor `k` in `velocity *= 1 + k * dt`
    pub acceleration_rate: f32,

    /// Per-axis speed cap for accelerating projectiles
    pub acceleration_ceiling: f32,

    /// Which side of each axis the cap applies to
    pub clamp: ClampPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            clear_color: Color::BLACK,
            projectiles: ProjectileConfig::default(),
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 640, height: 480 }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            default_budget: 500.0,
            acceleration_rate: 10.0,
            acceleration_ceiling: 10.0,
            clamp: ClampPolicy::PositiveOnly,
        }
    }
}

impl Config for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid {
                field: "viewport",
                reason: format!("{}x{} has no area", self.viewport.width, self.viewport.height),
            });
        }
        if !(self.projectiles.default_budget > 0.0) {
            return Err(ConfigError::Invalid {
                field: "projectiles.default_budget",
                reason: format!("must be positive, got {}", self.projectiles.default_budget),
            });
        }
        if !(self.projectiles.acceleration_rate >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "projectiles.acceleration_rate",
                reason: format!("must not be negative, got {}", self.projectiles.acceleration_rate),
            });
        }
        if !(self.projectiles.acceleration_ceiling > 0.0) {
            return Err(ConfigError::Invalid {
                field: "projectiles.acceleration_ceiling",
                reason: format!("must be positive, got {}", self.projectiles.acceleration_ceiling),
            });
        }
        Ok(())
    }
}
