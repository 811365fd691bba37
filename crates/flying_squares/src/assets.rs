//! Game asset definitions
//!
//! Flat-colour placeholders for the demo scene. Real art would be decoded
//! elsewhere and handed in as [`Sprite`]s.

use sprite_engine::render::{Color, Sprite};

/// Light blue backdrop
pub const SKY: Color = Color::rgb(127, 127, 255);

/// Player ship: 26x26 green square with a dark green outline
pub fn player_ship() -> Sprite {
    Sprite::solid_square(26, Color::rgb(0, 255, 0), Some(Color::rgb(0, 127, 0)))
}

/// Enemy ship: 13x13 red square with a dark red outline
pub fn enemy_ship() -> Sprite {
    Sprite::solid_square(13, Color::rgb(255, 0, 0), Some(Color::rgb(127, 0, 0)))
}

/// Flat background of the given size
pub fn background(width: u32, height: u32) -> Sprite {
    Sprite::solid_rect(width, height, SKY, None)
}
