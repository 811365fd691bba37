//! Flying Squares demo
//!
//! Runs the player-versus-enemy scene for a few seconds without a window,
//! firing a laser at the enemy every half second, and writes the last frame
//! to a PNG.
//!
//! Usage: `flying_squares [config.toml|config.ron] [frame.png]`

use flying_squares::prelude::*;
use sprite_engine::config::Config;
use sprite_engine::foundation::logging;
use sprite_engine::foundation::math::{Rect, Vec2};
use sprite_engine::render::CanvasSurface;

const TICK: f32 = 1.0 / 60.0;
const DURATION: f32 = 5.0;
const FIRE_INTERVAL: f32 = 0.5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "flying_squares.toml".to_string());
    let frame_path = args.next().unwrap_or_else(|| "frame.png".to_string());

    let config = GameConfig::load_or_default(&config_path)?;
    log::info!("Starting Flying Squares demo ({}x{})", config.viewport.width, config.viewport.height);

    let viewport = config.viewport;
    let mut surface = CanvasSurface::new(viewport.width, viewport.height);
    let mut engine = GameEngine::new(config);
    engine.set_background(assets::background(viewport.width, viewport.height));

    let ship = engine.insert_sprite(assets::player_ship());
    engine.set_player(GameObject::new(ship, Team::Ally, Vec2::new(320.0, 200.0), 10).with_max_speed(100.0))?;

    let target = engine.insert_sprite(assets::enemy_ship());
    let enemy = engine.add_enemy(
        GameObject::new(target, Team::Enemy, Vec2::new(320.0, 50.0), 10)
            .with_max_speed(100.0)
            .with_hitbox(Rect::with_size(13, 13))
            .with_bounty(100),
    )?;

    let mut clock = 0.0;
    let mut next_shot = 0.0;
    while clock < DURATION {
        let mut input = TickInput::default();
        if next_shot <= clock {
            input = input.firing(FireEvent::ally(
                ProjectileKind::Linear,
                Vec2::new(331.0, 187.0),
                Vec2::new(0.0, -400.0),
            ));
            next_shot += FIRE_INTERVAL;
        }

        engine.apply_input(&input)?;
        let report = engine.update(TICK, &mut surface)?;
        if report.hits > 0 {
            let hp = engine.entity(enemy).map_or(0, |e| e.hp);
            log::info!("Hit at {:.2}s, enemy hp {}", clock, hp);
        }
        if report.defeated > 0 {
            log::info!("Enemy defeated at {:.2}s", clock);
        }
        clock += TICK;
    }

    log::info!(
        "Demo finished after {} ticks: {} points, {} projectiles in flight",
        engine.ticks(),
        engine.points(),
        engine.projectiles().count()
    );

    surface.canvas().save(&frame_path)?;
    log::info!("Last frame written to {}", frame_path);
    Ok(())
}
