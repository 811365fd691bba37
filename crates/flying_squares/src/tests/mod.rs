//! Whole-tick scenarios driven through [`GameEngine`]

use approx::assert_relative_eq;
use sprite_engine::foundation::logging;
use sprite_engine::foundation::math::{Rect, Vec2};
use sprite_engine::render::{CanvasSurface, Color, RecordingSurface, Sprite};

use crate::assets;
use crate::config::{ClampPolicy, GameConfig};
use crate::engine::{EntityId, GameEngine};
use crate::entity::{GameObject, Team};
use crate::input::{FireEvent, TickInput};
use crate::projectile::{Projectile, ProjectileKind};

const DT: f32 = 1.0 / 60.0;

fn engine() -> (GameEngine, EntityId) {
    logging::init_for_tests();
    let mut engine = GameEngine::new(GameConfig::default());
    let ship = engine.insert_sprite(assets::player_ship());
    let player = engine
        .set_player(GameObject::new(ship, Team::Ally, Vec2::new(320.0, 200.0), 10).with_max_speed(100.0))
        .unwrap();
    (engine, player)
}

fn enemy(engine: &mut GameEngine, sprite: Sprite, position: Vec2, hp: i32) -> EntityId {
    let size = sprite.size();
    let renderable = engine.insert_sprite(sprite);
    engine
        .add_enemy(GameObject::new(renderable, Team::Enemy, position, hp).with_hitbox(Rect::with_size(size.x, size.y)))
        .unwrap()
}

#[test]
fn laser_hits_enemy_once() {
    let (mut engine, player) = engine();
    let target = enemy(&mut engine, assets::enemy_ship(), Vec2::new(320.0, 50.0), 10);
    let shot = engine.fire(FireEvent::ally(ProjectileKind::Linear, Vec2::new(320.0, 187.0), Vec2::new(0.0, -400.0)));

    let mut surface = RecordingSurface::new();
    let mut hits = 0;
    for _ in 0..60 {
        hits += engine.update(DT, &mut surface).unwrap().hits;
        if engine.projectile(shot).is_none() {
            break;
        }
    }

    assert_eq!(hits, 1);
    assert!(engine.projectile(shot).is_none());
    assert_eq!(engine.entity(target).unwrap().hp, 9);
    assert_eq!(engine.entity(player).unwrap().hp, 10);
}

#[test]
fn exact_overlap_damages_first_enemy_only() {
    let (mut engine, _) = engine();
    let first = enemy(&mut engine, assets::enemy_ship(), Vec2::new(100.0, 100.0), 10);
    let second = enemy(&mut engine, assets::enemy_ship(), Vec2::new(100.0, 100.0), 10);
    let shot = engine.fire(
        FireEvent::ally(ProjectileKind::Linear, Vec2::new(105.0, 100.0), Vec2::zeros()).with_damage(3),
    );

    let mut surface = RecordingSurface::new();
    let report = engine.update(DT, &mut surface).unwrap();

    assert_eq!(report.hits, 1);
    assert!(engine.projectile(shot).is_none());
    assert_eq!(engine.entity(first).unwrap().hp, 7);
    assert_eq!(engine.entity(second).unwrap().hp, 10);
}

#[test]
fn defeated_enemy_drawn_then_swept() {
    let (mut engine, _) = engine();
    let sprite = assets::enemy_ship();
    let target = enemy(&mut engine, sprite.clone(), Vec2::new(100.0, 100.0), 1);
    engine.entity_mut(target).unwrap().bounty = 50;
    engine.fire(FireEvent::ally(ProjectileKind::Linear, Vec2::new(105.0, 102.0), Vec2::zeros()));

    let mut surface = RecordingSurface::new();
    let report = engine.update(DT, &mut surface).unwrap();

    assert!(surface.blits().any(|(s, _)| *s == sprite), "drawn on the tick it dies");
    assert_eq!(report.defeated, 1);
    assert!(engine.entity(target).is_none());
    assert_eq!(engine.points(), 50);

    surface.reset();
    engine.update(DT, &mut surface).unwrap();
    assert!(!surface.blits().any(|(s, _)| *s == sprite), "absent on the next tick");
    assert_eq!(engine.points(), 50);
}

#[test]
fn several_removals_in_one_tick_count_once() {
    let (mut engine, _) = engine();
    let weak = enemy(&mut engine, assets::enemy_ship(), Vec2::new(100.0, 100.0), 1);
    engine.entity_mut(weak).unwrap().bounty = 50;
    let sturdy = enemy(&mut engine, assets::enemy_ship(), Vec2::new(300.0, 100.0), 10);

    let killing = engine.fire(FireEvent::ally(ProjectileKind::Linear, Vec2::new(105.0, 102.0), Vec2::zeros()));
    let follow_up = engine.fire(FireEvent::ally(ProjectileKind::Linear, Vec2::new(106.0, 101.0), Vec2::zeros()));
    let other = engine.fire(FireEvent::ally(ProjectileKind::Linear, Vec2::new(305.0, 102.0), Vec2::zeros()));
    let renderable = engine.insert_sprite(ProjectileKind::Linear.sprite());
    let fizzle = engine
        .add_projectile(Projectile::new(
            renderable,
            ProjectileKind::Linear,
            Team::Ally,
            Vec2::new(500.0, 400.0),
            Vec2::new(100.0, 0.0),
            1,
            1.0,
        ))
        .unwrap();

    let mut surface = RecordingSurface::new();
    let report = engine.update(DT, &mut surface).unwrap();

    assert_eq!((report.hits, report.defeated, report.expired), (2, 1, 1));
    assert!(engine.entity(weak).is_none());
    assert_eq!(engine.entity(sturdy).unwrap().hp, 9);
    assert!(engine.projectile(killing).is_none());
    assert!(engine.projectile(other).is_none());
    assert!(engine.projectile(fizzle).is_none());
    assert!(engine.projectile(follow_up).is_some(), "not spent on a defeated enemy");
    assert_eq!(engine.points(), 50);

    let report = engine.update(DT, &mut surface).unwrap();
    assert_eq!((report.hits, report.defeated, report.expired), (0, 0, 0));
    assert!(engine.projectile(follow_up).is_some());
    assert_eq!(engine.enemies().count(), 1);
    assert_eq!(engine.points(), 50);
}

#[test]
fn linear_projectile_expires_after_budget_over_speed() {
    let (mut engine, _) = engine();
    let shot = engine.fire(FireEvent::ally(ProjectileKind::Linear, Vec2::new(0.0, 400.0), Vec2::new(250.0, 0.0)));

    let mut surface = RecordingSurface::new();
    let mut ticks = 0;
    while engine.projectile(shot).is_some() {
        let report = engine.update(DT, &mut surface).unwrap();
        assert_eq!(report.hits, 0);
        ticks += 1;
        assert!(ticks < 200, "projectile never expired");
    }

    let lifetime = ticks as f32 * DT;
    assert!((lifetime - 2.0).abs() <= DT + 1e-4, "expired after {lifetime}s");
}

#[test]
fn enemy_without_hitbox_is_never_hit() {
    let (mut engine, _) = engine();
    let ghost = engine.insert_sprite(assets::enemy_ship());
    let ghost = engine
        .add_enemy(GameObject::new(ghost, Team::Enemy, Vec2::new(100.0, 100.0), 10))
        .unwrap();
    let shot = engine.fire(FireEvent::ally(ProjectileKind::Linear, Vec2::new(104.0, 101.0), Vec2::zeros()));

    let mut surface = RecordingSurface::new();
    engine.update(DT, &mut surface).unwrap();

    assert!(engine.projectile(shot).is_some());
    assert_eq!(engine.entity(ghost).unwrap().hp, 10);
}

#[test]
fn symmetric_clamp_from_config() {
    logging::init_for_tests();
    let mut config = GameConfig::default();
    config.projectiles.clamp = ClampPolicy::Symmetric;
    let mut engine = GameEngine::new(config);
    let ship = engine.insert_sprite(assets::player_ship());
    engine
        .set_player(GameObject::new(ship, Team::Ally, Vec2::new(320.0, 200.0), 10))
        .unwrap();

    let fired = engine
        .apply_input(&TickInput::default().firing(FireEvent::ally(
            ProjectileKind::Accelerating,
            Vec2::new(320.0, 200.0),
            Vec2::new(-5.0, 0.0),
        )))
        .unwrap();

    let mut surface = RecordingSurface::new();
    for _ in 0..30 {
        engine.update(DT, &mut surface).unwrap();
    }

    let shot = engine.projectile(fired[0]).unwrap();
    assert_relative_eq!(shot.velocity.x, -10.0);
}

#[test]
fn camera_follows_player_over_large_background() {
    let (mut engine, player) = engine();
    engine.set_background(assets::background(1280, 960));
    engine.entity_mut(player).unwrap().position = Vec2::new(600.0, 400.0);

    let mut surface = CanvasSurface::new(640, 480);
    let report = engine.update(DT, &mut surface).unwrap();

    // 600 + 26/2 - 640/2, 400 + 26/2 - 480/2
    assert_eq!(report.frame.offset, sprite_engine::foundation::math::IVec2::new(293, 173));
    assert_eq!(*surface.canvas().get_pixel(310, 230), Color::rgb(0, 255, 0).to_rgba());
    assert_eq!(*surface.canvas().get_pixel(0, 0), assets::SKY.to_rgba());
    assert_eq!(surface.frames_presented(), 1);
}
