//! Game engine
//!
//! Owns every ship, projectile and renderable, and drives one tick of the
//! game: motion, projectile fuel, hit detection, damage, drawing, and removal
//! of whatever died along the way.
//!
//! Removal is deferred. Objects defeated or spent during a tick are still drawn
//! in that tick and are swept after the frame is presented.

use slotmap::new_key_type;
use sprite_engine::animation::AnimationError;
use sprite_engine::foundation::collections::{OrderedSlotMap, OwnerHandle};
use sprite_engine::foundation::math::{to_pixel, Rect};
use sprite_engine::render::{DrawSurface, Sprite};
use sprite_engine::scene::{FrameStats, Renderable, RenderableId, RenderableStore, SceneCompositor, SceneError};
use thiserror::Error;

use crate::config::GameConfig;
use crate::entity::{sync_renderable, GameObject, Team};
use crate::input::{FireEvent, TickInput};
use crate::projectile::Projectile;

new_key_type! {
    /// Handle to a ship registered with a [`GameEngine`]
    pub struct EntityId;

    /// Handle to a projectile registered with a [`GameEngine`]
    pub struct ProjectileId;
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Drawing failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Animation lookup or validation failed
    #[error("Animation error: {0}")]
    Animation(#[from] AnimationError),

    /// Input arrived before a player was set
    #[error("No player has been set")]
    NoPlayer,

    /// An object was registered on the wrong side
    #[error("Expected a {expected:?} object, got {found:?}")]
    WrongTeam {
        /// Team the registration call requires
        expected: Team,
        /// Team the object was created with
        found: Team,
    },

    /// An object points at a renderable this engine does not own
    #[error("Renderable is not owned by this engine")]
    UnknownRenderable,

    /// The renderable already belongs to another ship or projectile
    #[error("Renderable already belongs to another object")]
    RenderableInUse,

    /// The handle refers to a ship that has been removed
    #[error("No such entity")]
    UnknownEntity,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// What the compositor drew
    pub frame: FrameStats,

    /// Projectiles that hit an enemy
    pub hits: usize,

    /// Enemies removed at the end of the tick
    pub defeated: usize,

    /// Projectiles that ran out of fuel
    pub expired: usize,
}

/// Combat resolver and owner of all game objects
pub struct GameEngine {
    config: GameConfig,
    scene: SceneCompositor,
    renderables: RenderableStore,
    entities: OrderedSlotMap<EntityId, GameObject>,
    projectiles: OrderedSlotMap<ProjectileId, Projectile>,
    player: Option<EntityId>,
    points: u64,
    ticks: u64,
}

impl GameEngine {
    /// Create an empty engine
    pub fn new(config: GameConfig) -> Self {
        let mut scene = SceneCompositor::new(config.viewport.width, config.viewport.height);
        scene.set_clear_color(config.clear_color);

        Self {
            config,
            scene,
            renderables: RenderableStore::with_key(),
            entities: OrderedSlotMap::new(),
            projectiles: OrderedSlotMap::new(),
            player: None,
            points: 0,
            ticks: 0,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take ownership of a renderable so an object can refer to it
    pub fn insert_renderable(&mut self, renderable: Renderable) -> RenderableId {
        self.renderables.insert(renderable)
    }

    /// Shortcut for a single-image renderable on layer 0
    pub fn insert_sprite(&mut self, sprite: Sprite) -> RenderableId {
        self.insert_renderable(Renderable::from_sprite(sprite))
    }

    /// Image drawn behind the scene; larger than the viewport makes it scroll
    pub fn set_background(&mut self, background: Sprite) {
        self.scene.set_background(background);
    }

    /// Make `object` the player. The camera follows it.
    ///
    /// A previous player is removed along with its renderable. The new
    /// player needs a renderable of its own.
    pub fn set_player(&mut self, object: GameObject) -> Result<EntityId, EngineError> {
        let renderable = object.renderable();
        let id = self.register(object, Team::Ally)?;
        if let Some(previous) = self.player.replace(id) {
            self.remove_entity(previous);
        }

        self.scene.set_player(renderable);
        self.scene.set_focus(renderable);
        log::debug!("Player set: {:?}", id);
        Ok(id)
    }

    /// Player handle, if set
    pub fn player(&self) -> Option<EntityId> {
        self.player
    }

    /// Register a ship fighting alongside the player
    pub fn add_ally(&mut self, object: GameObject) -> Result<EntityId, EngineError> {
        let renderable = object.renderable();
        let id = self.register(object, Team::Ally)?;
        self.scene.add_object(renderable);
        log::debug!("Ally added: {:?}", id);
        Ok(id)
    }

    /// Register a target for ally fire
    pub fn add_enemy(&mut self, object: GameObject) -> Result<EntityId, EngineError> {
        let renderable = object.renderable();
        let id = self.register(object, Team::Enemy)?;
        self.scene.add_object(renderable);
        log::debug!("Enemy added: {:?}", id);
        Ok(id)
    }

    /// Register a projectile built by the caller
    pub fn add_projectile(&mut self, projectile: Projectile) -> Result<ProjectileId, EngineError> {
        let renderable = projectile.renderable();
        self.check_unclaimed(renderable)?;

        sync_renderable(renderable, projectile.position, &mut self.renderables);
        let id = self.projectiles.insert(projectile);
        self.renderables[renderable].set_owner(OwnerHandle::from_key(id));
        self.scene.add_object(renderable);
        log::debug!("Projectile added: {:?}", id);
        Ok(id)
    }

    /// Spawn a projectile with the default image and fuel for its kind
    pub fn fire(&mut self, event: FireEvent) -> ProjectileId {
        let renderable = self.insert_sprite(event.kind.sprite());
        self.renderables[renderable].set_position(to_pixel(event.position));

        let projectile = Projectile::new(
            renderable,
            event.kind,
            event.team,
            event.position,
            event.velocity,
            event.damage,
            self.config.projectiles.default_budget,
        );
        let id = self.projectiles.insert(projectile);
        self.renderables[renderable].set_owner(OwnerHandle::from_key(id));
        self.scene.add_object(renderable);
        log::debug!("{:?} fired {:?} projectile {:?}", event.team, event.kind, id);
        id
    }

    /// Apply player movement and spawn requested shots
    pub fn apply_input(&mut self, input: &TickInput) -> Result<Vec<ProjectileId>, EngineError> {
        let player = self.player.and_then(|id| self.entities.get_mut(id)).ok_or(EngineError::NoPlayer)?;
        player.set_velocity(input.player_velocity);
        Ok(input.fire.iter().map(|event| self.fire(*event)).collect())
    }

    /// Switch a ship's animation, restarting from the first frame
    pub fn set_animation(&mut self, id: EntityId, name: &str) -> Result<(), EngineError> {
        let renderable = self.entities.get(id).ok_or(EngineError::UnknownEntity)?.renderable();
        let renderable = self.renderables.get_mut(renderable).ok_or(EngineError::UnknownRenderable)?;
        renderable.animation.set_state(name)?;
        Ok(())
    }

    /// Award points
    pub fn add_points(&mut self, amount: u64) {
        self.points = self.points.saturating_add(amount);
    }

    /// Points earned so far
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Ticks completed
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Look up a ship
    pub fn entity(&self, id: EntityId) -> Option<&GameObject> {
        self.entities.get(id)
    }

    /// Look up a ship for modification
    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut GameObject> {
        self.entities.get_mut(id)
    }

    /// Look up a projectile
    pub fn projectile(&self, id: ProjectileId) -> Option<&Projectile> {
        self.projectiles.get(id)
    }

    /// Look up a renderable
    pub fn renderable(&self, id: RenderableId) -> Option<&Renderable> {
        self.renderables.get(id)
    }

    /// Look up a renderable for modification, e.g. to change animation state
    pub fn renderable_mut(&mut self, id: RenderableId) -> Option<&mut Renderable> {
        self.renderables.get_mut(id)
    }

    /// Enemies in registration order
    pub fn enemies(&self) -> impl Iterator<Item = (EntityId, &GameObject)> + '_ {
        self.entities.iter().filter(|(_, o)| o.team() == Team::Enemy)
    }

    /// Allies in registration order, player excluded
    pub fn allies(&self) -> impl Iterator<Item = (EntityId, &GameObject)> + '_ {
        self.entities
            .iter()
            .filter(move |(id, o)| o.team() == Team::Ally && Some(*id) != self.player)
    }

    /// Projectiles in flight, in spawn order
    pub fn projectiles(&self) -> impl Iterator<Item = (ProjectileId, &Projectile)> + '_ {
        self.projectiles.iter()
    }

    /// Compositor driving the draw
    pub fn scene(&self) -> &SceneCompositor {
        &self.scene
    }

    /// Advance the game by `dt` seconds and draw the result
    ///
    /// Fails with [`SceneError::MissingFocus`] before anything moves if no
    /// player has been set.
    pub fn update<S>(&mut self, dt: f32, surface: &mut S) -> Result<TickReport, EngineError>
    where
        S: DrawSurface + ?Sized,
    {
        if !self.scene.focus().is_some_and(|id| self.renderables.contains_key(id)) {
            return Err(SceneError::MissingFocus.into());
        }

        for id in self.entities.keys().to_vec() {
            if let Some(object) = self.entities.get_mut(id) {
                object.update(dt, &mut self.renderables);
            }
        }

        let mut spent = Vec::new();
        let mut hits = 0;
        let mut expired = 0;
        for id in self.projectiles.keys().to_vec() {
            let Some(projectile) = self.projectiles.get_mut(id) else {
                continue;
            };
            if projectile.update(dt, &self.config.projectiles, &mut self.renderables) {
                log::debug!("Projectile {:?} ran out of fuel", id);
                expired += 1;
                spent.push(id);
                continue;
            }
            if projectile.team() != Team::Ally {
                continue;
            }
            let damage = projectile.damage;
            if let Some(target) = self.bounds_of_projectile(id).and_then(|b| self.first_enemy_hit(b)) {
                if let Some(enemy) = self.entities.get_mut(target) {
                    enemy.hp = enemy.hp.saturating_sub(damage);
                    log::debug!("Projectile {:?} hit {:?} for {}, hp now {}", id, target, damage, enemy.hp);
                }
                hits += 1;
                spent.push(id);
            }
        }

        let frame = self.scene.update(dt, &mut self.renderables, surface)?;

        for id in spent {
            self.remove_projectile(id);
        }
        let defeated: Vec<EntityId> = self
            .enemies()
            .filter(|(_, enemy)| enemy.is_defeated())
            .map(|(id, _)| id)
            .collect();
        for id in &defeated {
            if let Some(enemy) = self.remove_entity(*id) {
                self.points = self.points.saturating_add(u64::from(enemy.bounty));
                log::debug!("Enemy {:?} defeated, +{} points", id, enemy.bounty);
            }
        }

        self.ticks += 1;
        let report = TickReport { frame, hits, defeated: defeated.len(), expired };
        log::trace!("Tick {}: {:?}", self.ticks, report);
        Ok(report)
    }

    fn register(&mut self, object: GameObject, expected: Team) -> Result<EntityId, EngineError> {
        if object.team() != expected {
            return Err(EngineError::WrongTeam { expected, found: object.team() });
        }
        let renderable = object.renderable();
        self.check_unclaimed(renderable)?;

        sync_renderable(renderable, object.position, &mut self.renderables);
        let id = self.entities.insert(object);
        self.renderables[renderable].set_owner(OwnerHandle::from_key(id));
        Ok(id)
    }

    fn check_unclaimed(&self, id: RenderableId) -> Result<(), EngineError> {
        match self.renderables.get(id) {
            None => Err(EngineError::UnknownRenderable),
            Some(renderable) if renderable.owner().is_some() => Err(EngineError::RenderableInUse),
            Some(_) => Ok(()),
        }
    }

    fn bounds_of_projectile(&self, id: ProjectileId) -> Option<Rect> {
        let projectile = self.projectiles.get(id)?;
        let renderable = self.renderables.get(projectile.renderable())?;
        Some(projectile.hitbox.translated(renderable.position()))
    }

    /// First live enemy, in registration order, whose hitbox overlaps `bounds`
    fn first_enemy_hit(&self, bounds: Rect) -> Option<EntityId> {
        self.enemies()
            .filter(|(_, enemy)| !enemy.is_defeated())
            .find(|(_, enemy)| {
                let Some(hitbox) = enemy.hitbox else {
                    return false;
                };
                self.renderables
                    .get(enemy.renderable())
                    .is_some_and(|r| hitbox.translated(r.position()).intersects(&bounds))
            })
            .map(|(id, _)| id)
    }

    fn remove_projectile(&mut self, id: ProjectileId) -> Option<Projectile> {
        let projectile = self.projectiles.remove(id)?;
        self.scene.remove_object(projectile.renderable());
        self.renderables.remove(projectile.renderable());
        Some(projectile)
    }

    fn remove_entity(&mut self, id: EntityId) -> Option<GameObject> {
        let object = self.entities.remove(id)?;
        self.scene.remove_object(object.renderable());
        self.renderables.remove(object.renderable());
        Some(object)
    }
}
