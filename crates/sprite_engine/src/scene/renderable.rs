//! Renderable representation for the scene
//!
//! A renderable is the drawable facet of a game object: its animation
//! playback, the pixel it is drawn at, and the layer bucket it sorts into.

use std::sync::Arc;

use slotmap::{new_key_type, SlotMap};

use crate::animation::{AnimationError, AnimationSet, AnimationState};
use crate::foundation::collections::OwnerHandle;
use crate::foundation::math::{IVec2, Rect};
use crate::render::sprite::Sprite;

new_key_type! {
    /// Handle to a [`Renderable`] in a [`RenderableStore`]
    pub struct RenderableId;
}

/// Storage for every renderable in a scene
pub type RenderableStore = SlotMap<RenderableId, Renderable>;

/// Drawable facet of a game object
#[derive(Debug, Clone)]
pub struct Renderable {
    /// Animation playback driving which image is shown
    pub animation: AnimationState,

    /// Top-left pixel the current image is drawn at
    position: IVec2,

    /// Draw bucket: negative under everything, 0 and 1 depth sorted, 2 overlay
    layer: i32,

    /// Object this renderable belongs to
    owner: Option<OwnerHandle>,
}

impl Renderable {
    /// Create a renderable on layer 0 at the origin
    pub fn new(animation: AnimationState) -> Self {
        Self {
            animation,
            position: IVec2::zeros(),
            layer: 0,
            owner: None,
        }
    }

    /// Create a renderable showing one static image
    pub fn from_sprite(sprite: Sprite) -> Self {
        Self::new(AnimationState::single(sprite))
    }

    /// Create a renderable starting in `initial`
    pub fn with_animations(set: Arc<AnimationSet>, initial: &str) -> Result<Self, AnimationError> {
        Ok(Self::new(AnimationState::new(set, initial)?))
    }

    /// Builder: set the layer
    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Builder: set the draw position
    #[must_use]
    pub fn at(mut self, position: IVec2) -> Self {
        self.position = position;
        self
    }

    /// Draw position
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Set where the object is drawn. Does not move the owning object.
    pub fn set_position(&mut self, position: IVec2) {
        self.position = position;
    }

    /// Layer bucket
    pub fn layer(&self) -> i32 {
        self.layer
    }

    /// Change layer bucket
    pub fn set_layer(&mut self, layer: i32) {
        self.layer = layer;
    }

    /// Back-reference to the owning object
    pub fn owner(&self) -> Option<OwnerHandle> {
        self.owner
    }

    /// Record the owning object
    pub fn set_owner(&mut self, owner: OwnerHandle) {
        self.owner = Some(owner);
    }

    /// Current image
    pub fn sprite(&self) -> &Sprite {
        self.animation.sprite()
    }

    /// Width of the current image
    pub fn width(&self) -> i32 {
        self.animation.width()
    }

    /// Height of the current image
    pub fn height(&self) -> i32 {
        self.animation.height()
    }

    /// Screen-space bounds of the current image
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width(), self.height())
    }

    /// Painter's-algorithm key: the bottom edge of the current image
    pub fn depth(&self) -> i32 {
        self.position.y + self.height()
    }

    /// Advance animation playback
    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::IDLE;
    use crate::render::sprite::Color;

    #[test]
    fn test_from_sprite_defaults() {
        let renderable = Renderable::from_sprite(Sprite::solid_square(13, Color::rgb(255, 0, 0), None));
        assert_eq!(renderable.layer(), 0);
        assert_eq!(renderable.position(), IVec2::zeros());
        assert!(renderable.owner().is_none());
        assert_eq!(renderable.animation.current_name(), IDLE);
    }

    #[test]
    fn test_bounds_and_depth() {
        let renderable = Renderable::from_sprite(Sprite::solid_rect(3, 10, Color::BLACK, None))
            .at(IVec2::new(320, 187))
            .with_layer(1);
        assert_eq!(renderable.bounds(), Rect::new(320, 187, 3, 10));
        assert_eq!(renderable.depth(), 197);
        assert_eq!(renderable.layer(), 1);
    }

    #[test]
    fn test_unknown_initial_animation() {
        let set = Arc::new(AnimationSet::single(Sprite::solid_square(2, Color::BLACK, None)));
        assert!(Renderable::with_animations(set, "Run").is_err());
    }
}
