//! Scene compositor
//!
//! Holds a view of the renderables that make up a scene and, once per tick,
//! animates them, centres the camera on the focus and draws everything in
//! layer order through a [`DrawSurface`].
//!
//! The compositor never owns renderables. Whoever owns the
//! [`RenderableStore`] adds and removes handles; the compositor only mirrors
//! those calls.

use thiserror::Error;

use crate::foundation::math::IVec2;
use crate::render::sprite::{Color, Sprite};
use crate::render::surface::DrawSurface;
use crate::scene::draw_queue::DrawQueue;
use crate::scene::renderable::{RenderableId, RenderableStore};

/// Scene-level usage errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// `update` was called with no focus, or the focus was removed
    #[error("scene has no camera focus")]
    MissingFocus,
}

/// What a frame drew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Camera offset subtracted from every position
    pub offset: IVec2,
    /// Renderables blitted, background excluded
    pub blits: usize,
}

/// Layered, camera-relative scene compositor
#[derive(Debug)]
pub struct SceneCompositor {
    objects: Vec<RenderableId>,
    player: Option<RenderableId>,
    focus: Option<RenderableId>,
    background: Option<Sprite>,
    viewport: IVec2,
    clear_color: Color,
}

impl SceneCompositor {
    /// Create an empty scene for a viewport of the given pixel size
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            objects: Vec::new(),
            player: None,
            focus: None,
            background: None,
            viewport: IVec2::new(viewport_width as i32, viewport_height as i32),
            clear_color: Color::BLACK,
        }
    }

    /// Add a renderable to the view. Returns `false` if it was already there.
    pub fn add_object(&mut self, id: RenderableId) -> bool {
        if self.objects.contains(&id) {
            return false;
        }
        self.objects.push(id);
        true
    }

    /// Remove a renderable from the view. Returns `false` if it was absent.
    pub fn remove_object(&mut self, id: RenderableId) -> bool {
        let before = self.objects.len();
        self.objects.retain(|o| *o != id);
        if self.focus == Some(id) {
            self.focus = None;
        }
        before != self.objects.len()
    }

    /// Whether `id` is in the view
    pub fn contains(&self, id: RenderableId) -> bool {
        self.objects.contains(&id)
    }

    /// Renderables in the view, in insertion order
    pub fn objects(&self) -> &[RenderableId] {
        &self.objects
    }

    /// Drop every renderable from the view. Player and focus are kept.
    pub fn clear_objects(&mut self) {
        self.objects.clear();
    }

    /// Set the player renderable, drawn every frame outside the view
    pub fn set_player(&mut self, id: RenderableId) {
        self.objects.retain(|o| *o != id);
        self.player = Some(id);
    }

    /// Player renderable, if set
    pub fn player(&self) -> Option<RenderableId> {
        self.player
    }

    /// Centre the camera on `id`
    pub fn set_focus(&mut self, id: RenderableId) {
        self.focus = Some(id);
    }

    /// Stop following anything
    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    /// Camera focus, if set
    pub fn focus(&self) -> Option<RenderableId> {
        self.focus
    }

    /// Image drawn behind everything; its size bounds camera scrolling
    pub fn set_background(&mut self, background: Sprite) {
        self.background = Some(background);
    }

    /// Background extent, zero if unset
    pub fn background_size(&self) -> IVec2 {
        self.background.as_ref().map_or_else(IVec2::zeros, Sprite::size)
    }

    /// Viewport extent
    pub fn viewport(&self) -> IVec2 {
        self.viewport
    }

    /// Colour the surface is cleared to each frame
    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    /// Camera offset for the current focus
    ///
    /// On each axis the camera only scrolls when the background is larger
    /// than the viewport; otherwise the offset on that axis is zero.
    pub fn camera_offset(&self, store: &RenderableStore) -> Result<IVec2, SceneError> {
        let focus = self
            .focus
            .and_then(|id| store.get(id))
            .ok_or(SceneError::MissingFocus)?;
        let background = self.background_size();

        let axis = |bg: i32, view: i32, pos: i32, size: i32| {
            if bg > view {
                pos + size / 2 - view / 2
            } else {
                0
            }
        };

        Ok(IVec2::new(
            axis(background.x, self.viewport.x, focus.position().x, focus.width()),
            axis(background.y, self.viewport.y, focus.position().y, focus.height()),
        ))
    }

    /// Draw order for the current state, without touching a surface
    pub fn draw_queue(&self, store: &RenderableStore) -> DrawQueue {
        DrawQueue::build(&self.objects, self.player, store)
    }

    /// Advance animations and draw one frame
    ///
    /// Fails with [`SceneError::MissingFocus`] before anything is advanced or
    /// drawn if no focus resolves.
    pub fn update<S>(&mut self, dt: f32, store: &mut RenderableStore, surface: &mut S) -> Result<FrameStats, SceneError>
    where
        S: DrawSurface + ?Sized,
    {
        if !self.focus.is_some_and(|id| store.contains_key(id)) {
            return Err(SceneError::MissingFocus);
        }

        for id in self.objects.iter().chain(self.player.iter()) {
            if let Some(renderable) = store.get_mut(*id) {
                renderable.update(dt);
            }
        }

        let offset = self.camera_offset(store)?;
        let queue = self.draw_queue(store);

        surface.clear(self.clear_color);
        if let Some(background) = &self.background {
            surface.blit(background, -offset);
        }
        for id in queue.ids() {
            if let Some(renderable) = store.get(id) {
                surface.blit(renderable.sprite(), renderable.position() - offset);
            }
        }
        surface.present();

        log::trace!("Frame drawn: {} blits, camera offset {:?}", queue.len(), offset);
        Ok(FrameStats { offset, blits: queue.len() })
    }
}
