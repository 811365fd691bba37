//! Layered draw queue
//!
//! Turns the unordered renderable view into the per-frame draw sequence.
//! Four passes run back to front:
//!
//! | Pass        | Members                          | Order                  |
//! |-------------|----------------------------------|------------------------|
//! | Underlay    | `layer < 0`, player included     | insertion              |
//! | Ground      | `layer == 0`, player included    | ascending `y + height` |
//! | Raised      | `layer == 1`, player included    | same sort as Ground    |
//! | Overlay     | `layer == 2`, player excluded    | same sort as Ground    |
//!
//! Renderables on layers above 2 are never drawn.

use crate::scene::renderable::{RenderableId, RenderableStore};

/// Which pass an entry is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DrawPass {
    /// Background-adjacent decoration
    Underlay,
    /// Depth-sorted ground layer
    Ground,
    /// Depth-sorted layer drawn over the ground
    Raised,
    /// Foreground that always covers the player
    Overlay,
}

/// One queued draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawEntry {
    /// Pass this draw belongs to
    pub pass: DrawPass,
    /// Renderable to draw
    pub id: RenderableId,
}

/// Ordered draw sequence for a frame
#[derive(Debug, Default, Clone)]
pub struct DrawQueue {
    entries: Vec<DrawEntry>,
}

impl DrawQueue {
    /// Build the queue for `objects` plus the optional player renderable
    ///
    /// Handles that no longer resolve in `store` are skipped.
    pub fn build(objects: &[RenderableId], player: Option<RenderableId>, store: &RenderableStore) -> Self {
        let mut members: Vec<(RenderableId, i32)> = objects
            .iter()
            .copied()
            .filter(|id| Some(*id) != player)
            .chain(player)
            .filter_map(|id| store.get(id).map(|r| (id, r.layer())))
            .collect();

        let mut entries = Vec::with_capacity(members.len());
        entries.extend(
            members
                .iter()
                .filter(|(_, layer)| *layer < 0)
                .map(|(id, _)| DrawEntry { pass: DrawPass::Underlay, id: *id }),
        );

        // Stable: equal depths keep insertion order
        members.sort_by_key(|(id, _)| store.get(*id).map_or(i32::MAX, |r| r.depth()));

        for (pass, layer) in [(DrawPass::Ground, 0), (DrawPass::Raised, 1), (DrawPass::Overlay, 2)] {
            entries.extend(
                members
                    .iter()
                    .filter(|(id, l)| *l == layer && !(pass == DrawPass::Overlay && Some(*id) == player))
                    .map(|(id, _)| DrawEntry { pass, id: *id }),
            );
        }

        Self { entries }
    }

    /// Entries in draw order
    pub fn entries(&self) -> &[DrawEntry] {
        &self.entries
    }

    /// Renderables in draw order
    pub fn ids(&self) -> impl Iterator<Item = RenderableId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Entries for a single pass
    pub fn pass(&self, pass: DrawPass) -> impl Iterator<Item = RenderableId> + '_ {
        self.entries.iter().filter(move |entry| entry.pass == pass).map(|entry| entry.id)
    }

    /// Number of draws
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is drawn
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
