//! View model: what the renderer should draw for one scene.
//!
//! This module turns read-only scene state, the editor snapshot and the
//! controller's hover into plain pixel-space records. It does not draw
//! anything and never mutates state; the host's rendering layer consumes
//! [`SceneView`] however it likes.
//!
//! All lengths are unzoomed pixels; the host applies the zoom transform.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::Serialize;

use crate::camera::{Point, TilePos};
use crate::consts::{ACTOR_HEIGHT_TILES, ACTOR_WIDTH_TILES, TILE_SIZE_PX};
use crate::doc::{Scene, SceneId};
use crate::engine::Snapshot;
use crate::input::{Hover, Tool};

/// An axis-aligned rectangle in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PixelRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// Rectangle covering `width` x `height` tiles from `origin`.
    #[must_use]
    pub fn from_tiles(origin: TilePos, width: i32, height: i32) -> Self {
        Self {
            left: tile_px(origin.x),
            top: tile_px(origin.y),
            width: tile_px(width),
            height: tile_px(height),
        }
    }
}

fn tile_px(tiles: i32) -> f64 {
    f64::from(tiles) * TILE_SIZE_PX
}

/// One trigger overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TriggerView {
    pub rect: PixelRect,
    pub selected: bool,
}

/// One actor sprite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    pub rect: PixelRect,
    pub label: String,
}

/// Everything the renderer needs for a scene and its overlays.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneView {
    pub scene: SceneId,
    pub name: String,
    /// Scene position on the world canvas.
    pub position: Point,
    /// Any part of this scene is selected.
    pub selected: bool,
    /// Background image area, `width*8` by `height*8`.
    pub image_size: (f64, f64),
    /// Background image URL, when the scene has an image.
    pub background: Option<String>,
    pub triggers: Vec<TriggerView>,
    /// Collision tiles; empty while collisions are hidden.
    pub collisions: Vec<PixelRect>,
    pub show_collisions: bool,
    pub actors: Vec<ActorView>,
    /// Placement preview for the actor tool.
    pub ghost_actor: Option<PixelRect>,
    /// Hover cell marker.
    pub hover: Option<PixelRect>,
}

impl SceneView {
    /// Describe `snap.scene` as the renderer should show it.
    ///
    /// `project_root` prefixes the background URL
    /// (`{root}/assets/backgrounds/{filename}`).
    #[must_use]
    pub fn build(snap: &Snapshot<'_>, hover: Hover, project_root: &str) -> Self {
        let scene: &Scene = snap.scene;
        let id = scene.id;
        let show_collisions = snap.settings.show_collisions(snap.tool);
        let selected_trigger = snap.selection.trigger_in(id);

        let triggers = scene
            .triggers
            .iter()
            .enumerate()
            .map(|(index, t)| TriggerView {
                rect: PixelRect::from_tiles(TilePos::new(t.x, t.y), t.width, t.height),
                selected: selected_trigger == Some(index),
            })
            .collect();

        let collisions = if show_collisions {
            scene.collisions.tiles().map(|tile| PixelRect::from_tiles(tile, 1, 1)).collect()
        } else {
            Vec::new()
        };

        let actors = scene
            .actors
            .iter()
            .enumerate()
            .map(|(index, a)| ActorView {
                rect: PixelRect::from_tiles(TilePos::new(a.x, a.y), ACTOR_WIDTH_TILES, ACTOR_HEIGHT_TILES),
                label: a.label(index),
            })
            .collect();

        let ghost_actor = (hover.visible && snap.tool == Tool::Actor)
            .then(|| PixelRect::from_tiles(hover.tile, ACTOR_WIDTH_TILES, ACTOR_HEIGHT_TILES));
        let hover_cell = hover.visible.then(|| PixelRect::from_tiles(hover.tile, 1, 1));

        Self {
            scene: id,
            name: scene.name.clone(),
            position: scene.position,
            selected: snap.selection.scene() == Some(id),
            image_size: (f64::from(scene.width) * TILE_SIZE_PX, f64::from(scene.height) * TILE_SIZE_PX),
            background: scene
                .image
                .as_ref()
                .map(|file| format!("{}/assets/backgrounds/{file}", project_root.trim_end_matches('/'))),
            triggers,
            collisions,
            show_collisions,
            actors,
            ghost_actor,
            hover: hover_cell,
        }
    }
}
