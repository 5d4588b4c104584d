//! Input model: tools, pointer events, hover, and the gesture state machine.
//!
//! `Tool` captures what a pointer-down means. `InputState` is the active
//! gesture being tracked between pointer-down (or label drag-start) and
//! pointer-up, carrying the context needed to interpret each pointer move.
//!
//! ```text
//! Idle -> PaintingCollisions (pointer down, collisions tool)
//! Idle -> Erasing            (pointer down, eraser tool)
//! Idle -> SizingTrigger      (pointer down, triggers tool on an empty tile)
//! Idle -> Holding            (pointer down, actor tool or triggers tool on a trigger)
//! Idle -> MovingSelection    (pointer down, select tool)
//! Idle -> DraggingScene      (drag start on the scene label)
//! Any  -> Idle               (drag end)
//! ```

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, TilePos};
use crate::hit::Hit;

/// Which editor tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Select and move scenes, actors and triggers (default).
    #[default]
    Select,
    /// Place a new actor.
    Actor,
    /// Paint collision tiles.
    Collisions,
    /// Draw or select triggers.
    Triggers,
    /// Remove collisions, actors and triggers.
    Eraser,
}

impl Tool {
    /// Whether ending a gesture with this tool hands control back to `Select`.
    #[must_use]
    pub fn reverts_to_select(self) -> bool {
        matches!(self, Self::Actor | Self::Triggers)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Actor => "actor",
            Self::Collisions => "collisions",
            Self::Triggers => "triggers",
            Self::Eraser => "eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pointer event over the scene image.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Pointer position in page pixels.
    pub page: Point,
    /// Page position of the receiving element's top-left corner.
    pub origin: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn new(page: Point, origin: Point) -> Self {
        Self { page, origin }
    }

    /// Pointer position relative to the receiving element.
    #[must_use]
    pub fn local(&self) -> Point {
        self.page - self.origin
    }
}

/// The tile under the pointer and whether the pointer is over the scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hover {
    pub visible: bool,
    pub tile: TilePos,
}

/// Whether a collision paint gesture adds or removes tiles. Fixed at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Add,
    Remove,
}

/// The active gesture. Only one variant can be live, so a scene drag and an
/// element gesture are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down or drag-start.
    #[default]
    Idle,
    /// Moving the whole scene by its name label.
    DraggingScene {
        /// Page position of the previous drag event.
        last_page: Point,
    },
    /// Painting collision tiles with a fixed mode.
    PaintingCollisions {
        down: TilePos,
        mode: PaintMode,
        /// Last tile painted, so repeated moves in one tile emit nothing.
        last: TilePos,
    },
    /// Erasing collision tiles under the pointer.
    Erasing { down: TilePos, last: TilePos },
    /// Sizing a freshly created trigger from its anchor tile.
    SizingTrigger {
        down: TilePos,
        /// Index the new trigger will occupy in the scene's trigger list.
        index: usize,
        last: TilePos,
    },
    /// Translating whatever the select tool picked up.
    MovingSelection {
        down: TilePos,
        /// Element hit at pointer-down; `None` when the scene itself was selected.
        target: Option<Hit>,
    },
    /// A create gesture with no per-move behavior (actor placed, trigger selected).
    Holding { down: TilePos },
}

impl InputState {
    /// Whether a pointer-down gesture (as opposed to a scene drag) is active.
    #[must_use]
    pub fn is_creating(&self) -> bool {
        !matches!(self, Self::Idle | Self::DraggingScene { .. })
    }

    #[must_use]
    pub fn is_dragging_scene(&self) -> bool {
        matches!(self, Self::DraggingScene { .. })
    }

    /// Tile the pointer went down on, for pointer-down gestures.
    #[must_use]
    pub fn down(&self) -> Option<TilePos> {
        match *self {
            Self::Idle | Self::DraggingScene { .. } => None,
            Self::PaintingCollisions { down, .. }
            | Self::Erasing { down, .. }
            | Self::SizingTrigger { down, .. }
            | Self::MovingSelection { down, .. }
            | Self::Holding { down } => Some(down),
        }
    }
}
