//! Document model: scenes, their actors, triggers and collision mask.
//!
//! This module defines the typed records the controller reads (`Scene`,
//! `Actor`, `Trigger`, `CollisionMask`, `Selection`) and the loosely typed
//! store records they are built from (`SceneRecord`, `ImageRecord`).
//!
//! Data flows into this layer from the application store as JSON. All
//! validation happens in [`Scene::from_record`]; the controller assumes the
//! invariants hold and never re-checks them.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::{Point, TilePos};
use crate::consts::{ACTOR_HEIGHT_TILES, ACTOR_WIDTH_TILES, DEFAULT_SCENE_HEIGHT, DEFAULT_SCENE_WIDTH};

/// Unique identifier for a scene.
pub type SceneId = Uuid;

/// Errors raised while validating store records.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// The collision byte array does not cover the scene grid exactly.
    #[error("collision mask is {actual} bytes, expected {expected}")]
    MaskLength { expected: usize, actual: usize },
    /// An actor or trigger sits at a negative tile coordinate.
    #[error("{kind} {index} has negative position ({x}, {y})")]
    NegativeCoordinate { kind: &'static str, index: usize, x: i32, y: i32 },
    /// The record JSON could not be decoded.
    #[error("scene record parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A rectangular region of tiles that fires scripted behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
}

impl Trigger {
    /// Whether `tile` lies inside the half-open rectangle.
    ///
    /// Zero or negative sized triggers contain nothing.
    #[must_use]
    pub fn contains(&self, tile: TilePos) -> bool {
        span_contains(self.x, self.width, tile.x) && span_contains(self.y, self.height, tile.y)
    }
}

/// `start <= v < start + len`, widened so positions near the `i32` limits
/// cannot overflow.
fn span_contains(start: i32, len: i32, v: i32) -> bool {
    let (start, v) = (i64::from(start), i64::from(v));
    v >= start && v < start + i64::from(len)
}

/// An entity placed on the scene grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub x: i32,
    pub y: i32,
    /// Display name; unnamed actors are labelled by their position in the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Actor {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, name: None }
    }

    /// Whether `tile` falls inside the actor's 2x1 footprint.
    #[must_use]
    pub fn contains(&self, tile: TilePos) -> bool {
        span_contains(self.x, ACTOR_WIDTH_TILES, tile.x) && span_contains(self.y, ACTOR_HEIGHT_TILES, tile.y)
    }

    /// Status-bar label: the actor's name, or `"Actor N"` with a 1-based index.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Actor {}", index + 1),
        }
    }
}

/// Bit-packed per-tile collision flags, one bit per tile in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionMask {
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl CollisionMask {
    /// An all-clear mask for a `width` x `height` grid.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, bytes: vec![0; Self::required_len(width, height)] }
    }

    /// Wrap an existing byte array. The length must be exactly `ceil(width*height/8)`.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::MaskLength`] when the array is too short or too long.
    pub fn from_bytes(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, DocError> {
        let expected = Self::required_len(width, height);
        if bytes.len() != expected {
            return Err(DocError::MaskLength { expected, actual: bytes.len() });
        }
        Ok(Self { width, height, bytes })
    }

    /// Number of bytes needed to hold one bit per tile.
    #[must_use]
    pub fn required_len(width: u32, height: u32) -> usize {
        (width as usize * height as usize).div_ceil(8)
    }

    /// Byte index and bit mask addressing `tile`, or `None` outside the grid.
    #[must_use]
    pub fn bit(&self, tile: TilePos) -> Option<(usize, u8)> {
        let (Ok(x), Ok(y)) = (usize::try_from(tile.x), usize::try_from(tile.y)) else {
            return None;
        };
        let width = self.width as usize;
        if x >= width || y >= self.height as usize {
            return None;
        }
        let index = width * y + x;
        Some((index >> 3, 1 << (index & 7)))
    }

    /// Whether the tile is marked as a collision. Out-of-grid tiles are clear.
    #[must_use]
    pub fn is_set(&self, tile: TilePos) -> bool {
        self.bit(tile)
            .and_then(|(byte, mask)| self.bytes.get(byte).map(|b| b & mask != 0))
            .unwrap_or(false)
    }

    /// Mark or clear one tile. Returns false when the tile is outside the grid.
    pub fn set(&mut self, tile: TilePos, value: bool) -> bool {
        let Some((byte, mask)) = self.bit(tile) else {
            return false;
        };
        let Some(slot) = self.bytes.get_mut(byte) else {
            return false;
        };
        if value {
            *slot |= mask;
        } else {
            *slot &= !mask;
        }
        true
    }

    /// Raw packed bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// All set tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = TilePos> + '_ {
        let width = self.width;
        let total = width as usize * self.height as usize;
        (0..total).filter_map(move |index| {
            let set = self.bytes.get(index >> 3).is_some_and(|b| b & (1 << (index & 7)) != 0);
            if !set {
                return None;
            }
            let x = i32::try_from(index % width as usize).unwrap_or(i32::MAX);
            let y = i32::try_from(index / width as usize).unwrap_or(i32::MAX);
            Some(TilePos::new(x, y))
        })
    }
}

/// A validated scene as the controller sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub id: SceneId,
    pub name: String,
    /// Top-left of the scene on the world canvas, in unzoomed pixels.
    pub position: Point,
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
    /// Background image filename, if the scene's image is known.
    pub image: Option<String>,
    pub triggers: Vec<Trigger>,
    pub actors: Vec<Actor>,
    pub collisions: CollisionMask,
}

impl Scene {
    /// An empty scene with an all-clear collision mask.
    #[must_use]
    pub fn new(id: SceneId, name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id,
            name: name.into(),
            position: Point::new(0.0, 0.0),
            width,
            height,
            image: None,
            triggers: Vec::new(),
            actors: Vec::new(),
            collisions: CollisionMask::new(width, height),
        }
    }

    /// Whether `tile` lies on the scene grid.
    #[must_use]
    pub fn contains_tile(&self, tile: TilePos) -> bool {
        self.collisions.bit(tile).is_some()
    }

    /// Build a scene from a store record, resolving its background image.
    ///
    /// A record whose image is missing from `images` gets the default 32x32
    /// grid. An empty collision array becomes an all-clear mask.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::MaskLength`] for a non-empty collision array of the
    /// wrong size and [`DocError::NegativeCoordinate`] for an actor or trigger
    /// placed left of or above the grid.
    pub fn from_record(record: SceneRecord, images: &[ImageRecord]) -> Result<Self, DocError> {
        let image = record
            .image_id
            .as_deref()
            .and_then(|id| images.iter().find(|img| img.id == id));
        let (width, height) = image.map_or((DEFAULT_SCENE_WIDTH, DEFAULT_SCENE_HEIGHT), |img| (img.width, img.height));

        for (index, t) in record.triggers.iter().enumerate() {
            if t.x < 0 || t.y < 0 {
                tracing::warn!(scene = %record.id, index, "rejecting trigger with negative position");
                return Err(DocError::NegativeCoordinate { kind: "trigger", index, x: t.x, y: t.y });
            }
        }
        for (index, a) in record.actors.iter().enumerate() {
            if a.x < 0 || a.y < 0 {
                tracing::warn!(scene = %record.id, index, "rejecting actor with negative position");
                return Err(DocError::NegativeCoordinate { kind: "actor", index, x: a.x, y: a.y });
            }
        }

        let collisions = if record.collisions.is_empty() {
            tracing::debug!(scene = %record.id, width, height, "no collision data, starting clear");
            CollisionMask::new(width, height)
        } else {
            CollisionMask::from_bytes(width, height, record.collisions)?
        };

        Ok(Self {
            id: record.id,
            name: record.name,
            position: Point::new(record.x, record.y),
            width,
            height,
            image: image.map(|img| img.filename.clone()),
            triggers: record.triggers,
            actors: record.actors,
            collisions,
        })
    }
}

/// A scene as stored in the application document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneRecord {
    pub id: SceneId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub collisions: Vec<u8>,
}

impl SceneRecord {
    /// Decode a scene record from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::Parse`] for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, DocError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Background image metadata from the project's image list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub id: String,
    pub filename: String,
    /// Width in tiles.
    pub width: u32,
    /// Height in tiles.
    pub height: u32,
}

/// What the editor currently has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Selection {
    /// Nothing selected.
    #[default]
    None,
    /// A whole scene.
    Scene { scene: SceneId },
    /// One actor, by index into the scene's actor list.
    Actor { scene: SceneId, index: usize },
    /// One trigger, by index into the scene's trigger list.
    Trigger { scene: SceneId, index: usize },
}

impl Selection {
    /// The scene the selection belongs to, if any.
    #[must_use]
    pub fn scene(&self) -> Option<SceneId> {
        match *self {
            Self::None => None,
            Self::Scene { scene } | Self::Actor { scene, .. } | Self::Trigger { scene, .. } => Some(scene),
        }
    }

    /// Index of the selected trigger when it lives in `scene`.
    #[must_use]
    pub fn trigger_in(&self, scene: SceneId) -> Option<usize> {
        match *self {
            Self::Trigger { scene: s, index } if s == scene => Some(index),
            _ => None,
        }
    }

    /// Index of the selected actor when it lives in `scene`.
    #[must_use]
    pub fn actor_in(&self, scene: SceneId) -> Option<usize> {
        match *self {
            Self::Actor { scene: s, index } if s == scene => Some(index),
            _ => None,
        }
    }
}
