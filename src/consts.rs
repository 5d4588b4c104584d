//! Shared numeric constants for the scene canvas.

// ── Grid ────────────────────────────────────────────────────────

/// Edge length of one tile in unzoomed pixels.
pub const TILE_SIZE_PX: f64 = 8.0;

/// Scene width in tiles when the background image is unknown.
pub const DEFAULT_SCENE_WIDTH: u32 = 32;

/// Scene height in tiles when the background image is unknown.
pub const DEFAULT_SCENE_HEIGHT: u32 = 32;

// ── Actors ──────────────────────────────────────────────────────

/// Width of an actor's footprint in tiles.
pub const ACTOR_WIDTH_TILES: i32 = 2;

/// Height of an actor's footprint in tiles.
pub const ACTOR_HEIGHT_TILES: i32 = 1;

// ── Zoom ────────────────────────────────────────────────────────

/// Zoom percentage used when the project settings leave it unset.
pub const DEFAULT_ZOOM_PERCENT: u32 = 100;
