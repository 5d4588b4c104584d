#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::consts::TILE_SIZE_PX;

/// A point in page or element-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A cell on the scene's tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Saturates at the `i32` limits; quantised pointer positions can sit there.
impl Sub for TilePos {
    type Output = TilePos;

    fn sub(self, rhs: TilePos) -> TilePos {
        TilePos::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Quantise one pixel coordinate to a tile index at the given zoom ratio.
///
/// `tile = floor(pixel / (8 * zoom))`. Values left of or above the origin map
/// to negative tiles.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn pixel_to_tile(pixel: f64, zoom: f64) -> i32 {
    (pixel / (TILE_SIZE_PX * zoom)).floor() as i32
}

/// Zoom state for one scene canvas.
///
/// `zoom` is a scale factor (1.0 = 100%).
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    #[must_use]
    pub fn new(zoom: f64) -> Self {
        Self { zoom }
    }

    /// Convert an element-local pixel position to the tile under it.
    #[must_use]
    pub fn screen_to_tile(&self, local: Point) -> TilePos {
        TilePos::new(pixel_to_tile(local.x, self.zoom), pixel_to_tile(local.y, self.zoom))
    }

    /// Convert a screen-space pixel distance to an unzoomed distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }
}
