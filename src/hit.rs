#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::TilePos;
use crate::doc::{Actor, Scene, Trigger};

/// Which scene element was hit, by index into its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Trigger(usize),
    Actor(usize),
}

/// First trigger, in scene order, whose rectangle contains `tile`.
///
/// Later triggers stacked on the same tile are unreachable until the earlier
/// one moves or is removed.
#[must_use]
pub fn trigger_at(scene: &Scene, tile: TilePos) -> Option<(usize, &Trigger)> {
    scene.triggers.iter().enumerate().find(|(_, t)| t.contains(tile))
}

/// First actor, in scene order, whose footprint contains `tile`.
#[must_use]
pub fn actor_at(scene: &Scene, tile: TilePos) -> Option<(usize, &Actor)> {
    scene.actors.iter().enumerate().find(|(_, a)| a.contains(tile))
}

/// Test what is under `tile`, checking triggers before actors.
#[must_use]
pub fn hit_test(scene: &Scene, tile: TilePos) -> Option<Hit> {
    if let Some((index, _)) = trigger_at(scene, tile) {
        return Some(Hit::Trigger(index));
    }
    actor_at(scene, tile).map(|(index, _)| Hit::Actor(index))
}
