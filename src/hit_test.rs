use uuid::Uuid;

use super::*;

fn scene() -> Scene {
    let mut s = Scene::new(Uuid::new_v4(), "hit", 32, 32);
    s.triggers = vec![
        Trigger { x: 2, y: 2, width: 4, height: 4 },
        Trigger { x: 3, y: 3, width: 4, height: 4 },
        Trigger { x: 10, y: 10, width: 0, height: 0 },
    ];
    s.actors = vec![Actor::new(4, 4), Actor::new(5, 4), Actor::new(20, 1)];
    s
}

// =============================================================
// trigger_at
// =============================================================

#[test]
fn trigger_at_returns_first_in_order() {
    let s = scene();
    let (index, t) = trigger_at(&s, TilePos::new(4, 4)).unwrap();
    assert_eq!(index, 0);
    assert_eq!(t.x, 2);
}

#[test]
fn trigger_at_reaches_later_trigger_outside_overlap() {
    let s = scene();
    let (index, _) = trigger_at(&s, TilePos::new(6, 6)).unwrap();
    assert_eq!(index, 1);
}

#[test]
fn trigger_at_misses_empty_tile() {
    let s = scene();
    assert!(trigger_at(&s, TilePos::new(0, 0)).is_none());
}

#[test]
fn trigger_at_skips_zero_size_trigger() {
    let s = scene();
    assert!(trigger_at(&s, TilePos::new(10, 10)).is_none());
}

#[test]
fn trigger_at_upper_bounds_are_exclusive() {
    let s = scene();
    assert!(trigger_at(&s, TilePos::new(7, 4)).is_none());
    assert!(trigger_at(&s, TilePos::new(4, 7)).is_none());
}

// =============================================================
// actor_at
// =============================================================

#[test]
fn actor_at_returns_first_in_order_for_overlap() {
    let s = scene();
    // (5,4) is covered by both actor 0 (4..6) and actor 1 (5..7).
    let (index, _) = actor_at(&s, TilePos::new(5, 4)).unwrap();
    assert_eq!(index, 0);
}

#[test]
fn actor_at_covers_second_column() {
    let s = scene();
    let (index, _) = actor_at(&s, TilePos::new(21, 1)).unwrap();
    assert_eq!(index, 2);
}

#[test]
fn actor_at_requires_same_row() {
    let s = scene();
    assert!(actor_at(&s, TilePos::new(20, 0)).is_none());
    assert!(actor_at(&s, TilePos::new(20, 2)).is_none());
}

#[test]
fn actor_at_empty_scene() {
    let s = Scene::new(Uuid::new_v4(), "empty", 8, 8);
    assert!(actor_at(&s, TilePos::new(0, 0)).is_none());
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_test_prefers_trigger_over_actor() {
    let s = scene();
    assert_eq!(hit_test(&s, TilePos::new(4, 4)), Some(Hit::Trigger(0)));
}

#[test]
fn hit_test_finds_actor_outside_triggers() {
    let s = scene();
    assert_eq!(hit_test(&s, TilePos::new(20, 1)), Some(Hit::Actor(2)));
}

#[test]
fn hit_test_misses() {
    let s = scene();
    assert_eq!(hit_test(&s, TilePos::new(30, 30)), None);
}
