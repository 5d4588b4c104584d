//! Pointer and tool interaction engine for a tile-based scene editor.
//!
//! This crate owns the interaction logic of a single scene canvas: converting
//! raw pointer events into tile coordinates, hit-testing actors and triggers,
//! tracking the active gesture, and emitting edit [`engine::Command`]s for an
//! external store to apply. The host is responsible for wiring window events
//! to the [`engine::SceneCanvas`] and for drawing the [`view::SceneView`] it
//! describes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Command stream, [`engine::PointerToolController`] and [`engine::SceneCanvas`] |
//! | [`doc`] | Scene, actor, trigger and collision types plus store-boundary validation |
//! | [`config`] | Project settings (zoom, collision visibility) |
//! | [`camera`] | Pixel to tile quantisation |
//! | [`input`] | Tools, pointer events, hover and the gesture state machine |
//! | [`hit`] | Hit-testing against triggers and actors |
//! | [`listeners`] | Scoped window listener registration |
//! | [`view`] | Plain-data overlay description for the renderer |
//! | [`consts`] | Shared numeric constants (tile size, actor footprint, defaults) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod listeners;
pub mod view;
