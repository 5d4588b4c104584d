use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::camera::{Point, TilePos};
use crate::config::ProjectSettings;
use crate::doc::{Scene, SceneId, Selection};
use crate::hit::{self, Hit};
use crate::input::{Hover, InputState, PaintMode, PointerEvent, Tool};
use crate::listeners::{ListenerHost, WindowListeners};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Edit commands returned from input handlers for the store to apply.
///
/// Tile coordinates and deltas are in tile units; `MoveScene` deltas are in
/// unzoomed pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    MoveScene { scene: SceneId, dx: f64, dy: f64 },
    AddActor { scene: SceneId, x: i32, y: i32 },
    SelectActor { scene: SceneId, index: usize },
    MoveActor { scene: SceneId, index: usize, dx: i32, dy: i32 },
    RemoveActorAt { scene: SceneId, x: i32, y: i32 },
    AddCollisionTile { scene: SceneId, x: i32, y: i32 },
    RemoveCollisionTile { scene: SceneId, x: i32, y: i32 },
    AddTrigger { scene: SceneId, x: i32, y: i32 },
    RemoveTriggerAt { scene: SceneId, x: i32, y: i32 },
    /// Span the trigger from `(x0, y0)` to `(x1, y1)`. A reverse drag yields
    /// `x1 < x0` or `y1 < y0`; normalising is the store's job.
    ResizeTrigger { scene: SceneId, index: usize, x0: i32, y0: i32, x1: i32, y1: i32 },
    MoveTrigger { scene: SceneId, index: usize, dx: i32, dy: i32 },
    SelectTrigger { scene: SceneId, index: usize },
    SelectScene { scene: SceneId },
    /// Drop a selection whose actor or trigger index no longer holds.
    ClearSelection,
    SetTool { tool: Tool },
    SetStatus(StatusInfo),
}

/// Status bar contents for the tile under the pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo {
    pub scene_name: String,
    pub x: i32,
    pub y: i32,
    /// Label of the actor under the pointer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

/// Receives the command stream, usually the store's dispatcher.
pub trait CommandSink {
    fn dispatch(&mut self, command: Command);
}

impl CommandSink for Vec<Command> {
    fn dispatch(&mut self, command: Command) {
        self.push(command);
    }
}

/// Read-only store state the handlers consult for one event.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub scene: &'a Scene,
    pub selection: Selection,
    pub tool: Tool,
    pub settings: ProjectSettings,
}

impl<'a> Snapshot<'a> {
    #[must_use]
    pub fn new(scene: &'a Scene, selection: Selection, tool: Tool, settings: ProjectSettings) -> Self {
        Self { scene, selection, tool, settings }
    }

    fn show_collisions(&self) -> bool {
        self.settings.show_collisions(self.tool)
    }
}

/// Interaction state of one scene canvas and the mapping from pointer events
/// to commands.
///
/// Separated from `SceneCanvas` so it can be tested without a listener host
/// or a sink.
#[derive(Debug, Clone, Default)]
pub struct PointerToolController {
    hover: Hover,
    input: InputState,
}

impl PointerToolController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn hover(&self) -> Hover {
        self.hover
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    /// Pointer moved over the scene image.
    ///
    /// Continues the active gesture, then always reports the tile and actor
    /// under the pointer through `SetStatus` and marks the hover visible.
    pub fn on_pointer_move(&mut self, event: PointerEvent, snap: &Snapshot<'_>) -> Vec<Command> {
        let scene = snap.scene;
        let id = scene.id;
        let tile = snap.settings.camera().screen_to_tile(event.local());
        let mut out = Vec::new();

        match &mut self.input {
            InputState::PaintingCollisions { mode, last, .. } => {
                if tile != *last {
                    *last = tile;
                    if scene.contains_tile(tile) {
                        out.push(match mode {
                            PaintMode::Add => Command::AddCollisionTile { scene: id, x: tile.x, y: tile.y },
                            PaintMode::Remove => Command::RemoveCollisionTile { scene: id, x: tile.x, y: tile.y },
                        });
                    }
                }
            }
            InputState::Erasing { last, .. } => {
                if tile != *last {
                    *last = tile;
                    if snap.show_collisions() && scene.contains_tile(tile) {
                        out.push(Command::RemoveCollisionTile { scene: id, x: tile.x, y: tile.y });
                    }
                }
            }
            InputState::SizingTrigger { down, index, last } => {
                if tile != *last {
                    *last = tile;
                    out.push(Command::ResizeTrigger {
                        scene: id,
                        index: *index,
                        x0: down.x,
                        y0: down.y,
                        x1: tile.x,
                        y1: tile.y,
                    });
                }
            }
            InputState::MovingSelection { target, .. } => {
                let delta = tile - self.hover.tile;
                if delta != TilePos::default() {
                    match *target {
                        Some(Hit::Trigger(index)) => {
                            out.push(Command::MoveTrigger { scene: id, index, dx: delta.x, dy: delta.y });
                        }
                        Some(Hit::Actor(index)) => {
                            out.push(Command::MoveActor { scene: id, index, dx: delta.x, dy: delta.y });
                        }
                        None => {}
                    }
                }
            }
            InputState::Idle | InputState::DraggingScene { .. } | InputState::Holding { .. } => {}
        }

        let actor = hit::actor_at(scene, tile).map(|(index, a)| a.label(index));
        out.push(Command::SetStatus(StatusInfo { scene_name: scene.name.clone(), x: tile.x, y: tile.y, actor }));

        self.hover = Hover { visible: true, tile };
        out
    }

    /// Pointer pressed over the scene image. Acts on the current hover tile.
    ///
    /// Ignored while another gesture is active.
    pub fn on_pointer_down(&mut self, snap: &Snapshot<'_>) -> Vec<Command> {
        if self.input != InputState::Idle {
            tracing::debug!(state = ?self.input, "pointer down ignored during active gesture");
            return Vec::new();
        }

        let scene = snap.scene;
        let id = scene.id;
        let down = self.hover.tile;
        let mut out = Vec::new();

        self.input = match snap.tool {
            Tool::Select => {
                let target = hit::hit_test(scene, down);
                out.push(match target {
                    Some(Hit::Trigger(index)) => Command::SelectTrigger { scene: id, index },
                    Some(Hit::Actor(index)) => Command::SelectActor { scene: id, index },
                    None => Command::SelectScene { scene: id },
                });
                InputState::MovingSelection { down, target }
            }
            Tool::Actor => {
                out.push(Command::AddActor { scene: id, x: down.x, y: down.y });
                InputState::Holding { down }
            }
            Tool::Collisions => {
                let mode = if scene.collisions.is_set(down) { PaintMode::Remove } else { PaintMode::Add };
                if scene.contains_tile(down) {
                    out.push(match mode {
                        PaintMode::Add => Command::AddCollisionTile { scene: id, x: down.x, y: down.y },
                        PaintMode::Remove => Command::RemoveCollisionTile { scene: id, x: down.x, y: down.y },
                    });
                }
                InputState::PaintingCollisions { down, mode, last: down }
            }
            Tool::Triggers => {
                if let Some((index, _)) = hit::trigger_at(scene, down) {
                    out.push(Command::SelectTrigger { scene: id, index });
                    InputState::Holding { down }
                } else {
                    out.push(Command::AddTrigger { scene: id, x: down.x, y: down.y });
                    InputState::SizingTrigger { down, index: scene.triggers.len(), last: down }
                }
            }
            Tool::Eraser => {
                Self::erase_at(snap, down, &mut out);
                InputState::Erasing { down, last: down }
            }
        };

        tracing::debug!(scene = %id, tool = %snap.tool, x = down.x, y = down.y, "gesture started");
        out
    }

    fn erase_at(snap: &Snapshot<'_>, tile: TilePos, out: &mut Vec<Command>) {
        let scene = snap.scene;
        let id = scene.id;
        let mut invalidated = false;

        if snap.show_collisions() && scene.contains_tile(tile) {
            out.push(Command::RemoveCollisionTile { scene: id, x: tile.x, y: tile.y });
        }
        if let Some((index, _)) = hit::actor_at(scene, tile) {
            out.push(Command::RemoveActorAt { scene: id, x: tile.x, y: tile.y });
            invalidated |= snap.selection.actor_in(id).is_some_and(|sel| sel >= index);
        }
        if let Some((index, _)) = hit::trigger_at(scene, tile) {
            out.push(Command::RemoveTriggerAt { scene: id, x: tile.x, y: tile.y });
            invalidated |= snap.selection.trigger_in(id).is_some_and(|sel| sel >= index);
        }
        if invalidated {
            out.push(Command::ClearSelection);
        }
    }

    /// Pointer left the scene image. Only hides the hover marker.
    pub fn on_pointer_leave(&mut self) {
        self.hover.visible = false;
    }

    /// Drag started on the scene's name label.
    ///
    /// Ignored while a pointer-down gesture is active.
    pub fn on_drag_start(&mut self, page: Point, snap: &Snapshot<'_>) -> Vec<Command> {
        if self.input != InputState::Idle {
            tracing::debug!(state = ?self.input, "scene drag ignored during active gesture");
            return Vec::new();
        }
        self.input = InputState::DraggingScene { last_page: page };
        tracing::debug!(scene = %snap.scene.id, "scene drag started");
        vec![Command::SelectScene { scene: snap.scene.id }]
    }

    /// Window-level pointer move. Moves the scene while a label drag is active.
    pub fn on_drag_move(&mut self, page: Point, snap: &Snapshot<'_>) -> Vec<Command> {
        let InputState::DraggingScene { last_page } = &mut self.input else {
            return Vec::new();
        };
        let delta = page - *last_page;
        *last_page = page;
        if delta.x == 0.0 && delta.y == 0.0 {
            return Vec::new();
        }
        let camera = snap.settings.camera();
        vec![Command::MoveScene {
            scene: snap.scene.id,
            dx: camera.screen_dist_to_world(delta.x),
            dy: camera.screen_dist_to_world(delta.y),
        }]
    }

    /// Window-level pointer release. Ends any gesture.
    ///
    /// After placing an actor or a trigger the tool switches back to select.
    pub fn on_drag_end(&mut self, snap: &Snapshot<'_>) -> Vec<Command> {
        let ended = std::mem::take(&mut self.input);
        if ended == InputState::Idle {
            return Vec::new();
        }
        if let Some(down) = ended.down() {
            tracing::debug!(scene = %snap.scene.id, x = down.x, y = down.y, state = ?ended, "gesture ended");
        } else {
            tracing::debug!(scene = %snap.scene.id, state = ?ended, "scene drag ended");
        }
        if ended.is_creating() && snap.tool.reverts_to_select() {
            return vec![Command::SetTool { tool: Tool::Select }];
        }
        Vec::new()
    }
}

/// A mounted scene canvas: controller, command sink and window listeners.
///
/// Creating it attaches the window listeners; dropping it releases them.
pub struct SceneCanvas<H: ListenerHost, S: CommandSink> {
    controller: PointerToolController,
    sink: S,
    listeners: WindowListeners<H>,
}

impl<H: ListenerHost, S: CommandSink> SceneCanvas<H, S> {
    /// Mount a canvas, registering its window listeners on `host`.
    pub fn new(host: Rc<RefCell<H>>, sink: S) -> Self {
        Self { controller: PointerToolController::new(), sink, listeners: WindowListeners::attach(host) }
    }

    // --- Element events ---

    pub fn pointer_move(&mut self, event: PointerEvent, snap: &Snapshot<'_>) {
        let commands = self.controller.on_pointer_move(event, snap);
        self.dispatch(commands);
    }

    pub fn pointer_down(&mut self, snap: &Snapshot<'_>) {
        let commands = self.controller.on_pointer_down(snap);
        self.dispatch(commands);
    }

    pub fn pointer_leave(&mut self) {
        self.controller.on_pointer_leave();
    }

    pub fn label_drag_start(&mut self, page: Point, snap: &Snapshot<'_>) {
        let commands = self.controller.on_drag_start(page, snap);
        self.dispatch(commands);
    }

    // --- Window events ---

    pub fn window_pointer_move(&mut self, page: Point, snap: &Snapshot<'_>) {
        let commands = self.controller.on_drag_move(page, snap);
        self.dispatch(commands);
    }

    pub fn window_pointer_up(&mut self, snap: &Snapshot<'_>) {
        let commands = self.controller.on_drag_end(snap);
        self.dispatch(commands);
    }

    // --- Lifecycle ---

    /// Release the window listeners ahead of drop.
    pub fn detach(&mut self) {
        self.listeners.detach();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.listeners.is_attached()
    }

    // --- Queries ---

    #[must_use]
    pub fn controller(&self) -> &PointerToolController {
        &self.controller
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn dispatch(&mut self, commands: Vec<Command>) {
        if commands.is_empty() {
            return;
        }
        tracing::trace!(count = commands.len(), "dispatching commands");
        for command in commands {
            self.sink.dispatch(command);
        }
    }
}
