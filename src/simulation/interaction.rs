//! Pointer-driven selection, drag and launch
//!
//! The host translates raw button/cursor state into `PointerCommand`s once
//! per frame and hands them to `InteractionController::apply` before the
//! physics step runs.

use super::params::Parameters;
use super::states::{BodyStore, NVec2};

/// Discrete pointer events derived by the host each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerCommand {
    PrimaryPressed(NVec2), // select body under the point
    PrimaryHeld(NVec2), // teleport the selected body to the point
    PrimaryReleased, // drop the selection
    SecondaryPressed(NVec2), // select body under the point
    SecondaryReleased(NVec2), // launch the selected body away from the point
}

/// Single optional selection over the body population
///
/// Holds no tuning of its own; the launch scale is read from `Parameters`
/// on every command.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    selected: Option<usize>, // index into the BodyStore
}

impl InteractionController {
    pub fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_idle(&self) -> bool {
        self.selected.is_none()
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Apply this frame's commands in order
    pub fn apply(&mut self, store: &mut BodyStore, params: &Parameters, commands: &[PointerCommand]) {
        for command in commands {
            self.handle(store, params, *command);
        }
    }

    pub fn handle(&mut self, store: &mut BodyStore, params: &Parameters, command: PointerCommand) {
        match command {
            PointerCommand::PrimaryPressed(p) | PointerCommand::SecondaryPressed(p) => {
                // a press always starts from a clean selection
                self.selected = store.body_at(p);
            }
            PointerCommand::PrimaryHeld(p) => {
                if let Some(body) = self.selected.and_then(|i| store.get_mut(i)) {
                    body.position = p;
                }
            }
            PointerCommand::PrimaryReleased => {
                self.selected = None;
            }
            PointerCommand::SecondaryReleased(p) => {
                if let Some(body) = self.selected.take().and_then(|i| store.get_mut(i)) {
                    body.velocity = params.launch_scale * (body.position - p);
                }
            }
        }
    }

    /// Segment from the selected body's center to the pointer, for the drag indicator
    pub fn drag_line(&self, store: &BodyStore, pointer: NVec2) -> Option<(NVec2, NVec2)> {
        self.selected
            .and_then(|i| store.get(i))
            .map(|body| (body.position, pointer))
    }
}
