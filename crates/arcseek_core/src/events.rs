//! Input events and drag state
//!
//! The host forwards raw pointer input as [`ContactEvent`]s and gets a
//! [`Response`] back telling it whether the event was consumed and whether
//! the control needs repainting.

use serde::{Deserialize, Serialize};

use crate::thumb::Thumb;

/// Raw pointer input in control coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContactEvent {
    /// Initial contact
    Down { x: f32, y: f32 },
    /// Contact moved while held
    Move { x: f32, y: f32 },
    /// Contact lifted
    Up,
    /// Gesture cancelled by the host
    Cancel,
}

impl ContactEvent {
    /// Whether this event ends the gesture
    pub fn is_end(&self) -> bool {
        matches!(self, ContactEvent::Up | ContactEvent::Cancel)
    }
}

/// Result of feeding one input event to the engine
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Response {
    /// The engine handled the event; the host should skip default handling
    pub consumed: bool,
    /// Visible state changed and the control should be redrawn
    pub repaint: bool,
}

impl Response {
    /// Not handled
    pub const IGNORED: Response = Response {
        consumed: false,
        repaint: false,
    };

    /// Handled without a state change
    pub const CONSUMED: Response = Response {
        consumed: true,
        repaint: false,
    };

    /// Handled and needs a redraw
    pub const REPAINT: Response = Response {
        consumed: true,
        repaint: true,
    };
}

/// Drag state transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEvent {
    /// A contact-down selected a thumb
    Grab(Thumb),
    /// The contact ended or was cancelled
    Release,
}

/// Which thumb, if any, owns the current gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Thumb),
}

impl DragState {
    /// Next state for `event`, or `None` when the event does not apply
    pub fn on_event(&self, event: DragEvent) -> Option<Self> {
        match (self, event) {
            // A fresh contact always re-selects, even mid-gesture
            (_, DragEvent::Grab(thumb)) => Some(DragState::Dragging(thumb)),

            (DragState::Dragging(_), DragEvent::Release) => Some(DragState::Idle),
            (DragState::Idle, DragEvent::Release) => None,
        }
    }

    /// The thumb being dragged
    pub fn active_thumb(&self) -> Option<Thumb> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(thumb) => Some(*thumb),
        }
    }
}
