//! Drag tracking state machine
//!
//! Input flow: pointer down → pointer moves → pointer up, each fed in by the host
//! in delivery order. The tracker owns the position; the host only renders it.

use crate::geometry::{Offset, Position, Rect};

/// Which kind of input delivered an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Mouse,
    Touch,
}

/// Capability profile of a drag consumer.
///
/// The full component and the lighter handle share one tracker and differ only
/// in what they accept here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragProfile {
    /// Accept touch-start / touch-move / touch-end.
    pub touch: bool,
    /// Fall back to the element's rendered position when no placement was requested.
    pub default_placement: bool,
    /// Derive a region class from the current position.
    pub region_styling: bool,
}

impl DragProfile {
    pub const FULL: Self = Self {
        touch: true,
        default_placement: true,
        region_styling: true,
    };

    pub const MOUSE_ONLY: Self = Self {
        touch: false,
        default_placement: false,
        region_styling: false,
    };

    pub fn accepts(&self, source: InputSource) -> bool {
        match source {
            InputSource::Mouse => true,
            InputSource::Touch => self.touch,
        }
    }
}

impl Default for DragProfile {
    fn default() -> Self {
        Self::FULL
    }
}

/// Position plus the state of the current drag session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    profile: DragProfile,
    position: Position,
    is_dragging: bool,
    /// Captured at session start, held constant until the session ends.
    drag_offset: Offset,
    has_moved: bool,
}

impl DragTracker {
    pub fn new(profile: DragProfile) -> Self {
        Self {
            profile,
            position: Position::ORIGIN,
            is_dragging: false,
            drag_offset: Offset::default(),
            has_moved: false,
        }
    }

    pub fn profile(&self) -> DragProfile {
        self.profile
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    pub fn drag_offset(&self) -> Offset {
        self.drag_offset
    }

    /// Overwrite the position outside of a drag session (initial placement).
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Begin a drag session.
    ///
    /// `element_rect` is `None` when the element is not attached; the session still
    /// starts but keeps the previously captured offset.
    pub fn start(
        &mut self,
        source: InputSource,
        contact: Position,
        element_rect: Option<Rect>,
    ) -> bool {
        if !self.profile.accepts(source) {
            return false;
        }
        self.is_dragging = true;
        if let Some(rect) = element_rect {
            self.drag_offset = contact - rect.top_left();
        }
        true
    }

    /// Track a move while dragging. Returns the new position when it was applied.
    pub fn move_to(&mut self, source: InputSource, contact: Position) -> Option<Position> {
        if !self.is_dragging || !self.profile.accepts(source) {
            return None;
        }
        self.position = contact - self.drag_offset;
        self.has_moved = true;
        Some(self.position)
    }

    /// End the session. Returns `true` when a session was actually active.
    pub fn end(&mut self, source: InputSource) -> bool {
        if !self.profile.accepts(source) {
            return false;
        }
        std::mem::replace(&mut self.is_dragging, false)
    }

    /// End the session whatever input started it, e.g. when the element goes away.
    pub fn cancel(&mut self) -> bool {
        std::mem::replace(&mut self.is_dragging, false)
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DragProfile::FULL)
    }
}
