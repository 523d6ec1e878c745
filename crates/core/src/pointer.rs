//! Pointer events for window-level gesture tracking.
//!
//! A `PointerEvent` is the primary-button subset of a crossterm
//! `MouseEvent`: press, motion and release, with cell coordinates.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Pointer moved (with or without the button held)
    Move,
    /// Primary button released
    Up,
}

/// Primary pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Column (x) in the terminal viewport
    pub column: u16,
    /// Row (y) in the terminal viewport
    pub row: u16,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, column: u16, row: u16) -> Self {
        Self { kind, column, row }
    }

    /// Convert a crossterm mouse event.
    ///
    /// Returns `None` for scroll events and non-primary buttons.
    pub fn from_mouse(mouse: MouseEvent) -> Option<Self> {
        let kind = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerKind::Move,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
            _ => return None,
        };
        Some(Self::new(kind, mouse.column, mouse.row))
    }

    pub fn position(&self) -> Position {
        Position::new(self.column, self.row)
    }

    /// Check whether the event lies inside `area`.
    pub fn is_inside(&self, area: Rect) -> bool {
        area.contains(self.position())
    }
}
