//! Measurement of the surface being resized.

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;

/// Something whose on-screen rectangle can be queried.
///
/// `None` means the surface has not been laid out yet.
pub trait Surface {
    fn bounding_rect(&self) -> Option<Rect>;
}

impl Surface for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Surface for Option<Rect> {
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}

/// Shared rect slot filled in by the render pass.
///
/// Clones share the same slot, so the widget that draws the panel and the
/// controller that measures it see the same value.
#[derive(Debug, Clone, Default)]
pub struct SurfaceHandle {
    rect: Rc<Cell<Option<Rect>>>,
}

impl SurfaceHandle {
    /// Create an unmeasured handle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_rect(&self, rect: Rect) {
        self.rect.set(Some(rect));
    }

    /// Mark the surface as not laid out (e.g. hidden this frame).
    pub fn clear(&self) {
        self.rect.set(None);
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect.get()
    }
}

impl Surface for SurfaceHandle {
    fn bounding_rect(&self) -> Option<Rect> {
        self.rect()
    }
}
