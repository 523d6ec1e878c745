//! Drag gesture state machine for one resizable panel.
//!
//! ```text
//! Idle --(Down on handle)--> Dragging --(Up | cancel | drop)--> Idle
//!                              |  ^
//!                              +--+ Move: re-measure, clamp, notify
//! ```
//!
//! Entering `Dragging` attaches one `Move` and one `Up` listener to the
//! [`PointerSource`]; the two subscriptions live inside the gesture, so
//! every way out of `Dragging` releases them together.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use ratatui::layout::Rect;
use termshell_core::{PointerEvent, PointerKind};
use termshell_logger as logger;

use crate::{PanelLayout, PointerSource, ResizeConfig, Subscription, Surface};

/// Size-changed observer. At most one per controller.
pub type ResizeCallback = Box<dyn FnMut(u16)>;

/// Gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
}

/// Snapshot of the controller's mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeState {
    pub current_size: u16,
    pub dragging: bool,
}

/// Listeners held for the duration of one drag.
struct Gesture {
    _moves: Subscription,
    _ups: Subscription,
}

struct Inner {
    config: ResizeConfig,
    surface: Rc<dyn Surface>,
    current_size: u16,
    gesture: Option<Gesture>,
    on_resize: Option<ResizeCallback>,
    /// Bumped whenever the callback slot is set or cleared
    callback_generation: u64,
}

impl Inner {
    fn pointer_moved(inner: &Rc<RefCell<Inner>>, event: &PointerEvent) {
        let (surface, config) = {
            let state = inner.borrow();
            if state.gesture.is_none() {
                return;
            }
            (Rc::clone(&state.surface), state.config)
        };

        // No borrow held: the surface may call back into the controller
        let Some(rect) = surface.bounding_rect() else {
            // Not laid out: skip this event
            return;
        };
        let size = config.clamp(config.axis.offset(event.column, event.row, rect));

        {
            let mut state = inner.borrow_mut();
            if state.gesture.is_none() {
                return;
            }
            state.current_size = size;
        }
        Self::notify(inner, size);
    }

    fn pointer_released(inner: &Rc<RefCell<Inner>>) {
        let gesture = inner.borrow_mut().gesture.take();
        if gesture.is_some() {
            logger::debug(format!(
                "Resize gesture finished at {}",
                inner.borrow().current_size
            ));
        }
        drop(gesture);
    }

    /// Run the callback without holding the state borrow, so it may query
    /// the controller. A callback that replaces or clears itself is not
    /// put back.
    fn notify(inner: &Rc<RefCell<Inner>>, size: u16) {
        let (callback, generation) = {
            let mut state = inner.borrow_mut();
            (state.on_resize.take(), state.callback_generation)
        };
        if let Some(mut callback) = callback {
            callback(size);
            let mut state = inner.borrow_mut();
            if state.callback_generation == generation {
                state.on_resize = Some(callback);
            }
        }
    }
}

/// Turns a drag on a panel handle into a clamped size along one axis.
pub struct ResizeController {
    inner: Rc<RefCell<Inner>>,
    source: PointerSource,
}

impl ResizeController {
    /// Create an idle controller sized at `config.initial_size`.
    ///
    /// `surface` is measured on every move while dragging; `source` is the
    /// window-level event source the gesture listeners attach to.
    pub fn new(
        config: ResizeConfig,
        surface: impl Surface + 'static,
        source: PointerSource,
    ) -> Self {
        if !config.is_consistent() {
            logger::warn(format!(
                "Resize bounds out of order: initial={} min={} max={}",
                config.initial_size, config.min_size, config.max_size
            ));
        }

        Self {
            inner: Rc::new(RefCell::new(Inner {
                config,
                surface: Rc::new(surface),
                current_size: config.initial_size,
                gesture: None,
                on_resize: None,
                callback_generation: 0,
            })),
            source,
        }
    }

    /// Set the size-changed callback, replacing any previous one.
    pub fn on_resize(&self, callback: impl FnMut(u16) + 'static) {
        let mut inner = self.inner.borrow_mut();
        inner.on_resize = Some(Box::new(callback));
        inner.callback_generation += 1;
    }

    pub fn clear_on_resize(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.on_resize = None;
        inner.callback_generation += 1;
    }

    pub fn config(&self) -> ResizeConfig {
        self.inner.borrow().config
    }

    /// Current size in cells.
    pub fn size(&self) -> u16 {
        self.inner.borrow().current_size
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().gesture.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.is_dragging() {
            Phase::Dragging
        } else {
            Phase::Idle
        }
    }

    pub fn state(&self) -> ResizeState {
        let inner = self.inner.borrow();
        ResizeState {
            current_size: inner.current_size,
            dragging: inner.gesture.is_some(),
        }
    }

    pub fn source(&self) -> &PointerSource {
        &self.source
    }

    /// Split `area` for the current size.
    pub fn layout(&self, area: Rect) -> PanelLayout {
        let inner = self.inner.borrow();
        inner.config.axis.split(area, inner.current_size)
    }

    /// Where the handle sits inside `area` for the current size.
    pub fn handle_rect(&self, area: Rect) -> Rect {
        self.layout(area).handle
    }

    /// Offer a pointer event scoped to the handle.
    ///
    /// Arms the controller when `event` is a `Down` inside `handle` and no
    /// gesture is in progress. Returns whether a gesture started.
    pub fn pointer_down(&self, event: &PointerEvent, handle: Rect) -> bool {
        if event.kind != PointerKind::Down || !event.is_inside(handle) {
            return false;
        }
        if self.is_dragging() {
            return false;
        }

        let weak = Rc::downgrade(&self.inner);
        let moves = self.source.attach(PointerKind::Move, move_listener(weak.clone()));
        let ups = self.source.attach(PointerKind::Up, up_listener(weak));

        let mut inner = self.inner.borrow_mut();
        inner.gesture = Some(Gesture {
            _moves: moves,
            _ups: ups,
        });
        logger::debug(format!(
            "Resize gesture started at {} ({:?})",
            inner.current_size, inner.config.axis
        ));
        true
    }

    /// Abandon the current gesture without a pointer release.
    ///
    /// Listeners are detached and the size stays where the last move left
    /// it. Returns whether a gesture was in progress.
    pub fn cancel(&self) -> bool {
        let gesture = self.inner.borrow_mut().gesture.take();
        let cancelled = gesture.is_some();
        drop(gesture);
        if cancelled {
            logger::debug(format!("Resize gesture cancelled at {}", self.size()));
        }
        cancelled
    }

    /// Step the size by `delta` cells from the keyboard.
    ///
    /// Clamped like pointer input. Ignored while dragging. The callback is
    /// reserved for pointer moves, so the new size is only returned.
    pub fn nudge(&self, delta: i32) -> u16 {
        let mut inner = self.inner.borrow_mut();
        if inner.gesture.is_none() {
            let raw = i32::from(inner.current_size).saturating_add(delta);
            inner.current_size = inner.config.clamp(raw);
        }
        inner.current_size
    }
}

fn move_listener(inner: Weak<RefCell<Inner>>) -> impl Fn(&PointerEvent) {
    move |event| {
        if let Some(inner) = inner.upgrade() {
            Inner::pointer_moved(&inner, event);
        }
    }
}

fn up_listener(inner: Weak<RefCell<Inner>>) -> impl Fn(&PointerEvent) {
    move |_| {
        if let Some(inner) = inner.upgrade() {
            Inner::pointer_released(&inner);
        }
    }
}

impl Drop for ResizeController {
    fn drop(&mut self) {
        let gesture = match self.inner.try_borrow_mut() {
            Ok(mut inner) => inner.gesture.take(),
            Err(_) => None,
        };
        if gesture.is_some() {
            logger::debug("Resize controller dropped mid-gesture");
        }
    }
}

impl fmt::Debug for ResizeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ResizeController")
            .field("config", &inner.config)
            .field("current_size", &inner.current_size)
            .field("dragging", &inner.gesture.is_some())
            .field("has_callback", &inner.on_resize.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Axis, SurfaceHandle};
    use std::cell::RefCell;

    fn down(column: u16, row: u16) -> PointerEvent {
        PointerEvent::new(PointerKind::Down, column, row)
    }

    fn moved(column: u16, row: u16) -> PointerEvent {
        PointerEvent::new(PointerKind::Move, column, row)
    }

    fn up(column: u16, row: u16) -> PointerEvent {
        PointerEvent::new(PointerKind::Up, column, row)
    }

    /// Horizontal 200/100/400 panel whose surface starts at column 50.
    fn sidebar() -> (ResizeController, PointerSource, Rc<RefCell<Vec<u16>>>) {
        let source = PointerSource::new();
        let controller = ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 200, 100, 400),
            Rect::new(50, 0, 600, 40),
            source.clone(),
        );
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reported);
        controller.on_resize(move |size| sink.borrow_mut().push(size));
        (controller, source, reported)
    }

    /// Handle of `controller` inside the 600x40 area at column 50.
    fn handle(controller: &ResizeController) -> Rect {
        controller.handle_rect(Rect::new(50, 0, 600, 40))
    }

    /// Route an event the way the shell does: handle first, then window.
    fn deliver(controller: &ResizeController, source: &PointerSource, event: PointerEvent) {
        controller.pointer_down(&event, handle(controller));
        source.dispatch(&event);
    }

    #[test]
    fn test_initial_state() {
        let (controller, source, reported) = sidebar();
        assert_eq!(
            controller.state(),
            ResizeState {
                current_size: 200,
                dragging: false
            }
        );
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(source.listener_count(), 0);
        assert!(reported.borrow().is_empty());
    }

    #[test]
    fn test_drag_scenario() {
        let (controller, source, reported) = sidebar();
        assert_eq!(handle(&controller), Rect::new(250, 0, 1, 40));

        assert!(controller.pointer_down(&down(250, 10), handle(&controller)));
        assert_eq!(controller.phase(), Phase::Dragging);

        source.dispatch(&moved(500, 10));
        assert_eq!(controller.size(), 400);

        source.dispatch(&moved(120, 10));
        assert_eq!(controller.size(), 100);

        source.dispatch(&up(120, 10));
        assert_eq!(controller.phase(), Phase::Idle);

        source.dispatch(&moved(300, 10));
        assert_eq!(controller.size(), 100);
        assert_eq!(*reported.borrow(), vec![400, 100]);
    }

    #[test]
    fn test_size_always_within_bounds() {
        let (controller, source, reported) = sidebar();
        deliver(&controller, &source, down(250, 3));

        for column in (0..=700).step_by(7) {
            source.dispatch(&moved(column, 3));
            let size = controller.size();
            assert!((100..=400).contains(&size), "size {} out of bounds", size);
        }
        assert!(reported.borrow().iter().all(|size| (100..=400).contains(size)));
    }

    #[test]
    fn test_repeated_move_yields_same_size() {
        let (controller, source, reported) = sidebar();
        deliver(&controller, &source, down(250, 3));

        source.dispatch(&moved(310, 3));
        let first = controller.size();
        source.dispatch(&moved(310, 3));

        assert_eq!(first, 260);
        assert_eq!(controller.size(), first);
        // Unchanged values are still reported
        assert_eq!(*reported.borrow(), vec![260, 260]);
    }

    #[test]
    fn test_listeners_released_on_pointer_up() {
        let (controller, source, _) = sidebar();

        deliver(&controller, &source, down(250, 3));
        assert_eq!(source.listener_count_for(PointerKind::Move), 1);
        assert_eq!(source.listener_count_for(PointerKind::Up), 1);

        deliver(&controller, &source, moved(260, 3));
        deliver(&controller, &source, up(260, 3));

        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.attach_count(), 2);
        assert_eq!(source.attach_count(), source.detach_count());
    }

    #[test]
    fn test_listeners_released_on_drop_mid_gesture() {
        let (controller, source, _) = sidebar();
        deliver(&controller, &source, down(250, 3));
        deliver(&controller, &source, moved(260, 3));
        assert_eq!(source.listener_count(), 2);

        drop(controller);

        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.attach_count(), source.detach_count());
        // Events after teardown reach nobody
        assert_eq!(source.dispatch(&moved(300, 3)), 0);
        assert_eq!(source.dispatch(&up(300, 3)), 0);
    }

    #[test]
    fn test_repeated_mount_cycles_do_not_leak() {
        let source = PointerSource::new();
        let surface = SurfaceHandle::new();
        surface.set_rect(Rect::new(0, 0, 80, 24));

        for cycle in 0..20u16 {
            let controller = ResizeController::new(
                ResizeConfig::new(Axis::Horizontal, 30, 10, 60),
                surface.clone(),
                source.clone(),
            );
            let handle = controller.handle_rect(Rect::new(0, 0, 80, 24));
            assert!(controller.pointer_down(&down(handle.x, 1), handle));
            source.dispatch(&moved(20 + cycle, 1));
            if cycle % 2 == 0 {
                source.dispatch(&up(20 + cycle, 1));
            }
        }

        assert_eq!(source.listener_count(), 0);
        assert_eq!(source.attach_count(), 40);
        assert_eq!(source.detach_count(), 40);
    }

    #[test]
    fn test_horizontal_ignores_vertical_motion() {
        let (controller, source, _) = sidebar();
        deliver(&controller, &source, down(250, 3));
        source.dispatch(&moved(280, 3));
        assert_eq!(controller.size(), 230);

        for row in [0, 10, 39, 200] {
            source.dispatch(&moved(280, row));
            assert_eq!(controller.size(), 230);
        }
    }

    #[test]
    fn test_vertical_ignores_horizontal_motion() {
        let source = PointerSource::new();
        let area = Rect::new(0, 5, 80, 30);
        let controller = ResizeController::new(
            ResizeConfig::new(Axis::Vertical, 10, 4, 20),
            area,
            source.clone(),
        );
        let handle = controller.handle_rect(area);
        assert_eq!(handle, Rect::new(0, 15, 80, 1));

        assert!(controller.pointer_down(&down(40, 15), handle));
        source.dispatch(&moved(40, 17));
        assert_eq!(controller.size(), 12);

        for column in [0, 7, 79, 500] {
            source.dispatch(&moved(column, 17));
            assert_eq!(controller.size(), 12);
        }

        source.dispatch(&moved(40, 100));
        assert_eq!(controller.size(), 20);
        source.dispatch(&moved(40, 0));
        assert_eq!(controller.size(), 4);
    }

    #[test]
    fn test_callback_once_per_move_and_never_idle() {
        let (controller, source, reported) = sidebar();

        source.dispatch(&moved(300, 3));
        source.dispatch(&up(300, 3));
        assert!(reported.borrow().is_empty());

        deliver(&controller, &source, down(250, 3));
        for column in [255, 260, 265] {
            source.dispatch(&moved(column, 3));
        }
        source.dispatch(&up(265, 3));
        source.dispatch(&moved(300, 3));

        assert_eq!(*reported.borrow(), vec![205, 210, 215]);
    }

    #[test]
    fn test_down_outside_handle_is_ignored() {
        let (controller, source, reported) = sidebar();

        assert!(!controller.pointer_down(&down(249, 3), handle(&controller)));
        assert!(!controller.pointer_down(&down(251, 3), handle(&controller)));
        assert!(!controller.pointer_down(&down(250, 40), handle(&controller)));
        assert!(!controller.pointer_down(&moved(250, 3), handle(&controller)));
        assert!(!controller.is_dragging());
        assert_eq!(source.listener_count(), 0);

        source.dispatch(&moved(300, 3));
        assert_eq!(controller.size(), 200);
        assert!(reported.borrow().is_empty());
    }

    #[test]
    fn test_rapid_up_down_attaches_one_set() {
        let (controller, source, _) = sidebar();
        let handle = handle(&controller);

        assert!(controller.pointer_down(&down(250, 3), handle));
        source.dispatch(&up(250, 3));
        assert!(controller.pointer_down(&down(250, 3), handle));
        // A second down while dragging does not attach again
        assert!(!controller.pointer_down(&down(250, 3), handle));

        assert_eq!(source.listener_count(), 2);
        assert_eq!(source.attach_count(), 4);
        assert_eq!(source.detach_count(), 2);

        source.dispatch(&up(250, 3));
        assert_eq!(source.attach_count(), source.detach_count());
    }

    #[test]
    fn test_unmeasured_surface_is_noop() {
        let source = PointerSource::new();
        let surface = SurfaceHandle::new();
        let controller = ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 20, 10, 40),
            surface.clone(),
            source.clone(),
        );
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        controller.on_resize(move |_| *counter.borrow_mut() += 1);

        assert!(controller.pointer_down(&down(20, 0), Rect::new(20, 0, 1, 10)));
        source.dispatch(&moved(30, 0));
        assert_eq!(controller.size(), 20);
        assert_eq!(*calls.borrow(), 0);

        surface.set_rect(Rect::new(0, 0, 80, 10));
        source.dispatch(&moved(30, 0));
        assert_eq!(controller.size(), 30);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_surface_is_remeasured_on_every_move() {
        let source = PointerSource::new();
        let surface = SurfaceHandle::new();
        surface.set_rect(Rect::new(0, 0, 80, 10));
        let controller = ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 20, 0, 80),
            surface.clone(),
            source.clone(),
        );

        assert!(controller.pointer_down(&down(20, 0), Rect::new(20, 0, 1, 10)));
        source.dispatch(&moved(30, 0));
        assert_eq!(controller.size(), 30);

        surface.set_rect(Rect::new(10, 0, 70, 10));
        source.dispatch(&moved(30, 0));
        assert_eq!(controller.size(), 20);
    }

    #[test]
    fn test_inverted_bounds_always_min() {
        let source = PointerSource::new();
        let controller = ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 15, 30, 10),
            Rect::new(0, 0, 100, 10),
            source.clone(),
        );
        assert!(controller.pointer_down(&down(15, 0), Rect::new(15, 0, 1, 10)));

        for column in [0, 5, 10, 20, 30, 90] {
            source.dispatch(&moved(column, 0));
            assert_eq!(controller.size(), 30);
        }
    }

    #[test]
    fn test_cancel_keeps_size_and_releases_listeners() {
        let (controller, source, reported) = sidebar();
        deliver(&controller, &source, down(250, 3));
        source.dispatch(&moved(320, 3));

        assert!(controller.cancel());
        assert!(!controller.cancel());
        assert_eq!(controller.size(), 270);
        assert_eq!(source.listener_count(), 0);

        source.dispatch(&moved(400, 3));
        assert_eq!(controller.size(), 270);
        assert_eq!(*reported.borrow(), vec![270]);
    }

    #[test]
    fn test_nudge_clamps_and_is_silent() {
        let (controller, source, reported) = sidebar();

        assert_eq!(controller.nudge(50), 250);
        assert_eq!(controller.nudge(1000), 400);
        assert_eq!(controller.nudge(-1000), 100);
        assert!(reported.borrow().is_empty());

        deliver(&controller, &source, down(150, 3));
        assert_eq!(controller.nudge(10), 100);
    }

    #[test]
    fn test_callback_may_query_controller() {
        let source = PointerSource::new();
        let controller = Rc::new(ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 20, 0, 80),
            Rect::new(0, 0, 80, 10),
            source.clone(),
        ));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&controller);
        let sink = Rc::clone(&seen);
        controller.on_resize(move |size| {
            if let Some(controller) = weak.upgrade() {
                sink.borrow_mut().push((size, controller.size(), controller.is_dragging()));
            }
        });

        assert!(controller.pointer_down(&down(20, 0), Rect::new(20, 0, 1, 10)));
        source.dispatch(&moved(42, 0));
        assert_eq!(*seen.borrow(), vec![(42, 42, true)]);
    }

    #[test]
    fn test_callback_may_clear_itself() {
        let source = PointerSource::new();
        let controller = Rc::new(ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 20, 0, 80),
            Rect::new(0, 0, 80, 10),
            source.clone(),
        ));
        let calls = Rc::new(RefCell::new(0));

        let weak = Rc::downgrade(&controller);
        let sink = Rc::clone(&calls);
        controller.on_resize(move |_| {
            *sink.borrow_mut() += 1;
            if let Some(controller) = weak.upgrade() {
                controller.clear_on_resize();
            }
        });

        assert!(controller.pointer_down(&down(20, 0), Rect::new(20, 0, 1, 10)));
        source.dispatch(&moved(30, 0));
        source.dispatch(&moved(40, 0));

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(controller.size(), 40);
    }

    #[test]
    fn test_callback_may_replace_itself() {
        let source = PointerSource::new();
        let controller = Rc::new(ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 20, 0, 80),
            Rect::new(0, 0, 80, 10),
            source.clone(),
        ));
        let first = Rc::new(RefCell::new(Vec::new()));
        let second = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&controller);
        let first_sink = Rc::clone(&first);
        let second_sink = Rc::clone(&second);
        controller.on_resize(move |size| {
            first_sink.borrow_mut().push(size);
            if let Some(controller) = weak.upgrade() {
                let sink = Rc::clone(&second_sink);
                controller.on_resize(move |size| sink.borrow_mut().push(size));
            }
        });

        assert!(controller.pointer_down(&down(20, 0), Rect::new(20, 0, 1, 10)));
        source.dispatch(&moved(30, 0));
        source.dispatch(&moved(40, 0));
        source.dispatch(&moved(50, 0));

        assert_eq!(*first.borrow(), vec![30]);
        assert_eq!(*second.borrow(), vec![40, 50]);
    }

    /// Surface that reads the controller's size each time it is measured.
    struct SizeReadingSurface {
        controller: Rc<RefCell<Weak<ResizeController>>>,
        sizes: Rc<RefCell<Vec<u16>>>,
    }

    impl Surface for SizeReadingSurface {
        fn bounding_rect(&self) -> Option<Rect> {
            if let Some(controller) = self.controller.borrow().upgrade() {
                self.sizes.borrow_mut().push(controller.size());
            }
            Some(Rect::new(0, 0, 80, 10))
        }
    }

    #[test]
    fn test_surface_may_query_controller() {
        let source = PointerSource::new();
        let slot = Rc::new(RefCell::new(Weak::new()));
        let sizes = Rc::new(RefCell::new(Vec::new()));
        let surface = SizeReadingSurface {
            controller: Rc::clone(&slot),
            sizes: Rc::clone(&sizes),
        };
        let controller = Rc::new(ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 20, 0, 80),
            surface,
            source.clone(),
        ));
        *slot.borrow_mut() = Rc::downgrade(&controller);

        assert!(controller.pointer_down(&down(20, 0), Rect::new(20, 0, 1, 10)));
        source.dispatch(&moved(30, 0));
        source.dispatch(&moved(45, 0));

        assert_eq!(*sizes.borrow(), vec![20, 30]);
        assert_eq!(controller.size(), 45);
    }

    #[test]
    fn test_replacing_and_clearing_callback() {
        let (controller, source, reported) = sidebar();
        let replacement = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&replacement);
        controller.on_resize(move |size| sink.borrow_mut().push(size));

        deliver(&controller, &source, down(250, 3));
        source.dispatch(&moved(260, 3));
        controller.clear_on_resize();
        source.dispatch(&moved(270, 3));

        assert!(reported.borrow().is_empty());
        assert_eq!(*replacement.borrow(), vec![210]);
        assert_eq!(controller.size(), 220);
    }

    #[test]
    fn test_controllers_on_shared_source_are_independent() {
        let source = PointerSource::new();
        let area = Rect::new(0, 0, 100, 40);
        let sidebar = ResizeController::new(
            ResizeConfig::new(Axis::Horizontal, 30, 10, 60),
            area,
            source.clone(),
        );
        let terminal = ResizeController::new(
            ResizeConfig::new(Axis::Vertical, 10, 4, 30),
            area,
            source.clone(),
        );

        assert!(sidebar.pointer_down(&down(30, 5), sidebar.handle_rect(area)));
        source.dispatch(&moved(45, 20));
        assert_eq!(sidebar.size(), 45);
        assert_eq!(terminal.size(), 10);

        assert!(terminal.pointer_down(&down(50, 10), terminal.handle_rect(area)));
        drop(sidebar);
        assert_eq!(source.listener_count(), 2);

        source.dispatch(&moved(50, 25));
        assert_eq!(terminal.size(), 25);
        source.dispatch(&up(50, 25));
        assert_eq!(source.listener_count(), 0);
    }
}
