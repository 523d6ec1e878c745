//! Interactive axis-resize controller for termshell panels.
//!
//! A [`ResizeController`] turns a primary-button drag on a panel's handle
//! into a clamped size along one axis:
//! - a `Down` inside the handle arms the controller and attaches one `Move`
//!   and one `Up` listener to the window-level [`PointerSource`]
//! - every `Move` re-measures the [`Surface`] and sets the size to the
//!   pointer's distance from the surface's leading edge, clamped to bounds
//! - the `Up` (or [`ResizeController::cancel`], or dropping the controller)
//!   detaches both listeners
//!
//! [`ResizablePanel`] renders host content into the sized region together
//! with the handle strip.

pub mod axis;
pub mod config;
pub mod controller;
pub mod source;
pub mod surface;
pub mod widget;

pub use axis::{Axis, PanelLayout};
pub use config::ResizeConfig;
pub use controller::{Phase, ResizeCallback, ResizeController, ResizeState};
pub use source::{ListenerId, PointerSource, Subscription};
pub use surface::{Surface, SurfaceHandle};
pub use widget::{HandleStyle, ResizablePanel};
