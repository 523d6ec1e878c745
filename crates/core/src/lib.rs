//! Core types for termshell.
//!
//! This crate provides the terminal event loop primitives and the
//! pointer event model shared by the resize controller and the shell.

pub mod event;
pub mod pointer;

pub use event::{Event, EventHandler};
pub use pointer::{PointerEvent, PointerKind};
