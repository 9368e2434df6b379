//! Drag gesture state
//!
//! The session records what a single mouse drag started from; the guard
//! marks the engine's own frame mutations so the notifications they cause
//! are not mistaken for user input.

mod drag;
mod guard;

pub use drag::{DockedWindow, DragSession};
pub(crate) use guard::ReentrancyGuard;
