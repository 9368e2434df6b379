//! Seams to the platform window layer
//!
//! The engine never owns windows. It reads geometry through these traits
//! and requests frame changes through them; the platform keeps the actual
//! state, so every method takes `&self`.

use crate::math::Rect;

/// A window handle owned by the platform window layer
pub trait PlatformWindow {
    /// Current frame, read fresh from the platform
    fn frame(&self) -> Rect;

    /// Request a new frame
    ///
    /// Implementations may synchronously emit a move notification that
    /// re-enters the engine.
    fn set_frame(&self, frame: Rect, animate: bool);

    /// Whether the window is currently shown
    fn is_visible(&self) -> bool;
}

/// The display the windows live on
pub trait Screen {
    /// Usable area (excluding menu bar and dock).
    ///
    /// Zero or negative size means no display is attached.
    fn visible_bounds(&self) -> Rect;
}
