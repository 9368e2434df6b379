//! Core geometry types for window placement
//!
//! Coordinates are y-up: the screen origin sits at the bottom-left corner,
//! a rectangle's `y` is its bottom edge and `top()` is `y + height`.

mod axis;
mod rect;
mod size;
mod vec2;

pub use axis::Axis;
pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;

/// Whether the closed ranges `[a0, a1]` and `[b0, b1]` overlap or are
/// separated by a gap of at most `tolerance`.
#[inline]
pub fn ranges_close(a0: f32, a1: f32, b0: f32, b1: f32, tolerance: f32) -> bool {
    a0 <= b1 + tolerance && b0 <= a1 + tolerance
}
