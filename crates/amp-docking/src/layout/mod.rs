//! Layout transforms
//!
//! Planners that compute where windows should go for the "double size"
//! and "snap to default" commands. They are pure: the engine reads the
//! current frames, asks for a plan, and applies it.

mod default;
mod double_size;

pub use default::{centered_main_frame, plan_default_layout};
pub use double_size::plan_double_size;

use crate::math::Rect;
use crate::window::{ManagedWindow, WindowId, WindowRole};

/// Frames to apply, in application order
pub type LayoutPlan = Vec<(WindowId, Rect)>;

/// Order in which dockable windows hang below the main window
pub const STACKING_ORDER: [WindowRole; 2] = [WindowRole::Equalizer, WindowRole::Playlist];

fn find_role(windows: &[ManagedWindow], role: WindowRole) -> Option<&ManagedWindow> {
    windows.iter().find(|w| w.role == role)
}

/// Frame of height `height` directly below `anchor`, matching its width
fn below(anchor: &Rect, height: f32) -> Rect {
    Rect::new(anchor.x, anchor.bottom() - height, anchor.width, height)
}
