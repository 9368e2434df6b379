//! Uniform rescale of the docked stack

use super::{below, find_role, LayoutPlan, STACKING_ORDER};
use crate::config::DockingConfig;
use crate::math::Rect;
use crate::window::{ManagedWindow, WindowId, WindowRole};

/// Plan the frames for switching to `new_scale`.
///
/// `frame_scale` reports the scale each window's current frame was laid
/// out at, so a window that missed an earlier rescale (hidden at the time,
/// or created afterwards) is resized from its own scale rather than the
/// engine's.
///
/// The main window keeps its top edge and grows downward. Visible
/// dockable windows are restacked below it at its new width with their
/// heights scaled; the playlist never drops below `min_playlist_height`
/// at `new_scale`. Non-dockable windows keep their size and their offset
/// from the main window's top-right corner. Nothing is planned unless the
/// main window is visible.
pub fn plan_double_size(
    windows: &[ManagedWindow],
    frame_scale: impl Fn(WindowId) -> f32,
    new_scale: f32,
    config: &DockingConfig,
) -> LayoutPlan {
    let Some(main) = find_role(windows, WindowRole::Main).filter(|w| w.visible) else {
        return Vec::new();
    };
    let ratio = |id: WindowId| new_scale / frame_scale(id);

    let old = main.frame;
    let main_ratio = ratio(main.id);
    let height = old.height * main_ratio;
    let new_main = Rect::new(old.x, old.top() - height, old.width * main_ratio, height);
    let mut plan = vec![(main.id, new_main)];

    let mut anchor = new_main;
    for role in STACKING_ORDER {
        let Some(window) = find_role(windows, role).filter(|w| w.visible) else {
            continue;
        };
        let mut height = window.frame.height * ratio(window.id);
        if role == WindowRole::Playlist {
            height = height.max(config.min_playlist_height * new_scale);
        }
        let frame = below(&anchor, height);
        plan.push((window.id, frame));
        anchor = frame;
    }

    let old_corner = old.top_right();
    let new_corner = new_main.top_right();
    for window in windows.iter().filter(|w| w.visible && !w.is_dockable()) {
        let offset = window.frame.origin() - old_corner;
        plan.push((window.id, window.frame.with_origin(new_corner + offset)));
    }

    plan
}
