//! Canonical arrangement around the main window

use super::{below, find_role, LayoutPlan, STACKING_ORDER};
use crate::math::Rect;
use crate::window::{ManagedWindow, WindowRole};

/// Main window frame centred in the screen's visible area.
///
/// Falls back to `frame` unchanged when no display is attached.
pub fn centered_main_frame(frame: Rect, screen: Rect) -> Rect {
    if screen.is_degenerate() {
        return frame;
    }
    Rect::new(
        screen.x + (screen.width - frame.width) / 2.0,
        screen.y + (screen.height - frame.height) / 2.0,
        frame.width,
        frame.height,
    )
}

/// Plan the default layout.
///
/// Main is centred; equalizer then playlist hang below it at its width;
/// the browser sits to its right and the visualizer to its left, both
/// top-aligned. Hidden windows are not moved, and a hidden equalizer is
/// skipped when stacking. A hidden main window still anchors the layout.
/// Video windows are left where they are.
pub fn plan_default_layout(windows: &[ManagedWindow], screen: Rect) -> LayoutPlan {
    let Some(main) = find_role(windows, WindowRole::Main) else {
        return Vec::new();
    };

    let main_frame = centered_main_frame(main.frame, screen);
    let mut plan = LayoutPlan::new();
    if main.visible {
        plan.push((main.id, main_frame));
    }

    let mut anchor = main_frame;
    for role in STACKING_ORDER {
        let Some(window) = find_role(windows, role).filter(|w| w.visible) else {
            continue;
        };
        let frame = below(&anchor, window.frame.height);
        plan.push((window.id, frame));
        anchor = frame;
    }

    if let Some(browser) = find_role(windows, WindowRole::Browser).filter(|w| w.visible) {
        let size = browser.frame.size();
        plan.push((
            browser.id,
            Rect::new(main_frame.right(), main_frame.top() - size.height, size.width, size.height),
        ));
    }

    if let Some(vis) = find_role(windows, WindowRole::Visualizer).filter(|w| w.visible) {
        let size = vis.frame.size();
        plan.push((
            vis.id,
            Rect::new(
                main_frame.left() - size.width,
                main_frame.top() - size.height,
                size.width,
                size.height,
            ),
        ));
    }

    plan
}
