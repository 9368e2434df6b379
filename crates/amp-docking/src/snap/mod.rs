//! Snap engine
//!
//! Given a dragged window and the origin the user is asking for, computes
//! the origin it should actually take: pulled onto a neighbouring window's
//! edge, lined up with it, or pushed against the screen edge. The
//! horizontal axis is resolved first and the vertical axis is resolved
//! against the horizontally snapped frame, since moving along one axis
//! changes which windows are in range on the other.
//!
//! This is a pure function of the frames passed in. It never touches the
//! platform, which is what lets the drag session call it from inside a
//! move notification without feeding back into itself.

mod candidate;

pub use candidate::{AxisCandidates, SnapCandidate, SnapKind};

use crate::config::DockingConfig;
use crate::math::{Axis, Rect, Size, Vec2};
use crate::window::{ManagedWindow, WindowId};

/// Upper bound on snap passes before settling on the current origin
const MAX_SNAP_PASSES: usize = 64;

/// Compute the snapped origin for `subject` if it were moved to `candidate`.
///
/// Snap targets are the visible dockable windows in `windows`, minus the
/// subject itself and anything in `excluded` (the windows travelling with
/// it), plus the screen's visible frame unless `screen` is degenerate.
///
/// Passes are repeated until the origin stops moving, so the result is a
/// fixed point: snapping it again returns it unchanged. If the passes cycle
/// between origins, the smallest origin of the cycle is returned, which is
/// also where snapping any member of that cycle ends up.
pub fn compute_snapped_origin(
    subject: &ManagedWindow,
    candidate: Vec2,
    excluded: &[WindowId],
    windows: &[ManagedWindow],
    screen: Rect,
    config: &DockingConfig,
) -> Vec2 {
    let size = subject.frame.size();
    let targets: Vec<Rect> = windows
        .iter()
        .filter(|w| w.id != subject.id && w.visible && w.is_dockable())
        .filter(|w| !excluded.contains(&w.id))
        .map(|w| w.frame)
        .collect();
    let screen = (!screen.is_degenerate()).then_some(screen);

    let mut visited = vec![candidate];
    let mut current = candidate;
    for _ in 0..MAX_SNAP_PASSES {
        let next = snap_pass(current, size, &targets, screen.as_ref(), config);
        if let Some(start) = visited.iter().position(|p| *p == next) {
            let cycle = &visited[start..];
            if cycle.len() > 1 {
                tracing::trace!(len = cycle.len(), "snap passes cycled");
            }
            return settle(cycle);
        }
        visited.push(next);
        current = next;
    }
    current
}

/// One pass over both axes, horizontal first
fn snap_pass(
    origin: Vec2,
    size: Size,
    targets: &[Rect],
    screen: Option<&Rect>,
    config: &DockingConfig,
) -> Vec2 {
    let mut snapped = origin;
    for axis in [Axis::Horizontal, Axis::Vertical] {
        let moving = Rect::from_pos_size(snapped, size);
        if let Some(best) = snap_axis(axis, &moving, targets, screen, config) {
            tracing::trace!(?axis, kind = ?best.kind, origin = best.origin, "snap");
            snapped = snapped.with_along(axis, best.origin);
        }
    }
    snapped
}

/// Smallest origin of a cycle, ordered by x then y
fn settle(cycle: &[Vec2]) -> Vec2 {
    cycle
        .iter()
        .copied()
        .min_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
        .unwrap_or_default()
}

/// Best snap along one axis for the `moving` rectangle, if any
pub fn snap_axis(
    axis: Axis,
    moving: &Rect,
    targets: &[Rect],
    screen: Option<&Rect>,
    config: &DockingConfig,
) -> Option<SnapCandidate> {
    let threshold = config.snap_threshold;
    let mut candidates = AxisCandidates::default();
    for target in targets {
        candidates.offer_window(axis, moving, target, threshold);
    }
    if let Some(screen) = screen {
        candidates.offer_screen(axis, moving, screen, threshold);
    }
    candidates.resolve(config.alignment_preference)
}
