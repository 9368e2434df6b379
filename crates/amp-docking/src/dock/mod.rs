//! Docking graph
//!
//! Discovers which windows are stuck to a given window and therefore have
//! to move with it. Two windows touch when they sit side by side or are
//! stacked, within the docking threshold.

use std::collections::{HashSet, VecDeque};

use crate::math::{Axis, Rect};
use crate::window::{ManagedWindow, WindowId};

/// Whether two frames are docked to each other.
///
/// True when an edge of one is within `threshold` of the opposite edge of
/// the other along one axis, while their ranges on the other axis overlap
/// or nearly overlap. The relation is symmetric.
pub fn are_touching(a: &Rect, b: &Rect, threshold: f32) -> bool {
    touching_along(Axis::Horizontal, a, b, threshold) || touching_along(Axis::Vertical, a, b, threshold)
}

fn touching_along(axis: Axis, a: &Rect, b: &Rect, threshold: f32) -> bool {
    if !a.close_across(b, axis, threshold) {
        return false;
    }
    let (a0, a1) = a.span(axis);
    let (b0, b1) = b.span(axis);
    (a1 - b0).abs() <= threshold || (b1 - a0).abs() <= threshold
}

/// Transitive set of windows docked to `subject`, in discovery order.
///
/// Non-dockable subjects never drag anything, so the result is empty for
/// them. Non-dockable windows reached by the search are included but the
/// search does not continue through them. Invisible windows are ignored.
pub fn find_docked_windows(
    subject: &ManagedWindow,
    windows: &[ManagedWindow],
    threshold: f32,
) -> Vec<WindowId> {
    if !subject.is_dockable() {
        return Vec::new();
    }

    let candidates: Vec<&ManagedWindow> = windows
        .iter()
        .filter(|w| w.visible && w.id != subject.id)
        .collect();

    let mut found = Vec::new();
    let mut seen: HashSet<WindowId> = HashSet::new();
    seen.insert(subject.id);
    let mut frontier: VecDeque<Rect> = VecDeque::new();
    frontier.push_back(subject.frame);

    while let Some(current) = frontier.pop_front() {
        for window in &candidates {
            if seen.contains(&window.id) || !are_touching(&current, &window.frame, threshold) {
                continue;
            }
            seen.insert(window.id);
            found.push(window.id);
            if window.is_dockable() {
                frontier.push_back(window.frame);
            }
        }
    }

    found
}
