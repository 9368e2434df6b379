//! Per-axis snap candidates

use crate::math::{Axis, Rect};

/// Where a snap candidate comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapKind {
    /// Subject edge meets the opposite edge of another window
    EdgeToEdge,
    /// Subject edge lines up with the same edge of another window
    Alignment,
    /// Subject edge meets the screen's visible frame
    ScreenEdge,
}

/// A coordinate the subject's origin could be moved to along one axis
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapCandidate {
    pub kind: SnapKind,
    /// Origin coordinate along the axis after snapping
    pub origin: f32,
    /// How far the subject's edge is from the target edge
    pub distance: f32,
}

/// Closest eligible candidate of each kind along one axis
#[derive(Clone, Copy, Debug, Default)]
pub struct AxisCandidates {
    edge: Option<SnapCandidate>,
    alignment: Option<SnapCandidate>,
    screen: Option<SnapCandidate>,
}

impl AxisCandidates {
    /// Record a candidate if it is within `threshold` and closer than the
    /// current best of its kind. Ties keep the earlier candidate.
    fn offer(&mut self, candidate: SnapCandidate, threshold: f32) {
        if candidate.distance.is_nan() || candidate.distance >= threshold {
            return;
        }
        let slot = match candidate.kind {
            SnapKind::EdgeToEdge => &mut self.edge,
            SnapKind::Alignment => &mut self.alignment,
            SnapKind::ScreenEdge => &mut self.screen,
        };
        if slot.map_or(true, |best| candidate.distance < best.distance) {
            *slot = Some(candidate);
        }
    }

    /// Collect candidates against another window's frame.
    ///
    /// `subject` is the candidate rectangle, `threshold` doubles as the
    /// cross-axis closeness tolerance.
    pub fn offer_window(&mut self, axis: Axis, subject: &Rect, target: &Rect, threshold: f32) {
        if !subject.close_across(target, axis, threshold) {
            return;
        }
        let (s0, s1) = subject.span(axis);
        let (t0, t1) = target.span(axis);
        let len = subject.extent(axis);

        self.offer(edge(t1, (s0 - t1).abs()), threshold);
        self.offer(edge(t0 - len, (s1 - t0).abs()), threshold);
        self.offer(align(t0, (s0 - t0).abs()), threshold);
        self.offer(align(t1 - len, (s1 - t1).abs()), threshold);
    }

    /// Collect candidates against the screen's visible frame
    pub fn offer_screen(&mut self, axis: Axis, subject: &Rect, screen: &Rect, threshold: f32) {
        let (s0, s1) = subject.span(axis);
        let (b0, b1) = screen.span(axis);
        let len = subject.extent(axis);

        self.offer(screen_edge(b0, (s0 - b0).abs()), threshold);
        self.offer(screen_edge(b1 - len, (s1 - b1).abs()), threshold);
    }

    /// Pick the winning candidate.
    ///
    /// Alignment beats edge-to-edge only when its distance is below
    /// `alignment_preference` times the edge-to-edge distance. The screen
    /// wins only when strictly closer than the best window candidate.
    pub fn resolve(&self, alignment_preference: f32) -> Option<SnapCandidate> {
        let window_best = match (self.edge, self.alignment) {
            (Some(e), Some(a)) if a.distance < e.distance * alignment_preference => Some(a),
            (Some(e), _) => Some(e),
            (None, a) => a,
        };
        match (window_best, self.screen) {
            (Some(w), Some(s)) if s.distance < w.distance => Some(s),
            (Some(w), _) => Some(w),
            (None, s) => s,
        }
    }
}

fn edge(origin: f32, distance: f32) -> SnapCandidate {
    SnapCandidate {
        kind: SnapKind::EdgeToEdge,
        origin,
        distance,
    }
}

fn align(origin: f32, distance: f32) -> SnapCandidate {
    SnapCandidate {
        kind: SnapKind::Alignment,
        origin,
        distance,
    }
}

fn screen_edge(origin: f32, distance: f32) -> SnapCandidate {
    SnapCandidate {
        kind: SnapKind::ScreenEdge,
        origin,
        distance,
    }
}
