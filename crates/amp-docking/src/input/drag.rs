//! Drag session for a single move gesture

use crate::math::Vec2;
use crate::window::WindowId;

/// A window travelling with the drag subject
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockedWindow {
    pub id: WindowId,
    /// Fixed offset from the subject's origin, captured at drag start
    pub offset: Vec2,
}

/// State of one drag gesture, from mouse down to mouse up
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    subject: WindowId,
    start_origin: Vec2,
    title_bar: bool,
    docked: Vec<DockedWindow>,
}

impl DragSession {
    /// Start a session. `docked` holds each travelling window's origin;
    /// offsets are taken relative to `start_origin` once, here.
    pub fn new(
        subject: WindowId,
        start_origin: Vec2,
        title_bar: bool,
        docked: impl IntoIterator<Item = (WindowId, Vec2)>,
    ) -> Self {
        let docked = docked
            .into_iter()
            .map(|(id, origin)| DockedWindow {
                id,
                offset: origin - start_origin,
            })
            .collect();
        Self {
            subject,
            start_origin,
            title_bar,
            docked,
        }
    }

    #[inline]
    pub fn subject(&self) -> WindowId {
        self.subject
    }

    #[inline]
    pub fn start_origin(&self) -> Vec2 {
        self.start_origin
    }

    /// Whether the gesture began on the title bar (and may undock)
    #[inline]
    pub fn is_title_bar_drag(&self) -> bool {
        self.title_bar
    }

    pub fn docked(&self) -> &[DockedWindow] {
        &self.docked
    }

    pub fn docked_ids(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.docked.iter().map(|d| d.id)
    }

    pub fn offset_of(&self, id: WindowId) -> Option<Vec2> {
        self.docked.iter().find(|d| d.id == id).map(|d| d.offset)
    }

    pub fn has_docked(&self) -> bool {
        !self.docked.is_empty()
    }

    /// Title-bar drags with company tear loose once the pointer has moved
    /// further than `threshold` from where it started.
    pub fn should_undock(&self, candidate: Vec2, threshold: f32) -> bool {
        self.title_bar
            && self.has_docked()
            && self.start_origin.distance(candidate) > threshold
    }

    /// Drop the docked group; the subject drags alone from here on
    pub fn undock(&mut self) {
        self.docked.clear();
    }
}
