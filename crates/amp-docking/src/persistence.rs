//! Persisted frame overrides
//!
//! The host remembers each role's last frame as a `{{x, y}, {w, h}}`
//! string. The engine reads those strings when a window is first shown
//! and clears them when the user asks for the default layout; it never
//! writes them.

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::window::WindowRole;

/// Storage for per-role frame overrides
pub trait FrameStore {
    /// Persisted frame string for `role`, if any
    fn load_frame(&self, role: WindowRole) -> Option<String>;

    /// Forget the override for `role`
    fn clear_frame(&self, role: WindowRole);
}

/// In-memory frame store
#[derive(Default)]
pub struct MemoryFrameStore {
    frames: RefCell<BTreeMap<WindowRole, String>>,
}

impl MemoryFrameStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame string, as the host would when a window moves
    pub fn store_frame(&self, role: WindowRole, frame: impl Into<String>) {
        self.frames.borrow_mut().insert(role, frame.into());
    }

    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.borrow().is_empty()
    }
}

impl FrameStore for MemoryFrameStore {
    fn load_frame(&self, role: WindowRole) -> Option<String> {
        self.frames.borrow().get(&role).cloned()
    }

    fn clear_frame(&self, role: WindowRole) {
        self.frames.borrow_mut().remove(&role);
    }
}
