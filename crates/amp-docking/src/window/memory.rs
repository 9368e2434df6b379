//! In-memory platform implementations
//!
//! Used by the test suite and by hosts that drive the engine without a real
//! window system (layout previews, headless tools).

use std::cell::{Cell, RefCell};

use super::{PlatformWindow, Screen};
use crate::math::Rect;

type FrameHook = Box<dyn Fn(Rect)>;

/// In-memory window that records how often its frame was written
pub struct MemoryWindow {
    frame: Cell<Rect>,
    visible: Cell<bool>,
    frame_writes: Cell<usize>,
    animated_writes: Cell<usize>,
    on_frame_change: RefCell<Option<FrameHook>>,
}

impl MemoryWindow {
    /// Create a visible window with the given frame
    pub fn new(frame: Rect) -> Self {
        Self {
            frame: Cell::new(frame),
            visible: Cell::new(true),
            frame_writes: Cell::new(0),
            animated_writes: Cell::new(0),
            on_frame_change: RefCell::new(None),
        }
    }

    /// Move the window as the user (or window server) would.
    ///
    /// Does not count as a frame write and does not fire the hook.
    pub fn move_to(&self, frame: Rect) {
        self.frame.set(frame);
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Number of `set_frame` calls received
    pub fn frame_writes(&self) -> usize {
        self.frame_writes.get()
    }

    /// Number of `set_frame` calls that asked for animation
    pub fn animated_writes(&self) -> usize {
        self.animated_writes.get()
    }

    pub fn reset_counters(&self) {
        self.frame_writes.set(0);
        self.animated_writes.set(0);
    }

    /// Install a callback fired after every `set_frame`, mimicking the
    /// move notification a real window server would send.
    pub fn on_frame_change(&self, hook: impl Fn(Rect) + 'static) {
        *self.on_frame_change.borrow_mut() = Some(Box::new(hook));
    }
}

impl PlatformWindow for MemoryWindow {
    fn frame(&self) -> Rect {
        self.frame.get()
    }

    fn set_frame(&self, frame: Rect, animate: bool) {
        self.frame.set(frame);
        self.frame_writes.set(self.frame_writes.get() + 1);
        if animate {
            self.animated_writes.set(self.animated_writes.get() + 1);
        }
        if let Some(hook) = self.on_frame_change.borrow().as_ref() {
            hook(frame);
        }
    }

    fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// In-memory display
pub struct MemoryScreen {
    bounds: Cell<Rect>,
}

impl MemoryScreen {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Cell::new(bounds),
        }
    }

    /// Simulate a resolution change or display detach
    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }
}

impl Screen for MemoryScreen {
    fn visible_bounds(&self) -> Rect {
        self.bounds.get()
    }
}
