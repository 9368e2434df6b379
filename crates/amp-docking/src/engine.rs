//! Docking engine coordinating all components

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::config::DockingConfig;
use crate::dock::find_docked_windows;
use crate::error::{DockError, DockResult};
use crate::input::{DockedWindow, DragSession, ReentrancyGuard};
use crate::layout::{plan_default_layout, plan_double_size};
use crate::math::{Rect, Vec2};
use crate::persistence::FrameStore;
use crate::snap::compute_snapped_origin;
use crate::window::{PlatformWindow, Screen, WindowId, WindowRegistry, WindowRole};

const NORMAL_SCALE: f32 = 1.0;
const DOUBLE_SCALE: f32 = 2.0;

/// Docking engine for the player's windows
///
/// This is the entry point the platform window layer talks to:
/// - Window registry (which windows exist and what role they play)
/// - Drag session (what moves together during one gesture)
/// - Layout commands (double size, snap to default)
///
/// One instance is created per application and shared by reference with
/// the controllers that forward window events. Every operation takes
/// `&self`: moving a docked window makes the platform send another move
/// notification straight back into the engine, and those re-entrant calls
/// must be answered while the outer call is still running. They are passed
/// through untouched while either guard flag is set.
pub struct DockingEngine {
    config: DockingConfig,
    registry: WindowRegistry,
    screen: Rc<dyn Screen>,
    frame_store: Option<Rc<dyn FrameStore>>,
    session: RefCell<Option<DragSession>>,
    /// Set while the engine applies a frame it computed itself
    is_snapping: Cell<bool>,
    /// Set while the engine moves the windows docked to a drag subject
    is_moving_docked: Cell<bool>,
    scale: Cell<f32>,
    /// Scale each dockable window's frame was last laid out at; windows
    /// missing here are at normal scale
    frame_scales: RefCell<BTreeMap<WindowId, f32>>,
}

impl DockingEngine {
    /// Create an engine for windows on `screen`
    pub fn new(config: DockingConfig, screen: Rc<dyn Screen>) -> Self {
        Self {
            config,
            registry: WindowRegistry::new(),
            screen,
            frame_store: None,
            session: RefCell::new(None),
            is_snapping: Cell::new(false),
            is_moving_docked: Cell::new(false),
            scale: Cell::new(NORMAL_SCALE),
            frame_scales: RefCell::new(BTreeMap::new()),
        }
    }

    /// Attach the store holding persisted frame overrides
    pub fn with_frame_store(mut self, store: Rc<dyn FrameStore>) -> Self {
        self.frame_store = Some(store);
        self
    }

    /// Thresholds and layout options in effect
    pub fn config(&self) -> &DockingConfig {
        &self.config
    }

    /// Managed windows, for read-only queries
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Start managing a window
    pub fn register_window(
        &self,
        id: WindowId,
        role: WindowRole,
        handle: Rc<dyn PlatformWindow>,
    ) -> DockResult<()> {
        self.registry.register(id, role, handle)?;
        debug!(id, %role, "window registered");
        Ok(())
    }

    /// Stop managing a window. A drag of that window ends with it.
    pub fn unregister_window(&self, id: WindowId) -> bool {
        let removed = self.registry.unregister(id);
        self.frame_scales.borrow_mut().remove(&id);
        let mut session = self.session.borrow_mut();
        if session.as_ref().is_some_and(|s| s.subject() == id) {
            debug!(id, "drag subject closed mid-drag");
            *session = None;
        }
        removed
    }

    /// Ids of all currently visible managed windows
    pub fn visible_windows(&self) -> Vec<WindowId> {
        self.registry.visible_windows().iter().map(|w| w.id).collect()
    }

    // =========================================================================
    // Drag State
    // =========================================================================

    /// Whether a drag gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Copy of the active drag session
    pub fn drag_session(&self) -> Option<DragSession> {
        self.session.borrow().clone()
    }

    /// Whether a frame change made by the engine itself is in progress
    pub fn is_applying_programmatic_change(&self) -> bool {
        self.is_snapping.get() || self.is_moving_docked.get()
    }

    /// Windows that would move with `id` if it were dragged right now
    pub fn docked_group(&self, id: WindowId) -> Vec<WindowId> {
        let windows = self.registry.visible_windows();
        match windows.iter().find(|w| w.id == id) {
            Some(subject) => find_docked_windows(subject, &windows, self.config.docking_threshold),
            None => Vec::new(),
        }
    }

    /// Current window scale (1.0 normal, 2.0 double size)
    pub fn scale_factor(&self) -> f32 {
        self.scale.get()
    }

    // =========================================================================
    // Drag Gesture
    // =========================================================================

    /// Begin a drag of `id`. Captures the docked group and each member's
    /// offset from the subject; those offsets hold for the whole gesture.
    pub fn drag_will_start(&self, id: WindowId, from_title_bar: bool) {
        let windows = self.registry.visible_windows();
        let Some(subject) = self.registry.snapshot(id) else {
            warn!(id, "drag started for unregistered window");
            return;
        };

        let docked_ids = find_docked_windows(&subject, &windows, self.config.docking_threshold);
        let docked = docked_ids.iter().filter_map(|docked_id| {
            windows
                .iter()
                .find(|w| w.id == *docked_id)
                .map(|w| (w.id, w.frame.origin()))
        });
        let session = DragSession::new(id, subject.frame.origin(), from_title_bar, docked);

        debug!(
            id,
            from_title_bar,
            docked = ?docked_ids,
            "drag started"
        );
        *self.session.borrow_mut() = Some(session);
    }

    /// The subject is about to move to `candidate`. Returns the origin it
    /// should actually take, and moves its docked group along.
    pub fn drag_did_move(&self, id: WindowId, candidate: Vec2) -> Vec2 {
        if self.is_applying_programmatic_change() {
            return candidate;
        }
        let Some(subject) = self.registry.snapshot(id) else {
            trace!(id, "move for unregistered window");
            return candidate;
        };

        let is_current = self
            .session
            .borrow()
            .as_ref()
            .is_some_and(|s| s.subject() == id);
        if !is_current {
            self.drag_will_start(id, false);
        }

        let docked: Vec<DockedWindow> = {
            let mut guard = self.session.borrow_mut();
            let Some(session) = guard.as_mut() else {
                return candidate;
            };
            if session.should_undock(candidate, self.config.undock_threshold) {
                debug!(id, "undocked from group");
                session.undock();
            }
            session.docked().to_vec()
        };
        let excluded: Vec<WindowId> = docked.iter().map(|d| d.id).collect();

        let windows = self.registry.visible_windows();
        let snapped = compute_snapped_origin(
            &subject,
            candidate,
            &excluded,
            &windows,
            self.screen.visible_bounds(),
            &self.config,
        );
        trace!(id, ?candidate, ?snapped, "drag move");

        self.move_docked(snapped, &docked);
        snapped
    }

    /// End the drag of `id`
    pub fn drag_did_finish(&self, id: WindowId) {
        let Some(session) = self.session.borrow_mut().take() else {
            return;
        };
        if session.subject() == id {
            debug!(id, "drag finished");
        } else {
            debug!(id, subject = session.subject(), "finish for another window, dropping session");
        }
    }

    fn move_docked(&self, snapped: Vec2, docked: &[DockedWindow]) {
        if docked.is_empty() {
            return;
        }
        let _guard = ReentrancyGuard::enter(&self.is_moving_docked);
        for window in docked {
            let Some(handle) = self.registry.handle(window.id) else {
                continue;
            };
            if !handle.is_visible() {
                continue;
            }
            let frame = handle.frame().with_origin(snapped + window.offset);
            handle.set_frame(frame, false);
        }
    }

    /// Snap a window where it stands, e.g. after it was shown or the
    /// display changed. Returns the new origin if it moved.
    pub fn snap_window_in_place(&self, id: WindowId) -> Option<Vec2> {
        let subject = self.registry.snapshot(id)?;
        let windows = self.registry.visible_windows();
        let origin = subject.frame.origin();
        let snapped = compute_snapped_origin(
            &subject,
            origin,
            &[],
            &windows,
            self.screen.visible_bounds(),
            &self.config,
        );
        if snapped == origin {
            return None;
        }
        self.apply_plan(&[(id, subject.frame.with_origin(snapped))], false);
        Some(snapped)
    }

    // =========================================================================
    // Layout Commands
    // =========================================================================

    /// Toggle double size. No-op when already at the requested scale, and
    /// when there is no visible main window to scale around.
    ///
    /// Each window is resized from the scale its own frame is at, so one
    /// that was hidden during an earlier toggle is not shrunk below its
    /// normal size.
    pub fn apply_double_size(&self, enabled: bool) {
        let new_scale = if enabled { DOUBLE_SCALE } else { NORMAL_SCALE };
        if new_scale == self.scale.get() {
            return;
        }

        let windows = self.registry.windows();
        let scales = self.frame_scales.borrow();
        let plan = plan_double_size(
            &windows,
            |id: WindowId| scales.get(&id).copied().unwrap_or(NORMAL_SCALE),
            new_scale,
            &self.config,
        );
        drop(scales);
        if plan.is_empty() {
            debug!(scale = new_scale, "double size skipped, main window unavailable");
            return;
        }

        self.scale.set(new_scale);
        self.end_stale_session();
        {
            let mut scales = self.frame_scales.borrow_mut();
            for (id, _) in &plan {
                if windows.iter().any(|w| w.id == *id && w.is_dockable()) {
                    scales.insert(*id, new_scale);
                }
            }
        }
        debug!(scale = new_scale, windows = plan.len(), "double size");
        self.apply_plan(&plan, self.config.animate_layout);
    }

    /// Forget persisted frames and arrange all windows around a centred
    /// main window.
    pub fn snap_to_default_positions(&self) {
        if let Some(store) = &self.frame_store {
            for role in WindowRole::all() {
                store.clear_frame(*role);
            }
        }
        self.end_stale_session();

        let plan = plan_default_layout(&self.registry.windows(), self.screen.visible_bounds());
        debug!(windows = plan.len(), "snap to default positions");
        self.apply_plan(&plan, self.config.animate_layout);
    }

    /// Apply a persisted `{{x, y}, {w, h}}` frame to a window being shown
    pub fn restore_frame(&self, id: WindowId, persisted: &str) -> DockResult<()> {
        if !self.registry.contains(id) {
            return Err(DockError::WindowNotFound(id));
        }
        let frame: Rect = persisted.parse().map_err(|err| {
            warn!(id, persisted, "ignoring malformed persisted frame");
            err
        })?;
        self.apply_plan(&[(id, frame)], false);
        Ok(())
    }

    /// Look up the window's persisted frame in the frame store and apply
    /// it. Returns whether a frame was applied.
    pub fn restore_persisted_frame(&self, id: WindowId) -> DockResult<bool> {
        let role = self.registry.role(id).ok_or(DockError::WindowNotFound(id))?;
        let Some(persisted) = self.frame_store.as_ref().and_then(|s| s.load_frame(role)) else {
            return Ok(false);
        };
        self.restore_frame(id, &persisted)?;
        Ok(true)
    }

    fn apply_plan(&self, plan: &[(WindowId, Rect)], animate: bool) {
        let _guard = ReentrancyGuard::enter(&self.is_snapping);
        for (id, frame) in plan {
            if let Some(handle) = self.registry.handle(*id) {
                handle.set_frame(*frame, animate);
            }
        }
    }

    fn end_stale_session(&self) {
        if self.session.borrow_mut().take().is_some() {
            debug!("layout command ended the active drag session");
        }
    }
}
