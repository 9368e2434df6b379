//! Window registry: id -> (role, platform handle)

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{PlatformWindow, WindowId, WindowRole};
use crate::error::{DockError, DockResult};
use crate::math::Rect;

/// Point-in-time view of a managed window
///
/// Built fresh from the platform whenever it is needed and never stored
/// across operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManagedWindow {
    pub id: WindowId,
    pub role: WindowRole,
    pub frame: Rect,
    pub visible: bool,
}

impl ManagedWindow {
    #[inline]
    pub fn is_dockable(&self) -> bool {
        self.role.is_dockable()
    }
}

struct Entry {
    role: WindowRole,
    handle: Rc<dyn PlatformWindow>,
}

/// Lookup table from window id to role and platform handle
///
/// Iteration is in ascending id order so that every traversal built on top
/// of the registry is deterministic.
#[derive(Default)]
pub struct WindowRegistry {
    entries: RefCell<BTreeMap<WindowId, Entry>>,
}

impl WindowRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Start managing a window
    pub fn register(
        &self,
        id: WindowId,
        role: WindowRole,
        handle: Rc<dyn PlatformWindow>,
    ) -> DockResult<()> {
        let mut entries = self.entries.borrow_mut();
        if entries.contains_key(&id) {
            return Err(DockError::DuplicateWindow(id));
        }
        entries.insert(id, Entry { role, handle });
        Ok(())
    }

    /// Stop managing a window. Returns whether it was registered.
    pub fn unregister(&self, id: WindowId) -> bool {
        self.entries.borrow_mut().remove(&id).is_some()
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.entries.borrow().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn role(&self, id: WindowId) -> Option<WindowRole> {
        self.entries.borrow().get(&id).map(|e| e.role)
    }

    /// Clone of the platform handle, so callers can mutate the window
    /// without holding a borrow on the registry.
    pub fn handle(&self, id: WindowId) -> Option<Rc<dyn PlatformWindow>> {
        self.entries.borrow().get(&id).map(|e| Rc::clone(&e.handle))
    }

    /// First registered window with the given role
    pub fn window_for_role(&self, role: WindowRole) -> Option<WindowId> {
        self.entries
            .borrow()
            .iter()
            .find(|(_, e)| e.role == role)
            .map(|(id, _)| *id)
    }

    /// Fresh snapshot of one window
    pub fn snapshot(&self, id: WindowId) -> Option<ManagedWindow> {
        self.entries.borrow().get(&id).map(|e| ManagedWindow {
            id,
            role: e.role,
            frame: e.handle.frame(),
            visible: e.handle.is_visible(),
        })
    }

    /// Fresh snapshots of every registered window, shown or not
    pub fn windows(&self) -> Vec<ManagedWindow> {
        self.entries
            .borrow()
            .iter()
            .map(|(id, e)| ManagedWindow {
                id: *id,
                role: e.role,
                frame: e.handle.frame(),
                visible: e.handle.is_visible(),
            })
            .collect()
    }

    /// Fresh snapshots of every visible window
    pub fn visible_windows(&self) -> Vec<ManagedWindow> {
        self.entries
            .borrow()
            .iter()
            .filter(|(_, e)| e.handle.is_visible())
            .map(|(id, e)| ManagedWindow {
                id: *id,
                role: e.role,
                frame: e.handle.frame(),
                visible: true,
            })
            .collect()
    }
}
