//! Scoped re-entrancy flag

use std::cell::Cell;

/// Sets a flag for the lifetime of the guard.
///
/// On drop the flag goes back to whatever it was before, so nested guards
/// over the same flag compose and a panic inside the scope still clears it.
pub(crate) struct ReentrancyGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> ReentrancyGuard<'a> {
    pub(crate) fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}
