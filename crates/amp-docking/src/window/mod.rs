//! Window registry module
//!
//! Tracks which platform windows the engine manages, what role each one
//! plays, and reads their live geometry on demand.

mod memory;
mod platform;
mod registry;
mod role;

pub use memory::{MemoryScreen, MemoryWindow};
pub use platform::{PlatformWindow, Screen};
pub use registry::{ManagedWindow, WindowRegistry};
pub use role::WindowRole;

// Re-export WindowId from crate types module for convenience
pub use crate::types::WindowId;
