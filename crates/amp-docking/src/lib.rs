//! Window Docking Engine for a Skinned Media Player
//!
//! This crate keeps the player's windows (main, equalizer, playlist and
//! the auxiliary browser, visualizer and video windows) together on screen:
//! - Magnetic snapping to other windows and to the screen edges
//! - Docked groups that move together while one member is dragged
//! - Undocking by dragging a window's title bar away from its group
//! - Layout commands (double size, snap to default positions)
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`, `Axis`)
//! - [`window`]: Window roles, registry and the platform window traits
//! - [`snap`]: Snap candidate search and resolution
//! - [`dock`]: Docked group discovery
//! - [`input`]: Drag session state
//! - [`layout`]: Double size and default layout planners
//! - [`persistence`]: Persisted frame overrides
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use amp_docking::{
//!     DockingConfig, DockingEngine, MemoryScreen, MemoryWindow, PlatformWindow, Rect, Vec2,
//!     WindowRole,
//! };
//!
//! let screen = Rc::new(MemoryScreen::new(Rect::new(0.0, 0.0, 1920.0, 1080.0)));
//! let engine = DockingEngine::new(DockingConfig::default(), screen);
//!
//! let main = Rc::new(MemoryWindow::new(Rect::new(500.0, 500.0, 275.0, 116.0)));
//! engine.register_window(1, WindowRole::Main, main.clone()).unwrap();
//!
//! engine.drag_will_start(1, true);
//! let origin = engine.drag_did_move(1, Vec2::new(5.0, 500.0));
//! engine.drag_did_finish(1);
//! assert_eq!(origin, Vec2::new(0.0, 500.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Snapping, docking and layout are pure functions over window snapshots
//! 2. **Platform Seams**: Real windows and screens sit behind small traits
//! 3. **Re-entrant Engine**: Operations take `&self` so window callbacks can call back in
//! 4. **Single Thread**: The engine lives on the UI thread and is not `Send`

pub mod config;
pub mod dock;
pub mod error;
pub mod input;
pub mod layout;
pub mod math;
pub mod persistence;
pub mod snap;
pub mod types;
pub mod window;

mod engine;

// Re-export core types for convenience
pub use config::DockingConfig;
pub use dock::{are_touching, find_docked_windows};
pub use error::{DockError, DockResult};
pub use input::{DockedWindow, DragSession};
pub use layout::{plan_default_layout, plan_double_size, LayoutPlan};
pub use math::{Axis, Rect, Size, Vec2};
pub use persistence::{FrameStore, MemoryFrameStore};
pub use snap::compute_snapped_origin;
pub use window::{
    ManagedWindow, MemoryScreen, MemoryWindow, PlatformWindow, Screen, WindowId, WindowRegistry,
    WindowRole,
};

pub use engine::DockingEngine;
