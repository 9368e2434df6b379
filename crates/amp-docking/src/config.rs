//! Docking engine tuning

use serde::{Deserialize, Serialize};

use crate::error::{DockError, DockResult};

/// Default distance (px) at which a dragged edge is pulled onto a target edge
pub const DEFAULT_SNAP_THRESHOLD: f32 = 15.0;

/// Default distance (px) at which two windows count as stuck together.
/// Kept slightly above the snap threshold so anything the snap engine just
/// placed is always found by the docking search.
pub const DEFAULT_DOCKING_THRESHOLD: f32 = 16.0;

/// Default title-bar drag distance (px) that tears a window out of its group
pub const DEFAULT_UNDOCK_THRESHOLD: f32 = 30.0;

/// Alignment snaps only win over edge-to-edge snaps when closer than this
/// fraction of the edge-to-edge distance.
pub const DEFAULT_ALIGNMENT_PREFERENCE: f32 = 0.8;

/// Default lower bound (px, at 1x scale) for the playlist height
pub const DEFAULT_MIN_PLAYLIST_HEIGHT: f32 = 116.0;

/// Thresholds and layout options for the docking engine
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockingConfig {
    pub snap_threshold: f32,
    pub docking_threshold: f32,
    pub undock_threshold: f32,
    pub alignment_preference: f32,
    pub min_playlist_height: f32,
    /// Ask the platform to animate frame changes made by layout commands
    pub animate_layout: bool,
}

impl Default for DockingConfig {
    fn default() -> Self {
        Self {
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            docking_threshold: DEFAULT_DOCKING_THRESHOLD,
            undock_threshold: DEFAULT_UNDOCK_THRESHOLD,
            alignment_preference: DEFAULT_ALIGNMENT_PREFERENCE,
            min_playlist_height: DEFAULT_MIN_PLAYLIST_HEIGHT,
            animate_layout: false,
        }
    }
}

impl DockingConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> DockResult<Self> {
        let config: DockingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> DockResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the relationships the engine relies on
    ///
    /// Comparisons are negated so NaN fails every check.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> DockResult<()> {
        if !(self.snap_threshold > 0.0) {
            return Err(DockError::InvalidConfig {
                field: "snap_threshold",
                reason: "must be positive",
            });
        }
        if !(self.docking_threshold >= self.snap_threshold) {
            return Err(DockError::InvalidConfig {
                field: "docking_threshold",
                reason: "must not be smaller than snap_threshold",
            });
        }
        if !(self.undock_threshold > self.snap_threshold) {
            return Err(DockError::InvalidConfig {
                field: "undock_threshold",
                reason: "must be larger than snap_threshold",
            });
        }
        if !(self.alignment_preference > 0.0 && self.alignment_preference <= 1.0) {
            return Err(DockError::InvalidConfig {
                field: "alignment_preference",
                reason: "must be in (0, 1]",
            });
        }
        if !(self.min_playlist_height >= 0.0) {
            return Err(DockError::InvalidConfig {
                field: "min_playlist_height",
                reason: "must not be negative",
            });
        }
        Ok(())
    }
}
