//! Error types for the docking engine
//!
//! Geometry, snapping and drag handling are total and never fail. Only
//! registration, configuration parsing and persisted-frame restoration
//! surface errors.

use crate::types::WindowId;

/// Errors that can occur in docking engine operations
#[derive(Debug, Clone, PartialEq)]
pub enum DockError {
    /// Window with the given ID is not registered
    WindowNotFound(WindowId),

    /// A window with the given ID is already registered
    DuplicateWindow(WindowId),

    /// A persisted frame string could not be parsed
    InvalidFrameString(String),

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::DuplicateWindow(id) => write!(f, "window already registered: {}", id),
            Self::InvalidFrameString(s) => write!(f, "invalid frame string: {:?}", s),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DockError {}

impl From<serde_json::Error> for DockError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for docking operations
pub type DockResult<T> = Result<T, DockError>;
