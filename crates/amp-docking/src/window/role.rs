//! Window roles

use serde::{Deserialize, Serialize};

/// The part of the player a window shows
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRole {
    /// Main player window
    Main,
    /// Playlist editor
    Playlist,
    /// Graphical equalizer
    Equalizer,
    /// Media library browser
    Browser,
    /// Visualization window
    Visualizer,
    /// Video output window
    Video,
}

impl WindowRole {
    /// Get all roles
    pub fn all() -> &'static [WindowRole] {
        &[
            WindowRole::Main,
            WindowRole::Playlist,
            WindowRole::Equalizer,
            WindowRole::Browser,
            WindowRole::Visualizer,
            WindowRole::Video,
        ]
    }

    /// Dockable windows drag their docked group along and extend the
    /// docking search. Other windows can only be carried.
    #[inline]
    pub fn is_dockable(self) -> bool {
        matches!(
            self,
            WindowRole::Main | WindowRole::Playlist | WindowRole::Equalizer
        )
    }

    /// Stable key used by persistence layers
    pub fn key(self) -> &'static str {
        match self {
            WindowRole::Main => "main",
            WindowRole::Playlist => "playlist",
            WindowRole::Equalizer => "equalizer",
            WindowRole::Browser => "browser",
            WindowRole::Visualizer => "visualizer",
            WindowRole::Video => "video",
        }
    }

    /// Parse from a persistence key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|role| role.key() == key)
    }
}

impl std::fmt::Display for WindowRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
