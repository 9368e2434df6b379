//! Axis-aligned window frame

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ranges_close, Axis, Size, Vec2};
use crate::error::DockError;

/// Axis-aligned rectangle in y-up screen coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from origin and size
    pub fn from_pos_size(pos: Vec2, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Origin (bottom-left corner)
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Same size, different origin
    pub fn with_origin(&self, origin: Vec2) -> Rect {
        Rect::from_pos_size(origin, self.size())
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Top-right corner
    pub fn top_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.top())
    }

    /// True when the rectangle has no usable area
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// `(min, max)` extent along `axis`
    pub fn span(&self, axis: Axis) -> (f32, f32) {
        match axis {
            Axis::Horizontal => (self.left(), self.right()),
            Axis::Vertical => (self.bottom(), self.top()),
        }
    }

    /// Length along `axis`
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Vertical ranges overlap or are at most `tolerance` apart.
    pub fn vertically_close(&self, other: &Rect, tolerance: f32) -> bool {
        ranges_close(self.bottom(), self.top(), other.bottom(), other.top(), tolerance)
    }

    /// Horizontal ranges overlap or are at most `tolerance` apart.
    pub fn horizontally_close(&self, other: &Rect, tolerance: f32) -> bool {
        ranges_close(self.left(), self.right(), other.left(), other.right(), tolerance)
    }

    /// Closeness of the ranges perpendicular to `axis`.
    pub fn close_across(&self, other: &Rect, axis: Axis, tolerance: f32) -> bool {
        match axis {
            Axis::Horizontal => self.vertically_close(other, tolerance),
            Axis::Vertical => self.horizontally_close(other, tolerance),
        }
    }

    /// Render as `{{x, y}, {w, h}}`, the format the host persists frames in.
    pub fn to_frame_string(&self) -> String {
        format!(
            "{{{{{}, {}}}, {{{}, {}}}}}",
            self.x, self.y, self.width, self.height
        )
    }
}

impl FromStr for Rect {
    type Err = DockError;

    /// Parse `{{x, y}, {w, h}}`. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DockError::InvalidFrameString(s.to_string());
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        let inner = compact
            .strip_prefix("{{")
            .and_then(|rest| rest.strip_suffix("}}"))
            .ok_or_else(invalid)?;
        let (origin, size) = inner.split_once("},{").ok_or_else(invalid)?;

        let parse_pair = |pair: &str| -> Result<(f32, f32), DockError> {
            let (a, b) = pair.split_once(',').ok_or_else(invalid)?;
            let a = a.parse::<f32>().map_err(|_| invalid())?;
            let b = b.parse::<f32>().map_err(|_| invalid())?;
            if !a.is_finite() || !b.is_finite() {
                return Err(invalid());
            }
            Ok((a, b))
        };

        let (x, y) = parse_pair(origin)?;
        let (width, height) = parse_pair(size)?;
        Ok(Rect::new(x, y, width, height))
    }
}
