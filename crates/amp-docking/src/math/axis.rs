//! Axis selector used to run the same snapping logic horizontally and vertically

/// One of the two screen axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// x axis; snapping here moves windows left/right
    Horizontal,
    /// y axis; snapping here moves windows up/down
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    #[inline]
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}
