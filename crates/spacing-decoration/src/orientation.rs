/// Direction in which a linear list lays out and scrolls its items.
///
/// The main axis is the scroll axis; the cross axis is perpendicular to it and
/// never receives spacing from a linear decoration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Items flow left to right.
    /// Leading edge: left, trailing edge: right.
    Horizontal,

    /// Items flow top to bottom.
    /// Leading edge: top, trailing edge: bottom.
    #[default]
    Vertical,
}

impl Orientation {
    /// Returns the perpendicular orientation.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}
