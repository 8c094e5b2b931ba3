//! Layout strategy capabilities exposed by the host list.
//!
//! Decorations never inspect a strategy's concrete type. They ask for the
//! capability they need through [`LayoutStrategy::as_linear`] and treat a
//! missing capability as a misconfiguration.

use crate::orientation::Orientation;

/// Position reported for an item that is not currently bound to valid data.
///
/// Positions are `Option<usize>`; decorations answer zero insets for this value.
pub const NO_POSITION: Option<usize> = None;

/// Read-only snapshot of the layout pass the host is running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutState {
    /// Total number of items in the list for this pass.
    pub item_count: usize,
}

impl LayoutState {
    pub fn new(item_count: usize) -> Self {
        Self { item_count }
    }

    /// Index of the last item, or `None` for an empty list.
    #[inline]
    pub fn last_index(&self) -> Option<usize> {
        self.item_count.checked_sub(1)
    }
}

/// Capability of layout strategies that place items along a single axis.
pub trait LinearOrientation {
    fn orientation(&self) -> Orientation;
}

/// A layout strategy the host list uses to place its items.
pub trait LayoutStrategy {
    /// Human-readable strategy name, used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the linear capability when this strategy lays items out on one axis.
    fn as_linear(&self) -> Option<&dyn LinearOrientation> {
        None
    }
}

/// Places items one after another along `orientation`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearLayout {
    pub orientation: Orientation,
    /// Items are drawn from the trailing end. Does not change which edge is
    /// leading for spacing purposes.
    pub reverse_layout: bool,
}

impl LinearLayout {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            reverse_layout: false,
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_layout = true;
        self
    }
}

impl LinearOrientation for LinearLayout {
    fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl LayoutStrategy for LinearLayout {
    fn name(&self) -> &'static str {
        "LinearLayout"
    }

    fn as_linear(&self) -> Option<&dyn LinearOrientation> {
        Some(self)
    }
}

/// Places items in `span_count` columns (or rows, for horizontal scrolling).
///
/// A grid is not linear: it scrolls along one axis but also wraps items across
/// the other, so it does not expose [`LinearOrientation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub span_count: usize,
    pub orientation: Orientation,
}

impl GridLayout {
    pub fn new(span_count: usize, orientation: Orientation) -> Self {
        Self {
            span_count: span_count.max(1),
            orientation,
        }
    }
}

impl LayoutStrategy for GridLayout {
    fn name(&self) -> &'static str {
        "GridLayout"
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
