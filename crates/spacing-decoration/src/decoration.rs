//! Per-item spacing decorations.
//!
//! The host list calls [`ItemDecoration::item_offsets`] for every item on each
//! layout pass and grows the item's slot by the returned insets.

use crate::error::DecorationError;
use crate::insets::EdgeInsets;
use crate::layout::{LayoutState, LayoutStrategy};
use crate::orientation::Orientation;
use crate::unit::Dp;

/// Callback the host list invokes to measure the space around one item.
pub trait ItemDecoration {
    /// Returns the insets to reserve around the item at `position`.
    ///
    /// `position` is [`NO_POSITION`](crate::NO_POSITION) when the item is not
    /// bound to valid data.
    fn item_offsets(
        &self,
        position: Option<usize>,
        state: &LayoutState,
        layout: &dyn LayoutStrategy,
    ) -> EdgeInsets;
}

/// Uniform spacing between the items of a linear list.
///
/// Every item except the first gets `spacing` on its leading edge, so adjacent
/// items end up exactly `spacing` apart. The first item's leading gap and the
/// last item's trailing gap are opt-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LinearSpaceDecoration {
    spacing: u32,
    include_leading_gap: bool,
    include_trailing_gap: bool,
}

impl LinearSpaceDecoration {
    /// Spacing between items only; no gap before the first or after the last.
    pub fn new(spacing: u32) -> Self {
        Self::with_gaps(spacing, false, false)
    }

    pub fn with_gaps(spacing: u32, include_leading_gap: bool, include_trailing_gap: bool) -> Self {
        Self {
            spacing,
            include_leading_gap,
            include_trailing_gap,
        }
    }

    /// Builds a decoration from a density-independent spacing.
    ///
    /// The pixel spacing is rounded to nearest rather than truncated, so a
    /// fractional product such as 10.5px becomes 11px instead of 10px.
    pub fn from_dp(
        spacing: Dp,
        density: f32,
        include_leading_gap: bool,
        include_trailing_gap: bool,
    ) -> Self {
        Self::with_gaps(
            spacing.round_to_px(density),
            include_leading_gap,
            include_trailing_gap,
        )
    }

    #[inline]
    pub fn spacing(&self) -> u32 {
        self.spacing
    }

    #[inline]
    pub fn includes_leading_gap(&self) -> bool {
        self.include_leading_gap
    }

    #[inline]
    pub fn includes_trailing_gap(&self) -> bool {
        self.include_trailing_gap
    }

    /// Computes the insets for one item of a list laid out along `orientation`.
    pub fn compute_insets(
        &self,
        position: Option<usize>,
        item_count: usize,
        orientation: Orientation,
    ) -> EdgeInsets {
        let Some(position) = position else {
            return EdgeInsets::ZERO;
        };

        let is_first = position == 0;
        let is_last = LayoutState::new(item_count).last_index() == Some(position);

        let leading = if is_first && !self.include_leading_gap {
            0
        } else {
            self.spacing
        };
        let trailing = if is_last && self.include_trailing_gap {
            self.spacing
        } else {
            0
        };

        EdgeInsets::along(orientation, leading, trailing)
    }

    /// Resolves the orientation of `layout`, failing when it is not linear.
    pub fn orientation_of(
        &self,
        layout: &dyn LayoutStrategy,
    ) -> Result<Orientation, DecorationError> {
        layout
            .as_linear()
            .map(|linear| linear.orientation())
            .ok_or(DecorationError::NotLinearLayout {
                decoration: "LinearSpaceDecoration",
                layout: layout.name(),
            })
    }

    /// Non-panicking form of [`ItemDecoration::item_offsets`].
    pub fn try_item_offsets(
        &self,
        position: Option<usize>,
        state: &LayoutState,
        layout: &dyn LayoutStrategy,
    ) -> Result<EdgeInsets, DecorationError> {
        if position.is_none() {
            log::trace!("LinearSpaceDecoration: item not bound, no insets");
            return Ok(EdgeInsets::ZERO);
        }
        let orientation = self.orientation_of(layout)?;
        Ok(self.compute_insets(position, state.item_count, orientation))
    }

    /// Checks `layout` once so later lookups cannot fail.
    pub fn bind(&self, layout: &dyn LayoutStrategy) -> Result<BoundDecoration, DecorationError> {
        let orientation = self.orientation_of(layout)?;
        log::debug!(
            "LinearSpaceDecoration: bound to {} ({:?}, spacing {})",
            layout.name(),
            orientation,
            self.spacing
        );
        Ok(BoundDecoration {
            decoration: *self,
            orientation,
        })
    }
}

impl ItemDecoration for LinearSpaceDecoration {
    /// # Panics
    ///
    /// Panics when `layout` is not a linear layout strategy. Attaching this
    /// decoration to such a list is a setup error.
    fn item_offsets(
        &self,
        position: Option<usize>,
        state: &LayoutState,
        layout: &dyn LayoutStrategy,
    ) -> EdgeInsets {
        match self.try_item_offsets(position, state, layout) {
            Ok(insets) => insets,
            Err(err) => {
                log::error!("{err}");
                panic!("{err}");
            }
        }
    }
}

/// A [`LinearSpaceDecoration`] whose layout orientation is already known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundDecoration {
    decoration: LinearSpaceDecoration,
    orientation: Orientation,
}

impl BoundDecoration {
    pub fn decoration(&self) -> &LinearSpaceDecoration {
        &self.decoration
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn insets(&self, position: Option<usize>, item_count: usize) -> EdgeInsets {
        self.decoration
            .compute_insets(position, item_count, self.orientation)
    }
}

#[cfg(test)]
#[path = "tests/decoration_tests.rs"]
mod tests;
