//! Helpers that run a decoration over a whole layout pass

use smallvec::SmallVec;

use crate::decoration::LinearSpaceDecoration;
use crate::error::DecorationError;
use crate::insets::EdgeInsets;
use crate::layout::{LayoutState, LayoutStrategy};
use crate::orientation::Orientation;

/// Inline capacity covers a typical screenful of list rows without allocating.
pub type SmallInsetsVec = SmallVec<[EdgeInsets; 8]>;

/// Collects the insets of every item in `0..state.item_count`.
pub fn decorate_pass(
    decoration: &LinearSpaceDecoration,
    layout: &dyn LayoutStrategy,
    state: &LayoutState,
) -> Result<SmallInsetsVec, DecorationError> {
    let bound = decoration.bind(layout)?;
    Ok((0..state.item_count)
        .map(|index| bound.insets(Some(index), state.item_count))
        .collect())
}

/// Writes the main-axis start of each item into `out_positions`.
///
/// Each item's slot is its size grown by its decoration insets; slots are
/// placed back to back from 0. Returns the total content extent.
pub fn arrange_decorated(
    decoration: &LinearSpaceDecoration,
    orientation: Orientation,
    sizes: &[u32],
    out_positions: &mut [u32],
) -> u32 {
    debug_assert_eq!(sizes.len(), out_positions.len());
    let item_count = sizes.len();
    let mut cursor: u32 = 0;
    for (index, (size, position)) in sizes.iter().zip(out_positions.iter_mut()).enumerate() {
        let insets = decoration.compute_insets(Some(index), item_count, orientation);
        cursor = cursor.saturating_add(insets.leading(orientation));
        *position = cursor;
        cursor = cursor
            .saturating_add(*size)
            .saturating_add(insets.trailing(orientation));
    }
    cursor
}

#[cfg(test)]
#[path = "tests/pass_tests.rs"]
mod tests;
