use super::{arrange_decorated, decorate_pass};
use crate::decoration::LinearSpaceDecoration;
use crate::insets::EdgeInsets;
use crate::layout::{GridLayout, LayoutState, LinearLayout};
use crate::orientation::Orientation;

#[test]
fn decorate_pass_covers_every_item() {
    let decoration = LinearSpaceDecoration::with_gaps(10, false, true);
    let insets =
        decorate_pass(&decoration, &LinearLayout::vertical(), &LayoutState::new(3)).unwrap();
    assert_eq!(
        insets.as_slice(),
        &[
            EdgeInsets::ZERO,
            EdgeInsets::from_components(0, 10, 0, 0),
            EdgeInsets::from_components(0, 10, 0, 10),
        ]
    );
    assert!(!insets.spilled());
}

#[test]
fn decorate_pass_rejects_grid() {
    let decoration = LinearSpaceDecoration::new(10);
    let grid = GridLayout::new(2, Orientation::Vertical);
    assert!(decorate_pass(&decoration, &grid, &LayoutState::new(3)).is_err());
}

#[test]
fn arrange_decorated_spaces_items_evenly() {
    let decoration = LinearSpaceDecoration::new(5);
    let sizes = vec![10, 10, 10];
    let mut positions = vec![0; sizes.len()];
    let total = arrange_decorated(&decoration, Orientation::Horizontal, &sizes, &mut positions);
    assert_eq!(positions, vec![0, 15, 30]);
    assert_eq!(total, 40);
}

#[test]
fn arrange_decorated_includes_outer_gaps() {
    let decoration = LinearSpaceDecoration::with_gaps(5, true, true);
    let sizes = vec![10, 20];
    let mut positions = vec![0; sizes.len()];
    let total = arrange_decorated(&decoration, Orientation::Vertical, &sizes, &mut positions);
    assert_eq!(positions, vec![5, 20]);
    assert_eq!(total, 45);
}

#[test]
fn arrange_decorated_empty_list() {
    let decoration = LinearSpaceDecoration::with_gaps(5, true, true);
    let total = arrange_decorated(&decoration, Orientation::Vertical, &[], &mut []);
    assert_eq!(total, 0);
}
