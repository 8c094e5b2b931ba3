//! Item spacing decorations for linearly laid-out lists
//!
//! A decoration is consulted by the host list renderer once per item on every
//! layout pass and answers with the extra space to reserve around that item.
//! [`LinearSpaceDecoration`] puts a uniform gap between neighbours along the
//! scroll axis, with optional gaps before the first and after the last item.
//!
//! The host exposes its layout strategy through [`LayoutStrategy`]; only
//! strategies that report the [`LinearOrientation`] capability can carry a
//! linear spacing decoration.

mod decoration;
mod error;
mod insets;
mod layout;
mod orientation;
mod pass;
mod unit;

pub use decoration::*;
pub use error::*;
pub use insets::*;
pub use layout::*;
pub use orientation::*;
pub use pass::*;
pub use unit::*;

pub mod prelude {
    pub use crate::decoration::{BoundDecoration, ItemDecoration, LinearSpaceDecoration};
    pub use crate::error::DecorationError;
    pub use crate::insets::EdgeInsets;
    pub use crate::layout::{
        LayoutState, LayoutStrategy, LinearLayout, LinearOrientation, NO_POSITION,
    };
    pub use crate::orientation::Orientation;
    pub use crate::unit::Dp;
}
