//! Four-sided insets reserved around a list item

use std::ops::{Add, AddAssign};

use crate::orientation::Orientation;

/// Extra space, in pixels, reserved on each edge of an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EdgeInsets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl EdgeInsets {
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    pub fn uniform(all: u32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn horizontal(horizontal: u32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            ..Self::default()
        }
    }

    pub fn vertical(vertical: u32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            ..Self::default()
        }
    }

    pub fn from_components(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Places `leading` and `trailing` on the main axis of `orientation`.
    ///
    /// The cross-axis edges are always zero.
    pub fn along(orientation: Orientation, leading: u32, trailing: u32) -> Self {
        match orientation {
            Orientation::Horizontal => Self {
                left: leading,
                right: trailing,
                ..Self::ZERO
            },
            Orientation::Vertical => Self {
                top: leading,
                bottom: trailing,
                ..Self::ZERO
            },
        }
    }

    /// Inset on the start edge of the main axis.
    pub fn leading(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.left,
            Orientation::Vertical => self.top,
        }
    }

    /// Inset on the end edge of the main axis.
    pub fn trailing(&self, orientation: Orientation) -> u32 {
        match orientation {
            Orientation::Horizontal => self.right,
            Orientation::Vertical => self.bottom,
        }
    }

    pub fn main_axis_total(&self, orientation: Orientation) -> u32 {
        self.leading(orientation)
            .saturating_add(self.trailing(orientation))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    pub fn horizontal_sum(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical_sum(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

impl Add for EdgeInsets {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for EdgeInsets {
    fn add_assign(&mut self, rhs: Self) {
        self.left = self.left.saturating_add(rhs.left);
        self.top = self.top.saturating_add(rhs.top);
        self.right = self.right.saturating_add(rhs.right);
        self.bottom = self.bottom.saturating_add(rhs.bottom);
    }
}

#[cfg(test)]
#[path = "tests/insets_tests.rs"]
mod tests;
