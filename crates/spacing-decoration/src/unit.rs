//! Density-independent lengths

/// Density-independent pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Converts to whole pixels, rounding to nearest.
    ///
    /// Negative and NaN results become 0; results past `u32::MAX` saturate.
    pub fn round_to_px(&self, density: f32) -> u32 {
        // `as` saturates float-to-int casts and maps NaN to 0.
        self.to_px(density).round() as u32
    }
}
