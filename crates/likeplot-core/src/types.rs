// File: crates/likeplot-core/src/types.rs
// Summary: Chart frame types (outer size, margins, plot area).

use crate::geometry::Point;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margin {
    /// Create margins in CSS order (top, right, bottom, left). Negative inputs clamp to zero.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top: top.max(0.0), right: right.max(0.0), bottom: bottom.max(0.0), left: left.max(0.0) }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(20.0, 30.0, 40.0, 60.0)
    }
}

/// Outer surface size plus the margins that carve out the plot area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
}

impl Frame {
    pub fn new(width: u32, height: u32, margin: Margin) -> Self {
        Self { width, height, margin }
    }

    /// Plot width: outer width minus horizontal margins, never negative.
    pub fn plot_width(&self) -> f32 {
        (self.width as f32 - self.margin.hsum()).max(0.0)
    }

    /// Plot height: outer height minus vertical margins, never negative.
    pub fn plot_height(&self) -> f32 {
        (self.height as f32 - self.margin.vsum()).max(0.0)
    }

    /// Translate a plot-local point into surface coordinates.
    #[inline]
    pub fn to_outer(&self, x: f64, y: f64) -> Point {
        Point::new(self.margin.left + x as f32, self.margin.top + y as f32)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(600, 400, Margin::default())
    }
}
