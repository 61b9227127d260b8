// File: crates/likeplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    /// Rectangle spanning two y values in either order.
    pub fn from_x_span(left: f32, width: f32, y_a: f32, y_b: f32) -> Self {
        Self { left, top: y_a.min(y_b), right: left + width, bottom: y_a.max(y_b) }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
