// File: crates/likeplot-core/src/scene.rs
// Summary: Renderer-agnostic drawable shapes in pixel space.

use crate::geometry::{Point, RectF};

/// Straight RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` (leading `#` optional). Returns None on malformed input.
    pub fn hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&s[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    LineTo(Point),
    CubicTo { c1: Point, c2: Point, to: Point },
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Rect {
        rect: RectF,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    /// Open stroked path.
    Path {
        start: Point,
        segments: Vec<Segment>,
        stroke: Stroke,
    },
    /// Text whose baseline passes through `at`, rotated clockwise by `rotation_deg` around `at`.
    Text {
        text: String,
        at: Point,
        size: f32,
        color: Color,
        anchor: TextAnchor,
        rotation_deg: f32,
    },
}

/// Everything a renderer needs to produce one chart image.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self { width, height, background, shapes: Vec::new() }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn line(&mut self, from: Point, to: Point, stroke: Stroke) {
        self.push(Shape::Line { from, to, stroke });
    }

    pub fn rect(&mut self, rect: RectF, fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(Shape::Rect { rect, fill, stroke });
    }

    pub fn text(&mut self, text: impl Into<String>, at: Point, size: f32, color: Color, anchor: TextAnchor, rotation_deg: f32) {
        self.push(Shape::Text { text: text.into(), at, size, color, anchor, rotation_deg });
    }

    pub fn rects(&self) -> impl Iterator<Item = (&RectF, Option<Color>)> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Rect { rect, fill, .. } => Some((rect, *fill)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
