// File: crates/likeplot-core/src/axis.rs
// Summary: Axis decorations (axis line, tick marks, gridlines, title) emitted as scene shapes.

use crate::geometry::Point;
use crate::scene::{Scene, Stroke, TextAnchor};
use crate::theme::Theme;
use crate::types::Frame;

pub const TICK_SIZE: f32 = 6.0;
pub const TITLE_SIZE: f32 = 14.0;

/// One chart axis. Tick positions are plot-local pixels along the axis.
#[derive(Clone, Debug)]
pub struct Axis {
    pub title: String,
    pub ticks: Vec<f32>,
    /// Distance from the plot edge to the title baseline, in pixels.
    pub title_offset: f32,
}

impl Axis {
    pub fn new(title: impl Into<String>, title_offset: f32) -> Self {
        Self { title: title.into(), ticks: Vec::new(), title_offset }
    }

    pub fn with_ticks(mut self, ticks: impl IntoIterator<Item = f64>) -> Self {
        self.ticks = ticks.into_iter().map(|t| t as f32).collect();
        self
    }

    /// Horizontal gridlines across the plot at each tick (left axis only).
    pub fn draw_gridlines(&self, scene: &mut Scene, frame: &Frame, theme: &Theme) {
        let w = frame.plot_width() as f64;
        let stroke = Stroke::new(theme.grid, 1.0);
        for &y in &self.ticks {
            scene.line(frame.to_outer(0.0, y as f64), frame.to_outer(w, y as f64), stroke);
        }
    }

    /// Axis along the bottom of the plot: line, downward ticks, centered title below.
    pub fn draw_bottom(&self, scene: &mut Scene, frame: &Frame, theme: &Theme) {
        let w = frame.plot_width() as f64;
        let h = frame.plot_height() as f64;
        scene.line(frame.to_outer(0.0, h), frame.to_outer(w, h), Stroke::new(theme.axis_line, 1.0));

        let tick = Stroke::new(theme.tick, 1.0);
        for &x in &self.ticks {
            let base = frame.to_outer(x as f64, h);
            scene.line(base, Point::new(base.x, base.y + TICK_SIZE), tick);
        }

        if !self.title.is_empty() {
            let at = frame.to_outer(w / 2.0, h + self.title_offset as f64);
            scene.text(self.title.clone(), at, TITLE_SIZE, theme.axis_label, TextAnchor::Middle, 0.0);
        }
    }

    /// Axis along the left of the plot: line, leftward ticks, title rotated to read bottom-up.
    pub fn draw_left(&self, scene: &mut Scene, frame: &Frame, theme: &Theme) {
        let h = frame.plot_height() as f64;
        scene.line(frame.to_outer(0.0, 0.0), frame.to_outer(0.0, h), Stroke::new(theme.axis_line, 1.0));

        let tick = Stroke::new(theme.tick, 1.0);
        for &y in &self.ticks {
            let base = frame.to_outer(0.0, y as f64);
            scene.line(base, Point::new(base.x - TICK_SIZE, base.y), tick);
        }

        if !self.title.is_empty() {
            let at = frame.to_outer(-(self.title_offset as f64), h / 2.0);
            scene.text(self.title.clone(), at, TITLE_SIZE, theme.axis_label, TextAnchor::Middle, -90.0);
        }
    }
}
