// File: crates/likeplot-core/src/boxplot.rs
// Summary: Grouped boxplot layout: one box-and-whisker per group over a band x scale.

use crate::axis::Axis;
use crate::chart::{blank_scene, value_floor, Chart};
use crate::error::StatsError;
use crate::geometry::RectF;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Scene, Stroke};
use crate::stats::{rollup, Record, Rollup};
use crate::theme::Theme;
use crate::types::{Frame, Margin};

#[derive(Clone, Debug)]
pub struct BoxplotChart {
    pub frame: Frame,
    pub x_title: String,
    pub y_title: String,
    /// Band padding (inner and outer), as a fraction of the step.
    pub band_padding: f64,
    pub y_ticks: usize,
}

impl Default for BoxplotChart {
    fn default() -> Self {
        Self {
            frame: Frame::new(600, 400, Margin::new(20.0, 30.0, 40.0, 60.0)),
            x_title: "Age Group".to_string(),
            y_title: "Number of Likes".to_string(),
            band_padding: 0.2,
            y_ticks: 10,
        }
    }
}

impl BoxplotChart {
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }

    /// Lay out precomputed summaries. Groups appear left to right in rollup order.
    pub fn build_from_rollup(&self, summaries: &Rollup, theme: &Theme) -> Result<Scene, StatsError> {
        let (lo, hi) = match (summaries.min_value(), summaries.max_value()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => return Err(StatsError::EmptyInput),
        };
        let frame = &self.frame;
        let w = frame.plot_width() as f64;
        let h = frame.plot_height() as f64;

        let x = BandScale::new(summaries.keys().map(str::to_string).collect(), (0.0, w)).padding(self.band_padding);
        let y = LinearScale::new((value_floor(lo), hi), (h, 0.0));
        tracing::debug!(groups = summaries.len(), y_max = hi, bandwidth = x.bandwidth(), "boxplot layout");

        let mut scene = blank_scene(frame, theme);
        let y_axis = Axis::new(self.y_title.clone(), frame.margin.left - 15.0)
            .with_ticks(y.ticks(self.y_ticks).into_iter().map(|t| y.map(t)));
        y_axis.draw_gridlines(&mut scene, frame, theme);

        let bw = x.bandwidth();
        let whisker = Stroke::new(theme.whisker, 1.0);
        let outline = Stroke::new(theme.box_stroke, 1.0);
        let median = Stroke::new(theme.median, 2.0);
        for (key, s) in summaries.iter() {
            let Some(x0) = x.position(key) else { continue };
            let cx = x0 + bw / 2.0;

            scene.line(frame.to_outer(cx, y.map(s.min)), frame.to_outer(cx, y.map(s.max)), whisker);

            let q3 = frame.to_outer(x0, y.map(s.q3));
            let q1 = frame.to_outer(x0, y.map(s.q1));
            scene.rect(RectF::from_x_span(q3.x, bw as f32, q3.y, q1.y), Some(theme.box_fill), Some(outline));

            let my = y.map(s.median);
            scene.line(frame.to_outer(x0, my), frame.to_outer(x0 + bw, my), median);
        }

        let x_axis = Axis::new(self.x_title.clone(), frame.margin.bottom - 5.0)
            .with_ticks(summaries.keys().filter_map(|k| x.center(k)));
        x_axis.draw_bottom(&mut scene, frame, theme);
        y_axis.draw_left(&mut scene, frame, theme);
        Ok(scene)
    }
}

impl Chart for BoxplotChart {
    type Datum = Record;

    fn id(&self) -> &'static str { "boxplot" }

    fn frame(&self) -> &Frame { &self.frame }

    fn build(&self, data: &[Record], theme: &Theme) -> Result<Scene, StatsError> {
        let summaries = rollup(data)?;
        self.build_from_rollup(&summaries, theme)
    }
}
