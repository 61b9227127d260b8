// File: crates/likeplot-core/src/timeline.rs
// Summary: Daily line chart: dates on a time scale, smoothed with a natural cubic spline.

use crate::axis::Axis;
use crate::chart::{blank_scene, finite, value_floor, Chart};
use crate::curve::natural_segments;
use crate::error::StatsError;
use crate::geometry::Point;
use crate::loader::DailyAverage;
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{Scene, Shape, Stroke};
use crate::theme::Theme;
use crate::types::{Frame, Margin};

#[derive(Clone, Debug)]
pub struct LineChart {
    pub frame: Frame,
    pub x_title: String,
    pub y_title: String,
    pub stroke_width: f32,
    pub y_ticks: usize,
}

impl Default for LineChart {
    fn default() -> Self {
        Self {
            frame: Frame::new(800, 420, Margin::new(40.0, 30.0, 70.0, 70.0)),
            x_title: "Date".to_string(),
            y_title: "Average Likes".to_string(),
            stroke_width: 2.0,
            y_ticks: 6,
        }
    }
}

impl LineChart {
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_titles(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_title = x.into();
        self.y_title = y.into();
        self
    }
}

impl Chart for LineChart {
    type Datum = DailyAverage;

    fn id(&self) -> &'static str { "line" }

    fn frame(&self) -> &Frame { &self.frame }

    fn build(&self, data: &[DailyAverage], theme: &Theme) -> Result<Scene, StatsError> {
        let mut points = data.to_vec();
        points.sort_by_key(|d| d.date);

        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for d in &points {
            let v = finite(|| d.date.to_string(), d.avg_likes)?;
            lo = lo.min(v);
            hi = hi.max(v);
        }

        let frame = &self.frame;
        let w = frame.plot_width() as f64;
        let h = frame.plot_height() as f64;
        let x = TimeScale::from_extent(points.iter().map(|d| d.date), (0.0, w)).ok_or(StatsError::EmptyInput)?;
        let y = LinearScale::new((value_floor(lo), hi), (h, 0.0)).nice(10);
        tracing::debug!(points = points.len(), y_max = y.domain().1, "line layout");

        let mut scene = blank_scene(frame, theme);
        let y_axis = Axis::new(self.y_title.clone(), frame.margin.left - 20.0)
            .with_ticks(y.ticks(self.y_ticks).into_iter().map(|t| y.map(t)));
        y_axis.draw_gridlines(&mut scene, frame, theme);

        let pixels: Vec<Point> = points.iter().map(|d| frame.to_outer(x.map(d.date), y.map(d.avg_likes))).collect();
        scene.push(Shape::Path {
            start: pixels[0],
            segments: natural_segments(&pixels),
            stroke: Stroke::new(theme.line_stroke, self.stroke_width),
        });

        let x_axis = Axis::new(self.x_title.clone(), frame.margin.bottom - 15.0)
            .with_ticks(x.ticks(points.len()).into_iter().map(|d| x.map(d)));
        x_axis.draw_bottom(&mut scene, frame, theme);
        y_axis.draw_left(&mut scene, frame, theme);
        Ok(scene)
    }
}
