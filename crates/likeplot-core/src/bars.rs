// File: crates/likeplot-core/src/bars.rs
// Summary: Grouped bar layout: platforms on an outer band scale, post types nested inside each band.

use crate::axis::Axis;
use crate::chart::{blank_scene, finite, value_floor, Chart};
use crate::error::StatsError;
use crate::geometry::RectF;
use crate::loader::PlatformAverage;
use crate::scale::{distinct, BandScale, LinearScale, OrdinalScale};
use crate::scene::Scene;
use crate::theme::Theme;
use crate::types::{Frame, Margin};

#[derive(Clone, Debug)]
pub struct GroupedBarChart {
    pub frame: Frame,
    pub x_title: String,
    pub y_title: String,
    /// Gap between platform groups, as a fraction of the outer step.
    pub group_padding: f64,
    /// Padding between bars inside a group.
    pub bar_padding: f64,
    /// Multiplier on the largest value to leave room above the tallest bar.
    pub headroom: f64,
    pub y_ticks: usize,
}

impl Default for GroupedBarChart {
    fn default() -> Self {
        Self {
            frame: Frame::new(700, 420, Margin::new(20.0, 150.0, 50.0, 60.0)),
            x_title: "Platform".to_string(),
            y_title: "Average Likes".to_string(),
            group_padding: 0.2,
            bar_padding: 0.1,
            headroom: 1.2,
            y_ticks: 10,
        }
    }
}

impl GroupedBarChart {
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

impl Chart for GroupedBarChart {
    type Datum = PlatformAverage;

    fn id(&self) -> &'static str { "grouped_bar" }

    fn frame(&self) -> &Frame { &self.frame }

    fn build(&self, data: &[PlatformAverage], theme: &Theme) -> Result<Scene, StatsError> {
        if data.is_empty() {
            return Err(StatsError::EmptyInput);
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for d in data {
            let v = finite(|| format!("{}/{}", d.platform, d.post_type), d.avg_likes)?;
            lo = lo.min(v);
            hi = hi.max(v);
        }

        let frame = &self.frame;
        let w = frame.plot_width() as f64;
        let h = frame.plot_height() as f64;

        let platforms = distinct(data.iter().map(|d| d.platform.as_str()));
        let post_types = distinct(data.iter().map(|d| d.post_type.as_str()));
        let x0 = BandScale::new(platforms.clone(), (0.0, w)).padding_inner(self.group_padding);
        let x1 = BandScale::new(post_types.clone(), (0.0, x0.bandwidth())).padding(self.bar_padding);
        let y = LinearScale::new((value_floor(lo), hi.max(0.0) * self.headroom), (h, 0.0)).nice(self.y_ticks);
        let color = OrdinalScale::new(post_types, theme.palette.clone());
        tracing::debug!(platforms = platforms.len(), bars = data.len(), y_max = y.domain().1, "grouped bar layout");

        let mut scene = blank_scene(frame, theme);
        let y_axis = Axis::new(self.y_title.clone(), frame.margin.left - 15.0)
            .with_ticks(y.ticks(self.y_ticks).into_iter().map(|t| y.map(t)));
        y_axis.draw_gridlines(&mut scene, frame, theme);

        let bw = x1.bandwidth() as f32;
        let base = y.map(0.0);
        for d in data {
            let (Some(g), Some(b)) = (x0.position(&d.platform), x1.position(&d.post_type)) else { continue };
            let top = frame.to_outer(g + b, y.map(d.avg_likes));
            let bottom = frame.to_outer(g + b, base);
            let fill = color.color(&d.post_type).unwrap_or(theme.line_stroke);
            scene.rect(RectF::from_x_span(top.x, bw, top.y, bottom.y), Some(fill), None);
        }

        let x_axis = Axis::new(self.x_title.clone(), frame.margin.bottom - 10.0)
            .with_ticks(platforms.iter().filter_map(|p| x0.center(p)));
        x_axis.draw_bottom(&mut scene, frame, theme);
        y_axis.draw_left(&mut scene, frame, theme);
        Ok(scene)
    }
}
