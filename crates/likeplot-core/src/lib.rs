// File: crates/likeplot-core/src/lib.rs
// Summary: Core library entry point; stats rollup, scales, CSV loading and chart scene construction.

pub mod stats;
pub mod error;
pub mod grid;
pub mod geometry;
pub mod types;
pub mod scale;
pub mod scene;
pub mod theme;
pub mod curve;
pub mod axis;
pub mod loader;
pub mod chart;
pub mod boxplot;
pub mod bars;
pub mod timeline;
pub mod render;

pub use stats::{quantile_sorted, rollup, rollup_by, GroupSummary, Record, Rollup};
pub use error::{DataError, StatsError};
pub use scale::{BandScale, LinearScale, OrdinalScale, TimeScale};
pub use scene::{Color, Scene, Segment, Shape, Stroke, TextAnchor};
pub use types::{Frame, Margin};
pub use theme::Theme;
pub use loader::{DailyAverage, PlatformAverage};
pub use chart::Chart;
pub use boxplot::BoxplotChart;
pub use bars::GroupedBarChart;
pub use timeline::LineChart;
pub use render::{RenderOptions, Renderer};
