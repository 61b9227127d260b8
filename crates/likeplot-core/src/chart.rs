// File: crates/likeplot-core/src/chart.rs
// Summary: Chart trait shared by the three chart builders (typed rows + frame + theme -> Scene).

use crate::error::StatsError;
use crate::scene::Scene;
use crate::theme::Theme;
use crate::types::Frame;

/// A chart layout: turns typed rows into a scene of pixel-space shapes.
///
/// Building never draws; pass the scene to a [`crate::Renderer`].
pub trait Chart {
    type Datum;
    fn id(&self) -> &'static str;
    fn frame(&self) -> &Frame;
    fn build(&self, data: &[Self::Datum], theme: &Theme) -> Result<Scene, StatsError>;
}

pub(crate) fn blank_scene(frame: &Frame, theme: &Theme) -> Scene {
    Scene::new(frame.width, frame.height, theme.background)
}

pub(crate) fn finite(group: impl FnOnce() -> String, v: f64) -> Result<f64, StatsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(StatsError::NonFinite { group: group(), value: v })
    }
}

/// Lower bound of a value axis: zero unless data dips below it.
pub(crate) fn value_floor(min: f64) -> f64 {
    min.min(0.0)
}
