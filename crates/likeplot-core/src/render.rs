// File: crates/likeplot-core/src/render.rs
// Summary: Renderer capability: turn a finished Scene into some output (pixels, bytes, ...).

use anyhow::Result;

use crate::scene::Scene;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Draw text shapes. Off gives font-independent output for snapshots.
    pub draw_labels: bool,
    /// Anti-alias strokes and fills.
    pub anti_alias: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, anti_alias: true }
    }
}

/// Backend that draws a scene. Implementations live outside the core crate.
pub trait Renderer {
    type Output;
    fn id(&self) -> &'static str;
    fn render(&self, scene: &Scene, opts: &RenderOptions) -> Result<Self::Output>;
}
