// File: crates/likeplot-render-skia/src/lib.rs
// Summary: Skia renderer crate; rasterizes core Scenes on CPU surfaces to RGBA buffers and PNG.

pub mod text;

use anyhow::{Context, Result};
use likeplot_core::{Color, RenderOptions, Renderer, Scene, Segment, Shape, Stroke};
use skia_safe as skia;

pub use text::TextShaper;

/// Tightly described RGBA8 pixel buffer (unpremultiplied).
#[derive(Clone, Debug)]
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { shaper: TextShaper::new() }
    }

    /// Render the scene and encode it as PNG bytes.
    pub fn render_to_png_bytes(&self, scene: &Scene, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.raster(scene, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        scene: &Scene,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(scene, opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "png written");
        Ok(())
    }

    fn raster(&self, scene: &Scene, opts: &RenderOptions) -> Result<skia::Surface> {
        let (w, h) = dimensions(scene)?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(sk_color(scene.background));
        for shape in &scene.shapes {
            self.draw_shape(canvas, shape, opts);
        }
        Ok(surface)
    }

    fn draw_shape(&self, canvas: &skia::Canvas, shape: &Shape, opts: &RenderOptions) {
        match shape {
            Shape::Line { from, to, stroke } => {
                canvas.draw_line((from.x, from.y), (to.x, to.y), &stroke_paint(stroke, opts));
            }
            Shape::Rect { rect, fill, stroke } => {
                let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
                if let Some(fill) = fill {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(opts.anti_alias);
                    paint.set_style(skia::paint::Style::Fill);
                    paint.set_color(sk_color(*fill));
                    canvas.draw_rect(r, &paint);
                }
                if let Some(stroke) = stroke {
                    canvas.draw_rect(r, &stroke_paint(stroke, opts));
                }
            }
            Shape::Path { start, segments, stroke } => {
                if segments.is_empty() {
                    return;
                }
                let mut path = skia::Path::new();
                path.move_to((start.x, start.y));
                for seg in segments {
                    match *seg {
                        Segment::LineTo(p) => {
                            path.line_to((p.x, p.y));
                        }
                        Segment::CubicTo { c1, c2, to } => {
                            path.cubic_to((c1.x, c1.y), (c2.x, c2.y), (to.x, to.y));
                        }
                    }
                }
                canvas.draw_path(&path, &stroke_paint(stroke, opts));
            }
            Shape::Text { text, at, size, color, anchor, rotation_deg } => {
                if !opts.draw_labels {
                    return;
                }
                self.shaper.draw(canvas, text, at.x, at.y, *size, sk_color(*color), *anchor, *rotation_deg);
            }
        }
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SkiaRenderer {
    type Output = RgbaImage;

    fn id(&self) -> &'static str { "skia-raster" }

    fn render(&self, scene: &Scene, opts: &RenderOptions) -> Result<RgbaImage> {
        let mut surface = self.raster(scene, opts)?;
        let (w, h) = dimensions(scene)?;
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back {}x{} pixels failed", w, h);
        }
        Ok(RgbaImage { pixels, width: scene.width, height: scene.height, stride })
    }
}

// ---- helpers ----------------------------------------------------------------

fn dimensions(scene: &Scene) -> Result<(i32, i32)> {
    let w = i32::try_from(scene.width).context("scene width overflows i32")?;
    let h = i32::try_from(scene.height).context("scene height overflows i32")?;
    if w == 0 || h == 0 {
        anyhow::bail!("scene has zero area ({}x{})", w, h);
    }
    Ok((w, h))
}

fn sk_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke, opts: &RenderOptions) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(opts.anti_alias);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(sk_color(stroke.color));
    paint
}
