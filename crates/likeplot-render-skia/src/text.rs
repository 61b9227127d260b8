// File: crates/likeplot-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; handles anchoring and rotation of scene text.

use likeplot_core::TextAnchor;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline through (x, y), aligned by `anchor`, rotated clockwise by `rotation_deg`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor: TextAnchor,
        rotation_deg: f32,
    ) {
        let p = self.layout(text, size, color);
        let dx = match anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -p.longest_line() * 0.5,
            TextAnchor::End => -p.longest_line(),
        };
        canvas.save();
        canvas.translate((x, y));
        if rotation_deg != 0.0 {
            canvas.rotate(rotation_deg, None);
        }
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (dx, -size * 0.8));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
