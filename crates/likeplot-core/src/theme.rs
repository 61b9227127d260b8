// File: crates/likeplot-core/src/theme.rs
// Summary: Light/Dark theming for chart colors, including the ordinal category palette.

use crate::scene::Color;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub tick: Color,
    pub whisker: Color,
    pub box_fill: Color,
    pub box_stroke: Color,
    pub median: Color,
    pub line_stroke: Color,
    /// Category colors, assigned in domain order and cycled.
    pub palette: Vec<Color>,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::WHITE,
            grid: Color::rgb(235, 235, 240),
            axis_line: Color::BLACK,
            axis_label: Color::BLACK,
            tick: Color::BLACK,
            whisker: Color::BLACK,
            box_fill: Color::rgb(0xaa, 0xd8, 0xd3),
            box_stroke: Color::BLACK,
            median: Color::RED,
            line_stroke: Color::rgb(0x46, 0x82, 0xb4), // steelblue
            palette: category_palette(),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::rgb(18, 18, 20),
            grid: Color::rgb(40, 40, 45),
            axis_line: Color::rgb(180, 180, 190),
            axis_label: Color::rgb(235, 235, 245),
            tick: Color::rgb(150, 150, 160),
            whisker: Color::rgb(200, 200, 210),
            box_fill: Color::rgb(0x3c, 0x6e, 0x69),
            box_stroke: Color::rgb(200, 200, 210),
            median: Color::rgb(220, 80, 80),
            line_stroke: Color::rgb(64, 160, 255),
            palette: category_palette(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

fn category_palette() -> Vec<Color> {
    vec![
        Color::rgb(0x1f, 0x77, 0xb4),
        Color::rgb(0xff, 0x7f, 0x0e),
        Color::rgb(0x2c, 0xa0, 0x2c),
    ]
}
