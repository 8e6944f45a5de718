use super::{canvas::*, color::*, ellipse::*, placeholder::*};

pub const DEFAULT_SIZE: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Side length of the square output, in pixels.
    pub size: u32,
    pub overlays: Vec<Overlay>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            size: DEFAULT_SIZE,
            overlays: DECORATIONS.to_vec(),
        }
    }
}

/// Color of scan-line `row`. The ratio is `row / size`, so the last row
/// stops one step short of `end`.
pub fn gradient_color(start: Color, end: Color, row: u32, size: u32) -> Color {
    Color::lerp(start, end, row as f64 / size as f64)
}

pub fn render(entry: &PlaceholderEntry, cfg: &RenderConfig) -> Canvas {
    let mut canvas = Canvas::new(cfg.size, cfg.size, entry.start);

    for y in 0 .. cfg.size {
        canvas.fill_row(y, gradient_color(entry.start, entry.end, y, cfg.size));
    }

    for overlay in &cfg.overlays {
        canvas.composite(overlay);
    }

    canvas
}
