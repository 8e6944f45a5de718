use super::color::*;

/// Ellipse inscribed in an inclusive pixel bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub x_min: u32,
    pub y_min: u32,
    pub x_max: u32,
    pub y_max: u32,
}

impl Ellipse {
    pub const fn new(x_min: u32, y_min: u32, x_max: u32, y_max: u32) -> Self {
        Ellipse { x_min, y_min, x_max, y_max }
    }

    /// Whether the centre of pixel `(x, y)` lies inside the ellipse.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        if self.is_empty() {
            return false;
        }
        let rx = self.width() as f64 / 2.;
        let ry = self.height() as f64 / 2.;
        let dx = (x as f64 + 0.5 - self.x_min as f64 - rx) / rx;
        let dy = (y as f64 + 0.5 - self.y_min as f64 - ry) / ry;
        dx * dx + dy * dy <= 1.
    }

    /// A box with `x_max < x_min` or `y_max < y_min` covers nothing.
    pub fn is_empty(&self) -> bool {
        self.x_max < self.x_min || self.y_max < self.y_min
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() { 0 } else { self.x_max - self.x_min + 1 }
    }

    pub fn height(&self) -> u32 {
        if self.is_empty() { 0 } else { self.y_max - self.y_min + 1 }
    }
}

/// A translucent shape painted on top of the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub shape: Ellipse,
    pub color: Color,
    pub alpha: u8,
}

pub const DECORATIONS: [Overlay; 2] = [
    Overlay { shape: Ellipse::new(50, 50, 120, 120), color: WHITE, alpha: 50 },
    Overlay { shape: Ellipse::new(180, 150, 260, 220), color: WHITE, alpha: 30 },
];
