use image::{ImageBuffer, RgbImage};

use super::{color::*, ellipse::*, error::*};

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Canvas {
            width, height,
            pixels: vec![fill; width as usize * height as usize]
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.pixels[start .. start + self.width as usize]
    }

    pub fn fill_row(&mut self, y: u32, color: Color) {
        let start = self.index(0, y);
        let end = start + self.width as usize;
        self.pixels[start .. end].fill(color);
    }

    /// Blends `overlay` into every covered pixel. Parts of the shape that
    /// fall outside the canvas are clipped.
    pub fn composite(&mut self, overlay: &Overlay) {
        let shape = overlay.shape;
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x_max = shape.x_max.min(self.width - 1);
        let y_max = shape.y_max.min(self.height - 1);

        for y in shape.y_min ..= y_max {
            for x in shape.x_min ..= x_max {
                if shape.contains(x, y) {
                    let i = self.index(x, y);
                    self.pixels[i] = self.pixels[i].blend(overlay.color, overlay.alpha);
                }
            }
        }
    }

    pub fn to_rgb8(&self) -> Result<RgbImage, PlaceholderError> {
        let raw = self.pixels.iter()
            .flat_map(|c| c.to_array())
            .collect();
        ImageBuffer::from_raw(self.width, self.height, raw)
            .ok_or(PlaceholderError::CanvasSize)
    }
}
