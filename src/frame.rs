//! Matrix frame buffer

use crate::color::{BLACK, Rgb};

/// Matrix width in pixels
pub const WIDTH: usize = 16;
/// Matrix height in pixels
pub const HEIGHT: usize = 16;

/// A lit pixel as handed to the display driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u8,
    pub y: u8,
    pub color: Rgb,
}

/// One full 16x16 frame, row-major.
///
/// Drawing outside the matrix is silently clipped, so shape code can work in
/// unbounded coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [Rgb; WIDTH * HEIGHT],
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            pixels: [BLACK; WIDTH * HEIGHT],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Set one pixel, ignoring coordinates outside the matrix
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(index) = Self::index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Read one pixel
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        Self::index(x, y).map(|index| self.pixels[index])
    }

    /// Whether nothing is lit
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| *p == BLACK)
    }

    /// Number of lit pixels
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| **p != BLACK).count()
    }

    /// Raw row-major pixel data
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Iterate over lit pixels as `(x, y, color)`
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, color)| **color != BLACK)
            .map(|(i, color)| Pixel {
                x: (i % WIDTH) as u8,
                y: (i / WIDTH) as u8,
                color: *color,
            })
    }

    #[allow(clippy::cast_possible_wrap)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        Some(y as usize * WIDTH + x as usize)
    }
}
