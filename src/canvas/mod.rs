//! In-memory character raster
//!
//! This module is organized into submodules:
//! - `draw`: single pixels and straight segments
//! - `fill`: the down/right region fill

pub mod draw;
pub mod fill;

use crate::errors::CanvasError;
use crate::types::{Dimensions, Point};

/// Colour every pixel starts with and returns to on clear.
pub const DEFAULT_PIXEL: char = 'O';

/// A rectangular grid of single-character pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    dimensions: Dimensions,
    pixels: Vec<char>,
}

impl Canvas {
    /// Allocate a canvas filled with [`DEFAULT_PIXEL`].
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        let dimensions = Dimensions::new(width, height)?;
        Ok(Self {
            dimensions,
            pixels: vec![DEFAULT_PIXEL; dimensions.area()],
        })
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dimensions.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.dimensions.height()
    }

    /// Reset every pixel to [`DEFAULT_PIXEL`], keeping the size.
    pub fn clear(&mut self) {
        self.pixels.fill(DEFAULT_PIXEL);
    }

    /// Read a pixel.
    pub fn get(&self, point: Point) -> Result<char, CanvasError> {
        self.dimensions.check(point)?;
        Ok(self.pixels[self.dimensions.index(point)])
    }

    /// Raw write for callers that already validated `point`.
    pub(crate) fn put(&mut self, point: Point, pixel: char) {
        let index = self.dimensions.index(point);
        self.pixels[index] = pixel;
    }

    /// Rows from top to bottom, each from column 1 to `width`.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.pixels.chunks(self.width() as usize)
    }

    /// Rows joined by `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.pixels.len() + self.height() as usize);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}
