//! Pixel and segment primitives
//!
//! Segments are inclusive of both endpoints and accept them in either order.
//! Pixels are painted from the lower endpoint up; the first pixel off the
//! canvas stops the segment and the pixels already painted stay painted.

use super::Canvas;
use crate::errors::CanvasError;
use crate::types::Point;

fn span(a: u32, b: u32) -> std::ops::RangeInclusive<u32> {
    a.min(b)..=a.max(b)
}

impl Canvas {
    /// `L`: paint a single pixel.
    pub fn set_pixel(&mut self, point: Point, pixel: char) -> Result<(), CanvasError> {
        self.dimensions.check(point)?;
        self.put(point, pixel);
        Ok(())
    }

    /// `V`: paint column `col` from `from_row` to `to_row`.
    pub fn draw_vertical(
        &mut self,
        col: u32,
        from_row: u32,
        to_row: u32,
        pixel: char,
    ) -> Result<(), CanvasError> {
        let points = span(from_row, to_row).map(|row| Point::new(col, row));
        self.paint_all(points, pixel)
    }

    /// `H`: paint row `row` from `from_col` to `to_col`.
    pub fn draw_horizontal(
        &mut self,
        from_col: u32,
        to_col: u32,
        row: u32,
        pixel: char,
    ) -> Result<(), CanvasError> {
        let points = span(from_col, to_col).map(|col| Point::new(col, row));
        self.paint_all(points, pixel)
    }

    fn paint_all(
        &mut self,
        points: impl Iterator<Item = Point>,
        pixel: char,
    ) -> Result<(), CanvasError> {
        for point in points {
            self.set_pixel(point, pixel)?;
        }
        Ok(())
    }
}
