//! Coordinate primitives and bounds validation.
//!
//! The external contract is 1-indexed: column 1 is the leftmost pixel and row
//! 1 the topmost. Storage is 0-indexed; `Dimensions::index` is the only place
//! the translation happens.

use std::fmt;

use crate::errors::CanvasError;

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 250;

/// Smallest accepted width, height or coordinate.
pub const MIN_COORDINATE: u32 = 1;

/// A 1-indexed pixel position: `col` is X, `row` is Y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub col: u32,
    pub row: u32,
}

impl Point {
    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// The pixel one row below.
    #[inline]
    pub fn down(self) -> Point {
        Point::new(self.col, self.row.saturating_add(1))
    }

    /// The pixel one column to the right.
    #[inline]
    pub fn right(self) -> Point {
        Point::new(self.col.saturating_add(1), self.row)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Canvas size in pixels. Both sides are always within
/// `[MIN_COORDINATE, MAX_DIMENSION]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Validate a requested size against the absolute limits.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(CanvasError::DimensionsTooLarge { width, height });
        }
        if width < MIN_COORDINATE || height < MIN_COORDINATE {
            return Err(CanvasError::DimensionsTooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `point` lies on the canvas.
    #[inline]
    pub fn contains(self, point: Point) -> bool {
        (MIN_COORDINATE..=self.width).contains(&point.col)
            && (MIN_COORDINATE..=self.height).contains(&point.row)
    }

    /// Fail with `OutOfBounds` unless `point` lies on the canvas.
    pub fn check(self, point: Point) -> Result<(), CanvasError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(CanvasError::OutOfBounds {
                point,
                dimensions: self,
            })
        }
    }

    /// Row-major storage offset of a checked point.
    #[inline]
    pub(crate) fn index(self, point: Point) -> usize {
        debug_assert!(self.contains(point));
        (point.row - 1) as usize * self.width as usize + (point.col - 1) as usize
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col={}, row={}", self.width, self.height)
    }
}
