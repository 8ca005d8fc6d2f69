//! Region fill
//!
//! The fill only ever grows down and to the right of the seed. Candidates are
//! processed first-in first-out; a candidate is painted when it still holds
//! the seed's original colour, and only painted candidates enqueue their own
//! down and right neighbours. Every popped candidate is marked visited whether
//! or not it matched.

use std::collections::VecDeque;

use super::Canvas;
use crate::errors::CanvasError;
use crate::log::{debug, trace};
use crate::types::Point;

impl Canvas {
    /// `F`: fill from `seed` with `pixel`. Returns the number of pixels painted.
    pub fn fill(&mut self, seed: Point, pixel: char) -> Result<usize, CanvasError> {
        let dims = self.dimensions;
        dims.check(seed)?;

        let target = self.pixels[dims.index(seed)];
        let mut visited = vec![false; dims.area()];
        let mut queue = VecDeque::new();

        self.put(seed, pixel);
        visited[dims.index(seed)] = true;
        let mut painted = 1;

        let push_neighbours = |queue: &mut VecDeque<Point>, from: Point| {
            for next in [from.down(), from.right()] {
                if dims.contains(next) {
                    queue.push_back(next);
                }
            }
        };
        push_neighbours(&mut queue, seed);

        while let Some(point) = queue.pop_front() {
            let index = dims.index(point);
            if visited[index] {
                continue;
            }
            if self.pixels[index] == target {
                trace!(col = point.col, row = point.row, "fill paints");
                self.pixels[index] = pixel;
                painted += 1;
                push_neighbours(&mut queue, point);
            }
            visited[index] = true;
        }

        debug!(col = seed.col, row = seed.row, %pixel, painted, "fill done");
        Ok(painted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas_from(text: &str) -> Canvas {
        let rows: Vec<&str> = text.lines().collect();
        let mut canvas = Canvas::new(rows[0].len() as u32, rows.len() as u32).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                canvas
                    .set_pixel(Point::new(c as u32 + 1, r as u32 + 1), ch)
                    .unwrap();
            }
        }
        canvas
    }

    #[test]
    fn fills_whole_canvas_from_top_left() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        let painted = canvas.fill(Point::new(1, 1), 'X').unwrap();
        assert_eq!(painted, 12);
        assert_eq!(canvas.to_text(), "XXXX\nXXXX\nXXXX");
    }

    #[test]
    fn never_grows_up_or_left() {
        let mut canvas = Canvas::new(4, 4).unwrap();
        canvas.fill(Point::new(2, 3), 'X').unwrap();
        insta::assert_snapshot!(canvas.to_text(), @r"
        OOOO
        OOOO
        OXXX
        OXXX
        ");
    }

    #[test]
    fn stops_at_other_colours() {
        let mut canvas = canvas_from("OOOO\nOOAO\nOAOO\nOOOO");
        canvas.fill(Point::new(1, 1), 'X').unwrap();
        insta::assert_snapshot!(canvas.to_text(), @r"
        XXXX
        XXAX
        XAOX
        XXXX
        ");
    }

    #[test]
    fn does_not_reach_around_corners() {
        // (2,2) matches the target but every down/right path to it crosses an A.
        let mut canvas = canvas_from("OAO\nAOO\nOOO");
        canvas.fill(Point::new(1, 1), 'X').unwrap();
        assert_eq!(canvas.to_text(), "XAO\nAOO\nOOO");
    }

    #[test]
    fn seed_is_painted_even_when_isolated() {
        let mut canvas = canvas_from("OA\nAA");
        assert_eq!(canvas.fill(Point::new(1, 1), 'X').unwrap(), 1);
        assert_eq!(canvas.to_text(), "XA\nAA");
    }

    #[test]
    fn seed_colour_is_the_target() {
        let mut canvas = canvas_from("AAO\nAOO\nOOO");
        canvas.fill(Point::new(1, 1), 'B').unwrap();
        assert_eq!(canvas.to_text(), "BBO\nBOO\nOOO");
    }

    #[test]
    fn refilling_with_the_same_colour_terminates() {
        let mut canvas = Canvas::new(5, 5).unwrap();
        assert_eq!(canvas.fill(Point::new(1, 1), 'O').unwrap(), 25);
        assert_eq!(canvas, Canvas::new(5, 5).unwrap());
    }

    #[test]
    fn seeds_on_the_last_row_and_column() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.fill(Point::new(2, 3), 'X').unwrap();
        assert_eq!(canvas.to_text(), "OOO\nOOO\nOXX");

        let mut canvas = Canvas::new(3, 3).unwrap();
        canvas.fill(Point::new(3, 2), 'X').unwrap();
        assert_eq!(canvas.to_text(), "OOO\nOOX\nOOX");
    }

    #[test]
    fn single_column_and_row_canvases() {
        let mut canvas = Canvas::new(1, 4).unwrap();
        canvas.fill(Point::new(1, 2), 'X').unwrap();
        assert_eq!(canvas.to_text(), "O\nX\nX\nX");

        let mut canvas = Canvas::new(4, 1).unwrap();
        canvas.fill(Point::new(2, 1), 'X').unwrap();
        assert_eq!(canvas.to_text(), "OXXX");
    }

    #[test]
    fn out_of_bounds_seed_is_rejected() {
        let mut canvas = Canvas::new(3, 3).unwrap();
        assert!(canvas.fill(Point::new(4, 1), 'X').is_err());
        assert!(canvas.fill(Point::new(1, 0), 'X').is_err());
        assert_eq!(canvas, Canvas::new(3, 3).unwrap());
    }
}
