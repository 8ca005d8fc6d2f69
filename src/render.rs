//! Output adapter: writes a canvas to the host's sink

use std::io::{self, Write};

use crate::canvas::Canvas;

/// Knobs for how renders are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Append one `\n` after every render. Off by default, so `S` prints its
    /// rows joined by newlines and nothing after the last one.
    pub trailing_newline: bool,
}

impl Options {
    pub fn trailing_newline(mut self, on: bool) -> Self {
        self.trailing_newline = on;
        self
    }
}

/// Write `canvas` as `height` lines of `width` pixels.
pub fn render<W: Write + ?Sized>(canvas: &Canvas, options: Options, out: &mut W) -> io::Result<()> {
    let mut text = canvas.to_text();
    if options.trailing_newline {
        text.push('\n');
    }
    out.write_all(text.as_bytes())?;
    out.flush()
}
