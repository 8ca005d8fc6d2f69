//! The script interpreter
//!
//! Records are handled strictly in order: recognise the command word, check
//! the interpreter has a canvas (only `I` may run before one exists), bind
//! the arguments, then apply the command. The first failure stops the run.

use std::io::{self, BufRead, Write};

use miette::SourceSpan;

use crate::ast::{Arg, Command, CommandKind, InitArgs};
use crate::canvas::Canvas;
use crate::errors::{BindError, CanvasError, ScriptError, SourceContext};
use crate::log::debug;
use crate::parse::parse_record;
use crate::render::{Options, render};

/// Whether a canvas exists yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Active(Canvas),
}

/// Why applying a bound command failed
#[derive(Debug)]
enum Failure {
    /// `execute_line` rejects non-`I` commands before binding, so this only
    /// keeps `dispatch` total over `State`.
    Uninitialized,
    Canvas(CanvasError),
    Io(io::Error),
}

impl From<CanvasError> for Failure {
    fn from(e: CanvasError) -> Self {
        Failure::Canvas(e)
    }
}

impl From<io::Error> for Failure {
    fn from(e: io::Error) -> Self {
        Failure::Io(e)
    }
}

fn active(state: &mut State) -> Result<&mut Canvas, Failure> {
    match state {
        State::Active(canvas) => Ok(canvas),
        State::Uninitialized => Err(Failure::Uninitialized),
    }
}

/// Runs script lines against a single canvas, writing renders to `out`
pub struct Interpreter<W: Write> {
    state: State,
    out: W,
    options: Options,
    name: String,
    line: usize,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self {
            state: State::Uninitialized,
            out,
            options: Options::default(),
            name: "<input>".to_string(),
            line: 0,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Name used for the script in diagnostics
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        match &self.state {
            State::Active(canvas) => Some(canvas),
            State::Uninitialized => None,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every line in order, stopping at the first error.
    ///
    /// Lines after the failing one are never read.
    pub fn run<I, S>(&mut self, lines: I) -> Result<(), ScriptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.execute_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Pull lines from `reader` one at a time and run each before reading the next.
    pub fn run_reader<R: BufRead>(&mut self, reader: R) -> Result<(), ScriptError> {
        for line in reader.lines() {
            self.execute_line(&line?)?;
        }
        Ok(())
    }

    /// Run a single record.
    ///
    /// Halting is the caller's job: an error leaves the interpreter usable,
    /// with the canvas as the failing command left it. [`Interpreter::run`]
    /// and [`Interpreter::run_reader`] stop at the first error.
    pub fn execute_line(&mut self, text: &str) -> Result<(), ScriptError> {
        self.line += 1;
        let ctx = SourceContext::new(self.name.clone(), self.line, text);

        let record = parse_record(text).map_err(|e| ScriptError::InvalidCommand {
            reason: e.to_string(),
            src: ctx.named_source(),
            span: ctx.whole_line(),
            what: "could not split this line",
            help: None,
        })?;

        let Some(word) = record.command else {
            return Err(ScriptError::InvalidCommand {
                reason: "The command is invalid".to_string(),
                src: ctx.named_source(),
                span: ctx.whole_line(),
                what: "empty line",
                help: Some(known_commands()),
            });
        };

        let Some(kind) = CommandKind::from_word(&word.text) else {
            return Err(ScriptError::InvalidCommand {
                reason: format!("The command is invalid: {:?}", word.text),
                src: ctx.named_source(),
                span: word.span,
                what: "unknown command",
                help: Some(known_commands()),
            });
        };

        if kind != CommandKind::Init && matches!(self.state, State::Uninitialized) {
            return Err(not_initialized(&ctx, word.span));
        }

        let command = Command::bind(kind, &record.args).map_err(|e| {
            let span = match &e {
                BindError::WrongArity { .. } => ctx.whole_line(),
                BindError::ExpectedInteger { index } | BindError::ExpectedPixel { index, .. } => {
                    record.args[*index].span
                }
            };
            ScriptError::InvalidCommand {
                reason: e.to_string(),
                src: ctx.named_source(),
                span,
                what: "does not fit this command",
                help: Some(format!("usage: {}", kind.usage())),
            }
        })?;

        debug!(line = self.line, command = ?command, "dispatch");

        self.dispatch(command).map_err(|failure| match failure {
            Failure::Uninitialized => not_initialized(&ctx, word.span),
            Failure::Canvas(cause) => ScriptError::OutOfBoundCoordinates {
                cause,
                src: ctx.named_source(),
                span: coordinate_span(kind, &record.args).unwrap_or_else(|| ctx.whole_line()),
            },
            Failure::Io(e) => ScriptError::Io(e),
        })
    }

    fn dispatch(&mut self, command: Command) -> Result<(), Failure> {
        match command {
            Command::Init(InitArgs { width, height }) => {
                self.state = State::Active(Canvas::new(width, height)?);
            }
            Command::Clear => active(&mut self.state)?.clear(),
            Command::Line(args) => active(&mut self.state)?.set_pixel(args.at, args.pixel)?,
            Command::Vert(args) => active(&mut self.state)?.draw_vertical(
                args.col,
                args.from_row,
                args.to_row,
                args.pixel,
            )?,
            Command::Horiz(args) => active(&mut self.state)?.draw_horizontal(
                args.from_col,
                args.to_col,
                args.row,
                args.pixel,
            )?,
            Command::Fill(args) => {
                active(&mut self.state)?.fill(args.at, args.pixel)?;
            }
            Command::Show => render(active(&mut self.state)?, self.options, &mut self.out)?,
        }
        Ok(())
    }
}

fn known_commands() -> String {
    let letters: Vec<&str> = CommandKind::ALL.iter().map(|k| k.letter()).collect();
    format!("commands are {}", letters.join(", "))
}

fn not_initialized(ctx: &SourceContext, span: SourceSpan) -> ScriptError {
    ScriptError::InvalidCommand {
        reason: "First command should be bitmap initialization".to_string(),
        src: ctx.named_source(),
        span,
        what: "no bitmap yet",
        help: Some(format!("start the script with `{}`", CommandKind::Init.usage())),
    }
}

/// Span over the arguments that name dimensions or coordinates.
fn coordinate_span(kind: CommandKind, args: &[Arg]) -> Option<SourceSpan> {
    let count = match kind {
        CommandKind::Init | CommandKind::Line | CommandKind::Fill => 2,
        CommandKind::Vert | CommandKind::Horiz => 3,
        CommandKind::Clear | CommandKind::Show => return None,
    };
    let first = args.first()?.span;
    let last = args.get(count - 1)?.span;
    let end = last.offset() + last.len();
    Some((first.offset(), end - first.offset()).into())
}
