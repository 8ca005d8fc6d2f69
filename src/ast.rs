//! Syntax types for bitmap scripts
//!
//! A script line parses into a [`Record`]: a command word plus loosely typed
//! arguments. Binding a record against its [`CommandKind`] produces a typed
//! [`Command`] ready for dispatch.

use std::fmt;

use miette::SourceSpan;

use crate::errors::BindError;
use crate::types::Point;

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// First token of the line, `None` for a blank line
    pub command: Option<Word>,
    pub args: Vec<Arg>,
}

/// A token with its byte span in the line
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub span: SourceSpan,
}

/// A command argument
#[derive(Debug, Clone, PartialEq)]
pub struct Arg {
    pub value: ArgValue,
    pub span: SourceSpan,
}

/// Digit-only tokens are coerced to integers, everything else stays text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Int(u32),
    Text(String),
}

impl ArgValue {
    fn as_int(&self) -> Option<u32> {
        match self {
            ArgValue::Int(n) => Some(*n),
            ArgValue::Text(_) => None,
        }
    }

    /// The pixel this argument paints with.
    ///
    /// Integers print as their coerced value, so `07` paints `7`.
    fn as_pixel(&self) -> Result<char, String> {
        let text = match self {
            ArgValue::Int(n) => n.to_string(),
            ArgValue::Text(s) => s.clone(),
        };
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(text),
        }
    }
}

/// The recognised command letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Init,
    Clear,
    Line,
    Vert,
    Horiz,
    Fill,
    Show,
}

impl CommandKind {
    pub const ALL: [CommandKind; 7] = [
        CommandKind::Init,
        CommandKind::Clear,
        CommandKind::Line,
        CommandKind::Vert,
        CommandKind::Horiz,
        CommandKind::Fill,
        CommandKind::Show,
    ];

    /// Look up a command word. Matching is exact and case-sensitive.
    pub fn from_word(word: &str) -> Option<CommandKind> {
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == word)
    }

    pub fn letter(self) -> &'static str {
        match self {
            CommandKind::Init => "I",
            CommandKind::Clear => "C",
            CommandKind::Line => "L",
            CommandKind::Vert => "V",
            CommandKind::Horiz => "H",
            CommandKind::Fill => "F",
            CommandKind::Show => "S",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            CommandKind::Clear | CommandKind::Show => 0,
            CommandKind::Init => 2,
            CommandKind::Line | CommandKind::Fill => 3,
            CommandKind::Vert | CommandKind::Horiz => 4,
        }
    }

    /// Usage line shown in diagnostics
    pub fn usage(self) -> &'static str {
        match self {
            CommandKind::Init => "I <columns> <rows>",
            CommandKind::Clear => "C",
            CommandKind::Line => "L <x> <y> <colour>",
            CommandKind::Vert => "V <x> <y1> <y2> <colour>",
            CommandKind::Horiz => "H <x1> <x2> <y> <colour>",
            CommandKind::Fill => "F <x> <y> <colour>",
            CommandKind::Show => "S",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// `I width height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitArgs {
    pub width: u32,
    pub height: u32,
}

/// `L x y colour` and `F x y colour`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelArgs {
    pub at: Point,
    pub pixel: char,
}

/// `V x y1 y2 colour`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertArgs {
    pub col: u32,
    pub from_row: u32,
    pub to_row: u32,
    pub pixel: char,
}

/// `H x1 x2 y colour`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizArgs {
    pub from_col: u32,
    pub to_col: u32,
    pub row: u32,
    pub pixel: char,
}

/// A fully bound command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Init(InitArgs),
    Clear,
    Line(PixelArgs),
    Vert(VertArgs),
    Horiz(HorizArgs),
    Fill(PixelArgs),
    Show,
}

impl Command {
    /// Check arity and argument types for `kind`.
    pub fn bind(kind: CommandKind, args: &[Arg]) -> Result<Command, BindError> {
        if args.len() != kind.arity() {
            return Err(BindError::WrongArity {
                command: kind,
                expected: kind.arity(),
                found: args.len(),
            });
        }

        let int = |index: usize| {
            args[index]
                .value
                .as_int()
                .ok_or(BindError::ExpectedInteger { index })
        };
        let pixel = |index: usize| {
            args[index]
                .value
                .as_pixel()
                .map_err(|found| BindError::ExpectedPixel { index, found })
        };

        let command = match kind {
            CommandKind::Init => Command::Init(InitArgs {
                width: int(0)?,
                height: int(1)?,
            }),
            CommandKind::Clear => Command::Clear,
            CommandKind::Line => Command::Line(PixelArgs {
                at: Point::new(int(0)?, int(1)?),
                pixel: pixel(2)?,
            }),
            CommandKind::Vert => Command::Vert(VertArgs {
                col: int(0)?,
                from_row: int(1)?,
                to_row: int(2)?,
                pixel: pixel(3)?,
            }),
            CommandKind::Horiz => Command::Horiz(HorizArgs {
                from_col: int(0)?,
                to_col: int(1)?,
                row: int(2)?,
                pixel: pixel(3)?,
            }),
            CommandKind::Fill => Command::Fill(PixelArgs {
                at: Point::new(int(0)?, int(1)?),
                pixel: pixel(2)?,
            }),
            CommandKind::Show => Command::Show,
        };
        Ok(command)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Init(_) => CommandKind::Init,
            Command::Clear => CommandKind::Clear,
            Command::Line(_) => CommandKind::Line,
            Command::Vert(_) => CommandKind::Vert,
            Command::Horiz(_) => CommandKind::Horiz,
            Command::Fill(_) => CommandKind::Fill,
            Command::Show => CommandKind::Show,
        }
    }
}
