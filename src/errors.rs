//! Error types with rich diagnostics using miette
//!
//! Canvas and binding errors are plain values raised by the lower layers.
//! The interpreter decorates them with the offending script line so hosts get
//! a labelled snippet instead of a bare message.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::CommandKind;
use crate::types::{Dimensions, MAX_DIMENSION, MIN_COORDINATE, Point};

/// One script line, kept around for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the script (filename or "<input>")
    pub name: String,
    /// 1-based line number within the script
    pub line: usize,
    /// The line text, without its terminator
    pub text: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, line: usize, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            line,
            text: text.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(format!("{}:{}", self.name, self.line), self.text.clone())
    }

    /// Span covering the whole line
    pub fn whole_line(&self) -> SourceSpan {
        (0, self.text.len()).into()
    }
}

// ============================================================================
// Canvas Errors
// ============================================================================

/// Errors raised by the canvas and the coordinate validator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    #[error("co-ordinate is greater than {max} (requested {width}x{height})", max = MAX_DIMENSION)]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("co-ordinate is smaller than {min} (requested {width}x{height})", min = MIN_COORDINATE)]
    DimensionsTooSmall { width: u32, height: u32 },

    #[error("co-ordinate {point} is outside the bitmap boundary: {dimensions}")]
    OutOfBounds { point: Point, dimensions: Dimensions },
}

// ============================================================================
// Binding Errors
// ============================================================================

/// A recognised command whose arguments do not fit it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("{command} takes {expected} argument(s), found {found}")]
    WrongArity {
        command: CommandKind,
        expected: usize,
        found: usize,
    },

    #[error("argument {} must be a non-negative integer", .index + 1)]
    ExpectedInteger { index: usize },

    #[error("argument {} must be a single character, found {found:?}", .index + 1)]
    ExpectedPixel { index: usize, found: String },
}

// ============================================================================
// Script Errors
// ============================================================================

/// Coarse classification of a script failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidCommand,
    OutOfBoundCoordinates,
    Io,
}

/// Errors surfaced by the interpreter to its host
#[derive(Error, Diagnostic, Debug)]
pub enum ScriptError {
    #[error("invalid command: {reason}")]
    #[diagnostic(code(bitmap_editor::invalid_command))]
    InvalidCommand {
        reason: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{what}")]
        span: SourceSpan,
        what: &'static str,
        #[help]
        help: Option<String>,
    },

    #[error("out of bound coordinates: {cause}")]
    #[diagnostic(code(bitmap_editor::out_of_bound_coordinates))]
    OutOfBoundCoordinates {
        cause: CanvasError,
        #[source_code]
        src: NamedSource<String>,
        #[label("outside the bitmap")]
        span: SourceSpan,
    },

    #[error("i/o error while running script")]
    #[diagnostic(code(bitmap_editor::io))]
    Io(#[from] std::io::Error),
}

impl ScriptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScriptError::InvalidCommand { .. } => ErrorKind::InvalidCommand,
            ScriptError::OutOfBoundCoordinates { .. } => ErrorKind::OutOfBoundCoordinates,
            ScriptError::Io(_) => ErrorKind::Io,
        }
    }
}
