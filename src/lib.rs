use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use pest_derive::Parser;

pub mod ast;
pub mod canvas;
pub mod errors;
pub mod interpreter;
pub mod log;
pub mod parse;
pub mod render;
pub mod types;

pub use canvas::{Canvas, DEFAULT_PIXEL};
pub use errors::{CanvasError, ErrorKind, ScriptError};
pub use interpreter::{Interpreter, State};
pub use render::Options;

#[derive(Parser)]
#[grammar = "script.pest"]
pub struct ScriptParser;

/// Printed instead of running when the script path is absent or unreadable.
pub const MISSING_FILE_MESSAGE: &str = "please provide correct file\n";

/// Run an in-memory script and return everything it rendered.
pub fn execute(source: &str) -> Result<String, ScriptError> {
    execute_with(source, Options::default())
}

/// Like [`execute`], with explicit render options.
pub fn execute_with(source: &str, options: Options) -> Result<String, ScriptError> {
    let mut interp = Interpreter::new(Vec::new()).with_options(options);
    interp.run(source.lines())?;
    Ok(String::from_utf8_lossy(&interp.into_output()).into_owned())
}

/// Host entry: run the script at `path`, writing renders to `out`.
///
/// A missing path, or one that is not a readable file, writes
/// [`MISSING_FILE_MESSAGE`] and returns `Ok`. Script errors propagate; output
/// written before the error stays in `out`.
pub fn run_file<W: Write>(
    path: Option<&Path>,
    options: Options,
    out: &mut W,
) -> Result<(), ScriptError> {
    let opened = path
        .filter(|p| p.is_file())
        .and_then(|p| File::open(p).ok().map(|file| (p, file)));
    let Some((path, file)) = opened else {
        out.write_all(MISSING_FILE_MESSAGE.as_bytes())?;
        out.flush()?;
        return Ok(());
    };

    let mut interp = Interpreter::new(out)
        .with_options(options)
        .named(path.display().to_string());
    interp.run_reader(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pest::Parser;

    #[test]
    fn parse_record_rule() {
        let result = ScriptParser::parse(Rule::record, "H 1 3 2 R");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn parse_integer_rule_rejects_mixed_tokens() {
        assert!(ScriptParser::parse(Rule::integer, "12").is_ok());
        let mixed = ScriptParser::parse(Rule::integer, "12a");
        assert!(mixed.is_err(), "unexpected parse: {:?}", mixed.ok());
    }

    #[test]
    fn parse_blank_record() {
        let result = ScriptParser::parse(Rule::record, "  \t");
        assert!(result.is_ok(), "Failed to parse: {:?}", result.err());
    }

    #[test]
    fn execute_init_and_show() {
        assert_eq!(execute("I 5 3\nS").unwrap(), "OOOOO\nOOOOO\nOOOOO");
    }

    #[test]
    fn execute_without_show_prints_nothing() {
        assert_eq!(execute("I 5 3\nL 1 1 R").unwrap(), "");
    }

    #[test]
    fn execute_with_trailing_newline() {
        let options = Options::default().trailing_newline(true);
        assert_eq!(execute_with("I 2 1\nS", options).unwrap(), "OO\n");
    }
}
