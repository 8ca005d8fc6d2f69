//! File host behaviour: missing inputs, partial output, error propagation.

use std::path::{Path, PathBuf};

use bitmap_editor::{ErrorKind, MISSING_FILE_MESSAGE, Options, ScriptError, run_file};
use miette::Diagnostic;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/scripts")
        .join(name)
}

fn run(path: Option<&Path>) -> (Result<(), ScriptError>, String) {
    let mut sink = Vec::new();
    let result = run_file(path, Options::default(), &mut sink);
    (result, String::from_utf8(sink).unwrap())
}

#[test]
fn missing_file_prints_the_message() {
    let (result, out) = run(Some(Path::new("foobar")));
    assert!(result.is_ok());
    assert_eq!(out, "please provide correct file\n");
    assert_eq!(out, MISSING_FILE_MESSAGE);
}

#[test]
fn no_path_prints_the_message() {
    let (result, out) = run(None);
    assert!(result.is_ok());
    assert_eq!(out, MISSING_FILE_MESSAGE);
}

#[test]
fn directory_is_not_a_script() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests");
    let (result, out) = run(Some(dir.as_path()));
    assert!(result.is_ok());
    assert_eq!(out, MISSING_FILE_MESSAGE);
}

#[test]
fn runs_a_script_file() {
    let (result, out) = run(Some(fixture("stream.bm").as_path()));
    assert!(result.is_ok());
    assert_eq!(out, "OOOOO\nOOZZZ\nAWOOO\nOWOOO\nOWOOO\nOWOOO");
}

#[test]
fn errors_propagate_to_the_host() {
    let (result, out) = run(Some(fixture("show_first.bm").as_path()));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidCommand);
    assert_eq!(out, "");
}

#[test]
fn output_before_an_error_reaches_the_sink() {
    let (result, out) = run(Some(fixture("blank_line.bm").as_path()));
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidCommand);
    assert_eq!(out, "");

    let mut sink = Vec::new();
    let err = bitmap_editor::Interpreter::new(&mut sink)
        .run(["I 2 1", "S", "L 3 1 R"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfBoundCoordinates);
    assert_eq!(sink, b"OO");
}

#[test]
fn diagnostics_name_the_file_and_line() {
    let (result, _) = run(Some(fixture("pixel_past_right.bm").as_path()));
    let err = result.unwrap_err();
    let code = err.code().map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("bitmap_editor::out_of_bound_coordinates"));
    match err {
        ScriptError::OutOfBoundCoordinates { src, .. } => {
            assert!(src.name().ends_with("pixel_past_right.bm:2"), "{}", src.name());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn trailing_newline_option_reaches_the_file_host() {
    let mut sink = Vec::new();
    run_file(
        Some(fixture("pixel.bm").as_path()),
        Options::default().trailing_newline(true),
        &mut sink,
    )
    .unwrap();
    assert_eq!(sink, b"R\n");
}
