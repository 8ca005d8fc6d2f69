use std::path::PathBuf;

use bitmap_editor::{Options, run_file};

fn main() -> miette::Result<()> {
    // stdout carries renders, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut options = Options::default();
    let mut path: Option<PathBuf> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--trailing-newline" => options = options.trailing_newline(true),
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => {
                eprintln!("Usage: bitmap-editor [--trailing-newline] <script>");
                std::process::exit(2);
            }
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_file(path.as_deref(), options, &mut out)?;
    Ok(())
}
