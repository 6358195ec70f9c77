//! Render one source document to HTML on standard output.
//!
//! Exit status: 0 on success, 1 if the document cannot be read, 2 on misuse.

use std::io::Write;
use std::process::ExitCode;

use plainwiki::render_document;

fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: plainwiki-render <file>");
        return ExitCode::from(2);
    };

    let source = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}: {}", path.to_string_lossy(), e);
            return ExitCode::FAILURE;
        }
    };

    let html = render_document(&String::from_utf8_lossy(&source));
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(html.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
