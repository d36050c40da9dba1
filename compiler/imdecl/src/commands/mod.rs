//! Command handlers for the `imdecl` CLI.
//!
//! Handlers that print and exit live in submodules; the shared failure type
//! and source loading live here.

use imdecl_lexer::ScanError;
use thiserror::Error;

mod lex;

pub use lex::{format_token, lex_builtin, lex_file, lex_source};

/// Why a command could not finish.
#[derive(Debug, Error)]
pub enum LexFailure {
    #[error("{}", describe_read_error(.path, .source))]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("{name}:{line}:{column}: {error}")]
    Scan {
        name: String,
        line: usize,
        column: usize,
        #[source]
        error: ScanError,
    },

    #[error("cannot write tokens: {0}")]
    Write(#[from] std::io::Error),
}

/// Read a declaration listing from disk.
pub fn read_source(path: &str) -> Result<String, LexFailure> {
    std::fs::read_to_string(path).map_err(|source| LexFailure::Read {
        path: path.to_string(),
        source,
    })
}

fn describe_read_error(path: &str, e: &std::io::Error) -> String {
    match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    }
}

/// 1-based line and column (in characters) of byte `offset` in `source`.
///
/// Offsets past the end clamp to the end; offsets inside a multi-byte
/// character count from the start of that character.
pub fn line_col(source: &str, offset: u32) -> (usize, usize) {
    let mut end = (offset as usize).min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line = before.bytes().filter(|&b| b == b'\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

/// Print the outcome of a command; exit with status 1 on failure.
fn finish(result: Result<usize, LexFailure>) {
    match result {
        Ok(count) => tracing::debug!(count, "tokens written"),
        Err(failure) => {
            eprintln!("error: {failure}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
