//! `lex`: tokenize a declaration listing and print the token stream.

use std::io::Write;

use imdecl_lexer::{Scanner, SourceBuffer, TokenKind};
use tracing::debug;

use super::{finish, line_col, read_source, LexFailure};
use crate::builtin;

/// One output line: `token: <ordinal>, <text>`.
pub fn format_token(kind: TokenKind, text: &str) -> String {
    format!("token: {}, {text}", kind.ordinal())
}

/// Scan `source` to the end, writing one line per token to `out`.
///
/// Stops at the first scan error; lines already written stay written.
/// Returns the number of tokens written.
#[tracing::instrument(level = "debug", skip(source, out), fields(bytes = source.len()))]
pub fn lex_source<W: Write>(name: &str, source: &str, out: &mut W) -> Result<usize, LexFailure> {
    let buf = SourceBuffer::new(source);
    let mut scanner = Scanner::new(buf.cursor());
    let mut count = 0;
    loop {
        let token = scanner.next_token().map_err(|error| {
            let (line, column) = line_col(source, error.offset());
            LexFailure::Scan {
                name: name.to_string(),
                line,
                column,
                error,
            }
        })?;
        if token.is_eof() {
            break;
        }
        writeln!(out, "{}", format_token(token.kind, scanner.text(token)))?;
        count += 1;
    }
    out.flush()?;
    debug!(count, "scan complete");
    Ok(count)
}

/// Tokenize a file and print the token stream to stdout.
pub fn lex_file(path: &str) {
    let result = read_source(path).and_then(|content| {
        let stdout = std::io::stdout();
        lex_source(path, &content, &mut stdout.lock())
    });
    finish(result);
}

/// Tokenize the compiled-in `ImDrawList` listing.
pub fn lex_builtin() {
    let stdout = std::io::stdout();
    finish(lex_source(
        builtin::DRAW_LIST_NAME,
        builtin::DRAW_LIST_DECLS,
        &mut stdout.lock(),
    ));
}
