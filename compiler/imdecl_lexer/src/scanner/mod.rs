//! Hand-written scanner producing one [`Token`] per call.
//!
//! # Design
//!
//! Each call to [`Scanner::next_token`] runs one restart loop:
//!
//! 1. skip trivia (whitespace and `//` line comments),
//! 2. dispatch on the first byte of the lexeme,
//! 3. either produce a token, or (for annotation words such as `IMGUI_API`)
//!    go back to 1.
//!
//! `{` starts a balanced-brace skip: the whole block, nested braces
//! included, becomes one opaque [`TokenKind::SkippedBody`] token. Inline
//! method bodies carry no declaration shape, so their contents are never
//! tokenized.
//!
//! End of input is an ordinary [`TokenKind::Eof`] token. Malformed input is
//! reported as [`ScanError`]; the scanner never reads past the sentinel.

use tracing::trace;

use crate::cursor::Cursor;
use crate::keywords::{self, Word};
use crate::{ScanError, Span, Token, TokenKind};

/// Declaration scanner over a borrowed [`Cursor`].
///
/// Holds the read position and the last token it produced, nothing else.
/// Create one per scan; several scanners may share one
/// [`SourceBuffer`](crate::SourceBuffer).
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    /// Most recently produced token. [`Token::UNSET`] before the first scan.
    current: Token,
    /// Set by the `Iterator` impl once it has yielded `Eof` or an error.
    halted: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self {
            cursor,
            current: Token::UNSET,
            halted: false,
        }
    }

    /// Produce the next token.
    ///
    /// Returns a zero-length `Eof` token once the source is exhausted, and
    /// keeps returning it on later calls. On [`ScanError::UnexpectedByte`]
    /// the offending character has been consumed, so calling again resumes
    /// after it.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        let token = loop {
            self.skip_trivia();
            let start = self.cursor.pos();
            let kind = match self.cursor.current() {
                0 if self.cursor.is_eof() => TokenKind::Eof,
                b'{' => self.skipped_body(start)?,
                b';' => self.single(TokenKind::Semicolon),
                b'&' => self.single(TokenKind::Reference),
                b'*' => self.single(TokenKind::Asterisk),
                b'(' => self.single(TokenKind::BracketOpen),
                b')' => self.single(TokenKind::BracketClose),
                b'=' => self.single(TokenKind::Assign),
                b',' => self.single(TokenKind::Comma),
                b'0'..=b'9' => self.number(),
                b'a'..=b'z' | b'A'..=b'Z' => match self.word(start) {
                    Some(kind) => kind,
                    None => continue,
                },
                byte => {
                    self.cursor.advance_char();
                    return Err(ScanError::UnexpectedByte { byte, pos: start });
                }
            };
            break Token::new(kind, Span::new(start, self.cursor.pos()));
        };

        debug_assert!(
            token.is_eof() || !token.span.is_empty(),
            "scanner produced an empty {} token at offset {}",
            token.kind.name(),
            token.span.start
        );
        self.current = token;
        Ok(token)
    }

    /// The last token returned by [`next_token`](Self::next_token).
    #[inline]
    pub fn current(&self) -> Token {
        self.current
    }

    /// Source text of `token`.
    #[inline]
    pub fn text(&self, token: Token) -> &'a str {
        self.cursor.slice(token.span.start, token.span.end)
    }

    // ─── Trivia ───────────────────────────────────────────────────

    fn skip_trivia(&mut self) {
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.current() == b'/' && self.cursor.peek() == b'/' {
                // Stop on the newline; the next round eats it.
                self.cursor.eat_until_newline_or_eof();
            } else {
                return;
            }
        }
    }

    // ─── Lexemes ──────────────────────────────────────────────────

    #[inline]
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    /// `{` ... matching `}`, nested pairs included.
    fn skipped_body(&mut self, start: u32) -> Result<TokenKind, ScanError> {
        self.cursor.advance(); // consume '{'
        let mut depth: u32 = 1;
        while depth > 0 {
            match self.cursor.skip_to_brace() {
                b'{' => depth += 1,
                b'}' => depth -= 1,
                _ => return Err(ScanError::UnterminatedBody { start, depth }),
            }
            self.cursor.advance();
        }
        trace!(start, end = self.cursor.pos(), "skipped body");
        Ok(TokenKind::SkippedBody)
    }

    /// `digits[.digits[f]]`. The `f` suffix ends the literal immediately.
    fn number(&mut self) -> TokenKind {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' {
            self.cursor.advance();
            while self.cursor.current().is_ascii_digit() {
                self.cursor.advance();
                if self.cursor.current() == b'f' {
                    self.cursor.advance();
                    break;
                }
            }
        }
        TokenKind::NumberLiteral
    }

    /// Maximal word run, classified by exact text. `None` for annotation
    /// words, which are consumed without producing a token.
    fn word(&mut self, start: u32) -> Option<TokenKind> {
        self.cursor.eat_while(keywords::is_word_continue);
        let text = self.cursor.slice_from(start);
        match keywords::classify(text) {
            Word::Token(kind) => Some(kind),
            Word::Annotation => {
                trace!(word = text, offset = start, "dropped annotation");
                None
            }
        }
    }
}

/// Yields tokens up to (not including) `Eof`, or the first error, then stops.
impl Iterator for Scanner<'_> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        match self.next_token() {
            Ok(tok) if tok.is_eof() => {
                self.halted = true;
                None
            }
            Ok(tok) => Some(Ok(tok)),
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
        }
    }
}

/// Scan `source` to the end and collect every token except the final `Eof`.
///
/// For streaming access, construct a `SourceBuffer` + `Scanner` directly.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScanError> {
    let buf = crate::SourceBuffer::new(source);
    Scanner::new(buf.cursor()).collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
