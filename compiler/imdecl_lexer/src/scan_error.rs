//! Scanner failures.
//!
//! Both variants mean the declaration listing is outside the grammar the
//! scanner accepts. Nothing is recovered; the caller decides whether to stop.

use crate::{Cursor, Span};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A byte that cannot start any token (`_`, a lone `/`, `#`, `.`,
    /// control characters, non-ASCII, interior NUL, ...).
    #[error("unexpected {} at offset {pos}", describe_byte(.byte))]
    UnexpectedByte { byte: u8, pos: u32 },

    /// A `{` whose matching `}` never appears before the end of input.
    #[error("unterminated body starting at offset {start} ({depth} unclosed `{{`)")]
    UnterminatedBody { start: u32, depth: u32 },
}

impl ScanError {
    /// Source region the error refers to.
    ///
    /// For an unexpected byte this is that one character; for an
    /// unterminated body it runs from the opening `{` to the end of input.
    pub fn span(&self, source_len: u32) -> Span {
        match *self {
            ScanError::UnexpectedByte { byte, pos } => {
                let width = Cursor::utf8_char_width(byte);
                Span::new(pos, pos.saturating_add(width).min(source_len))
            }
            ScanError::UnterminatedBody { start, .. } => Span::new(start, source_len),
        }
    }

    /// Byte offset where the error starts.
    pub fn offset(&self) -> u32 {
        match *self {
            ScanError::UnexpectedByte { pos, .. } => pos,
            ScanError::UnterminatedBody { start, .. } => start,
        }
    }
}

fn describe_byte(byte: &u8) -> String {
    match *byte {
        0 => "null byte".to_string(),
        b if b.is_ascii_graphic() => format!("character `{}`", b as char),
        b if b.is_ascii() => format!("control byte 0x{b:02X}"),
        b => format!("non-ASCII byte 0x{b:02X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_byte_message() {
        let err = ScanError::UnexpectedByte { byte: b'_', pos: 4 };
        assert_eq!(err.to_string(), "unexpected character `_` at offset 4");

        let err = ScanError::UnexpectedByte { byte: 0, pos: 1 };
        assert_eq!(err.to_string(), "unexpected null byte at offset 1");

        let err = ScanError::UnexpectedByte { byte: 0xC3, pos: 0 };
        assert_eq!(err.to_string(), "unexpected non-ASCII byte 0xC3 at offset 0");
    }

    #[test]
    fn unterminated_body_message() {
        let err = ScanError::UnterminatedBody { start: 7, depth: 2 };
        assert_eq!(
            err.to_string(),
            "unterminated body starting at offset 7 (2 unclosed `{`)"
        );
    }

    #[test]
    fn spans_cover_offending_region() {
        let err = ScanError::UnexpectedByte { byte: 0xE2, pos: 3 };
        assert_eq!(err.span(10), Span::new(3, 6));
        assert_eq!(err.offset(), 3);

        let err = ScanError::UnterminatedBody { start: 5, depth: 1 };
        assert_eq!(err.span(20), Span::new(5, 20));
        assert_eq!(err.offset(), 5);
    }
}
