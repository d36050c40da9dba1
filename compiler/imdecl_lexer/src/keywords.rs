//! Word classification.
//!
//! A word is the maximal `[A-Za-z][A-Za-z0-9_:]*` run the scanner has just
//! consumed. Matching is on the whole run, so `voidPtr` and `constexpr` stay
//! identifiers.

use crate::TokenKind;

/// What a scanned word turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Word {
    /// Emit a token of this kind.
    Token(TokenKind),
    /// Export/linkage annotation: consume it and emit nothing.
    Annotation,
}

/// Classify a scanned word by exact text.
#[inline]
pub(crate) fn classify(text: &str) -> Word {
    match text {
        "void" => Word::Token(TokenKind::Void),
        "const" => Word::Token(TokenKind::Const),
        "inline" | "IMGUI_API" => Word::Annotation,
        _ => Word::Token(TokenKind::Identifier),
    }
}

/// 256-byte lookup table for word continuation bytes.
/// `true` for a-z, A-Z, 0-9, `_` and `:`. The sentinel (0x00) maps to
/// `false`, which ends the scan loop at end of input.
static IS_WORD_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0usize;
    while i < 256 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "loop counter i is 0..=255, always fits in u8"
        )]
        let b = i as u8;
        table[i] = matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b':');
        i += 1;
    }
    table
};

#[inline]
pub(crate) fn is_word_continue(b: u8) -> bool {
    IS_WORD_CONTINUE_TABLE[b as usize]
}
