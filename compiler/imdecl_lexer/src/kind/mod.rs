//! Token kinds and the `Token` value produced by the scanner.

use crate::Span;

/// Token category.
///
/// The discriminants are the ordinals printed by the `imdecl lex` driver
/// (`token: <ordinal>, <text>`), so their values are part of the output
/// format and must not be renumbered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// No token scanned yet. Only seen in [`Scanner::current`](crate::Scanner::current)
    /// before the first call to `next_token`.
    Unset = 0,
    Void = 1,
    Const = 2,
    /// `&`
    Reference = 3,
    /// `;`
    Semicolon = 4,
    /// `(`
    BracketOpen = 5,
    /// `)`
    BracketClose = 6,
    /// `*`
    Asterisk = 7,
    /// `=`
    Assign = 8,
    /// `,`
    Comma = 9,
    /// Letters, digits, `_` and `:` starting with a letter. Covers qualified
    /// names such as `ImGui::GetDrawListSharedData` as one token.
    Identifier = 10,
    /// `digits[.digits[f]]`, kept as text and never evaluated.
    NumberLiteral = 11,
    /// A balanced `{ ... }` block, emitted whole without looking inside.
    SkippedBody = 12,
    /// End of input. Zero-length; returned again on every later call.
    Eof = 255,
}

impl TokenKind {
    /// Numeric value printed by the driver.
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Fixed source text for keyword and punctuation kinds.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Void => Some("void"),
            Self::Const => Some("const"),
            Self::Reference => Some("&"),
            Self::Semicolon => Some(";"),
            Self::BracketOpen => Some("("),
            Self::BracketClose => Some(")"),
            Self::Asterisk => Some("*"),
            Self::Assign => Some("="),
            Self::Comma => Some(","),
            Self::Unset
            | Self::Identifier
            | Self::NumberLiteral
            | Self::SkippedBody
            | Self::Eof => None,
        }
    }

    /// Human-readable description for diagnostics and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unset => "no token",
            Self::Void => "`void`",
            Self::Const => "`const`",
            Self::Reference => "`&`",
            Self::Semicolon => "`;`",
            Self::BracketOpen => "`(`",
            Self::BracketClose => "`)`",
            Self::Asterisk => "`*`",
            Self::Assign => "`=`",
            Self::Comma => "`,`",
            Self::Identifier => "identifier",
            Self::NumberLiteral => "number literal",
            Self::SkippedBody => "skipped body",
            Self::Eof => "end of input",
        }
    }
}

/// A classified lexeme: kind plus its span in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// The "no token yet" value held by a fresh scanner.
    pub const UNSET: Token = Token {
        kind: TokenKind::Unset,
        span: Span::point(0),
    };

    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

const _: () = assert!(std::mem::size_of::<TokenKind>() == 1);
const _: () = assert!(std::mem::size_of::<Token>() <= 12);
