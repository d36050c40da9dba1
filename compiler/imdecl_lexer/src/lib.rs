//! Scanner for hand-written listings of C-like function declarations.
//!
//! The input is a curated excerpt of header declarations (return types,
//! names, parameter lists, default arguments, inline bodies and comments).
//! The scanner turns it into a flat stream of [`Token`]s that a declaration
//! parser or binding generator can consume.
//!
//! # Pipeline
//!
//! ```text
//! &str -> SourceBuffer (sentinel-terminated copy)
//!      -> Cursor (byte position)
//!      -> Scanner::next_token() -> Token { kind, span }
//! ```
//!
//! Tokens never own text. Use [`Scanner::text`] (or slice the source with
//! [`Span::to_range`]) to get the lexeme back.
//!
//! # Example
//!
//! ```
//! use imdecl_lexer::{SourceBuffer, Scanner, TokenKind};
//!
//! let buf = SourceBuffer::new("IMGUI_API void Clear();");
//! let kinds: Vec<TokenKind> = Scanner::new(buf.cursor())
//!     .map(|tok| tok.map(|t| t.kind))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Void,
//!         TokenKind::Identifier,
//!         TokenKind::BracketOpen,
//!         TokenKind::BracketClose,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! # Ok::<(), imdecl_lexer::ScanError>(())
//! ```

mod cursor;
mod keywords;
mod kind;
mod scan_error;
mod scanner;
mod source_buffer;
mod span;

pub use cursor::Cursor;
pub use kind::{Token, TokenKind};
pub use scan_error::ScanError;
pub use scanner::{tokenize, Scanner};
pub use source_buffer::SourceBuffer;
pub use span::Span;
