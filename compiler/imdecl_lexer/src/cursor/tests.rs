use crate::SourceBuffer;

// === Basic Navigation ===

#[test]
fn current_returns_first_byte() {
    let buf = SourceBuffer::new("abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.current(), b'a');
}

#[test]
fn advance_moves_forward() {
    let buf = SourceBuffer::new("abc");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_n_moves_multiple() {
    let buf = SourceBuffer::new("abcdef");
    let mut cursor = buf.cursor();
    cursor.advance_n(3);
    assert_eq!(cursor.current(), b'd');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn peek_returns_next_byte() {
    let buf = SourceBuffer::new("//");
    let cursor = buf.cursor();
    assert_eq!(cursor.peek(), b'/');
}

#[test]
fn peek_on_sentinel_returns_zero() {
    // 63 bytes puts the sentinel on the last byte of the first cache line.
    let source = "x".repeat(63);
    let buf = SourceBuffer::new(&source);
    let mut cursor = buf.cursor();
    cursor.advance_n(63);
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), 0);
}

// === EOF Detection ===

#[test]
fn is_eof_at_sentinel() {
    let buf = SourceBuffer::new("x");
    let mut cursor = buf.cursor();
    assert!(!cursor.is_eof());
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn is_eof_on_empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.cursor().is_eof());
}

#[test]
fn interior_null_is_not_eof() {
    let buf = SourceBuffer::new("a\0b");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
}

// === Slice ===

#[test]
fn slice_extracts_substring() {
    let buf = SourceBuffer::new("void Clear();");
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 4), "void");
    assert_eq!(cursor.slice(5, 10), "Clear");
}

#[test]
fn slice_from_extracts_to_current() {
    let buf = SourceBuffer::new("ImU32 col");
    let mut cursor = buf.cursor();
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(0), "ImU32");
    assert_eq!(cursor.slice_from(2), "U32");
}

#[test]
fn slice_utf8_multibyte() {
    let source = "{ \u{1F600} }";
    let buf = SourceBuffer::new(source);
    let cursor = buf.cursor();
    assert_eq!(cursor.slice(0, 8), source);
}

// === UTF-8 ===

#[test]
fn advance_char_skips_whole_character() {
    let buf = SourceBuffer::new("\u{e9}x");
    let mut cursor = buf.cursor();
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), b'x');
}

#[test]
fn utf8_char_width_by_leading_byte() {
    assert_eq!(super::Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(super::Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(super::Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(super::Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(super::Cursor::utf8_char_width(0x80), 1);
}

// === eat_while / eat_whitespace ===

#[test]
fn eat_while_stops_at_sentinel() {
    let buf = SourceBuffer::new("aaa");
    let mut cursor = buf.cursor();
    cursor.eat_while(|b| b == b'a');
    assert_eq!(cursor.pos(), 3);
    assert!(cursor.is_eof());
}

#[test]
fn eat_whitespace_covers_c_isspace_set() {
    let buf = SourceBuffer::new(" \t\n\x0B\x0C\r void");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'v');
}

#[test]
fn eat_whitespace_stops_at_interior_null() {
    let buf = SourceBuffer::new("  \0 ");
    let mut cursor = buf.cursor();
    cursor.eat_whitespace();
    assert_eq!(cursor.pos(), 2);
    assert!(!cursor.is_eof());
}

// === eat_until_newline_or_eof ===

#[test]
fn eat_until_newline_stops_on_newline() {
    let buf = SourceBuffer::new("// note\nvoid");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert_eq!(cursor.pos(), 7);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_without_newline_reaches_eof() {
    let buf = SourceBuffer::new("// trailing comment");
    let mut cursor = buf.cursor();
    cursor.eat_until_newline_or_eof();
    assert!(cursor.is_eof());
}

// === skip_to_brace ===

#[test]
fn skip_to_brace_finds_open_and_close() {
    let buf = SourceBuffer::new("{ a = b; { c } }");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.skip_to_brace(), b'{');
    assert_eq!(cursor.pos(), 9);
    cursor.advance();
    assert_eq!(cursor.skip_to_brace(), b'}');
    assert_eq!(cursor.pos(), 13);
}

#[test]
fn skip_to_brace_without_brace_reaches_eof() {
    let buf = SourceBuffer::new("{ unterminated");
    let mut cursor = buf.cursor();
    cursor.advance();
    assert_eq!(cursor.skip_to_brace(), 0);
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 14);
}
