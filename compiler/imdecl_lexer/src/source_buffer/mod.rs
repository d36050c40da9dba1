//! Sentinel-terminated copy of the source text.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner detects end of input by looking at the current byte
//! instead of comparing positions on every step. The allocation is rounded
//! up to a 64-byte boundary and always leaves at least two zero bytes after
//! the content, which keeps one byte of lookahead (`Cursor::peek`) in bounds
//! even when the cursor sits on the sentinel.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources longer than `u32::MAX` bytes saturate `source_len`; anything
    /// past that offset is invisible to the scanner.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up past the content plus sentinel plus one lookahead byte.
        let padded_len = (source_len + 1 + CACHE_LINE) & !(CACHE_LINE - 1);

        // Zero-filled, so the sentinel and padding come for free.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
