//! Base64 encoding and continuation-line wrapping.

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

/// Maximum characters of encoded payload per wrapped line (78 minus the
/// two-space indent of the continuation marker).
pub const WRAP_WIDTH: usize = 76;

/// Line-continuation marker written before every chunk: backslash, newline,
/// two spaces of indentation.
pub const CONTINUATION: &str = "\\\n  ";

/// Base64-encode `bytes` into one contiguous ASCII string.
pub fn encode(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Split an encoded string into chunks of at most [`WRAP_WIDTH`] characters.
///
/// Every chunk except possibly the last is exactly [`WRAP_WIDTH`] long; the
/// last is between 1 and [`WRAP_WIDTH`]. An empty input yields no chunks at
/// all, and an exact multiple of the width yields no trailing empty chunk.
pub fn wrap(encoded: &str) -> Chunks<'_> {
    Chunks { encoded, pos: 0 }
}

/// Iterator over the wrapped chunks of an encoded string. Created by [`wrap`].
#[derive(Debug)]
pub struct Chunks<'a> {
    encoded: &'a str,
    pos: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.encoded.len() {
            return None;
        }
        // Base64 output is ASCII, so byte indexing is character indexing.
        let end = (self.pos + WRAP_WIDTH).min(self.encoded.len());
        let chunk = &self.encoded[self.pos..end];
        self.pos = end;
        Some(chunk)
    }
}
