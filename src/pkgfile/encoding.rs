// src/pkgfile/encoding.rs

//! Text decoding with a single-byte fallback
//!
//! Pkgfiles are hand edited and some older ones carry Latin-1 text in
//! their descriptions. Decoding tries strict UTF-8 first and falls back to
//! Latin-1, which maps every byte to the code point of the same value and
//! therefore cannot fail.

use std::borrow::Cow;
use tracing::debug;

/// Encoding that produced a decoded string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

/// Decode raw file bytes, preferring UTF-8
pub fn decode_text(bytes: &[u8]) -> (Cow<'_, str>, TextEncoding) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (Cow::Borrowed(text), TextEncoding::Utf8),
        Err(e) => {
            debug!("Input is not valid UTF-8 ({}), decoding as Latin-1", e);
            (Cow::Owned(latin1_to_string(bytes)), TextEncoding::Latin1)
        }
    }
}

fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Undo a UTF-8 text that was decoded as Latin-1
///
/// Returns `None` when the value has a code point above U+00FF, or when
/// its bytes are not valid UTF-8. Pure ASCII is returned unchanged.
pub fn redecode(value: &str) -> Option<String> {
    let bytes = value
        .chars()
        .map(|c| u8::try_from(u32::from(c)).ok())
        .collect::<Option<Vec<u8>>>()?;

    String::from_utf8(bytes).ok()
}

/// Best-effort [`redecode`], keeping the original on failure
pub fn normalize(value: String) -> String {
    redecode(&value).unwrap_or(value)
}
