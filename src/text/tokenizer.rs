//! Delimiter-based tokenizer
//!
//! Splits a [`Text`] into maximal runs of non-delimiter characters. The
//! delimiter class is fixed to ASCII whitespace and punctuation and is shared
//! by training and prediction; learned frequencies only line up with inference
//! if both phases split identically.

use super::value::Text;

/// True for bytes that separate tokens
fn is_delimiter(b: u8) -> bool {
    b.is_ascii_whitespace() || b.is_ascii_punctuation()
}

/// Split `text` into tokens in left-to-right order
///
/// Skips each maximal delimiter run, then captures the following maximal
/// non-delimiter run as one token. Empty tokens are never emitted; duplicates
/// are retained.
pub fn tokenize(text: &Text) -> Vec<Text> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        while i < bytes.len() && is_delimiter(bytes[i]) {
            i += 1;
        }
        let start = i;
        while i < bytes.len() && !is_delimiter(bytes[i]) {
            i += 1;
        }
        if i > start {
            tokens.push(text.substring(start, i - start));
        }
    }

    tokens
}
