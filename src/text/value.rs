//! Owned text value type
//!
//! An immutable-by-value byte sequence with byte-wise ordering, clamped
//! substring extraction, ASCII case folding, and a stable content hash so it
//! can key the frequency and prediction maps.

use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::ops::Add;

use crate::error::{Result, SentimentError};

/// Owned, immutable-after-construction text value
///
/// Length always matches the content; equality and ordering are byte-wise
/// unsigned comparisons. Cloning produces an independent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Text {
    bytes: Vec<u8>,
}

impl Text {
    /// Create a text value by copying a string slice
    pub fn new(s: &str) -> Self {
        Self {
            bytes: s.as_bytes().to_vec(),
        }
    }

    /// Create a text value by copying raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Content length in bytes, O(1)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw content bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// New value holding `self`'s content followed by `other`'s
    pub fn concat(&self, other: &Text) -> Text {
        let mut bytes = Vec::with_capacity(self.bytes.len() + other.bytes.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(&other.bytes);
        Text { bytes }
    }

    /// Slice `[start, start + count)` clamped to the content
    ///
    /// A start at or past the end yields an empty value; a count running past
    /// the end is truncated. Never faults.
    pub fn substring(&self, start: usize, count: usize) -> Text {
        if start >= self.bytes.len() {
            return Text::default();
        }
        let end = start.saturating_add(count).min(self.bytes.len());
        Text {
            bytes: self.bytes[start..end].to_vec(),
        }
    }

    /// New value with ASCII letters folded to lowercase
    ///
    /// Non-ASCII bytes pass through unchanged.
    pub fn to_lower(&self) -> Text {
        Text {
            bytes: self.bytes.iter().map(|b| b.to_ascii_lowercase()).collect(),
        }
    }

    /// Byte at `index`, bounds-checked
    pub fn byte(&self, index: usize) -> Result<u8> {
        self.bytes
            .get(index)
            .copied()
            .ok_or(SentimentError::IndexOutOfRange {
                index,
                len: self.bytes.len(),
            })
    }

    /// Overwrite the byte at `index`, bounds-checked
    pub fn set_byte(&mut self, index: usize, value: u8) -> Result<()> {
        let len = self.bytes.len();
        match self.bytes.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SentimentError::IndexOutOfRange { index, len }),
        }
    }

    /// Stable djb2 hash of the content (seed 5381, multiplier 33, XOR fold)
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Djb2Hasher::default();
        hasher.write(&self.bytes);
        hasher.finish()
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::new(s)
    }
}

impl Add<&Text> for &Text {
    type Output = Text;

    fn add(self, other: &Text) -> Text {
        self.concat(other)
    }
}

impl Hash for Text {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(&self.bytes);
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

/// djb2 hasher over raw bytes
///
/// Deterministic across runs and platforms, unlike the std `RandomState`, so
/// hash values are reproducible in tests and tooling.
#[derive(Debug, Clone)]
pub struct Djb2Hasher {
    hash: u64,
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self { hash: 5381 }
    }
}

impl Hasher for Djb2Hasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.hash = self.hash.wrapping_mul(33) ^ u64::from(b);
        }
    }
}

/// Hasher factory for maps keyed by [`Text`]
pub type TextHashBuilder = BuildHasherDefault<Djb2Hasher>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_matches_content() {
        assert_eq!(Text::new("").len(), 0);
        assert_eq!(Text::new("hello").len(), 5);
        assert_eq!(Text::from_bytes(b"abc\0def").len(), 7);
    }

    #[test]
    fn test_empty_input_yields_empty_value() {
        let t = Text::new("");
        assert!(t.is_empty());
        assert_eq!(t, Text::default());
    }

    #[test]
    fn test_concat_lengths_add() {
        let a = Text::new("foo");
        let b = Text::new("barbaz");
        let c = a.concat(&b);
        assert_eq!(c.len(), a.len() + b.len());
        assert_eq!(c, Text::new("foobarbaz"));
        assert_eq!(a, Text::new("foo"), "operand must not be mutated");
    }

    #[test]
    fn test_concat_is_associative_in_content() {
        let a = Text::new("ab");
        let b = Text::new("cd");
        let c = Text::new("ef");
        assert_eq!(a.concat(&b).concat(&c), a.concat(&b.concat(&c)));
        assert_eq!(&(&a + &b) + &c, Text::new("abcdef"));
    }

    #[test]
    fn test_byte_wise_ordering() {
        assert!(Text::new("apple") < Text::new("banana"));
        assert!(Text::new("abc") < Text::new("abcd"));
        assert!(Text::new("Z") < Text::new("a"));
        // Unsigned comparison: high bytes sort after ASCII
        assert!(Text::from_bytes(b"\xff") > Text::from_bytes(b"z"));
        assert_eq!(Text::new("same"), Text::new("same"));
    }

    #[test]
    fn test_substring_clamps() {
        let t = Text::new("hello world");
        assert_eq!(t.substring(0, 5), Text::new("hello"));
        assert_eq!(t.substring(6, 5), Text::new("world"));
        assert_eq!(t.substring(6, 100), Text::new("world"));
        assert_eq!(t.substring(11, 1), Text::new(""));
        assert_eq!(t.substring(100, 1), Text::new(""));
        assert_eq!(t.substring(usize::MAX, usize::MAX), Text::new(""));
    }

    #[test]
    fn test_to_lower_folds_ascii_only() {
        let t = Text::from_bytes(b"Hello WORLD \xc3\x89 123!");
        let lower = t.to_lower();
        assert_eq!(lower.as_bytes(), b"hello world \xc3\x89 123!");
    }

    #[test]
    fn test_to_lower_is_idempotent() {
        let t = Text::new("MiXeD Case 42");
        assert_eq!(t.to_lower().to_lower(), t.to_lower());
    }

    #[test]
    fn test_byte_access_bounds_checked() {
        let mut t = Text::new("abc");
        assert_eq!(t.byte(0).unwrap(), b'a');
        assert!(matches!(
            t.byte(3),
            Err(SentimentError::IndexOutOfRange { index: 3, len: 3 })
        ));

        t.set_byte(1, b'x').unwrap();
        assert_eq!(t, Text::new("axc"));
        assert!(t.set_byte(10, b'y').is_err());
    }

    #[test]
    fn test_djb2_hash_is_stable() {
        assert_eq!(Text::new("").content_hash(), 5381);
        // One byte: 5381 * 33 ^ 'a'
        assert_eq!(
            Text::new("a").content_hash(),
            (5381u64.wrapping_mul(33)) ^ u64::from(b'a')
        );
        assert_eq!(
            Text::new("token").content_hash(),
            Text::new("token").content_hash()
        );
    }

    #[test]
    fn test_equal_values_hash_equal() {
        let a = Text::new("word");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(
            Text::new("word").content_hash(),
            Text::new("sword").content_hash()
        );
    }

    #[test]
    fn test_display_renders_raw_content() {
        assert_eq!(Text::new("Beat TCU").to_string(), "Beat TCU");
        assert_eq!(Text::new("a,b \"q\"").to_string(), "a,b \"q\"");
    }
}
