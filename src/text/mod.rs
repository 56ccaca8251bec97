//! Text value type and tokenization
//!
//! Provides the owned byte-string value used as the token and id type
//! throughout the classifier, plus the delimiter-based tokenizer.

pub mod tokenizer;
pub mod value;

pub use tokenizer::tokenize;
pub use value::{Djb2Hasher, Text, TextHashBuilder};
