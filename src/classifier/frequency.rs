//! Word frequency table
//!
//! Maps each case-folded token to how often it appeared in positive and
//! negative training rows. Grows with the vocabulary; nothing is evicted.

use std::collections::HashMap;

use crate::dataset::Label;
use crate::text::{Text, TextHashBuilder};

/// Occurrence counts for one token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCounts {
    /// Occurrences in positive training rows
    pub positive: u32,
    /// Occurrences in negative training rows
    pub negative: u32,
}

/// Token frequency table built during training
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<Text, TokenCounts, TextHashBuilder>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `token` under `label`
    ///
    /// The token is inserted with zero counts first if absent, then exactly
    /// one side is incremented.
    pub fn observe(&mut self, token: Text, label: Label) {
        let entry = self.counts.entry(token).or_default();
        match label {
            Label::Positive => entry.positive += 1,
            Label::Negative => entry.negative += 1,
        }
    }

    /// Counts for `token`, or `None` if it was never seen in training
    ///
    /// A miss means "unseen" and the caller treats it as zero evidence. No
    /// (0,0) entry is ever stored, so a present entry always carries at least
    /// one observation.
    pub fn lookup(&self, token: &Text) -> Option<&TokenCounts> {
        self.counts.get(token)
    }

    /// Number of distinct tokens observed
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_and_lookup() {
        let mut table = FrequencyTable::new();
        table.observe(Text::new("great"), Label::Positive);
        table.observe(Text::new("great"), Label::Positive);
        table.observe(Text::new("great"), Label::Negative);

        let counts = table.lookup(&Text::new("great")).unwrap();
        assert_eq!(counts.positive, 2);
        assert_eq!(counts.negative, 1);
    }

    #[test]
    fn test_unseen_token_is_none() {
        let mut table = FrequencyTable::new();
        table.observe(Text::new("seen"), Label::Negative);

        assert!(table.lookup(&Text::new("unseen")).is_none());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_duplicate_tokens_accumulate() {
        let mut table = FrequencyTable::new();
        for _ in 0..5 {
            table.observe(Text::new("word"), Label::Negative);
        }
        assert_eq!(
            table.lookup(&Text::new("word")),
            Some(&TokenCounts {
                positive: 0,
                negative: 5
            })
        );
    }
}
