//! Sentiment classifier
//!
//! Word-frequency Naive Bayes: training accumulates per-word positive and
//! negative counts, prediction sums Laplace-smoothed log-likelihood ratios,
//! evaluation compares stored predictions against ground truth.

pub mod frequency;
pub mod model;
pub mod types;

pub use frequency::{FrequencyTable, TokenCounts};
pub use model::SentimentClassifier;
pub use types::*;
