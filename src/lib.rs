//! sentiment-rs: word-frequency sentiment classifier
//!
//! A minimal text-classification pipeline: an owned text value type with
//! byte-wise semantics and tokenization, and a Naive-Bayes-style binary
//! sentiment classifier trained on labeled tweet CSV files.
//!
//! # Pipeline
//!
//! - **Train**: case-fold and tokenize each labeled row, counting how often
//!   every word appears under the positive and negative labels
//! - **Predict**: score unseen rows by summing the Laplace-smoothed
//!   log-likelihood ratio `ln((pos+1)/(neg+1))` of each known word; a
//!   non-negative total predicts positive
//! - **Evaluate**: compare stored predictions against ground truth, reporting
//!   accuracy and every mismatch
//!
//! # Example
//!
//! ```
//! use sentiment_rs::classifier::SentimentClassifier;
//! use sentiment_rs::dataset::{Label, LabeledRecord, UnlabeledRecord};
//! use sentiment_rs::text::Text;
//!
//! let mut classifier = SentimentClassifier::new();
//! classifier.train(vec![
//!     LabeledRecord { label: Label::Positive, text: Text::new("what a great day") },
//!     LabeledRecord { label: Label::Negative, text: Text::new("bad bad news") },
//! ]);
//!
//! let predictions = classifier.predict(vec![UnlabeledRecord {
//!     id: Text::new("42"),
//!     text: Text::new("Great news!"),
//! }]);
//! assert_eq!(predictions[0].label, Label::Positive);
//! ```
//!
//! # Modules
//!
//! - [`text`]: owned text value type and tokenizer
//! - [`dataset`]: record types, CSV field splitting, file readers
//! - [`classifier`]: frequency table and the train/predict/evaluate model
//! - [`pipeline`]: file-level phases and output files
//! - [`config`]: configuration management
//! - [`error`]: error types and handling

pub mod classifier;
pub mod config;
pub mod dataset;
pub mod error;
pub mod pipeline;
pub mod text;

// Re-export commonly used types
pub use classifier::SentimentClassifier;
pub use config::Config;
pub use error::{Result, SentimentError};
pub use text::Text;
