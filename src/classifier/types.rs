//! Classifier result types

use crate::dataset::Label;
use crate::text::Text;

/// One prediction in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Row id from the test file
    pub id: Text,
    /// Predicted sentiment
    pub label: Label,
}

/// A prediction that disagreed with ground truth
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    /// What the classifier predicted
    pub predicted: Label,
    /// What the ground truth says
    pub actual: Label,
    /// Row id
    pub id: Text,
}

/// Outcome of comparing predictions against ground truth
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    /// correct / total, 0.0 when no ids overlap
    pub accuracy: f64,
    /// Predictions counted (ids present in both maps)
    pub total: usize,
    /// Predictions matching ground truth
    pub correct: usize,
    /// Disagreements in prediction order
    pub mismatches: Vec<Mismatch>,
}

/// Training phase summary
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingStats {
    /// Rows consumed
    pub records: usize,
    /// Tokens observed (duplicates included)
    pub tokens: usize,
    /// Distinct tokens in the frequency table afterwards
    pub vocabulary: usize,
}
