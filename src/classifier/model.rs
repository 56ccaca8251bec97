//! Train / predict / evaluate model
//!
//! Phases run in order on one instance: training populates the frequency
//! table, prediction scores rows against it and accumulates into the shared
//! prediction map, evaluation compares that map to ground truth. The maps are
//! plain fields with no internal synchronization; concurrent callers must
//! serialize access.

use std::collections::HashMap;

use super::frequency::FrequencyTable;
use super::types::{EvaluationResult, Mismatch, Prediction, TrainingStats};
use crate::dataset::{GroundTruthRecord, Label, LabeledRecord, UnlabeledRecord};
use crate::text::{tokenize, Text, TextHashBuilder};

/// Naive-Bayes-style sentiment classifier over word frequencies
#[derive(Debug, Default)]
pub struct SentimentClassifier {
    frequencies: FrequencyTable,
    predictions: HashMap<Text, Label, TextHashBuilder>,
    // Ids in first-prediction order, so evaluation output is deterministic.
    prediction_order: Vec<Text>,
}

impl SentimentClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate word frequencies from labeled rows
    ///
    /// Each row's text is case-folded, tokenized, and every token counted
    /// under the row's label. Callable repeatedly; counts accumulate.
    pub fn train(&mut self, records: impl IntoIterator<Item = LabeledRecord>) -> TrainingStats {
        let mut stats = TrainingStats::default();

        for record in records {
            let tokens = tokenize(&record.text.to_lower());
            stats.records += 1;
            stats.tokens += tokens.len();
            for token in tokens {
                self.frequencies.observe(token, record.label);
            }
        }

        stats.vocabulary = self.frequencies.len();
        stats
    }

    /// Summed Laplace-smoothed log-likelihood ratio of `text`
    ///
    /// Each token seen in training contributes `ln((pos+1)/(neg+1))`; unseen
    /// tokens contribute exactly zero. This is a decision score, not a
    /// calibrated probability.
    pub fn score(&self, text: &Text) -> f64 {
        let mut total = 0.0;
        for token in tokenize(&text.to_lower()) {
            if let Some(counts) = self.frequencies.lookup(&token) {
                let pos = f64::from(counts.positive) + 1.0;
                let neg = f64::from(counts.negative) + 1.0;
                total += (pos / neg).ln();
            }
        }
        total
    }

    /// Label for a cumulative score; a tie resolves to positive
    fn decide(score: f64) -> Label {
        if score >= 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Predict labels for unlabeled rows
    ///
    /// Results come back in input order and are also stored in the shared
    /// prediction map keyed by id; a repeated id overwrites its stored label
    /// (last write wins). Callable multiple times between training and
    /// evaluation.
    pub fn predict(
        &mut self,
        records: impl IntoIterator<Item = UnlabeledRecord>,
    ) -> Vec<Prediction> {
        let mut output = Vec::new();

        for record in records {
            let label = Self::decide(self.score(&record.text));
            if self.predictions.insert(record.id.clone(), label).is_none() {
                self.prediction_order.push(record.id.clone());
            }
            output.push(Prediction {
                id: record.id,
                label,
            });
        }

        output
    }

    /// Compare stored predictions against ground truth
    ///
    /// Only ids present in both the prediction map and the ground-truth rows
    /// are counted; the rest are silently excluded from both numerator and
    /// denominator. Accuracy is 0.0 when nothing overlaps.
    pub fn evaluate(
        &self,
        ground_truth: impl IntoIterator<Item = GroundTruthRecord>,
    ) -> EvaluationResult {
        let mut truth: HashMap<Text, Label, TextHashBuilder> = HashMap::default();
        for record in ground_truth {
            truth.insert(record.id, record.label);
        }

        let mut correct = 0;
        let mut total = 0;
        let mut mismatches = Vec::new();

        for id in &self.prediction_order {
            let predicted = self.predictions[id];
            if let Some(&actual) = truth.get(id) {
                if predicted == actual {
                    correct += 1;
                } else {
                    mismatches.push(Mismatch {
                        predicted,
                        actual,
                        id: id.clone(),
                    });
                }
                total += 1;
            }
        }

        let accuracy = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };

        EvaluationResult {
            accuracy,
            total,
            correct,
            mismatches,
        }
    }

    /// Frequency table built so far
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Number of distinct ids predicted so far
    pub fn prediction_count(&self) -> usize {
        self.predictions.len()
    }
}
