//! File-level pipeline phases
//!
//! Thin I/O wrappers around [`SentimentClassifier`]: each phase reads its
//! input file, drives the classifier, and writes its output file. A phase
//! failure (unreadable input, unwritable output) aborts that phase only;
//! remaining phases still run and the first failure is reported at the end.
//! Row-level problems never surface here, the readers skip them.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::classifier::{EvaluationResult, SentimentClassifier, TrainingStats};
use crate::config::OutputConfig;
use crate::dataset::{read_ground_truth, read_labeled_records, read_unlabeled_records};
use crate::error::{Result, SentimentError};

/// Paths of the two generated files for a given prefix
pub fn output_paths(prefix: &str, output: &OutputConfig) -> (PathBuf, PathBuf) {
    (
        PathBuf::from(format!("{prefix}{}", output.results_suffix)),
        PathBuf::from(format!("{prefix}{}", output.accuracy_suffix)),
    )
}

/// Train the classifier from a labeled CSV file
pub fn run_training(classifier: &mut SentimentClassifier, path: &Path) -> Result<TrainingStats> {
    let records = read_labeled_records(path)?;
    let stats = classifier.train(records);
    info!(
        records = stats.records,
        tokens = stats.tokens,
        vocabulary = stats.vocabulary,
        "Training complete"
    );
    Ok(stats)
}

/// Predict labels for a test CSV file and write one `"<label>, <id>"` line
/// per processed row
pub fn run_prediction(
    classifier: &mut SentimentClassifier,
    test_path: &Path,
    results_path: &Path,
) -> Result<usize> {
    let records = read_unlabeled_records(test_path)?;
    // The output must be writable before any prediction is recorded; a
    // failed create leaves the prediction map untouched.
    let file = File::create(results_path)?;
    let mut writer = BufWriter::new(file);

    let predictions = classifier.predict(records);
    for prediction in &predictions {
        writeln!(writer, "{}, {}", prediction.label, prediction.id)?;
    }
    writer.flush()?;

    info!(
        predictions = predictions.len(),
        results = %results_path.display(),
        "Prediction complete"
    );
    Ok(predictions.len())
}

/// Evaluate stored predictions against a ground-truth CSV file and write the
/// accuracy report
///
/// First line is the accuracy to exactly three decimal places; each following
/// line is one `"<predicted>, <actual>, <id>"` mismatch.
pub fn run_evaluation(
    classifier: &SentimentClassifier,
    truth_path: &Path,
    accuracy_path: &Path,
) -> Result<EvaluationResult> {
    let records = read_ground_truth(truth_path)?;
    let result = classifier.evaluate(records);

    let file = File::create(accuracy_path)?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{:.3}", result.accuracy)?;
    for mismatch in &result.mismatches {
        writeln!(
            writer,
            "{}, {}, {}",
            mismatch.predicted, mismatch.actual, mismatch.id
        )?;
    }
    writer.flush()?;

    info!(
        accuracy = result.accuracy,
        correct = result.correct,
        total = result.total,
        mismatches = result.mismatches.len(),
        "Evaluation complete"
    );
    Ok(result)
}

/// Run all three phases, producing `<prefix>_results.csv` and
/// `<prefix>_accuracy.txt`
pub fn run(
    train_path: &Path,
    test_path: &Path,
    truth_path: &Path,
    prefix: &str,
    output: &OutputConfig,
) -> Result<EvaluationResult> {
    let mut classifier = SentimentClassifier::new();
    let (results_path, accuracy_path) = output_paths(prefix, output);
    let mut first_failure: Option<SentimentError> = None;

    if let Err(e) = run_training(&mut classifier, train_path) {
        error!("Training phase failed: {e}");
        first_failure = Some(e);
    }

    if let Err(e) = run_prediction(&mut classifier, test_path, &results_path) {
        error!("Prediction phase failed: {e}");
        first_failure = first_failure.or(Some(e));
    }

    match run_evaluation(&classifier, truth_path, &accuracy_path) {
        Ok(result) => match first_failure {
            Some(e) => Err(e),
            None => Ok(result),
        },
        Err(e) => {
            error!("Evaluation phase failed: {e}");
            Err(first_failure.unwrap_or(e))
        }
    }
}
