//! Line-oriented record readers
//!
//! Each reader streams a file row by row, detects an optional header via
//! one-row lookahead, and skips malformed rows with a per-line diagnostic.
//! Only a failure to open the file itself is fatal to the caller.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use super::csv::parse_record;
use super::types::{GroundTruthRecord, Label, LabeledRecord, UnlabeledRecord};
use crate::error::{Result, SentimentError};
use crate::text::Text;

/// Minimum field count of a training row
const TRAIN_MIN_FIELDS: usize = 6;
/// Minimum field count of a test row
const TEST_MIN_FIELDS: usize = 5;
/// Minimum field count of a ground-truth row
const TRUTH_MIN_FIELDS: usize = 2;

fn is_sentiment_header(first_field: &str) -> bool {
    first_field == "Sentiment"
}

fn is_test_header(first_field: &str) -> bool {
    matches!(first_field, "TweetID" | "Id" | "id")
}

/// Shared read loop: open, iterate lines, drop an optional header, parse each
/// remaining row and skip the ones that fail with a warning.
fn read_records<T>(
    path: &Path,
    is_header: fn(&str) -> bool,
    parse_row: fn(&[String], usize) -> Result<T>,
) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.trim().is_empty() {
            continue;
        }

        let fields = parse_record(&line);

        if index == 0 && is_header(&fields[0]) {
            debug!(file = %path.display(), "Skipping header row");
            continue;
        }

        match parse_row(&fields, line_number) {
            Ok(record) => records.push(record),
            Err(e) => warn!(file = %path.display(), "{e}"),
        }
    }

    Ok(records)
}

fn parse_label(field: &str, line: usize) -> Result<Label> {
    let code = field
        .trim()
        .parse::<i64>()
        .map_err(|_| SentimentError::RowFormat {
            line,
            reason: format!("label '{field}' is not an integer"),
        })?;

    Label::from_code(code).ok_or(SentimentError::RowFormat {
        line,
        reason: format!("label {code} is neither 0 nor 4"),
    })
}

fn check_fields(fields: &[String], min: usize, line: usize) -> Result<()> {
    if fields.len() < min {
        return Err(SentimentError::RowFormat {
            line,
            reason: format!("expected at least {min} fields, got {}", fields.len()),
        });
    }
    Ok(())
}

fn parse_labeled_row(fields: &[String], line: usize) -> Result<LabeledRecord> {
    check_fields(fields, TRAIN_MIN_FIELDS, line)?;
    Ok(LabeledRecord {
        label: parse_label(&fields[0], line)?,
        text: Text::new(&fields[5]),
    })
}

fn parse_unlabeled_row(fields: &[String], line: usize) -> Result<UnlabeledRecord> {
    check_fields(fields, TEST_MIN_FIELDS, line)?;
    Ok(UnlabeledRecord {
        id: Text::new(&fields[0]),
        text: Text::new(&fields[4]),
    })
}

fn parse_ground_truth_row(fields: &[String], line: usize) -> Result<GroundTruthRecord> {
    check_fields(fields, TRUTH_MIN_FIELDS, line)?;
    Ok(GroundTruthRecord {
        label: parse_label(&fields[0], line)?,
        id: Text::new(&fields[1]),
    })
}

/// Read training rows: label in field 0, tweet text in field 5
pub fn read_labeled_records(path: &Path) -> Result<Vec<LabeledRecord>> {
    read_records(path, is_sentiment_header, parse_labeled_row)
}

/// Read test rows: id in field 0, tweet text in field 4
pub fn read_unlabeled_records(path: &Path) -> Result<Vec<UnlabeledRecord>> {
    read_records(path, is_test_header, parse_unlabeled_row)
}

/// Read ground-truth rows: label in field 0, id in field 1
pub fn read_ground_truth(path: &Path) -> Result<Vec<GroundTruthRecord>> {
    read_records(path, is_sentiment_header, parse_ground_truth_row)
}
