//! Input records and CSV parsing
//!
//! Row formats, the comma-delimited field splitter, and line-oriented file
//! readers with optional-header detection.

pub mod csv;
pub mod reader;
pub mod types;

pub use csv::parse_record;
pub use reader::{read_ground_truth, read_labeled_records, read_unlabeled_records};
pub use types::*;
