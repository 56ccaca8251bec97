//! Record types and data structures

use std::fmt;

use crate::text::Text;

/// Binary sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Numeric code 0
    Negative,
    /// Numeric code 4
    Positive,
}

impl Label {
    /// Parse a label from its numeric code; anything but 0 or 4 is rejected
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Label::Negative),
            4 => Some(Label::Positive),
            _ => None,
        }
    }

    /// Numeric code used in the input and output files
    pub fn code(&self) -> i64 {
        match self {
            Label::Negative => 0,
            Label::Positive => 4,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One training row
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRecord {
    /// Ground sentiment of the text
    pub label: Label,
    /// Raw tweet text
    pub text: Text,
}

/// One test row
#[derive(Debug, Clone, PartialEq)]
pub struct UnlabeledRecord {
    /// Opaque row id
    pub id: Text,
    /// Raw tweet text
    pub text: Text,
}

/// One ground-truth row, used transiently during evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct GroundTruthRecord {
    /// Actual sentiment
    pub label: Label,
    /// Row id matching the test file
    pub id: Text,
}
