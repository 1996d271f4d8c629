use std::io;

use thiserror::Error;

use crate::types::{Label, ObservationIndex};

/// Error type for pair generation input validation, parsing, and IO failures.
#[derive(Debug, Error)]
pub enum PairGenError {
    #[error("pool labels are not provided; cannot generate pairs")]
    EmptyLabels,
    #[error("group ids and labels differ in length ({group_ids} group ids, {labels} labels)")]
    LengthMismatch { group_ids: usize, labels: usize },
    #[error("label at observation {index} is not comparable: {value}")]
    InvalidLabel {
        index: ObservationIndex,
        value: Label,
    },
    #[error("failed to parse observations at line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
