#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// このクレートで発生し得るすべてのエラー。
#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Error {
    #[error("unknown subtype for temporal type: {subtype}")]
    InvalidShape { subtype: u8 },

    #[error("number of boxes '{k}' is out of range (valid: 1..=1000)")]
    ConfigOutOfRange { k: i64 },

    #[error("unrecognized option '{key}'")]
    UnknownOption { key: String },

    #[error("invalid value '{value}' for option '{key}'")]
    InvalidOptionValue { key: String, value: String },

    #[error("a temporal sequence must have at least one instant")]
    EmptySequence,

    #[error("a temporal sequence set must have at least one sequence")]
    EmptySequenceSet,

    #[error("timestamps must be strictly increasing: instant {index} has {next} after {prev}")]
    NonIncreasingTimestamp { index: usize, prev: i64, next: i64 },

    #[error("sequence {index} overlaps or precedes the previous sequence")]
    OverlappingSequences { index: usize },

    #[error("instant {index} does not share the dimensionality of the first instant")]
    MixedDimensionality { index: usize },

    #[error("minimum is greater than maximum on dimension '{dimension}'")]
    InvertedBounds { dimension: String },

    #[error("coordinates must be finite")]
    NonFiniteCoordinate,
}
