//! FILENAME: aggregate/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("{operation} requires a field or function selector")]
    SelectorRequired { operation: &'static str },

    #[error("Unknown aggregation: {0}")]
    UnknownAggregation(String),
}
