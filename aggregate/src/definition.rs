//! FILENAME: aggregate/src/definition.rs
//! PURPOSE: Named aggregations for view layers that bind pipes by name.
//! CONTEXT: A template refers to an aggregate as `sum`, `avg`, `max`...
//! This module maps such names onto the functions in `functions.rs` and
//! wraps their two result shapes (a number, or an element) in one type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use value::Record;

use crate::error::AggregateError;
use crate::functions::{max, mean, min, sum};
use crate::selector::Selector;

// ============================================================================
// AGGREGATION TYPES
// ============================================================================

/// The scalar aggregations available by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    #[serde(alias = "avg", alias = "average")]
    Mean,
    Min,
    Max,
}

impl Aggregation {
    pub fn name(&self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Mean => "mean",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aggregation {
    type Err = AggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sum" => Ok(Aggregation::Sum),
            "mean" | "avg" | "average" => Ok(Aggregation::Mean),
            "min" => Ok(Aggregation::Min),
            "max" => Ok(Aggregation::Max),
            _ => Err(AggregateError::UnknownAggregation(s.to_string())),
        }
    }
}

/// What an aggregation produced: sum/mean yield numbers, min/max yield
/// one of the input elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregateOutput<'a, T> {
    Number(f64),
    Element(&'a T),
}

impl<'a, T> AggregateOutput<'a, T> {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AggregateOutput::Number(n) => Some(*n),
            AggregateOutput::Element(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&'a T> {
        match self {
            AggregateOutput::Element(e) => Some(*e),
            AggregateOutput::Number(_) => None,
        }
    }
}

/// Runs the aggregation named by `kind`.
pub fn aggregate<'a, T: Record>(
    kind: Aggregation,
    items: Option<&'a [T]>,
    selector: &Selector<'_, T>,
) -> Option<AggregateOutput<'a, T>> {
    match kind {
        Aggregation::Sum => sum(items, selector).map(AggregateOutput::Number),
        Aggregation::Mean => mean(items, selector).map(AggregateOutput::Number),
        Aggregation::Min => min(items, selector).map(AggregateOutput::Element),
        Aggregation::Max => max(items, selector).map(AggregateOutput::Element),
    }
}
