//! FILENAME: aggregate/src/lib.rs
//! Aggregate pipes for view templates.
//!
//! Every function borrows an optional collection (`None` means "not a
//! collection") and reads element values through one shared extractor, so a
//! pipe can aggregate plain numbers, a named field, or whatever an accessor
//! closure returns.
//!
//! Layers:
//! - `selector`: how a value is read out of an element (WHAT we aggregate)
//! - `functions`: sum, mean, min, max (HOW we reduce)
//! - `group`: partition by stringified key
//! - `definition`: aggregations addressable by name

pub mod definition;
pub mod error;
pub mod functions;
pub mod group;
pub mod selector;


pub use definition::{aggregate, AggregateOutput, Aggregation};
pub use error::AggregateError;
pub use functions::{max, mean, min, sum};
pub use group::{group_by, GroupMap};
pub use selector::{extract, KeySelector, Selector};
