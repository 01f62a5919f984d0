//! FILENAME: value/src/lib.rs
//! PURPOSE: Main library entry point for the dynamic value layer.
//! CONTEXT: Re-exports the `Value` type, the `Record` access trait and the
//! number conversions shared by the aggregate and template crates.

pub mod number;
pub mod record;
pub mod value;

// Re-export commonly used types at the crate root
pub use number::{format_number, parse_number};
pub use record::Record;
pub use value::Value;
