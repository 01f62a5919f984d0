//! FILENAME: aggregate/src/functions.rs
//! PURPOSE: The scalar aggregates: sum, mean, min and max.
//! CONTEXT: Each function borrows a collection that may be missing
//! (`None` stands for "not a collection at all") and reads element values
//! through `selector::extract`. Missing and empty input are deliberately
//! treated differently per function:
//!
//! | function | `None` | empty  |
//! |----------|--------|--------|
//! | sum      | None   | Some(0)|
//! | mean     | None   | None   |
//! | min/max  | None   | None   |

use value::{Record, Value};

use crate::selector::{extract, Selector};

// ==================== Numeric Aggregates ====================

/// Adds up the selected values. Values are read with ToNumber, so a
/// non-numeric entry turns the whole sum into NaN.
pub fn sum<T: Record>(items: Option<&[T]>, selector: &Selector<'_, T>) -> Option<f64> {
    let items = items?;
    let total = items
        .iter()
        .map(|item| extract(item, selector).to_number())
        .fold(0.0, |acc, n| acc + n);
    Some(total)
}

/// Arithmetic mean of the selected values. Unlike `sum`, an empty
/// collection has no mean.
pub fn mean<T: Record>(items: Option<&[T]>, selector: &Selector<'_, T>) -> Option<f64> {
    let items = items?;
    if items.is_empty() {
        return None;
    }
    let total = sum(Some(items), selector)?;
    Some(total / items.len() as f64)
}

// ==================== Element Aggregates ====================

/// The element with the smallest selected value. The first of several
/// equal minima is returned.
pub fn min<'a, T: Record>(items: Option<&'a [T]>, selector: &Selector<'_, T>) -> Option<&'a T> {
    reduce_by(items?, selector, Value::js_le)
}

/// The element with the largest selected value. The first of several
/// equal maxima is returned.
pub fn max<'a, T: Record>(items: Option<&'a [T]>, selector: &Selector<'_, T>) -> Option<&'a T> {
    reduce_by(items?, selector, Value::js_ge)
}

/// Pairwise left fold: the accumulator survives while `keep(acc, candidate)`
/// holds, otherwise the candidate takes over. An undefined comparison
/// (NaN on either side) does not hold.
fn reduce_by<'a, T: Record>(
    items: &'a [T],
    selector: &Selector<'_, T>,
    keep: fn(&Value, &Value) -> bool,
) -> Option<&'a T> {
    let mut iter = items.iter();
    let first = iter.next()?;

    let mut best = first;
    let mut best_value = extract(first, selector);

    for item in iter {
        let candidate = extract(item, selector);
        if !keep(&best_value, &candidate) {
            best = item;
            best_value = candidate;
        }
    }

    Some(best)
}
