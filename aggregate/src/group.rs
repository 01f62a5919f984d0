//! FILENAME: aggregate/src/group.rs
//! PURPOSE: Partitions a collection by a stringified key.
//! CONTEXT: Group keys are rendered with `Value`'s string conversion, so
//! `true`, `null`, `undefined` and `1.5` become the group names a template
//! sees. Groups hold references into the input; nothing is cloned or moved.

use rustc_hash::FxHashMap;
use value::Record;

use crate::selector::{extract, KeySelector};

/// Stringified key -> elements with that key, in input order.
pub type GroupMap<'a, T> = FxHashMap<String, Vec<&'a T>>;

/// Groups `items` by the value `key` selects.
///
/// Returns `None` for a missing collection and an empty map for an empty
/// one. Within every group the original relative order is kept.
pub fn group_by<'a, T: Record>(
    items: Option<&'a [T]>,
    key: &KeySelector<'_, T>,
) -> Option<GroupMap<'a, T>> {
    let items = items?;
    let selector = key.as_selector();

    let mut groups: GroupMap<'a, T> = FxHashMap::default();
    for item in items {
        let group_key = extract(item, selector).to_string();
        groups.entry(group_key).or_default().push(item);
    }

    log::trace!(
        "group_by: {} elements into {} groups",
        items.len(),
        groups.len()
    );

    Some(groups)
}
