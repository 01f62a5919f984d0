//! FILENAME: aggregate/src/selector.rs
//! PURPOSE: Selectors and the single value-extraction helper.
//! CONTEXT: Every aggregate needs "the value of this element": the element
//! itself, one of its fields, or whatever a caller-supplied accessor says.
//! That choice is made here and only here; the aggregates call `extract`.

use std::borrow::Cow;
use std::fmt;

use value::{Record, Value};

use crate::error::AggregateError;

/// How to read the aggregation value out of an element.
pub enum Selector<'a, T: ?Sized> {
    /// The element itself is the value.
    Identity,
    /// A named property of the element.
    Field(Cow<'a, str>),
    /// A caller-supplied accessor.
    Func(Box<dyn Fn(&T) -> Value + 'a>),
}

impl<'a, T: ?Sized> Selector<'a, T> {
    pub fn identity() -> Self {
        Selector::Identity
    }

    pub fn field(name: impl Into<Cow<'a, str>>) -> Self {
        Selector::Field(name.into())
    }

    /// Wraps an accessor. The result is converted into a `Value`, so
    /// closures can return `f64`, `bool`, `String` and friends directly.
    pub fn func<F, R>(f: F) -> Self
    where
        T: 'a,
        F: Fn(&T) -> R + 'a,
        R: Into<Value>,
    {
        Selector::Func(Box::new(move |element: &T| -> Value { f(element).into() }))
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Selector::Identity)
    }
}

impl<T: ?Sized> Default for Selector<'_, T> {
    fn default() -> Self {
        Selector::Identity
    }
}

impl<'a, T: ?Sized> From<&'a str> for Selector<'a, T> {
    fn from(name: &'a str) -> Self {
        Selector::Field(Cow::Borrowed(name))
    }
}

impl<T: ?Sized> From<String> for Selector<'_, T> {
    fn from(name: String) -> Self {
        Selector::Field(Cow::Owned(name))
    }
}

impl<T: ?Sized> fmt::Debug for Selector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Identity => f.write_str("Identity"),
            Selector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Selector::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// Reads the aggregation value of `element`.
///
/// No coercion happens here; callers decide whether they need a number,
/// a comparable or a string.
pub fn extract<T: Record + ?Sized>(element: &T, selector: &Selector<'_, T>) -> Value {
    match selector {
        Selector::Func(f) => f(element),
        Selector::Identity => element.to_value(),
        Selector::Field(name) => element.field(name),
    }
}

// ============================================================================
// KEY SELECTOR
// ============================================================================

/// A selector that is never `Identity`. Grouping always needs a key source.
pub struct KeySelector<'a, T: ?Sized>(Selector<'a, T>);

impl<T: ?Sized> fmt::Debug for KeySelector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("KeySelector").field(&self.0).finish()
    }
}

impl<'a, T: ?Sized> KeySelector<'a, T> {
    pub fn field(name: impl Into<Cow<'a, str>>) -> Self {
        KeySelector(Selector::field(name))
    }

    pub fn func<F, R>(f: F) -> Self
    where
        T: 'a,
        F: Fn(&T) -> R + 'a,
        R: Into<Value>,
    {
        KeySelector(Selector::func(f))
    }

    pub fn as_selector(&self) -> &Selector<'a, T> {
        &self.0
    }
}

impl<'a, T: ?Sized> TryFrom<Selector<'a, T>> for KeySelector<'a, T> {
    type Error = AggregateError;

    fn try_from(selector: Selector<'a, T>) -> Result<Self, Self::Error> {
        if selector.is_identity() {
            return Err(AggregateError::SelectorRequired { operation: "group_by" });
        }
        Ok(KeySelector(selector))
    }
}

impl<'a, T: ?Sized> From<&'a str> for KeySelector<'a, T> {
    fn from(name: &'a str) -> Self {
        KeySelector::field(name)
    }
}

impl<T: ?Sized> From<String> for KeySelector<'_, T> {
    fn from(name: String) -> Self {
        KeySelector::field(name)
    }
}
