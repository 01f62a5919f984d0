//! FILENAME: value/src/record.rs
//! PURPOSE: The `Record` trait: how an element exposes itself and its fields.
//! CONTEXT: Aggregates read either the whole element or one named field of
//! it; the template helper reads variables by name. Both go through this
//! trait so plain numbers, JSON documents, maps and user structs can all be
//! fed to the same pipes.

use std::collections::{BTreeMap, HashMap};

use crate::value::Value;

/// An element that can be read as a `Value` or queried by field name.
///
/// User types implement this to take part in keyed aggregation:
///
/// ```
/// use value::{Record, Value};
///
/// struct Order {
///     region: String,
///     amount: f64,
/// }
///
/// impl Record for Order {
///     fn to_value(&self) -> Value {
///         Value::object([
///             ("region", Value::from(self.region.as_str())),
///             ("amount", Value::from(self.amount)),
///         ])
///     }
///
///     fn field(&self, name: &str) -> Value {
///         match name {
///             "region" => Value::from(self.region.as_str()),
///             "amount" => Value::from(self.amount),
///             _ => Value::Undefined,
///         }
///     }
/// }
///
/// let order = Order { region: "North".into(), amount: 12.5 };
/// assert_eq!(order.field("amount"), Value::Number(12.5));
/// assert_eq!(order.field("missing"), Value::Undefined);
/// ```
pub trait Record {
    /// The element itself as a value.
    fn to_value(&self) -> Value;

    /// A named property. Missing properties are `Value::Undefined`.
    /// Scalars have no properties.
    fn field(&self, name: &str) -> Value {
        let _ = name;
        Value::Undefined
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn field(&self, name: &str) -> Value {
        (**self).field(name)
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn field(&self, name: &str) -> Value {
        (**self).field(name)
    }
}

impl Record for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn field(&self, name: &str) -> Value {
        self.get(name)
    }
}

impl Record for serde_json::Value {
    fn to_value(&self) -> Value {
        Value::from(self)
    }

    fn field(&self, name: &str) -> Value {
        match self {
            serde_json::Value::Object(map) => {
                map.get(name).map(Value::from).unwrap_or(Value::Undefined)
            }
            serde_json::Value::Array(items) if name == "length" => {
                Value::Number(items.len() as f64)
            }
            serde_json::Value::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .map(Value::from)
                .unwrap_or(Value::Undefined),
            serde_json::Value::String(s) => Value::Text(s.clone()).get(name),
            _ => Value::Undefined,
        }
    }
}

macro_rules! impl_record_for_scalar {
    ($($t:ty),*) => {
        $(
            impl Record for $t {
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_record_for_scalar!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool);

impl Record for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn field(&self, name: &str) -> Value {
        Value::Text(self.clone()).get(name)
    }
}

impl Record for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }

    fn field(&self, name: &str) -> Value {
        Value::Text(self.to_string()).get(name)
    }
}

impl<V: Record> Record for Option<V> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, Record::to_value)
    }

    fn field(&self, name: &str) -> Value {
        self.as_ref().map_or(Value::Undefined, |v| v.field(name))
    }
}

impl<V: Record> Record for BTreeMap<String, V> {
    fn to_value(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }

    fn field(&self, name: &str) -> Value {
        self.get(name).map_or(Value::Undefined, Record::to_value)
    }
}

impl<V: Record, S: std::hash::BuildHasher> Record for HashMap<String, V, S> {
    fn to_value(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect())
    }

    fn field(&self, name: &str) -> Value {
        self.get(name).map_or(Value::Undefined, Record::to_value)
    }
}
