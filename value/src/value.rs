//! FILENAME: value/src/value.rs
//! PURPOSE: Defines the dynamic `Value` that flows through every pipe.
//! CONTEXT: Elements handed to the aggregates and variables handed to the
//! template helper are reduced to this type before they are compared,
//! summed or stringified. Its coercions follow the host-script rules that
//! view templates expect (ToNumber, ToPrimitive, String()), so a grouping
//! key or an interpolated number reads the same as in the template layer.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::number::{format_number, parse_number};

/// A dynamically typed value.
///
/// `Undefined` and `Null` are distinct: a missing property is `Undefined`,
/// an explicit empty value is `Null`. Both are "nullish".
///
/// Integers that an `f64` holds exactly are stored as `Number`; wider ones
/// (beyond 2^53) keep their exact digits in `Integer`. Build integers with
/// `From` or `Value::integer` so the representation stays canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    #[serde(skip_deserializing)]
    Undefined,
    Boolean(bool),
    Number(f64),
    #[serde(skip_deserializing)]
    Integer(i128),
    Text(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

impl Value {
    /// Builds an object from `(key, value)` pairs.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns true for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// An integer, as `Number` when an `f64` represents it exactly and as
    /// `Integer` otherwise.
    pub fn integer(n: i128) -> Self {
        let approx = n as f64;
        if approx.abs() < 1.7e38 && approx as i128 == n {
            Value::Number(approx)
        } else {
            Value::Integer(n)
        }
    }

    /// Looks up a property on an object, or an index/`length` on an array
    /// or a string. String indices count UTF-16 code units.
    /// Anything else has no properties and yields `Undefined`.
    pub fn get(&self, name: &str) -> Value {
        match self {
            Value::Object(map) => map.get(name).cloned().unwrap_or(Value::Undefined),
            Value::Array(items) if name == "length" => Value::Number(items.len() as f64),
            Value::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .cloned()
                .unwrap_or(Value::Undefined),
            Value::Text(s) if name == "length" => Value::Number(s.encode_utf16().count() as f64),
            Value::Text(s) => name
                .parse::<usize>()
                .ok()
                .and_then(|i| s.encode_utf16().nth(i))
                .map(|unit| Value::Text(String::from_utf16_lossy(&[unit])))
                .unwrap_or(Value::Undefined),
            _ => Value::Undefined,
        }
    }

    /// Numeric conversion with ToNumber semantics.
    /// Never fails: values without a numeric reading become NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::Integer(n) => *n as f64,
            Value::Text(s) => parse_number(s),
            Value::Array(_) => match self.to_primitive() {
                Cow::Owned(Value::Text(s)) => parse_number(&s),
                _ => f64::NAN,
            },
            Value::Object(_) => f64::NAN,
        }
    }

    /// Collapses arrays and objects to their string form; scalars are
    /// returned as-is.
    pub fn to_primitive(&self) -> Cow<'_, Value> {
        match self {
            Value::Array(_) | Value::Object(_) => Cow::Owned(Value::Text(self.to_string())),
            scalar => Cow::Borrowed(scalar),
        }
    }

    /// Relational comparison as used by `<`, `<=`, `>`, `>=` in templates.
    ///
    /// Two strings compare by UTF-16 code units; any other pair compares
    /// numerically, exactly for wide integers.
    /// Returns `None` when the comparison is undefined (a NaN is involved),
    /// in which case every relational operator evaluates to false.
    pub fn js_cmp(&self, other: &Value) -> Option<Ordering> {
        let left = self.to_primitive();
        let right = other.to_primitive();
        match (left.as_ref(), right.as_ref()) {
            (Value::Text(a), Value::Text(b)) => Some(a.encode_utf16().cmp(b.encode_utf16())),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Integer(a), b) => cmp_integer_float(*a, b.to_number()),
            (a, Value::Integer(b)) => {
                cmp_integer_float(*b, a.to_number()).map(Ordering::reverse)
            }
            (a, b) => a.to_number().partial_cmp(&b.to_number()),
        }
    }

    pub fn js_ge(&self, other: &Value) -> bool {
        matches!(self.js_cmp(other), Some(Ordering::Greater | Ordering::Equal))
    }

    pub fn js_le(&self, other: &Value) -> bool {
        matches!(self.js_cmp(other), Some(Ordering::Less | Ordering::Equal))
    }
}

/// Exact ordering of `int` against `float`.
fn cmp_integer_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // Outside the i128 range the sign alone decides
    if float >= 1.7e38 {
        return Some(Ordering::Less);
    }
    if float <= -1.7e38 {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

/// String conversion. Matches `String(value)`: `undefined`, `null`,
/// `true`, shortest decimal numbers, comma-joined arrays.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => f.write_str(&format_number(*n)),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Nullish entries render as empty slots
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::integer(n as i128)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(opt: Option<V>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<V: Into<Value>> From<Vec<V>> for Value {
    fn from(items: Vec<V>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<&serde_json::Number> for Value {
    fn from(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Value::integer(i as i128)
        } else if let Some(u) = n.as_u64() {
            Value::integer(u as i128)
        } else {
            Value::Number(n.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::from(&n),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => Value::from(n),
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            serde_json::Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Number(42.0).to_string(), "42");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
        assert_eq!(Value::Text("abc".to_string()).to_string(), "abc");
    }

    #[test]
    fn test_display_array_and_object() {
        let arr = Value::from(vec![Value::Number(1.0), Value::Null, Value::from("x")]);
        assert_eq!(arr.to_string(), "1,,x");

        let obj = Value::object([("a", 1)]);
        assert_eq!(obj.to_string(), "[object Object]");
    }

    #[test]
    fn test_to_number() {
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::Boolean(true).to_number(), 1.0);
        assert_eq!(Value::from(" 12.5 ").to_number(), 12.5);
        assert_eq!(Value::from("").to_number(), 0.0);
        assert!(Value::from("abc").to_number().is_nan());
        assert_eq!(Value::from(vec![7]).to_number(), 7.0);
        assert!(Value::object([("a", 1)]).to_number().is_nan());
    }

    #[test]
    fn test_js_cmp_strings_are_lexical() {
        // "10" < "9" lexically, unlike the numeric reading
        let a = Value::from("10");
        let b = Value::from("9");
        assert_eq!(a.js_cmp(&b), Some(Ordering::Less));
        assert!(b.js_ge(&a));
    }

    #[test]
    fn test_js_cmp_mixed_is_numeric() {
        let a = Value::from("10");
        let b = Value::Number(9.0);
        assert_eq!(a.js_cmp(&b), Some(Ordering::Greater));
        assert!(Value::Boolean(true).js_le(&Value::Number(1.0)));
    }

    #[test]
    fn test_js_cmp_nan_is_unordered() {
        let nan = Value::Undefined;
        let one = Value::Number(1.0);
        assert_eq!(nan.js_cmp(&one), None);
        assert!(!nan.js_ge(&one));
        assert!(!nan.js_le(&one));
    }

    #[test]
    fn test_get_property() {
        let obj = Value::object([("name", "Ann")]);
        assert_eq!(obj.get("name"), Value::from("Ann"));
        assert_eq!(obj.get("missing"), Value::Undefined);

        let arr = Value::from(vec![10, 20]);
        assert_eq!(arr.get("length"), Value::Number(2.0));
        assert_eq!(arr.get("1"), Value::Number(20.0));
        assert_eq!(arr.get("5"), Value::Undefined);

        assert_eq!(Value::Number(3.0).get("x"), Value::Undefined);
    }

    #[test]
    fn test_get_string_index() {
        let text = Value::from("héllo");
        assert_eq!(text.get("0"), Value::from("h"));
        assert_eq!(text.get("1"), Value::from("é"));
        assert_eq!(text.get("5"), Value::Undefined);
        assert_eq!(text.get("x"), Value::Undefined);

        // Indices count UTF-16 code units; a lone surrogate is not representable
        let emoji = Value::from("a\u{1F600}");
        assert_eq!(emoji.get("length"), Value::Number(3.0));
        assert_eq!(emoji.get("1"), Value::from("\u{FFFD}"));
    }

    #[test]
    fn test_js_cmp_strings_use_utf16_order() {
        // U+FF61 is above the surrogate range, U+1F600 encodes as D83D DE00
        let halfwidth = Value::from("\u{FF61}");
        let emoji = Value::from("\u{1F600}");
        assert_eq!(halfwidth.js_cmp(&emoji), Some(Ordering::Greater));
        assert!(halfwidth.js_ge(&emoji));
    }

    #[test]
    fn test_wide_integers_stay_exact() {
        let low = Value::from(9_007_199_254_740_992u64);
        let high = Value::from(9_007_199_254_740_993u64);

        assert_eq!(low, Value::Number(9_007_199_254_740_992.0));
        assert_eq!(high, Value::Integer(9_007_199_254_740_993));
        assert_eq!(high.to_string(), "9007199254740993");
        assert_eq!(Value::from(u64::MAX).to_string(), "18446744073709551615");

        assert_eq!(low.js_cmp(&high), Some(Ordering::Less));
        assert_eq!(high.js_cmp(&low), Some(Ordering::Greater));
        assert_eq!(high.js_cmp(&Value::from(9_007_199_254_740_994u64)), Some(Ordering::Less));
        assert_eq!(high.js_cmp(&Value::Number(9e15 + 0.5)), Some(Ordering::Greater));
        assert_eq!(high.js_cmp(&Value::Undefined), None);
        assert_eq!(Value::from(i64::MIN + 1).js_cmp(&Value::Number(f64::NEG_INFINITY)), Some(Ordering::Greater));
    }

    #[test]
    fn test_small_integers_are_numbers() {
        assert_eq!(Value::from(42u64), Value::Number(42.0));
        assert_eq!(Value::from(-7i64), Value::Number(-7.0));
        assert_eq!(Value::integer(1 << 60), Value::Number(2f64.powi(60)));
    }

    #[test]
    fn test_json_wide_integer() {
        let v = Value::from(json!({"id": 9_007_199_254_740_993u64}));
        assert_eq!(v.get("id"), Value::Integer(9_007_199_254_740_993));
    }

    #[test]
    fn test_from_json() {
        let v = Value::from(json!({"a": 1, "b": [true, null], "c": "s"}));
        assert_eq!(v.get("a"), Value::Number(1.0));
        assert_eq!(v.get("b"), Value::Array(vec![Value::Boolean(true), Value::Null]));
        assert_eq!(v.get("c"), Value::from("s"));
    }

    #[test]
    fn test_deserialize_null_is_null() {
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Null);

        let v: Value = serde_json::from_str(r#"{"n": 3}"#).unwrap();
        assert_eq!(v.get("n"), Value::Number(3.0));
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some(2)), Value::Number(2.0));
    }
}
