//! Literal encoding for scalar values.
//!
//! Every [`Value`] has one canonical textual form inside a query. Encoding is
//! total: values that have no sensible literal (a `NaN`, a map that cannot be
//! serialized) degrade to `null` or `{}` and emit a [`Diagnostic`] instead of
//! failing.
//!
//! # Examples
//!
//! ```
//! use groq_builder::Value;
//! use groq_builder::output::to_literal;
//!
//! assert_eq!(to_literal(&Value::from("movie")), "\"movie\"");
//! assert_eq!(to_literal(&Value::from(vec![1, 2])), "[1, 2]");
//! assert_eq!(to_literal(&Value::from(0..10)), "0...10");
//! assert_eq!(to_literal(&Value::Float(f64::NAN)), "null");
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::diagnostic::Diagnostic;
use crate::value::Value;

pub struct LiteralPrinter;

impl LiteralPrinter {
    pub fn print(&self, value: &Value) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => self.print_float(*n),
            Value::String(s) => quote(s),
            Value::Array(arr) => self.print_array(arr),
            Value::Object(obj) => self.print_object(obj),
            Value::DateTime(instant) => quote(&format_instant(instant)),
            // Three dots exclude the upper bound, two dots include it.
            Value::Range(lower, upper) => format!("{}...{}", lower, upper),
            Value::ClosedRange(lower, upper) => format!("{}..{}", lower, upper),
            Value::Pair(left, right) => format!("{} => {}", self.print(left), self.print(right)),
            Value::Path(segments) => quote(&segments.join(".")),
        }
    }

    fn print_float(&self, n: f64) -> String {
        if !n.is_finite() {
            Diagnostic::NonFiniteFloat(n).emit();
            return "null".to_string();
        }
        // Display never switches to exponent notation
        let text = n.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        }
    }

    fn print_array(&self, arr: &[Value]) -> String {
        let items: Vec<String> = arr.iter().map(|v| self.print(v)).collect();
        format!("[{}]", items.join(", "))
    }

    fn print_object(&self, obj: &BTreeMap<String, Value>) -> String {
        match serde_json::to_string(&JsonObject(obj)) {
            Ok(json) => json,
            Err(err) => {
                Diagnostic::UnencodableObject(err.to_string()).emit();
                "{}".to_string()
            }
        }
    }
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s)
}

/// Formats an instant as `yyyy-MM-ddTHH:mm:ss.SSZ` in UTC.
///
/// The fractional part is always two digits (centiseconds, truncated) so the
/// output does not depend on the precision of the source clock. A leap
/// second keeps its `:60` but the fraction stays two digits.
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    format!(
        "{}.{:02}Z",
        instant.format("%Y-%m-%dT%H:%M:%S"),
        (instant.timestamp_subsec_millis() % 1000) / 10
    )
}

// Map scalars go through serde_json so keys come out sorted and strings are
// JSON-escaped. Variants without a JSON form abort the whole map.
struct JsonObject<'a>(&'a BTreeMap<String, Value>);

struct JsonValue<'a>(&'a Value);

impl Serialize for JsonObject<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, &JsonValue(value))?;
        }
        map.end()
    }
}

impl Serialize for JsonValue<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(n) => Err(S::Error::custom(format!("float value {} is not finite", n))),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for item in arr {
                    seq.serialize_element(&JsonValue(item))?;
                }
                seq.end()
            }
            Value::Object(obj) => JsonObject(obj).serialize(serializer),
            Value::DateTime(instant) => serializer.serialize_str(&format_instant(instant)),
            Value::Path(segments) => serializer.serialize_str(&segments.join(".")),
            other @ (Value::Range(..) | Value::ClosedRange(..) | Value::Pair(..)) => Err(
                S::Error::custom(format!("{} has no JSON representation", other.type_name())),
            ),
        }
    }
}

// Convenience functions

/// Encodes a scalar as query literal text.
///
/// # Examples
///
/// ```
/// use groq_builder::Value;
/// use groq_builder::output::to_literal;
///
/// assert_eq!(to_literal(&Value::from(true)), "true");
/// assert_eq!(to_literal(&Value::pair("a", 1)), "\"a\" => 1");
/// assert_eq!(to_literal(&Value::path(["drafts", "alien"])), "\"drafts.alien\"");
/// ```
pub fn to_literal(value: &Value) -> String {
    LiteralPrinter.print(value)
}
