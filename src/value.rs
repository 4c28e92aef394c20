use std::collections::{BTreeMap, HashMap};
use std::ops::{Range, RangeInclusive};

use chrono::{DateTime, Utc};

use crate::diagnostic::Diagnostic;

/// A scalar literal that can appear on the right-hand side of a filter or
/// as a fallback inside a projection.
///
/// Every variant has exactly one textual encoding, produced by
/// [`crate::output::to_literal`]. Encoding never fails.
///
/// # Examples
///
/// ```
/// use groq_builder::Value;
///
/// let title = Value::from("Alien");
/// let year = Value::from(1979);
/// let tags = Value::from(vec!["horror", "sci-fi"]);
/// let missing: Value = Option::<i64>::None.into();
///
/// assert_eq!(missing, Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `null`, also produced by an absent optional
    Null,

    /// `true` / `false`
    Boolean(bool),

    /// Integer number
    Integer(i64),

    /// Floating-point number, may be non-finite
    Float(f64),

    /// String literal, rendered in double quotes without escaping
    String(String),

    /// Ordered list of scalars
    ///
    /// # Example
    /// ```text
    /// ["movie", "person"]
    /// ```
    Array(Vec<Value>),

    /// String-keyed map, rendered as compact JSON with sorted keys
    ///
    /// # Example
    /// ```text
    /// {"a":1,"b":"two"}
    /// ```
    Object(BTreeMap<String, Value>),

    /// Point in time, rendered as a fixed-precision UTC string literal
    ///
    /// # Example
    /// ```text
    /// "2016-04-25T13:05:09.25Z"
    /// ```
    DateTime(DateTime<Utc>),

    /// Half-open range `[lower, upper)`
    ///
    /// # Example
    /// ```text
    /// 0...10
    /// ```
    Range(i64, i64),

    /// Closed range `[lower, upper]`
    ///
    /// # Example
    /// ```text
    /// 0..10
    /// ```
    ClosedRange(i64, i64),

    /// Key-value pair
    ///
    /// # Example
    /// ```text
    /// "popularity" => 20
    /// ```
    Pair(Box<Value>, Box<Value>),

    /// Hierarchical path, dot-joined inside one string literal
    ///
    /// # Example
    /// ```text
    /// "drafts.movies.alien"
    /// ```
    Path(Vec<String>),
}

impl Value {
    /// Builds a [`Value::Pair`] from two encodable sides.
    pub fn pair(left: impl Into<Value>, right: impl Into<Value>) -> Self {
        Value::Pair(Box::new(left.into()), Box::new(right.into()))
    }

    /// Builds a [`Value::Path`] from its segments.
    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Path(segments.into_iter().map(Into::into).collect())
    }

    /// Short type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::DateTime(_) => "datetime",
            Value::Range(..) => "range",
            Value::ClosedRange(..) => "closed range",
            Value::Pair(..) => "pair",
            Value::Path(_) => "path",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

macro_rules! integer_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Integer(n as i64)
                }
            }
        )*
    };
}

integer_value!(i8, i16, i32, i64, u8, u16, u32);

/// Narrows an unsigned integer to `i64`, reporting values above `i64::MAX`.
pub(crate) fn narrow_unsigned(n: u64) -> Option<i64> {
    let narrowed = i64::try_from(n).ok();
    if narrowed.is_none() {
        Diagnostic::IntegerOutOfRange(n).emit();
    }
    narrowed
}

impl From<u64> for Value {
    /// Integers above `i64::MAX` keep their magnitude as a float.
    fn from(n: u64) -> Self {
        match narrow_unsigned(n) {
            Some(n) => Value::Integer(n),
            None => Value::Float(n as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::from(u64::try_from(n).unwrap_or(u64::MAX))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(instant: DateTime<Utc>) -> Self {
        Value::DateTime(instant)
    }
}

impl From<Range<i64>> for Value {
    fn from(range: Range<i64>) -> Self {
        Value::Range(range.start, range.end)
    }
}

impl From<RangeInclusive<i64>> for Value {
    fn from(range: RangeInclusive<i64>) -> Self {
        Value::ClosedRange(*range.start(), *range.end())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(map: BTreeMap<String, T>) -> Self {
        Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<T: Into<Value>> From<HashMap<String, T>> for Value {
    fn from(map: HashMap<String, T>) -> Self {
        Value::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<L: Into<Value>, R: Into<Value>> From<(L, R)> for Value {
    fn from((left, right): (L, R)) -> Self {
        Value::pair(left, right)
    }
}
