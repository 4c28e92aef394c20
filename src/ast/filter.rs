use std::ops::{BitAnd, BitOr, Not};

use crate::ast::{Key, Operand, SpecialKey};
use crate::render::{Custom, RenderFilter, RenderKey};
use crate::value::Value;

/// Infix operators of comparison leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Membership (`in`)
    In,
    /// Pattern match (`match`)
    Match,
}

impl CompareOp {
    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Equal => "==",
            CompareOp::NotEqual => "!=",
            CompareOp::LessThan => "<",
            CompareOp::GreaterThan => ">",
            CompareOp::LessEqual => "<=",
            CompareOp::GreaterEqual => ">=",
            CompareOp::In => "in",
            CompareOp::Match => "match",
        }
    }
}

/// A node of the boolean filter placed inside `*[...]`.
///
/// Combinators are n-ary and flatten on construction, so chaining `and`
/// never nests one `And` inside another. Mixed `&&`/`||` chains are rendered
/// without added parentheses and follow the query language's own precedence.
///
/// # Examples
///
/// ```
/// use groq_builder::{Filter, RenderFilter};
///
/// let filter = Filter::type_is("movie").and(Filter::greater_than("popularity", 15));
/// assert_eq!(filter.filter_text(), r#"_type == "movie" && popularity > 15"#);
///
/// let negated = !Filter::equal("releaseDate", "2016-04-27");
/// assert_eq!(negated.filter_text(), r#"!(releaseDate == "2016-04-27")"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `<key> <op> <operand>`
    Compare {
        key: Key,
        op: CompareOp,
        value: Operand,
    },

    /// Bare key evaluated for truthiness
    ///
    /// # Example
    /// ```text
    /// isReleased
    /// ```
    Truthy(Key),

    /// `defined(<key>)`
    Defined(Key),

    /// `identity()`
    Identity,

    /// Negation of the conjunction of its operands, always parenthesized
    ///
    /// # Example
    /// ```text
    /// !(a == 1 && b == 2)
    /// ```
    Not(Vec<Filter>),

    /// `a && b && ...`
    And(Vec<Filter>),

    /// `a || b || ...`
    Or(Vec<Filter>),

    /// Verbatim text
    Custom(Custom),
}

impl Filter {
    pub fn compare(key: impl Into<Key>, op: CompareOp, value: impl Into<Operand>) -> Self {
        Filter::Compare {
            key: key.into(),
            op,
            value: value.into(),
        }
    }

    pub fn equal(key: impl Into<Key>, value: impl Into<Operand>) -> Self {
        Filter::compare(key, CompareOp::Equal, value)
    }

    pub fn not_equal(key: impl Into<Key>, value: impl Into<Operand>) -> Self {
        Filter::compare(key, CompareOp::NotEqual, value)
    }

    pub fn less_than(key: impl Into<Key>, value: impl Into<Operand>) -> Self {
        Filter::compare(key, CompareOp::LessThan, value)
    }

    pub fn greater_than(key: impl Into<Key>, value: impl Into<Operand>) -> Self {
        Filter::compare(key, CompareOp::GreaterThan, value)
    }

    pub fn less_equal(key: impl Into<Key>, value: impl Into<Operand>) -> Self {
        Filter::compare(key, CompareOp::LessEqual, value)
    }

    pub fn greater_equal(key: impl Into<Key>, value: impl Into<Operand>) -> Self {
        Filter::compare(key, CompareOp::GreaterEqual, value)
    }

    /// `<key> in [<values>]`
    pub fn is_in<I, V>(key: impl Into<Key>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = Value::Array(values.into_iter().map(Into::into).collect());
        Filter::compare(key, CompareOp::In, values)
    }

    /// `<key> match "<pattern>"`
    pub fn matches(key: impl Into<Key>, pattern: impl Into<String>) -> Self {
        Filter::compare(key, CompareOp::Match, Value::String(pattern.into()))
    }

    /// `_type == "<name>"`
    pub fn type_is(name: impl Into<String>) -> Self {
        Filter::equal(SpecialKey::Type, Value::String(name.into()))
    }

    pub fn truthy(key: impl Into<Key>) -> Self {
        Filter::Truthy(key.into())
    }

    pub fn defined(key: impl Into<Key>) -> Self {
        Filter::Defined(key.into())
    }

    pub fn identity() -> Self {
        Filter::Identity
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Filter::Custom(Custom::new(text))
    }

    /// Negates a single filter.
    pub fn not(filter: impl Into<Filter>) -> Self {
        Filter::Not(vec![filter.into()])
    }

    /// Negates the conjunction of several filters.
    pub fn not_all(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::Not(filters.into_iter().collect())
    }

    /// Conjunction of several filters.
    ///
    /// A combinator with no operands renders nothing and constrains nothing.
    pub fn all(filters: impl IntoIterator<Item = Filter>) -> Self {
        filters
            .into_iter()
            .fold(Filter::And(Vec::new()), |acc, next| acc.and(next))
    }

    /// Disjunction of several filters.
    pub fn any(filters: impl IntoIterator<Item = Filter>) -> Self {
        filters
            .into_iter()
            .fold(Filter::Or(Vec::new()), |acc, next| acc.or(next))
    }

    pub fn and(self, other: impl Into<Filter>) -> Self {
        let mut operands = match self {
            Filter::And(operands) => operands,
            filter => vec![filter],
        };
        match other.into() {
            Filter::And(more) => operands.extend(more),
            filter => operands.push(filter),
        }
        Filter::And(operands)
    }

    pub fn or(self, other: impl Into<Filter>) -> Self {
        let mut operands = match self {
            Filter::Or(operands) => operands,
            filter => vec![filter],
        };
        match other.into() {
            Filter::Or(more) => operands.extend(more),
            filter => operands.push(filter),
        }
        Filter::Or(operands)
    }
}

fn join(filters: &[Filter], separator: &str) -> String {
    filters
        .iter()
        .map(RenderFilter::filter_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

impl RenderFilter for Filter {
    fn filter_text(&self) -> String {
        match self {
            Filter::Compare { key, op, value } => {
                format!("{} {} {}", key.key_text(), op.symbol(), value.text())
            }
            Filter::Truthy(key) => key.key_text(),
            Filter::Defined(key) => format!("defined({})", key.key_text()),
            Filter::Identity => "identity()".to_string(),
            Filter::Not(operands) => {
                let inner = join(operands, " && ");
                if inner.is_empty() {
                    inner
                } else {
                    format!("!({})", inner)
                }
            }
            Filter::And(operands) => join(operands, " && "),
            Filter::Or(operands) => join(operands, " || "),
            Filter::Custom(custom) => custom.filter_text(),
        }
    }
}

impl From<Key> for Filter {
    fn from(key: Key) -> Self {
        Filter::Truthy(key)
    }
}

impl From<Custom> for Filter {
    fn from(custom: Custom) -> Self {
        Filter::Custom(custom)
    }
}

impl<R: Into<Filter>> BitAnd<R> for Filter {
    type Output = Filter;

    fn bitand(self, rhs: R) -> Filter {
        self.and(rhs)
    }
}

impl<R: Into<Filter>> BitOr<R> for Filter {
    type Output = Filter;

    fn bitor(self, rhs: R) -> Filter {
        self.or(rhs)
    }
}

impl Not for Filter {
    type Output = Filter;

    fn not(self) -> Filter {
        Filter::Not(vec![self])
    }
}
