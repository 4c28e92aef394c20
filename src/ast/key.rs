use std::ops::{Add, Sub};

use chrono::{DateTime, Utc};

use crate::ast::{ConcatOp, Function};
use crate::render::{RenderKey, RenderLiteral};
use crate::value::Value;

/// Reserved document keys maintained by the content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    /// `_type`
    Type,
    /// `_id`
    Id,
    /// `_rev`
    Rev,
    /// `_createdAt`
    CreatedAt,
    /// `_updatedAt`
    UpdatedAt,
}

impl SpecialKey {
    pub fn text(self) -> &'static str {
        match self {
            SpecialKey::Type => "_type",
            SpecialKey::Id => "_id",
            SpecialKey::Rev => "_rev",
            SpecialKey::CreatedAt => "_createdAt",
            SpecialKey::UpdatedAt => "_updatedAt",
        }
    }
}

/// A reference to a document field, as used on the left of a comparison or
/// inside an ordering clause.
///
/// Modifiers wrap another key rather than raw text, so they nest:
///
/// ```
/// use groq_builder::{Key, RenderKey, SpecialKey};
///
/// assert_eq!(Key::from("title").key_text(), "title");
/// assert_eq!(Key::from(SpecialKey::CreatedAt).key_text(), "_createdAt");
/// assert_eq!(Key::lower(Key::upper("title")).key_text(), "lower(upper(title))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    /// Plain field name, rendered verbatim
    Name(String),

    /// Reserved key with a fixed substitution
    Special(SpecialKey),

    /// Function applied to another key
    ///
    /// # Example
    /// ```text
    /// lower(title)
    /// dateTime(_createdAt)
    /// ```
    Call { function: Function, key: Box<Key> },

    /// Two operands joined by `+` or `-`
    ///
    /// # Example
    /// ```text
    /// dateTime(now()) - dateTime(_createdAt)
    /// ```
    Concat {
        op: ConcatOp,
        lhs: Box<Operand>,
        rhs: Box<Operand>,
    },
}

impl Key {
    pub fn name(name: impl Into<String>) -> Self {
        Key::Name(name.into())
    }

    /// `lower(key)`
    pub fn lower(key: impl Into<Key>) -> Self {
        Key::call(Function::Lower, key)
    }

    /// `upper(key)`
    pub fn upper(key: impl Into<Key>) -> Self {
        Key::call(Function::Upper, key)
    }

    /// `dateTime(key)`
    pub fn date_time(key: impl Into<Key>) -> Self {
        Key::call(Function::DateTime, key)
    }

    /// `length(key)`
    pub fn length(key: impl Into<Key>) -> Self {
        Key::call(Function::Length, key)
    }

    /// `string(key)`
    pub fn string(key: impl Into<Key>) -> Self {
        Key::call(Function::String, key)
    }

    fn call(function: Function, key: impl Into<Key>) -> Self {
        Key::Call {
            function,
            key: Box::new(key.into()),
        }
    }

    /// Joins this key with another operand using `op`.
    pub fn concat(self, op: ConcatOp, rhs: impl Into<Operand>) -> Self {
        Key::Concat {
            op,
            lhs: Box::new(Operand::Key(self)),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn plus(self, rhs: impl Into<Operand>) -> Self {
        self.concat(ConcatOp::Add, rhs)
    }

    pub fn minus(self, rhs: impl Into<Operand>) -> Self {
        self.concat(ConcatOp::Subtract, rhs)
    }
}

impl RenderKey for Key {
    fn key_text(&self) -> String {
        match self {
            Key::Name(name) => name.clone(),
            Key::Special(special) => special.text().to_string(),
            Key::Call { function, key } => function.call(&key.key_text()),
            Key::Concat { op, lhs, rhs } => {
                format!("{} {} {}", lhs.text(), op.symbol(), rhs.text())
            }
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<SpecialKey> for Key {
    fn from(special: SpecialKey) -> Self {
        Key::Special(special)
    }
}

impl<R: Into<Operand>> Add<R> for Key {
    type Output = Key;

    fn add(self, rhs: R) -> Key {
        self.plus(rhs)
    }
}

impl<R: Into<Operand>> Sub<R> for Key {
    type Output = Key;

    fn sub(self, rhs: R) -> Key {
        self.minus(rhs)
    }
}

/// Right-hand side of a comparison or concatenation: either a literal or
/// another key reference.
///
/// Plain strings convert to [`Operand::Value`]; wrap them in [`Key`] to
/// reference a field instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Key(Key),
    Value(Value),
}

impl Operand {
    pub fn text(&self) -> String {
        match self {
            Operand::Key(key) => key.key_text(),
            Operand::Value(value) => value.literal_text(),
        }
    }
}

impl From<Key> for Operand {
    fn from(key: Key) -> Self {
        Operand::Key(key)
    }
}

impl From<SpecialKey> for Operand {
    fn from(special: SpecialKey) -> Self {
        Operand::Key(Key::Special(special))
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::Value(value)
    }
}

macro_rules! literal_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Value(Value::from(value))
                }
            }
        )*
    };
}

literal_operand!(&str, String, bool, i32, i64, u32, u64, usize, f32, f64, DateTime<Utc>);

impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        Operand::Value(Value::from(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(values: Vec<T>) -> Self {
        Operand::Value(Value::from(values))
    }
}
