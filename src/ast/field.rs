use std::ops::{Add, Sub};
use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{ConcatOp, Function, Key, SpecialKey};
use crate::render::{Custom, RenderField, RenderKey, RenderLiteral};
use crate::value::Value;

static DISALLOWED_NAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[()_"]"#).expect("static pattern"));

/// Strips `(`, `)`, `_` and `"` from rendered text to form an implicit field
/// name.
///
/// ```
/// use groq_builder::ast::key_safe_name;
///
/// assert_eq!(key_safe_name("_now()"), "now");
/// ```
pub fn key_safe_name(text: &str) -> String {
    DISALLOWED_NAME_CHARS.replace_all(text, "").into_owned()
}

/// One entry of a projection block.
///
/// # Examples
///
/// ```
/// use groq_builder::{Field, RenderField, SpecialKey};
///
/// assert_eq!(Field::renamed("renamedId", SpecialKey::Id).field_text(), r#""renamedId": _id"#);
/// assert_eq!(Field::count("actorCount", "actors").field_text(), r#""actorCount": count(actors)"#);
/// assert_eq!(Field::date_time("now()").field_text(), r#""now": dateTime(now())"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// Field reference, rendered as its key text
    Key(Key),

    /// Literal value
    Literal(Value),

    /// `"<name>": <field>`, or the bare field when no name is given
    Renamed {
        name: Option<String>,
        field: Box<Field>,
    },

    /// `"<name>": count(<field>)`
    Count { name: String, field: Box<Field> },

    /// `"<name>": coalesce(<field>, <fallback fields>..., <fallback>)`
    Coalesce {
        name: String,
        field: Box<Field>,
        fallbacks: Vec<Field>,
        fallback: Value,
    },

    /// `...`, every attribute of the document
    All,

    /// `"<name>": <function>(<argument>)`
    ///
    /// # Example
    /// ```text
    /// "title": lower(title)
    /// "me": identity()
    /// ```
    Function {
        name: String,
        function: Function,
        argument: Option<Box<Field>>,
    },

    /// Two fields joined by `+` or `-`
    ///
    /// The left operand keeps its `"<name>": ` prefix, the right operand is
    /// rendered bare.
    ///
    /// # Example
    /// ```text
    /// "now": dateTime(now()) - dateTime(_createdAt)
    /// ```
    Concat {
        op: ConcatOp,
        lhs: Box<Field>,
        rhs: Box<Field>,
    },

    /// Verbatim text
    Custom(Custom),
}

impl Field {
    pub fn all() -> Self {
        Field::All
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Field::Custom(Custom::new(text))
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Field::Literal(value.into())
    }

    pub fn renamed(name: impl Into<String>, field: impl Into<Field>) -> Self {
        Field::Renamed {
            name: Some(name.into()),
            field: Box::new(field.into()),
        }
    }

    /// Wraps a field without renaming it; renders the inner field unchanged.
    pub fn plain(field: impl Into<Field>) -> Self {
        Field::Renamed {
            name: None,
            field: Box::new(field.into()),
        }
    }

    pub fn count(name: impl Into<String>, field: impl Into<Field>) -> Self {
        Field::Count {
            name: name.into(),
            field: Box::new(field.into()),
        }
    }

    pub fn coalesce(
        name: impl Into<String>,
        field: impl Into<Field>,
        fallback: impl Into<Value>,
    ) -> Self {
        Field::coalesce_chain(name, field, Vec::<Field>::new(), fallback)
    }

    /// Coalesce with intermediate fallback fields tried before the literal.
    pub fn coalesce_chain<I, F>(
        name: impl Into<String>,
        field: impl Into<Field>,
        fallbacks: I,
        fallback: impl Into<Value>,
    ) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Field::Coalesce {
            name: name.into(),
            field: Box::new(field.into()),
            fallbacks: fallbacks.into_iter().map(Into::into).collect(),
            fallback: fallback.into(),
        }
    }

    /// Function field named after its argument's text.
    pub fn function(function: Function, argument: impl Into<Field>) -> Self {
        let argument = argument.into();
        let name = key_safe_name(&argument.field_text());
        Field::Function {
            name,
            function,
            argument: Some(Box::new(argument)),
        }
    }

    pub fn function_named(
        name: impl Into<String>,
        function: Function,
        argument: impl Into<Field>,
    ) -> Self {
        Field::Function {
            name: name.into(),
            function,
            argument: Some(Box::new(argument.into())),
        }
    }

    /// `"<name>": identity()`
    pub fn identity(name: impl Into<String>) -> Self {
        Field::Function {
            name: name.into(),
            function: Function::Identity,
            argument: None,
        }
    }

    pub fn concat(self, op: ConcatOp, rhs: impl Into<Field>) -> Self {
        Field::Concat {
            op,
            lhs: Box::new(self),
            rhs: Box::new(rhs.into()),
        }
    }

    pub fn plus(self, rhs: impl Into<Field>) -> Self {
        self.concat(ConcatOp::Add, rhs)
    }

    pub fn minus(self, rhs: impl Into<Field>) -> Self {
        self.concat(ConcatOp::Subtract, rhs)
    }

    /// Text used when this field is the left operand of a concatenation.
    pub fn lhs_text(&self) -> String {
        self.field_text()
    }

    /// Text used when this field is the right operand of a concatenation.
    pub fn rhs_text(&self) -> String {
        match self {
            Field::Function {
                function, argument, ..
            } => call_text(*function, argument.as_deref()),
            other => other.field_text(),
        }
    }
}

macro_rules! function_fields {
    ($($(#[$doc:meta])* $function:ident => $implicit:ident, $named:ident;)*) => {
        impl Field {
            $(
                $(#[$doc])*
                pub fn $implicit(argument: impl Into<Field>) -> Self {
                    Field::function(Function::$function, argument)
                }

                $(#[$doc])*
                pub fn $named(name: impl Into<String>, argument: impl Into<Field>) -> Self {
                    Field::function_named(name, Function::$function, argument)
                }
            )*
        }
    };
}

function_fields! {
    /// `dateTime(<field>)`
    DateTime => date_time, date_time_named;
    /// `defined(<field>)`
    Defined => defined, defined_named;
    /// `length(<field>)`
    Length => length, length_named;
    /// `lower(<field>)`
    Lower => lower, lower_named;
    /// `upper(<field>)`
    Upper => upper, upper_named;
    /// `string(<field>)`
    String => string, string_named;
}

fn call_text(function: Function, argument: Option<&Field>) -> String {
    function.call(&argument.map(RenderField::field_text).unwrap_or_default())
}

fn named(name: &str, expression: &str) -> String {
    format!("\"{}\": {}", name, expression)
}

impl RenderField for Field {
    fn field_text(&self) -> String {
        match self {
            Field::Key(key) => key.key_text(),
            Field::Literal(value) => value.literal_text(),
            Field::Renamed {
                name: Some(name),
                field,
            } => named(name, &field.field_text()),
            Field::Renamed { name: None, field } => field.field_text(),
            Field::Count { name, field } => {
                named(name, &format!("count({})", field.field_text()))
            }
            Field::Coalesce {
                name,
                field,
                fallbacks,
                fallback,
            } => {
                let mut arguments = vec![field.field_text()];
                arguments.extend(fallbacks.iter().map(RenderField::field_text));
                arguments.push(fallback.literal_text());
                named(name, &format!("coalesce({})", arguments.join(", ")))
            }
            Field::All => "...".to_string(),
            Field::Function {
                name,
                function,
                argument,
            } => named(name, &call_text(*function, argument.as_deref())),
            Field::Concat { op, lhs, rhs } => {
                format!("{} {} {}", lhs.lhs_text(), op.symbol(), rhs.rhs_text())
            }
            Field::Custom(custom) => custom.field_text(),
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::Key(Key::from(name))
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::Key(Key::from(name))
    }
}

impl From<SpecialKey> for Field {
    fn from(special: SpecialKey) -> Self {
        Field::Key(Key::Special(special))
    }
}

impl From<Key> for Field {
    fn from(key: Key) -> Self {
        Field::Key(key)
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Field::Literal(value)
    }
}

impl From<Custom> for Field {
    fn from(custom: Custom) -> Self {
        Field::Custom(custom)
    }
}

impl<R: Into<Field>> Add<R> for Field {
    type Output = Field;

    fn add(self, rhs: R) -> Field {
        self.plus(rhs)
    }
}

impl<R: Into<Field>> Sub<R> for Field {
    type Output = Field;

    fn sub(self, rhs: R) -> Field {
        self.minus(rhs)
    }
}
