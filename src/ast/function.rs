/// Built-in query functions that wrap a single key or field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// `dateTime(x)`, parses an ISO 8601 string into a datetime
    DateTime,
    /// `defined(x)`, true when the argument is non-null
    Defined,
    /// `identity()`, the id of the user performing the query
    Identity,
    /// `length(x)`, length of a string or array
    Length,
    /// `lower(x)`, lowercased string
    Lower,
    /// `upper(x)`, uppercased string
    Upper,
    /// `string(x)`, string form of a scalar
    String,
}

impl Function {
    /// Name as it appears in query text.
    pub fn name(self) -> &'static str {
        match self {
            Function::DateTime => "dateTime",
            Function::Defined => "defined",
            Function::Identity => "identity",
            Function::Length => "length",
            Function::Lower => "lower",
            Function::Upper => "upper",
            Function::String => "string",
        }
    }

    /// Renders `name(argument)`.
    pub fn call(self, argument: &str) -> String {
        format!("{}({})", self.name(), argument)
    }
}

/// Arithmetic-style concatenation operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl ConcatOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ConcatOp::Add => "+",
            ConcatOp::Subtract => "-",
        }
    }
}
