//! Rendering capabilities.
//!
//! A node implements only the capabilities that make sense for it: a
//! comparison renders as filter text, a renamed field only as projection
//! text, a key reference as a path. [`Custom`] renders in both filter and
//! projection position.

use crate::output::to_literal;
use crate::value::Value;

/// Renders as a fragment of the bracketed filter, `*[<here>]`.
pub trait RenderFilter {
    fn filter_text(&self) -> String;
}

/// Renders as one entry of the projection block, `{ <here>, ... }`.
pub trait RenderField {
    fn field_text(&self) -> String;
}

/// Renders as a left-hand-side path expression.
pub trait RenderKey {
    fn key_text(&self) -> String;
}

/// Renders as a literal.
pub trait RenderLiteral {
    fn literal_text(&self) -> String;
}

impl RenderLiteral for Value {
    fn literal_text(&self) -> String {
        to_literal(self)
    }
}

/// Caller-supplied query text inserted verbatim.
///
/// Nothing is validated; the text lands in the output exactly as given.
///
/// # Example
/// ```text
/// @["1"]
/// "popularity": select(popularity > 20 => "high", popularity <= 20 => "low")
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Custom(pub String);

impl Custom {
    pub fn new(text: impl Into<String>) -> Self {
        Custom(text.into())
    }
}

impl RenderFilter for Custom {
    fn filter_text(&self) -> String {
        self.0.clone()
    }
}

impl RenderField for Custom {
    fn field_text(&self) -> String {
        self.0.clone()
    }
}
