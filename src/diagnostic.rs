/// Non-fatal conditions hit while encoding literals.
///
/// Rendering never fails; when a value has to be coerced the coercion is
/// reported here and logged through `tracing`.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A float literal was `NaN` or infinite and was rendered as `null`
    NonFiniteFloat(f64),

    /// A map literal could not be serialized and was rendered as `{}`
    UnencodableObject(String),

    /// An unsigned integer did not fit in 64-bit signed range
    IntegerOutOfRange(u64),
}

impl Diagnostic {
    /// Logs the diagnostic at `warn` level.
    pub fn emit(&self) {
        match self {
            Diagnostic::NonFiniteFloat(value) => {
                tracing::warn!(value = %value, "{}", self);
            }
            Diagnostic::UnencodableObject(reason) => {
                tracing::warn!(reason = %reason, "{}", self);
            }
            Diagnostic::IntegerOutOfRange(value) => {
                tracing::warn!(value = %value, "{}", self);
            }
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::NonFiniteFloat(_) => {
                write!(f, "non-finite float literal rendered as null")
            }
            Diagnostic::UnencodableObject(reason) => {
                write!(f, "map literal rendered as {{}}: {}", reason)
            }
            Diagnostic::IntegerOutOfRange(value) => {
                write!(f, "integer {} exceeds the signed 64-bit range", value)
            }
        }
    }
}
