//! AsValidatable trait with GAT for input conversion
//!
//! Lets a string validator accept `&str`, `String`, `Cow<str>` and JSON
//! values without the caller converting first.

use std::borrow::{Borrow, Cow};

use crate::foundation::ValidationError;

/// Trait for types that can be converted for validation.
///
/// Uses a GAT so the conversion can either borrow or produce an owned value,
/// unified through `Borrow`.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, ValidationError>;
}

impl AsValidatable<str> for str {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self)
    }
}

impl AsValidatable<str> for String {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_str())
    }
}

impl AsValidatable<str> for Cow<'_, str> {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, ValidationError> {
        Ok(self.as_ref())
    }
}

// ============================================================================
// SERDE JSON VALUE CONVERSIONS
// ============================================================================

/// Returns a human-readable type name for a JSON value.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Scalars are validated by their textual form, so `94103` and `"94103"`
/// are the same post code.
impl AsValidatable<str> for serde_json::Value {
    type Output<'a>
        = Cow<'a, str>
    where
        Self: 'a;

    fn as_validatable(&self) -> Result<Cow<'_, str>, ValidationError> {
        match self {
            serde_json::Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            serde_json::Value::Number(n) => Ok(Cow::Owned(n.to_string())),
            serde_json::Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
            other => Err(ValidationError::type_mismatch(
                "string",
                json_type_name(other),
            )),
        }
    }
}
