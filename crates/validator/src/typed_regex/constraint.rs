//! The declarative rule attached to a field.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::RegexType;

/// Message used when a rule does not configure its own.
pub const DEFAULT_MESSAGE: &str = "%s is invalid.";

/// Placeholder substituted with the quoted offending value.
pub const VALUE_PLACEHOLDER: &str = "%s";

/// A typed regex rule: which pattern applies and how to word a violation.
///
/// Deserializes from `{"type": "city_name"}` with an optional `"message"`.
///
/// ```
/// use storefront_validator::typed_regex::{RegexType, TypedRegex};
///
/// let rule: TypedRegex = serde_json::from_str(r#"{"type": "post_code"}"#).unwrap();
/// assert_eq!(rule, TypedRegex::new(RegexType::PostCode));
/// assert_eq!(rule.render_message("#"), r##""#" is invalid."##);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedRegex {
    #[serde(rename = "type")]
    pub kind: RegexType,
    #[serde(default = "default_message")]
    pub message: Cow<'static, str>,
}

fn default_message() -> Cow<'static, str> {
    Cow::Borrowed(DEFAULT_MESSAGE)
}

impl TypedRegex {
    /// Creates a rule with the default message.
    #[must_use]
    pub const fn new(kind: RegexType) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(DEFAULT_MESSAGE),
        }
    }

    /// Replaces the message template. `%s` marks where the value goes.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Renders the message for an offending value.
    pub fn render_message(&self, value: &str) -> String {
        self.message.replace(VALUE_PLACEHOLDER, &quote(value))
    }
}

impl From<RegexType> for TypedRegex {
    fn from(kind: RegexType) -> Self {
        Self::new(kind)
    }
}

/// Wraps a value in double quotes, the form used in violation messages.
pub(crate) fn quote(value: &str) -> String {
    format!("\"{value}\"")
}
