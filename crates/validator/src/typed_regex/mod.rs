//! Typed regex validation.
//!
//! A [`RegexType`] names a fixed character-class pattern (names, addresses,
//! post codes, phone numbers, language codes, ...). A [`TypedRegex`] rule
//! pairs a type with a violation message, and a [`TypedRegexValidator`]
//! enforces the rule after running the value through a
//! [`CharacterCleaner`](crate::cleaner::CharacterCleaner).
//!
//! ```
//! use storefront_validator::typed_regex::{RegexType, validate};
//!
//! assert!(validate("goodname", RegexType::Name).is_ok());
//! assert!(validate("lt-LT", RegexType::LanguageCode).is_ok());
//!
//! let error = validate("<", RegexType::Name).unwrap_err();
//! assert!(error.message.contains(r#""<""#));
//! ```

mod constraint;
mod kind;
mod validator;

pub use constraint::{DEFAULT_MESSAGE, TypedRegex, VALUE_PLACEHOLDER};
pub use kind::RegexType;
pub use validator::{CODE, TypedRegexValidator};

use crate::cleaner::{CharacterCleaner, UnicodeCleaner};
use crate::foundation::{Validate, ValidationResult};

/// Validates `value` against `kind` with the default message and cleaner.
pub fn validate(value: &str, kind: RegexType) -> ValidationResult<()> {
    validate_with(value, kind, UnicodeCleaner)
}

/// Validates `value` against `kind` with the given cleaner.
pub fn validate_with<C: CharacterCleaner>(
    value: &str,
    kind: RegexType,
    cleaner: C,
) -> ValidationResult<()> {
    TypedRegexValidator::with_cleaner(TypedRegex::new(kind), cleaner).validate(value)
}
