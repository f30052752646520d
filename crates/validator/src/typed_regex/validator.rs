//! The typed regex validator.

use std::borrow::Cow;

use crate::cleaner::{CharacterCleaner, UnicodeCleaner};
use crate::foundation::{Validate, ValidationError};

use super::constraint::quote;
use super::{RegexType, TypedRegex};

/// Error code carried by every typed regex violation.
pub const CODE: &str = "typed_regex";

/// Checks a string against the pattern of its [`TypedRegex`] rule.
///
/// The value is passed through the cleaner first, then the whole cleaned
/// value must match the pattern. A violation always quotes the value as the
/// caller passed it, before cleaning.
///
/// ```
/// use storefront_validator::foundation::Validate;
/// use storefront_validator::typed_regex::{RegexType, TypedRegexValidator};
///
/// let city = TypedRegexValidator::of(RegexType::CityName);
/// assert!(city.validate("London").is_ok());
///
/// let error = city.validate("_").unwrap_err();
/// assert_eq!(error.message, r#""_" is invalid."#);
/// assert_eq!(error.param("%s"), Some(r#""_""#));
/// ```
#[derive(Debug, Clone)]
pub struct TypedRegexValidator<C = UnicodeCleaner> {
    constraint: TypedRegex,
    cleaner: C,
}

impl TypedRegexValidator {
    /// Creates a validator with the default [`UnicodeCleaner`].
    #[must_use]
    pub fn new(constraint: TypedRegex) -> Self {
        Self::with_cleaner(constraint, UnicodeCleaner)
    }

    /// Creates a validator for `kind` with the default message and cleaner.
    #[must_use]
    pub fn of(kind: RegexType) -> Self {
        Self::new(TypedRegex::new(kind))
    }
}

impl<C: CharacterCleaner> TypedRegexValidator<C> {
    /// Creates a validator with an explicit cleaner.
    pub fn with_cleaner(constraint: TypedRegex, cleaner: C) -> Self {
        Self {
            constraint,
            cleaner,
        }
    }

    /// The rule this validator enforces.
    pub fn constraint(&self) -> &TypedRegex {
        &self.constraint
    }

    /// Returns true when `input` satisfies the rule.
    pub fn is_match(&self, input: &str) -> bool {
        let kind = self.constraint.kind;
        let cleaned = self.cleaner.clean(input);
        if let Cow::Owned(ref changed) = cleaned
            && changed != input
        {
            tracing::trace!(kind = %kind, original = input, cleaned = %changed, "value cleaned before matching");
        }
        kind.pattern().is_match(&cleaned)
    }

    fn violation(&self, input: &str) -> ValidationError {
        let kind = self.constraint.kind;
        tracing::debug!(kind = %kind, value = input, "typed regex mismatch");

        ValidationError::new(CODE, self.constraint.render_message(input))
            .with_param("%s", quote(input))
    }
}

impl<C: CharacterCleaner> Validate for TypedRegexValidator<C> {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.is_match(input) {
            Ok(())
        } else {
            Err(self.violation(input))
        }
    }
}
