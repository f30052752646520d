//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`AsValidatable`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! A validator never panics on bad input. It returns a structured
//! [`ValidationError`], and callers that check several values at once collect
//! them into [`ValidationErrors`].

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;
pub use validatable::AsValidatable;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators, collecting every failure.
///
/// # Examples
///
/// ```
/// use storefront_validator::foundation::{Validate, validate_with_all};
/// use storefront_validator::typed_regex::{RegexType, TypedRegexValidator};
///
/// let name = TypedRegexValidator::of(RegexType::Name);
/// let city = TypedRegexValidator::of(RegexType::CityName);
/// let validators: &[&dyn Validate<Input = str>] = &[&name, &city];
///
/// let errors = validate_with_all("R2-D2", validators).unwrap_err();
/// assert_eq!(errors.len(), 1); // digits fail `name` only
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation result that can contain multiple errors.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;
