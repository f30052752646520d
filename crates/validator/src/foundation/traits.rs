//! Core traits for the validation system

use std::borrow::Borrow;

use crate::foundation::validatable::AsValidatable;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Validators are generic over their input type and report a failure as a
/// [`ValidationError`](crate::foundation::ValidationError) value.
///
/// # Examples
///
/// ```
/// use storefront_validator::foundation::{Validate, ValidationError};
///
/// struct NoAngleBrackets;
///
/// impl Validate for NoAngleBrackets {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(['<', '>']) {
///             Err(ValidationError::new("angle_brackets", "No angle brackets allowed"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoAngleBrackets.validate("plain").is_ok());
/// assert!(NoAngleBrackets.validate("<b>").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError>;

    /// Validates any type that can be converted to `Self::Input`.
    ///
    /// ```
    /// use storefront_validator::foundation::Validate;
    /// use storefront_validator::typed_regex::{RegexType, TypedRegexValidator};
    /// use serde_json::json;
    ///
    /// let post_code = TypedRegexValidator::of(RegexType::PostCode);
    /// assert!(post_code.validate_any(&String::from("94103")).is_ok());
    /// assert!(post_code.validate_any(&json!(94103)).is_ok());
    /// assert!(post_code.validate_any(&json!(["94103"])).is_err());
    /// ```
    fn validate_any<S>(&self, value: &S) -> Result<(), crate::foundation::ValidationError>
    where
        Self: Sized,
        S: AsValidatable<Self::Input> + ?Sized,
        for<'a> <S as AsValidatable<Self::Input>>::Output<'a>: Borrow<Self::Input>,
    {
        let output = value.as_validatable()?;
        self.validate(output.borrow())
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), crate::foundation::ValidationError> {
        (**self).validate(input)
    }
}
