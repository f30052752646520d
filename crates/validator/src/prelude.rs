//! Prelude module for convenient imports.
//!
//! `use storefront_validator::prelude::*;` brings in the traits, errors,
//! cleaners and typed regex types needed for everyday validation.

pub use crate::cleaner::{CharacterCleaner, IdentityCleaner, UnicodeCleaner};
pub use crate::error::{ConfigError, ConfigResult};
pub use crate::form::FormRules;
pub use crate::foundation::{
    AsValidatable, Validate, ValidationError, ValidationErrors, ValidationResult,
    ValidationResultMulti, validate_with_all,
};
pub use crate::typed_regex::{
    RegexType, TypedRegex, TypedRegexValidator, validate, validate_with,
};
