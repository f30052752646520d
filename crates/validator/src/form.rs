//! Form-level validation: one typed regex rule per field, every violation
//! collected.
//!
//! Rules are built in code or loaded from a JSON document shaped like
//! `{"firstname": {"type": "name"}, "city": {"type": "city_name"}}`.
//!
//! ```
//! use storefront_validator::form::FormRules;
//! use serde_json::json;
//!
//! let rules = FormRules::from_json_str(r#"{
//!     "firstname": {"type": "name"},
//!     "postcode": {"type": "post_code", "message": "Post code %s is malformed"}
//! }"#).unwrap();
//!
//! let errors = rules
//!     .validate_json(&json!({"firstname": "R2D2", "postcode": "#"}))
//!     .unwrap_err();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.errors()[1].message, r##"Post code "#" is malformed"##);
//! ```

use std::io::Read;

use indexmap::IndexMap;

use crate::cleaner::{CharacterCleaner, UnicodeCleaner};
use crate::error::ConfigResult;
use crate::foundation::{Validate, ValidationError, ValidationErrors, ValidationResultMulti};
use crate::foundation::validatable::{AsValidatable, json_type_name};
use crate::typed_regex::{TypedRegex, TypedRegexValidator};

/// Typed regex rules keyed by field name, in declaration order.
#[derive(Debug, Clone)]
pub struct FormRules<C = UnicodeCleaner> {
    fields: IndexMap<String, TypedRegexValidator<C>>,
    cleaner: C,
}

impl FormRules {
    /// Creates an empty rule set using the default cleaner.
    #[must_use]
    pub fn new() -> Self {
        Self::with_cleaner(UnicodeCleaner)
    }

    /// Parses a rules document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let fields: IndexMap<String, TypedRegex> = serde_json::from_str(json)?;
        Ok(Self::new().extend(fields))
    }

    /// Parses a rules document from a reader.
    pub fn from_json_reader(reader: impl Read) -> ConfigResult<Self> {
        let fields: IndexMap<String, TypedRegex> = serde_json::from_reader(reader)?;
        Ok(Self::new().extend(fields))
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharacterCleaner + Clone> FormRules<C> {
    /// Creates an empty rule set that cleans every value with `cleaner`.
    pub fn with_cleaner(cleaner: C) -> Self {
        Self {
            fields: IndexMap::new(),
            cleaner,
        }
    }

    /// Re-targets every rule at a different cleaner.
    pub fn using<D: CharacterCleaner + Clone>(self, cleaner: D) -> FormRules<D> {
        let rules = self
            .fields
            .into_iter()
            .map(|(name, validator)| (name, validator.constraint().clone()));
        FormRules::with_cleaner(cleaner).extend(rules)
    }

    /// Adds or replaces the rule for `name`.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, name: impl Into<String>, rule: impl Into<TypedRegex>) -> Self {
        let validator = TypedRegexValidator::with_cleaner(rule.into(), self.cleaner.clone());
        self.fields.insert(name.into(), validator);
        self
    }

    fn extend(self, rules: impl IntoIterator<Item = (String, TypedRegex)>) -> Self {
        rules
            .into_iter()
            .fold(self, |form, (name, rule)| form.field(name, rule))
    }

    /// The rule registered for `name`.
    pub fn rule(&self, name: &str) -> Option<&TypedRegex> {
        self.fields.get(name).map(TypedRegexValidator::constraint)
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields with a rule.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no field has a rule.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates `(field, value)` pairs.
    ///
    /// Fields without a rule are ignored, and so are ruled fields missing
    /// from the input.
    pub fn validate_fields<'a, I>(&self, values: I) -> ValidationResultMulti<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut errors = ValidationErrors::new();
        for (name, value) in values {
            if let Some((field, validator)) = self.fields.get_key_value(name) {
                if let Err(error) = validator.validate(value) {
                    errors.add(error.with_field(field.clone()));
                }
            }
        }
        self.finish(errors)
    }

    /// Validates the members of a JSON object.
    ///
    /// Scalars are checked by their textual form; `null`, arrays and nested
    /// objects produce a `type_mismatch` for that field.
    pub fn validate_json(&self, form: &serde_json::Value) -> ValidationResultMulti<()> {
        let Some(object) = form.as_object() else {
            let error = ValidationError::type_mismatch("object", json_type_name(form));
            return Err(std::iter::once(error).collect());
        };

        let mut errors = ValidationErrors::new();
        for (field, validator) in &self.fields {
            let Some(value) = object.get(field) else {
                continue;
            };
            let result = value
                .as_validatable()
                .and_then(|text| validator.validate(&text));
            if let Err(error) = result {
                errors.add(error.with_field(field.clone()));
            }
        }
        self.finish(errors)
    }

    fn finish(&self, errors: ValidationErrors) -> ValidationResultMulti<()> {
        if errors.has_errors() {
            tracing::debug!(
                fields = self.fields.len(),
                violations = errors.len(),
                "form failed validation"
            );
        }
        errors.into_result(())
    }
}
