//! # storefront-validator
//!
//! Typed regex validation for storefront input: names, addresses, post
//! codes, phone numbers, language codes and the other fields a shop collects
//! from customers and back-office users.
//!
//! ## Quick Start
//!
//! ```
//! use storefront_validator::prelude::*;
//!
//! assert!(validate("94103", RegexType::PostCode).is_ok());
//!
//! let error = validate("#", RegexType::PostCode).unwrap_err();
//! assert_eq!(error.message, r##""#" is invalid."##);
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and the
//!   structured [`ValidationError`](foundation::ValidationError) reported for a
//!   failed value
//! - [`cleaner`]: normalization applied before matching
//! - [`typed_regex`]: the pattern table and the validator
//! - [`form`]: per-field rules with every violation collected

pub mod cleaner;
pub mod error;
pub mod form;
pub mod foundation;
pub mod prelude;
pub mod typed_regex;

pub use error::{ConfigError, ConfigResult};
