//! Valid and invalid fixtures for every type identifier.
//!
//! The cleaner is swapped for the identity transform so the fixtures exercise
//! the patterns alone.

use std::borrow::Cow;

use pretty_assertions::assert_eq;
use rstest::rstest;
use storefront_validator::prelude::*;
use storefront_validator::typed_regex::{CODE, DEFAULT_MESSAGE};

fn check(value: &str, kind: RegexType) -> ValidationResult<()> {
    validate_with(value, kind, IdentityCleaner)
}

fn assert_violation(value: &str, kind: RegexType) {
    let quoted = format!("\"{value}\"");
    let error = match check(value, kind) {
        Ok(()) => panic!("{kind} accepted {value:?}"),
        Err(error) => error,
    };

    assert_eq!(error.code, CODE);
    assert_eq!(error.params, [(Cow::from("%s"), Cow::from(quoted.clone()))]);
    assert_eq!(error.message, DEFAULT_MESSAGE.replace("%s", &quoted));
}

/// Puts `invalid` in the middle of a value the type accepts.
fn assert_embedded_violation(valid: &str, invalid: &str, kind: RegexType) {
    assert!(check(valid, kind).is_ok(), "{kind} fixture {valid:?} must be valid");
    let (head, tail) = valid.split_at(valid.len() / 2);
    assert_violation(&format!("{head}{invalid}{tail}"), kind);
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn scenario_name() {
    assert!(check("goodname", RegexType::Name).is_ok());
    assert_violation("<", RegexType::Name);
}

#[test]
fn scenario_city_name() {
    assert!(check("London", RegexType::CityName).is_ok());
    assert_violation("_", RegexType::CityName);
}

#[test]
fn scenario_post_code() {
    assert!(check("94103", RegexType::PostCode).is_ok());
    assert_violation("#", RegexType::PostCode);
}

#[test]
fn scenario_language_code() {
    assert!(check("lt-LT", RegexType::LanguageCode).is_ok());
    assert_violation("1", RegexType::LanguageCode);
}

// ============================================================================
// VALID VALUES
// ============================================================================

#[rstest]
#[case(RegexType::Name, "goodname")]
#[case(RegexType::CatalogName, "catalog name")]
#[case(RegexType::GenericName, "good generic name /")]
#[case(RegexType::CityName, "London")]
#[case(RegexType::Address, "3197 Hillview Drive")]
#[case(RegexType::PostCode, "94103")]
#[case(RegexType::PhoneNumber, "707-216-7924")]
#[case(RegexType::Message, "some random message #)F@$. ")]
#[case(RegexType::LanguageIsoCode, "US")]
#[case(RegexType::LanguageCode, "lt-LT")]
fn accepts_valid_value(#[case] kind: RegexType, #[case] value: &str) {
    assert_eq!(check(value, kind), Ok(()));
}

// ============================================================================
// INVALID CHARACTERS
// ============================================================================

#[rstest]
fn name_rejects(
    #[values(
        "0", "2", "<", ">", "?", "#", "%", ",", ";", "+", "°", ":", "!", "=", "\"", "$", "}", "{",
        "@", "|", "¤", "(", ")", "_"
    )]
    invalid: &str,
) {
    assert_violation(invalid, RegexType::Name);
    assert_embedded_violation("goodname", invalid, RegexType::Name);
}

#[rstest]
fn catalog_name_rejects(#[values("<", ">", ";", "=", "#", "{", "}")] invalid: &str) {
    assert_violation(invalid, RegexType::CatalogName);
    assert_embedded_violation("catalog name", invalid, RegexType::CatalogName);
}

#[rstest]
fn generic_name_rejects(#[values("<", ">", "=", "{", "}")] invalid: &str) {
    assert_violation(invalid, RegexType::GenericName);
    assert_embedded_violation("good generic name /", invalid, RegexType::GenericName);
}

#[rstest]
fn city_name_rejects(
    #[values(
        "!", ">", "<", ";", "?", "=", "+", "@", "#", "\"", "°", "{", "}", "_", "$", "%"
    )]
    invalid: &str,
) {
    assert_violation(invalid, RegexType::CityName);
    assert_embedded_violation("London", invalid, RegexType::CityName);
}

#[rstest]
fn address_rejects(
    #[values("!", ">", "<", "?", "=", "+", "@", "{", "}", "_", "$", "%")] invalid: &str,
) {
    assert_violation(invalid, RegexType::Address);
    assert_embedded_violation("3197 Hillview Drive", invalid, RegexType::Address);
}

#[rstest]
fn post_code_rejects(
    #[values(
        "<", ">", "?", "#", "%", ",", ";", "+", "°", ":", "!", "=", "\"", "$", "}", "{", "@", "|",
        "ß", "é"
    )]
    invalid: &str,
) {
    assert_violation(invalid, RegexType::PostCode);
    assert_embedded_violation("94103", invalid, RegexType::PostCode);
}

#[rstest]
fn phone_number_rejects(
    #[values(
        "<", ">", "?", "#", "%", ",", ";", "°", ":", "!", "=", "\"", "$", "}", "{", "@", "|", "¤",
        "é", "r"
    )]
    invalid: &str,
) {
    assert_violation(invalid, RegexType::PhoneNumber);
    assert_embedded_violation("707-216-7924", invalid, RegexType::PhoneNumber);
}

#[rstest]
fn message_rejects(#[values("<", ">", "{", "}")] invalid: &str) {
    assert_violation(invalid, RegexType::Message);
    assert_embedded_violation("some random message #)F@$. ", invalid, RegexType::Message);
}

#[rstest]
fn language_iso_code_rejects(#[values("a", "é", "abcd", "2", "26", "ABCE")] invalid: &str) {
    assert_violation(invalid, RegexType::LanguageIsoCode);
}

#[rstest]
fn language_code_rejects(#[values("az-acc", "1", "12-22", "éi-as")] invalid: &str) {
    assert_violation(invalid, RegexType::LanguageCode);
}

// ============================================================================
// DEFAULT CLEANER
// ============================================================================

#[test]
fn default_cleaner_keeps_invalid_characters() {
    for kind in RegexType::ALL {
        let error = validate("<{>}", kind).unwrap_err();
        assert_eq!(error.param("%s"), Some("\"<{>}\""), "{kind}");
    }
}

#[test]
fn default_cleaner_ignores_invisible_characters() {
    assert!(validate("94\u{200B}103", RegexType::PostCode).is_ok());
    assert!(validate("\u{FEFF}lt-LT", RegexType::LanguageCode).is_ok());
}
