//! Form-level validation through the public API.

use pretty_assertions::assert_eq;
use serde_json::json;
use storefront_validator::prelude::*;

const CUSTOMER_RULES: &str = r#"{
    "firstname": {"type": "name"},
    "lastname": {"type": "name"},
    "company": {"type": "generic_name"},
    "address1": {"type": "address"},
    "city": {"type": "city_name", "message": "The city %s contains forbidden characters."},
    "postcode": {"type": "post_code"},
    "phone": {"type": "phone_number"},
    "language": {"type": "language_code"}
}"#;

#[test]
fn customer_form_collects_violations_as_json() {
    let rules = FormRules::from_json_str(CUSTOMER_RULES).unwrap();
    let form = json!({
        "firstname": "Jane",
        "lastname": "Doe",
        "company": "Acme {Corp}",
        "address1": "10 Downing Street",
        "city": "London!",
        "postcode": "SW1A 2AA",
        "phone": "+44 20 7925 0918",
        "language": "en-GB"
    });

    let errors = rules.validate_json(&form).unwrap_err();

    assert_eq!(
        errors.to_json_value(),
        json!([
            {
                "code": "typed_regex",
                "message": "\"Acme {Corp}\" is invalid.",
                "field": "company",
                "params": { "%s": "\"Acme {Corp}\"" }
            },
            {
                "code": "typed_regex",
                "message": "The city \"London!\" contains forbidden characters.",
                "field": "city",
                "params": { "%s": "\"London!\"" }
            }
        ])
    );
}

#[test]
fn rules_built_in_code_match_loaded_rules() {
    let loaded = FormRules::from_json_str(CUSTOMER_RULES).unwrap();
    let built = FormRules::new()
        .field("firstname", RegexType::Name)
        .field("lastname", RegexType::Name)
        .field("company", RegexType::GenericName)
        .field("address1", RegexType::Address)
        .field(
            "city",
            TypedRegex::new(RegexType::CityName)
                .with_message("The city %s contains forbidden characters."),
        )
        .field("postcode", RegexType::PostCode)
        .field("phone", RegexType::PhoneNumber)
        .field("language", RegexType::LanguageCode);

    assert_eq!(
        loaded.field_names().collect::<Vec<_>>(),
        built.field_names().collect::<Vec<_>>()
    );
    for name in built.field_names() {
        assert_eq!(loaded.rule(name), built.rule(name));
    }
}

#[test]
fn validators_share_across_threads() {
    let rules = std::sync::Arc::new(FormRules::from_json_str(CUSTOMER_RULES).unwrap());

    let handles: Vec<_> = ["London", "Paris", "Vilnius_"]
        .into_iter()
        .map(|city| {
            let rules = std::sync::Arc::clone(&rules);
            std::thread::spawn(move || rules.validate_fields([("city", city)]).is_ok())
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, true, false]);
}

#[test]
fn config_error_messages() {
    let err = "postal".parse::<RegexType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown typed regex type `postal`");

    let err = FormRules::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid rules document: "));
}
