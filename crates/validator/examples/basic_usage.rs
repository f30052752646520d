//! Basic usage example for storefront-validator

use serde_json::json;
use storefront_validator::prelude::*;

fn main() {
    // A single value against a single type
    for value in ["94103", "#"] {
        match validate(value, RegexType::PostCode) {
            Ok(()) => println!("✓ post code \"{value}\" is valid"),
            Err(e) => println!("✗ {}", e.message),
        }
    }

    // A whole form, every violation collected
    let rules = FormRules::new()
        .field("firstname", RegexType::Name)
        .field("city", RegexType::CityName)
        .field("language", RegexType::LanguageCode);

    let form = json!({ "firstname": "J0hn", "city": "London", "language": "lt-LT" });
    match rules.validate_json(&form) {
        Ok(()) => println!("✓ form is valid"),
        Err(errors) => print!("{errors}"),
    }
}
