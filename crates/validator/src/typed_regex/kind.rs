//! Type identifiers and the pattern table.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Selects which character-class rule a value is checked against.
///
/// The string form (`as_str`, serde, `FromStr`) is the snake_case identifier
/// used in rule configuration, e.g. `"city_name"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegexType {
    /// Person first or last name.
    Name,
    /// Product, category or attribute name.
    CatalogName,
    /// Free-form label (carrier name, shop name, ...).
    GenericName,
    CityName,
    /// Street address line.
    Address,
    PostCode,
    PhoneNumber,
    /// Customer message body.
    Message,
    /// Two or three letter ISO 639 code.
    LanguageIsoCode,
    /// IETF-style `xx` or `xx-YY` locale code.
    LanguageCode,
    StateIsoCode,
    /// Loose national identity number.
    DniLite,
    Upc,
    #[serde(rename = "ean_13")]
    Ean13,
    Isbn,
    /// Product reference (SKU).
    Reference,
    ModuleName,
    WebserviceKey,
    /// Decimal latitude or longitude.
    Coordinate,
}

impl RegexType {
    /// Number of registered types.
    pub const COUNT: usize = 19;

    /// Every type, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Name,
        Self::CatalogName,
        Self::GenericName,
        Self::CityName,
        Self::Address,
        Self::PostCode,
        Self::PhoneNumber,
        Self::Message,
        Self::LanguageIsoCode,
        Self::LanguageCode,
        Self::StateIsoCode,
        Self::DniLite,
        Self::Upc,
        Self::Ean13,
        Self::Isbn,
        Self::Reference,
        Self::ModuleName,
        Self::WebserviceKey,
        Self::Coordinate,
    ];

    /// The configuration identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CatalogName => "catalog_name",
            Self::GenericName => "generic_name",
            Self::CityName => "city_name",
            Self::Address => "address",
            Self::PostCode => "post_code",
            Self::PhoneNumber => "phone_number",
            Self::Message => "message",
            Self::LanguageIsoCode => "language_iso_code",
            Self::LanguageCode => "language_code",
            Self::StateIsoCode => "state_iso_code",
            Self::DniLite => "dni_lite",
            Self::Upc => "upc",
            Self::Ean13 => "ean_13",
            Self::Isbn => "isbn",
            Self::Reference => "reference",
            Self::ModuleName => "module_name",
            Self::WebserviceKey => "webservice_key",
            Self::Coordinate => "coordinate",
        }
    }

    /// The regex source. Every pattern is anchored on both ends.
    pub const fn source(self) -> &'static str {
        match self {
            Self::Name => r#"^[^0-9!<>,;?=+()@#"°{}_$%:¤|]*$"#,
            Self::CatalogName => r"^[^<>;=#{}]*$",
            Self::GenericName => r"^[^<>={}]*$",
            Self::CityName => r#"^[^!<>;?=+@#"°{}_$%]*$"#,
            Self::Address => r"^[^!<>?=+@{}_$%]*$",
            Self::PostCode => r"^[a-zA-Z 0-9-]+$",
            Self::PhoneNumber => r"^[+0-9. ()/-]*$",
            Self::Message => r"^[^<>{}]*$",
            Self::LanguageIsoCode => r"^[a-zA-Z]{2,3}$",
            Self::LanguageCode => r"^[a-zA-Z]{2}(-[a-zA-Z]{2})?$",
            Self::StateIsoCode => r"^[a-zA-Z0-9]{1,4}(-[a-zA-Z0-9]{1,4})?$",
            Self::DniLite => r"^[0-9A-Za-z.-]{1,16}$",
            Self::Upc => r"^[0-9]{0,12}$",
            Self::Ean13 => r"^[0-9]{0,13}$",
            Self::Isbn => r"^[0-9-]{0,32}$",
            Self::Reference => r"^[^<>;={}]*$",
            Self::ModuleName => r"^[a-zA-Z0-9_-]+$",
            Self::WebserviceKey => r"^[A-Z_0-9-]+$",
            Self::Coordinate => r"^-?[0-9]{1,8}\.[0-9]{1,8}$",
        }
    }

    /// The compiled pattern, shared by the whole process.
    pub fn pattern(self) -> &'static Regex {
        &PATTERNS[self as usize]
    }
}

// Indexed by discriminant; `ALL` is in declaration order.
static PATTERNS: LazyLock<[Regex; RegexType::COUNT]> = LazyLock::new(|| {
    RegexType::ALL.map(|kind| {
        Regex::new(kind.source())
            .unwrap_or_else(|e| panic!("built-in `{}` pattern must compile: {e}", kind.as_str()))
    })
});

impl fmt::Display for RegexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegexType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownType(s.to_owned()))
    }
}
