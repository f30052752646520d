//! Character cleaning applied before pattern matching.
//!
//! A [`CharacterCleaner`] turns raw user input into the form the pattern
//! table expects. Cleaners must be pure and idempotent:
//! `clean(clean(x)) == clean(x)`.
//!
//! Any `Fn(&str) -> String` closure is a cleaner, so a test can swap in its
//! own transform without a mock.

use std::borrow::Cow;

use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

/// Normalizes a value before it is matched against a pattern.
pub trait CharacterCleaner: Send + Sync {
    /// Returns the cleaned value, borrowing when nothing had to change.
    fn clean<'a>(&self, input: &'a str) -> Cow<'a, str>;
}

impl<F> CharacterCleaner for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn clean<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(input))
    }
}

// ============================================================================
// IDENTITY
// ============================================================================

/// Leaves the input untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityCleaner;

impl CharacterCleaner for IdentityCleaner {
    #[inline]
    fn clean<'a>(&self, input: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(input)
    }
}

// ============================================================================
// UNICODE
// ============================================================================

/// Strips invisible formatting characters, then composes to NFC.
///
/// Invisible characters go first: removing one can bring a base letter and
/// a combining mark next to each other, and only a later composition pass
/// folds them together. Done the other way round, a second call could still
/// change the output.
///
/// ```
/// use storefront_validator::cleaner::{CharacterCleaner, UnicodeCleaner};
///
/// let cleaner = UnicodeCleaner;
/// assert_eq!(cleaner.clean("Lon\u{200B}don"), "London");
/// assert_eq!(cleaner.clean("Cafe\u{0301}"), "Caf\u{00E9}");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeCleaner;

impl CharacterCleaner for UnicodeCleaner {
    fn clean<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let stripped: Cow<'a, str> = if input.chars().any(is_invisible) {
            Cow::Owned(input.chars().filter(|c| !is_invisible(*c)).collect())
        } else {
            Cow::Borrowed(input)
        };

        if is_nfc_quick(stripped.chars()) == IsNormalized::Yes {
            return stripped;
        }

        let composed: String = stripped.nfc().collect();
        if composed == stripped {
            stripped
        } else {
            Cow::Owned(composed)
        }
    }
}

/// Zero-width, bidi-control and tag characters that render as nothing.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'                  // soft hyphen
        | '\u{200B}'..='\u{200D}'   // zero-width space, non-joiner, joiner
        | '\u{2060}'                // word joiner
        | '\u{FEFF}'                // byte order mark
        | '\u{202A}'..='\u{202E}'   // bidi embeddings and overrides
        | '\u{2066}'..='\u{2069}'   // bidi isolates
        | '\u{E0001}'..='\u{E007F}' // tags
    )
}
