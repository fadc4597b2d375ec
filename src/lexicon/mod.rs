//! Forbidden-pattern lexicon access.
//!
//! The tables are static, locale-scoped and matched case-insensitively by
//! the validator and rendered verbatim into the prompt by the composer.

pub use crate::locales::Lexicon;
use crate::types::Locale;

/// Get the lexicon for a locale.
pub fn get(locale: Locale) -> &'static Lexicon {
    &crate::locales::get(locale).lexicon
}
