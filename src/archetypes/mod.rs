//! Archetype catalog lookups.
//!
//! The catalog itself lives in the locale resource tables; this module owns
//! the resolution rule: an archetype that has no entry for the active locale
//! is a configuration error, never a runtime fallback.

use crate::errors::ConfigError;
pub use crate::locales::ArchetypeConfig;
use crate::types::{Archetype, Locale};

/// Resolve an archetype to its configuration for a locale.
pub fn resolve(archetype: Archetype, locale: Locale) -> Result<&'static ArchetypeConfig, ConfigError> {
    crate::locales::get(locale)
        .archetypes
        .get(&archetype)
        .ok_or_else(|| ConfigError::UnknownArchetype {
            archetype: archetype.to_string(),
            locale: locale.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_archetype_resolves_in_every_locale() {
        for locale in Locale::ALL {
            for archetype in Archetype::ALL {
                let config = resolve(*archetype, *locale).unwrap();
                assert!(!config.tone_rules.is_empty());
                assert!(config.example_posts.len() >= 2);
            }
        }
    }
}
