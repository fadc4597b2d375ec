//! Locale-scoped resource tables.
//!
//! All locale-dependent text lives in embedded JSON files (`nb.json`,
//! `en.json`), one keyed structure per locale rather than parallel
//! hand-duplicated constants. The assembly order and set of sections is
//! identical across locales; only the text differs. [`verify_coverage`]
//! cross-checks every locale against the default so the tables cannot
//! silently drift apart.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::errors::ConfigError;
use crate::types::{Archetype, Locale, Platform, PostFormat, ToolType};

/// Embedded Norwegian Bokmål resources (default locale).
const EMBEDDED_NB_JSON: &str = include_str!("nb.json");

/// Embedded English resources.
const EMBEDDED_EN_JSON: &str = include_str!("en.json");

// ---------------------------------------------------------------------------
// Resource shapes
// ---------------------------------------------------------------------------

/// One archetype's tone configuration for a single locale.
///
/// Static and versioned with the crate; never mutated at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypeConfig {
    pub label: String,
    pub emoji: String,
    pub description: String,
    pub tone_rules: Vec<String>,
    pub example_pattern: String,
    pub example_posts: Vec<String>,
}

/// Structural rule for one post format.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatRule {
    pub label: String,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
    pub structure: String,
}

/// Universal writing rules plus the headers used when rendering the
/// forbidden-pattern lists into the prompt.
#[derive(Debug, Clone, Deserialize)]
pub struct WritingRules {
    pub header: String,
    pub rules: Vec<String>,
    pub never_open_with: String,
    pub never_use_phrases: String,
    pub never_close_with: String,
}

/// Case-insensitive forbidden-pattern tables for one locale.
#[derive(Debug, Clone, Deserialize)]
pub struct Lexicon {
    pub forbidden_openings: Vec<String>,
    pub forbidden_phrases: Vec<String>,
    pub forbidden_closings: Vec<String>,
    pub idiom_tells: Vec<String>,
}

/// Persona fields used when the orchestrator has to synthesize a system
/// prompt because the caller supplied none.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultPersona {
    pub name: String,
    pub core_belief: String,
    pub voice_signature: String,
}

/// Everything one locale contributes to prompt composition and validation.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleResources {
    pub persona_framing: String,
    pub goal_line: String,
    pub brand_context_line: String,
    pub tone_header: String,
    pub writing: WritingRules,
    pub format_header: String,
    pub format_rules: HashMap<PostFormat, FormatRule>,
    pub platform_header: String,
    pub platform_rules: HashMap<Platform, String>,
    pub viral_architecture: String,
    pub examples_header: String,
    pub archetypes: HashMap<Archetype, ArchetypeConfig>,
    pub humanizer_rules: String,
    pub tool_rules: HashMap<ToolType, String>,
    pub retry_instruction: String,
    pub default_persona: DefaultPersona,
    pub default_goal: String,
    pub lexicon: Lexicon,
}

// ---------------------------------------------------------------------------
// Global store
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct LocaleStore {
    nb: LocaleResources,
    en: LocaleResources,
}

static STORE: OnceLock<LocaleStore> = OnceLock::new();

fn store() -> &'static LocaleStore {
    STORE.get_or_init(|| LocaleStore {
        nb: serde_json::from_str(EMBEDDED_NB_JSON)
            .expect("error decoding embedded nb.json locale resources"),
        en: serde_json::from_str(EMBEDDED_EN_JSON)
            .expect("error decoding embedded en.json locale resources"),
    })
}

/// Get the resource table for a locale.
pub fn get(locale: Locale) -> &'static LocaleResources {
    match locale {
        Locale::Nb => &store().nb,
        Locale::En => &store().en,
    }
}

// ---------------------------------------------------------------------------
// Coverage check
// ---------------------------------------------------------------------------

/// Fail-fast startup check: every locale must cover every key the default
/// locale covers, and the default must cover every enum variant.
pub fn verify_coverage() -> Result<(), ConfigError> {
    let default = get(Locale::default());

    for archetype in Archetype::ALL {
        if !default.archetypes.contains_key(archetype) {
            return Err(missing(Locale::default(), format!("archetypes.{archetype}")));
        }
    }
    for format in PostFormat::ALL {
        if !default.format_rules.contains_key(format) {
            return Err(missing(Locale::default(), format!("format_rules.{format}")));
        }
    }
    for platform in Platform::ALL {
        if !default.platform_rules.contains_key(platform) {
            return Err(missing(
                Locale::default(),
                format!("platform_rules.{platform}"),
            ));
        }
    }
    for tool in ToolType::ALL {
        if !default.tool_rules.contains_key(tool) {
            return Err(missing(Locale::default(), format!("tool_rules.{tool}")));
        }
    }

    for locale in Locale::ALL {
        if *locale == Locale::default() {
            continue;
        }
        let resources = get(*locale);
        for key in default.archetypes.keys() {
            if !resources.archetypes.contains_key(key) {
                return Err(missing(*locale, format!("archetypes.{key}")));
            }
        }
        for key in default.format_rules.keys() {
            if !resources.format_rules.contains_key(key) {
                return Err(missing(*locale, format!("format_rules.{key}")));
            }
        }
        for key in default.platform_rules.keys() {
            if !resources.platform_rules.contains_key(key) {
                return Err(missing(*locale, format!("platform_rules.{key}")));
            }
        }
        for key in default.tool_rules.keys() {
            if !resources.tool_rules.contains_key(key) {
                return Err(missing(*locale, format!("tool_rules.{key}")));
            }
        }
        if resources.lexicon.forbidden_openings.is_empty()
            || resources.lexicon.forbidden_phrases.is_empty()
            || resources.lexicon.forbidden_closings.is_empty()
            || resources.lexicon.idiom_tells.is_empty()
        {
            return Err(missing(*locale, "lexicon".to_string()));
        }
        if !resources.retry_instruction.contains("{issues}") {
            return Err(missing(*locale, "retry_instruction.{issues}".to_string()));
        }
    }

    Ok(())
}

fn missing(locale: Locale, key: String) -> ConfigError {
    ConfigError::MissingResource {
        locale: locale.to_string(),
        key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_resources_parse() {
        let nb = get(Locale::Nb);
        assert_eq!(nb.archetypes.len(), 4);
        let en = get(Locale::En);
        assert_eq!(en.archetypes.len(), 4);
    }

    #[test]
    fn test_coverage_check_passes_for_shipped_resources() {
        verify_coverage().unwrap();
    }

    #[test]
    fn test_retry_instruction_has_issues_placeholder() {
        for locale in Locale::ALL {
            assert!(get(*locale).retry_instruction.contains("{issues}"));
        }
    }

    #[test]
    fn test_default_locale_is_norwegian() {
        let lexicon = &get(Locale::default()).lexicon;
        assert!(lexicon
            .forbidden_openings
            .iter()
            .any(|o| o == "selvfølgelig"));
    }
}
