//! Layered system-prompt composition.
//!
//! The composer assembles one system instruction from fixed sections in a
//! fixed order: persona framing, archetype tone rules, universal writing
//! rules (with the full forbidden-pattern list), format rules, platform
//! rules, the viral-architecture directive, and worked examples. Every
//! section is a locale-specific text substitution; the order and the set of
//! sections never vary per locale. Composition is deterministic and does no
//! I/O.

use crate::archetypes;
use crate::errors::ConfigError;
use crate::locales;
use crate::types::{Locale, PersonaKernel, Platform, PostFormat, ToolType};

/// Builds system prompts for one locale.
#[derive(Debug, Clone, Copy)]
pub struct PromptComposer {
    pub locale: Locale,
}

impl Default for PromptComposer {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
        }
    }
}

impl PromptComposer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Assemble the full system prompt for a persona.
    ///
    /// # Errors
    /// Fails if the persona's archetype has no catalog entry for this
    /// locale, or a format/platform rule is missing from the resources.
    pub fn build_system_prompt(
        &self,
        persona: &PersonaKernel,
        platform: Platform,
        format: PostFormat,
        goal: &str,
        brand_context: Option<&str>,
    ) -> Result<String, ConfigError> {
        let resources = locales::get(self.locale);
        let archetype = archetypes::resolve(persona.archetype, self.locale)?;

        let mut sections: Vec<String> = Vec::with_capacity(8);

        // (a) Persona framing
        let mut framing = resources
            .persona_framing
            .replace("{name}", &persona.name)
            .replace("{emoji}", &archetype.emoji)
            .replace("{label}", &archetype.label)
            .replace("{description}", &archetype.description)
            .replace("{core_belief}", &persona.core_belief)
            .replace("{voice_signature}", &persona.voice_signature);
        framing.push('\n');
        framing.push_str(&resources.goal_line.replace("{goal}", goal));
        if let Some(context) = brand_context {
            framing.push('\n');
            framing.push_str(&resources.brand_context_line.replace("{brand_context}", context));
        }
        sections.push(framing);

        // (b) Archetype tone rules
        let mut tone = resources.tone_header.clone();
        for rule in &archetype.tone_rules {
            tone.push_str("\n- ");
            tone.push_str(rule);
        }
        sections.push(tone);

        // (c) Universal writing rules + forbidden patterns
        sections.push(self.writing_section(resources));

        // (d) Format rules
        let format_rule = resources
            .format_rules
            .get(&format)
            .ok_or_else(|| self.missing(format!("format_rules.{format}")))?;
        sections.push(format!(
            "{} {}\n{}",
            resources.format_header, format_rule.label, format_rule.structure
        ));

        // (e) Platform rules
        let platform_rule = resources
            .platform_rules
            .get(&platform)
            .ok_or_else(|| self.missing(format!("platform_rules.{platform}")))?;
        sections.push(format!("{}\n{}", resources.platform_header, platform_rule));

        // (f) Viral architecture
        sections.push(resources.viral_architecture.clone());

        // (g) Worked examples, verbatim from the archetype
        let mut examples = resources.examples_header.clone();
        for post in &archetype.example_posts {
            examples.push_str("\n\n---\n");
            examples.push_str(post);
        }
        sections.push(examples);

        Ok(sections.join("\n\n"))
    }

    /// Wrap a caller-provided system message: append the universal humanizer
    /// rules and the narrow rule fragment for the requesting tool.
    ///
    /// Tool rules are composable fragments in the resource table, so new
    /// tools are added without touching orchestration code.
    pub fn wrap_system_prompt(&self, existing: &str, tool_type: ToolType) -> String {
        let resources = locales::get(self.locale);
        let mut wrapped = existing.trim_end().to_string();
        wrapped.push_str("\n\n");
        wrapped.push_str(&resources.humanizer_rules);
        if let Some(fragment) = resources.tool_rules.get(&tool_type) {
            wrapped.push_str("\n\n");
            wrapped.push_str(fragment);
        }
        wrapped
    }

    fn writing_section(&self, resources: &locales::LocaleResources) -> String {
        let writing = &resources.writing;
        let lexicon = &resources.lexicon;

        let mut section = writing.header.clone();
        for rule in &writing.rules {
            section.push_str("\n- ");
            section.push_str(rule);
        }
        section.push_str("\n\n");
        section.push_str(&writing.never_open_with);
        section.push(' ');
        section.push_str(&lexicon.forbidden_openings.join(", "));
        section.push('\n');
        section.push_str(&writing.never_use_phrases);
        section.push(' ');
        section.push_str(&lexicon.forbidden_phrases.join(", "));
        section.push('\n');
        section.push_str(&writing.never_close_with);
        section.push(' ');
        section.push_str(&lexicon.forbidden_closings.join(", "));
        section
    }

    fn missing(&self, key: String) -> ConfigError {
        ConfigError::MissingResource {
            locale: self.locale.to_string(),
            key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Archetype;

    fn persona() -> PersonaKernel {
        PersonaKernel::new(
            "Kaja fra Fjellkaffe",
            Archetype::Bold,
            "Kaffe skal smake av stedet den kommer fra.",
            "Rett på sak, litt utålmodig, alltid konkret.",
        )
    }

    #[test]
    fn test_composition_is_deterministic() {
        let composer = PromptComposer::new(Locale::Nb);
        let a = composer
            .build_system_prompt(&persona(), Platform::Instagram, PostFormat::Mixed, "salg", None)
            .unwrap();
        let b = composer
            .build_system_prompt(&persona(), Platform::Instagram, PostFormat::Mixed, "salg", None)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sections_appear_in_order() {
        let composer = PromptComposer::new(Locale::Nb);
        let prompt = composer
            .build_system_prompt(
                &persona(),
                Platform::Linkedin,
                PostFormat::Short,
                "rekruttering",
                Some("Lite kaffebrenneri i Bergen."),
            )
            .unwrap();

        let persona_at = prompt.find("Kaja fra Fjellkaffe").unwrap();
        let tone_at = prompt.find("TONE OG HOLDNING:").unwrap();
        let writing_at = prompt.find("SKRIVEREGLER").unwrap();
        let format_at = prompt.find("FORMAT: Kort").unwrap();
        let platform_at = prompt.find("LinkedIn:").unwrap();
        let viral_at = prompt.find("VIRAL ARKITEKTUR:").unwrap();
        let examples_at = prompt.find("EKSEMPLER PÅ STILEN").unwrap();
        assert!(persona_at < tone_at);
        assert!(tone_at < writing_at);
        assert!(writing_at < format_at);
        assert!(format_at < platform_at);
        assert!(platform_at < viral_at);
        assert!(viral_at < examples_at);
        assert!(prompt.contains("Lite kaffebrenneri i Bergen."));
    }

    #[test]
    fn test_forbidden_lists_are_rendered() {
        let composer = PromptComposer::new(Locale::En);
        let prompt = composer
            .build_system_prompt(&persona(), Platform::Facebook, PostFormat::Long, "reach", None)
            .unwrap();
        assert!(prompt.contains("hope this helps"));
        assert!(prompt.contains("game-changer"));
        assert!(prompt.contains("certainly"));
    }

    #[test]
    fn test_examples_are_verbatim() {
        let composer = PromptComposer::new(Locale::En);
        let prompt = composer
            .build_system_prompt(&persona(), Platform::Instagram, PostFormat::Mixed, "sales", None)
            .unwrap();
        let config = crate::archetypes::resolve(Archetype::Bold, Locale::En).unwrap();
        for post in &config.example_posts {
            assert!(prompt.contains(post.as_str()));
        }
    }

    #[test]
    fn test_wrap_appends_humanizer_and_tool_rules() {
        let composer = PromptComposer::new(Locale::Nb);
        let wrapped = composer.wrap_system_prompt("Du er en hjelpsom tekstforfatter.", ToolType::Bio);
        assert!(wrapped.starts_with("Du er en hjelpsom tekstforfatter."));
        assert!(wrapped.contains("MENNESKELIG SPRÅK:"));
        assert!(wrapped.contains("maks 150 tegn"));
    }
}
