//! Shared types for the generation core.
//!
//! Everything here is plain data: the chat message shape exchanged with the
//! model backend, the persona kernel supplied by the caller, and the small
//! closed enums (archetype, locale, platform, format, tool type) that key
//! into the locale resource tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chat messages
// ---------------------------------------------------------------------------

/// Role of a single chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a model conversation.
///
/// Serializes to the `{"role": ..., "content": ...}` shape that
/// OpenAI-compatible chat endpoints expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Locale
// ---------------------------------------------------------------------------

/// Supported language/market variants.
///
/// Norwegian Bokmål is the default market; English is the alternate. Every
/// locale-scoped resource table must cover both (see
/// [`crate::locales::verify_coverage`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Norwegian Bokmål.
    #[default]
    Nb,
    /// English.
    En,
}

impl Locale {
    /// All supported locales, default first.
    pub const ALL: &'static [Locale] = &[Locale::Nb, Locale::En];
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Nb => write!(f, "nb"),
            Locale::En => write!(f, "en"),
        }
    }
}

// ---------------------------------------------------------------------------
// Archetype
// ---------------------------------------------------------------------------

/// Enumerated personality templates a persona can be built on.
///
/// Each variant must resolve to an [`crate::archetypes::ArchetypeConfig`]
/// for the active locale; a missing entry is a configuration error, never a
/// silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Bold,
    Humble,
    Funny,
    Expert,
}

impl Archetype {
    pub const ALL: &'static [Archetype] = &[
        Archetype::Bold,
        Archetype::Humble,
        Archetype::Funny,
        Archetype::Expert,
    ];
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Archetype::Bold => write!(f, "bold"),
            Archetype::Humble => write!(f, "humble"),
            Archetype::Funny => write!(f, "funny"),
            Archetype::Expert => write!(f, "expert"),
        }
    }
}

impl FromStr for Archetype {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bold" => Ok(Archetype::Bold),
            "humble" => Ok(Archetype::Humble),
            "funny" => Ok(Archetype::Funny),
            "expert" => Ok(Archetype::Expert),
            other => Err(format!("unknown archetype '{}'", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Platform
// ---------------------------------------------------------------------------

/// Target social platform for a generated post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Instagram,
    Linkedin,
    Facebook,
    TwitterX,
}

impl Platform {
    pub const ALL: &'static [Platform] = &[
        Platform::Instagram,
        Platform::Linkedin,
        Platform::Facebook,
        Platform::TwitterX,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Instagram => write!(f, "instagram"),
            Platform::Linkedin => write!(f, "linkedin"),
            Platform::Facebook => write!(f, "facebook"),
            Platform::TwitterX => write!(f, "twitter_x"),
        }
    }
}

// ---------------------------------------------------------------------------
// Post format
// ---------------------------------------------------------------------------

/// Structural format requested for the post body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    Short,
    Long,
    #[default]
    Mixed,
}

impl PostFormat {
    pub const ALL: &'static [PostFormat] =
        &[PostFormat::Short, PostFormat::Long, PostFormat::Mixed];
}

impl fmt::Display for PostFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostFormat::Short => write!(f, "short"),
            PostFormat::Long => write!(f, "long"),
            PostFormat::Mixed => write!(f, "mixed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tool type
// ---------------------------------------------------------------------------

/// Which narrow content feature is requesting generation.
///
/// Selects the auxiliary rule fragment appended to the system prompt; new
/// tools are added by extending the `tool_rules` table in the locale
/// resources, not by touching the orchestrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Post,
    Bio,
    Comment,
    Hashtags,
    Caption,
    Idea,
}

impl ToolType {
    pub const ALL: &'static [ToolType] = &[
        ToolType::Post,
        ToolType::Bio,
        ToolType::Comment,
        ToolType::Hashtags,
        ToolType::Caption,
        ToolType::Idea,
    ];
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolType::Post => write!(f, "post"),
            ToolType::Bio => write!(f, "bio"),
            ToolType::Comment => write!(f, "comment"),
            ToolType::Hashtags => write!(f, "hashtags"),
            ToolType::Caption => write!(f, "caption"),
            ToolType::Idea => write!(f, "idea"),
        }
    }
}

// ---------------------------------------------------------------------------
// Persona kernel
// ---------------------------------------------------------------------------

/// Minimal identity descriptor driving tone.
///
/// Owned by the caller's brand record; the core only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaKernel {
    /// Display name the prompt addresses the model as.
    pub name: String,
    /// Personality template; must exist in the catalog for the active locale.
    pub archetype: Archetype,
    /// One-sentence conviction the voice keeps coming back to.
    pub core_belief: String,
    /// Short description of how the persona sounds.
    pub voice_signature: String,
}

impl PersonaKernel {
    pub fn new(
        name: impl Into<String>,
        archetype: Archetype,
        core_belief: impl Into<String>,
        voice_signature: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            archetype,
            core_belief: core_belief.into(),
            voice_signature: voice_signature.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = Message::system("hei");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "hei");
    }

    #[test]
    fn test_archetype_roundtrip() {
        for a in Archetype::ALL {
            assert_eq!(a.to_string().parse::<Archetype>().unwrap(), *a);
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Locale::default(), Locale::Nb);
        assert_eq!(Platform::default(), Platform::Instagram);
        assert_eq!(PostFormat::default(), PostFormat::Mixed);
        assert_eq!(ToolType::default(), ToolType::Post);
    }
}
