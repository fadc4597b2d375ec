//! Error types for the generation core.
//!
//! Two failure classes exist: configuration errors (a persona or locale
//! references a resource that is not in the shipped tables) and provider
//! errors (the model backend call failed at the transport level). Quality
//! shortfalls from the humanness validator are never errors — they only
//! drive retries inside the orchestrator.

use thiserror::Error;

use crate::llms::ProviderError;

/// Errors caused by missing or inconsistent locale resources.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A persona references an archetype with no catalog entry for the
    /// active locale.
    #[error("no archetype config for '{archetype}' in locale '{locale}'")]
    UnknownArchetype { archetype: String, locale: String },

    /// A locale is missing a resource entry that the default locale has.
    #[error("locale '{locale}' is missing resource '{key}'")]
    MissingResource { locale: String, key: String },
}

/// Top-level error type for generation calls.
#[derive(Debug, Error)]
pub enum PostsmithError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
